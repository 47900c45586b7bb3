//! Terminal rendering of the markdown produced by the display wrappers.
//!
//! Rich output goes through termimad; `--no-color` prints the markdown
//! untouched so it can be piped or pasted.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{
    crossterm::style::{Attribute, Color},
    MadSkin, StyledChar,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.headers[0].compound_style.add_attr(Attribute::Bold);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.bullet = StyledChar::from_fg_char(Color::Cyan, '•');
        skin.quote_mark.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Formats markdown for the terminal without printing it.
    pub fn format(&self, markdown: &str) -> String {
        if self.rich_enabled {
            self.skin.term_text(markdown).to_string()
        } else {
            markdown.to_string()
        }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(self.format(markdown).as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write to stdout")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
