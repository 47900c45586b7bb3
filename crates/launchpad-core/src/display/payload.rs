//! Markdown preview of a generated page.

use std::fmt;

use crate::models::{ContentBlock, HeadingLevel, NotionPayload, TextRun};

/// Wrapper that renders a [`NotionPayload`] as markdown, approximating how
/// the page will look in Notion.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use launchpad_core::{build_payload, display::PayloadPreview, ProjectAnswers};
///
/// let payload = build_payload(&ProjectAnswers::default(), date(2024, 1, 2));
/// let markdown = PayloadPreview(&payload).to_string();
/// assert!(markdown.starts_with("# Untitled project"));
/// assert!(markdown.contains("- [ ] Document 3 target personas"));
/// ```
pub struct PayloadPreview<'a>(pub &'a NotionPayload);

struct Runs<'a>(&'a [TextRun]);

impl fmt::Display for Runs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in self.0 {
            let mut text = run.content.clone();
            if run.italic {
                text = format!("*{text}*");
            }
            if run.bold {
                text = format!("**{text}**");
            }
            match &run.link {
                // A run whose text is its own URL renders as a bare link.
                Some(url) if *url == run.content => write!(f, "<{url}>")?,
                Some(url) => write!(f, "[{text}]({url})")?,
                None => write!(f, "{text}")?,
            }
        }
        Ok(())
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, block: &ContentBlock, indent: &str) -> fmt::Result {
    let runs = Runs(block.rich_text());
    match block {
        ContentBlock::Divider => writeln!(f, "{indent}---"),
        ContentBlock::Heading { level, .. } => {
            let hashes = match level {
                HeadingLevel::One => "#",
                HeadingLevel::Two => "##",
                HeadingLevel::Three => "###",
            };
            writeln!(f, "{indent}{hashes} {}", block.plain_text())
        }
        ContentBlock::Callout { .. } | ContentBlock::Quote { .. } => {
            writeln!(f, "{indent}> {runs}")
        }
        ContentBlock::Paragraph { .. } => writeln!(f, "{indent}{runs}"),
        ContentBlock::BulletedItem { .. } => writeln!(f, "{indent}- {runs}"),
        ContentBlock::ToDo { checked, .. } => {
            let mark = if *checked { "x" } else { " " };
            writeln!(f, "{indent}- [{mark}] {runs}")
        }
        ContentBlock::Toggle { children, .. } => {
            writeln!(f, "{indent}▸ {runs}")?;
            let nested = format!("{indent}  ");
            for child in children {
                write_block(f, child, &nested)?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for PayloadPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.0.title())?;
        writeln!(f)?;
        for block in &self.0.children {
            write_block(f, block, "")?;
        }
        Ok(())
    }
}
