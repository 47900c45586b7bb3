//! Typed content blocks and rich-text runs.
//!
//! [`ContentBlock`] is a closed sum type over the block kinds the page
//! template emits. Its `Serialize` impl produces the exact JSON shape the
//! Notion API expects:
//!
//! ```json
//! {"object": "block", "type": "heading_2", "heading_2": {"rich_text": [...]}}
//! ```

use serde::{ser::SerializeMap, Serialize, Serializer};

/// Notion color token for text and block backgrounds.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Blue,
    GrayBackground,
    PurpleBackground,
    YellowBackground,
}

/// A span of styled, optionally linked text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextRun {
    pub content: String,
    pub link: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
}

impl TextRun {
    /// Unstyled text.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Attaches a hyperlink; `None` leaves the run unlinked.
    pub fn linked(mut self, url: Option<impl Into<String>>) -> Self {
        self.link = url.map(Into::into);
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

#[derive(Serialize)]
struct LinkWire<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct TextWire<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<LinkWire<'a>>,
}

#[derive(Serialize)]
struct AnnotationsWire {
    bold: bool,
    italic: bool,
    strikethrough: bool,
    underline: bool,
    code: bool,
    color: Color,
}

impl Serialize for TextRun {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", "text")?;
        map.serialize_entry(
            "text",
            &TextWire {
                content: &self.content,
                link: self.link.as_deref().map(|url| LinkWire { url }),
            },
        )?;
        map.serialize_entry(
            "annotations",
            &AnnotationsWire {
                bold: self.bold,
                italic: self.italic,
                strikethrough: false,
                underline: false,
                code: false,
                color: self.color,
            },
        )?;
        map.end()
    }
}

/// Heading depth supported by Notion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

/// One node of the page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Divider,
    Callout {
        rich_text: Vec<TextRun>,
        color: Color,
    },
    Heading {
        level: HeadingLevel,
        rich_text: Vec<TextRun>,
    },
    Paragraph {
        rich_text: Vec<TextRun>,
    },
    BulletedItem {
        rich_text: Vec<TextRun>,
    },
    ToDo {
        rich_text: Vec<TextRun>,
        checked: bool,
    },
    Quote {
        rich_text: Vec<TextRun>,
    },
    /// The only block kind that nests other blocks
    Toggle {
        rich_text: Vec<TextRun>,
        children: Vec<ContentBlock>,
    },
}

impl ContentBlock {
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            rich_text: vec![TextRun::plain(text).bold()],
        }
    }

    pub fn paragraph(rich_text: Vec<TextRun>) -> Self {
        Self::Paragraph { rich_text }
    }

    pub fn bulleted(rich_text: Vec<TextRun>) -> Self {
        Self::BulletedItem { rich_text }
    }

    /// Unchecked checklist item with plain text.
    pub fn to_do(text: impl Into<String>) -> Self {
        Self::ToDo {
            rich_text: vec![TextRun::plain(text)],
            checked: false,
        }
    }

    pub fn callout(rich_text: Vec<TextRun>, color: Color) -> Self {
        Self::Callout { rich_text, color }
    }

    /// Notion `type` tag of the block.
    pub fn block_type(&self) -> &'static str {
        match self {
            Self::Divider => "divider",
            Self::Callout { .. } => "callout",
            Self::Heading {
                level: HeadingLevel::One,
                ..
            } => "heading_1",
            Self::Heading {
                level: HeadingLevel::Two,
                ..
            } => "heading_2",
            Self::Heading {
                level: HeadingLevel::Three,
                ..
            } => "heading_3",
            Self::Paragraph { .. } => "paragraph",
            Self::BulletedItem { .. } => "bulleted_list_item",
            Self::ToDo { .. } => "to_do",
            Self::Quote { .. } => "quote",
            Self::Toggle { .. } => "toggle",
        }
    }

    /// Text runs of the block; empty for dividers.
    pub fn rich_text(&self) -> &[TextRun] {
        match self {
            Self::Divider => &[],
            Self::Callout { rich_text, .. }
            | Self::Heading { rich_text, .. }
            | Self::Paragraph { rich_text }
            | Self::BulletedItem { rich_text }
            | Self::ToDo { rich_text, .. }
            | Self::Quote { rich_text }
            | Self::Toggle { rich_text, .. } => rich_text,
        }
    }

    /// Concatenated content of all text runs.
    pub fn plain_text(&self) -> String {
        self.rich_text()
            .iter()
            .map(|run| run.content.as_str())
            .collect()
    }

    /// Nested blocks; empty for everything but toggles.
    pub fn children(&self) -> &[ContentBlock] {
        match self {
            Self::Toggle { children, .. } => children,
            _ => &[],
        }
    }
}

#[derive(Serialize)]
struct EmptyBody {}

#[derive(Serialize)]
struct TextBody<'a> {
    rich_text: &'a [TextRun],
    color: Color,
}

#[derive(Serialize)]
struct HeadingBody<'a> {
    rich_text: &'a [TextRun],
    is_toggleable: bool,
    color: Color,
}

#[derive(Serialize)]
struct ToDoBody<'a> {
    checked: bool,
    color: Color,
    rich_text: &'a [TextRun],
}

#[derive(Serialize)]
struct ToggleBody<'a> {
    rich_text: &'a [TextRun],
    color: Color,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    children: &'a [ContentBlock],
}

impl Serialize for ContentBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.block_type();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", kind)?;
        match self {
            Self::Divider => map.serialize_entry(kind, &EmptyBody {})?,
            Self::Callout { rich_text, color } => map.serialize_entry(
                kind,
                &TextBody {
                    rich_text,
                    color: *color,
                },
            )?,
            Self::Heading { rich_text, .. } => map.serialize_entry(
                kind,
                &HeadingBody {
                    rich_text,
                    is_toggleable: false,
                    color: Color::Default,
                },
            )?,
            Self::Paragraph { rich_text }
            | Self::BulletedItem { rich_text }
            | Self::Quote { rich_text } => map.serialize_entry(
                kind,
                &TextBody {
                    rich_text,
                    color: Color::Default,
                },
            )?,
            Self::ToDo { rich_text, checked } => map.serialize_entry(
                kind,
                &ToDoBody {
                    checked: *checked,
                    color: Color::Default,
                    rich_text,
                },
            )?,
            Self::Toggle {
                rich_text,
                children,
            } => map.serialize_entry(
                kind,
                &ToggleBody {
                    rich_text,
                    color: Color::Default,
                    children,
                },
            )?,
        }
        map.end()
    }
}
