//! Page payload sent to Notion and the result it returns.

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use super::ContentBlock;
use crate::identifier::Parent;

/// Page properties; the template only sets the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageProperties {
    pub title: String,
}

#[derive(Serialize)]
struct TitleText<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct TitleRun<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: TitleText<'a>,
}

#[derive(Serialize)]
struct TitleProperty<'a> {
    title: [TitleRun<'a>; 1],
}

impl Serialize for PageProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            "title",
            &TitleProperty {
                title: [TitleRun {
                    kind: "text",
                    text: TitleText {
                        content: &self.title,
                    },
                }],
            },
        )?;
        map.end()
    }
}

/// Properties plus ordered top-level blocks of the generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotionPayload {
    pub properties: PageProperties,
    pub children: Vec<ContentBlock>,
}

impl NotionPayload {
    pub fn title(&self) -> &str {
        &self.properties.title
    }
}

/// Body of `POST /v1/pages`.
#[derive(Debug, Serialize)]
pub struct CreatePageRequest<'a> {
    pub parent: &'a Parent,
    #[serde(flatten)]
    pub payload: &'a NotionPayload,
}

impl<'a> CreatePageRequest<'a> {
    pub fn new(parent: &'a Parent, payload: &'a NotionPayload) -> Self {
        Self { parent, payload }
    }
}

/// Identity of a page Notion created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPage {
    pub page_id: String,
    pub page_url: String,
}
