//! Compiled-in tool catalog.

use serde::Serialize;

/// Static catalog entry for an integration the wizard can connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Default landing URL; empty when the tool has none
    pub url_template: &'static str,
}

/// Every tool the wizard offers, in display order.
pub const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        id: "notion",
        name: "Notion",
        description: "Master workspace with docs, tasks, and knowledge base in sync.",
        url_template: "https://www.notion.so/",
    },
    ToolDescriptor {
        id: "discord",
        name: "Discord",
        description: "Async and live collaboration through channels and voice rooms.",
        url_template: "https://discord.gg/",
    },
    ToolDescriptor {
        id: "github",
        name: "GitHub",
        description: "Issues, PRs, and integrations powering your release pipeline.",
        url_template: "https://github.com/",
    },
    ToolDescriptor {
        id: "figma",
        name: "Figma",
        description: "Design systems, prototypes, and feedback in one canvas.",
        url_template: "https://www.figma.com/",
    },
    ToolDescriptor {
        id: "linear",
        name: "Linear",
        description: "High-velocity issue tracking with opinionated workflows.",
        url_template: "https://linear.app/",
    },
    ToolDescriptor {
        id: "slack",
        name: "Slack",
        description: "Context-rich messaging and automations for fast-moving teams.",
        url_template: "https://slack.com/",
    },
];

impl ToolDescriptor {
    /// Looks up a catalog entry by id.
    pub fn find(id: &str) -> Option<&'static ToolDescriptor> {
        TOOL_CATALOG.iter().find(|tool| tool.id == id)
    }

    /// Default URL, if the catalog defines one.
    pub fn default_url(&self) -> Option<&'static str> {
        Some(self.url_template).filter(|url| !url.is_empty())
    }
}

/// A selected catalog tool with its link resolved for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: Option<String>,
}
