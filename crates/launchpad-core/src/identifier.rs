//! Notion identifier normalization and parent resolution.
//!
//! Notion ids reach us in three shapes: a bare 32-digit hex string, an
//! already hyphenated UUID, or buried inside a shared link such as
//! `https://www.notion.so/Team-Hub-207b16d857ec809aaac5f0b8d662a61c`.
//! [`normalize`] folds all of them into the canonical `8-4-4-4-12` form.

use std::{fmt, sync::OnceLock};

use regex::Regex;
use serde::Serialize;

use crate::{
    config::NotionConfig,
    error::{Result, SubmissionError},
};

fn hex_run() -> &'static Regex {
    static HEX_RUN: OnceLock<Regex> = OnceLock::new();
    HEX_RUN.get_or_init(|| Regex::new("[0-9a-fA-F]{32}").expect("hex run pattern is valid"))
}

/// A 36-character hyphenated Notion identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalId(String);

impl CanonicalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonicalizes a raw identifier.
///
/// The first run of 32 hex digits anywhere in the input is regrouped into
/// lowercase `8-4-4-4-12` form. Without such a run, a 36-character input
/// containing a hyphen passes through unchanged. Anything else yields
/// `None`.
///
/// # Examples
///
/// ```rust
/// use launchpad_core::identifier::normalize;
///
/// let id = normalize("aa11aa11aa11aa11aa11aa11aa11aa11").unwrap();
/// assert_eq!(id.as_str(), "aa11aa11-aa11-aa11-aa11-aa11aa11aa11");
/// assert_eq!(normalize(id.as_str()), Some(id));
/// assert_eq!(normalize("not-an-id"), None);
/// ```
pub fn normalize(raw: &str) -> Option<CanonicalId> {
    let trimmed = raw.trim();

    if let Some(run) = hex_run().find(trimmed) {
        let hex = run.as_str().to_ascii_lowercase();
        return Some(CanonicalId(format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        )));
    }

    if trimmed.chars().count() == 36 && trimmed.contains('-') {
        return Some(CanonicalId(trimmed.to_string()));
    }

    None
}

/// Container the new page is created under.
///
/// Serializes as `{"database_id": "..."}` or `{"page_id": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Parent {
    #[serde(rename = "database_id")]
    Database(CanonicalId),
    #[serde(rename = "page_id")]
    Page(CanonicalId),
}

impl Parent {
    pub fn id(&self) -> &CanonicalId {
        match self {
            Parent::Database(id) | Parent::Page(id) => id,
        }
    }
}

/// Picks the configured parent, preferring a database over a page.
///
/// # Errors
///
/// Returns `SubmissionError::ConfigurationMissing` when neither id is set
/// and `SubmissionError::InvalidIdentifier` when the chosen id does not
/// normalize.
pub fn resolve_parent(config: &NotionConfig) -> Result<Parent> {
    if let Some(raw) = config.database_id.as_deref() {
        return normalize(raw)
            .map(Parent::Database)
            .ok_or_else(|| SubmissionError::invalid_identifier(raw));
    }
    if let Some(raw) = config.parent_page_id.as_deref() {
        return normalize(raw)
            .map(Parent::Page)
            .ok_or_else(|| SubmissionError::invalid_identifier(raw));
    }
    Err(SubmissionError::missing_parent())
}
