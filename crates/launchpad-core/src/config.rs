//! Notion configuration read from the environment.
//!
//! Configuration is loaded fresh for every submission and never cached, so
//! an operator can fix a missing variable without restarting the server.

use std::collections::HashMap;

use crate::error::{Result, SubmissionError, ENV_API_KEY, ENV_PARENT_EITHER};

/// Environment variable naming the parent page.
pub const ENV_PARENT_PAGE_ID: &str = "NOTION_PARENT_PAGE_ID";

/// Environment variable naming the parent database.
pub const ENV_DATABASE_ID: &str = "NOTION_DATABASE_ID";

/// Environment variable overriding the API origin.
pub const ENV_API_BASE_URL: &str = "NOTION_API_BASE_URL";

/// Public Notion API origin.
pub const DEFAULT_API_BASE_URL: &str = "https://api.notion.com";

/// Source of configuration values, keyed by environment variable name.
pub trait ConfigSource: Send + Sync {
    /// Returns the value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Validated Notion settings for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotionConfig {
    pub api_key: String,
    pub parent_page_id: Option<String>,
    pub database_id: Option<String>,
    pub api_base_url: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            parent_page_id: None,
            database_id: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

fn non_empty(source: &dyn ConfigSource, key: &str) -> Option<String> {
    source.var(key).filter(|value| !value.trim().is_empty())
}

impl NotionConfig {
    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::ConfigurationMissing` listing every absent
    /// variable when the API key or both parent ids are unset.
    pub fn load(source: &dyn ConfigSource) -> Result<Self> {
        let api_key = non_empty(source, ENV_API_KEY);
        let parent_page_id = non_empty(source, ENV_PARENT_PAGE_ID);
        let database_id = non_empty(source, ENV_DATABASE_ID);

        let mut missing = Vec::new();
        if api_key.is_none() {
            missing.push(ENV_API_KEY.to_string());
        }
        if parent_page_id.is_none() && database_id.is_none() {
            missing.push(ENV_PARENT_EITHER.to_string());
        }

        match api_key {
            Some(api_key) if missing.is_empty() => Ok(Self {
                api_key,
                parent_page_id,
                database_id,
                api_base_url: non_empty(source, ENV_API_BASE_URL)
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            }),
            _ => Err(SubmissionError::ConfigurationMissing { missing }),
        }
    }
}
