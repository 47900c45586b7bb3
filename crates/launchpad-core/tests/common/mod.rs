use std::collections::HashMap;

use launchpad_core::{
    config::{ENV_API_BASE_URL, ENV_DATABASE_ID, ENV_PARENT_PAGE_ID},
    error::ENV_API_KEY,
    NotionClient, Submitter,
};
use wiremock::MockServer;

pub const API_KEY: &str = "secret_test_key";
pub const PAGE_ID: &str = "1234567890abcdef1234567890abcdef";
pub const DATABASE_ID: &str = "fedcba0987654321fedcba0987654321";

/// Environment map pointing at a mock Notion server.
pub fn env_for(server: &MockServer, parent_page: Option<&str>, database: Option<&str>) -> HashMap<String, String> {
    let mut env = HashMap::new();
    env.insert(ENV_API_KEY.to_string(), API_KEY.to_string());
    env.insert(ENV_API_BASE_URL.to_string(), server.uri());
    if let Some(id) = parent_page {
        env.insert(ENV_PARENT_PAGE_ID.to_string(), id.to_string());
    }
    if let Some(id) = database {
        env.insert(ENV_DATABASE_ID.to_string(), id.to_string());
    }
    env
}

/// Helper function to create a submitter backed by the real HTTP client
pub fn create_test_submitter(
    env: HashMap<String, String>,
) -> Submitter<NotionClient, HashMap<String, String>> {
    let client = NotionClient::new().expect("Failed to create Notion client");
    Submitter::new(client, env)
}
