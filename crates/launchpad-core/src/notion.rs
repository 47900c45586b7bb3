//! Outbound Notion API access.
//!
//! [`NotionApi`] is the seam the submission pipeline talks to;
//! [`NotionClient`] is the reqwest-backed implementation that issues
//! `POST /v1/pages`.

use std::future::Future;

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    config::NotionConfig,
    error::GENERIC_UPSTREAM_MESSAGE,
    models::{CreatePageRequest, CreatedPage},
};

/// API version pinned in the `Notion-Version` header.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Failure of a single Notion API call.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Notion answered with a non-success status
    #[error("Notion API returned HTTP {status}: {message}")]
    Http {
        status: u16,
        code: Option<String>,
        message: String,
    },
    /// The request never produced a usable response
    #[error("Notion request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Error object Notion returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    id: String,
    #[serde(default)]
    url: String,
}

impl ApiError {
    /// Builds an HTTP error from a raw response body.
    ///
    /// A body that is not a Notion error object falls back to the generic
    /// message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorResponse>(body).ok();
        let (code, message) = match parsed {
            Some(ErrorResponse { code, message }) => (
                code,
                message.unwrap_or_else(|| GENERIC_UPSTREAM_MESSAGE.to_string()),
            ),
            None => (None, GENERIC_UPSTREAM_MESSAGE.to_string()),
        };
        Self::Http {
            status,
            code,
            message,
        }
    }

    /// Upstream HTTP status, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Notion error code such as `unauthorized` or `validation_error`.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Http { code, .. } => code.as_deref(),
            Self::Transport(_) => None,
        }
    }

    /// Human-readable upstream message.
    pub fn message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            Self::Transport(e) => e.to_string(),
        }
    }
}

/// Creates pages in Notion.
pub trait NotionApi: Send + Sync {
    /// Issues exactly one page-creation call.
    fn create_page(
        &self,
        config: &NotionConfig,
        request: &CreatePageRequest<'_>,
    ) -> impl Future<Output = Result<CreatedPage, ApiError>> + Send;
}

/// HTTP client for the public Notion API.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: Client,
}

impl NotionClient {
    /// Creates a client with the transport's default timeouts.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the TLS backend cannot initialize.
    pub fn new() -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("launchpad/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

impl NotionApi for NotionClient {
    async fn create_page(
        &self,
        config: &NotionConfig,
        request: &CreatePageRequest<'_>,
    ) -> Result<CreatedPage, ApiError> {
        let url = format!("{}/v1/pages", config.api_base_url.trim_end_matches('/'));
        debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&config.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        let page: PageResponse = response.json().await?;
        Ok(CreatedPage {
            page_id: page.id,
            page_url: page.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_is_parsed() {
        let error = ApiError::from_response(
            401,
            r#"{"object":"error","status":401,"code":"unauthorized","message":"API token is invalid."}"#,
        );
        assert_eq!(error.status(), Some(401));
        assert_eq!(error.code(), Some("unauthorized"));
        assert_eq!(error.message(), "API token is invalid.");
    }

    #[test]
    fn test_unreadable_error_body_falls_back() {
        let error = ApiError::from_response(503, "<html>Service Unavailable</html>");
        assert_eq!(error.status(), Some(503));
        assert_eq!(error.code(), None);
        assert_eq!(error.message(), GENERIC_UPSTREAM_MESSAGE);
    }
}
