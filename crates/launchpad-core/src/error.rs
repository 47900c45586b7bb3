//! Error types for the launchpad library.

use serde::Serialize;
use thiserror::Error;

/// Message surfaced when the upstream call fails for a reason we cannot
/// attribute more precisely.
pub const GENERIC_UPSTREAM_MESSAGE: &str = "Failed to create Notion page.";

/// Environment variable naming the Notion integration token.
pub const ENV_API_KEY: &str = "NOTION_API_KEY";

/// Label reported when neither parent identifier variable is set.
pub const ENV_PARENT_EITHER: &str = "NOTION_PARENT_PAGE_ID or NOTION_DATABASE_ID";

/// Failure taxonomy of a single submission attempt.
///
/// Every variant is terminal for the attempt; nothing is retried. Each maps
/// to an HTTP status via [`SubmissionError::status_code`] and to a stable
/// machine-checkable tag via [`SubmissionError::category`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Request body was not JSON, not an object, or did not fit the answers
    /// shape
    #[error("{message}")]
    MalformedRequest { message: String },
    /// Required environment configuration is absent
    #[error("Missing Notion configuration.")]
    ConfigurationMissing { missing: Vec<String> },
    /// A parent identifier could not be normalized or was rejected upstream
    #[error("{message}")]
    InvalidIdentifier { raw: String, message: String },
    /// Notion refused the integration token
    #[error("Notion rejected the integration token.")]
    Unauthorized { details: Option<String> },
    /// Any other upstream or transport failure
    #[error("Failed to create Notion page.")]
    UpstreamFailure { status: u16, details: Option<String> },
}

/// Builder for upstream failures with optional detail text.
pub struct UpstreamErrorBuilder {
    status: u16,
}

impl UpstreamErrorBuilder {
    /// Create a builder; a missing upstream status becomes 502.
    pub fn new(status: Option<u16>) -> Self {
        Self {
            status: status.unwrap_or(502),
        }
    }

    /// Build the error with the given details.
    pub fn with_details(self, details: impl Into<String>) -> SubmissionError {
        SubmissionError::UpstreamFailure {
            status: self.status,
            details: Some(details.into()),
        }
    }

    /// Build the error without details.
    pub fn build(self) -> SubmissionError {
        SubmissionError::UpstreamFailure {
            status: self.status,
            details: None,
        }
    }
}

impl SubmissionError {
    /// Creates a malformed-request error with a caller-facing message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    /// Creates an invalid-identifier error for a configured value that did
    /// not normalize.
    pub fn invalid_identifier(raw: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            raw: raw.into(),
            message: "Invalid Notion identifier format.".to_string(),
        }
    }

    /// Creates the configuration error raised when no parent id is set.
    pub fn missing_parent() -> Self {
        Self::ConfigurationMissing {
            missing: vec![ENV_PARENT_EITHER.to_string()],
        }
    }

    /// Creates a builder for upstream failures.
    pub fn upstream(status: Option<u16>) -> UpstreamErrorBuilder {
        UpstreamErrorBuilder::new(status)
    }

    /// HTTP status the submission endpoint answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MalformedRequest { .. } | Self::InvalidIdentifier { .. } => 400,
            Self::ConfigurationMissing { .. } => 500,
            Self::Unauthorized { .. } => 401,
            Self::UpstreamFailure { status, .. } => *status,
        }
    }

    /// Stable snake_case tag for programmatic checks.
    pub fn category(&self) -> &'static str {
        match self {
            Self::MalformedRequest { .. } => "malformed_request",
            Self::ConfigurationMissing { .. } => "configuration_missing",
            Self::InvalidIdentifier { .. } => "invalid_identifier",
            Self::Unauthorized { .. } => "unauthorized",
            Self::UpstreamFailure { .. } => "upstream_failure",
        }
    }

    /// Diagnostic text that is only exposed when details are enabled.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::InvalidIdentifier { raw, .. } => Some(raw.as_str()),
            Self::Unauthorized { details } | Self::UpstreamFailure { details, .. } => {
                details.as_deref()
            }
            Self::MalformedRequest { .. } | Self::ConfigurationMissing { .. } => None,
        }
    }

    /// Converts the error into the JSON body returned to the wizard.
    pub fn to_body(&self, include_details: bool) -> ErrorBody {
        let missing_env = match self {
            Self::ConfigurationMissing { missing } => Some(missing.clone()),
            _ => None,
        };
        ErrorBody {
            error: self.to_string(),
            category: self.category(),
            missing_env,
            details: include_details
                .then(|| self.details().map(str::to_string))
                .flatten(),
        }
    }
}

/// Wire shape of a failed submission.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    pub category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_env: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Result type alias for submission operations
pub type Result<T> = std::result::Result<T, SubmissionError>;
