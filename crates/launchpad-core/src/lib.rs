//! Core library for the Launchpad project workspace generator.
//!
//! Launchpad turns a handful of wizard answers (name, description, stage,
//! team size and tools) into a fully structured Notion page, and creates
//! that page through the Notion API.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): wizard answers, the tool catalog, and the
//!   Notion block tree they are turned into
//! - **Template** ([`template`]): the pure, deterministic page builder
//! - **Identifiers** ([`identifier`]): parent id normalization
//! - **Submission** ([`submission`]): configuration, Notion call and error
//!   classification, behind the [`NotionApi`] seam
//! - **Wizard** ([`wizard`]) and **Dashboard** ([`dashboard`]): the
//!   interactive flow and the read-only echo
//! - **Display Wrappers** ([`display`]): markdown renderings for terminals
//!   and HTTP responses
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use launchpad_core::{build_payload, normalize, ProjectAnswers, ProjectStage};
//!
//! let answers = ProjectAnswers {
//!     project_name: "Apollo".to_string(),
//!     project_stage: Some(ProjectStage::Mvp),
//!     tools: vec!["github".to_string(), "slack".to_string()],
//!     ..ProjectAnswers::default()
//! };
//!
//! let payload = build_payload(&answers, date(2024, 5, 1));
//! assert_eq!(payload.title(), "Apollo");
//!
//! let id = normalize("https://www.notion.so/Plan-1234567890abcdef1234567890ABCDEF").unwrap();
//! assert_eq!(id.as_str(), "12345678-90ab-cdef-1234-567890abcdef");
//! ```

pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod identifier;
pub mod models;
pub mod notion;
pub mod submission;
pub mod template;
pub mod wizard;

// Re-export commonly used types
pub use config::{ConfigSource, NotionConfig, ProcessEnv};
pub use dashboard::DashboardQuery;
pub use display::{DashboardView, PayloadPreview, SubmissionFailure, ToolCatalog};
pub use error::{ErrorBody, Result, SubmissionError};
pub use identifier::{normalize, resolve_parent, CanonicalId, Parent};
pub use models::{
    ContentBlock, CreatedPage, NotionPayload, ProjectAnswers, ProjectStage, TeamSize, TextRun,
    ToolDescriptor, TOOL_CATALOG,
};
pub use notion::{ApiError, NotionApi, NotionClient};
pub use submission::{parse_answers, Submitter};
pub use template::{build_payload, build_payload_today};
pub use wizard::{FieldError, Wizard, WizardStep};
