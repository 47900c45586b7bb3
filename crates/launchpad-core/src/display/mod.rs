//! Display wrappers producing markdown for terminals and HTTP responses.
//!
//! Domain types stay free of presentation concerns; each wrapper here
//! borrows a model and implements [`std::fmt::Display`]:
//!
//! - [`payload`]: [`PayloadPreview`] for a generated page
//! - [`dashboard`]: [`DashboardView`] for the read-only echo
//! - [`results`]: submission outcomes and the tool catalog

pub mod dashboard;
pub mod payload;
pub mod results;

pub use dashboard::DashboardView;
pub use payload::PayloadPreview;
pub use results::{SubmissionFailure, ToolCatalog};
