//! Data models for the wizard answers and the generated page.
//!
//! Input side: [`ProjectAnswers`] with its [`ProjectStage`] and
//! [`TeamSize`] fields, checked against the static [`TOOL_CATALOG`].
//!
//! Output side: [`NotionPayload`], an ordered list of [`ContentBlock`]s made
//! of [`TextRun`]s. Display implementations for the output live in
//! [`crate::display`].

pub mod answers;
pub mod block;
pub mod payload;
pub mod stage;
pub mod tool;


/// Title used whenever the project name is blank.
pub const UNTITLED_PROJECT: &str = "Untitled project";

pub use answers::{ProjectAnswers, TeamSize};
pub use block::{Color, ContentBlock, HeadingLevel, TextRun};
pub use payload::{CreatePageRequest, CreatedPage, NotionPayload, PageProperties};
pub use stage::ProjectStage;
pub use tool::{ResolvedTool, ToolDescriptor, TOOL_CATALOG};
