//! Result and catalog display types.

use std::fmt;

use crate::{
    error::SubmissionError,
    models::{CreatedPage, ToolDescriptor},
};

impl fmt::Display for CreatedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created Notion page with ID: {}", self.page_id)?;
        if !self.page_url.is_empty() {
            writeln!(f)?;
            writeln!(f, "Open it at <{}>", self.page_url)?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying a failed submission with its category and,
/// optionally, upstream details.
pub struct SubmissionFailure<'a> {
    pub error: &'a SubmissionError,
    pub include_details: bool,
}

impl<'a> SubmissionFailure<'a> {
    pub fn new(error: &'a SubmissionError) -> Self {
        Self {
            error,
            include_details: false,
        }
    }

    /// Show upstream details as well.
    pub fn with_details(mut self, include_details: bool) -> Self {
        self.include_details = include_details;
        self
    }
}

impl fmt::Display for SubmissionFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.error, self.error.category())?;
        if let SubmissionError::ConfigurationMissing { missing } = self.error {
            for variable in missing {
                writeln!(f, "- missing `{variable}`")?;
            }
        }
        if self.include_details {
            if let Some(details) = self.error.details() {
                writeln!(f)?;
                writeln!(f, "Details: {details}")?;
            }
        }
        Ok(())
    }
}

/// Wrapper type for listing the tool catalog.
pub struct ToolCatalog<'a>(pub &'a [ToolDescriptor]);

impl fmt::Display for ToolCatalog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Available tools")?;
        writeln!(f)?;
        for tool in self.0 {
            writeln!(f, "- **{}** (`{}`): {}", tool.name, tool.id, tool.description)?;
        }
        Ok(())
    }
}
