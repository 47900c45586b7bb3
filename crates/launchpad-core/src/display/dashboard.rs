//! Markdown rendering of the dashboard echo.

use std::fmt;

use crate::{dashboard::DashboardQuery, models::UNTITLED_PROJECT};

/// Wrapper that renders a [`DashboardQuery`] as markdown.
///
/// An empty query renders a "No project data yet" placeholder pointing back
/// to the generator.
pub struct DashboardView<'a>(pub &'a DashboardQuery);

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = self.0;

        if query.is_empty() {
            writeln!(f, "# No project data yet")?;
            writeln!(f)?;
            return writeln!(
                f,
                "Generate a workspace first so we can tailor the dashboard with your project details."
            );
        }

        let heading = if query.project_name.is_empty() {
            "Workspace ready"
        } else {
            &query.project_name
        };
        writeln!(f, "# {heading}")?;
        writeln!(f)?;
        match query.stage {
            Some(stage) => writeln!(
                f,
                "You are currently in the {} stage. Focus on the key rituals below to keep the team aligned.",
                stage.label().to_lowercase()
            )?,
            None => writeln!(
                f,
                "Keep momentum going with the quick links tailored to your selected tools."
            )?,
        }
        writeln!(f)?;

        writeln!(f, "## Project overview")?;
        writeln!(f)?;
        let name = if query.project_name.is_empty() {
            UNTITLED_PROJECT
        } else {
            &query.project_name
        };
        writeln!(f, "- **Name:** {name}")?;
        writeln!(
            f,
            "- **Stage:** {}",
            query.stage.map_or("Not specified", |s| s.label())
        )?;
        writeln!(
            f,
            "- **Team size:** {}",
            query
                .team_size
                .label()
                .unwrap_or_else(|| "Not specified".to_string())
        )?;
        if query.description.is_empty() {
            writeln!(f, "- **Description:** No description provided.")?;
        } else {
            writeln!(f, "- **Description:** {}", query.description)?;
        }
        writeln!(f)?;

        writeln!(f, "## Tool shortcuts ({} selected)", query.tools.len())?;
        writeln!(f)?;
        if query.tools.is_empty() {
            return writeln!(
                f,
                "Tools will show up here once you include them in the generator flow."
            );
        }
        for tool in &query.tools {
            writeln!(f, "- **{}**: {}", tool.name, tool.description)?;
            writeln!(f, "  [Open {}]({})", tool.name, tool.url_template)?;
        }
        Ok(())
    }
}
