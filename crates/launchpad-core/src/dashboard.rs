//! Read-only dashboard echo built from URL query parameters.
//!
//! Nothing is persisted: the dashboard is a formatting view over whatever
//! the query string carries. Rendering lives in
//! [`crate::display::DashboardView`].

use url::form_urlencoded;

use crate::models::{ProjectStage, TeamSize, ToolDescriptor};

/// Project state decoded from `projectName`, `description`,
/// `projectStage`, `teamSize` and `tools` query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardQuery {
    pub project_name: String,
    pub description: String,
    pub stage: Option<ProjectStage>,
    pub team_size: TeamSize,
    pub tools: Vec<&'static ToolDescriptor>,
}

impl DashboardQuery {
    /// Parses a query string, with or without the leading `?`.
    ///
    /// `tools` may repeat and each value may hold comma-joined ids. Ids are
    /// trimmed and deduplicated; unknown ids are dropped.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = Self::default();
        let mut tool_ids: Vec<String> = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "projectName" => parsed.project_name = value.trim().to_string(),
                "description" => parsed.description = value.trim().to_string(),
                "projectStage" => parsed.stage = ProjectStage::from_id(&value),
                "teamSize" => parsed.team_size = TeamSize::new(&*value),
                "tools" => {
                    for id in value.split(',').map(str::trim).filter(|id| !id.is_empty()) {
                        if !tool_ids.iter().any(|seen| seen == id) {
                            tool_ids.push(id.to_string());
                        }
                    }
                }
                _ => {}
            }
        }

        parsed.tools = tool_ids
            .iter()
            .filter_map(|id| ToolDescriptor::find(id))
            .collect();
        parsed
    }

    /// True when the query carries nothing worth showing.
    pub fn is_empty(&self) -> bool {
        self.project_name.is_empty()
            && self.description.is_empty()
            && self.stage.is_none()
            && self.team_size.is_empty()
            && self.tools.is_empty()
    }
}
