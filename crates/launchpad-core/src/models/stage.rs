//! Project stage enumeration and its per-stage lookup tables.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of project stages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStage {
    /// Validating the problem
    #[default]
    Discovery,

    /// Building the first release
    Mvp,

    /// Rolling out to users
    Launch,

    /// Growing an established product
    Scale,
}

impl ProjectStage {
    /// All stages in wizard order.
    pub const ALL: [ProjectStage; 4] = [
        ProjectStage::Discovery,
        ProjectStage::Mvp,
        ProjectStage::Launch,
        ProjectStage::Scale,
    ];

    /// Identifier used on the wire and in query strings.
    pub fn id(&self) -> &'static str {
        match self {
            ProjectStage::Discovery => "discovery",
            ProjectStage::Mvp => "mvp",
            ProjectStage::Launch => "launch",
            ProjectStage::Scale => "scale",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStage::Discovery => "Discovery",
            ProjectStage::Mvp => "MVP",
            ProjectStage::Launch => "Launch",
            ProjectStage::Scale => "Scale",
        }
    }

    /// One-sentence focus message shown in the stage callout.
    pub fn focus(&self) -> &'static str {
        match self {
            ProjectStage::Discovery => {
                "Validate the problem and align on the riskiest assumptions."
            }
            ProjectStage::Mvp => "Ship the smallest lovable solution and gather feedback fast.",
            ProjectStage::Launch => "Coordinate the rollout plan and keep every touchpoint ready.",
            ProjectStage::Scale => {
                "Automate handoffs and track the metrics that show healthy growth."
            }
        }
    }

    /// Checklist seeded into the "Stage playbook" section.
    pub fn playbook(&self) -> &'static [&'static str; 3] {
        match self {
            ProjectStage::Discovery => &[
                "Document 3 target personas and their pain points.",
                "Run 5 customer interviews and log insights in Notion.",
                "Map the problem statement and success metrics with the team.",
            ],
            ProjectStage::Mvp => &[
                "Finalize scope for the first release and assign owners.",
                "Set up a weekly build review ritual.",
                "Capture blockers in a shared task list and review daily.",
            ],
            ProjectStage::Launch => &[
                "Publish launch checklist and due dates.",
                "Draft go-to-market messaging and review with marketing.",
                "Schedule a launch retro to capture learnings.",
            ],
            ProjectStage::Scale => &[
                "Review performance dashboards with the team every Monday.",
                "Capture automation ideas and backlog them for triage.",
                "Document new rituals to keep quality and velocity aligned.",
            ],
        }
    }

    /// Parses a stage id, mapping blank or unknown values to `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }
}

impl FromStr for ProjectStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "discovery" => Ok(ProjectStage::Discovery),
            "mvp" => Ok(ProjectStage::Mvp),
            "launch" => Ok(ProjectStage::Launch),
            "scale" => Ok(ProjectStage::Scale),
            _ => Err(format!("Invalid project stage: {s}")),
        }
    }
}

impl fmt::Display for ProjectStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Serde adapter for the optional `projectStage` field: blank and unknown
/// ids decode to `None` instead of failing the request.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::ProjectStage;

    pub fn serialize<S: Serializer>(
        stage: &Option<ProjectStage>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(stage.map(|s| s.id()).unwrap_or_default())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ProjectStage>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(ProjectStage::from_id))
    }
}
