//! The project answers record collected by the wizard.

use std::{collections::BTreeMap, fmt};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::ProjectStage;

/// Flat set of answers submitted by the wizard.
///
/// Every field is optional on the wire. Blank or unknown stage ids decode to
/// `None`, `teamSize` accepts either a string or a number, and duplicate
/// tool ids are dropped keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectAnswers {
    /// Display name of the project
    #[serde(deserialize_with = "null_as_default")]
    pub project_name: String,

    /// Short free-form summary
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,

    /// Current lifecycle stage, if one was picked
    #[serde(with = "super::stage::lenient")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub project_stage: Option<ProjectStage>,

    /// Team headcount as entered
    #[cfg_attr(feature = "schema", schemars(schema_with = "team_size_schema"))]
    pub team_size: TeamSize,

    /// Selected tool ids, in selection order
    #[serde(deserialize_with = "unique_tools")]
    pub tools: Vec<String>,

    /// Per-tool URL overrides
    #[serde(deserialize_with = "null_as_default")]
    pub tool_links: BTreeMap<String, Option<String>>,
}

impl ProjectAnswers {
    /// Starting values for a fresh wizard session.
    pub fn wizard_defaults() -> Self {
        Self {
            project_stage: Some(ProjectStage::default()),
            ..Self::default()
        }
    }

    /// Trimmed project name, or `"Untitled project"` when blank.
    pub fn display_name(&self) -> &str {
        match self.project_name.trim() {
            "" => super::UNTITLED_PROJECT,
            name => name,
        }
    }

    /// Trimmed, non-empty override for a tool's link.
    pub fn link_override(&self, tool_id: &str) -> Option<&str> {
        self.tool_links
            .get(tool_id)
            .and_then(Option::as_deref)
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }
}

/// Reads an explicit `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `teamSize` arrives as text or as a bare number.
#[cfg(feature = "schema")]
fn team_size_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": ["string", "number", "null"]
    })
}

fn unique_tools<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let tools = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    let mut unique: Vec<String> = Vec::with_capacity(tools.len());
    for tool in tools {
        if !unique.contains(&tool) {
            unique.push(tool);
        }
    }
    Ok(unique)
}

/// Team headcount as entered, kept as trimmed text.
///
/// The wizard validates that the value is a whole number above zero; the
/// content builder only formats whatever arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TeamSize(String);

impl TeamSize {
    /// Wraps the trimmed input.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value of the entry, if it parses as a number.
    pub fn numeric(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|n| n.is_finite())
    }

    /// Headcount when the entry is a whole number greater than zero.
    pub fn count(&self) -> Option<u64> {
        self.numeric()
            .filter(|n| *n > 0.0 && n.fract() == 0.0)
            .map(|n| n as u64)
    }

    /// `"{n} person"` for exactly one, `"{n} people"` otherwise, `None` when
    /// blank.
    pub fn label(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let noun = if self.numeric() == Some(1.0) {
            "person"
        } else {
            "people"
        };
        Some(format!("{} {noun}", self.0))
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamSize {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for TeamSize {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for TeamSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TeamSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TeamSizeVisitor;

        impl<'de> Visitor<'de> for TeamSizeVisitor {
            type Value = TeamSize;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a team size as a string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TeamSize, E> {
                Ok(TeamSize::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TeamSize, E> {
                Ok(TeamSize::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TeamSize, E> {
                Ok(TeamSize(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<TeamSize, E> {
                Ok(TeamSize(v.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<TeamSize, E> {
                Ok(TeamSize::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<TeamSize, E> {
                Ok(TeamSize::default())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<TeamSize, D::Error> {
                d.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(TeamSizeVisitor)
    }
}
