//! Data documents fetched from `data/*.json`.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON documents exactly. Unknown fields are ignored
//! and optional fields default to `None`/empty whether the key is missing or
//! holds `null`, so a sparse document still deserializes; the renderers
//! decide what an absent field suppresses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// One position in the experience history.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExperienceEntry {
    /// Ordinal identifier. Higher ids are more recent.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub role: String,
    pub company: String,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub location: Option<String>,
    /// Free-text start label, e.g. `"January 2020"`.
    #[serde(default)]
    pub start: Option<String>,
    /// Free-text end label, `"Present"` allowed.
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tools: Vec<String>,
}

/// A tool or skill shown in the tools grid.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_level")]
    pub level: Option<ToolLevel>,
}

impl Tool {
    /// Whether this tool is flagged with the star marker and sorted first.
    #[must_use]
    pub fn is_proficient(&self) -> bool {
        matches!(self.level, Some(ToolLevel::Proficient))
    }
}

/// Self-assessed level for a [`Tool`].
///
/// Only [`ToolLevel::Proficient`] affects ordering; every other value is
/// unranked and kept for its label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolLevel {
    Proficient,
    Experienced,
    Familiar,
    Learning,
    /// Any label outside the known vocabulary, kept verbatim.
    Other(String),
}

impl ToolLevel {
    /// Parse a raw level label. Matching is exact, as in the data files.
    #[must_use]
    pub fn from_label(raw: &str) -> Self {
        match raw {
            "proficient" => Self::Proficient,
            "experienced" => Self::Experienced,
            "familiar" => Self::Familiar,
            "learning" => Self::Learning,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Raw label as written in the data file.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Proficient => "proficient",
            Self::Experienced => "experienced",
            Self::Familiar => "familiar",
            Self::Learning => "learning",
            Self::Other(label) => label,
        }
    }

    /// Label with the first letter of each word upper-cased.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.label()
            .split(' ')
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Sort rank: proficient tools come first.
    #[must_use]
    pub fn rank(&self) -> u8 {
        u8::from(!matches!(self, Self::Proficient))
    }
}

/// A portfolio project card.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(rename = "type", default, deserialize_with = "deserialize_kind")]
    pub kind: ProjectKind,
}

/// How a project link behaves when followed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectKind {
    /// Triggers a file download in the current tab.
    Download,
    /// Opens in a new, isolated browsing context. Unknown types land here.
    #[default]
    Web,
}

impl ProjectKind {
    /// Only the exact `"download"` value selects [`ProjectKind::Download`].
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value.as_str() {
            Some("download") => Self::Download,
            _ => Self::Web,
        }
    }

    /// Value written to the card's `data-link-type` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Download => "download",
            Self::Web => "web",
        }
    }
}

/// The single contact record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub location: Option<String>,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub other: Vec<OtherLink>,
}

/// Extra labelled link on the contact card.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherLink {
    pub label: String,
    pub url: String,
    pub link_text: String,
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Accept a JSON integer, an integral float such as `2.0`, or a string
/// holding an integer.
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer id"))
        }
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected numeric id, got {text:?}"))),
        _ => Err(D::Error::custom("expected number or numeric string id")),
    }
}

/// `null` decodes as the type's default, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<ProjectKind, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(ProjectKind::from_value(&value))
}

/// Missing, `null` and `""` all collapse to `None`.
fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Option<ToolLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|s| !s.is_empty())
        .map(|s| ToolLevel::from_label(&s)))
}
