//! Activity model definition.

use serde::{Deserialize, Deserializer, Serialize};

/// One instructional unit within a plan phase.
///
/// On the wire an activity is either a bare string or a structured object;
/// the variant is chosen by shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Activity {
    /// Free-text activity with no timing information
    Simple(String),
    /// Structured activity with a duration label and coaching detail
    Detailed(DetailedActivity),
}

/// Structured activity record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedActivity {
    /// Short name of the drill or exercise
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Free-text duration label such as "5 minutes" or "30 seconds"
    ///
    /// A bare number is read as minutes.
    #[serde(default, deserialize_with = "duration_label")]
    pub duration: String,

    /// What the participants do
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Ordered coaching cues (may be empty)
    #[serde(default, deserialize_with = "null_as_default")]
    pub coaching_cues: Vec<String>,

    /// Ways to make the activity harder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progressions: Option<Vec<String>>,

    /// Ways to make the activity easier or adapt it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifications: Option<Vec<String>>,

    /// Activity-specific safety notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_notes: Option<Vec<String>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn duration_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Minutes(serde_json::Number),
    }

    Ok(match Option::<Label>::deserialize(deserializer)? {
        Some(Label::Text(text)) => text,
        Some(Label::Minutes(minutes)) => match minutes.as_u64() {
            Some(whole) => format!("{whole} minutes"),
            // Fractional or negative minutes; `as` saturates negatives to 0.
            None => format!(
                "{} seconds",
                (minutes.as_f64().unwrap_or(0.0) * 60.0).round() as u64
            ),
        },
        None => String::new(),
    })
}

impl Activity {
    /// Display name: the record name, or the text of a simple activity.
    pub fn name(&self) -> &str {
        match self {
            Activity::Simple(text) => text,
            Activity::Detailed(detail) => &detail.name,
        }
    }

    /// Duration label, present only on detailed activities.
    pub fn duration_label(&self) -> Option<&str> {
        match self {
            Activity::Simple(_) => None,
            Activity::Detailed(detail) => Some(detail.duration.as_str()),
        }
    }

    /// Returns the structured record if this is a detailed activity.
    pub fn as_detailed(&self) -> Option<&DetailedActivity> {
        match self {
            Activity::Simple(_) => None,
            Activity::Detailed(detail) => Some(detail),
        }
    }
}

impl From<&str> for Activity {
    fn from(text: &str) -> Self {
        Activity::Simple(text.to_string())
    }
}

impl From<DetailedActivity> for Activity {
    fn from(detail: DetailedActivity) -> Self {
        Activity::Detailed(detail)
    }
}
