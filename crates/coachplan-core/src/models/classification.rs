//! Classification enumerations used to index the plan catalog.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Session lengths, in minutes, offered by the session form.
pub const SESSION_DURATIONS: [u32; 4] = [30, 45, 60, 90];

/// Type-safe enumeration of participant skill levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            _ => Err(format!("Invalid skill level: {s}")),
        }
    }
}

impl SkillLevel {
    /// All levels in form order.
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];

    /// Canonical label, as stored in the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

/// Group-size bands offered by the session form.
///
/// The serialized form is the band label (e.g. `"1 (Individual)"`), which is
/// also what the catalog resolver compares against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum GroupSize {
    #[serde(rename = "1 (Individual)")]
    Individual,
    #[serde(rename = "2-4 (Small Group)")]
    Small,
    #[serde(rename = "5-10 (Medium Group)")]
    Medium,
    #[serde(rename = "11-20 (Large Group)")]
    Large,
    #[serde(rename = "20+ (Team)")]
    Team,
}

impl GroupSize {
    /// All bands from smallest to largest.
    pub const ALL: [GroupSize; 5] = [
        GroupSize::Individual,
        GroupSize::Small,
        GroupSize::Medium,
        GroupSize::Large,
        GroupSize::Team,
    ];

    /// Band label as shown in the form and stored in the catalog.
    pub fn label(&self) -> &'static str {
        match self {
            GroupSize::Individual => "1 (Individual)",
            GroupSize::Small => "2-4 (Small Group)",
            GroupSize::Medium => "5-10 (Medium Group)",
            GroupSize::Large => "11-20 (Large Group)",
            GroupSize::Team => "20+ (Team)",
        }
    }
}

impl FromStr for GroupSize {
    type Err = String;

    /// Parses an exact band label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupSize::ALL
            .into_iter()
            .find(|band| band.label() == s)
            .ok_or_else(|| format!("Invalid group size: {s}"))
    }
}
