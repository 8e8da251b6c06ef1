//! Parameter structures for coachplan operations
//!
//! These structures are shared by every interface (CLI, MCP) without carrying
//! framework-specific derives. Interface layers wrap them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! CLI argument structs convert into these with `From`, and the MCP server
//! wraps them in a transparent serde container that adds `JsonSchema` when the
//! `schema` feature is enabled.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::generator::GenerationRequest;

/// Generic parameters for operations requiring just a plan ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The catalog ID of the plan, e.g. "tennis-beginner-30-individual"
    pub id: String,
}

/// Parameters for an exact-match catalog lookup.
///
/// Values are compared verbatim against catalog records: "Tennis" does not
/// match "tennis".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FindPlan {
    /// Sport name, e.g. "Tennis"
    pub sport: String,
    /// Skill level: "Beginner", "Intermediate" or "Advanced"
    pub level: String,
    /// Session length in minutes (30, 45, 60 or 90)
    pub duration: u32,
    /// Group-size band label, e.g. "1 (Individual)" or "5-10 (Medium Group)"
    pub number_of_people: String,
    /// When false, a lookup miss falls back to the closest catalog plan
    #[serde(default)]
    pub exact: bool,
}

/// Parameters for listing the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListCatalog {
    /// Only list plans for this sport (exact match)
    #[serde(default)]
    pub sport: Option<String>,
}

/// Parameters for remote plan generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GeneratePlan {
    /// Sport name, e.g. "Basketball"
    pub sport: String,
    /// Skill level: "Beginner", "Intermediate" or "Advanced"
    pub level: String,
    /// Session length in minutes
    pub duration: u32,
    /// Group-size band label, e.g. "11-20 (Large Group)"
    pub number_of_people: String,
    /// Free-text list of available equipment
    #[serde(default)]
    pub equipment: Option<String>,
    /// Free-text session objectives
    #[serde(default)]
    pub objectives: Option<String>,
}

impl GeneratePlan {
    /// Validate the parameters and build a generator request.
    ///
    /// # Errors
    ///
    /// * `CoachError::InvalidInput` - When sport or level is blank, the
    ///   duration is zero, or the group size is blank
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coachplan_core::params::GeneratePlan;
    ///
    /// let params = GeneratePlan {
    ///     sport: "Rugby".to_string(),
    ///     level: "Intermediate".to_string(),
    ///     duration: 60,
    ///     number_of_people: "11-20 (Large Group)".to_string(),
    ///     equipment: Some("cones, tackle pads".to_string()),
    ///     objectives: None,
    /// };
    /// let request = params.validate()?;
    /// assert_eq!(request.duration_minutes, 60);
    ///
    /// let blank = GeneratePlan { sport: "  ".to_string(), ..params };
    /// assert!(blank.validate().is_err());
    /// # Ok::<(), coachplan_core::CoachError>(())
    /// ```
    pub fn validate(&self) -> crate::Result<GenerationRequest> {
        let required = |field: &str, value: &str| {
            if value.trim().is_empty() {
                Err(crate::CoachError::invalid_input(field).with_reason("must not be empty"))
            } else {
                Ok(value.trim().to_string())
            }
        };

        let sport = required("sport", &self.sport)?;
        let level = required("level", &self.level)?;
        let group_size = required("number_of_people", &self.number_of_people)?;
        if self.duration == 0 {
            return Err(crate::CoachError::invalid_input("duration")
                .with_reason("must be greater than zero"));
        }

        let optional = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };

        Ok(GenerationRequest {
            sport,
            level,
            duration_minutes: self.duration,
            group_size,
            equipment: optional(&self.equipment),
            objectives: optional(&self.objectives),
        })
    }
}
