//! Lookup keys for querying the plan catalog.

use super::Plan;

/// The classification tuple used for exact-match catalog lookup.
///
/// Fields are compared verbatim: no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanQuery {
    pub sport: String,
    pub level: String,
    /// Session length in minutes
    pub duration: u32,
    /// Group-size band label, e.g. `"1 (Individual)"`
    pub number_of_people: String,
}

impl PlanQuery {
    /// Builds a query from its four parts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coachplan_core::models::PlanQuery;
    ///
    /// let query = PlanQuery::new("Tennis", "Beginner", 30, "1 (Individual)");
    /// assert_eq!(query.duration, 30);
    /// ```
    pub fn new(
        sport: impl Into<String>,
        level: impl Into<String>,
        duration: u32,
        number_of_people: impl Into<String>,
    ) -> Self {
        Self {
            sport: sport.into(),
            level: level.into(),
            duration,
            number_of_people: number_of_people.into(),
        }
    }

    /// True when all four classification fields of `plan` equal the query.
    pub fn matches(&self, plan: &Plan) -> bool {
        plan.sport.as_deref() == Some(self.sport.as_str())
            && plan.level.map(|level| level.as_str()) == Some(self.level.as_str())
            && plan.duration == Some(self.duration)
            && plan.number_of_people.map(|band| band.label())
                == Some(self.number_of_people.as_str())
    }

    /// Catalog key used in logs and duplicate detection.
    pub fn key(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.sport, self.level, self.duration, self.number_of_people
        )
    }
}

impl From<&crate::params::FindPlan> for PlanQuery {
    fn from(params: &crate::params::FindPlan) -> Self {
        Self {
            sport: params.sport.clone(),
            level: params.level.clone(),
            duration: params.duration,
            number_of_people: params.number_of_people.clone(),
        }
    }
}

impl TryFrom<&Plan> for PlanQuery {
    type Error = crate::CoachError;

    /// Extracts the classification tuple of a catalog record.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::InvalidInput` naming the first missing field.
    fn try_from(plan: &Plan) -> Result<Self, Self::Error> {
        let missing = |field: &str| crate::CoachError::invalid_input(field).with_reason(format!(
            "catalog plan '{}' has no {field}",
            plan.id.as_deref().unwrap_or("<no id>")
        ));

        Ok(Self {
            sport: plan.sport.clone().ok_or_else(|| missing("sport"))?,
            level: plan
                .level
                .map(|level| level.as_str().to_string())
                .ok_or_else(|| missing("level"))?,
            duration: plan.duration.ok_or_else(|| missing("duration"))?,
            number_of_people: plan
                .number_of_people
                .map(|band| band.label().to_string())
                .ok_or_else(|| missing("numberOfPeople"))?,
        })
    }
}
