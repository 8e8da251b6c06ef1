//! Plan summary types and functionality.

use serde::{Deserialize, Serialize};

use super::{GroupSize, Plan, SkillLevel};

/// Catalog listing entry for a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub id: Option<String>,
    pub title: Option<String>,
    pub sport: Option<String>,
    pub level: Option<SkillLevel>,
    /// Session length in minutes
    pub duration: Option<u32>,
    pub number_of_people: Option<GroupSize>,
    /// Activities across warm-up, main and cool-down
    pub total_activities: usize,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id.clone(),
            title: plan.title.clone(),
            sport: plan.sport.clone(),
            level: plan.level,
            duration: plan.duration,
            number_of_people: plan.number_of_people,
            total_activities: plan.activity_count(),
        }
    }
}
