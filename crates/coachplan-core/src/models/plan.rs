//! Plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Activity, GroupSize, Phase, SkillLevel};

/// A coaching-session plan.
///
/// Catalog records populate every field. Plans produced by the remote
/// generator are partial, so every field is optional and consumers go
/// through the slice accessors, which treat an absent list as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Opaque identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,

    /// Session length in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_people: Option<GroupSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objectives: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_considerations: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warm_up: Option<Vec<Activity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_activities: Option<Vec<Activity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cool_down: Option<Vec<Activity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_criteria: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptations: Option<Adaptations>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coaching_tips: Option<Vec<String>>,

    /// Safety notes returned by the remote generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_notes: Option<Vec<String>>,

    /// Progression tips returned by the remote generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression_tips: Option<Vec<String>>,
}

/// Adjustments for particular participant groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Adaptations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_beginners: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_advanced: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_injuries: Option<Vec<String>>,
}

fn items<T>(list: &Option<Vec<T>>) -> &[T] {
    list.as_deref().unwrap_or_default()
}

impl Plan {
    pub fn objectives(&self) -> &[String] {
        items(&self.objectives)
    }

    pub fn equipment(&self) -> &[String] {
        items(&self.equipment)
    }

    pub fn safety_considerations(&self) -> &[String] {
        items(&self.safety_considerations)
    }

    pub fn warm_up(&self) -> &[Activity] {
        items(&self.warm_up)
    }

    pub fn main_activities(&self) -> &[Activity] {
        items(&self.main_activities)
    }

    pub fn cool_down(&self) -> &[Activity] {
        items(&self.cool_down)
    }

    pub fn assessment_criteria(&self) -> &[String] {
        items(&self.assessment_criteria)
    }

    pub fn coaching_tips(&self) -> &[String] {
        items(&self.coaching_tips)
    }

    pub fn safety_notes(&self) -> &[String] {
        items(&self.safety_notes)
    }

    pub fn progression_tips(&self) -> &[String] {
        items(&self.progression_tips)
    }

    /// Activity list for one phase of the session.
    pub fn activities(&self, phase: Phase) -> &[Activity] {
        match phase {
            Phase::WarmUp => self.warm_up(),
            Phase::Main => self.main_activities(),
            Phase::CoolDown => self.cool_down(),
        }
    }

    /// Total number of activities across all three phases.
    pub fn activity_count(&self) -> usize {
        Phase::ALL
            .iter()
            .map(|phase| self.activities(*phase).len())
            .sum()
    }

    /// Title to show when the plan has none of its own.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled session")
    }
}

impl Adaptations {
    pub fn for_beginners(&self) -> &[String] {
        items(&self.for_beginners)
    }

    pub fn for_advanced(&self) -> &[String] {
        items(&self.for_advanced)
    }

    pub fn for_injuries(&self) -> &[String] {
        items(&self.for_injuries)
    }

    /// True when no adaptation list has content.
    pub fn is_empty(&self) -> bool {
        self.for_beginners().is_empty()
            && self.for_advanced().is_empty()
            && self.for_injuries().is_empty()
    }
}
