//! Step model definition and related functionality.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Activity, Plan};

/// The three timed phases of a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    WarmUp,
    Main,
    CoolDown,
}

impl Phase {
    /// Phases in session order.
    pub const ALL: [Phase; 3] = [Phase::WarmUp, Phase::Main, Phase::CoolDown];

    /// Key fragment used in step ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::WarmUp => "warm-up",
            Phase::Main => "main",
            Phase::CoolDown => "cool-down",
        }
    }

    /// Heading shown above the phase's steps.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::WarmUp => "Warm-up",
            Phase::Main => "Main Activity",
            Phase::CoolDown => "Cool-down",
        }
    }
}

/// Kind of a playback step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Overview,
    WarmUp,
    Main,
    CoolDown,
    Summary,
}

impl From<Phase> for StepKind {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::WarmUp => StepKind::WarmUp,
            Phase::Main => StepKind::Main,
            Phase::CoolDown => StepKind::CoolDown,
        }
    }
}

/// Back-reference from a step to the activity it presents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivitySource {
    pub phase: Phase,
    pub index: usize,
}

/// One unit of the linearized playback sequence derived from a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Stable key, e.g. `overview`, `main-2`, `summary`
    pub id: String,

    pub kind: StepKind,

    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Source activity; absent for the overview and summary steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ActivitySource>,
}

impl Step {
    /// Re-fetches the activity this step presents from its plan.
    pub fn activity<'a>(&self, plan: &'a Plan) -> Option<&'a Activity> {
        let source = self.source?;
        plan.activities(source.phase).get(source.index)
    }
}
