//! Result wrapper types for displaying operation outcomes.

use std::{fmt, path::PathBuf};

use crate::{
    coach::LookupOutcome,
    models::{GroupSize, Plan, PlanQuery, SkillLevel, SESSION_DURATIONS},
};

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Exact(plan) => write!(f, "{plan}"),
            LookupOutcome::Fallback { requested, plan } => {
                writeln!(
                    f,
                    "> No catalog plan for {}; showing the closest match.",
                    requested.key()
                )?;
                writeln!(f)?;
                write!(f, "{plan}")
            }
        }
    }
}

/// Failure message for an exact lookup that matched nothing, followed by the
/// classification values the catalog is indexed by.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::{display::LookupMiss, models::PlanQuery};
///
/// let query = PlanQuery::new("Tennis", "beginner", 30, "1 (Individual)");
/// let output = LookupMiss(&query).to_string();
/// assert!(output.starts_with("Error: No catalog plan matches Tennis/beginner/30/1 (Individual)"));
/// assert!(output.contains("- Levels: Beginner, Intermediate, Advanced"));
/// assert!(output.contains("- Durations: 30, 45, 60, 90 minutes"));
/// ```
pub struct LookupMiss<'a>(pub &'a PlanQuery);

impl fmt::Display for LookupMiss<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |items: Vec<String>| items.join(", ");

        writeln!(f, "Error: No catalog plan matches {}", self.0.key())?;
        writeln!(f)?;
        writeln!(f, "Values are matched exactly, including case:")?;
        writeln!(
            f,
            "- Levels: {}",
            join(SkillLevel::ALL.iter().map(ToString::to_string).collect())
        )?;
        writeln!(
            f,
            "- Durations: {} minutes",
            join(SESSION_DURATIONS.iter().map(ToString::to_string).collect())
        )?;
        writeln!(
            f,
            "- Group sizes: {}",
            join(GroupSize::ALL.iter().map(ToString::to_string).collect())
        )
    }
}

/// Wrapper type for displaying a freshly generated plan.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::{display::GenerateResult, models::Plan};
///
/// let plan = Plan {
///     id: Some("generated-1700000000000".to_string()),
///     title: Some("Footwork ladder".to_string()),
///     ..Default::default()
/// };
/// let output = GenerateResult::new(plan).saved_to("plan.json").to_string();
/// assert!(output.starts_with("Generated plan with ID: generated-1700000000000"));
/// assert!(output.contains("Saved to plan.json"));
/// ```
pub struct GenerateResult {
    pub plan: Plan,
    pub saved_to: Option<PathBuf>,
}

impl GenerateResult {
    pub fn new(plan: Plan) -> Self {
        Self {
            plan,
            saved_to: None,
        }
    }

    /// Records where the plan was written.
    pub fn saved_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.saved_to = Some(path.into());
        self
    }
}

impl fmt::Display for GenerateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generated plan with ID: {}",
            self.plan.id.as_deref().unwrap_or("none")
        )?;
        if let Some(path) = &self.saved_to {
            writeln!(f, "Saved to {}", path.display())?;
        }
        writeln!(f)?;
        write!(f, "{}", self.plan)
    }
}
