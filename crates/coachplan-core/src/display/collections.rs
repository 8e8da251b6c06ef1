//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use super::Countdown;
use crate::{
    models::{Plan, PlanSummary, Step},
    session::parse_duration,
};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::{catalog::Catalog, display::PlanSummaries};
///
/// let catalog = Catalog::builtin()?;
/// let summaries = PlanSummaries(catalog.summaries(Some("Soccer")));
/// let output = format!("{summaries}");
/// assert!(output.contains("soccer-beginner-45-medium"));
///
/// assert_eq!(format!("{}", PlanSummaries(vec![])), "No plans found.\n");
/// # Ok::<(), coachplan_core::CoachError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

/// Numbered outline of a plan's step sequence with per-step timer lengths.
///
/// Step numbers match the `1`-`9` jump keys of interactive playback.
pub struct StepOutline<'a> {
    plan: &'a Plan,
    steps: &'a [Step],
}

impl<'a> StepOutline<'a> {
    pub fn new(plan: &'a Plan, steps: &'a [Step]) -> Self {
        Self { plan, steps }
    }
}

impl fmt::Display for StepOutline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.plan.display_title())?;
        writeln!(f)?;

        if self.steps.is_empty() {
            return writeln!(f, "No steps found.");
        }

        for (index, step) in self.steps.iter().enumerate() {
            let seconds = step
                .activity(self.plan)
                .and_then(|activity| activity.duration_label())
                .map_or(0, parse_duration);
            if seconds > 0 {
                writeln!(f, "{}. {step} ({})", index + 1, Countdown(seconds))?;
            } else {
                writeln!(f, "{}. {step}", index + 1)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Activity, DetailedActivity},
        session::build_steps,
    };

    #[test]
    fn test_plan_summaries_display() {
        let plan = Plan {
            id: Some("golf-1".to_string()),
            title: Some("Putting".to_string()),
            sport: Some("Golf".to_string()),
            duration: Some(30),
            warm_up: Some(vec![Activity::from("Stretch")]),
            ..Default::default()
        };
        let summaries = PlanSummaries(vec![PlanSummary::from(&plan)]);
        let output = format!("{summaries}");

        assert!(output.contains("### Putting (golf-1)"));
        assert!(output.contains("Golf · 30 min · 1 activities"));
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(format!("{}", PlanSummaries(vec![])), "No plans found.\n");

        let plan = Plan::default();
        let outline = StepOutline::new(&plan, &[]);
        assert!(format!("{outline}").ends_with("No steps found.\n"));
    }

    #[test]
    fn test_step_outline_shows_timers() {
        let plan = Plan {
            title: Some("Footwork".to_string()),
            warm_up: Some(vec![Activity::Detailed(DetailedActivity {
                name: "Skipping".to_string(),
                duration: "5 minutes".to_string(),
                ..Default::default()
            })]),
            cool_down: Some(vec![Activity::from("Walk it off")]),
            ..Default::default()
        };
        let steps = build_steps(&plan);
        let output = format!("{}", StepOutline::new(&plan, &steps));

        assert!(output.starts_with("# Footwork\n"));
        assert!(output.contains("1. Session Overview: Footwork\n"));
        assert!(output.contains("2. Warm-up: Skipping (05:00)\n"));
        assert!(output.contains("3. Cool-down: Walk it off\n"));
        assert!(output.contains("4. Session Summary"));
    }
}
