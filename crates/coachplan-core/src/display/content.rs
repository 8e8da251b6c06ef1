//! Per-step content for session playback.

use std::fmt;

use super::models::write_bullets;
use crate::models::{Phase, Plan, Step, StepKind};

/// The body shown for one playback step.
///
/// The overview step presents the plan header, objectives, equipment and
/// the phase breakdown; activity steps present their activity; the summary
/// step presents assessment, adaptations and tips.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::{catalog::Catalog, display::StepContent, session::build_steps};
///
/// let catalog = Catalog::builtin()?;
/// let plan = catalog.get("tennis-beginner-30-individual").expect("builtin plan");
/// let steps = build_steps(plan);
///
/// let overview = StepContent::new(plan, &steps[0]).to_string();
/// assert!(overview.starts_with("# Session Overview"));
/// # Ok::<(), coachplan_core::CoachError>(())
/// ```
pub struct StepContent<'a> {
    plan: &'a Plan,
    step: &'a Step,
}

impl<'a> StepContent<'a> {
    pub fn new(plan: &'a Plan, step: &'a Step) -> Self {
        Self { plan, step }
    }

    fn fmt_overview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        writeln!(f, "## {}", plan.display_title())?;
        writeln!(f)?;

        let mut facts = Vec::with_capacity(4);
        if let Some(sport) = &plan.sport {
            facts.push(sport.clone());
        }
        if let Some(level) = plan.level {
            facts.push(level.to_string());
        }
        if let Some(duration) = plan.duration {
            facts.push(format!("{duration} minutes"));
        }
        if let Some(group) = plan.number_of_people {
            facts.push(group.to_string());
        }
        if !facts.is_empty() {
            writeln!(f, "{}", facts.join(" · "))?;
            writeln!(f)?;
        }

        if let Some(desc) = plan.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        write_bullets(f, "### Objectives", plan.objectives())?;
        write_bullets(f, "### Equipment", plan.equipment())?;
        write_bullets(f, "### Safety Considerations", plan.safety_considerations())?;

        writeln!(f, "### Session Structure")?;
        writeln!(f)?;
        for phase in Phase::ALL {
            let count = plan.activities(phase).len();
            let noun = if count == 1 { "activity" } else { "activities" };
            writeln!(f, "- {phase}: {count} {noun}")?;
        }
        Ok(())
    }

    fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        let has_adaptations = plan.adaptations.as_ref().is_some_and(|a| !a.is_empty());
        if plan.assessment_criteria().is_empty()
            && plan.coaching_tips().is_empty()
            && plan.safety_notes().is_empty()
            && plan.progression_tips().is_empty()
            && !has_adaptations
        {
            return writeln!(f, "Session complete. Great work!");
        }
        plan.fmt_wrap_up(f)
    }
}

impl fmt::Display for StepContent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.step.title)?;
        writeln!(f)?;

        match self.step.kind {
            StepKind::Overview => self.fmt_overview(f),
            StepKind::Summary => self.fmt_summary(f),
            StepKind::WarmUp | StepKind::Main | StepKind::CoolDown => {
                match self.step.activity(self.plan) {
                    Some(activity) => write!(f, "{activity}"),
                    None => writeln!(f, "Activity details are not available."),
                }
            }
        }
    }
}
