//! Flattening a plan into its playback step sequence.

use crate::models::{ActivitySource, Phase, Plan, Step, StepKind};

pub const OVERVIEW_STEP_ID: &str = "overview";
pub const SUMMARY_STEP_ID: &str = "summary";

/// Builds the ordered playback steps for a plan.
///
/// The sequence is always: one overview step, the warm-up activities, the
/// main activities, the cool-down activities (each in list order), then one
/// summary step. Absent or empty phases contribute nothing, so a plan with no
/// activities yields exactly two steps. The result depends only on the plan's
/// content.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::{models::{Activity, Plan, StepKind}, session::build_steps};
///
/// let plan = Plan {
///     cool_down: Some(vec![Activity::from("Static stretching")]),
///     ..Default::default()
/// };
/// let steps = build_steps(&plan);
///
/// let kinds: Vec<StepKind> = steps.iter().map(|step| step.kind).collect();
/// assert_eq!(kinds, [StepKind::Overview, StepKind::CoolDown, StepKind::Summary]);
/// assert_eq!(steps[1].subtitle.as_deref(), Some("Static stretching"));
/// ```
pub fn build_steps(plan: &Plan) -> Vec<Step> {
    let mut steps = Vec::with_capacity(plan.activity_count() + 2);

    steps.push(Step {
        id: OVERVIEW_STEP_ID.to_string(),
        kind: StepKind::Overview,
        title: "Session Overview".to_string(),
        subtitle: Some(plan.display_title().to_string()),
        source: None,
    });

    for phase in Phase::ALL {
        let activities = plan.activities(phase);
        let count = activities.len();
        for (index, activity) in activities.iter().enumerate() {
            let title = if count > 1 {
                format!("{} {} of {count}", phase.label(), index + 1)
            } else {
                phase.label().to_string()
            };
            steps.push(Step {
                id: format!("{}-{index}", phase.as_str()),
                kind: phase.into(),
                title,
                subtitle: Some(activity.name().to_string()).filter(|name| !name.is_empty()),
                source: Some(ActivitySource { phase, index }),
            });
        }
    }

    steps.push(Step {
        id: SUMMARY_STEP_ID.to_string(),
        kind: StepKind::Summary,
        title: "Session Summary".to_string(),
        subtitle: Some("Assessment, adaptations and coaching tips".to_string()),
        source: None,
    });

    steps
}
