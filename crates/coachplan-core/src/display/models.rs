//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns. Output is markdown for rich terminal display.

use std::fmt;

use crate::{
    models::{Activity, GroupSize, Phase, Plan, PlanSummary, SkillLevel, Step},
    session::TimerState,
};

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for GroupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimerState::Idle => "ready",
            TimerState::Running => "running",
            TimerState::Paused => "paused",
            TimerState::Expired => "time's up",
        };
        write!(f, "{label}")
    }
}

/// Writes a `heading` followed by a bullet list; nothing for an empty list.
pub(crate) fn write_bullets(
    f: &mut fmt::Formatter<'_>,
    heading: &str,
    items: &[String],
) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "{heading}")?;
    writeln!(f)?;
    for item in items {
        writeln!(f, "- {item}")?;
    }
    writeln!(f)
}

impl Activity {
    /// Activity body without its name line, used where the caller already
    /// printed a heading.
    pub(crate) fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Activity::Detailed(detail) = self else {
            return Ok(());
        };

        if !detail.description.is_empty() {
            writeln!(f, "{}", detail.description)?;
            writeln!(f)?;
        }
        write_bullets(f, "**Coaching cues**", &detail.coaching_cues)?;
        write_bullets(
            f,
            "**Progressions**",
            detail.progressions.as_deref().unwrap_or_default(),
        )?;
        write_bullets(
            f,
            "**Modifications**",
            detail.modifications.as_deref().unwrap_or_default(),
        )?;
        write_bullets(
            f,
            "**Safety notes**",
            detail.safety_notes.as_deref().unwrap_or_default(),
        )
    }

    fn fmt_heading(&self, f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
        match self.duration_label() {
            Some(duration) => writeln!(f, "{prefix}{} ({duration})", self.name())?,
            None => writeln!(f, "{prefix}{}", self.name())?,
        }
        writeln!(f)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_heading(f, "### ")?;
        self.fmt_details(f)
    }
}

impl Plan {
    fn fmt_classification(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(sport) = &self.sport {
            writeln!(f, "- Sport: {sport}")?;
        }
        if let Some(level) = self.level {
            writeln!(f, "- Level: {level}")?;
        }
        if let Some(duration) = self.duration {
            writeln!(f, "- Duration: {duration} minutes")?;
        }
        if let Some(group) = self.number_of_people {
            writeln!(f, "- Group size: {group}")?;
        }
        if let Some(id) = &self.id {
            writeln!(f, "- ID: {id}")?;
        }
        Ok(())
    }

    /// Assessment, adaptations and tips: the closing material of a plan.
    pub(crate) fn fmt_wrap_up(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bullets(f, "## Assessment Criteria", self.assessment_criteria())?;

        if let Some(adaptations) = self.adaptations.as_ref().filter(|a| !a.is_empty()) {
            writeln!(f, "## Adaptations")?;
            writeln!(f)?;
            write_bullets(f, "**For beginners**", adaptations.for_beginners())?;
            write_bullets(f, "**For advanced players**", adaptations.for_advanced())?;
            write_bullets(f, "**For injuries**", adaptations.for_injuries())?;
        }

        write_bullets(f, "## Coaching Tips", self.coaching_tips())?;
        write_bullets(f, "## Safety Notes", self.safety_notes())?;
        write_bullets(f, "## Progression Tips", self.progression_tips())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.display_title())?;
        writeln!(f)?;
        self.fmt_classification(f)?;

        if let Some(desc) = self.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        writeln!(f)?;

        write_bullets(f, "## Objectives", self.objectives())?;
        write_bullets(f, "## Equipment", self.equipment())?;
        write_bullets(f, "## Safety Considerations", self.safety_considerations())?;

        for phase in Phase::ALL {
            let activities = self.activities(phase);
            if activities.is_empty() {
                continue;
            }
            writeln!(f, "## {phase}")?;
            writeln!(f)?;
            for (index, activity) in activities.iter().enumerate() {
                activity.fmt_heading(f, &format!("### {}. ", index + 1))?;
                activity.fmt_details(f)?;
            }
        }

        if self.activity_count() == 0 {
            writeln!(f, "No activities in this plan.")?;
            writeln!(f)?;
        }

        self.fmt_wrap_up(f)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subtitle {
            Some(subtitle) => write!(f, "{}: {subtitle}", self.title),
            None => write!(f, "{}", self.title),
        }
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} ({})",
            self.title.as_deref().unwrap_or("Untitled session"),
            self.id.as_deref().unwrap_or("no id")
        )?;
        writeln!(f)?;

        let mut facts = Vec::with_capacity(5);
        if let Some(sport) = &self.sport {
            facts.push(sport.clone());
        }
        if let Some(level) = self.level {
            facts.push(level.to_string());
        }
        if let Some(duration) = self.duration {
            facts.push(format!("{duration} min"));
        }
        if let Some(group) = self.number_of_people {
            facts.push(group.to_string());
        }
        facts.push(format!("{} activities", self.total_activities));
        writeln!(f, "{}", facts.join(" · "))?;
        writeln!(f)
    }
}
