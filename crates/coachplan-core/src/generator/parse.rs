//! Turning a model reply into a plan.

use std::sync::LazyLock;

use jiff::Timestamp;
use log::debug;
use regex::Regex;
use serde_json::Value;

use super::GenerationRequest;
use crate::{
    error::{CoachError, Result},
    models::Plan,
};

/// Prefix of ids given to generated plans.
pub const GENERATED_ID_PREFIX: &str = "generated-";

/// Reply keys that are overwritten from the request, so their shape in the
/// reply never matters.
const STAMPED_KEYS: [&str; 5] = ["id", "sport", "level", "duration", "numberOfPeople"];

/// Body of the first fenced code block, with or without an info string.
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```[\w-]*[ \t]*\r?\n([\s\S]*?)```").expect("fence pattern is valid")
});

/// From the first `{` to the last `}`.
static OUTERMOST_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("object pattern is valid"));

/// Parses the text content of a model reply into a plan.
///
/// Markdown code fences are stripped and the outermost `{...}` span is
/// deserialized, so prose around the object is tolerated. Missing keys are
/// fine. Any `id`, `sport`, `level`, `duration` or `numberOfPeople` in the
/// reply is ignored: the classification is stamped from `request` and the
/// plan gets an id of the form `generated-<unix millis>`. Nothing partial is
/// returned on failure.
///
/// # Errors
///
/// Returns `CoachError::Generation` when the content holds no JSON object or
/// the object does not fit the plan shape.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::generator::{parse_generated_plan, GenerationRequest};
///
/// let request = GenerationRequest {
///     sport: "Tennis".to_string(),
///     level: "Beginner".to_string(),
///     duration_minutes: 30,
///     group_size: "1 (Individual)".to_string(),
///     equipment: None,
///     objectives: None,
/// };
/// let reply = "```json\n{\"title\": \"Rally basics\", \"warmUp\": [\"Jog\"]}\n```";
/// let plan = parse_generated_plan(reply, &request)?;
/// assert_eq!(plan.title.as_deref(), Some("Rally basics"));
/// assert_eq!(plan.duration, Some(30));
/// assert!(plan.main_activities().is_empty());
/// # Ok::<(), coachplan_core::CoachError>(())
/// ```
pub fn parse_generated_plan(content: &str, request: &GenerationRequest) -> Result<Plan> {
    let body = strip_code_fences(content);
    let json = outermost_object(body)
        .ok_or_else(|| CoachError::generation("response did not contain a JSON object"))?;

    let mut reply: Value = serde_json::from_str(json)
        .map_err(|e| CoachError::generation(format!("response was not valid JSON: {e}")))?;
    if let Some(fields) = reply.as_object_mut() {
        for key in STAMPED_KEYS {
            fields.remove(key);
        }
    }

    let mut plan: Plan = serde_json::from_value(reply)
        .map_err(|e| CoachError::generation(format!("response was not a valid plan: {e}")))?;

    plan.id = Some(format!(
        "{GENERATED_ID_PREFIX}{}",
        Timestamp::now().as_millisecond()
    ));
    plan.sport = Some(request.sport.clone());
    plan.level = request.level.parse().ok();
    plan.duration = Some(request.duration_minutes);
    plan.number_of_people = request.group_size.parse().ok();

    debug!(
        "Parsed generated plan with {} activities",
        plan.activity_count()
    );
    Ok(plan)
}

fn strip_code_fences(content: &str) -> &str {
    CODE_FENCE
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map_or(content, |body| body.as_str())
        .trim()
}

fn outermost_object(text: &str) -> Option<&str> {
    OUTERMOST_OBJECT.find(text).map(|found| found.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupSize, SkillLevel};

    fn request() -> GenerationRequest {
        GenerationRequest {
            sport: "Basketball".to_string(),
            level: "Intermediate".to_string(),
            duration_minutes: 60,
            group_size: "11-20 (Large Group)".to_string(),
            equipment: None,
            objectives: None,
        }
    }

    #[test]
    fn test_fenced_json_is_accepted() {
        let reply = "```json\n{\n  \"title\": \"Pick and roll\",\n  \"mainActivities\": [\n    {\"name\": \"2v2\", \"duration\": \"15 minutes\"}\n  ]\n}\n```";
        let plan = parse_generated_plan(reply, &request()).expect("fenced reply parses");
        assert_eq!(plan.title.as_deref(), Some("Pick and roll"));
        assert_eq!(plan.main_activities().len(), 1);
        assert_eq!(
            plan.main_activities()[0].duration_label(),
            Some("15 minutes")
        );
    }

    #[test]
    fn test_surrounding_prose_is_ignored() {
        let reply = "Here is your plan: {\"title\": \"Shooting\"} Enjoy!";
        let plan = parse_generated_plan(reply, &request()).expect("embedded object parses");
        assert_eq!(plan.title.as_deref(), Some("Shooting"));
    }

    #[test]
    fn test_classification_and_id_are_stamped() {
        let plan = parse_generated_plan("{}", &request()).expect("empty object parses");
        assert_eq!(plan.sport.as_deref(), Some("Basketball"));
        assert_eq!(plan.level, Some(SkillLevel::Intermediate));
        assert_eq!(plan.duration, Some(60));
        assert_eq!(plan.number_of_people, Some(GroupSize::Large));
        let id = plan.id.expect("generated id");
        assert!(id.starts_with(GENERATED_ID_PREFIX));
        assert!(id[GENERATED_ID_PREFIX.len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn test_partial_object_has_empty_sections() {
        let plan = parse_generated_plan("{\"warmUp\": [\"Dynamic stretches\"]}", &request())
            .expect("partial object parses");
        assert_eq!(plan.warm_up().len(), 1);
        assert!(plan.cool_down().is_empty());
        assert!(plan.safety_notes().is_empty());
    }

    #[test]
    fn test_non_json_is_generation_error() {
        let err = parse_generated_plan("Sorry, I cannot help with that.", &request())
            .expect_err("no object");
        assert!(matches!(err, CoachError::Generation { .. }));
    }

    #[test]
    fn test_wrong_shape_is_generation_error() {
        let err = parse_generated_plan("{\"warmUp\": 5}", &request()).expect_err("bad shape");
        assert!(matches!(err, CoachError::Generation { .. }));
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("  {}  "), "{}");
        assert_eq!(
            strip_code_fences("Here you go:\n```JSON\n{\"a\": 1}\n```\nGood luck!"),
            "{\"a\": 1}"
        );
    }

    #[test]
    fn test_reply_classification_is_ignored() {
        for reply in [
            r#"{"level": "intermediate"}"#,
            r#"{"duration": "60 minutes"}"#,
            r#"{"numberOfPeople": "11-20"}"#,
            r#"{"sport": ["Basketball"], "id": 7}"#,
        ] {
            let plan = parse_generated_plan(reply, &request())
                .unwrap_or_else(|e| panic!("{reply} should parse: {e}"));
            assert_eq!(plan.sport.as_deref(), Some("Basketball"));
            assert_eq!(plan.level, Some(SkillLevel::Intermediate));
            assert_eq!(plan.duration, Some(60));
            assert_eq!(plan.number_of_people, Some(GroupSize::Large));
            assert!(plan.id.expect("stamped id").starts_with(GENERATED_ID_PREFIX));
        }
    }

    #[test]
    fn test_loose_activity_fields_are_accepted() {
        let reply = r#"{
            "mainActivities": [
                {"name": "3v3", "duration": 10, "coachingCues": null},
                {"name": "Free throws", "duration": null, "description": null}
            ]
        }"#;
        let plan = parse_generated_plan(reply, &request()).expect("loose activities parse");
        let activities = plan.main_activities();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].duration_label(), Some("10 minutes"));
        assert_eq!(
            activities[0].as_detailed().map(|a| a.coaching_cues.len()),
            Some(0)
        );
        assert_eq!(activities[1].duration_label(), Some(""));
    }
}
