//! Prompt text sent to the chat-completion API.

use std::fmt::Write;

use super::GenerationRequest;

/// System message framing the model's role.
pub const SYSTEM_PROMPT: &str = "You are an experienced sports coach who designs safe, \
     practical training sessions. Reply with a single JSON object and nothing else.";

/// Builds the user message for a generation request.
///
/// The message names the classification, the optional equipment and
/// objectives, and the exact JSON shape expected back.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::generator::{build_prompt, GenerationRequest};
///
/// let prompt = build_prompt(&GenerationRequest {
///     sport: "Volleyball".to_string(),
///     level: "Beginner".to_string(),
///     duration_minutes: 45,
///     group_size: "5-10 (Medium Group)".to_string(),
///     equipment: None,
///     objectives: Some("serving consistency".to_string()),
/// });
/// assert!(prompt.contains("45-minute Volleyball session"));
/// assert!(prompt.contains("serving consistency"));
/// ```
pub fn build_prompt(request: &GenerationRequest) -> String {
    let mut prompt = format!(
        "Create a {}-minute {} session for {} players. Group size: {}.\n",
        request.duration_minutes,
        request.sport,
        request.level.to_lowercase(),
        request.group_size
    );

    if let Some(equipment) = &request.equipment {
        let _ = writeln!(prompt, "Available equipment: {equipment}.");
    }
    if let Some(objectives) = &request.objectives {
        let _ = writeln!(prompt, "Session objectives: {objectives}.");
    }

    prompt.push_str(
        "\nSplit the time between warm-up, main activities and cool-down so the \
         activity durations add up to the session length. Give every activity \
         duration as minutes, for example \"10 minutes\".\n\
         \nReturn JSON with exactly these keys:\n\
         {\n\
         \x20 \"title\": string,\n\
         \x20 \"description\": string,\n\
         \x20 \"objectives\": [string],\n\
         \x20 \"equipment\": [string],\n\
         \x20 \"warmUp\": [Activity],\n\
         \x20 \"mainActivities\": [Activity],\n\
         \x20 \"coolDown\": [Activity],\n\
         \x20 \"safetyNotes\": [string],\n\
         \x20 \"progressionTips\": [string]\n\
         }\n\
         where Activity is\n\
         {\n\
         \x20 \"name\": string,\n\
         \x20 \"duration\": string,\n\
         \x20 \"description\": string,\n\
         \x20 \"coachingCues\": [string],\n\
         \x20 \"progressions\": [string],\n\
         \x20 \"modifications\": [string]\n\
         }\n",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            sport: "Rugby".to_string(),
            level: "Advanced".to_string(),
            duration_minutes: 90,
            group_size: "20+ (Team)".to_string(),
            equipment: Some("tackle pads".to_string()),
            objectives: None,
        }
    }

    #[test]
    fn test_prompt_names_classification() {
        let prompt = build_prompt(&request());
        assert!(prompt.starts_with("Create a 90-minute Rugby session for advanced players."));
        assert!(prompt.contains("Group size: 20+ (Team)."));
        assert!(prompt.contains("Available equipment: tackle pads."));
        assert!(!prompt.contains("Session objectives"));
    }

    #[test]
    fn test_prompt_lists_expected_keys() {
        let prompt = build_prompt(&request());
        for key in [
            "\"warmUp\"",
            "\"mainActivities\"",
            "\"coolDown\"",
            "\"coachingCues\"",
            "\"safetyNotes\"",
            "\"progressionTips\"",
        ] {
            assert!(prompt.contains(key), "prompt is missing {key}");
        }
    }
}
