//! Free-text duration labels to whole seconds.

use std::sync::LazyLock;

use regex::Regex;

/// A digit run, at most one whitespace character, then a unit token.
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s?(minutes?|mins?|seconds?|secs?)")
        .expect("duration pattern is valid")
});

/// Parses a duration label such as `"5 minutes"`, `"30 secs"` or `"3 min"`
/// into seconds.
///
/// The first run of digits that is followed by an optional whitespace
/// character and a unit token (`minute`, `minutes`, `min`, `mins`, `second`,
/// `seconds`, `sec`, `secs`, any case) is used. Minutes are multiplied by 60,
/// seconds are taken as-is. Anything else yields `0`, meaning "no timer".
///
/// # Examples
///
/// ```rust
/// use coachplan_core::session::parse_duration;
///
/// assert_eq!(parse_duration("5 minutes"), 300);
/// assert_eq!(parse_duration("30 secs"), 30);
/// assert_eq!(parse_duration("3 min"), 180);
/// assert_eq!(parse_duration("warm up well"), 0);
/// assert_eq!(parse_duration(""), 0);
/// ```
pub fn parse_duration(label: &str) -> u32 {
    let Some(captures) = DURATION_PATTERN.captures(label) else {
        return 0;
    };

    // The digit run is ASCII only, so parsing can fail on overflow alone.
    let value = captures[1].parse::<u32>().unwrap_or(u32::MAX);
    let multiplier = if captures[2].to_ascii_lowercase().starts_with("min") {
        60
    } else {
        1
    };
    value.saturating_mul(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_spellings() {
        assert_eq!(parse_duration("5 minutes"), 300);
        assert_eq!(parse_duration("1 minute"), 60);
        assert_eq!(parse_duration("3 min"), 180);
        assert_eq!(parse_duration("4 mins"), 240);
        assert_eq!(parse_duration("10minutes"), 600);
    }

    #[test]
    fn test_seconds_spellings() {
        assert_eq!(parse_duration("30 seconds"), 30);
        assert_eq!(parse_duration("1 second"), 1);
        assert_eq!(parse_duration("45 sec"), 45);
        assert_eq!(parse_duration("30 secs"), 30);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(parse_duration("2 MINUTES"), 120);
        assert_eq!(parse_duration("20 Secs"), 20);
    }

    #[test]
    fn test_first_matching_run_wins() {
        assert_eq!(parse_duration("8-10 minutes"), 600);
        assert_eq!(parse_duration("3 sets of 45 seconds"), 45);
        assert_eq!(parse_duration("2 minutes then 30 seconds"), 120);
        assert_eq!(parse_duration("Round 2: 90 sec"), 90);
    }

    #[test]
    fn test_unparseable_is_zero() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("warm up well"), 0);
        assert_eq!(parse_duration("10 reps"), 0);
        assert_eq!(parse_duration("minutes"), 0);
        assert_eq!(parse_duration("5  minutes"), 0);
        assert_eq!(parse_duration("5 mi"), 0);
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(parse_duration("étirements 5 min"), 300);
        assert_eq!(parse_duration("⏱"), 0);
    }

    #[test]
    fn test_unit_must_follow_digits() {
        assert_eq!(parse_duration("about 5, minutes"), 0);
        assert_eq!(parse_duration("5\tmin"), 300);
        assert_eq!(parse_duration("5\n\nmin"), 0);
    }

    #[test]
    fn test_huge_values_saturate() {
        assert_eq!(parse_duration("99999999999999 minutes"), u32::MAX);
    }
}
