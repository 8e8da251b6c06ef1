//! One-line outcome messages that are not plan content.

use std::fmt;

/// Outcome line printed around plan output.
///
/// The CLI prints a success line when a playback session is closed and a
/// failure line when remote generation is unavailable or the model reply is
/// rejected; the same failure text goes to stdout before the process exits
/// non-zero.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::{display::OperationStatus, CoachError};
///
/// let closed = OperationStatus::success("Session closed");
/// assert_eq!(closed.to_string(), "Success: Session closed\n");
///
/// let err = CoachError::generation("HTTP 429 Too Many Requests: slow down");
/// let failed = OperationStatus::from(&err);
/// assert!(!failed.success);
/// assert!(failed.to_string().starts_with("Error: Plan generation failed: HTTP 429"));
/// ```
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl From<&crate::CoachError> for OperationStatus {
    fn from(error: &crate::CoachError) -> Self {
        Self::failure(error.to_string())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success" } else { "Error" };
        writeln!(f, "{label}: {}", self.message)
    }
}
