//! Error handling utilities for MCP server

use coachplan_core::CoachError;
use rmcp::ErrorData;

/// Helper to convert coach errors to MCP errors
///
/// Bad parameters become `invalid_params`; everything else is an internal
/// error.
pub fn to_mcp_error(message: &str, error: &CoachError) -> ErrorData {
    match error {
        CoachError::InvalidInput { .. } | CoachError::PlanNotFound { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}
