//! Remote plan generation through a hosted chat-completion API.
//!
//! ```text
//! GeneratePlan ──validate──▶ GenerationRequest ──build_prompt──▶ POST /chat/completions
//!                                                                     │
//!                                     Plan ◀──parse_generated_plan────┘
//! ```
//!
//! The API is OpenAI-compatible; endpoint, model and key come from the
//! environment (see [`GeneratorConfig::from_env`]). Generated plans are
//! partial: any section the model leaves out is treated as empty.

pub mod client;
pub mod config;
pub mod parse;
pub mod prompt;

pub use client::PlanGenerator;
pub use config::GeneratorConfig;
pub use parse::{parse_generated_plan, GENERATED_ID_PREFIX};
pub use prompt::{build_prompt, SYSTEM_PROMPT};

/// A validated generation request.
///
/// Built from [`crate::params::GeneratePlan::validate`]; free-text fields are
/// trimmed and blank optional fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub sport: String,
    pub level: String,
    pub duration_minutes: u32,
    /// Group-size band label
    pub group_size: String,
    pub equipment: Option<String>,
    pub objectives: Option<String>,
}
