//! Core library for the Coachplan session planner.
//!
//! This crate resolves coaching-session plans from a static catalog, asks a
//! hosted model for new plans, and drives interactive step-by-step playback
//! with a per-step countdown.
//!
//! - [`catalog`]: The plan catalog and its exact-match resolver
//! - [`generator`]: Remote plan generation over a chat-completion API
//! - [`session`]: Step sequencing, duration parsing, timer and playback
//! - [`coach`]: The [`Coach`] facade used by every interface
//! - [`display`]: Markdown formatting for terminal and MCP output
//!
//! # Quick Start
//!
//! ```rust
//! use coachplan_core::{CoachBuilder, display::StepContent, params::FindPlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let coach = CoachBuilder::new().build().await?;
//!
//! let plan = coach
//!     .find_plan(&FindPlan {
//!         sport: "Soccer".to_string(),
//!         level: "Beginner".to_string(),
//!         duration: 45,
//!         number_of_people: "5-10 (Medium Group)".to_string(),
//!         exact: true,
//!     })
//!     .ok_or("no plan")?;
//!
//! for step in coach.steps(&plan) {
//!     println!("{}", StepContent::new(&plan, &step));
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod coach;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod session;

// Re-export commonly used types
pub use catalog::Catalog;
pub use coach::{Coach, CoachBuilder, LookupOutcome};
pub use display::{
    Countdown, GenerateResult, LookupMiss, OperationStatus, PlanSummaries, StepContent, StepOutline,
    TimerLine,
};
pub use error::{CoachError, Result};
pub use generator::{GenerationRequest, GeneratorConfig, PlanGenerator};
pub use models::{Activity, GroupSize, Plan, PlanQuery, PlanSummary, SkillLevel, Step};
pub use params::{FindPlan, GeneratePlan, Id, ListCatalog};
pub use session::{Command, Outcome, Playback, Session, Timer, TimerState};
