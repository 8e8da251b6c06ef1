//! Data models for coaching plans and playback steps.
//!
//! This module contains the core domain models: the [`Plan`] record shared by
//! the catalog and the remote generator, the [`Activity`] variant held in each
//! session phase, and the derived [`Step`] used by playback. Display
//! implementations live in [`crate::display::models`] so the data structures
//! stay free of presentation logic.
//!
//! # Partial plans
//!
//! Every [`Plan`] field is optional. A catalog record fills them all in; a
//! generated plan may carry any subset. Consumers read lists through the
//! slice accessors (`plan.warm_up()`, `plan.objectives()`, ...), which return
//! an empty slice for an absent field.
//!
//! # Examples
//!
//! ```rust
//! use coachplan_core::models::{Activity, DetailedActivity, Plan};
//!
//! let plan = Plan {
//!     title: Some("Footwork basics".to_string()),
//!     warm_up: Some(vec![Activity::Detailed(DetailedActivity {
//!         name: "Skipping".to_string(),
//!         duration: "3 minutes".to_string(),
//!         ..Default::default()
//!     })]),
//!     ..Default::default()
//! };
//!
//! assert_eq!(plan.warm_up().len(), 1);
//! assert!(plan.cool_down().is_empty());
//! ```

pub mod activity;
pub mod classification;
pub mod filters;
pub mod plan;
pub mod step;
pub mod summary;


pub use activity::{Activity, DetailedActivity};
pub use classification::{GroupSize, SkillLevel, SESSION_DURATIONS};
pub use filters::PlanQuery;
pub use plan::{Adaptations, Plan};
pub use step::{ActivitySource, Phase, Step, StepKind};
pub use summary::PlanSummary;
