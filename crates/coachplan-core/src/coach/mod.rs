//! High-level coach API tying the catalog, generator and session engine
//! together.
//!
//! [`Coach`] is the single entry point used by the CLI and the MCP server:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI / MCP     │    │      Coach      │    │ Catalog         │
//! │    handlers     │───▶│ (lookup_ops,    │───▶│ PlanGenerator   │
//! │                 │    │  generate_ops)  │    │ Playback        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`builder`]: Factory for [`Coach`] instances
//! - [`lookup_ops`]: Catalog lookup, listing and step outlines
//! - [`generate_ops`]: Remote plan generation
//!
//! # Usage Examples
//!
//! ```rust
//! use coachplan_core::{CoachBuilder, params::FindPlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let coach = CoachBuilder::new().build().await?;
//!
//! let outcome = coach.find_plan_or_fallback(&FindPlan {
//!     sport: "Tennis".to_string(),
//!     level: "Beginner".to_string(),
//!     duration: 30,
//!     number_of_people: "1 (Individual)".to_string(),
//!     exact: false,
//! });
//! if let Some(outcome) = outcome {
//!     let mut playback = coach.open_session(outcome.into_plan());
//!     playback.close();
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod generate_ops;
pub mod lookup_ops;


pub use builder::CoachBuilder;
pub use lookup_ops::LookupOutcome;

use crate::{catalog::Catalog, generator::PlanGenerator};

/// Main coach interface.
#[derive(Debug)]
pub struct Coach {
    pub(crate) catalog: Catalog,
    pub(crate) generator: Option<PlanGenerator>,
}

impl Coach {
    pub(crate) fn new(catalog: Catalog, generator: Option<PlanGenerator>) -> Self {
        Self { catalog, generator }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// True when remote generation is configured.
    pub fn can_generate(&self) -> bool {
        self.generator.is_some()
    }
}
