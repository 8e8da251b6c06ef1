//! Display formatting for plans, steps and playback state.
//!
//! Domain models implement `Display` directly (see [`models`]); views that
//! combine several values, such as a step together with its plan, are
//! wrapper types. Everything renders to markdown so the CLI can feed it to
//! termimad and the MCP server can return it as text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Markdown      │
//! │  (Plan, Step,   │───▶│ (StepContent,   │───▶│    Output       │
//! │   Timer)        │    │  StepOutline..) │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: Catalog listings and step outlines
//! - [`content`]: The body of one playback step
//! - [`countdown`]: `MM:SS` countdowns and the timer status line
//! - [`results`]: Lookup results, lookup misses and generation results
//! - [`status`]: One-line success and failure messages
//!
//! ```rust
//! use coachplan_core::{
//!     display::{StepContent, TimerLine},
//!     models::Plan,
//!     session::Session,
//! };
//!
//! let session = Session::open(Plan::default());
//! let body = StepContent::new(session.plan(), session.current_step()).to_string();
//! assert!(body.contains("Untitled session"));
//! assert_eq!(TimerLine(session.timer()).to_string(), "No timer for this step");
//! ```

pub mod collections;
pub mod content;
pub mod countdown;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{PlanSummaries, StepOutline};
pub use content::StepContent;
pub use countdown::{Countdown, TimerLine};
pub use results::{GenerateResult, LookupMiss};
pub use status::OperationStatus;
