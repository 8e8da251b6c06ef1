use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, PlanSourceArgs};

/// Coaching session planner
///
/// Looks up ready-made session plans by sport, level, length and group size,
/// generates new plans with a hosted model, and walks through a plan step by
/// step with a countdown for each activity. Also runs as an MCP server so AI
/// assistants can query the catalog.
#[derive(Parser)]
#[command(version, about, name = "coach")]
pub struct Args {
    /// Plan catalog JSON file. Defaults to $XDG_DATA_HOME/coachplan/catalog.json
    /// when present, otherwise the built-in catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the coach CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Find, show and generate plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Print the step outline of a plan with per-step timers
    #[command(alias = "s")]
    Steps(PlanSourceArgs),
    /// Walk through a plan interactively
    ///
    /// Keys: Right/Left move between steps, 1-9 jump to a step, Space starts
    /// or pauses the timer, r resets it, m minimizes it, Esc closes.
    Play(PlanSourceArgs),
    /// Start the MCP server
    Serve,
}
