//! Coachplan CLI Application
//!
//! Command-line interface for finding, generating and playing back coaching
//! session plans, plus an MCP server mode.

mod args;
mod cli;
mod keyboard;
mod mcp;
mod player;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use coachplan_core::{params::ListCatalog, CoachBuilder, GeneratorConfig};
use log::{debug, info};
use mcp::{run_stdio_server, CoachMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let Args {
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let generator = match GeneratorConfig::from_env() {
        Ok(config) => Some(config),
        Err(e) => {
            debug!("Remote generation disabled: {e}");
            None
        }
    };

    let coach = CoachBuilder::new()
        .with_catalog_path(catalog_file)
        .with_generator(generator)
        .build()
        .await
        .context("Failed to load plan catalog")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Coachplan started with {} catalog plans", coach.catalog().len());

    match command {
        Some(Plan { command }) => {
            Cli::new(coach, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Steps(source)) => Cli::new(coach, renderer).show_steps(source).await,
        Some(Play(source)) => Cli::new(coach, renderer).play(source).await,
        Some(Serve) => {
            info!("Starting Coachplan MCP server");
            run_stdio_server(CoachMcpServer::new(coach))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(coach, renderer).list_catalog(&ListCatalog::default()),
    }
}
