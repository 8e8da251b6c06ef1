//! MCP server implementation for Coachplan
//!
//! This module implements the Model Context Protocol server, exposing the
//! plan catalog, step outlines and remote generation as tools for AI
//! assistants. Interactive playback stays a terminal feature.

use std::sync::Arc;

use anyhow::Result;
use coachplan_core::Coach;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

use handlers::{FindPlan, GeneratePlan, Id, ListCatalog, McpHandlers, McpResult};

const INSTRUCTIONS: &str = r#"Coachplan helps plan coaching sessions for sports teams and individual athletes.

## Core Concepts
- **Plan**: a full session with objectives, equipment, warm-up, main activities, cool-down, assessment criteria and tips
- **Classification**: every catalog plan is filed under sport, level (Beginner/Intermediate/Advanced), duration in minutes (30/45/60/90) and group size band ("1 (Individual)", "2-4 (Small Group)", "5-10 (Medium Group)", "11-20 (Large Group)", "20+ (Team)")
- **Steps**: a plan played back as overview, one step per activity, then a summary

## Workflow
1. Use `list_catalog` to see what is available, optionally for one sport
2. Use `find_plan` with all four classification values; values must match exactly. With exact=false a miss returns the closest plan and says so
3. Use `show_plan` or `show_steps` with a plan ID for the full plan or its timed step outline
4. Use `generate_plan` when nothing in the catalog fits; it requires the server to be configured with an API key"#;

/// MCP server for Coachplan
#[derive(Clone)]
pub struct CoachMcpServer {
    coach: Arc<Coach>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CoachMcpServer {
    /// Create a new Coachplan MCP server
    pub fn new(coach: Coach) -> Self {
        Self {
            coach: Arc::new(coach),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(Arc::clone(&self.coach))
    }

    #[tool(
        name = "list_catalog",
        description = "List the coaching plans in the catalog with their ID, sport, level, duration, group size and number of activities. Pass sport to restrict the list to one sport (exact, case-sensitive match)."
    )]
    async fn list_catalog(&self, params: Parameters<ListCatalog>) -> McpResult {
        self.handlers().list_catalog(params)
    }

    #[tool(
        name = "find_plan",
        description = "Find the catalog plan for a sport, level, duration in minutes and group size band. All four values must match a catalog entry exactly, e.g. sport=\"Tennis\", level=\"Beginner\", duration=30, number_of_people=\"1 (Individual)\". With exact=false (default) a miss returns the closest plan with a notice; with exact=true a miss reports that nothing matched."
    )]
    async fn find_plan(&self, params: Parameters<FindPlan>) -> McpResult {
        self.handlers().find_plan(params)
    }

    #[tool(
        name = "show_plan",
        description = "Show the complete catalog plan for an ID: objectives, equipment, safety considerations, every warm-up, main and cool-down activity with coaching cues, assessment criteria, adaptations and tips."
    )]
    async fn show_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_plan(params)
    }

    #[tool(
        name = "show_steps",
        description = "Show the numbered playback steps for a catalog plan ID (overview, one step per activity, summary) with the countdown length of each timed activity."
    )]
    async fn show_steps(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_steps(params)
    }

    #[tool(
        name = "generate_plan",
        description = "Generate a new coaching plan with the configured language model. Requires sport, level, duration in minutes and group size; equipment and objectives are optional free text. The generated plan is not added to the catalog."
    )]
    async fn generate_plan(&self, params: Parameters<GeneratePlan>) -> McpResult {
        self.handlers().generate_plan(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CoachMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CoachMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Coachplan MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );
    if !server.coach.can_generate() {
        info!("generate_plan is unavailable until COACHPLAN_API_KEY is set");
    }

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
