//! MCP tool handlers implementation

use std::sync::Arc;

use coachplan_core::{
    display::{GenerateResult, LookupMiss, StepOutline},
    models::PlanQuery,
    params as core,
    Coach,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

// The core parameter types derive JsonSchema behind the "schema" feature.
// McpParams adds Deserialize + JsonSchema as a transparent container so the
// tool signatures stay typed without the core depending on rmcp.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type FindPlan = McpParams<core::FindPlan>;
pub type ListCatalog = McpParams<core::ListCatalog>;
pub type GeneratePlan = McpParams<core::GeneratePlan>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.to_string())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    coach: Arc<Coach>,
}

impl McpHandlers {
    pub fn new(coach: Arc<Coach>) -> Self {
        Self { coach }
    }

    pub fn list_catalog(&self, Parameters(params): Parameters<ListCatalog>) -> McpResult {
        debug!("list_catalog: {params:?}");

        let summaries = self.coach.list_catalog(params.as_ref());
        let title = match &params.as_ref().sport {
            Some(sport) => format!("{sport} Plans"),
            None => "Plan Catalog".to_string(),
        };
        text(format!("# {title}\n\n{summaries}"))
    }

    pub fn find_plan(&self, Parameters(params): Parameters<FindPlan>) -> McpResult {
        debug!("find_plan: {params:?}");

        match self.coach.find_plan_or_fallback(params.as_ref()) {
            Some(outcome) => text(outcome),
            None => text(LookupMiss(&PlanQuery::from(params.as_ref()))),
        }
    }

    pub fn show_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_plan: {params:?}");

        let plan = self
            .coach
            .show_plan(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to show plan", &e))?;
        text(plan)
    }

    pub fn show_steps(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_steps: {params:?}");

        let plan = self
            .coach
            .show_plan(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to show steps", &e))?;
        let steps = self.coach.steps(&plan);
        text(StepOutline::new(&plan, &steps))
    }

    pub async fn generate_plan(&self, Parameters(params): Parameters<GeneratePlan>) -> McpResult {
        debug!("generate_plan: {params:?}");

        let plan = self
            .coach
            .generate_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;
        text(GenerateResult::new(plan))
    }
}
