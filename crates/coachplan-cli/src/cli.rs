//! Command-line argument wrappers and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Coach
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use coachplan_core::{
    display::{GenerateResult, LookupMiss, OperationStatus, StepOutline},
    models::PlanQuery,
    params::{FindPlan, GeneratePlan, Id, ListCatalog},
    Coach, Plan,
};
use log::info;

use crate::{player, renderer::TerminalRenderer};

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List catalog plans
    #[command(alias = "l")]
    List(ListCatalogArgs),
    /// Look up the plan for a sport, level, length and group size
    #[command(alias = "f")]
    Find(FindPlanArgs),
    /// Show a catalog plan by ID
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Generate a new plan with the configured model
    #[command(alias = "g")]
    Generate(GeneratePlanArgs),
}

/// List catalog plans
#[derive(Args)]
pub struct ListCatalogArgs {
    #[arg(long, help = "Only list plans for this sport (exact match)")]
    pub sport: Option<String>,
}

impl From<ListCatalogArgs> for ListCatalog {
    fn from(val: ListCatalogArgs) -> Self {
        ListCatalog { sport: val.sport }
    }
}

/// Look up a catalog plan
///
/// All four values must match a catalog record exactly. Without --exact a
/// miss shows the closest plan instead.
#[derive(Args)]
pub struct FindPlanArgs {
    #[arg(help = "Sport name, e.g. Tennis")]
    pub sport: String,
    #[arg(help = "Skill level: Beginner, Intermediate or Advanced")]
    pub level: String,
    #[arg(help = "Session length in minutes: 30, 45, 60 or 90")]
    pub duration: u32,
    #[arg(
        value_name = "PEOPLE",
        help = "Group size band, e.g. \"1 (Individual)\" or \"5-10 (Medium Group)\""
    )]
    pub number_of_people: String,
    #[arg(long, help = "Fail instead of falling back to the closest plan")]
    pub exact: bool,
}

impl From<FindPlanArgs> for FindPlan {
    fn from(val: FindPlanArgs) -> Self {
        FindPlan {
            sport: val.sport,
            level: val.level,
            duration: val.duration,
            number_of_people: val.number_of_people,
            exact: val.exact,
        }
    }
}

/// Show a catalog plan
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Catalog ID of the plan, e.g. tennis-beginner-30-individual")]
    pub id: String,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Generate a plan
///
/// Requires COACHPLAN_API_KEY. COACHPLAN_API_URL, COACHPLAN_MODEL and
/// COACHPLAN_TIMEOUT_SECS override the endpoint, model and timeout.
#[derive(Args)]
pub struct GeneratePlanArgs {
    #[arg(help = "Sport name")]
    pub sport: String,
    #[arg(help = "Skill level: Beginner, Intermediate or Advanced")]
    pub level: String,
    #[arg(help = "Session length in minutes")]
    pub duration: u32,
    #[arg(value_name = "PEOPLE", help = "Group size band label")]
    pub number_of_people: String,
    #[arg(short, long, help = "Available equipment, free text")]
    pub equipment: Option<String>,
    #[arg(long, help = "Session objectives, free text")]
    pub objectives: Option<String>,
    #[arg(short, long, help = "Write the generated plan as JSON to this file")]
    pub output: Option<PathBuf>,
}

impl From<&GeneratePlanArgs> for GeneratePlan {
    fn from(val: &GeneratePlanArgs) -> Self {
        GeneratePlan {
            sport: val.sport.clone(),
            level: val.level.clone(),
            duration: val.duration,
            number_of_people: val.number_of_people.clone(),
            equipment: val.equipment.clone(),
            objectives: val.objectives.clone(),
        }
    }
}

/// Where to take a plan from: a catalog ID or a plan JSON file.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct PlanSourceArgs {
    #[arg(long, help = "Catalog ID of the plan")]
    pub id: Option<String>,
    #[arg(long, help = "Plan JSON file, e.g. written by `plan generate --output`")]
    pub file: Option<PathBuf>,
}

/// Handlers for CLI commands.
pub struct Cli {
    coach: Coach,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(coach: Coach, renderer: TerminalRenderer) -> Self {
        Self { coach, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List(args) => self.list_catalog(&args.into()),
            PlanCommands::Find(args) => self.find_plan(&args.into()),
            PlanCommands::Show(args) => self.show_plan(&args.into()),
            PlanCommands::Generate(args) => self.generate_plan(&args).await,
        }
    }

    pub fn list_catalog(&self, params: &ListCatalog) -> Result<()> {
        let summaries = self.coach.list_catalog(params);
        let title = match &params.sport {
            Some(sport) => format!("{sport} Plans"),
            None => "Plan Catalog".to_string(),
        };
        self.renderer.render(&format!("# {title}\n\n{summaries}"))
    }

    fn find_plan(&self, params: &FindPlan) -> Result<()> {
        match self.coach.find_plan_or_fallback(params) {
            Some(outcome) => self.renderer.render(&outcome.to_string()),
            None => {
                let query = PlanQuery::from(params);
                self.renderer.render(&LookupMiss(&query).to_string())?;
                bail!("No catalog plan matches {}", query.key())
            }
        }
    }

    fn show_plan(&self, params: &Id) -> Result<()> {
        let plan = self.coach.show_plan(params)?;
        self.renderer.render(&plan.to_string())
    }

    async fn generate_plan(&self, args: &GeneratePlanArgs) -> Result<()> {
        let plan = match self.coach.generate_plan(&args.into()).await {
            Ok(plan) => plan,
            Err(e) => {
                self.renderer
                    .render(&OperationStatus::from(&e).to_string())?;
                return Err(e).context("Could not generate a plan");
            }
        };

        let mut result = GenerateResult::new(plan);
        if let Some(path) = &args.output {
            let json = serde_json::to_string_pretty(&result.plan)?;
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Saved generated plan to {}", path.display());
            result = result.saved_to(path.clone());
        }
        self.renderer.render(&result.to_string())
    }

    pub async fn show_steps(&self, source: PlanSourceArgs) -> Result<()> {
        let plan = self.load_plan(source).await?;
        let steps = self.coach.steps(&plan);
        self.renderer
            .render(&StepOutline::new(&plan, &steps).to_string())
    }

    pub async fn play(&self, source: PlanSourceArgs) -> Result<()> {
        let plan = self.load_plan(source).await?;
        let playback = self.coach.open_session(plan);
        player::run(playback, &self.renderer).await?;
        self.renderer
            .render(&OperationStatus::success("Session closed").to_string())
    }

    async fn load_plan(&self, source: PlanSourceArgs) -> Result<Plan> {
        match (source.id, source.file) {
            (Some(id), _) => Ok(self.coach.show_plan(&Id { id })?),
            (None, Some(path)) => self
                .coach
                .load_plan(&path)
                .await
                .with_context(|| format!("Failed to load plan from {}", path.display())),
            (None, None) => bail!("Either --id or --file is required"),
        }
    }
}
