//! Catalog lookup operations for the Coach.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::Coach;
use crate::{
    display::PlanSummaries,
    error::{CoachError, Result},
    models::{Plan, PlanQuery, Step},
    params::{FindPlan, Id, ListCatalog},
    session::{build_steps, Playback},
};

/// Result of a lookup that may fall back to a nearby plan.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The catalog holds a plan for exactly the requested tuple
    Exact(Plan),
    /// No exact match; `plan` is the closest catalog entry
    Fallback { requested: PlanQuery, plan: Plan },
}

impl LookupOutcome {
    pub fn plan(&self) -> &Plan {
        match self {
            Self::Exact(plan) | Self::Fallback { plan, .. } => plan,
        }
    }

    pub fn into_plan(self) -> Plan {
        match self {
            Self::Exact(plan) | Self::Fallback { plan, .. } => plan,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

impl Coach {
    /// Exact-match lookup. A miss is `None`.
    pub fn find_plan(&self, params: &FindPlan) -> Option<Plan> {
        self.catalog.resolve(&PlanQuery::from(params)).cloned()
    }

    /// Lookup that falls back to the closest plan on a miss, unless
    /// `params.exact` is set.
    ///
    /// `None` when nothing matches and either `exact` is set or the catalog
    /// is empty.
    pub fn find_plan_or_fallback(&self, params: &FindPlan) -> Option<LookupOutcome> {
        let query = PlanQuery::from(params);
        if let Some(plan) = self.catalog.resolve(&query) {
            return Some(LookupOutcome::Exact(plan.clone()));
        }
        if params.exact {
            return None;
        }

        let plan = self.catalog.fallback_for(&query)?.clone();
        info!(
            "No plan for {}, falling back to {}",
            query.key(),
            plan.id.as_deref().unwrap_or("unnamed plan")
        );
        Some(LookupOutcome::Fallback {
            requested: query,
            plan,
        })
    }

    /// Fetches a catalog plan by id.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::PlanNotFound` for an unknown id.
    pub fn show_plan(&self, params: &Id) -> Result<Plan> {
        self.catalog
            .get(&params.id)
            .cloned()
            .ok_or_else(|| CoachError::PlanNotFound {
                id: params.id.clone(),
            })
    }

    /// Lists catalog plans, optionally for one sport.
    pub fn list_catalog(&self, params: &ListCatalog) -> PlanSummaries {
        PlanSummaries(self.catalog.summaries(params.sport.as_deref()))
    }

    /// The linear step sequence for a plan.
    pub fn steps(&self, plan: &Plan) -> Vec<Step> {
        build_steps(plan)
    }

    /// Starts real-time playback of a plan at its overview step.
    pub fn open_session(&self, plan: Plan) -> Playback {
        info!("Opening session for '{}'", plan.display_title());
        Playback::open(plan)
    }

    /// Reads a single plan from a JSON file, such as one written by
    /// `coach plan generate --output`.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::FileSystem` if the file cannot be read and
    /// `CoachError::Serialization` if it is not a plan.
    pub async fn load_plan(&self, path: &Path) -> Result<Plan> {
        let path: PathBuf = path.to_path_buf();

        task::spawn_blocking(move || {
            let json = std::fs::read_to_string(&path).map_err(|e| CoachError::FileSystem {
                path: path.clone(),
                source: e,
            })?;
            Ok(serde_json::from_str(&json)?)
        })
        .await
        .map_err(|e| CoachError::configuration(format!("Task join error: {e}")))?
    }
}
