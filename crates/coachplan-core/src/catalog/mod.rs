//! Static plan catalog and exact-match resolver.
//!
//! The catalog is an immutable list of fully populated plans, one per
//! classification tuple `(sport, level, duration, numberOfPeople)`. Duplicate
//! tuples are rejected when the catalog is built, so a lookup can match at
//! most one record.

use std::{collections::HashSet, path::Path};

use log::debug;

use crate::{
    error::{CoachError, Result},
    models::{Plan, PlanQuery, PlanSummary},
};

/// The catalog compiled into the binary.
pub const BUILTIN_CATALOG: &str = include_str!("builtin.json");

/// Immutable, validated list of catalog plans.
#[derive(Debug, Clone)]
pub struct Catalog {
    plans: Vec<Plan>,
}

impl Catalog {
    /// Validates and wraps a list of plans.
    ///
    /// # Errors
    ///
    /// * `CoachError::InvalidInput` - When a plan lacks an id or any
    ///   classification field
    /// * `CoachError::DuplicateCatalogEntry` - When two plans share an id or a
    ///   classification tuple
    pub fn from_plans(plans: Vec<Plan>) -> Result<Self> {
        let mut keys = HashSet::with_capacity(plans.len());
        let mut ids = HashSet::with_capacity(plans.len());

        for plan in &plans {
            let id = plan.id.as_deref().ok_or_else(|| {
                CoachError::invalid_input("id").with_reason(format!(
                    "catalog plan '{}' has no id",
                    plan.display_title()
                ))
            })?;
            if !ids.insert(id) {
                return Err(CoachError::DuplicateCatalogEntry {
                    key: format!("id '{id}'"),
                });
            }

            let key = PlanQuery::try_from(plan)?.key();
            if !keys.insert(key.clone()) {
                return Err(CoachError::DuplicateCatalogEntry { key });
            }
        }

        debug!("Catalog loaded with {} plans", plans.len());
        Ok(Self { plans })
    }

    /// Parses a JSON array of plans.
    pub fn from_json(json: &str) -> Result<Self> {
        let plans: Vec<Plan> = serde_json::from_str(json)?;
        Self::from_plans(plans)
    }

    /// The catalog shipped with the library.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Reads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::FileSystem` if the file cannot be read, plus any
    /// error from [`Catalog::from_json`].
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| CoachError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Exact-match lookup on all four classification fields.
    ///
    /// A miss is `None`, not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coachplan_core::{catalog::Catalog, models::PlanQuery};
    ///
    /// let catalog = Catalog::builtin()?;
    /// let hit = catalog.resolve(&PlanQuery::new("Tennis", "Beginner", 30, "1 (Individual)"));
    /// assert_eq!(hit.and_then(|plan| plan.id.as_deref()), Some("tennis-beginner-30-individual"));
    ///
    /// let miss = catalog.resolve(&PlanQuery::new("Tennis", "Beginner", 31, "1 (Individual)"));
    /// assert!(miss.is_none());
    /// # Ok::<(), coachplan_core::CoachError>(())
    /// ```
    pub fn resolve(&self, query: &PlanQuery) -> Option<&Plan> {
        let found = self.plans.iter().find(|plan| query.matches(plan));
        debug!(
            "Resolve {}: {}",
            query.key(),
            found.and_then(|plan| plan.id.as_deref()).unwrap_or("no match")
        );
        found
    }

    /// Closest plan for a lookup miss: same sport and level, then same sport,
    /// then the first catalog plan. `None` only for an empty catalog.
    pub fn fallback_for(&self, query: &PlanQuery) -> Option<&Plan> {
        let same_sport = |plan: &&Plan| plan.sport.as_deref() == Some(query.sport.as_str());
        let same_level =
            |plan: &&Plan| plan.level.map(|level| level.as_str()) == Some(query.level.as_str());

        self.plans
            .iter()
            .find(|plan| same_sport(plan) && same_level(plan))
            .or_else(|| self.plans.iter().find(same_sport))
            .or_else(|| self.plans.first())
    }

    /// Fetches a plan by id.
    pub fn get(&self, id: &str) -> Option<&Plan> {
        self.plans
            .iter()
            .find(|plan| plan.id.as_deref() == Some(id))
    }

    /// Listing entries, optionally restricted to one sport.
    pub fn summaries(&self, sport: Option<&str>) -> Vec<PlanSummary> {
        self.plans
            .iter()
            .filter(|plan| sport.is_none() || plan.sport.as_deref() == sport)
            .map(PlanSummary::from)
            .collect()
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupSize, SkillLevel};

    fn record(id: &str, sport: &str, level: SkillLevel, duration: u32, band: GroupSize) -> Plan {
        Plan {
            id: Some(id.to_string()),
            sport: Some(sport.to_string()),
            level: Some(level),
            duration: Some(duration),
            number_of_people: Some(band),
            ..Default::default()
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().expect("builtin catalog is valid");
        assert!(catalog.len() >= 16);
        assert!(catalog.plans().iter().all(|plan| plan.activity_count() > 0));
    }

    #[test]
    fn test_builtin_catalog_covers_every_choice() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let plans = catalog.plans();

        for level in SkillLevel::ALL {
            assert!(plans.iter().any(|plan| plan.level == Some(level)), "{level:?}");
        }
        for band in GroupSize::ALL {
            assert!(plans.iter().any(|plan| plan.number_of_people == Some(band)), "{band:?}");
        }
        for minutes in crate::models::SESSION_DURATIONS {
            assert!(plans.iter().any(|plan| plan.duration == Some(minutes)), "{minutes}");
        }
    }

    #[test]
    fn test_resolve_requires_all_four_fields() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let hit = |q: PlanQuery| catalog.resolve(&q).and_then(|p| p.id.clone());

        assert_eq!(
            hit(PlanQuery::new("Tennis", "Beginner", 30, "1 (Individual)")),
            Some("tennis-beginner-30-individual".to_string())
        );
        assert_eq!(hit(PlanQuery::new("Tennis", "Beginner", 31, "1 (Individual)")), None);
        assert_eq!(hit(PlanQuery::new("tennis", "Beginner", 30, "1 (Individual)")), None);
        assert_eq!(hit(PlanQuery::new("Tennis", "beginner", 30, "1 (Individual)")), None);
        assert_eq!(hit(PlanQuery::new("Tennis", "Beginner", 30, "1 (individual)")), None);
        assert_eq!(
            hit(PlanQuery::new("Tennis", "Intermediate", 60, "2-4 (Small Group)")),
            Some("tennis-intermediate-60-small".to_string())
        );
    }

    #[test]
    fn test_duplicate_tuples_rejected() {
        let plans = vec![
            record("a", "Golf", SkillLevel::Beginner, 30, GroupSize::Individual),
            record("b", "Golf", SkillLevel::Beginner, 30, GroupSize::Individual),
        ];
        let err = Catalog::from_plans(plans).expect_err("duplicate tuple");
        assert!(matches!(err, CoachError::DuplicateCatalogEntry { .. }));
        assert!(err.to_string().contains("Golf/Beginner/30/1 (Individual)"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let plans = vec![
            record("a", "Golf", SkillLevel::Beginner, 30, GroupSize::Individual),
            record("a", "Golf", SkillLevel::Advanced, 30, GroupSize::Individual),
        ];
        assert!(matches!(
            Catalog::from_plans(plans),
            Err(CoachError::DuplicateCatalogEntry { .. })
        ));
    }

    #[test]
    fn test_incomplete_record_rejected() {
        let mut plan = record("a", "Golf", SkillLevel::Beginner, 30, GroupSize::Individual);
        plan.duration = None;
        assert!(matches!(
            Catalog::from_plans(vec![plan]),
            Err(CoachError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_fallback_prefers_sport_and_level() {
        let catalog = Catalog::from_plans(vec![
            record("golf-adv", "Golf", SkillLevel::Advanced, 60, GroupSize::Small),
            record("golf-beg", "Golf", SkillLevel::Beginner, 60, GroupSize::Small),
            record("judo-beg", "Judo", SkillLevel::Beginner, 45, GroupSize::Team),
        ])
        .expect("valid catalog");

        let fallback = |q: PlanQuery| catalog.fallback_for(&q).and_then(|p| p.id.clone());
        assert_eq!(
            fallback(PlanQuery::new("Golf", "Beginner", 90, "20+ (Team)")),
            Some("golf-beg".to_string())
        );
        assert_eq!(
            fallback(PlanQuery::new("Golf", "Intermediate", 90, "20+ (Team)")),
            Some("golf-adv".to_string())
        );
        assert_eq!(
            fallback(PlanQuery::new("Rowing", "Beginner", 30, "1 (Individual)")),
            Some("golf-adv".to_string())
        );
    }

    #[test]
    fn test_empty_catalog_has_no_fallback() {
        let catalog = Catalog::from_plans(vec![]).expect("empty catalog is valid");
        assert!(catalog.is_empty());
        assert!(catalog
            .fallback_for(&PlanQuery::new("Golf", "Beginner", 30, "1 (Individual)"))
            .is_none());
    }

    #[test]
    fn test_summaries_filter_by_sport() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let tennis = catalog.summaries(Some("Tennis"));
        assert_eq!(tennis.len(), 3);
        assert!(tennis.iter().all(|s| s.sport.as_deref() == Some("Tennis")));
        assert_eq!(catalog.summaries(None).len(), catalog.len());
        assert!(catalog.summaries(Some("Curling")).is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert!(catalog.get("soccer-beginner-45-medium").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_from_json_reports_serialization_errors() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CoachError::Serialization { .. })
        ));
    }
}
