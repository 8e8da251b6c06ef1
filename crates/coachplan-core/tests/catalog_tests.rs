mod common;

use coachplan_core::{
    params::{FindPlan, ListCatalog},
    CoachBuilder, CoachError, LookupOutcome,
};
use common::create_test_coach;
use tempfile::TempDir;

fn query(sport: &str, level: &str, duration: u32, people: &str) -> FindPlan {
    FindPlan {
        sport: sport.to_string(),
        level: level.to_string(),
        duration,
        number_of_people: people.to_string(),
        exact: false,
    }
}

#[tokio::test]
async fn test_resolver_exactness() {
    let (_temp_dir, coach) = create_test_coach().await;
    let base = query("Hockey", "Beginner", 60, "5-10 (Medium Group)");
    assert!(coach.find_plan(&base).is_some());

    let variants = [
        FindPlan {
            sport: "hockey".to_string(),
            ..base.clone()
        },
        FindPlan {
            level: "Intermediate".to_string(),
            ..base.clone()
        },
        FindPlan {
            duration: 61,
            ..base.clone()
        },
        FindPlan {
            number_of_people: "11-20 (Large Group)".to_string(),
            ..base.clone()
        },
    ];
    for variant in &variants {
        assert!(
            coach.find_plan(variant).is_none(),
            "{variant:?} should not match"
        );
    }
}

#[tokio::test]
async fn test_fallback_reports_requested_tuple() {
    let (_temp_dir, coach) = create_test_coach().await;

    let outcome = coach
        .find_plan_or_fallback(&query("Hockey", "Advanced", 90, "20+ (Team)"))
        .expect("fallback plan");
    match &outcome {
        LookupOutcome::Fallback { requested, plan } => {
            assert_eq!(requested.key(), "Hockey/Advanced/90/20+ (Team)");
            assert_eq!(plan.id.as_deref(), Some("hockey-advanced-30-individual"));
        }
        LookupOutcome::Exact(_) => panic!("expected a fallback"),
    }
    assert!(outcome
        .to_string()
        .starts_with("> No catalog plan for Hockey/Advanced/90/20+ (Team)"));
}

#[tokio::test]
async fn test_listing_by_sport() {
    let (_temp_dir, coach) = create_test_coach().await;

    let hockey = coach.list_catalog(&ListCatalog {
        sport: Some("Hockey".to_string()),
    });
    assert_eq!(hockey.len(), 2);
    assert_eq!(hockey[0].total_activities, 6);

    let none = coach.list_catalog(&ListCatalog {
        sport: Some("Tennis".to_string()),
    });
    assert_eq!(none.to_string(), "No plans found.\n");
}

#[tokio::test]
async fn test_malformed_catalog_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(&path, r#"[{"id": "x", "sport": "Hockey"}]"#).expect("write");

    let err = CoachBuilder::new()
        .with_catalog_path(Some(&path))
        .build()
        .await
        .expect_err("incomplete classification");
    assert!(matches!(err, CoachError::InvalidInput { .. }));
}
