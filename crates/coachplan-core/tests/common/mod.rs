use coachplan_core::{Coach, CoachBuilder};
use tempfile::TempDir;

/// Catalog with one fully timed plan and one plan of free-text activities.
pub const TEST_CATALOG: &str = r#"[
  {
    "id": "hockey-beginner-60-medium",
    "sport": "Hockey",
    "level": "Beginner",
    "duration": 60,
    "numberOfPeople": "5-10 (Medium Group)",
    "title": "Stick handling foundations",
    "objectives": ["Close ball control"],
    "warmUp": [
      {"name": "Jog and dribble", "duration": "5 minutes", "description": "Easy laps with the ball."},
      "Dynamic stretches"
    ],
    "mainActivities": [
      {"name": "Cone slalom", "duration": "15 minutes"},
      {"name": "Pass and move", "duration": "20 minutes"},
      {"name": "Small-sided game", "duration": "as long as needed"}
    ],
    "coolDown": [
      {"name": "Walk and stretch", "duration": "5 min"}
    ],
    "assessmentCriteria": ["Ball stays within stick reach"]
  },
  {
    "id": "hockey-advanced-30-individual",
    "sport": "Hockey",
    "level": "Advanced",
    "duration": 30,
    "numberOfPeople": "1 (Individual)",
    "title": "Solo skills",
    "mainActivities": ["Wall passes"]
  }
]"#;

/// Helper function to create a coach over `TEST_CATALOG`
pub async fn create_test_coach() -> (TempDir, Coach) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(&catalog_path, TEST_CATALOG).expect("Failed to write catalog");
    let coach = CoachBuilder::new()
        .with_catalog_path(Some(&catalog_path))
        .build()
        .await
        .expect("Failed to create coach");
    (temp_dir, coach)
}
