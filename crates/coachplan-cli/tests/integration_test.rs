//! Integration tests comparing CLI and direct Display implementations
//!
//! The CLI and the MCP server both print through the core Display impls, so
//! plain-text CLI output must match formatting the same values directly.

use std::process::Command;

use coachplan_core::{
    catalog::BUILTIN_CATALOG,
    display::{PlanSummaries, StepOutline},
    params::{FindPlan, Id, ListCatalog},
    Coach, CoachBuilder,
};
use tempfile::TempDir;

/// Helper function to create a coach backed by a copy of the built-in
/// catalog, independent of any user catalog on the test machine
async fn create_test_coach() -> Coach {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(&catalog_path, BUILTIN_CATALOG).expect("Failed to write catalog");

    CoachBuilder::new()
        .with_catalog_path(Some(&catalog_path))
        .build()
        .await
        .expect("Failed to create coach")
}

/// Run a CLI command and capture its output
fn run_cli_command(args: &[&str]) -> String {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_coach"));
    cmd.current_dir(temp_dir.path())
        .env("XDG_DATA_HOME", temp_dir.path())
        .env_remove("COACHPLAN_API_KEY")
        .arg("--no-color");

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_show_plan_output_consistency() {
    let coach = create_test_coach().await;
    let plan = coach
        .show_plan(&Id {
            id: "basketball-advanced-90-team".to_string(),
        })
        .expect("Plan should exist");

    let cli_output = run_cli_command(&["plan", "show", "basketball-advanced-90-team"]);
    assert_eq!(cli_output.trim_end(), plan.to_string().trim_end());
}

#[tokio::test]
async fn test_list_output_consistency() {
    let coach = create_test_coach().await;
    let summaries: PlanSummaries = coach.list_catalog(&ListCatalog {
        sport: Some("Soccer".to_string()),
    });

    let cli_output = run_cli_command(&["plan", "list", "--sport", "Soccer"]);
    let expected = format!("# Soccer Plans\n\n{summaries}");
    assert_eq!(cli_output.trim_end(), expected.trim_end());
}

#[tokio::test]
async fn test_find_fallback_output_consistency() {
    let coach = create_test_coach().await;
    let outcome = coach
        .find_plan_or_fallback(&FindPlan {
            sport: "Swimming".to_string(),
            level: "Advanced".to_string(),
            duration: 60,
            number_of_people: "1 (Individual)".to_string(),
            exact: false,
        })
        .expect("Catalog is not empty");
    assert!(!outcome.is_exact());

    let cli_output = run_cli_command(&["plan", "find", "Swimming", "Advanced", "60", "1 (Individual)"]);
    assert_eq!(cli_output.trim_end(), outcome.to_string().trim_end());
}

#[tokio::test]
async fn test_steps_output_consistency() {
    let coach = create_test_coach().await;
    let plan = coach
        .show_plan(&Id {
            id: "swimming-beginner-30-small".to_string(),
        })
        .expect("Plan should exist");
    let steps = coach.steps(&plan);

    let cli_output = run_cli_command(&["steps", "--id", "swimming-beginner-30-small"]);
    assert_eq!(
        cli_output.trim_end(),
        StepOutline::new(&plan, &steps).to_string().trim_end()
    );
}
