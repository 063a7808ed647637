//! Tests for the navigator module.

use tempfile::TempDir;

use super::*;
use crate::{
    catalog::Catalog,
    models::StepStatus,
    params::{GenerateRoadmap, Id, ListTemplates, MatchProfile, UpdateStepStatus, UserId},
};

/// Helper function to create a navigator with the bundled catalog loaded
async fn create_test_navigator() -> (TempDir, Navigator) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let navigator = NavigatorBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create navigator");
    navigator
        .import_catalog(Catalog::bundled().expect("bundled catalog"))
        .await
        .expect("Failed to import catalog");
    (temp_dir, navigator)
}

fn generate_params(user_id: u64, branch: &str, goal: &str) -> GenerateRoadmap {
    GenerateRoadmap {
        user_id,
        branch: branch.to_string(),
        career_goal: goal.to_string(),
        current_year: 2,
        current_semester: 1,
    }
}

fn update_params(user_id: u64, step_id: u64, status: &str) -> UpdateStepStatus {
    UpdateStepStatus {
        user_id,
        step_id,
        status: status.to_string(),
        notes: None,
    }
}

#[tokio::test]
async fn test_build_creates_nested_database_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("dir").join("nav.db");

    let navigator = NavigatorBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create navigator");

    assert!(db_path.exists());
    assert_eq!(navigator.database_path(), &db_path);
}

#[tokio::test]
async fn test_generate_roadmap_is_idempotent() {
    let (_temp_dir, navigator) = create_test_navigator().await;
    let params = generate_params(1, "cse", "python_backend_developer");

    let first = navigator.generate_roadmap(&params).await.expect("generate");
    assert!(first.created);
    assert_eq!(first.roadmap.steps.len(), 10);

    // A different profile is ignored once a roadmap exists
    let second = navigator
        .generate_roadmap(&generate_params(1, "civil", "data_engineer"))
        .await
        .expect("generate again");
    assert!(!second.created);
    assert_eq!(second.roadmap.id, first.roadmap.id);
    assert_eq!(second.roadmap.steps.len(), 10);
}

#[tokio::test]
async fn test_generate_roadmap_rejects_unknown_goal_before_touching_store() {
    let (_temp_dir, navigator) = create_test_navigator().await;

    let result = navigator
        .generate_roadmap(&generate_params(1, "cse", "astronaut"))
        .await;
    assert!(matches!(result, Err(NavigatorError::InvalidInput { .. })));

    let roadmap = navigator
        .get_roadmap(&UserId { user_id: 1 })
        .await
        .expect("query");
    assert!(roadmap.is_none());
}

#[tokio::test]
async fn test_get_roadmap_with_progress_not_found() {
    let (_temp_dir, navigator) = create_test_navigator().await;

    let result = navigator
        .get_roadmap_with_progress(&UserId { user_id: 99 })
        .await;
    assert!(matches!(
        result,
        Err(NavigatorError::RoadmapNotFound { user_id: 99 })
    ));
}

#[tokio::test]
async fn test_progress_reflects_latest_update() {
    let (_temp_dir, navigator) = create_test_navigator().await;
    let outcome = navigator
        .generate_roadmap(&generate_params(5, "mechanical", "data_engineer"))
        .await
        .expect("generate");
    let first_step = outcome.roadmap.steps[0].step_id;

    let summary = navigator
        .get_roadmap_with_progress(&UserId { user_id: 5 })
        .await
        .expect("summary");
    assert_eq!(summary.total_steps, 7);
    assert_eq!(summary.completion_percentage, 0.0);
    assert_eq!(summary.current_step.as_ref().map(|c| c.order), Some(1));

    navigator
        .update_step_status(&update_params(5, first_step, "completed"))
        .await
        .expect("complete");

    let summary = navigator
        .get_roadmap_with_progress(&UserId { user_id: 5 })
        .await
        .expect("summary");
    assert_eq!(summary.completed_steps, 1);
    assert_eq!(summary.in_progress_steps, 1);
    assert_eq!(summary.completion_percentage, 14.29);
    assert_eq!(summary.current_step.map(|c| c.order), Some(2));
}

#[tokio::test]
async fn test_update_step_status_rejects_invalid_status() {
    let (_temp_dir, navigator) = create_test_navigator().await;
    let outcome = navigator
        .generate_roadmap(&generate_params(2, "cse", "python_backend_developer"))
        .await
        .expect("generate");

    let result = navigator
        .update_step_status(&update_params(2, outcome.roadmap.steps[0].step_id, "paused"))
        .await;
    match result {
        Err(NavigatorError::InvalidInput { field, .. }) => assert_eq!(field, "status"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_step_status_with_notes() {
    let (_temp_dir, navigator) = create_test_navigator().await;
    let outcome = navigator
        .generate_roadmap(&generate_params(3, "cse", "python_backend_developer"))
        .await
        .expect("generate");
    let step_id = outcome.roadmap.steps[2].step_id;

    let mut params = update_params(3, step_id, "in-progress");
    params.notes = Some("Halfway through the tutorial".to_string());
    let updated = navigator.update_step_status(&params).await.expect("update");

    assert_eq!(updated.step_id, step_id);
    assert_eq!(updated.status, StepStatus::InProgress);
    assert_eq!(updated.notes.as_deref(), Some("Halfway through the tutorial"));
}

#[tokio::test]
async fn test_update_step_of_foreign_template_is_not_found() {
    let (_temp_dir, navigator) = create_test_navigator().await;
    let cse = navigator
        .generate_roadmap(&generate_params(1, "cse", "python_backend_developer"))
        .await
        .expect("generate");
    let data = navigator
        .generate_roadmap(&generate_params(2, "cse", "data_engineer"))
        .await
        .expect("generate");

    // Step of user 2's template does not belong to user 1's roadmap
    let foreign_step = data.roadmap.steps[0].step_id;
    assert!(cse.roadmap.steps.iter().all(|s| s.step_id != foreign_step));

    let result = navigator
        .update_step_status(&update_params(1, foreign_step, "completed"))
        .await;
    assert!(matches!(result, Err(NavigatorError::StepNotFound { .. })));
}

#[tokio::test]
async fn test_list_and_get_templates() {
    let (_temp_dir, navigator) = create_test_navigator().await;

    let templates = navigator
        .list_templates(&ListTemplates::default())
        .await
        .expect("list");
    assert_eq!(templates.len(), 3);
    assert!(templates.iter().all(|t| !t.steps.is_empty()));

    let template = navigator
        .get_template(&Id { id: templates[0].id })
        .await
        .expect("get")
        .expect("template exists");
    assert_eq!(template.name, templates[0].name);

    let missing = navigator.get_template(&Id { id: 999 }).await.expect("get");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_matching_template_prefers_branch_specific() {
    let (_temp_dir, navigator) = create_test_navigator().await;

    let exact = navigator
        .find_matching_template(&MatchProfile {
            branch: "CSE".to_string(),
            career_goal: "Python Backend Developer".to_string(),
            current_year: 3,
        })
        .await
        .expect("match")
        .expect("template");
    assert_eq!(exact.branch, Some(crate::models::Branch::Cse));

    let fallback = navigator
        .find_matching_template(&MatchProfile {
            branch: "ECE".to_string(),
            career_goal: "python_backend_developer".to_string(),
            current_year: 3,
        })
        .await
        .expect("match")
        .expect("template");
    assert_eq!(fallback.branch, None);

    let none = navigator
        .find_matching_template(&MatchProfile {
            branch: "ECE".to_string(),
            career_goal: "mobile_developer".to_string(),
            current_year: 3,
        })
        .await
        .expect("match");
    assert!(none.is_none());
}

#[tokio::test]
async fn test_match_template_fails_like_generation_without_template() {
    let (_temp_dir, navigator) = create_test_navigator().await;
    let profile = MatchProfile {
        branch: "civil".to_string(),
        career_goal: "frontend_developer".to_string(),
        current_year: 1,
    };

    let result = navigator.match_template(&profile).await;
    assert!(matches!(
        result,
        Err(NavigatorError::NoMatchingTemplate { current_year: 1, .. })
    ));

    let generated = navigator
        .generate_roadmap(&generate_params(9, "civil", "frontend_developer"))
        .await;
    assert!(matches!(
        generated,
        Err(NavigatorError::NoMatchingTemplate { .. })
    ));

    let found = navigator
        .match_template(&MatchProfile {
            career_goal: "data_engineer".to_string(),
            ..profile
        })
        .await
        .expect("data engineer template applies to every branch");
    assert_eq!(found.career_goal, crate::models::CareerGoal::DataEngineer);
}
