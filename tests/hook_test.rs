#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]

mod common;

use common::{create_test_dir, fs_hook, write_templates, TestIssue};
use issue_template::{FormEvent, Outcome, TemplateScope};
use serde_json::json;

#[tokio::test]
async fn test_new_issue_form_then_tracker_switches() {
    let temp_dir = create_test_dir();
    write_templates(
        temp_dir.path(),
        &[
            ("default_issue_template.md", "## Description\n"),
            ("issue_template_alpha_1.md", "## Bug\r\nSteps:\r\n"),
            ("issue_template_alpha_2.md", "## Feature\r\nWhy:\r\n"),
        ],
    )
    .await;
    let hook = fs_hook(temp_dir.path());

    // First render of the new-issue form.
    let mut issue = TestIssue::new("alpha", "1");
    let event = FormEvent::from_params(json!({"project_id": "alpha"})).unwrap();
    hook.after_build_issue(&mut issue, &event).await;
    assert_eq!(issue.description, "## Bug\r\nSteps:\r\n");

    // Browser posts back the text with normalized line endings; tracker -> 2.
    let mut issue = TestIssue::new("alpha", "2");
    let event = FormEvent::from_params(json!({
        "form_update_triggered_by": "issue_tracker_id",
        "issue": {"tracker_id": "2", "description": "## Bug\nSteps:\n"}
    }))
    .unwrap();
    let outcome = hook.after_build_issue(&mut issue, &event).await;
    assert_eq!(outcome, Some(Outcome::Applied(TemplateScope::ProjectTracker)));
    assert_eq!(issue.description, "## Feature\r\nWhy:\r\n");

    // Tracker 3 has no template of its own: stale text is cleared.
    let mut issue = TestIssue::new("alpha", "3");
    let event = FormEvent::from_params(json!({
        "form_update_triggered_by": "issue_tracker_id",
        "issue": {"tracker_id": 3, "description": "## Feature\nWhy:"}
    }))
    .unwrap();
    let outcome = hook.after_build_issue(&mut issue, &event).await;
    assert_eq!(outcome, Some(Outcome::Cleared));
    assert_eq!(issue.description, "");
}

#[tokio::test]
async fn test_user_edit_survives_tracker_switch() {
    let temp_dir = create_test_dir();
    write_templates(
        temp_dir.path(),
        &[
            ("issue_template_alpha_1.md", "Steps:"),
            ("issue_template_alpha_2.md", "Why:"),
        ],
    )
    .await;
    let hook = fs_hook(temp_dir.path());

    let mut issue = TestIssue {
        description: "Steps: click the button".to_string(),
        ..TestIssue::new("alpha", "2")
    };
    let event = FormEvent::from_params(json!({
        "form_update_triggered_by": "issue_tracker_id",
        "issue": {"tracker_id": "2", "description": "Steps: click the button"}
    }))
    .unwrap();

    let outcome = hook.after_build_issue(&mut issue, &event).await;
    assert_eq!(outcome, Some(Outcome::Preserved));
    assert_eq!(issue.description, "Steps: click the button");
}

#[tokio::test]
async fn test_directory_named_like_template_is_skipped() {
    let temp_dir = create_test_dir();
    tokio::fs::create_dir(temp_dir.path().join("issue_template_alpha_1.md"))
        .await
        .unwrap();
    write_templates(temp_dir.path(), &[("issue_template_alpha.md", "PROJECT")]).await;
    let hook = fs_hook(temp_dir.path());

    let mut issue = TestIssue::new("alpha", "1");
    hook.after_build_issue(&mut issue, &FormEvent::InitialRender)
        .await;

    // Directories are not templates.
    assert_eq!(issue.description, "PROJECT");
}

#[tokio::test]
async fn test_no_templates_at_all_leaves_issue_untouched() {
    let temp_dir = create_test_dir();
    let hook = fs_hook(temp_dir.path());

    let mut issue = TestIssue {
        description: "host default".to_string(),
        ..TestIssue::new("alpha", "1")
    };
    let outcome = hook
        .after_build_issue(&mut issue, &FormEvent::InitialRender)
        .await;

    assert_eq!(outcome, Some(Outcome::NoTemplate));
    assert_eq!(issue.description, "host default");
}

#[tokio::test]
async fn test_prefilled_new_issue_is_not_stamped() {
    let temp_dir = create_test_dir();
    write_templates(temp_dir.path(), &[("default_issue_template.md", "## Description\n")]).await;
    let hook = fs_hook(temp_dir.path());

    let mut issue = TestIssue::new("alpha", "1");
    let event = FormEvent::from_params(json!({"issue": {"subject": "prefilled"}})).unwrap();
    let outcome = hook.after_build_issue(&mut issue, &event).await;

    assert_eq!(outcome, None);
    assert_eq!(issue.description, "");
}
