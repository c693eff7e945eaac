//! Campaign Wizard Integration Tests
//!
//! Tests for the complete wizard flow: a full four-step walkthrough
//! ending in launch, navigation edge cases, and the review summary
//! projection.

use leadflow_desktop::models::campaign::{fields, FieldValue};
use leadflow_desktop::models::catalog::WizardCatalog;
use leadflow_desktop::services::wizard::summary;
use leadflow_desktop::services::wizard::CampaignWizard;
use leadflow_desktop::utils::error::AppError;

// ============================================================================
// Helpers
// ============================================================================

fn filled_wizard() -> CampaignWizard {
    let mut wizard = CampaignWizard::new(WizardCatalog::default());
    wizard.set_field(fields::CAMPAIGN_NAME, FieldValue::text("Q4 Tech Outreach"));
    wizard.set_field(fields::TARGET_INDUSTRY, FieldValue::text("Technology"));
    wizard.set_field(fields::COMPANY_SIZE, FieldValue::text("51-200"));
    wizard.set_field(fields::LOCATION, FieldValue::text("Mumbai, India"));
    wizard.set_field(
        fields::JOB_ROLES,
        FieldValue::selection(["CTO", "HR Director"]),
    );
    wizard.set_field(fields::BRAND_VOICE, FieldValue::text("professional"));
    wizard.set_field(fields::CAMPAIGN_GOAL, FieldValue::text("lead-generation"));
    let compliance_ids: Vec<String> = wizard
        .catalog()
        .compliance_items
        .iter()
        .map(|item| item.id.clone())
        .collect();
    for id in compliance_ids {
        wizard.set_field(fields::compliance_flag(&id), FieldValue::Flag(true));
    }
    wizard
}

// ============================================================================
// Full walkthrough
// ============================================================================

#[test]
fn test_full_walkthrough_ends_in_launch() {
    let mut wizard = filled_wizard();

    assert_eq!(wizard.advance().unwrap(), 2);
    assert_eq!(wizard.advance().unwrap(), 3);
    assert_eq!(wizard.advance().unwrap(), 4);

    let configuration = wizard.launch().unwrap();
    assert_eq!(configuration.name, "Q4 Tech Outreach");
    assert_eq!(configuration.industry, "Technology");
    assert_eq!(configuration.company_size, "51-200");
    assert_eq!(configuration.location, "Mumbai, India");
    assert_eq!(configuration.job_roles, vec!["CTO", "HR Director"]);
    assert_eq!(configuration.brand_voice, "professional");
    assert_eq!(configuration.goal, "lead-generation");
    assert!(!configuration.created_at.is_empty());

    // Ready for the next session.
    assert_eq!(wizard.step(), 1);
}

#[test]
fn test_each_gate_blocks_on_its_own_rules() {
    let mut wizard = CampaignWizard::new(WizardCatalog::default());

    // Step 1 gate: all four basics missing.
    let err = wizard.advance().unwrap_err();
    match err {
        AppError::MissingFields(failed) => assert_eq!(failed.len(), 4),
        other => panic!("expected MissingFields, got {other:?}"),
    }

    // Step 2 gate: no job role yet.
    wizard.set_field(fields::CAMPAIGN_NAME, FieldValue::text("Gate Test"));
    wizard.set_field(fields::TARGET_INDUSTRY, FieldValue::text("SaaS"));
    wizard.set_field(fields::COMPANY_SIZE, FieldValue::text("1-50"));
    wizard.set_field(fields::LOCATION, FieldValue::text("Remote"));
    wizard.advance().unwrap();
    let err = wizard.advance().unwrap_err();
    match err {
        AppError::MissingFields(failed) => {
            assert_eq!(failed, vec![fields::JOB_ROLES.to_string()])
        }
        other => panic!("expected MissingFields, got {other:?}"),
    }
    assert_eq!(wizard.step(), 2);
}

#[test]
fn test_launch_away_from_review_step_is_rejected() {
    let mut wizard = filled_wizard();
    wizard.go_to_step(2);
    let err = wizard.launch().unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(wizard.step(), 2);
}

#[test]
fn test_partial_compliance_blocks_launch() {
    let mut wizard = filled_wizard();
    let last = wizard.catalog().compliance_items.last().unwrap().id.clone();
    wizard.set_field(fields::compliance_flag(&last), FieldValue::Flag(false));
    wizard.go_to_step(4);

    let err = wizard.launch().unwrap_err();
    assert!(matches!(err, AppError::MissingFields(_)));
    assert_eq!(wizard.step(), 4);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_free_navigation_preserves_fields() {
    let mut wizard = filled_wizard();
    wizard.go_to_step(4);
    wizard.go_to_step(1);
    wizard.go_to_step(9);
    assert_eq!(wizard.step(), 1);
    assert_eq!(
        wizard.fields().get(fields::CAMPAIGN_NAME),
        Some(&FieldValue::text("Q4 Tech Outreach"))
    );
}

#[test]
fn test_retreat_from_review_after_failed_launch() {
    let mut wizard = CampaignWizard::new(WizardCatalog::default());
    wizard.go_to_step(4);
    assert!(wizard.launch().is_err());
    assert_eq!(wizard.retreat(), 3);
    assert_eq!(wizard.retreat(), 2);
    assert_eq!(wizard.retreat(), 1);
    assert_eq!(wizard.retreat(), 1);
}

// ============================================================================
// Review summary
// ============================================================================

#[test]
fn test_summary_resolves_company_size_label() {
    let wizard = filled_wizard();
    let summary = summary::project(wizard.fields(), wizard.catalog());
    assert_eq!(summary.name, "Q4 Tech Outreach");
    assert_eq!(summary.company_size, "Small (51-200 employees)");
    assert_eq!(summary.location, "Mumbai, India");
}

#[test]
fn test_summary_placeholders_for_missing_fields() {
    let wizard = CampaignWizard::new(WizardCatalog::default());
    let summary = summary::project(wizard.fields(), wizard.catalog());
    assert_eq!(summary.name, "-");
    assert_eq!(summary.industry, "-");
    assert_eq!(summary.company_size, "-");
    assert_eq!(summary.brand_voice, "-");
    assert_eq!(summary.goal, "-");
}

#[test]
fn test_summary_reflects_live_edits() {
    let mut wizard = filled_wizard();
    wizard.set_field(fields::CAMPAIGN_NAME, FieldValue::text("Renamed Campaign"));
    let summary = summary::project(wizard.fields(), wizard.catalog());
    assert_eq!(summary.name, "Renamed Campaign");
}
