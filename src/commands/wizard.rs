//! Wizard Commands
//!
//! Commands driving the four-step campaign setup wizard: field edits,
//! navigation, per-step validation, the review summary, and launch.

use tauri::State;

use crate::models::campaign::{CampaignConfiguration, CampaignSummary, FieldValue};
use crate::models::catalog::WizardCatalog;
use crate::models::response::CommandResponse;
use crate::services::wizard::{self, StepValidation, WizardView};
use crate::state::AppState;

/// Get the wizard's current step and field values
#[tauri::command]
pub async fn get_wizard_state(
    state: State<'_, AppState>,
) -> Result<CommandResponse<WizardView>, String> {
    Ok(CommandResponse::ok(state.wizard().await.view()))
}

/// Record a single field edit
#[tauri::command]
pub async fn wizard_set_field(
    state: State<'_, AppState>,
    name: String,
    value: FieldValue,
) -> Result<CommandResponse<WizardView>, String> {
    let mut wizard = state.wizard_mut().await;
    wizard.set_field(name, value);
    Ok(CommandResponse::ok(wizard.view()))
}

/// Advance to the next step after validating the current one
#[tauri::command]
pub async fn wizard_advance(
    state: State<'_, AppState>,
) -> Result<CommandResponse<WizardView>, String> {
    let mut wizard = state.wizard_mut().await;
    match wizard.advance() {
        Ok(_) => Ok(CommandResponse::ok(wizard.view())),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Move back one step; never validates
#[tauri::command]
pub async fn wizard_retreat(
    state: State<'_, AppState>,
) -> Result<CommandResponse<WizardView>, String> {
    let mut wizard = state.wizard_mut().await;
    wizard.retreat();
    Ok(CommandResponse::ok(wizard.view()))
}

/// Jump directly to a step; out-of-range requests are ignored
#[tauri::command]
pub async fn wizard_go_to_step(
    state: State<'_, AppState>,
    step: u8,
) -> Result<CommandResponse<WizardView>, String> {
    let mut wizard = state.wizard_mut().await;
    wizard.go_to_step(step);
    Ok(CommandResponse::ok(wizard.view()))
}

/// Validate a step without navigating
#[tauri::command]
pub async fn wizard_validate_step(
    state: State<'_, AppState>,
    step: u8,
) -> Result<CommandResponse<StepValidation>, String> {
    Ok(CommandResponse::ok(state.wizard().await.validate_step(step)))
}

/// Project the review summary from the current field values
#[tauri::command]
pub async fn get_campaign_summary(
    state: State<'_, AppState>,
) -> Result<CommandResponse<CampaignSummary>, String> {
    let wizard = state.wizard().await;
    Ok(CommandResponse::ok(wizard::summary::project(
        wizard.fields(),
        wizard.catalog(),
    )))
}

/// Launch the configured campaign from the final step
#[tauri::command]
pub async fn launch_campaign(
    state: State<'_, AppState>,
) -> Result<CommandResponse<CampaignConfiguration>, String> {
    let mut wizard = state.wizard_mut().await;
    match wizard.launch() {
        Ok(configuration) => Ok(CommandResponse::ok(configuration)),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Get the option catalogs the wizard forms render from
#[tauri::command]
pub async fn get_wizard_catalog(
    state: State<'_, AppState>,
) -> Result<CommandResponse<WizardCatalog>, String> {
    Ok(CommandResponse::ok(state.wizard().await.catalog().clone()))
}
