//! Prospect Commands
//!
//! Commands over the prospect store: listing, detail lookup, selection
//! bookkeeping, and the bulk generate/export actions that run over the
//! current selection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tauri::State;

use leadflow_personalization::{GeneratedMessage, Prospect};

use crate::models::response::CommandResponse;
use crate::services::prospects::{BulkActionCoordinator, ExportRow};
use crate::state::AppState;

/// One prospect row as the list view renders it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProspectSummary {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub score: u8,
    pub score_tier: String,
    pub recent_activity: String,
    pub selected: bool,
}

impl ProspectSummary {
    fn from_prospect(prospect: &Prospect, selected: bool) -> Self {
        Self {
            id: prospect.id,
            name: prospect.name.clone(),
            title: prospect.title.clone(),
            company: prospect.company.clone(),
            location: prospect.location.clone(),
            score: prospect.score,
            score_tier: prospect.score_tier().label().to_string(),
            recent_activity: prospect.recent_activity.clone(),
            selected,
        }
    }
}

/// Current selection state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionView {
    pub selected_ids: Vec<u32>,
    pub count: usize,
}

impl SelectionView {
    fn from_store(store: &crate::services::prospects::ProspectStore) -> Self {
        let selected_ids: Vec<u32> = store.selected_ids().into_iter().collect();
        let count = selected_ids.len();
        Self {
            selected_ids,
            count,
        }
    }
}

/// A ready-to-save CSV export of the selected prospects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPayload {
    pub filename: String,
    pub content: String,
    pub rows: Vec<ExportRow>,
}

/// List all prospects with their tier and selection flags
#[tauri::command]
pub async fn list_prospects(
    state: State<'_, AppState>,
) -> Result<CommandResponse<Vec<ProspectSummary>>, String> {
    let store = state.prospects().await;
    let summaries = store
        .all()
        .iter()
        .map(|prospect| ProspectSummary::from_prospect(prospect, store.is_selected(prospect.id)))
        .collect();
    Ok(CommandResponse::ok(summaries))
}

/// Get the full detail record for one prospect
#[tauri::command]
pub async fn get_prospect(
    state: State<'_, AppState>,
    id: u32,
) -> Result<CommandResponse<Prospect>, String> {
    match state.prospects().await.find(id) {
        Ok(prospect) => Ok(CommandResponse::ok(prospect.clone())),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Add a prospect to the selection
#[tauri::command]
pub async fn select_prospect(
    state: State<'_, AppState>,
    id: u32,
) -> Result<CommandResponse<SelectionView>, String> {
    let mut store = state.prospects_mut().await;
    match store.select(id) {
        Ok(_) => Ok(CommandResponse::ok(SelectionView::from_store(&store))),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Remove a prospect from the selection
#[tauri::command]
pub async fn deselect_prospect(
    state: State<'_, AppState>,
    id: u32,
) -> Result<CommandResponse<SelectionView>, String> {
    let mut store = state.prospects_mut().await;
    store.deselect(id);
    Ok(CommandResponse::ok(SelectionView::from_store(&store)))
}

/// Get the current selection
#[tauri::command]
pub async fn get_selection(
    state: State<'_, AppState>,
) -> Result<CommandResponse<SelectionView>, String> {
    Ok(CommandResponse::ok(SelectionView::from_store(
        &*state.prospects().await,
    )))
}

/// Generate a message for every selected prospect
#[tauri::command]
pub async fn bulk_generate_messages(
    state: State<'_, AppState>,
) -> Result<CommandResponse<BTreeMap<u32, GeneratedMessage>>, String> {
    let store = state.prospects().await;
    let engine = state.engine().clone();
    let result =
        state.with_rng(|rng| BulkActionCoordinator::bulk_generate(&store, &engine, rng));
    match result {
        Ok(Ok(messages)) => Ok(CommandResponse::ok(messages)),
        Ok(Err(e)) | Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Export the selected prospects as CSV
#[tauri::command]
pub async fn bulk_export_prospects(
    state: State<'_, AppState>,
) -> Result<CommandResponse<ExportPayload>, String> {
    let store = state.prospects().await;
    match BulkActionCoordinator::bulk_export(&store) {
        Ok(rows) => Ok(CommandResponse::ok(ExportPayload {
            filename: "selected_prospects.csv".to_string(),
            content: BulkActionCoordinator::render_csv(&rows),
            rows,
        })),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}
