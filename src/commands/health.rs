//! Health Commands
//!
//! Liveness reporting for the frontend status bar.

use tauri::State;

use crate::models::response::{CommandResponse, HealthResponse};
use crate::state::AppState;

/// Report backend health and loaded data counts
#[tauri::command]
pub async fn get_health(
    state: State<'_, AppState>,
) -> Result<CommandResponse<HealthResponse>, String> {
    let prospects_loaded = state.prospects().await.len();

    Ok(CommandResponse::ok(HealthResponse {
        credentials: state.is_credentials_healthy(),
        prospects_loaded,
        templates_loaded: state.engine().catalog().len(),
        ..HealthResponse::default()
    }))
}
