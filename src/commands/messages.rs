//! Message Commands
//!
//! Single-prospect message generation through the generator seam. The
//! prospect is cloned out of the store before the await so the store
//! lock is never held across a suspension point.

use tauri::State;

use leadflow_personalization::{GeneratedMessage, Prospect};

use crate::models::response::CommandResponse;
use crate::state::AppState;
use crate::utils::error::AppResult;

async fn prospect_by_id(state: &State<'_, AppState>, id: u32) -> AppResult<Prospect> {
    let store = state.prospects().await;
    store.find(id).cloned()
}

/// Generate one personalized message for a prospect
#[tauri::command]
pub async fn generate_message(
    state: State<'_, AppState>,
    prospect_id: u32,
) -> Result<CommandResponse<GeneratedMessage>, String> {
    let prospect = match prospect_by_id(&state, prospect_id).await {
        Ok(prospect) => prospect,
        Err(e) => return Ok(CommandResponse::err(e.to_string())),
    };

    match state.generator().generate(&prospect).await {
        Ok(message) => Ok(CommandResponse::ok(message)),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Generate one variation per template for a prospect, in template order
#[tauri::command]
pub async fn generate_message_variations(
    state: State<'_, AppState>,
    prospect_id: u32,
) -> Result<CommandResponse<Vec<GeneratedMessage>>, String> {
    let prospect = match prospect_by_id(&state, prospect_id).await {
        Ok(prospect) => prospect,
        Err(e) => return Ok(CommandResponse::err(e.to_string())),
    };

    match state.generator().variations(&prospect).await {
        Ok(variations) => Ok(CommandResponse::ok(variations)),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}
