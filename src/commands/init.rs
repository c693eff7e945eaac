//! Initialization Commands
//!
//! Commands for application initialization and setup. On startup the
//! credential slot is opened and an existing saved key is reported so
//! the UI can skip the key prompt.

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::models::response::CommandResponse;
use crate::state::AppState;

/// Result of application initialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitResult {
    /// Success message
    pub message: String,
    /// Whether a saved API credential was found
    pub has_credentials: bool,
}

/// Initialize the application on startup
#[tauri::command]
pub async fn init_app(state: State<'_, AppState>) -> Result<CommandResponse<InitResult>, String> {
    match state.initialize().await {
        Ok(_) => {
            let has_credentials = state
                .with_credentials(|store| Ok(store.has_api_key()))
                .await
                .unwrap_or(false);

            Ok(CommandResponse::ok(InitResult {
                message: "Application initialized successfully".to_string(),
                has_credentials,
            }))
        }
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Get the application version
#[tauri::command]
pub fn get_version() -> CommandResponse<String> {
    CommandResponse::ok(env!("CARGO_PKG_VERSION").to_string())
}
