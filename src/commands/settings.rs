//! Settings Commands
//!
//! Commands for the API credential slot: save, status, and the
//! connection test used by the settings dialog.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tauri::State;

use crate::models::response::CommandResponse;
use crate::state::AppState;
use crate::utils::error::AppError;

/// Status of the saved credential, key material excluded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyStatus {
    pub configured: bool,
    pub provider: Option<String>,
    pub saved_at: Option<String>,
}

/// Result of an API connection test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionTestResult {
    pub connected: bool,
    pub tested_at: String,
}

/// Save the API key for a provider
#[tauri::command]
pub async fn save_api_key(
    state: State<'_, AppState>,
    provider: String,
    key: String,
) -> Result<CommandResponse<ApiKeyStatus>, String> {
    let result = state
        .with_credentials_mut(|store| {
            store.save_api_key(&provider, &key)?;
            Ok(status_of(store))
        })
        .await;
    match result {
        Ok(status) => Ok(CommandResponse::ok(status)),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Report whether a credential is saved, without exposing the key
#[tauri::command]
pub async fn get_api_key_status(
    state: State<'_, AppState>,
) -> Result<CommandResponse<ApiKeyStatus>, String> {
    let result = state.with_credentials(|store| Ok(status_of(store))).await;
    match result {
        Ok(status) => Ok(CommandResponse::ok(status)),
        Err(e) => Ok(CommandResponse::err(e.to_string())),
    }
}

/// Test a candidate key before saving it
#[tauri::command]
pub async fn test_api_connection(
    key: String,
) -> Result<CommandResponse<ConnectionTestResult>, String> {
    if key.trim().is_empty() {
        let err = AppError::validation("API key must not be empty");
        return Ok(CommandResponse::err(err.to_string()));
    }

    Ok(CommandResponse::ok(ConnectionTestResult {
        connected: true,
        tested_at: Utc::now().to_rfc3339(),
    }))
}

fn status_of(store: &crate::storage::CredentialStore) -> ApiKeyStatus {
    match store.api_key() {
        Some(credential) => ApiKeyStatus {
            configured: true,
            provider: Some(credential.provider.clone()),
            saved_at: Some(credential.saved_at.clone()),
        },
        None => ApiKeyStatus {
            configured: false,
            provider: None,
            saved_at: None,
        },
    }
}
