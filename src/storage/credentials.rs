//! Credential Slot
//!
//! The single key-value slot for the AI provider API credential,
//! persisted as JSON under the app directory. Written only by the
//! explicit save command; never read back into wizard or prospect
//! logic.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::{credentials_path, ensure_leadflow_dir};

/// The stored credential with its save metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCredential {
    pub provider: String,
    pub key: String,
    /// RFC 3339 timestamp of the explicit save
    pub saved_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct CredentialFile {
    api_key: Option<StoredCredential>,
}

/// File-backed store for the API credential slot
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    credentials: CredentialFile,
}

impl CredentialStore {
    /// Open the store at the default location, loading an existing slot
    /// if present. Nothing is written until an explicit save.
    pub fn new() -> AppResult<Self> {
        ensure_leadflow_dir()?;
        Self::at_path(credentials_path()?)
    }

    /// Open the store at an explicit path
    pub fn at_path(path: PathBuf) -> AppResult<Self> {
        let credentials = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            CredentialFile::default()
        };
        Ok(Self { path, credentials })
    }

    /// Save the API key. This is the only write path for the slot.
    pub fn save_api_key(&mut self, provider: &str, key: &str) -> AppResult<()> {
        if key.trim().is_empty() {
            return Err(AppError::validation("API key must not be empty"));
        }

        self.credentials.api_key = Some(StoredCredential {
            provider: provider.to_string(),
            key: key.to_string(),
            saved_at: Utc::now().to_rfc3339(),
        });

        let content = serde_json::to_string_pretty(&self.credentials)?;
        fs::write(&self.path, content)?;
        info!(provider, "API credential saved");
        Ok(())
    }

    /// The stored credential, if one has been saved
    pub fn api_key(&self) -> Option<&StoredCredential> {
        self.credentials.api_key.as_ref()
    }

    pub fn has_api_key(&self) -> bool {
        self.credentials.api_key.is_some()
    }

    /// Check the store is usable (its directory exists)
    pub fn is_healthy(&self) -> bool {
        self.path
            .parent()
            .map(|parent| parent.exists())
            .unwrap_or(false)
    }
}
