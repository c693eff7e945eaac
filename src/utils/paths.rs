//! Cross-Platform Path Utilities
//!
//! Functions for resolving application directories across platforms.
//! Everything lives under ~/.leadflow/.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the LeadFlow directory (~/.leadflow/)
pub fn leadflow_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".leadflow"))
}

/// Get the credential slot path (~/.leadflow/credentials.json)
pub fn credentials_path() -> AppResult<PathBuf> {
    Ok(leadflow_dir()?.join("credentials.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the LeadFlow directory, creating if it doesn't exist
pub fn ensure_leadflow_dir() -> AppResult<PathBuf> {
    let path = leadflow_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
