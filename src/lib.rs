//! LeadFlow Desktop - Rust Backend Library
//!
//! This library provides the core backend functionality for the LeadFlow
//! Desktop application. It includes:
//! - Tauri command handlers for frontend IPC
//! - The campaign wizard, prospect store, and message generation services
//! - Storage layer for the API credential slot
//! - Data models and utilities

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items from commands
pub use commands::init::{get_version, init_app};
pub use commands::health::get_health;
pub use commands::wizard::{
    get_campaign_summary, get_wizard_catalog, get_wizard_state, launch_campaign, wizard_advance,
    wizard_go_to_step, wizard_retreat, wizard_set_field, wizard_validate_step,
};
pub use commands::prospects::{
    bulk_export_prospects, bulk_generate_messages, deselect_prospect, get_prospect, get_selection,
    list_prospects, select_prospect,
};
pub use commands::messages::{generate_message, generate_message_variations};
pub use commands::settings::{get_api_key_status, save_api_key, test_api_connection};

pub use models::response::*;
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
