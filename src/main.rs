// LeadFlow Desktop - Tauri Application Entry Point
// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use leadflow_desktop::state::AppState;

fn main() {
    tauri::Builder::default()
        .manage(AppState::new())
        .invoke_handler(tauri::generate_handler![
            // Initialization commands
            leadflow_desktop::commands::init::init_app,
            leadflow_desktop::commands::init::get_version,
            // Health commands
            leadflow_desktop::commands::health::get_health,
            // Wizard commands
            leadflow_desktop::commands::wizard::get_wizard_state,
            leadflow_desktop::commands::wizard::wizard_set_field,
            leadflow_desktop::commands::wizard::wizard_advance,
            leadflow_desktop::commands::wizard::wizard_retreat,
            leadflow_desktop::commands::wizard::wizard_go_to_step,
            leadflow_desktop::commands::wizard::wizard_validate_step,
            leadflow_desktop::commands::wizard::get_campaign_summary,
            leadflow_desktop::commands::wizard::launch_campaign,
            leadflow_desktop::commands::wizard::get_wizard_catalog,
            // Prospect commands
            leadflow_desktop::commands::prospects::list_prospects,
            leadflow_desktop::commands::prospects::get_prospect,
            leadflow_desktop::commands::prospects::select_prospect,
            leadflow_desktop::commands::prospects::deselect_prospect,
            leadflow_desktop::commands::prospects::get_selection,
            leadflow_desktop::commands::prospects::bulk_generate_messages,
            leadflow_desktop::commands::prospects::bulk_export_prospects,
            // Message commands
            leadflow_desktop::commands::messages::generate_message,
            leadflow_desktop::commands::messages::generate_message_variations,
            // Settings commands
            leadflow_desktop::commands::settings::save_api_key,
            leadflow_desktop::commands::settings::get_api_key_status,
            leadflow_desktop::commands::settings::test_api_connection,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
