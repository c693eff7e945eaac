//! Tauri command handlers

pub mod health;
pub mod init;
pub mod messages;
pub mod prospects;
pub mod settings;
pub mod wizard;
