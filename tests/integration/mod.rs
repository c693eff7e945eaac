//! Integration Tests Module
//!
//! End-to-end tests over the backend services: the campaign wizard
//! walkthrough, prospect selection with bulk actions, and the template
//! personalization pipeline. No Tauri runtime is started; tests drive
//! the same state and services the command handlers do.

// Campaign wizard walkthrough and launch tests
mod wizard_test;

// Prospect selection and bulk action tests
mod prospects_test;

// Template personalization pipeline tests
mod personalization_test;
