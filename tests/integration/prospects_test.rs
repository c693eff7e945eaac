//! Prospect Selection and Bulk Action Integration Tests
//!
//! Tests for the prospect store selection bookkeeping and the bulk
//! generate/export actions that operate over the current selection.

use rand::rngs::StdRng;
use rand::SeedableRng;

use leadflow_desktop::services::prospects::{
    BulkActionCoordinator, ProspectStore, EXPORT_HEADER,
};
use leadflow_desktop::utils::error::AppError;
use leadflow_personalization::{TemplateCatalog, TemplateEngine};

// ============================================================================
// Helpers
// ============================================================================

fn engine() -> TemplateEngine {
    TemplateEngine::new(TemplateCatalog::connection_request_defaults())
}

// ============================================================================
// Selection bookkeeping
// ============================================================================

#[test]
fn test_selection_round_trip() {
    let mut store = ProspectStore::with_sample_data();
    assert_eq!(store.selected_count(), 0);

    assert_eq!(store.select(2).unwrap(), 1);
    assert_eq!(store.select(4).unwrap(), 2);
    assert!(store.is_selected(2));
    assert!(!store.is_selected(1));

    assert_eq!(store.deselect(2), 1);
    assert!(!store.is_selected(2));
}

#[test]
fn test_select_is_idempotent() {
    let mut store = ProspectStore::with_sample_data();
    store.select(3).unwrap();
    assert_eq!(store.select(3).unwrap(), 1);
}

#[test]
fn test_select_unknown_prospect_fails() {
    let mut store = ProspectStore::with_sample_data();
    let err = store.select(99).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(store.selected_count(), 0);
}

#[test]
fn test_deselect_unselected_is_noop() {
    let mut store = ProspectStore::with_sample_data();
    store.select(1).unwrap();
    assert_eq!(store.deselect(5), 1);
    assert_eq!(store.deselect(99), 1);
}

// ============================================================================
// Bulk generation
// ============================================================================

#[test]
fn test_bulk_generate_covers_selection() {
    let mut store = ProspectStore::with_sample_data();
    store.select(1).unwrap();
    store.select(3).unwrap();
    store.select(5).unwrap();

    let engine = engine();
    let mut rng = StdRng::seed_from_u64(7);
    let messages = BulkActionCoordinator::bulk_generate(&store, &engine, &mut rng).unwrap();

    let keys: Vec<u32> = messages.keys().copied().collect();
    assert_eq!(keys, vec![1, 3, 5]);
    for message in messages.values() {
        assert!(!message.content.contains("{{"));
        assert_eq!(message.character_count, message.content.len());
    }
}

#[test]
fn test_bulk_generate_personalizes_per_prospect() {
    let mut store = ProspectStore::with_sample_data();
    store.select(1).unwrap();
    store.select(2).unwrap();

    let engine = engine();
    let mut rng = StdRng::seed_from_u64(11);
    let messages = BulkActionCoordinator::bulk_generate(&store, &engine, &mut rng).unwrap();

    assert!(messages[&1].content.contains("Anjali Mehta"));
    assert!(messages[&2].content.contains("Rahul Kumar"));
}

#[test]
fn test_bulk_generate_empty_selection_fails_fast() {
    let store = ProspectStore::with_sample_data();
    let engine = engine();
    let mut rng = StdRng::seed_from_u64(0);
    let err = BulkActionCoordinator::bulk_generate(&store, &engine, &mut rng).unwrap_err();
    assert!(matches!(err, AppError::EmptySelection));
    assert_eq!(err.to_string(), "No prospects selected");
}

// ============================================================================
// Bulk export
// ============================================================================

#[test]
fn test_bulk_export_renders_csv() {
    let mut store = ProspectStore::with_sample_data();
    store.select(2).unwrap();
    store.select(4).unwrap();

    let rows = BulkActionCoordinator::bulk_export(&store).unwrap();
    let csv = BulkActionCoordinator::render_csv(&rows);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], EXPORT_HEADER);
    assert_eq!(
        lines[1],
        "Rahul Kumar,CTO,StartupForge,\"Bangalore, India\",91,\
         \"Shared insights on cloud-native architecture patterns\""
    );
    assert_eq!(
        lines[2],
        "Arjun Patel,Sales Director,CloudVenture,\"Pune, India\",87,\
         \"Announced successful expansion to Southeast Asia markets\""
    );
}

#[test]
fn test_bulk_export_empty_selection_fails() {
    let store = ProspectStore::with_sample_data();
    let err = BulkActionCoordinator::bulk_export(&store).unwrap_err();
    assert!(matches!(err, AppError::EmptySelection));
}

#[test]
fn test_export_rows_follow_store_order() {
    let mut store = ProspectStore::with_sample_data();
    // Selection order must not leak into the export.
    store.select(5).unwrap();
    store.select(1).unwrap();

    let rows = BulkActionCoordinator::bulk_export(&store).unwrap();
    assert_eq!(rows[0].name, "Anjali Mehta");
    assert_eq!(rows[1].name, "Meera Gupta");
}
