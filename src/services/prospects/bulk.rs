//! Bulk Actions
//!
//! Generation and export across the current selection set. Both actions
//! fail fast with EmptySelection when nothing is selected; export rows
//! follow store iteration order.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use leadflow_personalization::{GeneratedMessage, Prospect, TemplateEngine};

use crate::utils::error::{AppError, AppResult};

use super::store::ProspectStore;

/// Header row for the prospect export
pub const EXPORT_HEADER: &str = "Name,Title,Company,Location,Score,Recent Activity";

/// One export row for a selected prospect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRow {
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub score: u8,
    pub recent_activity: String,
}

impl ExportRow {
    pub fn from_prospect(prospect: &Prospect) -> Self {
        Self {
            name: prospect.name.clone(),
            title: prospect.title.clone(),
            company: prospect.company.clone(),
            location: prospect.location.clone(),
            score: prospect.score,
            recent_activity: prospect.recent_activity.clone(),
        }
    }

    /// Render the row as six comma-joined fields. Fields containing the
    /// delimiter are quoted; the recent-activity field is always quoted.
    /// Embedded quotes are doubled to keep the row parseable.
    pub fn to_csv_line(&self) -> String {
        [
            csv_field(&self.name),
            csv_field(&self.title),
            csv_field(&self.company),
            csv_field(&self.location),
            self.score.to_string(),
            format!("\"{}\"", self.recent_activity.replace('"', "\"\"")),
        ]
        .join(",")
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Bulk operations over the selection set
pub struct BulkActionCoordinator;

impl BulkActionCoordinator {
    /// Generate one message per selected prospect, keyed by prospect id.
    ///
    /// Template choice per prospect is uniform random from the injected
    /// RNG. Fails fast with EmptySelection before any generation work.
    pub fn bulk_generate<R: Rng + ?Sized>(
        store: &ProspectStore,
        engine: &TemplateEngine,
        rng: &mut R,
    ) -> AppResult<BTreeMap<u32, GeneratedMessage>> {
        if store.selected_count() == 0 {
            return Err(AppError::EmptySelection);
        }

        let messages: BTreeMap<u32, GeneratedMessage> = store
            .selected_prospects()
            .into_iter()
            .map(|prospect| (prospect.id, engine.generate_random(prospect, rng)))
            .collect();

        info!(count = messages.len(), "bulk message generation complete");
        Ok(messages)
    }

    /// Export the selected prospects as rows in store iteration order
    pub fn bulk_export(store: &ProspectStore) -> AppResult<Vec<ExportRow>> {
        if store.selected_count() == 0 {
            return Err(AppError::EmptySelection);
        }

        let rows: Vec<ExportRow> = store
            .selected_prospects()
            .into_iter()
            .map(ExportRow::from_prospect)
            .collect();

        info!(rows = rows.len(), "bulk export complete");
        Ok(rows)
    }

    /// Render export rows under the fixed header for the download
    /// collaborator
    pub fn render_csv(rows: &[ExportRow]) -> String {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(EXPORT_HEADER.to_string());
        lines.extend(rows.iter().map(ExportRow::to_csv_line));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadflow_personalization::TemplateCatalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> TemplateEngine {
        TemplateEngine::new(TemplateCatalog::connection_request_defaults())
    }

    #[test]
    fn test_bulk_generate_empty_selection() {
        let store = ProspectStore::with_sample_data();
        let mut rng = StdRng::seed_from_u64(1);
        let err = BulkActionCoordinator::bulk_generate(&store, &engine(), &mut rng).unwrap_err();
        assert!(matches!(err, AppError::EmptySelection));
    }

    #[test]
    fn test_bulk_generate_keys_match_selection() {
        let mut store = ProspectStore::with_sample_data();
        store.select(1).unwrap();
        store.select(3).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let messages =
            BulkActionCoordinator::bulk_generate(&store, &engine(), &mut rng).unwrap();

        let keys: Vec<u32> = messages.keys().copied().collect();
        assert_eq!(keys, vec![1, 3]);
        for message in messages.values() {
            assert_eq!(message.character_count, message.content.len());
            assert!(!message.content.contains("{{"));
        }
    }

    #[test]
    fn test_bulk_export_empty_selection() {
        let store = ProspectStore::with_sample_data();
        let err = BulkActionCoordinator::bulk_export(&store).unwrap_err();
        assert!(matches!(err, AppError::EmptySelection));
    }

    #[test]
    fn test_bulk_export_row_shape() {
        let mut store = ProspectStore::with_sample_data();
        store.select(4).unwrap();
        store.select(2).unwrap();

        let rows = BulkActionCoordinator::bulk_export(&store).unwrap();
        assert_eq!(rows.len(), store.selected_count());
        // Store order, not selection order.
        assert_eq!(rows[0].name, "Rahul Kumar");
        assert_eq!(rows[1].name, "Arjun Patel");

        assert_eq!(
            rows[0].to_csv_line(),
            "Rahul Kumar,CTO,StartupForge,\"Bangalore, India\",91,\
             \"Shared insights on cloud-native architecture patterns\""
        );
    }

    #[test]
    fn test_csv_line_quotes_recent_activity() {
        let row = ExportRow {
            name: "A".to_string(),
            title: "B".to_string(),
            company: "C".to_string(),
            location: "D".to_string(),
            score: 90,
            recent_activity: "Said \"hello, world\"".to_string(),
        };
        assert_eq!(row.to_csv_line(), "A,B,C,D,90,\"Said \"\"hello, world\"\"\"");
    }

    #[test]
    fn test_render_csv_includes_header() {
        let mut store = ProspectStore::with_sample_data();
        store.select(1).unwrap();
        let rows = BulkActionCoordinator::bulk_export(&store).unwrap();
        let csv = BulkActionCoordinator::render_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(EXPORT_HEADER));
        assert_eq!(lines.count(), 1);
    }
}
