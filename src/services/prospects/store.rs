//! Prospect Store
//!
//! Owns the immutable prospect list (stable load order) and the mutable
//! selection set. Selection is always a subset of the loaded ids:
//! selecting an unknown id is surfaced as NotFound rather than silently
//! growing the set.

use std::collections::BTreeSet;

use tracing::debug;

use leadflow_personalization::{sample_prospects, Prospect};

use crate::utils::error::{AppError, AppResult};

/// The prospect collection and its selection bookkeeping
#[derive(Debug, Clone)]
pub struct ProspectStore {
    prospects: Vec<Prospect>,
    selected: BTreeSet<u32>,
}

impl ProspectStore {
    /// Build a store over a fixed prospect list
    pub fn new(prospects: Vec<Prospect>) -> Self {
        Self {
            prospects,
            selected: BTreeSet::new(),
        }
    }

    /// Build a store over the bundled sample data
    pub fn with_sample_data() -> Self {
        Self::new(sample_prospects())
    }

    /// All prospects in stable load order
    pub fn all(&self) -> &[Prospect] {
        &self.prospects
    }

    pub fn len(&self) -> usize {
        self.prospects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prospects.is_empty()
    }

    /// Look up a prospect by id
    pub fn find(&self, id: u32) -> AppResult<&Prospect> {
        self.prospects
            .iter()
            .find(|prospect| prospect.id == id)
            .ok_or_else(|| AppError::not_found(format!("Prospect {} does not exist", id)))
    }

    /// Add an id to the selection set. Idempotent: selecting an already
    /// selected id is a no-op. Unknown ids are NotFound.
    pub fn select(&mut self, id: u32) -> AppResult<usize> {
        self.find(id)?;
        if self.selected.insert(id) {
            debug!(prospect_id = id, selected = self.selected.len(), "prospect selected");
        }
        Ok(self.selected.len())
    }

    /// Remove an id from the selection set. Deselecting an id that is
    /// not selected (or does not exist) is a no-op.
    pub fn deselect(&mut self, id: u32) -> usize {
        if self.selected.remove(&id) {
            debug!(prospect_id = id, selected = self.selected.len(), "prospect deselected");
        }
        self.selected.len()
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    /// Snapshot of the selected ids
    pub fn selected_ids(&self) -> BTreeSet<u32> {
        self.selected.clone()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected prospects in store iteration order, not
    /// selection-insertion order
    pub fn selected_prospects(&self) -> Vec<&Prospect> {
        self.prospects
            .iter()
            .filter(|prospect| self.selected.contains(&prospect.id))
            .collect()
    }
}
