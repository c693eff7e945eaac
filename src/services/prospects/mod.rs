//! Prospect Service
//!
//! The prospect store, its selection bookkeeping, and bulk actions over
//! the selection set.

pub mod bulk;
pub mod store;

pub use bulk::{BulkActionCoordinator, ExportRow, EXPORT_HEADER};
pub use store::ProspectStore;
