//! LeadFlow Personalization
//!
//! Prospect models, message templates, and the deterministic
//! personalization engine. This crate compiles independently of the
//! desktop shell:
//!
//! - `models` - Prospect, score tiers, templates, and generated messages
//! - `catalog` - The built-in template set and sample prospect data
//! - `engine` - Placeholder resolution and message generation
//!
//! Selection bookkeeping and bulk actions live in the main crate's
//! `services::prospects` module.

pub mod catalog;
pub mod engine;
pub mod models;

// Re-export core model types
pub use models::{GeneratedMessage, MessageTemplate, PersonalizationError, Prospect, ScoreTier};

// Re-export the engine
pub use engine::{Placeholder, TemplateEngine, SPECIFIC_BENEFIT, VALUE_PROPOSITION};

// Re-export the catalog
pub use catalog::{sample_prospects, TemplateCatalog};
