//! Message Generation Seam
//!
//! The async boundary behind which message generation happens. The UI
//! treats generation as a suspension point: it issues the request and
//! consumes the completion later, so the seam is an async trait even
//! though the shipped implementation resolves templates synchronously.
//! Failures surface as External errors with the underlying message
//! preserved; no state is mutated on failure.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use leadflow_personalization::{GeneratedMessage, Prospect, TemplateEngine};

use crate::utils::error::{AppError, AppResult};

/// External collaborator producing personalized messages
#[async_trait]
pub trait MessageGenerator: Send + Sync {
    /// Generate a single message for a prospect
    async fn generate(&self, prospect: &Prospect) -> AppResult<GeneratedMessage>;

    /// Generate one variation per available template, in template order
    async fn variations(&self, prospect: &Prospect) -> AppResult<Vec<GeneratedMessage>>;
}

/// The deterministic template-backed generator.
///
/// Single-message generation picks a template uniformly at random; the
/// RNG is owned here so a seeded generator reproduces its choices.
pub struct TemplateGenerator {
    engine: Arc<TemplateEngine>,
    rng: Mutex<StdRng>,
}

impl TemplateGenerator {
    pub fn new(engine: Arc<TemplateEngine>) -> Self {
        Self {
            engine,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Build a generator with a fixed seed, for reproducible choices
    pub fn seeded(engine: Arc<TemplateEngine>, seed: u64) -> Self {
        Self {
            engine,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl MessageGenerator for TemplateGenerator {
    async fn generate(&self, prospect: &Prospect) -> AppResult<GeneratedMessage> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::internal("Generator RNG lock poisoned"))?;
        debug!(prospect_id = prospect.id, "generating single message");
        Ok(self.engine.generate_random(prospect, &mut *rng))
    }

    async fn variations(&self, prospect: &Prospect) -> AppResult<Vec<GeneratedMessage>> {
        debug!(prospect_id = prospect.id, "generating message variations");
        Ok(self.engine.variations(prospect))
    }
}
