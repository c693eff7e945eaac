//! Personalization Engine
//!
//! Resolves template placeholders against a prospect record and produces
//! generated messages with the template's fixed quality metrics attached.

use rand::Rng;
use tracing::debug;

use crate::catalog::TemplateCatalog;
use crate::models::{GeneratedMessage, MessageTemplate, Prospect};

/// Fixed service value statement substituted for `{{value_proposition}}`
pub const VALUE_PROPOSITION: &str = "scale their operations with AI automation";

/// Fixed benefit claim substituted for `{{specific_benefit}}`
pub const SPECIFIC_BENEFIT: &str = "40% cost reduction";

/// The recognized template placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Name,
    RecentTopic,
    Company,
    TargetRole,
    ValueProposition,
    FocusArea,
    SpecificBenefit,
}

impl Placeholder {
    /// Every recognized placeholder, in substitution order
    pub const ALL: [Placeholder; 7] = [
        Self::Name,
        Self::RecentTopic,
        Self::Company,
        Self::TargetRole,
        Self::ValueProposition,
        Self::FocusArea,
        Self::SpecificBenefit,
    ];

    /// The literal token this placeholder matches in template content
    pub fn token(&self) -> &'static str {
        match self {
            Self::Name => "{{name}}",
            Self::RecentTopic => "{{recent_topic}}",
            Self::Company => "{{company}}",
            Self::TargetRole => "{{target_role}}",
            Self::ValueProposition => "{{value_proposition}}",
            Self::FocusArea => "{{focus_area}}",
            Self::SpecificBenefit => "{{specific_benefit}}",
        }
    }

    /// Resolve the replacement value for a prospect
    pub fn resolve(&self, prospect: &Prospect) -> String {
        match self {
            Self::Name => prospect.name.clone(),
            Self::RecentTopic => recent_topic(&prospect.recent_activity),
            Self::Company => prospect.company.clone(),
            Self::TargetRole => target_role(&prospect.title),
            Self::ValueProposition => VALUE_PROPOSITION.to_string(),
            Self::FocusArea => prospect
                .talking_points
                .first()
                .map(|point| point.to_lowercase())
                .unwrap_or_default(),
            Self::SpecificBenefit => SPECIFIC_BENEFIT.to_string(),
        }
    }
}

/// Words 3 through 6 (0-indexed slice [2, 6)) of the recent activity,
/// rejoined with single spaces. Shorter activity yields whatever is
/// available, without padding.
fn recent_topic(recent_activity: &str) -> String {
    recent_activity
        .split_whitespace()
        .skip(2)
        .take(4)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First whitespace-delimited token of the title with a literal "s"
/// appended. Pluralization is purely lexical ("CTO" becomes "CTOs",
/// "Head of Marketing" becomes "Heads").
fn target_role(title: &str) -> String {
    let first = title.split_whitespace().next().unwrap_or_default();
    format!("{}s", first)
}

/// The message personalization engine over a fixed template catalog
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    catalog: TemplateCatalog,
}

impl TemplateEngine {
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Resolve every placeholder in the template against the prospect.
    ///
    /// Each token is substituted wherever it literally occurs, in a
    /// single pass; replacement values never contain placeholder tokens
    /// and are not re-scanned.
    pub fn generate(&self, prospect: &Prospect, template: &MessageTemplate) -> GeneratedMessage {
        let mut content = template.content.clone();
        for placeholder in Placeholder::ALL {
            let token = placeholder.token();
            if content.contains(token) {
                content = content.replace(token, &placeholder.resolve(prospect));
            }
        }

        debug!(
            prospect_id = prospect.id,
            characters = content.len(),
            "resolved message template"
        );

        GeneratedMessage::from_resolved(content, template)
    }

    /// Generate a single message from a uniformly random template.
    ///
    /// The RNG is injected so callers can seed it for reproducibility.
    pub fn generate_random<R: Rng + ?Sized>(
        &self,
        prospect: &Prospect,
        rng: &mut R,
    ) -> GeneratedMessage {
        let index = rng.gen_range(0..self.catalog.len());
        // Index is in range by construction; the catalog is non-empty.
        let template = self
            .catalog
            .get(index)
            .unwrap_or_else(|| &self.catalog.templates()[0]);
        self.generate(prospect, template)
    }

    /// Generate one message per template, in catalog order
    pub fn variations(&self, prospect: &Prospect) -> Vec<GeneratedMessage> {
        self.catalog
            .templates()
            .iter()
            .map(|template| self.generate(prospect, template))
            .collect()
    }
}
