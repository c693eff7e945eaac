//! Personalization Data Types
//!
//! Core types shared by the engine and the desktop shell: prospect
//! records, score tiers, message templates, and generated messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the personalization crate
#[derive(Error, Debug)]
pub enum PersonalizationError {
    /// A template catalog must contain at least one template
    #[error("Template catalog is empty")]
    EmptyCatalog,

    /// Template metrics outside their documented domain
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

/// A candidate contact record with a personalization-relevant profile.
///
/// Prospects are loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prospect {
    /// Unique identifier, stable for the process lifetime
    pub id: u32,
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Quality score in [0, 100]
    pub score: u8,
    /// Free-text description of the prospect's latest visible activity
    pub recent_activity: String,
    /// Ordered, non-empty list of conversation hooks
    pub talking_points: Vec<String>,
    /// Profile-insight paragraph
    pub profile_insights: String,
    /// Ordered personalization opportunities
    pub personalization_opportunities: Vec<String>,
    /// Public profile URL
    pub profile_url: String,
}

impl Prospect {
    /// Display tier for this prospect's score
    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }
}

/// Display tier derived from a prospect score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// score >= 90
    Excellent,
    /// 80 <= score < 90
    Good,
    /// score < 80
    Fair,
}

impl ScoreTier {
    /// Classify a score. Boundaries are inclusive: 90 is excellent,
    /// 80 is good.
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            Self::Excellent
        } else if score >= 80 {
            Self::Good
        } else {
            Self::Fair
        }
    }

    /// Get the display label for this tier
    pub fn label(&self) -> &str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
        }
    }
}

/// A parametrized message skeleton with fixed quality metrics.
///
/// Templates are static: the score and response rate are properties of
/// the template itself, never recomputed from resolved content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageTemplate {
    /// Content with `{{placeholder}}` tokens
    pub content: String,
    /// Fixed personalization score in [0, 100]
    pub personalization_score: u8,
    /// Fixed estimated response rate in [0, 1]
    pub estimated_response_rate: f64,
}

impl MessageTemplate {
    pub fn new(
        content: impl Into<String>,
        personalization_score: u8,
        estimated_response_rate: f64,
    ) -> Self {
        Self {
            content: content.into(),
            personalization_score,
            estimated_response_rate,
        }
    }

    /// Check the template's metric domains
    pub fn validate(&self) -> Result<(), PersonalizationError> {
        if self.personalization_score > 100 {
            return Err(PersonalizationError::InvalidTemplate(format!(
                "personalization_score {} exceeds 100",
                self.personalization_score
            )));
        }
        if !(0.0..=1.0).contains(&self.estimated_response_rate) {
            return Err(PersonalizationError::InvalidTemplate(format!(
                "estimated_response_rate {} outside [0, 1]",
                self.estimated_response_rate
            )));
        }
        Ok(())
    }
}

/// A fully resolved message produced from one prospect and one template.
///
/// Ephemeral: created on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedMessage {
    /// Content with every placeholder resolved
    pub content: String,
    /// Copied verbatim from the source template
    pub personalization_score: u8,
    /// Copied verbatim from the source template
    pub estimated_response_rate: f64,
    /// Exact length of the resolved content
    pub character_count: usize,
}

impl GeneratedMessage {
    /// Build a message from resolved content and its source template
    pub fn from_resolved(content: String, template: &MessageTemplate) -> Self {
        let character_count = content.len();
        Self {
            content,
            personalization_score: template.personalization_score,
            estimated_response_rate: template.estimated_response_rate,
            character_count,
        }
    }
}
