//! Campaign Models
//!
//! Field values collected by the wizard, the launch-time configuration
//! snapshot, and the step-4 summary projection.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Canonical wizard field names, matching the form control ids
pub mod fields {
    pub const CAMPAIGN_NAME: &str = "campaign-name";
    pub const TARGET_INDUSTRY: &str = "target-industry";
    pub const COMPANY_SIZE: &str = "company-size";
    pub const LOCATION: &str = "location";
    pub const JOB_ROLES: &str = "job-roles";
    pub const BRAND_VOICE: &str = "brand-voice";
    pub const CAMPAIGN_GOAL: &str = "campaign-goal";
    pub const PERSONALIZATION_LEVEL: &str = "personalization-level";
    pub const ANALYSIS_DEPTH: &str = "analysis-depth";

    /// Field key for one compliance acknowledgement flag
    pub fn compliance_flag(item_id: &str) -> String {
        format!("compliance:{}", item_id)
    }
}

/// A single wizard field value.
///
/// Untagged so the frontend submits plain JSON: strings for text and
/// select controls, arrays for multi-selects, booleans for
/// acknowledgement flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    Selection(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn selection<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selection(values.into_iter().map(Into::into).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            Self::Selection(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            _ => None,
        }
    }

    /// True when the value carries no usable content: empty or
    /// whitespace-only text, an empty selection, or an unset flag.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(value) => value.trim().is_empty(),
            Self::Selection(values) => values.is_empty(),
            Self::Flag(value) => !value,
        }
    }
}

/// The wizard field map
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Immutable snapshot of the wizard fields taken at launch time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfiguration {
    pub name: String,
    pub industry: String,
    pub company_size: String,
    pub location: String,
    pub job_roles: Vec<String>,
    pub brand_voice: String,
    pub goal: String,
    pub personalization_level: Option<String>,
    pub analysis_depth: Option<String>,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl CampaignConfiguration {
    /// Snapshot the current field map. Launch validation has already run
    /// by the time this is called; missing optional fields stay empty.
    pub fn from_fields(field_map: &FieldMap) -> Self {
        let text = |name: &str| -> String {
            field_map
                .get(name)
                .and_then(FieldValue::as_text)
                .unwrap_or_default()
                .to_string()
        };
        let optional_text = |name: &str| -> Option<String> {
            field_map
                .get(name)
                .and_then(FieldValue::as_text)
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string)
        };

        Self {
            name: text(fields::CAMPAIGN_NAME),
            industry: text(fields::TARGET_INDUSTRY),
            company_size: text(fields::COMPANY_SIZE),
            location: text(fields::LOCATION),
            job_roles: field_map
                .get(fields::JOB_ROLES)
                .and_then(FieldValue::as_selection)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
            brand_voice: text(fields::BRAND_VOICE),
            goal: text(fields::CAMPAIGN_GOAL),
            personalization_level: optional_text(fields::PERSONALIZATION_LEVEL),
            analysis_depth: optional_text(fields::ANALYSIS_DEPTH),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// The launch-review summary shown on step 4.
///
/// Every entry is a display string; absent or empty fields render "-".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignSummary {
    pub name: String,
    pub industry: String,
    pub company_size: String,
    pub location: String,
    pub brand_voice: String,
    pub goal: String,
}

/// Placeholder rendered for absent or empty summary fields
pub const SUMMARY_PLACEHOLDER: &str = "-";

impl Default for CampaignSummary {
    fn default() -> Self {
        Self {
            name: SUMMARY_PLACEHOLDER.to_string(),
            industry: SUMMARY_PLACEHOLDER.to_string(),
            company_size: SUMMARY_PLACEHOLDER.to_string(),
            location: SUMMARY_PLACEHOLDER.to_string(),
            brand_voice: SUMMARY_PLACEHOLDER.to_string(),
            goal: SUMMARY_PLACEHOLDER.to_string(),
        }
    }
}
