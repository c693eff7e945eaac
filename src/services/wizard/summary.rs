//! Summary Projection
//!
//! Derives the launch-review summary from the current wizard fields.
//! Recomputed on every request; nothing is cached, so the projection is
//! always consistent with the latest field edits.

use crate::models::campaign::{fields, CampaignSummary, FieldMap, FieldValue, SUMMARY_PLACEHOLDER};
use crate::models::catalog::WizardCatalog;

/// Project the field map into display strings.
///
/// Fields backed by a labeled option list (company size) render the
/// option label rather than the stored code; unknown codes fall back to
/// the raw value. Absent or empty fields render "-".
pub fn project(field_map: &FieldMap, catalog: &WizardCatalog) -> CampaignSummary {
    let display = |name: &str| -> String {
        field_map
            .get(name)
            .and_then(FieldValue::as_text)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| SUMMARY_PLACEHOLDER.to_string())
    };

    let company_size = field_map
        .get(fields::COMPANY_SIZE)
        .and_then(FieldValue::as_text)
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| {
            catalog
                .company_size_label(code)
                .unwrap_or(code)
                .to_string()
        })
        .unwrap_or_else(|| SUMMARY_PLACEHOLDER.to_string());

    CampaignSummary {
        name: display(fields::CAMPAIGN_NAME),
        industry: display(fields::TARGET_INDUSTRY),
        company_size,
        location: display(fields::LOCATION),
        brand_voice: display(fields::BRAND_VOICE),
        goal: display(fields::CAMPAIGN_GOAL),
    }
}
