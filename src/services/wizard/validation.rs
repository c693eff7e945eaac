//! Wizard Validation Rules
//!
//! Pure per-step rules over the field map. Validation never mutates the
//! wizard; failing a check only produces a field-indexed report.

use serde::{Deserialize, Serialize};

use crate::models::campaign::{fields, FieldMap, FieldValue};
use crate::models::catalog::WizardCatalog;

/// Minimum number of acknowledged compliance flags required to launch
pub const REQUIRED_COMPLIANCE_ACKS: usize = 3;

/// Required text fields for step 1 (campaign basics)
const STEP_ONE_FIELDS: [&str; 4] = [
    fields::CAMPAIGN_NAME,
    fields::TARGET_INDUSTRY,
    fields::COMPANY_SIZE,
    fields::LOCATION,
];

/// Required text fields for step 3 (messaging)
const STEP_THREE_FIELDS: [&str; 2] = [fields::BRAND_VOICE, fields::CAMPAIGN_GOAL];

/// Verdict for one step's validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepValidation {
    pub valid: bool,
    /// Names of the fields that failed, in rule order
    pub failures: Vec<String>,
}

impl StepValidation {
    fn from_failures(failures: Vec<String>) -> Self {
        Self {
            valid: failures.is_empty(),
            failures,
        }
    }
}

/// Validate one wizard step against the current field map.
///
/// - Step 1: non-empty trimmed campaign name, industry, company size,
///   and location.
/// - Step 2: at least one job role selected.
/// - Step 3: non-empty trimmed brand voice and campaign goal.
/// - Step 4: at least [`REQUIRED_COMPLIANCE_ACKS`] compliance flags set,
///   counted over the catalog's checklist items only.
///
/// Steps outside 1..=4 have no rules and always pass.
pub fn validate(step: u8, field_map: &FieldMap, catalog: &WizardCatalog) -> StepValidation {
    let mut failures = Vec::new();

    match step {
        1 => collect_blank_text_fields(&STEP_ONE_FIELDS, field_map, &mut failures),
        2 => {
            let has_role = field_map
                .get(fields::JOB_ROLES)
                .and_then(FieldValue::as_selection)
                .map(|roles| !roles.is_empty())
                .unwrap_or(false);
            if !has_role {
                failures.push(fields::JOB_ROLES.to_string());
            }
        }
        3 => collect_blank_text_fields(&STEP_THREE_FIELDS, field_map, &mut failures),
        4 => {
            let acknowledged = catalog
                .compliance_items
                .iter()
                .filter(|item| {
                    field_map
                        .get(&fields::compliance_flag(&item.id))
                        .and_then(FieldValue::as_flag)
                        .unwrap_or(false)
                })
                .count();
            if acknowledged < REQUIRED_COMPLIANCE_ACKS {
                failures.push("compliance".to_string());
            }
        }
        _ => {}
    }

    StepValidation::from_failures(failures)
}

fn collect_blank_text_fields(names: &[&str], field_map: &FieldMap, failures: &mut Vec<String>) {
    for name in names {
        let blank = field_map
            .get(*name)
            .map(|value| match value {
                FieldValue::Text(_) => value.is_blank(),
                // A non-text value in a text field is treated as missing
                _ => true,
            })
            .unwrap_or(true);
        if blank {
            failures.push((*name).to_string());
        }
    }
}
