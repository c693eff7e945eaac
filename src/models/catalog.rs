//! Wizard Option Catalogs
//!
//! Externally supplied option lists consumed by the wizard: selectable
//! job roles, company-size codes with display labels, and the compliance
//! checklist. The checklist contents are opaque to validation; only the
//! acknowledged count matters.

use serde::{Deserialize, Serialize};

/// A company-size option with a stored code and a display label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySizeOption {
    pub code: String,
    pub label: String,
}

/// A compliance checklist item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub id: String,
    pub label: String,
}

/// The option lists backing the campaign wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardCatalog {
    pub job_roles: Vec<String>,
    pub company_sizes: Vec<CompanySizeOption>,
    pub compliance_items: Vec<ComplianceItem>,
}

impl Default for WizardCatalog {
    fn default() -> Self {
        Self {
            job_roles: vec![
                "CEO".to_string(),
                "CTO".to_string(),
                "HR Director".to_string(),
                "VP Marketing".to_string(),
                "Sales Director".to_string(),
                "Head of Marketing".to_string(),
                "Founder".to_string(),
            ],
            company_sizes: vec![
                CompanySizeOption {
                    code: "1-50".to_string(),
                    label: "Startup (1-50 employees)".to_string(),
                },
                CompanySizeOption {
                    code: "51-200".to_string(),
                    label: "Small (51-200 employees)".to_string(),
                },
                CompanySizeOption {
                    code: "201-1000".to_string(),
                    label: "Mid-Market (201-1,000 employees)".to_string(),
                },
                CompanySizeOption {
                    code: "1000+".to_string(),
                    label: "Enterprise (1,000+ employees)".to_string(),
                },
            ],
            compliance_items: vec![
                ComplianceItem {
                    id: "terms-of-service".to_string(),
                    label: "I will respect the platform's terms of service".to_string(),
                },
                ComplianceItem {
                    id: "data-privacy".to_string(),
                    label: "I will handle prospect data according to privacy regulations"
                        .to_string(),
                },
                ComplianceItem {
                    id: "rate-limits".to_string(),
                    label: "I will keep outreach volume within safe daily limits".to_string(),
                },
            ],
        }
    }
}

impl WizardCatalog {
    /// Resolve a company-size code to its display label
    pub fn company_size_label(&self, code: &str) -> Option<&str> {
        self.company_sizes
            .iter()
            .find(|option| option.code == code)
            .map(|option| option.label.as_str())
    }

    /// Check the catalog is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.job_roles.is_empty() {
            return Err("Job role catalog is empty".to_string());
        }
        if self.company_sizes.is_empty() {
            return Err("Company size catalog is empty".to_string());
        }
        if self.compliance_items.is_empty() {
            return Err("Compliance checklist is empty".to_string());
        }
        Ok(())
    }
}
