//! Campaign Wizard State Machine
//!
//! Four-step, step-gated configuration flow. Forward movement is gated
//! by the current step's validation rules; backward movement and direct
//! step jumps are not. Field values persist across navigation and are
//! only read back at advance and launch time.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::campaign::{CampaignConfiguration, FieldMap, FieldValue};
use crate::models::catalog::WizardCatalog;
use crate::utils::error::{AppError, AppResult};

use super::validation::{validate, StepValidation};

/// First wizard step
pub const FIRST_STEP: u8 = 1;
/// Final (review-and-launch) wizard step
pub const FINAL_STEP: u8 = 4;

/// Serializable view of the wizard for the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardView {
    pub step: u8,
    pub fields: FieldMap,
}

/// The step-gated campaign configuration wizard.
///
/// Reusable: launching produces a [`CampaignConfiguration`] snapshot and
/// returns the wizard to step 1 for the next session, retaining the
/// collected field values.
#[derive(Debug, Clone)]
pub struct CampaignWizard {
    step: u8,
    fields: FieldMap,
    catalog: WizardCatalog,
}

impl CampaignWizard {
    pub fn new(catalog: WizardCatalog) -> Self {
        Self {
            step: FIRST_STEP,
            fields: FieldMap::new(),
            catalog,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn catalog(&self) -> &WizardCatalog {
        &self.catalog
    }

    pub fn view(&self) -> WizardView {
        WizardView {
            step: self.step,
            fields: self.fields.clone(),
        }
    }

    /// Set a field unconditionally. Nothing is validated until the next
    /// advance or launch.
    pub fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        debug!(field = %name, "wizard field updated");
        self.fields.insert(name, value);
    }

    /// Jump directly to a step without validating it. Out-of-range
    /// targets are silently ignored; users may freely revisit any step
    /// from the step indicator.
    pub fn go_to_step(&mut self, step: u8) {
        if (FIRST_STEP..=FINAL_STEP).contains(&step) {
            self.step = step;
        } else {
            debug!(step, "ignoring out-of-range step jump");
        }
    }

    /// Validate a step against the current fields without moving
    pub fn validate_step(&self, step: u8) -> StepValidation {
        validate(step, &self.fields, &self.catalog)
    }

    /// Validate the current step and move forward on success.
    ///
    /// Returns the (possibly unchanged) step: advancing from the final
    /// step is a no-op and never auto-launches. On failure the step is
    /// unchanged and the blank fields are reported.
    pub fn advance(&mut self) -> AppResult<u8> {
        let verdict = self.validate_step(self.step);
        if !verdict.valid {
            debug!(step = self.step, failures = ?verdict.failures, "advance blocked");
            return Err(AppError::missing_fields(verdict.failures));
        }
        self.step = (self.step + 1).min(FINAL_STEP);
        Ok(self.step)
    }

    /// Move one step back, floored at step 1. Never validated.
    pub fn retreat(&mut self) -> u8 {
        self.step = self.step.saturating_sub(1).max(FIRST_STEP);
        self.step
    }

    /// Launch the campaign from the review step.
    ///
    /// Permitted only at the final step with its validation passing.
    /// Produces the configuration snapshot and resets the wizard to step
    /// 1; field values are retained for the next session.
    pub fn launch(&mut self) -> AppResult<CampaignConfiguration> {
        if self.step != FINAL_STEP {
            return Err(AppError::validation(format!(
                "Launch is only available at step {}, currently at step {}",
                FINAL_STEP, self.step
            )));
        }

        let verdict = self.validate_step(FINAL_STEP);
        if !verdict.valid {
            return Err(AppError::missing_fields(verdict.failures));
        }

        let configuration = CampaignConfiguration::from_fields(&self.fields);
        self.step = FIRST_STEP;
        info!(campaign = %configuration.name, "campaign launched");
        Ok(configuration)
    }
}
