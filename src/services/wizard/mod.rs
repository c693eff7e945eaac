//! Campaign Wizard Service
//!
//! The step-gated configuration flow: per-step validation rules, the
//! wizard state machine, and the launch-review summary projector.

pub mod state_machine;
pub mod summary;
pub mod validation;

pub use state_machine::{CampaignWizard, WizardView, FINAL_STEP, FIRST_STEP};
pub use validation::{validate, StepValidation, REQUIRED_COMPLIANCE_ACKS};
