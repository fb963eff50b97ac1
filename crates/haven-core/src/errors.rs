//! Errores del núcleo del asistente.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationResult;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum WizardError {
    /// Uno o más campos del paso no pasaron su validador. Recuperable.
    #[error("step {step} failed validation ({} invalid field(s))", .result.invalid_count())]
    Validation { step: usize, result: ValidationResult },
    /// El servicio externo rechazó el envío. Recuperable reenviando.
    #[error("submission failed: {reason}")]
    Submission { reason: String },
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("no submission is in flight")]
    NoSubmissionInFlight,
    #[error("submit is only allowed on the last step (current {current}, last {last})")]
    NotOnFinalStep { current: usize, last: usize },
    #[error("invalid step index {0}")]
    InvalidStepIndex(usize),
    #[error("wizard definition has no steps")]
    EmptyDefinition,
    #[error("missing collaborator: {0}")]
    MissingCollaborator(String),
    /// `set_option` sobre un campo que no es un grupo de checkboxes.
    #[error("field {0:?} is not a checkbox group")]
    NotAnOptionGroup(String),
}

impl WizardError {
    /// Errores de uso de la API (operación en un estado incorrecto). La
    /// frontera de UI los registra y los ignora.
    pub fn is_programmer_error(&self) -> bool {
        matches!(self,
                 WizardError::SubmissionInFlight
                 | WizardError::NoSubmissionInFlight
                 | WizardError::NotOnFinalStep { .. }
                 | WizardError::InvalidStepIndex(_)
                 | WizardError::EmptyDefinition
                 | WizardError::MissingCollaborator(_)
                 | WizardError::NotAnOptionGroup(_))
    }

    /// Errores que el controlador ya notificó al usuario.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, WizardError::Validation { .. } | WizardError::Submission { .. })
    }
}
