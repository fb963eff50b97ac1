use haven_core::WizardError;
use thiserror::Error;

use super::DomainError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error interno: {0}")]
    Internal(String),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error del asistente: {0}")]
    Wizard(#[from] WizardError),
    #[error("Error de formulario: {0}")]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_internal_variant_format() {
        let err = CoreError::Internal("algo malo".into());
        assert_eq!(err.to_string(), "Error interno: algo malo");
    }

    #[test]
    fn test_config_variant_format() {
        let err = CoreError::Config("HAVEN_DONATION_DELAY_MS=abc".into());
        assert_eq!(err.to_string(), "Error de configuración: HAVEN_DONATION_DELAY_MS=abc");
    }

    #[test]
    fn test_wizard_variant_from() {
        let err: CoreError = WizardError::SubmissionInFlight.into();
        assert!(matches!(err, CoreError::Wizard(WizardError::SubmissionInFlight)));
    }
}
