use thiserror::Error;

/// Errores de los formularios sueltos (donación, newsletter).
///
/// Cuando se devuelven, el usuario ya fue notificado; el llamador sólo los
/// registra o los usa para decidir el siguiente paso.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Importe inválido: {0:?}")]
    InvalidAmount(String),
    #[error("Email inválido: {0:?}")]
    InvalidEmail(String),
    #[error("Envío fallido: {0}")]
    Submission(String),
}
