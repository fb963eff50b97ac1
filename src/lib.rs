//! HavenFlow Rust Library
//!
//! Capa de aplicación sobre `haven-core`:
//! - `config`: latencias y fallo simulado de los envíos, desde el entorno.
//! - `errors`: errores de núcleo y de formularios.
//! - `session`: frontera entre eventos de UI y el asistente.
//! - `forms`: formularios de donación y newsletter.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod errors;
pub mod forms;
pub mod session;

pub use config::{AppConfig, SubmissionConfig};
pub use session::{CommandOutcome, WizardCommand, WizardSession};
