//! Definiciones de pasos del asistente.
//!
//! Un paso es una pantalla del formulario identificada por su número
//! (`1..=N`) con la lista ordenada de campos que valida. Este módulo define:
//! - `FieldKind` / `FieldSpec`: tipo y obligatoriedad de cada campo.
//! - `StepDefinition` y `WizardDefinition`: estructura estática del asistente.
//! - `StepStatus`: estado de cada paso para el indicador de progreso.

pub mod definition;
mod status;

pub use definition::{FieldKind, FieldSpec, StepDefinition, WizardDefinition, WizardMessages};
pub use status::StepStatus;
