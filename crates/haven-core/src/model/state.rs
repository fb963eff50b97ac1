//! Estado del asistente (`WizardState`) y fase observable (`WizardPhase`).
//!
//! El estado lo posee exclusivamente el `WizardController`; fuera del crate
//! sólo se expone en lectura.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::FieldMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub(crate) current_step: usize,
    pub(crate) completed_steps: BTreeSet<usize>,
    pub(crate) fields: FieldMap,
}

impl WizardState {
    /// Estado inicial: paso 1, sin pasos completados, sin campos.
    pub fn initial() -> Self {
        Self { current_step: 1,
               completed_steps: BTreeSet::new(),
               fields: FieldMap::new() }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed_steps
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn is_initial(&self) -> bool {
        *self == Self::initial()
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Fase del controlador: un paso concreto, o los pseudo-estados de envío.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardPhase {
    Step(usize),
    /// Envío en curso; el resto de operaciones se rechazan.
    Submitting,
    /// Envío aceptado. Transitorio: el controlador vuelve a `Step(1)`.
    Submitted,
}
