//! Tipos de evento del asistente y estructura `WizardEvent`.
//!
//! Cada operación que cambia el estado del `WizardController` agrega un evento
//! a un `EventStore` append-only. El log permite auditar una sesión completa
//! (qué se validó, qué se envió y con qué fingerprint) sin inspeccionar el
//! estado mutable.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{FieldValue, SummaryView};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WizardEventKind {
    /// Primer evento de una sesión: fija la `definition_hash` y la cantidad
    /// de pasos.
    SessionStarted { definition_hash: String, step_count: usize },
    FieldSet { key: String, value: FieldValue },
    ValidationFailed { step: usize, invalid_fields: Vec<String> },
    StepAdvanced { from: usize, to: usize },
    StepRetreated { from: usize, to: usize },
    SummaryProjected { summary: SummaryView },
    SubmissionStarted { fingerprint: String },
    SubmissionSucceeded { fingerprint: String },
    SubmissionFailed { fingerprint: String, reason: String },
    /// El estado volvió a `{paso 1, sin completados, sin campos}`.
    WizardReset,
}

impl WizardEventKind {
    pub fn name(&self) -> &'static str {
        match self {
            WizardEventKind::SessionStarted { .. } => "SessionStarted",
            WizardEventKind::FieldSet { .. } => "FieldSet",
            WizardEventKind::ValidationFailed { .. } => "ValidationFailed",
            WizardEventKind::StepAdvanced { .. } => "StepAdvanced",
            WizardEventKind::StepRetreated { .. } => "StepRetreated",
            WizardEventKind::SummaryProjected { .. } => "SummaryProjected",
            WizardEventKind::SubmissionStarted { .. } => "SubmissionStarted",
            WizardEventKind::SubmissionSucceeded { .. } => "SubmissionSucceeded",
            WizardEventKind::SubmissionFailed { .. } => "SubmissionFailed",
            WizardEventKind::WizardReset => "WizardReset",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardEvent {
    pub seq: u64, // asignado por el store (orden append)
    pub session_id: Uuid,
    pub kind: WizardEventKind,
    pub ts: DateTime<Utc>,
}
