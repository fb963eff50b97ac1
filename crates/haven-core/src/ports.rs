//! Interfaces hacia los colaboradores externos del asistente.
//!
//! El núcleo sólo conoce estos traits; las implementaciones concretas (logs,
//! DOM, servicio HTTP simulado) viven en `haven-adapters` o en la aplicación.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::SubmissionPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// Muestra un mensaje transitorio. No devuelve nada y no debe entrar en pánico.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Anotaciones de error por campo.
pub trait FieldErrorPresenter: Send + Sync {
    fn show(&self, field_key: &str, message: &str);
    fn clear(&self, field_key: &str);
}

/// Hook de presentación invocado tras cada transición de paso.
pub trait StepRenderer: Send + Sync {
    fn render(&self, current_step: usize, completed_steps: &BTreeSet<usize>);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    Accepted,
    Failed { reason: String },
}

/// Única frontera de I/O. El núcleo no reintenta.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    async fn submit(&self, payload: SubmissionPayload) -> SubmissionOutcome;
}

/// Presenter que descarta las anotaciones.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPresenter;

impl FieldErrorPresenter for NoopPresenter {
    fn show(&self, _field_key: &str, _message: &str) {}
    fn clear(&self, _field_key: &str) {}
}

/// Renderer sin salida.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl StepRenderer for NoopRenderer {
    fn render(&self, _current_step: usize, _completed_steps: &BTreeSet<usize>) {}
}
