//! Frontera entre los eventos de UI y el `WizardController`.
//!
//! `WizardSession::dispatch` es el único punto donde los errores del
//! asistente se resuelven: los de validación o envío se devuelven como
//! resultado (el usuario ya fue notificado por el controlador) y los de
//! programación se registran y se ignoran (en builds de desarrollo disparan
//! una aserción). `dispatch` toma `&mut self` durante todo el envío, así que
//! por aquí no llega un `SubmissionInFlight`. Un comando ilegible
//! (`dispatch_json`) es un fallo inesperado: se registra y se muestra la
//! notificación genérica.

use std::sync::Arc;

use haven_core::constants::MSG_GENERIC_FAILURE;
use haven_core::{FieldValue, NotificationKind, NotificationSink, SubmissionReceipt, WizardController, WizardError};
use log::{error, warn};
use serde::{Deserialize, Serialize};

/// Evento de UI dirigido al asistente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WizardCommand {
    SetField { key: String, value: FieldValue },
    ToggleOption { key: String, option: String, checked: bool },
    Blur { key: String },
    Next,
    Prev,
    ApplyRole { role: String },
    Submit,
    Reset,
}

/// Resultado de un comando ya resuelto en la frontera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// El campo cambió (`true`) o ya tenía ese valor (`false`).
    FieldUpdated(bool),
    /// Resultado del chequeo al perder el foco.
    Blurred { error: Option<&'static str> },
    /// Paso actual tras navegar.
    Step(usize),
    /// El paso no validó; los errores ya están presentados.
    Invalid { step: usize, invalid_fields: Vec<String> },
    Submitted(SubmissionReceipt),
    SubmissionFailed { reason: String },
    Reset,
    /// Llamada fuera de lugar; registrada y descartada.
    Ignored,
}

pub struct WizardSession {
    controller: WizardController,
    notifier: Arc<dyn NotificationSink>,
}

impl WizardSession {
    pub fn new(controller: WizardController, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { controller, notifier }
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    pub async fn dispatch(&mut self, command: WizardCommand) -> CommandOutcome {
        let result = match command {
            WizardCommand::SetField { key, value } => self.controller.set_field(key, value).map(CommandOutcome::FieldUpdated),
            WizardCommand::ToggleOption { key, option, checked } => {
                self.controller.set_option(&key, &option, checked).map(CommandOutcome::FieldUpdated)
            }
            WizardCommand::Blur { key } => Ok(CommandOutcome::Blurred { error: self.controller.blur_field(&key) }),
            WizardCommand::Next => self.controller.go_next().map(CommandOutcome::Step),
            WizardCommand::Prev => self.controller.go_prev().map(CommandOutcome::Step),
            WizardCommand::ApplyRole { role } => self.controller.apply_role_preset(&role).map(CommandOutcome::FieldUpdated),
            WizardCommand::Submit => self.controller.submit().await.map(CommandOutcome::Submitted),
            WizardCommand::Reset => self.controller.reset().map(|_| CommandOutcome::Reset),
        };
        result.unwrap_or_else(|e| self.resolve(e))
    }

    /// Decodifica un comando JSON de la UI y lo despacha.
    pub async fn dispatch_json(&mut self, raw: &str) -> CommandOutcome {
        match serde_json::from_str::<WizardCommand>(raw) {
            Ok(command) => self.dispatch(command).await,
            Err(e) => {
                error!("session {}: unreadable command {raw:?}: {e}", self.controller.session_id());
                self.notifier.notify(MSG_GENERIC_FAILURE, NotificationKind::Error);
                CommandOutcome::Ignored
            }
        }
    }

    fn resolve(&self, err: WizardError) -> CommandOutcome {
        match err {
            WizardError::Validation { step, result } => {
                CommandOutcome::Invalid { step,
                                          invalid_fields: result.invalid_fields().map(|(k, _)| k.to_string()).collect() }
            }
            WizardError::Submission { reason } => CommandOutcome::SubmissionFailed { reason },
            e => {
                warn!("session {}: ignored call: {e}", self.controller.session_id());
                debug_assert!(!e.is_programmer_error(), "wizard API misuse: {e}");
                CommandOutcome::Ignored
            }
        }
    }
}
