//! Core WizardController implementation

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info, warn};
use uuid::Uuid;

use crate::engine::WizardBuilder;
use crate::errors::WizardError;
use crate::event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
use crate::model::{project_summary, FieldMap, FieldValue, SubmissionPayload, SummaryView, WizardPhase, WizardState};
use crate::ports::{FieldErrorPresenter, NotificationKind, NotificationSink, StepRenderer, SubmissionOutcome, SubmissionService};
use crate::step::{FieldKind, WizardDefinition};
use crate::validation::{check_on_blur, validate_step};

/// Resultado de un envío aceptado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Sesión que se envió; el controlador ya está en una nueva.
    pub session_id: Uuid,
    pub fingerprint: String,
    /// Resumen de los datos enviados, capturado antes del reset.
    pub summary: SummaryView,
}

/// Controlador del asistente multi-paso.
///
/// Posee en exclusiva el `WizardState`; toda mutación pasa por sus
/// operaciones. Las transiciones se validan contra la `WizardDefinition`, se
/// registran en el `EventStore` y se presentan mediante los colaboradores.
pub struct WizardController<E = InMemoryEventStore>
    where E: EventStore
{
    pub(crate) definition: WizardDefinition,
    pub(crate) state: WizardState,
    pub(crate) phase: WizardPhase,
    pub(crate) summary: Option<SummaryView>,
    pub(crate) in_flight: Option<String>,
    pub(crate) shown_errors: BTreeSet<String>,
    pub(crate) session_id: Uuid,
    pub(crate) event_store: E,
    pub(crate) notifier: Arc<dyn NotificationSink>,
    pub(crate) presenter: Arc<dyn FieldErrorPresenter>,
    pub(crate) renderer: Arc<dyn StepRenderer>,
    pub(crate) submission: Arc<dyn SubmissionService>,
}

impl WizardController<InMemoryEventStore> {
    /// Crea un builder con store de eventos en memoria.
    pub fn builder(definition: WizardDefinition) -> WizardBuilder<InMemoryEventStore> {
        WizardBuilder::new(definition)
    }
}

impl<E> WizardController<E> where E: EventStore
{
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.state.completed_steps
    }

    pub fn fields(&self) -> &FieldMap {
        &self.state.fields
    }

    pub fn definition(&self) -> &WizardDefinition {
        &self.definition
    }

    pub fn step_count(&self) -> usize {
        self.definition.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_step == self.definition.len()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == WizardPhase::Submitting
    }

    /// Resumen expuesto al llegar al último paso.
    pub fn summary(&self) -> Option<&SummaryView> {
        self.summary.as_ref()
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Eventos de la sesión en curso.
    pub fn events(&self) -> Vec<WizardEvent> {
        self.event_store.list(self.session_id)
    }

    /// Eventos de una sesión anterior (p. ej. la de un `SubmissionReceipt`).
    pub fn history(&self, session_id: Uuid) -> Vec<WizardEvent> {
        self.event_store.list(session_id)
    }

    /// Nombres de los eventos de la sesión en curso, en orden.
    pub fn event_kinds(&self) -> Vec<&'static str> {
        self.event_store.kinds(self.session_id)
    }

    /// Avanza un paso si el actual valida. Devuelve el paso resultante.
    pub fn go_next(&mut self) -> Result<usize, WizardError> {
        self.ensure_idle("go_next")?;
        let from = self.state.current_step;
        self.validate_and_present(from)?;

        self.state.completed_steps.insert(from);
        let last = self.definition.len();
        if from < last {
            self.state.current_step = from + 1;
            self.record(WizardEventKind::StepAdvanced { from, to: from + 1 });
            debug!("wizard {} advanced {} -> {}", self.session_id, from, from + 1);
            self.render();
        }
        self.phase = WizardPhase::Step(self.state.current_step);

        if self.state.current_step == last {
            let summary = project_summary(&self.state.fields);
            self.record(WizardEventKind::SummaryProjected { summary: summary.clone() });
            self.summary = Some(summary);
        }
        self.debug_check_invariants();
        Ok(self.state.current_step)
    }

    /// Retrocede un paso (mínimo 1). No valida ni toca campos o pasos
    /// completados.
    pub fn go_prev(&mut self) -> Result<usize, WizardError> {
        self.ensure_idle("go_prev")?;
        let from = self.state.current_step;
        if from > 1 {
            self.state.current_step = from - 1;
            self.phase = WizardPhase::Step(from - 1);
            self.summary = None;
            self.record(WizardEventKind::StepRetreated { from, to: from - 1 });
            debug!("wizard {} retreated {} -> {}", self.session_id, from, from - 1);
            self.render();
        }
        self.debug_check_invariants();
        Ok(self.state.current_step)
    }

    /// Upsert idempotente de un campo. Devuelve `true` si el valor cambió.
    ///
    /// El valor se adapta al tipo declarado del campo (un grupo de
    /// checkboxes siempre se guarda como conjunto). Cambiar un campo con un
    /// error visible limpia ese error.
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Result<bool, WizardError> {
        self.ensure_idle("set_field")?;
        let key = key.into();
        let mut value = value.into();
        if let Some(spec) = self.definition.field_spec(&key) {
            value = value.coerce(spec.kind);
        }
        if !self.state.fields.upsert(key.clone(), value.clone()) {
            return Ok(false);
        }
        self.after_field_change(key, value);
        Ok(true)
    }

    /// Marca o desmarca una opción de un grupo de checkboxes. Sólo acepta
    /// campos declarados como `CheckboxGroup`.
    pub fn set_option(&mut self, key: &str, option: &str, checked: bool) -> Result<bool, WizardError> {
        self.ensure_idle("set_option")?;
        match self.definition.field_spec(key) {
            Some(spec) if spec.kind == FieldKind::CheckboxGroup => {}
            _ => {
                warn!("wizard {}: set_option on non-group field {key:?}", self.session_id);
                return Err(WizardError::NotAnOptionGroup(key.to_string()));
            }
        }
        if !self.state.fields.set_option(key, option, checked) {
            return Ok(false);
        }
        let value = self.state.fields.get(key).cloned().unwrap_or_else(|| FieldValue::multi(Vec::<String>::new()));
        self.after_field_change(key.to_string(), value);
        Ok(true)
    }

    /// Preselecciona el rol (botones "apply" de cada rol). No cambia de paso.
    pub fn apply_role_preset(&mut self, role: &str) -> Result<bool, WizardError> {
        self.set_field(crate::constants::FIELD_ROLE, role)
    }

    /// Chequeo al perder el foco (email / teléfono con contenido). Devuelve
    /// el mensaje mostrado, si hubo error.
    pub fn blur_field(&mut self, key: &str) -> Option<&'static str> {
        let kind = self.definition.field_spec(key)?.kind;
        self.clear_error(key);
        let message = check_on_blur(kind, &self.state.fields.display(key))?;
        self.show_error(key, message);
        Some(message)
    }

    /// Vuelve al estado inicial. Cierra el log de la sesión con
    /// `WizardReset` y abre una sesión nueva.
    pub fn reset(&mut self) -> Result<(), WizardError> {
        self.ensure_idle("reset")?;
        self.reset_state();
        Ok(())
    }

    /// Primera mitad del envío: revalida el último paso y pasa a
    /// `Submitting`. El llamador debe entregar el payload al servicio y
    /// completar con `finish_submit`.
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, WizardError> {
        self.ensure_idle("submit")?;
        let last = self.definition.len();
        if self.state.current_step != last {
            warn!("wizard {}: submit called on step {} of {}", self.session_id, self.state.current_step, last);
            return Err(WizardError::NotOnFinalStep { current: self.state.current_step,
                                                     last });
        }
        self.validate_and_present(last)?;

        let payload = SubmissionPayload::new(self.definition.name(), self.state.fields.clone());
        self.record(WizardEventKind::SubmissionStarted { fingerprint: payload.fingerprint.clone() });
        self.in_flight = Some(payload.fingerprint.clone());
        self.phase = WizardPhase::Submitting;
        debug!("wizard {} submitting {}", self.session_id, payload.fingerprint);
        Ok(payload)
    }

    /// Segunda mitad del envío: aplica el resultado del servicio.
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome) -> Result<SubmissionReceipt, WizardError> {
        let fingerprint = self.in_flight.take().ok_or(WizardError::NoSubmissionInFlight)?;
        match outcome {
            SubmissionOutcome::Accepted => {
                self.phase = WizardPhase::Submitted;
                self.record(WizardEventKind::SubmissionSucceeded { fingerprint: fingerprint.clone() });
                info!("wizard {} submission {} accepted", self.session_id, fingerprint);
                let summary = project_summary(&self.state.fields);
                let session_id = self.session_id;
                self.notifier.notify(&self.definition.messages().success, NotificationKind::Success);
                self.reset_state();
                Ok(SubmissionReceipt { session_id,
                                       fingerprint,
                                       summary })
            }
            SubmissionOutcome::Failed { reason } => {
                self.record(WizardEventKind::SubmissionFailed { fingerprint,
                                                                reason: reason.clone() });
                warn!("wizard {} submission failed: {}", self.session_id, reason);
                self.phase = WizardPhase::Step(self.definition.len());
                self.notifier.notify(&self.definition.messages().failure, NotificationKind::Error);
                Err(WizardError::Submission { reason })
            }
        }
    }

    /// Envío completo: revalida, llama al `SubmissionService` una sola vez y
    /// aplica el resultado. Mientras el envío está pendiente cualquier otra
    /// operación devuelve `SubmissionInFlight`.
    pub async fn submit(&mut self) -> Result<SubmissionReceipt, WizardError> {
        let payload = self.begin_submit()?;
        let service = Arc::clone(&self.submission);
        let outcome = service.submit(payload).await;
        self.finish_submit(outcome)
    }

    fn ensure_idle(&self, op: &str) -> Result<(), WizardError> {
        if self.phase == WizardPhase::Submitting {
            warn!("wizard {}: {} rejected while a submission is in flight", self.session_id, op);
            return Err(WizardError::SubmissionInFlight);
        }
        Ok(())
    }

    /// Valida el paso, presenta errores por campo y, si falla, emite la
    /// notificación agregada.
    fn validate_and_present(&mut self, step_number: usize) -> Result<(), WizardError> {
        let step = self.definition.step(step_number)?;
        let result = validate_step(step, &self.state.fields);
        for (key, check) in &result.per_field {
            self.clear_error(key);
            if let (false, Some(message)) = (check.valid, check.message.as_deref()) {
                self.show_error(key, message);
            }
        }
        if result.overall_valid {
            return Ok(());
        }
        let invalid_fields = result.invalid_fields().map(|(k, _)| k.to_string()).collect();
        self.record(WizardEventKind::ValidationFailed { step: step_number,
                                                        invalid_fields });
        debug!("wizard {} step {} invalid ({} fields)", self.session_id, step_number, result.invalid_count());
        self.notifier.notify(&self.definition.messages().step_invalid, NotificationKind::Error);
        Err(WizardError::Validation { step: step_number,
                                      result })
    }

    fn after_field_change(&mut self, key: String, value: FieldValue) {
        if self.shown_errors.contains(&key) {
            self.clear_error(&key);
        }
        self.record(WizardEventKind::FieldSet { key, value });
    }

    fn show_error(&mut self, key: &str, message: &str) {
        self.presenter.show(key, message);
        self.shown_errors.insert(key.to_string());
    }

    fn clear_error(&mut self, key: &str) {
        self.presenter.clear(key);
        self.shown_errors.remove(key);
    }

    fn reset_state(&mut self) {
        let shown = std::mem::take(&mut self.shown_errors);
        for key in &shown {
            self.presenter.clear(key);
        }
        self.state = WizardState::initial();
        self.summary = None;
        self.in_flight = None;
        self.phase = WizardPhase::Step(1);
        self.record(WizardEventKind::WizardReset);
        let closed = self.session_id;
        self.session_id = Uuid::new_v4();
        self.start_session();
        debug!("wizard session {} closed, {} started", closed, self.session_id);
        self.render();
    }

    /// Abre el log de la sesión actual con `SessionStarted`.
    pub(crate) fn start_session(&mut self) {
        let started = WizardEventKind::SessionStarted { definition_hash: self.definition.definition_hash().to_string(),
                                                        step_count: self.definition.len() };
        self.record(started);
    }

    fn render(&self) {
        self.renderer.render(self.state.current_step, &self.state.completed_steps);
    }

    fn record(&mut self, kind: WizardEventKind) {
        self.event_store.append_kind(self.session_id, kind);
    }

    fn debug_check_invariants(&self) {
        debug_assert!((1..=self.definition.len()).contains(&self.state.current_step),
                      "current step {} out of range 1..={}",
                      self.state.current_step,
                      self.definition.len());
    }
}
