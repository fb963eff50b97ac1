//! Builder para `WizardController`.
//!
//! Obliga a declarar los colaboradores imprescindibles (notificaciones y
//! servicio de envío) antes de construir el controlador; el presenter de
//! errores y el renderer de pasos son opcionales y por defecto no hacen nada.
//!
//! ```ignore
//! let wizard = WizardController::builder(WizardDefinition::volunteer())
//!     .notifier(sink)
//!     .submission(service)
//!     .presenter(errors)
//!     .build()?;
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::engine::WizardController;
use crate::errors::WizardError;
use crate::event::{EventStore, InMemoryEventStore};
use crate::model::{WizardPhase, WizardState};
use crate::ports::{FieldErrorPresenter, NoopPresenter, NoopRenderer, NotificationSink, StepRenderer, SubmissionService};
use crate::step::WizardDefinition;

pub struct WizardBuilder<E: EventStore> {
    definition: WizardDefinition,
    event_store: E,
    session_id: Option<Uuid>,
    notifier: Option<Arc<dyn NotificationSink>>,
    presenter: Option<Arc<dyn FieldErrorPresenter>>,
    renderer: Option<Arc<dyn StepRenderer>>,
    submission: Option<Arc<dyn SubmissionService>>,
}

impl WizardBuilder<InMemoryEventStore> {
    pub fn new(definition: WizardDefinition) -> Self {
        Self { definition,
               event_store: InMemoryEventStore::default(),
               session_id: None,
               notifier: None,
               presenter: None,
               renderer: None,
               submission: None }
    }
}

impl<E: EventStore> WizardBuilder<E> {
    /// Sustituye el store de eventos.
    pub fn event_store<E2: EventStore>(self, event_store: E2) -> WizardBuilder<E2> {
        WizardBuilder { definition: self.definition,
                        event_store,
                        session_id: self.session_id,
                        notifier: self.notifier,
                        presenter: self.presenter,
                        renderer: self.renderer,
                        submission: self.submission }
    }

    /// Fija el id de sesión (por defecto uno aleatorio).
    pub fn session_id(mut self, session_id: Uuid) -> Self {
        self.session_id = Some(session_id);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn NotificationSink>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn presenter(mut self, presenter: Arc<dyn FieldErrorPresenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn StepRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn submission(mut self, submission: Arc<dyn SubmissionService>) -> Self {
        self.submission = Some(submission);
        self
    }

    /// Construye el controlador en `Step(1)`, registra `SessionStarted` y
    /// renderiza el primer paso.
    pub fn build(self) -> Result<WizardController<E>, WizardError> {
        if self.definition.is_empty() {
            return Err(WizardError::EmptyDefinition);
        }
        let notifier = self.notifier.ok_or_else(|| WizardError::MissingCollaborator("notifier".into()))?;
        let submission = self.submission.ok_or_else(|| WizardError::MissingCollaborator("submission".into()))?;

        let mut controller = WizardController { session_id: self.session_id.unwrap_or_else(Uuid::new_v4),
                                                state: WizardState::initial(),
                                                phase: WizardPhase::Step(1),
                                                summary: None,
                                                in_flight: None,
                                                shown_errors: BTreeSet::new(),
                                                event_store: self.event_store,
                                                notifier,
                                                presenter: self.presenter.unwrap_or_else(|| Arc::new(NoopPresenter) as Arc<dyn FieldErrorPresenter>),
                                                renderer: self.renderer.unwrap_or_else(|| Arc::new(NoopRenderer) as Arc<dyn StepRenderer>),
                                                submission,
                                                definition: self.definition };
        controller.start_session();
        controller.renderer.render(1, &controller.state.completed_steps);
        Ok(controller)
    }
}
