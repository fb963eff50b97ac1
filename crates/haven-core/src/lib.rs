//! haven-core: asistente multi-paso con validación por paso.
//!
//! El `WizardController` posee el estado (paso actual, pasos completados,
//! campos), valida cada paso antes de avanzar, proyecta el resumen en el
//! último paso y coordina el envío asíncrono a través de los puertos de
//! `ports`. No hay I/O propio: todo efecto visible pasa por un colaborador.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod model;
pub mod ports;
pub mod step;
pub mod validation;

pub use engine::{SubmissionReceipt, WizardBuilder, WizardController};
pub use errors::WizardError;
pub use event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
pub use model::{project_summary, FieldMap, FieldValue, SubmissionPayload, SummaryView, WizardPhase, WizardState};
pub use ports::{FieldErrorPresenter, NotificationKind, NotificationSink, StepRenderer, SubmissionOutcome, SubmissionService};
pub use step::{FieldKind, FieldSpec, StepDefinition, StepStatus, WizardDefinition, WizardMessages};
pub use validation::{is_non_empty, is_valid_email, is_valid_phone, FieldCheck, ValidationResult};

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Notes(Mutex<Vec<(String, NotificationKind)>>);

    impl NotificationSink for Notes {
        fn notify(&self, message: &str, kind: NotificationKind) {
            self.0.lock().unwrap().push((message.to_string(), kind));
        }
    }

    struct AlwaysAccept;

    #[async_trait]
    impl SubmissionService for AlwaysAccept {
        async fn submit(&self, _payload: SubmissionPayload) -> SubmissionOutcome {
            SubmissionOutcome::Accepted
        }
    }

    fn wizard(notes: Arc<Notes>) -> WizardController {
        WizardController::builder(WizardDefinition::volunteer()).notifier(notes)
                                                                .submission(Arc::new(AlwaysAccept))
                                                                .build()
                                                                .expect("wizard should build")
    }

    #[test]
    fn builder_requires_notifier_and_submission() {
        let err = WizardController::builder(WizardDefinition::volunteer()).build().err();
        assert_eq!(err, Some(WizardError::MissingCollaborator("notifier".into())));
        let err = WizardController::builder(WizardDefinition::volunteer()).notifier(Arc::new(Notes::default()))
                                                                          .build()
                                                                          .err();
        assert_eq!(err, Some(WizardError::MissingCollaborator("submission".into())));
    }

    #[test]
    fn session_starts_on_step_one() {
        let w = wizard(Arc::new(Notes::default()));
        assert_eq!(w.phase(), WizardPhase::Step(1));
        assert!(w.state().is_initial());
        assert_eq!(w.event_kinds(), vec!["SessionStarted"]);
    }

    #[test]
    fn full_walkthrough_resets_after_submit() {
        let notes = Arc::new(Notes::default());
        let mut w = wizard(notes.clone());
        w.set_field("firstName", "Jane").unwrap();
        w.set_field("lastName", "Doe").unwrap();
        w.set_field("email", "jane@x.com").unwrap();
        assert_eq!(w.go_next(), Ok(2));
        w.apply_role_preset("Mentor").unwrap();
        assert_eq!(w.go_next(), Ok(3));
        assert_eq!(w.summary().map(|s| s.role.as_str()), Some("Mentor"));

        let receipt = tokio_test::block_on(w.submit()).expect("submission accepted");
        assert_eq!(receipt.summary.full_name, "Jane Doe");
        assert!(w.state().is_initial());
        assert_eq!(w.phase(), WizardPhase::Step(1));
        let last = notes.0.lock().unwrap().last().cloned();
        assert_eq!(last, Some((constants::MSG_VOLUNTEER_SUCCESS.to_string(), NotificationKind::Success)));
    }

    #[test]
    fn blur_reports_only_non_empty_invalid_values() {
        let mut w = wizard(Arc::new(Notes::default()));
        assert_eq!(w.blur_field("email"), None);
        w.set_field("email", "jane@").unwrap();
        assert_eq!(w.blur_field("email"), Some(constants::MSG_INVALID_EMAIL));
        w.set_field("phone", "+27 21 555 0100").unwrap();
        assert_eq!(w.blur_field("phone"), None);
        assert_eq!(w.blur_field("unknown"), None);
    }
}
