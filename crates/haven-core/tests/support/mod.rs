#![allow(dead_code)]

use std::sync::Arc;

use haven_adapters::{InMemoryFieldErrors, ProgressRenderer, RecordingNotificationSink, SimulatedSubmissionService};
use haven_core::{WizardController, WizardDefinition};

pub struct Harness {
    pub wizard: WizardController,
    pub notes: Arc<RecordingNotificationSink>,
    pub errors: Arc<InMemoryFieldErrors>,
    pub renderer: Arc<ProgressRenderer>,
    pub service: Arc<SimulatedSubmissionService>,
}

pub fn harness() -> Harness {
    harness_with(SimulatedSubmissionService::instant())
}

pub fn harness_with(service: SimulatedSubmissionService) -> Harness {
    let notes = Arc::new(RecordingNotificationSink::new());
    let errors = Arc::new(InMemoryFieldErrors::new());
    let renderer = Arc::new(ProgressRenderer::new(3));
    let service = Arc::new(service);
    let wizard = WizardController::builder(WizardDefinition::volunteer()).notifier(notes.clone())
                                                                         .presenter(errors.clone())
                                                                         .renderer(renderer.clone())
                                                                         .submission(service.clone())
                                                                         .build()
                                                                         .expect("volunteer wizard builds");
    Harness { wizard,
              notes,
              errors,
              renderer,
              service }
}

pub fn fill_step_one(wizard: &mut WizardController) {
    wizard.set_field("firstName", "Jane").unwrap();
    wizard.set_field("lastName", "Doe").unwrap();
    wizard.set_field("email", "jane@x.com").unwrap();
}

/// Lleva el asistente hasta el paso 3 con rol y disponibilidad.
pub fn reach_review(wizard: &mut WizardController) {
    fill_step_one(wizard);
    wizard.go_next().expect("step 1 valid");
    wizard.set_field("role", "Mentor").unwrap();
    wizard.set_option("availability", "Weekends", true).unwrap();
    wizard.set_option("availability", "Evenings", true).unwrap();
    wizard.go_next().expect("step 2 valid");
}
