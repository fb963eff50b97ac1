//! Demo: recorre una solicitud de voluntariado, una donación y una
//! suscripción al newsletter con los adaptadores de consola.
use std::sync::Arc;

use haven_adapters::{InMemoryFieldErrors, LogNotificationSink, ProgressRenderer};
use haven_core::{FieldErrorPresenter, NotificationSink, WizardController, WizardDefinition};
use havenflow_rust::errors::CoreError;
use havenflow_rust::forms::{DonationForm, NewsletterForm};
use havenflow_rust::{AppConfig, CommandOutcome, WizardSession};
use log::info;
use tracing_subscriber::EnvFilter;

async fn run_volunteer_demo(cfg: &AppConfig, notifier: Arc<dyn NotificationSink>) -> Result<(), CoreError> {
    println!("--- Solicitud de voluntariado ---");
    let definition = WizardDefinition::volunteer();
    let renderer = Arc::new(ProgressRenderer::new(definition.len()));
    let errors = Arc::new(InMemoryFieldErrors::new());
    let controller = WizardController::builder(definition).notifier(notifier.clone())
                                                          .presenter(errors.clone())
                                                          .renderer(renderer.clone())
                                                          .submission(cfg.submission.volunteer_service())
                                                          .build()?;
    let mut session = WizardSession::new(controller, notifier);

    // Eventos tal como los emitiría la página, uno por línea.
    let script = r#"
        {"command":"set_field","key":"firstName","value":"Jane"}
        {"command":"set_field","key":"lastName","value":"Doe"}
        {"command":"set_field","key":"email","value":"jane@example"}
        {"command":"blur","key":"email"}
        {"command":"next"}
        {"command":"set_field","key":"email","value":"jane@example.org"}
        {"command":"set_field","key":"phone","value":"+27 21 555 0100"}
        {"command":"next"}
        {"command":"apply_role","role":"Mentor"}
        {"command":"toggle_option","key":"availability","option":"Weekends","checked":true}
        {"command":"toggle_option","key":"availability","option":"Evenings","checked":true}
        {"command":"next"}
        {"command":"submit"}
    "#;

    let mut submitted = None;
    for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let outcome = session.dispatch_json(line).await;
        info!("{line} -> {outcome:?}");
        match &outcome {
            CommandOutcome::Invalid { step, invalid_fields } => {
                println!("Paso {step} inválido: {}", invalid_fields.join(", "));
                for (key, message) in errors.visible() {
                    println!("  {key}: {message}");
                }
            }
            CommandOutcome::Step(3) => {
                if let Some(summary) = session.controller().summary() {
                    println!("Resumen: {}", serde_json::to_string(summary).map_err(|e| CoreError::Internal(e.to_string()))?);
                }
            }
            CommandOutcome::Submitted(receipt) => {
                println!("Enviado: fingerprint={}", receipt.fingerprint);
                submitted = Some(receipt.session_id);
            }
            _ => {}
        }
    }
    if let Some(frame) = renderer.last_frame() {
        println!("Progreso final: paso {} {:?}", frame.current_step, frame.steps);
    }
    if let Some(session_id) = submitted {
        let trail: Vec<&str> = session.controller().history(session_id).iter().map(|e| e.kind.name()).collect();
        println!("Eventos de la solicitud: {trail:?}");
    }
    Ok(())
}

async fn run_forms_demo(cfg: &AppConfig, notifier: Arc<dyn NotificationSink>) {
    println!("--- Donación ---");
    let presenter: Arc<dyn FieldErrorPresenter> = Arc::new(InMemoryFieldErrors::new());
    let mut donation = DonationForm::new(notifier.clone(), presenter.clone(), cfg.submission.donation_service());
    donation.select_custom();
    donation.input_custom_amount("0");
    if let Err(e) = donation.submit().await {
        println!("Donación rechazada: {e}");
    }
    donation.input_custom_amount("150");
    donation.set_email("donor@example.org");
    match donation.submit().await {
        Ok(amount) => println!("Donación registrada: R{amount:.2}"),
        Err(e) => println!("Donación rechazada: {e}"),
    }

    println!("--- Newsletter ---");
    let mut newsletter = NewsletterForm::new(notifier, presenter, cfg.submission.newsletter_service());
    newsletter.set_email("reader@example.org");
    if let Err(e) = newsletter.submit().await {
        println!("Suscripción rechazada: {e}");
    }
}

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                             .init();
    let cfg = AppConfig::from_env()?;
    info!("configuración cargada: {:?}", cfg.submission);

    let notifier: Arc<dyn NotificationSink> = Arc::new(LogNotificationSink);
    run_volunteer_demo(&cfg, notifier.clone()).await?;
    run_forms_demo(&cfg, notifier).await;
    println!("!Demo completada");
    Ok(())
}
