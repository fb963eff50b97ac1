use std::sync::Arc;

use haven_core::constants::{FIELD_EMAIL, MSG_GENERIC_FAILURE, MSG_INVALID_EMAIL};
use haven_core::{is_valid_email, FieldErrorPresenter, FieldMap, NotificationKind, NotificationSink, SubmissionOutcome, SubmissionPayload, SubmissionService};
use log::{debug, info, warn};

use super::{donation_success_message, FIELD_AMOUNT, FORM_DONATION, MSG_CHECK_EMAIL, MSG_INVALID_AMOUNT};
use crate::errors::DomainError;

/// Botón de importe seleccionado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountChoice {
    Preset(String),
    Custom,
}

/// Interpreta el importe introducido: número finito y estrictamente positivo.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

/// Formulario de donación: importe (preset o libre) y email de contacto.
pub struct DonationForm {
    choice: Option<AmountChoice>,
    amount: String,
    email: String,
    notifier: Arc<dyn NotificationSink>,
    presenter: Arc<dyn FieldErrorPresenter>,
    service: Arc<dyn SubmissionService>,
}

impl DonationForm {
    pub fn new(notifier: Arc<dyn NotificationSink>,
               presenter: Arc<dyn FieldErrorPresenter>,
               service: Arc<dyn SubmissionService>)
               -> Self {
        Self { choice: None,
               amount: String::new(),
               email: String::new(),
               notifier,
               presenter,
               service }
    }

    /// Selecciona un importe predefinido; oculta la entrada libre.
    pub fn select_preset(&mut self, amount: &str) {
        self.choice = Some(AmountChoice::Preset(amount.to_string()));
        self.amount = amount.to_string();
    }

    /// Muestra la entrada libre. El importe vigente no cambia hasta que se
    /// escriba en ella.
    pub fn select_custom(&mut self) {
        self.choice = Some(AmountChoice::Custom);
    }

    pub fn input_custom_amount(&mut self, value: &str) {
        self.amount = value.to_string();
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn choice(&self) -> Option<&AmountChoice> {
        self.choice.as_ref()
    }

    pub fn custom_visible(&self) -> bool {
        self.choice == Some(AmountChoice::Custom)
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Valida importe y email, envía y notifica. Devuelve el importe donado.
    /// En éxito el formulario vuelve a su estado inicial.
    pub async fn submit(&mut self) -> Result<f64, DomainError> {
        let Some(amount) = parse_amount(&self.amount) else {
            self.notifier.notify(MSG_INVALID_AMOUNT, NotificationKind::Error);
            return Err(DomainError::InvalidAmount(self.amount.clone()));
        };
        self.presenter.clear(FIELD_EMAIL);
        if !is_valid_email(&self.email) {
            self.presenter.show(FIELD_EMAIL, MSG_INVALID_EMAIL);
            self.notifier.notify(MSG_CHECK_EMAIL, NotificationKind::Error);
            return Err(DomainError::InvalidEmail(self.email.clone()));
        }

        let fields: FieldMap = vec![(FIELD_AMOUNT, format!("{amount:.2}")), (FIELD_EMAIL, self.email.clone())].into_iter()
                                                                                                            .collect();
        let payload = SubmissionPayload::new(FORM_DONATION, fields);
        debug!("donation submitting {}", payload.fingerprint);
        match self.service.submit(payload).await {
            SubmissionOutcome::Accepted => {
                info!("donation of {amount:.2} accepted");
                self.notifier.notify(&donation_success_message(amount), NotificationKind::Success);
                self.reset();
                Ok(amount)
            }
            SubmissionOutcome::Failed { reason } => {
                warn!("donation submission failed: {reason}");
                self.notifier.notify(MSG_GENERIC_FAILURE, NotificationKind::Error);
                Err(DomainError::Submission(reason))
            }
        }
    }

    pub fn reset(&mut self) {
        self.choice = None;
        self.amount.clear();
        self.email.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_requires_positive_finite_numbers() {
        assert_eq!(parse_amount("250"), Some(250.0));
        assert_eq!(parse_amount(" 12.5 "), Some(12.5));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-10"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn success_message_uses_two_decimals() {
        assert_eq!(donation_success_message(100.0),
                   "Thank you for your donation of R100.00! This is a demo - no actual payment was processed.");
    }
}
