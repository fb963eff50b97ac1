use std::sync::Arc;

use haven_core::constants::{FIELD_EMAIL, MSG_GENERIC_FAILURE, MSG_INVALID_EMAIL};
use haven_core::{is_valid_email, FieldErrorPresenter, FieldMap, NotificationKind, NotificationSink, SubmissionOutcome, SubmissionPayload, SubmissionService};
use log::{info, warn};

use super::{FORM_NEWSLETTER, MSG_NEWSLETTER_SUCCESS};
use crate::errors::DomainError;

/// Suscripción al newsletter: un único campo de email.
pub struct NewsletterForm {
    email: String,
    notifier: Arc<dyn NotificationSink>,
    presenter: Arc<dyn FieldErrorPresenter>,
    service: Arc<dyn SubmissionService>,
}

impl NewsletterForm {
    pub fn new(notifier: Arc<dyn NotificationSink>,
               presenter: Arc<dyn FieldErrorPresenter>,
               service: Arc<dyn SubmissionService>)
               -> Self {
        Self { email: String::new(),
               notifier,
               presenter,
               service }
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Limpia el error previo, valida el email y envía.
    pub async fn submit(&mut self) -> Result<(), DomainError> {
        self.presenter.clear(FIELD_EMAIL);
        if !is_valid_email(&self.email) {
            self.presenter.show(FIELD_EMAIL, MSG_INVALID_EMAIL);
            self.notifier.notify(MSG_INVALID_EMAIL, NotificationKind::Error);
            return Err(DomainError::InvalidEmail(self.email.clone()));
        }

        let fields: FieldMap = std::iter::once((FIELD_EMAIL, self.email.clone())).collect();
        match self.service.submit(SubmissionPayload::new(FORM_NEWSLETTER, fields)).await {
            SubmissionOutcome::Accepted => {
                info!("newsletter subscription accepted");
                self.notifier.notify(MSG_NEWSLETTER_SUCCESS, NotificationKind::Success);
                self.email.clear();
                Ok(())
            }
            SubmissionOutcome::Failed { reason } => {
                warn!("newsletter submission failed: {reason}");
                self.notifier.notify(MSG_GENERIC_FAILURE, NotificationKind::Error);
                Err(DomainError::Submission(reason))
            }
        }
    }
}
