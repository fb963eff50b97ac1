//! Formularios de un solo paso que comparten validadores y puertos con el
//! asistente de voluntariado: donación y suscripción al newsletter.

pub mod donation;
pub mod newsletter;

pub use donation::{parse_amount, AmountChoice, DonationForm};
pub use newsletter::NewsletterForm;

pub const FORM_DONATION: &str = "donation";
pub const FORM_NEWSLETTER: &str = "newsletter";
pub const FIELD_AMOUNT: &str = "amount";

pub const MSG_INVALID_AMOUNT: &str = "Please select or enter a valid donation amount";
pub const MSG_CHECK_EMAIL: &str = "Please check your email address";
pub const MSG_NEWSLETTER_SUCCESS: &str = "Thank you for subscribing to our newsletter!";

pub fn donation_success_message(amount: f64) -> String {
    format!("Thank you for your donation of R{amount:.2}! This is a demo - no actual payment was processed.")
}
