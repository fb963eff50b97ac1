//! Constantes del núcleo del asistente.
//!
//! Agrupa las claves de campo del formulario de voluntariado, los mensajes
//! visibles para el usuario y la versión de esquema del payload. La versión
//! participa en el fingerprint de cada envío: cambiarla invalida los
//! fingerprints previos aunque los campos no cambien.

/// Versión lógica del payload de envío. Entra en el hash del payload.
pub const PAYLOAD_SCHEMA_VERSION: u32 = 1;

/// Separador usado para mostrar grupos de checkboxes.
pub const MULTI_VALUE_SEPARATOR: &str = ", ";

/// Texto del resumen cuando no se marcó disponibilidad.
pub const NOT_SPECIFIED: &str = "Not specified";

// Claves de campo del formulario de voluntariado.
pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_ROLE: &str = "role";
pub const FIELD_AVAILABILITY: &str = "availability";
pub const FIELD_EXPERIENCE: &str = "experience";

// Mensajes por campo.
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_INVALID_PHONE: &str = "Please enter a valid phone number";
pub const MSG_REQUIRED: &str = "This field is required";

// Mensajes agregados del asistente de voluntariado.
pub const MSG_STEP_INVALID: &str = "Please fill in all required fields correctly";
pub const MSG_VOLUNTEER_SUCCESS: &str = "Thank you for your volunteer application! We will contact you soon.";
pub const MSG_VOLUNTEER_FAILURE: &str = "An error occurred submitting your application. Please try again.";

/// Mensaje genérico para fallos inesperados capturados en la frontera de UI.
pub const MSG_GENERIC_FAILURE: &str = "An error occurred. Please try again later.";
