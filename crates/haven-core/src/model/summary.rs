use serde::{Deserialize, Serialize};

use super::FieldMap;
use crate::constants::{FIELD_AVAILABILITY, FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_ROLE, NOT_SPECIFIED};

/// Vista de sólo lectura de los datos recogidos, mostrada en el último paso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub availability: String,
}

/// Proyección pura de `fields`. La disponibilidad respeta el orden en que se
/// marcaron las opciones; sin opciones se muestra "Not specified".
pub fn project_summary(fields: &FieldMap) -> SummaryView {
    let first = fields.display(FIELD_FIRST_NAME);
    let last = fields.display(FIELD_LAST_NAME);
    let availability = fields.display(FIELD_AVAILABILITY);

    SummaryView { full_name: format!("{first} {last}").trim().to_string(),
                  email: fields.display(FIELD_EMAIL),
                  role: fields.display(FIELD_ROLE),
                  availability: if availability.is_empty() { NOT_SPECIFIED.to_string() } else { availability } }
}
