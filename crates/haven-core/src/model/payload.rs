use serde::{Deserialize, Serialize};
use serde_json::json;

use super::FieldMap;
use crate::constants::PAYLOAD_SCHEMA_VERSION;
use crate::hashing::hash_value;

/// Datos entregados al `SubmissionService`. El `fingerprint` es el hash del
/// JSON canónico de `form` + `fields` + versión de esquema, de modo que dos
/// envíos con los mismos datos producen el mismo fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub form: String,
    pub fields: FieldMap,
    pub fingerprint: String,
}

impl SubmissionPayload {
    pub fn new(form: impl Into<String>, fields: FieldMap) -> Self {
        let form = form.into();
        let fingerprint = hash_value(&json!({
            "form": form,
            "schema_version": PAYLOAD_SCHEMA_VERSION,
            "fields": fields.to_json(),
        }));
        Self { form, fields, fingerprint }
    }
}
