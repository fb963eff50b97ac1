use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resultado de validar un campo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub valid: bool,
    pub message: Option<String>,
}

impl FieldCheck {
    pub fn ok() -> Self {
        Self { valid: true,
               message: None }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self { valid: false,
               message: Some(message.into()) }
    }
}

/// Validación de un paso completo. `overall_valid` es el AND de todos los
/// `per_field.valid`; el orden de `per_field` es el de la definición del paso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub per_field: IndexMap<String, FieldCheck>,
    pub overall_valid: bool,
}

impl ValidationResult {
    pub fn from_checks(checks: impl IntoIterator<Item = (String, FieldCheck)>) -> Self {
        let per_field: IndexMap<String, FieldCheck> = checks.into_iter().collect();
        let overall_valid = per_field.values().all(|c| c.valid);
        Self { per_field,
               overall_valid }
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.per_field
            .iter()
            .filter(|(_, c)| !c.valid)
            .map(|(k, c)| (k.as_str(), c.message.as_deref().unwrap_or_default()))
    }

    pub fn invalid_count(&self) -> usize {
        self.per_field.values().filter(|c| !c.valid).count()
    }

    pub fn message_for(&self, key: &str) -> Option<&str> {
        self.per_field.get(key).and_then(|c| c.message.as_deref())
    }
}
