use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::*;
use crate::errors::WizardError;
use crate::hashing::hash_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    CheckboxGroup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(key: impl Into<String>, kind: FieldKind) -> Self {
        Self { key: key.into(),
               kind,
               required: true }
    }

    pub fn optional(key: impl Into<String>, kind: FieldKind) -> Self {
        Self { key: key.into(),
               kind,
               required: false }
    }
}

/// Un paso del asistente. Inmutable una vez construido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub step_number: usize,
    pub required_fields: Vec<FieldSpec>,
}

impl StepDefinition {
    pub fn new(step_number: usize, required_fields: Vec<FieldSpec>) -> Self {
        Self { step_number,
               required_fields }
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.required_fields.iter().find(|f| f.key == key)
    }
}

/// Mensajes agregados que el controlador envía al `NotificationSink`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardMessages {
    pub step_invalid: String,
    pub success: String,
    pub failure: String,
}

impl Default for WizardMessages {
    fn default() -> Self {
        Self { step_invalid: MSG_STEP_INVALID.to_string(),
               success: MSG_VOLUNTEER_SUCCESS.to_string(),
               failure: MSG_VOLUNTEER_FAILURE.to_string() }
    }
}

/// Definición completa del asistente: pasos ordenados `1..=N`, mensajes y un
/// hash estable de la estructura (pasos + campos).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardDefinition {
    name: String,
    steps: Vec<StepDefinition>,
    messages: WizardMessages,
    definition_hash: String,
}

impl WizardDefinition {
    /// Valida que haya al menos un paso y que `step_number` sea `1..=N` en
    /// orden.
    pub fn new(name: impl Into<String>, steps: Vec<StepDefinition>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::EmptyDefinition);
        }
        if let Some(bad) = steps.iter().enumerate().find(|(i, s)| s.step_number != i + 1) {
            return Err(WizardError::InvalidStepIndex(bad.1.step_number));
        }
        Ok(Self::from_parts(name.into(), steps))
    }

    fn from_parts(name: String, steps: Vec<StepDefinition>) -> Self {
        let definition_hash = hash_value(&json!({ "name": name, "steps": steps }));
        Self { name,
               steps,
               messages: WizardMessages::default(),
               definition_hash }
    }

    /// Asistente de voluntariado de tres pasos: datos personales, rol y
    /// disponibilidad, revisión.
    pub fn volunteer() -> Self {
        use FieldKind::*;
        let steps = vec![StepDefinition::new(1,
                                             vec![FieldSpec::required(FIELD_FIRST_NAME, Text),
                                                  FieldSpec::required(FIELD_LAST_NAME, Text),
                                                  FieldSpec::required(FIELD_EMAIL, Email),
                                                  FieldSpec::optional(FIELD_PHONE, Tel),]),
                         StepDefinition::new(2,
                                             vec![FieldSpec::required(FIELD_ROLE, Select),
                                                  FieldSpec::optional(FIELD_AVAILABILITY, CheckboxGroup),
                                                  FieldSpec::optional(FIELD_EXPERIENCE, Text),]),
                         StepDefinition::new(3, vec![]),];
        Self::from_parts("volunteer".to_string(), steps)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn messages(&self) -> &WizardMessages {
        &self.messages
    }

    pub fn definition_hash(&self) -> &str {
        &self.definition_hash
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn step(&self, step_number: usize) -> Result<&StepDefinition, WizardError> {
        step_number.checked_sub(1)
                   .and_then(|i| self.steps.get(i))
                   .ok_or(WizardError::InvalidStepIndex(step_number))
    }

    /// Busca la especificación de un campo en cualquier paso.
    pub fn field_spec(&self, key: &str) -> Option<&FieldSpec> {
        self.steps.iter().find_map(|s| s.field(key))
    }
}
