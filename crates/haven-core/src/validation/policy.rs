//! Política de validación por tipo de campo.
//!
//! Orden de precedencia (la primera regla aplicable gana):
//! 1. campo no obligatorio: siempre válido;
//! 2. `Email`: formato de email;
//! 3. `Tel`: formato de teléfono;
//! 4. cualquier otro tipo: no vacío tras `trim` (grupo: al menos una opción).
//!
//! Un email vacío informa por tanto "enter a valid email", no "required".

use super::predicates::{is_non_empty, is_valid_email, is_valid_phone};
use super::{FieldCheck, ValidationResult};
use crate::constants::{MSG_INVALID_EMAIL, MSG_INVALID_PHONE, MSG_REQUIRED};
use crate::model::{FieldMap, FieldValue};
use crate::step::{FieldKind, FieldSpec, StepDefinition};

pub fn check_field(spec: &FieldSpec, value: Option<&FieldValue>) -> FieldCheck {
    if !spec.required {
        return FieldCheck::ok();
    }
    let raw = value.map(FieldValue::display).unwrap_or_default();
    match spec.kind {
        FieldKind::Email if !is_valid_email(&raw) => FieldCheck::fail(MSG_INVALID_EMAIL),
        FieldKind::Tel if !is_valid_phone(&raw) => FieldCheck::fail(MSG_INVALID_PHONE),
        FieldKind::Email | FieldKind::Tel => FieldCheck::ok(),
        FieldKind::CheckboxGroup if value.map_or(true, FieldValue::is_blank) => FieldCheck::fail(MSG_REQUIRED),
        FieldKind::Text | FieldKind::Select if !is_non_empty(&raw) => FieldCheck::fail(MSG_REQUIRED),
        _ => FieldCheck::ok(),
    }
}

/// Valida todos los campos declarados del paso contra una instantánea de
/// `fields`. Todo o nada: no hay commits parciales por campo.
pub fn validate_step(step: &StepDefinition, fields: &FieldMap) -> ValidationResult {
    ValidationResult::from_checks(step.required_fields
                                      .iter()
                                      .map(|spec| (spec.key.clone(), check_field(spec, fields.get(&spec.key)))))
}

/// Chequeo al perder el foco: sólo email y teléfono, y sólo si hay contenido.
/// Devuelve el mensaje de error a mostrar, si corresponde.
pub fn check_on_blur(kind: FieldKind, value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    match kind {
        FieldKind::Email if !is_valid_email(value) => Some(MSG_INVALID_EMAIL),
        FieldKind::Tel if !is_valid_phone(value) => Some(MSG_INVALID_PHONE),
        _ => None,
    }
}
