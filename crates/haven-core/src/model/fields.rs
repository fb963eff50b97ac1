//! Valores de campo y mapa ordenado de campos del asistente.
//!
//! `FieldMap` conserva el orden de inserción (`IndexMap`) para que el payload
//! y el resumen sean estables entre llamadas. Los grupos de checkboxes se
//! guardan como `IndexSet`: el orden es el orden en que se marcaron.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::MULTI_VALUE_SEPARATOR;
use crate::step::FieldKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Multi(IndexSet<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn multi<I, S>(values: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        FieldValue::Multi(values.into_iter().map(Into::into).collect())
    }

    /// Representación para mostrar: texto tal cual, o las opciones marcadas
    /// unidas por `", "`.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Multi(set) => set.iter().map(String::as_str).collect::<Vec<_>>().join(MULTI_VALUE_SEPARATOR),
        }
    }

    /// Vacío tras `trim` (texto) o sin opciones marcadas (grupo).
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Multi(set) => set.is_empty(),
        }
    }

    /// Ajusta la forma del valor al tipo declarado del campo.
    pub fn coerce(self, kind: FieldKind) -> Self {
        match (kind, self) {
            (FieldKind::CheckboxGroup, FieldValue::Text(s)) => {
                if s.trim().is_empty() {
                    FieldValue::Multi(IndexSet::new())
                } else {
                    FieldValue::multi([s])
                }
            }
            (FieldKind::CheckboxGroup, multi @ FieldValue::Multi(_)) => multi,
            (_, multi @ FieldValue::Multi(_)) => FieldValue::Text(multi.display()),
            (_, text) => text,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Multi(set) => Value::Array(set.iter().cloned().map(Value::String).collect()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::multi(values)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::multi(values)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    inner: IndexMap<String, FieldValue>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert idempotente. Devuelve `true` si el mapa cambió.
    pub fn upsert(&mut self, key: impl Into<String>, value: FieldValue) -> bool {
        let key = key.into();
        if self.inner.get(&key) == Some(&value) {
            return false;
        }
        self.inner.insert(key, value);
        true
    }

    /// Marca o desmarca una opción de un grupo de checkboxes. Las opciones
    /// nuevas se agregan al final; un valor de texto previo se convierte en
    /// grupo. Devuelve `true` si el valor guardado cambió.
    pub fn set_option(&mut self, key: &str, option: &str, checked: bool) -> bool {
        let before = self.inner.get(key).cloned();
        if before.is_none() && !checked {
            return false;
        }
        let mut set = match before.clone().map(|v| v.coerce(FieldKind::CheckboxGroup)) {
            Some(FieldValue::Multi(set)) => set,
            _ => IndexSet::new(),
        };
        if checked {
            set.insert(option.to_string());
        } else {
            set.shift_remove(option);
        }
        let after = FieldValue::Multi(set);
        if before.as_ref() == Some(&after) {
            return false;
        }
        self.inner.insert(key.to_string(), after);
        true
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.inner.get(key)
    }

    /// Valor de muestra del campo; cadena vacía si no existe.
    pub fn display(&self, key: &str) -> String {
        self.inner.get(key).map(FieldValue::display).unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.inner.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.upsert(k, v.into());
        }
        map
    }
}
