use std::sync::Mutex;

use haven_core::FieldErrorPresenter;
use indexmap::IndexMap;
use log::debug;

/// Errores de campo visibles, en el orden en que se mostraron.
#[derive(Debug, Default)]
pub struct InMemoryFieldErrors {
    visible: Mutex<IndexMap<String, String>>,
}

impl InMemoryFieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_for(&self, field_key: &str) -> Option<String> {
        self.visible.lock().ok().and_then(|v| v.get(field_key).cloned())
    }

    pub fn visible(&self) -> Vec<(String, String)> {
        self.visible
            .lock()
            .map(|v| v.iter().map(|(k, m)| (k.clone(), m.clone())).collect())
            .unwrap_or_default()
    }

    pub fn is_clear(&self) -> bool {
        self.visible().is_empty()
    }
}

impl FieldErrorPresenter for InMemoryFieldErrors {
    fn show(&self, field_key: &str, message: &str) {
        debug!("[field-error] {field_key}: {message}");
        if let Ok(mut v) = self.visible.lock() {
            v.insert(field_key.to_string(), message.to_string());
        }
    }

    fn clear(&self, field_key: &str) {
        if let Ok(mut v) = self.visible.lock() {
            v.shift_remove(field_key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_and_clear_removes() {
        let errors = InMemoryFieldErrors::new();
        errors.show("email", "one");
        errors.show("email", "two");
        errors.show("lastName", "req");
        assert_eq!(errors.message_for("email").as_deref(), Some("two"));
        errors.clear("email");
        assert_eq!(errors.visible(), vec![("lastName".to_string(), "req".to_string())]);
        errors.clear("missing");
        errors.clear("lastName");
        assert!(errors.is_clear());
    }
}
