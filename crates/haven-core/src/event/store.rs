use std::collections::HashMap;
use chrono::Utc;
use uuid::Uuid;

use super::{WizardEvent, WizardEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, session_id: Uuid, kind: WizardEventKind) -> WizardEvent;
    /// Lista eventos de una sesión (orden ascendente por seq).
    fn list(&self, session_id: Uuid) -> Vec<WizardEvent>;
    /// Nombres de los eventos de una sesión, en orden.
    fn kinds(&self, session_id: Uuid) -> Vec<&'static str> {
        self.list(session_id).iter().map(|e| e.kind.name()).collect()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    pub inner: HashMap<Uuid, Vec<WizardEvent>>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, session_id: Uuid, kind: WizardEventKind) -> WizardEvent {
        let vec = self.inner.entry(session_id).or_default();
        let seq = vec.len() as u64;
        let ev = WizardEvent { seq, session_id, kind, ts: Utc::now() };
        vec.push(ev.clone());
        ev
    }

    fn list(&self, session_id: Uuid) -> Vec<WizardEvent> {
        self.inner.get(&session_id).cloned().unwrap_or_default()
    }

    fn kinds(&self, session_id: Uuid) -> Vec<&'static str> {
        self.inner
            .get(&session_id)
            .map(|events| events.iter().map(|e| e.kind.name()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_per_session() {
        let mut store = InMemoryEventStore::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(store.append_kind(a, WizardEventKind::WizardReset).seq, 0);
        assert_eq!(store.append_kind(a, WizardEventKind::WizardReset).seq, 1);
        assert_eq!(store.append_kind(b, WizardEventKind::WizardReset).seq, 0);
        assert_eq!(store.list(a).len(), 2);
        assert!(store.list(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn kinds_follow_append_order() {
        let mut store = InMemoryEventStore::default();
        let a = Uuid::new_v4();
        store.append_kind(a, WizardEventKind::StepAdvanced { from: 1, to: 2 });
        store.append_kind(a, WizardEventKind::WizardReset);
        assert_eq!(store.kinds(a), vec!["StepAdvanced", "WizardReset"]);
        assert!(store.kinds(Uuid::new_v4()).is_empty());
    }
}
