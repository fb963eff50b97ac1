use std::sync::Mutex;

use haven_core::{NotificationKind, NotificationSink};
use log::{error, info};

/// Notificaciones como registros de log (la "toast" de la consola).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Success => info!("[notify][success] {message}"),
            NotificationKind::Info => info!("[notify][info] {message}"),
            NotificationKind::Error => error!("[notify][error] {message}"),
        }
    }
}

/// Guarda cada notificación en orden de llegada.
#[derive(Debug, Default)]
pub struct RecordingNotificationSink {
    entries: Mutex<Vec<(String, NotificationKind)>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(String, NotificationKind)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<(String, NotificationKind)> {
        self.entries().pop()
    }

    pub fn count_of(&self, kind: NotificationKind) -> usize {
        self.entries().iter().filter(|(_, k)| *k == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, message: &str, kind: NotificationKind) {
        // Un mutex envenenado no debe propagar pánico al controlador.
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((message.to_string(), kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let sink = RecordingNotificationSink::new();
        sink.notify("first", NotificationKind::Info);
        sink.notify("second", NotificationKind::Error);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.last(), Some(("second".to_string(), NotificationKind::Error)));
        assert_eq!(sink.count_of(NotificationKind::Error), 1);
    }

    #[test]
    fn log_sink_accepts_every_kind() {
        let sink = LogNotificationSink;
        sink.notify("ok", NotificationKind::Success);
        sink.notify("fyi", NotificationKind::Info);
        sink.notify("bad", NotificationKind::Error);
    }
}
