use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use haven_core::{SubmissionOutcome, SubmissionPayload, SubmissionService};
use log::info;

/// Envío sin red: espera `delay` y acepta, o falla con `reason` si se
/// configuró así. Cuenta las llamadas y guarda los payloads recibidos.
#[derive(Debug)]
pub struct SimulatedSubmissionService {
    delay: Duration,
    fail_with: Option<String>,
    calls: AtomicUsize,
    received: Mutex<Vec<SubmissionPayload>>,
}

impl SimulatedSubmissionService {
    pub fn new(delay: Duration) -> Self {
        Self { delay,
               fail_with: None,
               calls: AtomicUsize::new(0),
               received: Mutex::new(Vec::new()) }
    }

    /// Sin latencia; útil en tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.fail_with = Some(reason.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<SubmissionPayload> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SubmissionService for SimulatedSubmissionService {
    async fn submit(&self, payload: SubmissionPayload) -> SubmissionOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        info!("[submit] form={} fingerprint={} fields={}", payload.form, payload.fingerprint, payload.fields.len());
        if let Ok(mut received) = self.received.lock() {
            received.push(payload);
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.fail_with {
            Some(reason) => SubmissionOutcome::Failed { reason: reason.clone() },
            None => SubmissionOutcome::Accepted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::FieldMap;

    #[tokio::test]
    async fn accepts_and_counts() {
        let svc = SimulatedSubmissionService::instant();
        let out = svc.submit(SubmissionPayload::new("newsletter", FieldMap::new())).await;
        assert_eq!(out, SubmissionOutcome::Accepted);
        assert_eq!(svc.calls(), 1);
        assert_eq!(svc.received()[0].form, "newsletter");
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_configured_delay() {
        let svc = SimulatedSubmissionService::new(Duration::from_millis(1500)).failing("offline");
        let start = tokio::time::Instant::now();
        let out = svc.submit(SubmissionPayload::new("volunteer", FieldMap::new())).await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(out, SubmissionOutcome::Failed { reason: "offline".into() });
    }
}
