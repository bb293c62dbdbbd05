use crate::domain::model::{GestureLabel, Landmark, ReportPayload};
use crate::domain::ports::Transport;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Best-effort delivery of classified frames.
///
/// Every report runs on its own detached task. Failures are logged and dropped,
/// nothing is retried, and reports may land out of frame order.
#[derive(Clone)]
pub struct Reporter {
    transport: Arc<dyn Transport>,
    in_flight: Arc<AtomicUsize>,
}

impl Reporter {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Spawns the send and returns immediately. The handle may be dropped.
    pub fn report(&self, label: GestureLabel, landmarks: &[Landmark]) -> JoinHandle<()> {
        let payload = ReportPayload {
            label,
            landmarks: landmarks.to_vec(),
        };
        let transport = Arc::clone(&self.transport);
        let in_flight = Arc::clone(&self.in_flight);

        let guard = InFlightGuard::enter(in_flight);
        tokio::spawn(async move {
            let _guard = guard;
            match transport.send(&payload).await {
                Ok(()) => tracing::debug!("📤 Reported gesture '{}'", payload.label),
                Err(e) => tracing::warn!("⚠️ Failed to report gesture '{}': {}", payload.label, e),
            }
        })
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// 關閉前給未完成的回報一段寬限時間，逾時即放棄
    pub async fn wait_idle(&self, timeout: Duration) -> bool {
        let poll = Duration::from_millis(10);
        let deadline = tokio::time::Instant::now() + timeout;

        while self.in_flight() > 0 {
            if tokio::time::Instant::now() >= deadline {
                tracing::warn!("⏱️ Abandoning {} pending report(s)", self.in_flight());
                return false;
            }
            tokio::time::sleep(poll).await;
        }
        true
    }
}

/// Counts a report as in flight until dropped, including when the send panics.
struct InFlightGuard(Arc<AtomicUsize>);

impl InFlightGuard {
    fn enter(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{RelayError, Result};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<ReportPayload>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, payload: &ReportPayload) -> Result<()> {
            self.sent.lock().unwrap().push(payload.clone());
            Ok(())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn send(&self, _payload: &ReportPayload) -> Result<()> {
            Err(RelayError::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    struct StalledTransport;

    #[async_trait]
    impl Transport for StalledTransport {
        async fn send(&self, _payload: &ReportPayload) -> Result<()> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }
    }

    struct PanickingTransport;

    #[async_trait]
    impl Transport for PanickingTransport {
        async fn send(&self, _payload: &ReportPayload) -> Result<()> {
            panic!("transport blew up");
        }
    }

    #[tokio::test]
    async fn test_panicking_transport_releases_in_flight_slot() {
        let reporter = Reporter::new(Arc::new(PanickingTransport));
        let handle = reporter.report(GestureLabel::Point, &[]);

        assert!(handle.await.unwrap_err().is_panic());
        assert_eq!(reporter.in_flight(), 0);
        assert!(reporter.wait_idle(Duration::from_millis(50)).await);
    }

    #[tokio::test]
    async fn test_report_sends_payload_verbatim() {
        let transport = Arc::new(RecordingTransport::default());
        let reporter = Reporter::new(transport.clone());
        let landmarks = vec![Landmark::new(0.1, 0.2, 0.3); 21];

        reporter
            .report(GestureLabel::OpenHand, &landmarks)
            .await
            .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].label, GestureLabel::OpenHand);
        assert_eq!(sent[0].landmarks, landmarks);
        assert_eq!(reporter.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_is_swallowed() {
        let reporter = Reporter::new(Arc::new(FailingTransport));
        let handle = reporter.report(GestureLabel::Point, &[]);

        // 任務本身不應 panic
        assert!(handle.await.is_ok());
        assert!(reporter.wait_idle(Duration::from_millis(100)).await);
    }

    #[tokio::test]
    async fn test_wait_idle_gives_up_after_timeout() {
        let reporter = Reporter::new(Arc::new(StalledTransport));
        let _handle = reporter.report(GestureLabel::Point, &[]);

        assert_eq!(reporter.in_flight(), 1);
        assert!(!reporter.wait_idle(Duration::from_millis(50)).await);
    }
}
