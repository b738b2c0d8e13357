use chrono::NaiveDate;
use hr_portal::portal::{Notification, NotificationSink};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Sink used by the running server: outcomes become structured log lines.
#[derive(Default, Clone)]
pub(crate) struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, event: Notification) {
        info!(
            kind = event.kind.label(),
            subject = %event.subject_id,
            "{}",
            event.message
        );
    }
}

/// Sink used by the CLI demo so emitted toasts can be replayed afterwards.
#[derive(Default, Clone)]
pub(crate) struct RecordingNotificationSink {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotificationSink {
    pub(crate) fn events(&self) -> Vec<Notification> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, event: Notification) {
        self.events.lock().expect("sink mutex poisoned").push(event);
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
