use chrono::{DateTime, Duration, Utc};

use crate::config::ALERT_TTL_SECS;
use crate::models::Alert;

/// Transient alerts waiting to be shown. Each one stays visible for five seconds.
#[derive(Debug, Default, Clone)]
pub struct AlertQueue {
    alerts: Vec<Alert>,
}

impl AlertQueue {
    pub fn push(&mut self, alert: Alert) {
        tracing::debug!(kind = alert.kind.as_str(), message = %alert.message, "Alert raised");
        self.alerts.push(alert);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Alert::success(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Alert::error(message));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Drain the queue, keeping only alerts still inside their display window at `now`.
    pub fn take_visible(&mut self, now: DateTime<Utc>) -> Vec<Alert> {
        let ttl = Duration::seconds(ALERT_TTL_SECS);
        std::mem::take(&mut self.alerts)
            .into_iter()
            .filter(|a| a.is_visible_at(now, ttl))
            .collect()
    }
}
