use serde::Serialize;
use std::time::Duration;

/// A navigation the console has scheduled; `delay` is honoured by whoever renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingRedirect {
    pub location: String,
    pub delay: Duration,
}

impl PendingRedirect {
    pub fn delay_secs(&self) -> u64 {
        // meta refresh only takes whole seconds; round up so the alert stays readable
        (self.delay.as_millis() as u64).div_ceil(1000)
    }
}
