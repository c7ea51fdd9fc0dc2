//! Transient alert shown above the form

use std::time::{Duration, Instant};

/// How long the draft confirmation stays visible
pub const DRAFT_ALERT_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub severity: Severity,
    /// Cleared by the first tick at or after this instant
    pub expires_at: Option<Instant>,
}

impl Alert {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            expires_at: None,
        }
    }

    pub fn expiring(mut self, at: Instant) -> Self {
        self.expires_at = Some(at);
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistent_alert_never_expires() {
        let alert = Alert::new("hi", Severity::Warning);
        assert!(!alert.is_expired(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn test_expiring_alert() {
        let start = Instant::now();
        let alert = Alert::new("saved", Severity::Warning).expiring(start + DRAFT_ALERT_DURATION);
        assert!(!alert.is_expired(start));
        assert!(alert.is_expired(start + DRAFT_ALERT_DURATION));
    }
}
