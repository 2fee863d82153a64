//! Transient notifications

use std::time::{Duration, Instant};

/// Default display time for notifications
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn expires_at(&self) -> Instant {
        self.created + self.duration
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

/// Stack of visible notifications, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
    default_duration: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_DURATION)
    }
}

impl Notifications {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            default_duration,
        }
    }

    /// Add a notification with the default duration, returning its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.push_for(message, severity, self.default_duration)
    }

    pub fn push_for(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            created: Instant::now(),
            duration,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, Severity::Success)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, Severity::Error)
    }

    /// Dismiss one notification early. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop every notification that has expired at `now`.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        before - self.items.len()
    }

    pub fn newest(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_stacks_additively() {
        let mut notes = Notifications::default();
        let a = notes.success("Ticket created");
        let b = notes.error("Failed to delete ticket");
        assert_ne!(a, b);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes.newest().unwrap().message, "Failed to delete ticket");
        assert_eq!(notes.newest().unwrap().duration, Duration::from_millis(4000));
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut notes = Notifications::default();
        let a = notes.push("one", Severity::Info);
        let b = notes.push("two", Severity::Info);

        assert!(notes.dismiss(a));
        assert!(!notes.dismiss(a));
        assert_eq!(notes.newest().unwrap().message, "two");
        assert!(notes.dismiss(b));
        assert!(notes.is_empty());
    }

    #[test]
    fn test_prune_removes_only_expired() {
        let mut notes = Notifications::new(Duration::from_millis(100));
        notes.push("short", Severity::Info);
        notes.push_for("long", Severity::Info, Duration::from_secs(60));

        let later = Instant::now() + Duration::from_secs(1);
        assert_eq!(notes.prune(later), 1);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.newest().unwrap().message, "long");
    }

    #[test]
    fn test_ids_keep_increasing_after_dismiss() {
        let mut notes = Notifications::default();
        let a = notes.push("a", Severity::Info);
        notes.dismiss(a);
        let b = notes.push("b", Severity::Info);
        assert!(b > a);
    }
}
