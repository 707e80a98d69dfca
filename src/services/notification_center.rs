use chrono::Utc;
use log::{error, info, warn};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::entity::{Notification, NotificationKind};

/// Holds the notification currently on screen. A newer notification
/// replaces the current one ("most recent wins"); there is no queue.
#[derive(Clone, Default)]
pub struct NotificationCenter {
    current: Arc<Mutex<Option<Notification>>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<Notification>> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Show `notification`, replacing whatever was shown before
    pub fn push(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!("[toast] {}", notification.message),
            NotificationKind::Warning => warn!("[toast] {}", notification.message),
            NotificationKind::Error => error!("[toast] {}", notification.message),
        }

        *self.slot() = Some(notification);
    }

    /// The notification still on screen, if its duration has not elapsed
    pub fn current(&self) -> Option<Notification> {
        let mut slot = self.slot();

        if slot
            .as_ref()
            .is_some_and(|notification| notification.is_expired_at(Utc::now()))
        {
            *slot = None;
        }

        slot.clone()
    }

    pub fn dismiss(&self) {
        *self.slot() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_most_recent_wins() {
        let center = NotificationCenter::new();

        center.push(Notification::error("Please enter a valid amount"));
        center.push(Notification::success("Swapped 10 ETH for 20000.000000 USDC"));

        let current = center.current().unwrap();
        assert_eq!(current.kind, NotificationKind::Success);
        assert_eq!(current.message, "Swapped 10 ETH for 20000.000000 USDC");
    }

    #[test]
    fn test_expired_notification_is_cleared() {
        let center = NotificationCenter::new();

        center.push(Notification::warning("Failed to load some token icons").with_duration(Duration::ZERO));

        assert!(center.current().is_none());
    }

    #[test]
    fn test_dismiss() {
        let center = NotificationCenter::new();
        center.push(Notification::error("Failed to load token prices"));

        center.dismiss();

        assert!(center.current().is_none());
    }

    #[test]
    fn test_default_duration() {
        let notification = Notification::success("done");

        assert_eq!(notification.duration, Duration::from_millis(3000));
        assert!(!notification.is_expired_at(notification.created_at));
    }
}
