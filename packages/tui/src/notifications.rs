/// Number of ticks a notification stays on screen (about four seconds at the
/// default tick rate).
pub const NOTIFICATION_TICKS: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    remaining_ticks: u16,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            remaining_ticks: NOTIFICATION_TICKS,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Transient toast-style messages, newest last.
#[derive(Debug, Default, Clone)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Age every notification by one tick and drop the expired ones.
    pub fn tick(&mut self) {
        for item in &mut self.items {
            item.remaining_ticks = item.remaining_ticks.saturating_sub(1);
        }
        self.items.retain(|item| item.remaining_ticks > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
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
    fn test_notifications_expire_after_fixed_ticks() {
        let mut notifications = Notifications::default();
        notifications.push(Notification::success("Task created successfully"));

        for _ in 0..NOTIFICATION_TICKS - 1 {
            notifications.tick();
        }
        assert_eq!(notifications.len(), 1);

        notifications.tick();
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_newer_notifications_outlive_older_ones() {
        let mut notifications = Notifications::default();
        notifications.push(Notification::error("Failed to load tasks"));
        for _ in 0..4 {
            notifications.tick();
        }
        notifications.push(Notification::success("Task deleted successfully"));

        for _ in 0..NOTIFICATION_TICKS - 4 {
            notifications.tick();
        }

        let remaining: Vec<_> = notifications.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(remaining, vec!["Task deleted successfully"]);
        assert!(!notifications.latest().map(Notification::is_error).unwrap_or(true));
    }
}
