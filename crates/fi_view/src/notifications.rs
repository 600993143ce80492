#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Tech,
    Business,
    System,
    Security,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    pub time: String,
    pub read: bool,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::seeded()
    }
}

impl NotificationCenter {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn seeded() -> Self {
        let seed = [
            (1, "New AI model 'GPT-5' released", "2 min ago", false, NotificationKind::Tech),
            (2, "Market alert: Tech stocks up 5%", "1 hour ago", false, NotificationKind::Business),
            (3, "Your weekly digest is ready", "5 hours ago", true, NotificationKind::System),
            (4, "Security alert: New login from Chrome", "1 day ago", true, NotificationKind::Security),
            (5, "Welcome to FlipItNews Advanced!", "2 days ago", true, NotificationKind::System),
        ];
        Self::new(
            seed.into_iter()
                .map(|(id, text, time, read, kind)| Notification {
                    id,
                    text: text.to_string(),
                    time: time.to_string(),
                    read,
                    kind,
                })
                .collect(),
        )
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    /// Newest `limit` entries, as shown in the navigation bar menu.
    pub fn preview(&self, limit: usize) -> &[Notification] {
        &self.notifications[..limit.min(self.notifications.len())]
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_tracking() {
        let mut center = NotificationCenter::seeded();
        assert_eq!(center.all().len(), 5);
        assert_eq!(center.unread_count(), 2);

        assert!(center.mark_read(1));
        assert_eq!(center.unread_count(), 1);
        assert!(!center.mark_read(99));

        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn test_preview() {
        let center = NotificationCenter::seeded();
        let ids: Vec<u32> = center.preview(3).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(center.preview(10).len(), 5);
    }
}
