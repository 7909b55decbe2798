use crate::seed::seed_notifications;
use chrono::{DateTime, Utc};
use printdesk_core::{NotificationKind, NotificationRecord};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPanel {
    pub show_notification_panel: bool,
    pub current_notification_id: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    notifications: Vec<NotificationRecord>,
    panel: NotificationPanel,
}

impl NotificationStore {
    pub fn new(notifications: Vec<NotificationRecord>) -> Self {
        Self {
            notifications,
            panel: NotificationPanel::default(),
        }
    }

    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(seed_notifications(now))
    }

    pub fn notifications(&self) -> &[NotificationRecord] {
        &self.notifications
    }

    pub fn unread_notifications(&self) -> Vec<&NotificationRecord> {
        self.notifications
            .iter()
            .filter(|notification| !notification.is_read)
            .collect()
    }

    pub fn notification_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|notification| !notification.is_read)
            .count()
    }

    pub fn notifications_by_type(&self) -> BTreeMap<NotificationKind, Vec<&NotificationRecord>> {
        let mut groups: BTreeMap<NotificationKind, Vec<&NotificationRecord>> = BTreeMap::new();
        for notification in &self.notifications {
            groups.entry(notification.kind).or_default().push(notification);
        }
        groups
    }

    pub fn mark_as_read(&mut self, id: u64) -> bool {
        let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|notification| notification.id == id)
        else {
            tracing::debug!(id, "mark read ignored: no such notification");
            return false;
        };
        notification.is_read = true;
        true
    }

    pub fn mark_all_as_read(&mut self) {
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
    }

    pub fn delete_notification(&mut self, id: u64) -> bool {
        let Some(index) = self
            .notifications
            .iter()
            .position(|notification| notification.id == id)
        else {
            tracing::debug!(id, "delete ignored: no such notification");
            return false;
        };
        self.notifications.remove(index);
        true
    }

    pub fn clear_all_notifications(&mut self) {
        self.notifications.clear();
    }

    pub fn panel(&self) -> NotificationPanel {
        self.panel
    }

    pub fn toggle_notification_panel(&mut self) -> bool {
        self.panel.show_notification_panel = !self.panel.show_notification_panel;
        self.panel.show_notification_panel
    }

    pub fn close_all_panels(&mut self) {
        self.panel.show_notification_panel = false;
        self.panel.current_notification_id = None;
    }

    /// Selecting an unread notification marks it read.
    pub fn set_current_notification(&mut self, id: Option<u64>) {
        self.panel.current_notification_id = id;
        if let Some(id) = id {
            let unread = self
                .notifications
                .iter()
                .any(|notification| notification.id == id && !notification.is_read);
            if unread {
                self.mark_as_read(id);
            }
        }
    }

    pub fn current_notification(&self) -> Option<&NotificationRecord> {
        let id = self.panel.current_notification_id?;
        self.notifications
            .iter()
            .find(|notification| notification.id == id)
    }

    /// Hook for pulling fresh notifications; the feed is static for now.
    pub fn refresh_notifications(&self) {
        tracing::debug!(
            total = self.notifications.len(),
            "refresh notification list requested"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> NotificationStore {
        NotificationStore::seeded(Utc::now())
    }

    #[test]
    fn count_matches_unread_view() {
        let mut store = store();
        assert_eq!(store.notification_count(), 7);
        assert_eq!(store.notification_count(), store.unread_notifications().len());

        store.mark_as_read(2);
        assert_eq!(store.notification_count(), 6);
        assert_eq!(store.notification_count(), store.unread_notifications().len());
    }

    #[test]
    fn groups_by_type_in_feed_order() {
        let store = store();
        let groups = store.notifications_by_type();

        let print: Vec<u64> = groups[&NotificationKind::Print]
            .iter()
            .map(|notification| notification.id)
            .collect();
        assert_eq!(print, vec![2, 7, 12]);
        assert_eq!(groups.len(), 5);
        assert_eq!(
            groups.values().map(Vec::len).sum::<usize>(),
            store.notifications().len()
        );
    }

    #[test]
    fn selecting_unread_marks_it_read() {
        let mut store = store();
        store.set_current_notification(Some(4));

        let current = store.current_notification().expect("notification selected");
        assert_eq!(current.id, 4);
        assert!(current.is_read);
    }

    #[test]
    fn selecting_none_clears_selection() {
        let mut store = store();
        store.set_current_notification(Some(3));
        let before = store.notifications().to_vec();

        store.set_current_notification(None);
        assert!(store.current_notification().is_none());
        assert_eq!(store.notifications(), before.as_slice());
    }

    #[test]
    fn close_all_panels_drops_selection() {
        let mut store = store();
        assert!(store.toggle_notification_panel());
        store.set_current_notification(Some(1));

        store.close_all_panels();
        assert_eq!(store.panel(), NotificationPanel::default());
    }

    #[test]
    fn delete_twice_is_a_no_op() {
        let mut store = store();
        assert!(store.delete_notification(5));
        let after_first = store.notifications().to_vec();

        assert!(!store.delete_notification(5));
        assert_eq!(store.notifications(), after_first.as_slice());
    }

    #[test]
    fn clear_and_refresh() {
        let mut store = store();
        store.refresh_notifications();
        assert_eq!(store.notifications().len(), 12);

        store.clear_all_notifications();
        assert!(store.notifications().is_empty());
        assert_eq!(store.notification_count(), 0);
        assert!(store.notifications_by_type().is_empty());
    }
}
