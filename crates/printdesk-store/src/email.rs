use crate::seed::seed_emails;
use crate::settings::{SettingValue, Settings, SettingsCategory, SettingsPatch};
use chrono::{DateTime, Utc};
use printdesk_core::{EmailRecord, EmailStatus};
use serde::Serialize;
use std::collections::BTreeMap;

/// Panel flags and selection rendered by the header.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderPanels {
    pub show_email_panel: bool,
    pub show_settings_panel: bool,
    pub current_email_id: Option<u64>,
}

/// Header state: the mailbox, its panels, and the user's settings.
#[derive(Debug, Clone, Default)]
pub struct EmailStore {
    emails: Vec<EmailRecord>,
    settings: Settings,
    panels: HeaderPanels,
}

impl EmailStore {
    pub fn new(emails: Vec<EmailRecord>) -> Self {
        Self {
            emails,
            ..Self::default()
        }
    }

    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(seed_emails(now))
    }

    pub fn emails(&self) -> &[EmailRecord] {
        &self.emails
    }

    pub fn unread_emails(&self) -> Vec<&EmailRecord> {
        self.emails
            .iter()
            .filter(|email| email.is_unread_in_inbox())
            .collect()
    }

    pub fn email_count(&self) -> usize {
        self.emails
            .iter()
            .filter(|email| email.is_unread_in_inbox())
            .count()
    }

    /// Groups by status, keeping mailbox order inside each group. Statuses
    /// without any email are absent.
    pub fn emails_by_status(&self) -> BTreeMap<EmailStatus, Vec<&EmailRecord>> {
        let mut groups: BTreeMap<EmailStatus, Vec<&EmailRecord>> = BTreeMap::new();
        for email in &self.emails {
            groups.entry(email.status).or_default().push(email);
        }
        groups
    }

    pub fn mark_email_as_read(&mut self, id: u64) -> bool {
        let Some(email) = self.find_mut(id) else {
            tracing::debug!(id, "mark read ignored: no such email");
            return false;
        };
        email.is_read = true;
        true
    }

    pub fn mark_all_emails_as_read(&mut self) {
        for email in &mut self.emails {
            email.is_read = true;
        }
    }

    pub fn delete_email(&mut self, id: u64) -> bool {
        let Some(index) = self.emails.iter().position(|email| email.id == id) else {
            tracing::debug!(id, "delete ignored: no such email");
            return false;
        };
        self.emails.remove(index);
        true
    }

    pub fn move_email_to_trash(&mut self, id: u64) -> bool {
        let Some(email) = self.find_mut(id) else {
            tracing::debug!(id, "trash ignored: no such email");
            return false;
        };
        email.status = EmailStatus::Trash;
        true
    }

    pub fn panels(&self) -> HeaderPanels {
        self.panels
    }

    pub fn toggle_email_panel(&mut self) -> bool {
        self.panels.show_email_panel = !self.panels.show_email_panel;
        self.panels.show_email_panel
    }

    pub fn toggle_settings_panel(&mut self) -> bool {
        self.panels.show_settings_panel = !self.panels.show_settings_panel;
        self.panels.show_settings_panel
    }

    /// The id is kept even if no email carries it; [`Self::current_email`]
    /// then resolves to `None`.
    pub fn set_current_email(&mut self, id: Option<u64>) {
        self.panels.current_email_id = id;
    }

    pub fn current_email(&self) -> Option<&EmailRecord> {
        let id = self.panels.current_email_id?;
        self.emails.iter().find(|email| email.id == id)
    }

    /// Leaves the current selection alone.
    pub fn close_all_panels(&mut self) {
        self.panels.show_email_panel = false;
        self.panels.show_settings_panel = false;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn save_setting(
        &mut self,
        category: SettingsCategory,
        key: &str,
        value: SettingValue,
    ) -> bool {
        let applied = self.settings.set(category, key, value);
        if !applied {
            tracing::debug!(%category, key, "setting ignored: unknown key or wrong value kind");
        }
        applied
    }

    pub fn save_all_settings(&mut self, patch: SettingsPatch) {
        self.settings.merge(patch);
    }

    pub fn reset_settings(&mut self, category: SettingsCategory) {
        self.settings.reset(category);
    }

    pub fn get_setting(&self, category: SettingsCategory, key: &str) -> Option<SettingValue> {
        self.settings.get(category, key)
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut EmailRecord> {
        self.emails.iter_mut().find(|email| email.id == id)
    }
}
