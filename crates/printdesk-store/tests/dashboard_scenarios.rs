use chrono::{TimeZone, Utc};
use printdesk_core::{EmailRecord, EmailStatus, NavigationState, Page, Priority};
use printdesk_store::{
    EmailStore, NavigationStore, NotificationStore, PersonalSettings, SettingValue,
    SettingsCategory, SettingsPatch, SystemPatch, SystemSettings,
};

fn email(id: u64, is_read: bool, status: EmailStatus) -> EmailRecord {
    EmailRecord {
        id,
        from: format!("sender{id}@company.com"),
        from_name: format!("Sender {id}"),
        to: "user@company.com".to_string(),
        subject: format!("Subject {id}"),
        content: String::new(),
        is_read,
        priority: Priority::Normal,
        created_at: Utc.with_ymd_and_hms(2025, 12, 20, 12, 0, 0).unwrap(),
        attachments: Vec::new(),
        status,
    }
}

#[test]
fn marking_an_unread_inbox_email_drops_the_badge_by_one() {
    let mut store = EmailStore::new(vec![
        email(1, false, EmailStatus::Inbox),
        email(2, true, EmailStatus::Inbox),
        email(3, false, EmailStatus::Inbox),
    ]);
    let before = store.email_count();

    store.mark_email_as_read(3);

    assert!(store.unread_emails().iter().all(|email| email.id != 3));
    assert_eq!(store.email_count(), before - 1);
    assert_eq!(store.email_count(), store.unread_emails().len());
}

#[test]
fn mark_all_is_idempotent() {
    let mut store = EmailStore::seeded(Utc::now());
    store.mark_all_emails_as_read();
    let once = store.emails().to_vec();

    store.mark_all_emails_as_read();
    assert_eq!(store.emails(), once.as_slice());
    assert_eq!(store.email_count(), 0);
}

#[test]
fn deleting_twice_changes_nothing_the_second_time() {
    let mut store = EmailStore::seeded(Utc::now());
    assert!(store.delete_email(2));
    let after_first = store.emails().to_vec();

    assert!(!store.delete_email(2));
    assert_eq!(store.emails(), after_first.as_slice());
    assert_eq!(
        store.emails_by_status().values().map(Vec::len).sum::<usize>(),
        store.emails().len()
    );
}

#[test]
fn reset_restores_known_bundles_after_edits() {
    let mut store = EmailStore::seeded(Utc::now());
    store.save_setting(SettingsCategory::Personal, "language", "fr-FR".into());
    store.save_setting(SettingsCategory::Personal, "theme", "dark".into());
    store.save_all_settings(SettingsPatch::System(SystemPatch {
        auto_save: Some(false),
        data_retention: Some("1year".to_string()),
        ..SystemPatch::default()
    }));

    store.reset_settings(SettingsCategory::Personal);
    store.reset_settings(SettingsCategory::System);

    assert_eq!(
        store.settings().personal,
        PersonalSettings {
            language: "zh-CN".to_string(),
            theme: "light".to_string(),
            notifications: true,
            email_notifications: true,
        }
    );
    assert_eq!(store.settings().system, SystemSettings::default());
    assert_eq!(
        store.get_setting(SettingsCategory::Personal, "language"),
        Some(SettingValue::Text("zh-CN".to_string()))
    );
}

#[test]
fn unknown_category_names_are_rejected_before_reaching_the_store() {
    assert!("printers".parse::<SettingsCategory>().is_err());
    assert_eq!(
        "advanced".parse::<SettingsCategory>().map(|category| category.to_string()),
        Ok("advanced".to_string())
    );
}

#[test]
fn selecting_a_notification_reads_it() {
    let mut store = NotificationStore::seeded(Utc::now());
    let unread_before = store.notification_count();

    store.set_current_notification(Some(7));
    assert_eq!(store.notification_count(), unread_before - 1);
    assert!(store
        .current_notification()
        .map(|notification| notification.is_read)
        .unwrap_or(false));

    store.set_current_notification(Some(7));
    assert_eq!(store.notification_count(), unread_before - 1);

    store.set_current_notification(None);
    assert!(store.current_notification().is_none());
}

#[test]
fn close_all_pages_leaves_advanced_user_management_open() {
    let mut store = NavigationStore::from_state(NavigationState::all_open());
    store.close_all_pages();

    let state = store.state();
    let closed = Page::ALL.iter().filter(|page| !state.flag(**page)).count();
    assert_eq!(closed, 8);
    assert!(state.show_advanced_user_management);
}
