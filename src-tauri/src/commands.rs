use crate::state::AppState;
use printdesk_config::AppConfig;
use printdesk_core::{
    EmailRecord, EmailStatus, NavigationState, NotificationKind, NotificationRecord, Page,
};
use printdesk_store::{
    HeaderPanels, NotificationPanel, SettingValue, Settings, SettingsCategory, SettingsPatch,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tauri::State;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapResponse {
    pub config: AppConfig,
    pub email_count: usize,
    pub notification_count: usize,
    pub header: HeaderPanels,
    pub notification_panel: NotificationPanel,
    pub navigation: NavigationState,
    pub settings: Settings,
}

#[derive(Debug, Deserialize)]
pub struct SaveSettingPayload {
    pub category: String,
    pub key: String,
    pub value: SettingValue,
}

#[derive(Debug, Deserialize)]
pub struct SaveAllSettingsPayload {
    pub category: String,
    pub settings: Value,
}

#[tauri::command]
pub async fn bootstrap(state: State<'_, AppState>) -> Result<BootstrapResponse, String> {
    let config = state.config().await;
    let email = state.email.read().await;
    let notifications = state.notifications.read().await;
    let navigation = state.navigation.read().await;

    Ok(BootstrapResponse {
        config,
        email_count: email.email_count(),
        notification_count: notifications.notification_count(),
        header: email.panels(),
        notification_panel: notifications.panel(),
        navigation: navigation.state(),
        settings: email.settings().clone(),
    })
}

#[tauri::command]
pub async fn get_config(state: State<'_, AppState>) -> Result<AppConfig, String> {
    Ok(state.config().await)
}

#[tauri::command]
pub async fn save_config(state: State<'_, AppState>, config: AppConfig) -> Result<(), String> {
    state.set_config(config).await.map_err(to_error_string)
}

// ---- Header mailbox ----

#[tauri::command]
pub async fn list_emails(state: State<'_, AppState>) -> Result<Vec<EmailRecord>, String> {
    Ok(state.email.read().await.emails().to_vec())
}

#[tauri::command]
pub async fn unread_emails(state: State<'_, AppState>) -> Result<Vec<EmailRecord>, String> {
    Ok(owned(state.email.read().await.unread_emails()))
}

#[tauri::command]
pub async fn email_count(state: State<'_, AppState>) -> Result<usize, String> {
    Ok(state.email.read().await.email_count())
}

#[tauri::command]
pub async fn emails_by_status(
    state: State<'_, AppState>,
) -> Result<BTreeMap<EmailStatus, Vec<EmailRecord>>, String> {
    Ok(owned_groups(state.email.read().await.emails_by_status()))
}

#[tauri::command]
pub async fn mark_email_as_read(state: State<'_, AppState>, id: u64) -> Result<(), String> {
    state.email.write().await.mark_email_as_read(id);
    Ok(())
}

#[tauri::command]
pub async fn mark_all_emails_as_read(state: State<'_, AppState>) -> Result<(), String> {
    state.email.write().await.mark_all_emails_as_read();
    Ok(())
}

#[tauri::command]
pub async fn delete_email(state: State<'_, AppState>, id: u64) -> Result<(), String> {
    state.email.write().await.delete_email(id);
    Ok(())
}

#[tauri::command]
pub async fn move_email_to_trash(state: State<'_, AppState>, id: u64) -> Result<(), String> {
    state.email.write().await.move_email_to_trash(id);
    Ok(())
}

#[tauri::command]
pub async fn toggle_email_panel(state: State<'_, AppState>) -> Result<bool, String> {
    Ok(state.email.write().await.toggle_email_panel())
}

#[tauri::command]
pub async fn toggle_settings_panel(state: State<'_, AppState>) -> Result<bool, String> {
    Ok(state.email.write().await.toggle_settings_panel())
}

#[tauri::command]
pub async fn set_current_email(state: State<'_, AppState>, id: Option<u64>) -> Result<(), String> {
    state.email.write().await.set_current_email(id);
    Ok(())
}

#[tauri::command]
pub async fn current_email(state: State<'_, AppState>) -> Result<Option<EmailRecord>, String> {
    Ok(state.email.read().await.current_email().cloned())
}

#[tauri::command]
pub async fn header_panels(state: State<'_, AppState>) -> Result<HeaderPanels, String> {
    Ok(state.email.read().await.panels())
}

#[tauri::command]
pub async fn close_header_panels(state: State<'_, AppState>) -> Result<(), String> {
    state.email.write().await.close_all_panels();
    Ok(())
}

// ---- Settings ----

#[tauri::command]
pub async fn get_settings(state: State<'_, AppState>) -> Result<Settings, String> {
    Ok(state.email.read().await.settings().clone())
}

#[tauri::command]
pub async fn save_setting(
    state: State<'_, AppState>,
    payload: SaveSettingPayload,
) -> Result<bool, String> {
    let Some(category) = known_category(&payload.category) else {
        return Ok(false);
    };
    Ok(state
        .email
        .write()
        .await
        .save_setting(category, &payload.key, payload.value))
}

#[tauri::command]
pub async fn save_all_settings(
    state: State<'_, AppState>,
    payload: SaveAllSettingsPayload,
) -> Result<(), String> {
    let Some(category) = known_category(&payload.category) else {
        return Ok(());
    };
    let patch = settings_patch(category, payload.settings).map_err(to_error_string)?;
    state.email.write().await.save_all_settings(patch);
    Ok(())
}

#[tauri::command]
pub async fn reset_settings(state: State<'_, AppState>, category: String) -> Result<(), String> {
    if let Some(category) = known_category(&category) {
        state.email.write().await.reset_settings(category);
    }
    Ok(())
}

#[tauri::command]
pub async fn get_setting(
    state: State<'_, AppState>,
    category: String,
    key: String,
) -> Result<Option<SettingValue>, String> {
    let Some(category) = known_category(&category) else {
        return Ok(None);
    };
    Ok(state.email.read().await.get_setting(category, &key))
}

// ---- Notifications ----

#[tauri::command]
pub async fn list_notifications(
    state: State<'_, AppState>,
) -> Result<Vec<NotificationRecord>, String> {
    Ok(state.notifications.read().await.notifications().to_vec())
}

#[tauri::command]
pub async fn unread_notifications(
    state: State<'_, AppState>,
) -> Result<Vec<NotificationRecord>, String> {
    Ok(owned(state.notifications.read().await.unread_notifications()))
}

#[tauri::command]
pub async fn notification_count(state: State<'_, AppState>) -> Result<usize, String> {
    Ok(state.notifications.read().await.notification_count())
}

#[tauri::command]
pub async fn notifications_by_type(
    state: State<'_, AppState>,
) -> Result<BTreeMap<NotificationKind, Vec<NotificationRecord>>, String> {
    Ok(owned_groups(
        state.notifications.read().await.notifications_by_type(),
    ))
}

#[tauri::command]
pub async fn mark_notification_as_read(
    state: State<'_, AppState>,
    id: u64,
) -> Result<(), String> {
    state.notifications.write().await.mark_as_read(id);
    Ok(())
}

#[tauri::command]
pub async fn mark_all_notifications_as_read(state: State<'_, AppState>) -> Result<(), String> {
    state.notifications.write().await.mark_all_as_read();
    Ok(())
}

#[tauri::command]
pub async fn delete_notification(state: State<'_, AppState>, id: u64) -> Result<(), String> {
    state.notifications.write().await.delete_notification(id);
    Ok(())
}

#[tauri::command]
pub async fn clear_all_notifications(state: State<'_, AppState>) -> Result<(), String> {
    state.notifications.write().await.clear_all_notifications();
    Ok(())
}

#[tauri::command]
pub async fn toggle_notification_panel(state: State<'_, AppState>) -> Result<bool, String> {
    Ok(state.notifications.write().await.toggle_notification_panel())
}

#[tauri::command]
pub async fn close_notification_panels(state: State<'_, AppState>) -> Result<(), String> {
    state.notifications.write().await.close_all_panels();
    Ok(())
}

#[tauri::command]
pub async fn set_current_notification(
    state: State<'_, AppState>,
    id: Option<u64>,
) -> Result<(), String> {
    state.notifications.write().await.set_current_notification(id);
    Ok(())
}

#[tauri::command]
pub async fn current_notification(
    state: State<'_, AppState>,
) -> Result<Option<NotificationRecord>, String> {
    Ok(state
        .notifications
        .read()
        .await
        .current_notification()
        .cloned())
}

#[tauri::command]
pub async fn notification_panel(state: State<'_, AppState>) -> Result<NotificationPanel, String> {
    Ok(state.notifications.read().await.panel())
}

#[tauri::command]
pub async fn refresh_notifications(state: State<'_, AppState>) -> Result<(), String> {
    state.notifications.read().await.refresh_notifications();
    Ok(())
}

// ---- Sidebar navigation ----

#[tauri::command]
pub async fn navigation_state(state: State<'_, AppState>) -> Result<NavigationState, String> {
    Ok(state.navigation.read().await.state())
}

#[tauri::command]
pub async fn open_page(state: State<'_, AppState>, page: Page) -> Result<(), String> {
    state.navigation.write().await.open(page);
    Ok(())
}

#[tauri::command]
pub async fn close_page(state: State<'_, AppState>, page: Page) -> Result<(), String> {
    state.navigation.write().await.close(page);
    Ok(())
}

#[tauri::command]
pub async fn close_all_pages(state: State<'_, AppState>) -> Result<(), String> {
    state.navigation.write().await.close_all_pages();
    Ok(())
}

fn known_category(raw: &str) -> Option<SettingsCategory> {
    match raw.parse() {
        Ok(category) => Some(category),
        Err(err) => {
            tracing::debug!("settings update ignored: {err}");
            None
        }
    }
}

fn settings_patch(
    category: SettingsCategory,
    raw: Value,
) -> Result<SettingsPatch, serde_json::Error> {
    Ok(match category {
        SettingsCategory::Personal => SettingsPatch::Personal(serde_json::from_value(raw)?),
        SettingsCategory::System => SettingsPatch::System(serde_json::from_value(raw)?),
        SettingsCategory::Advanced => SettingsPatch::Advanced(serde_json::from_value(raw)?),
    })
}

fn owned<T: Clone>(records: Vec<&T>) -> Vec<T> {
    records.into_iter().cloned().collect()
}

fn owned_groups<K: Ord, T: Clone>(groups: BTreeMap<K, Vec<&T>>) -> BTreeMap<K, Vec<T>> {
    groups
        .into_iter()
        .map(|(key, records)| (key, owned(records)))
        .collect()
}

fn to_error_string<E>(error: E) -> String
where
    E: std::fmt::Display,
{
    error.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use printdesk_store::PersonalPatch;
    use serde_json::json;

    #[test]
    fn unknown_category_is_skipped() {
        assert_eq!(known_category("personal"), Some(SettingsCategory::Personal));
        assert_eq!(known_category("printers"), None);
    }

    #[test]
    fn patch_is_built_for_the_named_category() {
        let patch = settings_patch(
            SettingsCategory::Personal,
            json!({ "theme": "dark", "emailNotifications": false }),
        )
        .expect("patch parsed");

        assert_eq!(
            patch,
            SettingsPatch::Personal(PersonalPatch {
                theme: Some("dark".to_string()),
                email_notifications: Some(false),
                ..PersonalPatch::default()
            })
        );
    }

    #[test]
    fn patch_with_wrong_value_kind_is_an_error() {
        let result = settings_patch(SettingsCategory::Advanced, json!({ "maxRetries": "three" }));
        assert!(result.is_err());
    }

    #[test]
    fn groups_are_cloned_in_order() {
        let first = "a".to_string();
        let second = "b".to_string();
        let mut groups = BTreeMap::new();
        groups.insert(1, vec![&first, &second]);

        let owned = owned_groups(groups);
        assert_eq!(owned[&1], vec!["a".to_string(), "b".to_string()]);
    }
}
