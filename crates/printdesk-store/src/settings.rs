//! Typed user preferences edited from the header's settings panel.
//!
//! The UI addresses individual values by `(category, key)` using the same
//! camelCase keys the settings are serialized with. Anything that does not
//! name an existing field of the right kind is ignored.

use crate::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SettingsCategory {
    Personal,
    System,
    Advanced,
}

impl SettingsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::System => "system",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SettingsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingsCategory {
    type Err = StoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "personal" => Ok(Self::Personal),
            "system" => Ok(Self::System),
            "advanced" => Ok(Self::Advanced),
            other => Err(StoreError::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl SettingValue {
    fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    fn as_integer<T: TryFrom<i64>>(&self) -> Option<T> {
        match self {
            Self::Integer(value) => T::try_from(*value).ok(),
            _ => None,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Key-addressed access to one settings category.
pub trait SettingsGroup {
    fn get(&self, key: &str) -> Option<SettingValue>;

    /// Returns `false` when `key` is unknown or `value` has the wrong kind.
    fn set(&mut self, key: &str, value: SettingValue) -> bool;
}

fn assign<T>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) => {
            *slot = value;
            true
        }
        None => false,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalSettings {
    pub language: String,
    pub theme: String,
    pub notifications: bool,
    pub email_notifications: bool,
}

impl PersonalSettings {
    /// Bundle restored by a reset. The locale differs from the first-run value.
    pub fn reset_bundle() -> Self {
        Self {
            language: "zh-CN".to_string(),
            ..Self::default()
        }
    }
}

impl Default for PersonalSettings {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            theme: "light".to_string(),
            notifications: true,
            email_notifications: true,
        }
    }
}

impl SettingsGroup for PersonalSettings {
    fn get(&self, key: &str) -> Option<SettingValue> {
        match key {
            "language" => Some(self.language.as_str().into()),
            "theme" => Some(self.theme.as_str().into()),
            "notifications" => Some(self.notifications.into()),
            "emailNotifications" => Some(self.email_notifications.into()),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: SettingValue) -> bool {
        match key {
            "language" => assign(&mut self.language, value.as_text().map(str::to_string)),
            "theme" => assign(&mut self.theme, value.as_text().map(str::to_string)),
            "notifications" => assign(&mut self.notifications, value.as_bool()),
            "emailNotifications" => assign(&mut self.email_notifications, value.as_bool()),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub auto_save: bool,
    pub backup_frequency: String,
    pub data_retention: String,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            auto_save: true,
            backup_frequency: "daily".to_string(),
            data_retention: "3months".to_string(),
        }
    }
}

impl SettingsGroup for SystemSettings {
    fn get(&self, key: &str) -> Option<SettingValue> {
        match key {
            "autoSave" => Some(self.auto_save.into()),
            "backupFrequency" => Some(self.backup_frequency.as_str().into()),
            "dataRetention" => Some(self.data_retention.as_str().into()),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: SettingValue) -> bool {
        match key {
            "autoSave" => assign(&mut self.auto_save, value.as_bool()),
            "backupFrequency" => {
                assign(&mut self.backup_frequency, value.as_text().map(str::to_string))
            }
            "dataRetention" => {
                assign(&mut self.data_retention, value.as_text().map(str::to_string))
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSettings {
    /// Milliseconds.
    pub api_timeout: u64,
    pub max_retries: u32,
    pub cache_enabled: bool,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            api_timeout: 30_000,
            max_retries: 3,
            cache_enabled: true,
        }
    }
}

impl SettingsGroup for AdvancedSettings {
    fn get(&self, key: &str) -> Option<SettingValue> {
        match key {
            "apiTimeout" => i64::try_from(self.api_timeout).ok().map(SettingValue::from),
            "maxRetries" => Some(i64::from(self.max_retries).into()),
            "cacheEnabled" => Some(self.cache_enabled.into()),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: SettingValue) -> bool {
        match key {
            "apiTimeout" => assign(&mut self.api_timeout, value.as_integer()),
            "maxRetries" => assign(&mut self.max_retries, value.as_integer()),
            "cacheEnabled" => assign(&mut self.cache_enabled, value.as_bool()),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalPatch {
    pub language: Option<String>,
    pub theme: Option<String>,
    pub notifications: Option<bool>,
    pub email_notifications: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemPatch {
    pub auto_save: Option<bool>,
    pub backup_frequency: Option<String>,
    pub data_retention: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvancedPatch {
    pub api_timeout: Option<u64>,
    pub max_retries: Option<u32>,
    pub cache_enabled: Option<bool>,
}

/// Partial update for one category. Fields left as `None` keep their value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsPatch {
    Personal(PersonalPatch),
    System(SystemPatch),
    Advanced(AdvancedPatch),
}

impl SettingsPatch {
    pub fn category(&self) -> SettingsCategory {
        match self {
            Self::Personal(_) => SettingsCategory::Personal,
            Self::System(_) => SettingsCategory::System,
            Self::Advanced(_) => SettingsCategory::Advanced,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub personal: PersonalSettings,
    pub system: SystemSettings,
    pub advanced: AdvancedSettings,
}

impl Settings {
    pub fn group(&self, category: SettingsCategory) -> &dyn SettingsGroup {
        match category {
            SettingsCategory::Personal => &self.personal,
            SettingsCategory::System => &self.system,
            SettingsCategory::Advanced => &self.advanced,
        }
    }

    pub fn group_mut(&mut self, category: SettingsCategory) -> &mut dyn SettingsGroup {
        match category {
            SettingsCategory::Personal => &mut self.personal,
            SettingsCategory::System => &mut self.system,
            SettingsCategory::Advanced => &mut self.advanced,
        }
    }

    pub fn get(&self, category: SettingsCategory, key: &str) -> Option<SettingValue> {
        self.group(category).get(key)
    }

    pub fn set(&mut self, category: SettingsCategory, key: &str, value: SettingValue) -> bool {
        self.group_mut(category).set(key, value)
    }

    pub fn merge(&mut self, patch: SettingsPatch) {
        match patch {
            SettingsPatch::Personal(patch) => {
                let target = &mut self.personal;
                assign(&mut target.language, patch.language);
                assign(&mut target.theme, patch.theme);
                assign(&mut target.notifications, patch.notifications);
                assign(&mut target.email_notifications, patch.email_notifications);
            }
            SettingsPatch::System(patch) => {
                let target = &mut self.system;
                assign(&mut target.auto_save, patch.auto_save);
                assign(&mut target.backup_frequency, patch.backup_frequency);
                assign(&mut target.data_retention, patch.data_retention);
            }
            SettingsPatch::Advanced(patch) => {
                let target = &mut self.advanced;
                assign(&mut target.api_timeout, patch.api_timeout);
                assign(&mut target.max_retries, patch.max_retries);
                assign(&mut target.cache_enabled, patch.cache_enabled);
            }
        }
    }

    pub fn reset(&mut self, category: SettingsCategory) {
        match category {
            SettingsCategory::Personal => self.personal = PersonalSettings::reset_bundle(),
            SettingsCategory::System => self.system = SystemSettings::default(),
            SettingsCategory::Advanced => self.advanced = AdvancedSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_categories_only() {
        assert_eq!("system".parse::<SettingsCategory>(), Ok(SettingsCategory::System));
        assert_eq!(
            "printers".parse::<SettingsCategory>(),
            Err(StoreError::UnknownCategory("printers".to_string()))
        );
    }

    #[test]
    fn get_uses_serialized_key_names() {
        let settings = Settings::default();
        assert_eq!(
            settings.get(SettingsCategory::Personal, "emailNotifications"),
            Some(SettingValue::Bool(true))
        );
        assert_eq!(
            settings.get(SettingsCategory::Advanced, "apiTimeout"),
            Some(SettingValue::Integer(30_000))
        );
        assert_eq!(settings.get(SettingsCategory::System, "email_notifications"), None);
    }

    #[test]
    fn set_rejects_wrong_kind_and_unknown_key() {
        let mut settings = Settings::default();
        assert!(!settings.set(SettingsCategory::Personal, "theme", true.into()));
        assert!(!settings.set(SettingsCategory::Personal, "fontSize", 14_i64.into()));
        assert!(!settings.set(SettingsCategory::Advanced, "maxRetries", (-1_i64).into()));
        assert_eq!(settings, Settings::default());

        assert!(settings.set(SettingsCategory::Personal, "theme", "dark".into()));
        assert_eq!(settings.personal.theme, "dark");
    }

    #[test]
    fn merge_overrides_only_present_fields() {
        let mut settings = Settings::default();
        settings.merge(SettingsPatch::System(SystemPatch {
            backup_frequency: Some("weekly".to_string()),
            ..SystemPatch::default()
        }));

        assert_eq!(settings.system.backup_frequency, "weekly");
        assert!(settings.system.auto_save);
        assert_eq!(settings.system.data_retention, "3months");
    }

    #[test]
    fn patch_deserializes_from_partial_object() {
        let patch: AdvancedPatch =
            serde_json::from_str(r#"{"maxRetries":5}"#).expect("patch parsed");
        assert_eq!(patch.max_retries, Some(5));
        assert_eq!(patch.api_timeout, None);
    }

    #[test]
    fn values_serialize_as_plain_scalars() {
        let values = vec![
            SettingValue::from(true),
            SettingValue::from(3_i64),
            SettingValue::from("daily"),
        ];
        let json = serde_json::to_string(&values).expect("values serialized");
        assert_eq!(json, r#"[true,3,"daily"]"#);
    }
}
