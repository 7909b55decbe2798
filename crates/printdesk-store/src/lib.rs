//! In-memory state behind the PrintDesk dashboard: the header mailbox and
//! settings, the notification feed, and sidebar page visibility.

mod email;
mod error;
mod navigation;
mod notification;
mod seed;
mod settings;

pub use email::{EmailStore, HeaderPanels};
pub use error::StoreError;
pub use navigation::NavigationStore;
pub use notification::{NotificationPanel, NotificationStore};
pub use seed::{seed_emails, seed_notifications};
pub use settings::{
    AdvancedPatch, AdvancedSettings, PersonalPatch, PersonalSettings, SettingValue, Settings,
    SettingsCategory, SettingsGroup, SettingsPatch, SystemPatch, SystemSettings,
};
