use anyhow::Context;
use chrono::{DateTime, Utc};
use printdesk_config::{AppConfig, ConfigManager};
use printdesk_store::{EmailStore, NavigationStore, NotificationStore};
use tokio::sync::RwLock;

pub struct AppState {
    pub(crate) config_manager: ConfigManager,
    pub(crate) config: RwLock<AppConfig>,
    pub(crate) email: RwLock<EmailStore>,
    pub(crate) notifications: RwLock<NotificationStore>,
    pub(crate) navigation: RwLock<NavigationStore>,
}

impl AppState {
    pub fn new(config_manager: ConfigManager, config: AppConfig, now: DateTime<Utc>) -> Self {
        let (email, notifications) = if config.dashboard.seed_mock_data {
            (EmailStore::seeded(now), NotificationStore::seeded(now))
        } else {
            (EmailStore::default(), NotificationStore::default())
        };

        tracing::info!(
            emails = email.emails().len(),
            notifications = notifications.notifications().len(),
            "dashboard stores initialized"
        );

        Self {
            config_manager,
            config: RwLock::new(config),
            email: RwLock::new(email),
            notifications: RwLock::new(notifications),
            navigation: RwLock::new(NavigationStore::new()),
        }
    }

    pub async fn config(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    pub async fn set_config(&self, next: AppConfig) -> anyhow::Result<()> {
        self.config_manager
            .save(&next)
            .context("save app config")?;
        let mut guard = self.config.write().await;
        *guard = next;
        Ok(())
    }
}

pub fn load_config() -> anyhow::Result<(ConfigManager, AppConfig)> {
    let config_manager = ConfigManager::new().context("initialize config manager")?;
    let config = config_manager.load().context("load app config")?;
    Ok((config_manager, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use printdesk_config::DashboardConfig;

    fn state_with(config: AppConfig) -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().expect("failed to create tmpdir");
        let manager = ConfigManager::in_dir(dir.path()).expect("manager created");
        (dir, AppState::new(manager, config, Utc::now()))
    }

    #[tokio::test]
    async fn seeds_stores_by_default() {
        let (_dir, state) = state_with(AppConfig::default());
        assert_eq!(state.email.read().await.emails().len(), 5);
        assert_eq!(state.notifications.read().await.notification_count(), 7);
    }

    #[tokio::test]
    async fn starts_empty_without_mock_data() {
        let config = AppConfig {
            dashboard: DashboardConfig {
                seed_mock_data: false,
            },
            ..AppConfig::default()
        };
        let (_dir, state) = state_with(config);
        assert!(state.email.read().await.emails().is_empty());
        assert!(state.notifications.read().await.notifications().is_empty());
    }

    #[tokio::test]
    async fn set_config_persists() {
        let (dir, state) = state_with(AppConfig::default());
        let mut next = state.config().await;
        next.window.title = "PrintDesk Admin".to_string();
        state.set_config(next.clone()).await.expect("config saved");

        assert_eq!(state.config().await, next);
        let reloaded = ConfigManager::in_dir(dir.path())
            .and_then(|manager| manager.load())
            .expect("config reloaded");
        assert_eq!(reloaded, next);
    }
}
