mod commands;
mod state;

use chrono::Utc;
use printdesk_config::WindowConfig;
use state::AppState;
use tauri::{WebviewUrl, WebviewWindowBuilder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() {
    let (config_manager, config) =
        state::load_config().expect("failed to load PrintDesk config");
    init_tracing(&config.logging.filter);
    tracing::info!(path = %config_manager.config_path().display(), "config loaded");

    let window = config.window.clone();
    let app_state = AppState::new(config_manager, config, Utc::now());

    tauri::Builder::default()
        .manage(app_state)
        .setup(move |app| {
            open_main_window(app, &window)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::bootstrap,
            commands::get_config,
            commands::save_config,
            commands::list_emails,
            commands::unread_emails,
            commands::email_count,
            commands::emails_by_status,
            commands::mark_email_as_read,
            commands::mark_all_emails_as_read,
            commands::delete_email,
            commands::move_email_to_trash,
            commands::toggle_email_panel,
            commands::toggle_settings_panel,
            commands::set_current_email,
            commands::current_email,
            commands::header_panels,
            commands::close_header_panels,
            commands::get_settings,
            commands::save_setting,
            commands::save_all_settings,
            commands::reset_settings,
            commands::get_setting,
            commands::list_notifications,
            commands::unread_notifications,
            commands::notification_count,
            commands::notifications_by_type,
            commands::mark_notification_as_read,
            commands::mark_all_notifications_as_read,
            commands::delete_notification,
            commands::clear_all_notifications,
            commands::toggle_notification_panel,
            commands::close_notification_panels,
            commands::set_current_notification,
            commands::current_notification,
            commands::notification_panel,
            commands::refresh_notifications,
            commands::navigation_state,
            commands::open_page,
            commands::close_page,
            commands::close_all_pages,
        ])
        .run(tauri::generate_context!())
        .expect("error while running PrintDesk");
}

fn open_main_window(app: &tauri::App, window: &WindowConfig) -> tauri::Result<()> {
    WebviewWindowBuilder::new(app, "main", WebviewUrl::App("index.html".into()))
        .title(&window.title)
        .inner_size(window.width, window.height)
        .build()?;
    tracing::info!(width = window.width, height = window.height, "main window opened");
    Ok(())
}
