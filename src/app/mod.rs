// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the studio and settings
//! views.
//!
//! The `App` struct wires together the domains (studio form, preview,
//! localization, settings) and translates messages into side effects like
//! config persistence or backend requests. Policy decisions (window sizing,
//! persistence format, locale switching) stay close to the main update loop
//! so user-facing behavior is easy to audit.

pub mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::preview::DeviceKind;
use crate::api::{AspectRatio, StyleKind};
use crate::ui::notifications;
use crate::ui::settings::{self, State as SettingsState};
use crate::ui::studio;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    studio: studio::State,
    settings: SettingsState,
    theme_mode: ThemeMode,
    /// Base URL of the wallpaper generation backend.
    api_base_url: String,
    /// Persisted application state (last save directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("generating", &self.studio.is_generating())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Studio,
            studio: studio::State::new(),
            settings: SettingsState::new(config::DEFAULT_API_BASE_URL),
            theme_mode: ThemeMode::System,
            api_base_url: config::DEFAULT_API_BASE_URL.to_string(),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from CLI flags and persisted
    /// configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;

        app.api_base_url = flags
            .api_url
            .or(config.generation.api_base_url)
            .unwrap_or_else(|| config::DEFAULT_API_BASE_URL.to_string());
        app.settings = SettingsState::new(&app.api_base_url);

        if let Some(style) = config.generation.default_style.as_deref() {
            app.studio.style = StyleKind::from_label(style);
        }
        if let Some(ratio) = config.generation.default_aspect_ratio.as_deref() {
            app.studio.aspect_ratio = AspectRatio::from_api_value(ratio);
        }
        if let Some(device) = config.preview.device.as_deref() {
            // Unrecognized labels fall back gracefully; the preview resolves
            // the fallback kind to the iPhone geometry.
            app.studio.device = DeviceKind::from_label(device);
        }

        // Load application state (last save directory)
        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        if self.studio.is_generating() {
            let busy = self.i18n.tr("window-title-busy");
            format!("{busy} - {app_name}")
        } else {
            app_name
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let spinner_sub =
            subscription::create_spinner_subscription(self.studio.is_generating());

        Subscription::batch([tick_sub, spinner_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            studio: &mut self.studio,
            settings: &mut self.settings,
            theme_mode: &mut self.theme_mode,
            api_base_url: &mut self.api_base_url,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Studio(studio_message) => {
                update::handle_studio_message(&mut ctx, studio_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::About(about_message) => match about_message {},
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::GenerationCompleted { seq, result } => {
                update::handle_generation_completed(&mut ctx, seq, result)
            }
            Message::WallpaperFetched { seq, result } => {
                update::handle_wallpaper_fetched(&mut ctx, seq, result)
            }
            Message::DownloadDialogResult(path) => {
                update::handle_download_dialog_result(&mut ctx, path)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Tick notification manager to handle auto-dismiss
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            studio: &self.studio,
            settings: &self.settings,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}
