// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! `App::update` stays a thin dispatcher; the handlers here own the actual
//! behavior: request orchestration with last-write-wins sequencing, settings
//! commits, and preference persistence.

use super::message::Message;
use super::persisted_state::AppState;
use super::{Screen, paths};
use crate::api::{client, download, GenerationRequest, GenerationResponse, Wallpaper};
use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings;
use crate::ui::studio;
use crate::ui::theming::ThemeMode;
use chrono::Local;
use iced::Task;
use std::path::PathBuf;

/// Mutable view over the `App` fields the handlers operate on.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub studio: &'a mut studio::State,
    pub settings: &'a mut settings::State,
    pub theme_mode: &'a mut ThemeMode,
    pub api_base_url: &'a mut String,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_studio_message(
    ctx: &mut UpdateContext<'_>,
    message: studio::Message,
) -> Task<Message> {
    match message {
        studio::Message::PromptChanged(value) => {
            ctx.studio.prompt = value;
            Task::none()
        }
        studio::Message::StyleSelected(style) => {
            ctx.studio.style = style;
            persist_preferences(ctx);
            Task::none()
        }
        studio::Message::AspectRatioSelected(ratio) => {
            ctx.studio.aspect_ratio = ratio;
            persist_preferences(ctx);
            Task::none()
        }
        studio::Message::DeviceSelected(device) => {
            ctx.studio.device = device;
            persist_preferences(ctx);
            Task::none()
        }
        studio::Message::GeneratePressed => handle_generate_pressed(ctx),
        studio::Message::DownloadPressed => handle_download_pressed(ctx),
        studio::Message::SpinnerTick => {
            ctx.studio.advance_spinner();
            Task::none()
        }
    }
}

fn handle_generate_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let prompt = ctx.studio.prompt.trim().to_string();
    if prompt.is_empty() {
        ctx.notifications
            .push(Notification::warning("notification-empty-prompt"));
        return Task::none();
    }

    let seq = ctx.studio.begin_request();
    let request = GenerationRequest::new(prompt, ctx.studio.aspect_ratio, ctx.studio.style);
    let base_url = ctx.api_base_url.clone();

    Task::perform(client::generate(base_url, request), move |result| {
        Message::GenerationCompleted { seq, result }
    })
}

fn handle_download_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(wallpaper) = ctx.studio.wallpaper() else {
        return Task::none();
    };

    let extension = download::extension_from_url(&wallpaper.url);
    let filename = download::timestamped_filename(&Local::now(), extension);
    let suggested_dir = ctx
        .app_state
        .last_save_directory
        .clone()
        .or_else(paths::get_download_dir);

    Task::perform(
        download::choose_save_path(suggested_dir, filename),
        Message::DownloadDialogResult,
    )
}

pub fn handle_generation_completed(
    ctx: &mut UpdateContext<'_>,
    seq: u64,
    result: Result<GenerationResponse, Error>,
) -> Task<Message> {
    if !ctx.studio.is_current(seq) {
        // A newer request is in flight; last write wins.
        return Task::none();
    }

    match result {
        Ok(response) if response.success => match response.image_url {
            Some(url) => {
                // Keep the loading state until the image bytes arrive.
                Task::perform(client::fetch_image(url), move |result| {
                    Message::WallpaperFetched { seq, result }
                })
            }
            None => {
                ctx.studio.finish_request(seq);
                ctx.notifications
                    .push(Notification::error("notification-generate-error-empty"));
                Task::none()
            }
        },
        Ok(response) => {
            ctx.studio.finish_request(seq);
            let reason = response.error.unwrap_or_default();
            ctx.notifications.push(
                Notification::error("notification-generate-error-api")
                    .with_arg("reason", reason),
            );
            Task::none()
        }
        Err(_) => {
            ctx.studio.finish_request(seq);
            ctx.notifications
                .push(Notification::error("notification-generate-error-http"));
            Task::none()
        }
    }
}

pub fn handle_wallpaper_fetched(
    ctx: &mut UpdateContext<'_>,
    seq: u64,
    result: Result<Wallpaper, Error>,
) -> Task<Message> {
    if !ctx.studio.finish_request(seq) {
        return Task::none();
    }

    match result {
        Ok(wallpaper) => {
            ctx.studio.set_wallpaper(wallpaper);
            ctx.notifications.clear_generation_errors();
            ctx.notifications
                .push(Notification::success("notification-generate-success"));
        }
        Err(_) => {
            // The previous wallpaper (if any) stays on screen.
            ctx.notifications
                .push(Notification::error("notification-generate-error-fetch"));
        }
    }

    Task::none()
}

pub fn handle_download_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog.
        return Task::none();
    };

    let Some(wallpaper) = ctx.studio.wallpaper() else {
        return Task::none();
    };

    match download::write_bytes(&path, &wallpaper.bytes) {
        Ok(()) => {
            ctx.notifications
                .push(Notification::success("notification-save-success"));

            ctx.app_state.set_last_save_directory_from_file(&path);
            if let Some(key) = ctx.app_state.save() {
                ctx.notifications.push(Notification::warning(key));
            }
        }
        Err(_) => {
            ctx.notifications
                .push(Notification::error("notification-save-error"));
        }
    }

    Task::none()
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(locale) => {
            ctx.i18n.set_locale(locale);
            persist_preferences(ctx);
        }
        settings::Message::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            persist_preferences(ctx);
        }
        settings::Message::ApiUrlChanged(value) => {
            ctx.settings.set_api_url_input(value);
        }
        settings::Message::ApiUrlSubmitted => {
            if let Some(url) = ctx.settings.commit_api_url() {
                *ctx.api_base_url = url;
                persist_preferences(ctx);
            }
        }
    }
    Task::none()
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match message {
        navbar::Message::BackPressed => handle_screen_switch(ctx, Screen::Studio),
        navbar::Message::OpenSettings => handle_screen_switch(ctx, Screen::Settings),
        navbar::Message::OpenAbout => handle_screen_switch(ctx, Screen::About),
    }
}

pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    // Leaving settings commits a pending URL edit; an invalid value blocks
    // the switch so the error stays visible next to the field.
    if *ctx.screen == Screen::Settings && target != Screen::Settings && ctx.settings.api_url_dirty()
    {
        match ctx.settings.commit_api_url() {
            Some(url) => {
                *ctx.api_base_url = url;
                persist_preferences(ctx);
            }
            None => return Task::none(),
        }
    }

    *ctx.screen = target;
    Task::none()
}

/// Writes the current preferences to `settings.toml`, surfacing a warning
/// toast if the write fails.
pub fn persist_preferences(ctx: &mut UpdateContext<'_>) {
    let config = Config {
        general: config::GeneralConfig {
            language: Some(ctx.i18n.current_locale().to_string()),
            theme_mode: *ctx.theme_mode,
        },
        generation: config::GenerationConfig {
            api_base_url: Some(ctx.api_base_url.clone()),
            default_style: ctx
                .studio
                .style
                .api_value()
                .map(str::to_string),
            default_aspect_ratio: Some(ctx.studio.aspect_ratio.api_value().to_string()),
        },
        preview: config::PreviewConfig {
            device: Some(ctx.studio.device.label().to_string()),
        },
    };

    if config::save(&config).is_err() {
        ctx.notifications
            .push(Notification::warning("notification-config-save-warning"));
    }
}
