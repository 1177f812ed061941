// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, theme mode, and backend URL.
//!
//! Language and theme changes apply (and persist) immediately. The backend
//! URL is committed on submit or when leaving the screen, with a validation
//! error that blocks the switch while the value is unusable.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use unic_langid::LanguageIdentifier;

/// Error key shown when the backend URL is not a usable HTTP URL.
pub const API_URL_INVALID_KEY: &str = "settings-api-url-invalid";

/// Editable settings state.
#[derive(Debug, Clone, Default)]
pub struct State {
    api_url_input: String,
    api_url_dirty: bool,
    api_url_error_key: Option<&'static str>,
}

impl State {
    /// Creates the settings state seeded with the active backend URL.
    #[must_use]
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_url_input: api_base_url.to_string(),
            api_url_dirty: false,
            api_url_error_key: None,
        }
    }

    /// Records an edit to the URL field without committing it.
    pub fn set_api_url_input(&mut self, value: String) {
        self.api_url_input = value;
        self.api_url_dirty = true;
        self.api_url_error_key = None;
    }

    /// Validates and commits the edited URL.
    ///
    /// Returns the cleaned URL on success; on failure the error key is stored
    /// for display and `None` is returned.
    pub fn commit_api_url(&mut self) -> Option<String> {
        let trimmed = self.api_url_input.trim();

        if trimmed.is_empty() || !(trimmed.starts_with("http://") || trimmed.starts_with("https://"))
        {
            self.api_url_error_key = Some(API_URL_INVALID_KEY);
            return None;
        }

        let cleaned = trimmed.trim_end_matches('/').to_string();
        self.api_url_input = cleaned.clone();
        self.api_url_dirty = false;
        self.api_url_error_key = None;
        Some(cleaned)
    }

    #[must_use]
    pub fn api_url_input(&self) -> &str {
        &self.api_url_input
    }

    #[must_use]
    pub fn api_url_dirty(&self) -> bool {
        self.api_url_dirty
    }

    #[must_use]
    pub fn api_url_error_key(&self) -> Option<&'static str> {
        self.api_url_error_key
    }
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    ApiUrlChanged(String),
    ApiUrlSubmitted,
}

/// Context required to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub theme_mode: ThemeMode,
}

/// Renders the settings screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    // Language
    let language_label = section_label(ctx.i18n.tr("settings-language-label"));
    let language_picker = pick_list(
        ctx.i18n.available_locales.clone(),
        Some(ctx.i18n.current_locale().clone()),
        Message::LanguageSelected,
    )
    .padding(spacing::XS);

    // Theme mode toggle group
    let theme_label = section_label(ctx.i18n.tr("settings-theme-label"));
    let mut theme_row = Row::new().spacing(spacing::XS);
    for mode in ThemeMode::ALL {
        let style: fn(&iced::Theme, button::Status) -> button::Style = if mode == ctx.theme_mode {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        theme_row = theme_row.push(
            button(Text::new(ctx.i18n.tr(mode.label_key())).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(style)
                .on_press(Message::ThemeModeSelected(mode)),
        );
    }

    // Backend URL
    let api_url_label = section_label(ctx.i18n.tr("settings-api-url-label"));
    let api_url_input = text_input(
        &ctx.i18n.tr("settings-api-url-placeholder"),
        ctx.state.api_url_input(),
    )
    .on_input(Message::ApiUrlChanged)
    .on_submit(Message::ApiUrlSubmitted)
    .padding(spacing::SM)
    .size(typography::BODY);

    let mut api_url_section = Column::new()
        .spacing(spacing::XXS)
        .push(api_url_label)
        .push(api_url_input);

    if let Some(error_key) = ctx.state.api_url_error_key() {
        api_url_section = api_url_section.push(
            Text::new(ctx.i18n.tr(error_key))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .push(title)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(language_label)
                .push(language_picker),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(theme_label)
                .push(theme_row),
        )
        .push(api_url_section);

    Container::new(
        Container::new(content)
            .width(Length::Fixed(sizing::FORM_WIDTH + sizing::ICON_XXL))
            .padding(spacing::LG)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn section_label(label: String) -> Text<'static> {
    Text::new(label)
        .size(typography::BODY_SM)
        .color(palette::GRAY_400)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_clean() {
        let state = State::new("http://localhost:8001");
        assert_eq!(state.api_url_input(), "http://localhost:8001");
        assert!(!state.api_url_dirty());
        assert!(state.api_url_error_key().is_none());
    }

    #[test]
    fn editing_marks_dirty_and_clears_error() {
        let mut state = State::new("http://localhost:8001");
        state.set_api_url_input("http://example".to_string());
        assert!(state.api_url_dirty());
        assert!(state.api_url_error_key().is_none());
    }

    #[test]
    fn commit_accepts_http_urls_and_strips_trailing_slash() {
        let mut state = State::new("http://localhost:8001");
        state.set_api_url_input("https://walls.example:9000/".to_string());

        let committed = state.commit_api_url();
        assert_eq!(committed.as_deref(), Some("https://walls.example:9000"));
        assert!(!state.api_url_dirty());
    }

    #[test]
    fn commit_rejects_non_http_values() {
        let mut state = State::new("http://localhost:8001");
        state.set_api_url_input("ftp://nope".to_string());

        assert!(state.commit_api_url().is_none());
        assert_eq!(state.api_url_error_key(), Some(API_URL_INVALID_KEY));
        assert!(state.api_url_dirty());
    }

    #[test]
    fn commit_rejects_empty_values() {
        let mut state = State::new("http://localhost:8001");
        state.set_api_url_input("   ".to_string());

        assert!(state.commit_api_url().is_none());
        assert_eq!(state.api_url_error_key(), Some(API_URL_INVALID_KEY));
    }
}
