// SPDX-License-Identifier: MPL-2.0
//! The studio screen: prompt form on the left, phone-frame preview on the
//! right.
//!
//! The form state owns everything the preview needs: the selections, the
//! fetched wallpaper, and the in-flight request bookkeeping. The preview
//! content is derived fresh for every render via [`State::content_state`];
//! the preview core never owns it.

use crate::api::{AspectRatio, StyleKind, Wallpaper};
use crate::i18n::fluent::I18n;
use crate::preview::{compose, ContentState, DeviceKind, PhoneFrame};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, pick_list, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Form and preview state for the studio screen.
pub struct State {
    pub prompt: String,
    pub style: StyleKind,
    pub aspect_ratio: AspectRatio,
    pub device: DeviceKind,
    wallpaper: Option<Wallpaper>,
    generating: bool,
    request_seq: u64,
    spinner_rotation: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prompt: String::new(),
            style: StyleKind::default(),
            aspect_ratio: AspectRatio::default(),
            device: DeviceKind::default(),
            wallpaper: None,
            generating: false,
            request_seq: 0,
            spinner_rotation: 0.0,
        }
    }

    /// Derives the preview content from the current state.
    ///
    /// An in-flight request always wins; otherwise the last fetched wallpaper
    /// is shown, and an untouched studio starts empty.
    #[must_use]
    pub fn content_state(&self) -> ContentState {
        if self.generating {
            ContentState::Loading
        } else if let Some(wallpaper) = &self.wallpaper {
            ContentState::Image(wallpaper.url.clone())
        } else {
            ContentState::Empty
        }
    }

    /// Starts a new generation request and returns its sequence number.
    ///
    /// Sequence numbers implement last-write-wins: completions carrying an
    /// older number are discarded by [`State::is_current`].
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.generating = true;
        self.spinner_rotation = 0.0;
        self.request_seq
    }

    /// Whether a completion belongs to the most recent request.
    #[must_use]
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    /// Ends the request with the given sequence number.
    ///
    /// Returns `false` (and changes nothing) for stale completions.
    pub fn finish_request(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.generating = false;
        true
    }

    /// Stores a fetched wallpaper for display and download.
    pub fn set_wallpaper(&mut self, wallpaper: Wallpaper) {
        self.wallpaper = Some(wallpaper);
    }

    #[must_use]
    pub fn wallpaper(&self) -> Option<&Wallpaper> {
        self.wallpaper.as_ref()
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Advances the spinner by one animation frame (180° per second at 60 FPS).
    pub fn advance_spinner(&mut self) {
        const ROTATION_SPEED: f32 = std::f32::consts::PI / 60.0;
        self.spinner_rotation =
            (self.spinner_rotation + ROTATION_SPEED) % (2.0 * std::f32::consts::PI);
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

/// Messages emitted by the studio screen.
#[derive(Debug, Clone)]
pub enum Message {
    PromptChanged(String),
    StyleSelected(StyleKind),
    AspectRatioSelected(AspectRatio),
    DeviceSelected(DeviceKind),
    GeneratePressed,
    DownloadPressed,
    /// Animation frame for the loading spinner.
    SpinnerTick,
}

/// Context required to render the studio screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Renders the studio screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Row::new()
        .spacing(spacing::XL)
        .align_y(alignment::Vertical::Center)
        .push(form(ctx.i18n, ctx.state))
        .push(preview(ctx.i18n, ctx.state));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn form<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("studio-title")).size(typography::TITLE_MD);

    let prompt_label = field_label(i18n.tr("studio-prompt-label"));
    let prompt_input = text_input(&i18n.tr("studio-prompt-placeholder"), &state.prompt)
        .on_input(Message::PromptChanged)
        .on_submit(Message::GeneratePressed)
        .padding(spacing::SM)
        .size(typography::BODY_LG);

    let style_label = field_label(i18n.tr("studio-style-label"));
    let style_picker = pick_list(
        &StyleKind::ALL[..],
        Some(state.style),
        Message::StyleSelected,
    )
    .width(Length::Fill)
    .padding(spacing::XS);

    let ratio_label = field_label(i18n.tr("studio-aspect-ratio-label"));
    let ratio_picker = pick_list(
        &AspectRatio::ALL[..],
        Some(state.aspect_ratio),
        Message::AspectRatioSelected,
    )
    .width(Length::Fill)
    .padding(spacing::XS);

    let device_label = field_label(i18n.tr("studio-device-label"));
    let device_picker = pick_list(
        &DeviceKind::ALL[..],
        Some(state.device),
        Message::DeviceSelected,
    )
    .width(Length::Fill)
    .padding(spacing::XS);

    // Generate stays disabled while a request is in flight; an empty prompt
    // is caught in the update loop so the user gets a visible warning.
    let generate_button = button(
        Text::new(if state.is_generating() {
            i18n.tr("studio-generate-busy")
        } else {
            i18n.tr("studio-generate")
        })
        .size(typography::BODY_LG),
    )
    .padding([spacing::SM, spacing::LG])
    .width(Length::Fill)
    .style(styles::button::primary)
    .on_press_maybe((!state.is_generating()).then_some(Message::GeneratePressed));

    let download_button = button(Text::new(i18n.tr("studio-download")).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(styles::button::unselected)
        .on_press_maybe(state.wallpaper().map(|_| Message::DownloadPressed));

    let fields = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(Column::new().spacing(spacing::XXS).push(prompt_label).push(prompt_input))
        .push(Column::new().spacing(spacing::XXS).push(style_label).push(style_picker))
        .push(Column::new().spacing(spacing::XXS).push(ratio_label).push(ratio_picker))
        .push(Column::new().spacing(spacing::XXS).push(device_label).push(device_picker))
        .push(generate_button)
        .push(download_button);

    Container::new(fields)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

fn preview<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    // Recomposed on every render; the resolver is cheap and stateless.
    let content = state.content_state();
    let scene = compose(state.device, content.clone());

    let mut painter = PhoneFrame::new(scene);
    if content.image_url().is_some() {
        if let Some(wallpaper) = state.wallpaper() {
            painter = painter.with_wallpaper(wallpaper.handle.clone(), wallpaper.width, wallpaper.height);
        }
    }

    let canvas_size = painter.canvas_size();
    let mut stack = Stack::new().push(painter.into_element());

    // The screen region is centered in the frame (uniform inset), so a
    // centered overlay lands exactly on the screen.
    let overlay: Option<Element<'a, Message>> = match content {
        ContentState::Loading => Some(loading_overlay(i18n, state.spinner_rotation())),
        ContentState::Empty => Some(empty_overlay(i18n)),
        ContentState::Image(_) => None,
    };

    if let Some(overlay) = overlay {
        stack = stack.push(
            Container::new(overlay)
                .width(Length::Fixed(canvas_size.width))
                .height(Length::Fixed(canvas_size.height))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        );
    }

    stack.into()
}

fn loading_overlay<'a>(i18n: &'a I18n, rotation: f32) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_400, rotation).into_element();

    let label = Text::new(i18n.tr("preview-generating"))
        .size(typography::BODY)
        .color(palette::GRAY_200);

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(label)
        .into()
}

fn empty_overlay(i18n: &I18n) -> Element<'_, Message> {
    let glyph = Text::new("✦")
        .size(sizing::ICON_XXL)
        .color(palette::GRAY_400);

    let title = Text::new(i18n.tr("preview-empty-title"))
        .size(typography::BODY_LG)
        .color(palette::GRAY_200);

    let hint = Text::new(i18n.tr("preview-empty-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(glyph)
        .push(title)
        .push(hint)
        .into()
}

fn field_label(label: String) -> Text<'static> {
    Text::new(label)
        .size(typography::CAPTION)
        .color(palette::GRAY_400)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;
    use std::sync::Arc;

    fn sample_wallpaper() -> Wallpaper {
        let bytes = vec![0_u8; 4];
        Wallpaper {
            url: "https://images.example/photo.webp".to_string(),
            handle: Handle::from_rgba(1, 1, bytes.clone()),
            bytes: Arc::new(bytes),
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn new_state_is_empty_and_idle() {
        let state = State::new();
        assert_eq!(state.content_state(), ContentState::Empty);
        assert!(!state.is_generating());
        assert!(state.wallpaper().is_none());
    }

    #[test]
    fn begin_request_switches_to_loading() {
        let mut state = State::new();
        let seq = state.begin_request();

        assert_eq!(seq, 1);
        assert!(state.is_generating());
        assert_eq!(state.content_state(), ContentState::Loading);
    }

    #[test]
    fn finishing_current_request_returns_to_previous_content() {
        let mut state = State::new();
        let seq = state.begin_request();

        assert!(state.finish_request(seq));
        assert_eq!(state.content_state(), ContentState::Empty);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = State::new();
        let first = state.begin_request();
        let second = state.begin_request();

        // The first request resolves after the second one started.
        assert!(!state.finish_request(first));
        assert!(state.is_generating(), "newer request should still be in flight");

        assert!(state.finish_request(second));
        assert!(!state.is_generating());
    }

    #[test]
    fn wallpaper_drives_image_content() {
        let mut state = State::new();
        let seq = state.begin_request();
        state.set_wallpaper(sample_wallpaper());
        state.finish_request(seq);

        assert_eq!(
            state.content_state(),
            ContentState::Image("https://images.example/photo.webp".to_string())
        );
    }

    #[test]
    fn loading_wins_over_existing_wallpaper() {
        let mut state = State::new();
        state.set_wallpaper(sample_wallpaper());
        let _ = state.begin_request();

        assert_eq!(state.content_state(), ContentState::Loading);
    }

    #[test]
    fn failed_request_keeps_prior_wallpaper() {
        let mut state = State::new();
        let seq = state.begin_request();
        state.set_wallpaper(sample_wallpaper());
        state.finish_request(seq);

        // A later request fails: content falls back to the existing image.
        let seq = state.begin_request();
        assert!(state.finish_request(seq));
        assert!(matches!(state.content_state(), ContentState::Image(_)));
    }

    #[test]
    fn spinner_advances_and_wraps() {
        let mut state = State::new();
        let initial = state.spinner_rotation();
        state.advance_spinner();
        assert!(state.spinner_rotation() > initial);

        for _ in 0..200 {
            state.advance_spinner();
        }
        assert!(state.spinner_rotation() < 2.0 * std::f32::consts::PI);
    }
}
