// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Shows the app name plus either the screen-switch actions (on the studio
//! screen) or a back action (everywhere else).

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, space, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the navigation bar.
#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
    OpenSettings,
    OpenAbout,
}

/// Context required to render the navigation bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
}

/// Renders the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let mut bar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(space::horizontal());

    if ctx.screen == Screen::Studio {
        bar = bar
            .push(nav_button(ctx.i18n.tr("navbar-settings"), Message::OpenSettings))
            .push(nav_button(ctx.i18n.tr("navbar-about"), Message::OpenAbout));
    } else {
        bar = bar.push(nav_button(ctx.i18n.tr("navbar-back"), Message::BackPressed));
    }

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .into()
}

fn nav_button(label: String, message: Message) -> Element<'static, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected)
        .on_press(message)
        .into()
}
