// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen below the navigation bar and stacks the toast
//! overlay on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::studio::{self, ViewContext as StudioViewContext};
use crate::ui::theming::ThemeMode;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub studio: &'a studio::State,
    pub settings: &'a settings::State,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen_content: Element<'_, Message> = match ctx.screen {
        Screen::Studio => studio::view(StudioViewContext {
            i18n: ctx.i18n,
            state: ctx.studio,
        })
        .map(Message::Studio),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n: ctx.i18n,
            state: ctx.settings,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Settings),
        Screen::About => about::view(AboutViewContext { i18n: ctx.i18n }).map(Message::About),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
    })
    .map(Message::Navbar);

    let page = Column::new().push(navbar_view).push(
        Container::new(screen_content)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}
