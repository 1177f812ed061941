// SPDX-License-Identifier: MPL-2.0
//! About screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {}

/// Context required to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the about screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let name = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG);

    let version = Text::new(format!("v{}", env!("CARGO_PKG_VERSION")))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let description = Text::new(ctx.i18n.tr("about-description")).size(typography::BODY);

    let repository = Text::new(env!("CARGO_PKG_REPOSITORY"))
        .size(typography::BODY_SM)
        .color(palette::PRIMARY_400);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(name)
        .push(version)
        .push(description)
        .push(repository);

    Container::new(
        Container::new(content)
            .width(Length::Fixed(sizing::FORM_WIDTH + sizing::ICON_XXL))
            .padding(spacing::XL)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
