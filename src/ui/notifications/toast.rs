// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are solid cards filled with the severity color and white text,
//! stacked in the top-right corner. Entering and leaving toasts fade with
//! their transition progress.

use super::manager::{Manager, Message};
use super::notification::{Notification, Phase};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Shadow, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification in the given phase.
    pub fn view(notification: &Notification, phase: Phase) -> Element<'_, Message> {
        let accent = notification.severity().color();
        let alpha = phase.visibility();

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..palette::WHITE
                }),
            });

        let dismiss_button = button(Text::new("\u{00d7}").size(sizing::ICON_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XXS])
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

        let content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding([spacing::SM, spacing::MD])
            .style(move |_theme: &Theme| toast_container_style(accent, alpha))
            .into()
    }

    /// Renders all toasts still on screen at `now`, stacked top-right.
    pub fn view_overlay(manager: &Manager, now: Instant) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager
            .visible_at(now)
            .map(|(notification, phase)| Self::view(notification, phase))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Style function for the toast card.
fn toast_container_style(accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..accent })),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color {
                a: shadow::TOAST.color.a * alpha,
                ..shadow::TOAST.color
            },
            ..shadow::TOAST
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_alpha = match status {
        button::Status::Hovered | button::Status::Pressed => alpha,
        button::Status::Active | button::Status::Disabled => alpha * 0.8,
    };

    button::Style {
        background: None,
        text_color: Color {
            a: text_alpha,
            ..palette::WHITE
        },
        ..button::Style::default()
    }
}
