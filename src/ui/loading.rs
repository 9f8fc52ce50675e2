// SPDX-License-Identifier: MPL-2.0
//! Full-window loading overlay.
//!
//! The overlay node is created on the first request to show it and is never
//! destroyed afterwards, only hidden. Visibility is a single flag: overlapping
//! loading scopes are not reference counted, the last call wins.

use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{container, opaque, text, Column, Container, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};
use std::f32::consts::TAU;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
struct OverlayNode {
    visible: bool,
    message: String,
}

/// Loading overlay state.
#[derive(Debug, Clone, Default)]
pub struct LoadingOverlay {
    node: Option<OverlayNode>,
    spinner_rotation: f32,
}

impl LoadingOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the overlay if needed, sets its message and shows it.
    pub fn show(&mut self, message: impl Into<String>) {
        let message = message.into();
        match self.node.as_mut() {
            Some(node) => {
                node.message = message;
                node.visible = true;
            }
            None => {
                self.node = Some(OverlayNode {
                    visible: true,
                    message,
                });
            }
        }
    }

    /// Hides the overlay. Does nothing if it was never created.
    ///
    /// Returns `true` if a visible overlay was hidden.
    pub fn hide(&mut self) -> bool {
        match self.node.as_mut() {
            Some(node) if node.visible => {
                node.visible = false;
                self.spinner_rotation = 0.0;
                true
            }
            _ => false,
        }
    }

    /// Whether the overlay node has been created.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.node.is_some()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.node.as_ref().is_some_and(|node| node.visible)
    }

    /// Current message, including while hidden.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.node.as_ref().map(|node| node.message.as_str())
    }

    /// Animates the spinner while the overlay is visible.
    pub fn spinner_tick(&mut self) {
        if self.is_visible() {
            self.spinner_rotation = (self.spinner_rotation + SPINNER_SPEED) % TAU;
        }
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Renders the overlay, or an empty element when hidden.
    ///
    /// The visible overlay captures all pointer input so widgets underneath
    /// cannot be used while loading.
    pub fn view<'a, Message: 'static>(&'a self) -> Element<'a, Message> {
        let Some(node) = self.node.as_ref().filter(|node| node.visible) else {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let message = Text::new(node.message.as_str())
            .size(typography::LOADING_MESSAGE)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::SLATE_700),
            });

        let card = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(AnimatedSpinner::new(self.spinner_rotation).into_element())
                .push(message),
        )
        .max_width(sizing::LOADING_CARD_WIDTH)
        .padding(spacing::LG)
        .style(card_style);

        let backdrop = Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(backdrop_style);

        opaque(backdrop)
    }
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(palette::SLATE_700),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_overlay_does_not_exist() {
        let overlay = LoadingOverlay::new();
        assert!(!overlay.exists());
        assert!(!overlay.is_visible());
        assert!(overlay.message().is_none());
    }

    #[test]
    fn show_creates_and_displays() {
        let mut overlay = LoadingOverlay::new();
        overlay.show("Saving");
        assert!(overlay.exists());
        assert!(overlay.is_visible());
        assert_eq!(overlay.message(), Some("Saving"));
    }

    #[test]
    fn repeated_show_updates_message() {
        let mut overlay = LoadingOverlay::new();
        overlay.show("X");
        overlay.show("Y");
        assert!(overlay.is_visible());
        assert_eq!(overlay.message(), Some("Y"));
    }

    #[test]
    fn hide_without_overlay_is_noop() {
        let mut overlay = LoadingOverlay::new();
        assert!(!overlay.hide());
        assert!(!overlay.exists());
    }

    #[test]
    fn hide_keeps_node() {
        let mut overlay = LoadingOverlay::new();
        overlay.show("Working");
        assert!(overlay.hide());
        assert!(!overlay.hide(), "second hide is a no-op");
        assert!(overlay.exists());
        assert!(!overlay.is_visible());
        assert_eq!(overlay.message(), Some("Working"));
    }

    #[test]
    fn spinner_only_moves_while_visible() {
        let mut overlay = LoadingOverlay::new();
        overlay.spinner_tick();
        assert_eq!(overlay.spinner_rotation(), 0.0);

        overlay.show("Working");
        overlay.spinner_tick();
        assert!(overlay.spinner_rotation() > 0.0);

        overlay.hide();
        assert_eq!(overlay.spinner_rotation(), 0.0);
    }

    #[test]
    fn view_renders_in_both_states() {
        let mut overlay = LoadingOverlay::new();
        let _: Element<'_, ()> = overlay.view();
        overlay.show("Working");
        let _: Element<'_, ()> = overlay.view();
    }
}
