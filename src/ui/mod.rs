// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`loading`] - Full-window loading overlay
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and dark-mode detection

pub mod design_tokens;
pub mod loading;
pub mod notifications;
pub mod theming;
pub mod widgets;
