// SPDX-License-Identifier: MPL-2.0
//! `pagekit` is a small toolkit of page helpers for Iced applications.
//!
//! It provides self-dismissing toast notifications, a blocking loading
//! overlay, clipboard copy and CSV export with user feedback, input
//! validation, locale-aware formatting and debouncing. A [`Toolkit`] owns
//! the state of one window; the demo binary shows every helper in use.

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod logging;
pub mod toolkit;
pub mod ui;

pub use error::{Error, Result};
pub use helpers::{
    confirm_action, debounce, format_date, format_phone_number, format_timestamp, to_csv,
    validate_email, validate_phone, Table,
};
pub use toolkit::{Toolkit, ToolkitOptions};
pub use ui::notifications::Severity;
pub use ui::theming::is_dark_mode;
