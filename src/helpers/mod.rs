// SPDX-License-Identifier: MPL-2.0
//! Stateless page helpers.
//!
//! - [`clipboard`] - Clipboard backends
//! - [`export`] - Tables, CSV serialization and file output
//! - [`validation`] - Email and phone predicates
//! - [`format`] - Date, time and phone formatting
//! - [`debounce`] - Trailing-edge debouncing
//! - [`dialog`] - Native confirmation prompt

pub mod clipboard;
pub mod debounce;
pub mod dialog;
pub mod export;
pub mod format;
pub mod validation;

pub use clipboard::{ClipboardBackend, MemoryClipboard, SystemClipboard};
pub use debounce::{debounce, Debounced};
pub use dialog::confirm_action;
pub use export::{to_csv, Table, TableRegistry};
pub use format::{format_date, format_phone_number, format_timestamp};
pub use validation::{validate_email, validate_phone};
