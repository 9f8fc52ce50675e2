// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo window.

use crate::config::Config;
use crate::ui::notifications::{NotificationMessage, Severity};
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(NotificationMessage),
    /// Raise a sample toast of the given severity.
    Notify(Severity),
    /// Show the loading overlay for a fixed time.
    ShowLoading,
    CopyTable,
    ExportTable,
    /// Pick a destination with a save dialog, then export.
    ExportTableAs,
    ExportDialogResult(Option<PathBuf>),
    ClearTable,
    ClearTableConfirmed(bool),
    FilterChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Enables `[DEBUG]` records regardless of the config file.
    pub debug: bool,
    /// Settings loaded before logging was initialized.
    pub config: Config,
    /// i18n key describing why `config` fell back to defaults.
    pub config_warning: Option<String>,
}
