// SPDX-License-Identifier: MPL-2.0
//! The page toolkit service.
//!
//! A [`Toolkit`] owns the toast stack, the loading overlay, the table
//! registry and the clipboard backend of one host window. Helpers that can
//! fail never return errors to the caller: they report the outcome as a
//! toast and hand back a plain success value.

use crate::clock::{Clock, SystemClock};
use crate::config::{
    Config, DEFAULT_EXPORT_FILENAME, DEFAULT_TOAST_DISPLAY_MS, DEFAULT_TOAST_TRANSITION_MS,
};
use crate::error::{Error, Result};
use crate::helpers::clipboard::{ClipboardBackend, SystemClipboard};
use crate::helpers::export::{write_atomic, Table, TableRegistry};
use crate::helpers::format;
use crate::i18n::I18n;
use crate::logging::DebugLogger;
use crate::ui::loading::LoadingOverlay;
use crate::ui::notifications::{
    Manager, NotificationId, NotificationMessage, Severity, Toast, ToastTiming,
};
use iced::Element;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Host-provided overrides applied on top of the loaded [`Config`].
pub struct ToolkitOptions {
    /// Language requested on the command line.
    pub lang: Option<String>,
    /// Forces debug logging on regardless of the config file.
    pub debug: bool,
    pub clock: Arc<dyn Clock>,
    pub clipboard: Box<dyn ClipboardBackend>,
}

impl Default for ToolkitOptions {
    fn default() -> Self {
        Self {
            lang: None,
            debug: false,
            clock: Arc::new(SystemClock),
            clipboard: Box::new(SystemClipboard::new()),
        }
    }
}

impl ToolkitOptions {
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    #[must_use]
    pub fn with_clipboard(mut self, clipboard: impl ClipboardBackend + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }
}

impl std::fmt::Debug for ToolkitOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolkitOptions")
            .field("lang", &self.lang)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

pub struct Toolkit {
    notifications: Manager,
    loading: LoadingOverlay,
    tables: TableRegistry,
    clipboard: Box<dyn ClipboardBackend>,
    clock: Arc<dyn Clock>,
    i18n: I18n,
    debug: DebugLogger,
    export_directory: PathBuf,
    export_filename: String,
    loading_message: Option<String>,
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new(&Config::default(), ToolkitOptions::default())
    }
}

impl std::fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolkit")
            .field("notifications", &self.notifications)
            .field("loading", &self.loading)
            .field("tables", &self.tables)
            .field("i18n", &self.i18n)
            .field("debug", &self.debug)
            .field("export_directory", &self.export_directory)
            .field("export_filename", &self.export_filename)
            .finish_non_exhaustive()
    }
}

impl Toolkit {
    #[must_use]
    pub fn new(config: &Config, options: ToolkitOptions) -> Self {
        let timing = ToastTiming::from_millis(
            config
                .notifications
                .display_ms
                .unwrap_or(DEFAULT_TOAST_DISPLAY_MS),
            config
                .notifications
                .transition_ms
                .unwrap_or(DEFAULT_TOAST_TRANSITION_MS),
        );

        Self {
            notifications: Manager::with_timing(timing),
            loading: LoadingOverlay::new(),
            tables: TableRegistry::new(),
            clipboard: options.clipboard,
            clock: options.clock,
            i18n: I18n::new(options.lang, config),
            debug: DebugLogger::new(options.debug || config.debug.enabled),
            export_directory: config.export.directory(),
            export_filename: config.export.default_filename().to_string(),
            loading_message: config
                .loading
                .message
                .clone()
                .filter(|message| !message.trim().is_empty()),
        }
    }

    /// Current instant according to the toolkit clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    // ---------------------------------------------------------------------
    // Notifications
    // ---------------------------------------------------------------------

    /// Shows a toast that leaves on its own after the display duration.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let now = self.clock.now();
        self.notifications.notify(message, severity, now)
    }

    /// Like [`Toolkit::notify`] with a severity name; unknown names mean info.
    pub fn notify_kind(&mut self, message: impl Into<String>, kind: &str) -> NotificationId {
        self.notify(message, Severity::parse(kind))
    }

    /// Starts the exit of a toast now. Returns `false` if it is gone or leaving.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        self.notifications.dismiss(id, now)
    }

    pub fn handle_notification(&mut self, message: &NotificationMessage) {
        let now = self.clock.now();
        self.notifications.handle_message(message, now);
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    // ---------------------------------------------------------------------
    // Loading overlay
    // ---------------------------------------------------------------------

    /// Shows or hides the loading overlay.
    ///
    /// Showing creates the overlay on first use and replaces its message.
    /// Hiding never creates it.
    pub fn set_loading(&mut self, show: bool, message: Option<&str>) {
        if show {
            let message = message
                .map(str::to_string)
                .unwrap_or_else(|| self.default_loading_message());
            self.loading.show(message);
        } else {
            self.loading.hide();
        }
    }

    pub fn show_loading(&mut self, message: Option<&str>) {
        self.set_loading(true, message);
    }

    pub fn hide_loading(&mut self) {
        self.set_loading(false, None);
    }

    #[must_use]
    pub fn loading(&self) -> &LoadingOverlay {
        &self.loading
    }

    fn default_loading_message(&self) -> String {
        self.loading_message
            .clone()
            .unwrap_or_else(|| self.i18n.tr("loading-default"))
    }

    // ---------------------------------------------------------------------
    // Clipboard and export
    // ---------------------------------------------------------------------

    /// Copies `text` and reports the outcome as a toast.
    pub fn copy_to_clipboard(&mut self, text: &str) -> bool {
        match self.clipboard.write_text(text) {
            Ok(()) => {
                self.notify(self.i18n.tr("notification-copied"), Severity::Success);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "clipboard write failed");
                self.report_error(&err);
                false
            }
        }
    }

    /// Registers `table` for export, replacing any table with the same id.
    pub fn register_table(&mut self, id: impl Into<String>, table: Table) {
        self.tables.register(id, table);
    }

    pub fn remove_table(&mut self, id: &str) -> Option<Table> {
        self.tables.remove(id)
    }

    #[must_use]
    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.get(id)
    }

    /// Exports a registered table as CSV into the export directory.
    ///
    /// Only the final component of `filename` is used, so the file always
    /// lands in the export directory. Missing or unusable names fall back to
    /// the configured default. Returns the written path, or `None` after an
    /// error toast.
    pub fn export_table_to_csv(&mut self, table_id: &str, filename: Option<&str>) -> Option<PathBuf> {
        let filename = filename
            .and_then(bare_file_name)
            .or_else(|| bare_file_name(&self.export_filename))
            .unwrap_or_else(|| OsStr::new(DEFAULT_EXPORT_FILENAME));
        let path = self.export_directory.join(filename);

        self.export_table_to_path(table_id, &path).then_some(path)
    }

    /// Exports a registered table as CSV to an explicit `path`.
    pub fn export_table_to_path(&mut self, table_id: &str, path: &Path) -> bool {
        match self.write_table(table_id, path) {
            Ok(()) => {
                tracing::info!(table = table_id, path = %path.display(), "table exported");
                self.notify(self.i18n.tr("notification-exported"), Severity::Success);
                true
            }
            Err(err) => {
                tracing::warn!(table = table_id, path = %path.display(), %err, "export failed");
                self.report_error(&err);
                false
            }
        }
    }

    fn write_table(&self, table_id: &str, path: &Path) -> Result<()> {
        let csv = self.tables.csv(table_id)?;
        write_atomic(path, &csv)?;
        Ok(())
    }

    #[must_use]
    pub fn export_directory(&self) -> &Path {
        &self.export_directory
    }

    #[must_use]
    pub fn export_filename(&self) -> &str {
        &self.export_filename
    }

    fn report_error(&mut self, err: &Error) {
        let reason = err.to_string();
        let message = self
            .i18n
            .tr_with_args(err.i18n_key(), &[("reason", reason.as_str())]);
        self.notify(message, Severity::Error);
    }

    // ---------------------------------------------------------------------
    // Debug, locale and formatting
    // ---------------------------------------------------------------------

    /// Emits a `[DEBUG]` record when debug logging is enabled.
    pub fn debug_log(&self, message: impl std::fmt::Display) -> bool {
        self.debug.log(message)
    }

    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.debug.is_enabled()
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Switches the language of toolkit texts. Unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        self.i18n.set_locale(locale)
    }

    #[must_use]
    pub fn locale(&self) -> &LanguageIdentifier {
        self.i18n.current_locale()
    }

    #[must_use]
    pub fn format_timestamp_now(&self) -> String {
        format::format_timestamp_now(self.locale())
    }

    #[must_use]
    pub fn format_date_now(&self) -> String {
        format::format_date_now(self.locale())
    }

    // ---------------------------------------------------------------------
    // Frame driving and rendering
    // ---------------------------------------------------------------------

    /// Advances timed state to the current instant.
    ///
    /// Removes finished toasts and spins the loading indicator. Returns the
    /// number of toasts removed.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        if self.loading.is_visible() {
            self.loading.spinner_tick();
        }
        self.notifications.tick(now)
    }

    /// Whether anything on screen is still animating or waiting on a deadline.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.notifications.has_notifications() || self.loading.is_visible()
    }

    pub fn view_toasts(&self) -> Element<'_, NotificationMessage> {
        Toast::view_overlay(&self.notifications, self.clock.now())
    }

    pub fn view_loading<Message: 'static>(&self) -> Element<'_, Message> {
        self.loading.view()
    }
}

/// Last path component of `name`, or `None` for empty names, `..` and roots.
fn bare_file_name(name: &str) -> Option<&OsStr> {
    Path::new(name.trim()).file_name()
}
