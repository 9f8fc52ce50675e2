// SPDX-License-Identifier: MPL-2.0
//! Demo window hosting a [`Toolkit`].
//!
//! The window shows a contact table and one control per helper: sample
//! toasts, a timed loading overlay, clipboard copy, CSV export, a confirmed
//! table reset, a debounced filter and the validation and formatting helpers.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::helpers::debounce::{debounce, Debounced};
use crate::helpers::dialog::confirm_action;
use crate::helpers::export::Table;
use crate::toolkit::{Toolkit, ToolkitOptions};
use crate::ui::notifications::Severity;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Identifier the contact table is registered under.
pub const CONTACTS_TABLE: &str = "contacts";

/// Quiet period before a filter edit is applied to the table.
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(300);

/// How long the demo keeps the loading overlay up.
pub const DEMO_LOADING_DURATION: Duration = Duration::from_secs(2);

const CONTACT_HEADER: [&str; 3] = ["Name", "Phone", "Email"];

const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;

type FilterDebounce = Debounced<String, Box<dyn FnMut(String)>>;

pub struct App {
    toolkit: Toolkit,
    theme_mode: ThemeMode,
    filter_input: String,
    applied_filter: Rc<RefCell<String>>,
    filter: FilterDebounce,
    email: String,
    phone: String,
    loading_until: Option<Instant>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("toolkit", &self.toolkit)
            .field("theme_mode", &self.theme_mode)
            .field("filter_input", &self.filter_input)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires an Fn boot closure while flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Rows shown on startup.
#[must_use]
pub fn sample_contacts() -> Table {
    Table::from_rows([
        CONTACT_HEADER.to_vec(),
        vec!["Ana Souza", "5511987654321", "ana@example.com"],
        vec!["Bruno Lima", "5521912345678", "bruno.lima@example.org"],
        vec!["Carla Dias", "(11) 3456-7890", "carla@example"],
        vec!["Diego Alves", "5531998877665", "diego@example.net"],
    ])
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            debug,
            config,
            config_warning,
        } = flags;
        let options = ToolkitOptions {
            lang,
            debug,
            ..ToolkitOptions::default()
        };
        let mut app = Self::with_toolkit(Toolkit::new(&config, options), config.general.theme_mode);

        if let Some(key) = config_warning {
            let message = app.toolkit.i18n().tr(&key);
            app.toolkit.notify(message, Severity::Warning);
        }

        (app, Task::none())
    }

    /// Builds the window state around an existing toolkit.
    #[must_use]
    pub fn with_toolkit(mut toolkit: Toolkit, theme_mode: ThemeMode) -> Self {
        toolkit.register_table(CONTACTS_TABLE, sample_contacts());

        let applied_filter = Rc::new(RefCell::new(String::new()));
        let target = Rc::clone(&applied_filter);
        let apply: Box<dyn FnMut(String)> = Box::new(move |value| *target.borrow_mut() = value);

        Self {
            toolkit,
            theme_mode,
            filter_input: String::new(),
            applied_filter,
            filter: debounce(apply, FILTER_DEBOUNCE),
            email: String::new(),
            phone: String::new(),
            loading_until: None,
        }
    }

    #[must_use]
    pub fn toolkit(&self) -> &Toolkit {
        &self.toolkit
    }

    /// Filter currently applied to the table, after debouncing.
    #[must_use]
    pub fn applied_filter(&self) -> String {
        self.applied_filter.borrow().clone()
    }

    fn title(&self) -> String {
        self.toolkit.i18n().tr("demo-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn is_animating(&self) -> bool {
        self.toolkit.is_animating() || self.filter.is_pending() || self.loading_until.is_some()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.is_animating())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if !matches!(message, Message::Tick(_)) {
            self.toolkit.debug_log(format_args!("{message:?}"));
        }

        match message {
            Message::Notification(notification) => {
                self.toolkit.handle_notification(&notification);
            }
            Message::Notify(severity) => {
                let i18n = self.toolkit.i18n();
                let kind = i18n.tr(&format!("demo-toast-{}", severity.as_str()));
                let text = i18n.tr_with_args("demo-toast-sample", &[("kind", kind.as_str())]);
                self.toolkit.notify(text, severity);
            }
            Message::ShowLoading => {
                let text = self.toolkit.i18n().tr("demo-loading-message");
                self.toolkit.show_loading(Some(&text));
                self.loading_until = Some(self.toolkit.now() + DEMO_LOADING_DURATION);
            }
            Message::CopyTable => {
                let csv = self
                    .toolkit
                    .table(CONTACTS_TABLE)
                    .map(Table::to_csv)
                    .unwrap_or_default();
                self.toolkit.copy_to_clipboard(&csv);
            }
            Message::ExportTable => {
                self.toolkit.export_table_to_csv(CONTACTS_TABLE, None);
            }
            Message::ExportTableAs => {
                let filename = self.toolkit.export_filename().to_string();
                let directory = self.toolkit.export_directory().to_path_buf();
                return Task::perform(
                    async move {
                        let mut dialog = rfd::AsyncFileDialog::new()
                            .set_file_name(&filename)
                            .add_filter("CSV", &["csv"]);
                        if directory.exists() {
                            dialog = dialog.set_directory(&directory);
                        }
                        dialog.save_file().await.map(|h| h.path().to_path_buf())
                    },
                    Message::ExportDialogResult,
                );
            }
            Message::ExportDialogResult(Some(path)) => {
                self.toolkit.export_table_to_path(CONTACTS_TABLE, &path);
            }
            Message::ExportDialogResult(None) | Message::ClearTableConfirmed(false) => {}
            Message::ClearTable => {
                let title = self.toolkit.i18n().tr("confirm-title");
                let question = self.toolkit.i18n().tr("demo-clear-confirm");
                return Task::perform(confirm_action(title, question), Message::ClearTableConfirmed);
            }
            Message::ClearTableConfirmed(true) => {
                self.toolkit
                    .register_table(CONTACTS_TABLE, Table::from_rows([CONTACT_HEADER]));
                let text = self.toolkit.i18n().tr("demo-table-cleared");
                self.toolkit.notify(text, Severity::Info);
            }
            Message::FilterChanged(value) => {
                self.filter_input.clone_from(&value);
                let now = self.toolkit.now();
                self.filter.call(now, value);
            }
            Message::EmailChanged(value) => self.email = value,
            Message::PhoneChanged(value) => self.phone = value,
            Message::Tick(_) => {
                let now = self.toolkit.now();
                self.toolkit.tick();
                self.filter.poll(now);
                if self.loading_until.is_some_and(|until| now >= until) {
                    self.loading_until = None;
                    self.toolkit.hide_loading();
                }
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toolkit: &self.toolkit,
            filter_input: &self.filter_input,
            applied_filter: self.applied_filter(),
            email: &self.email,
            phone: &self.phone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::Config;
    use crate::helpers::clipboard::MemoryClipboard;

    fn app() -> (App, ManualClock) {
        let clock = ManualClock::new();
        let options = ToolkitOptions::default()
            .with_lang("en-US")
            .with_clock(clock.clone())
            .with_clipboard(MemoryClipboard::new());
        let toolkit = Toolkit::new(&Config::default(), options);
        (App::with_toolkit(toolkit, ThemeMode::Light), clock)
    }

    fn tick(app: &mut App) {
        let _ = app.update(Message::Tick(Instant::now()));
    }

    #[test]
    fn contacts_are_registered_on_startup() {
        let (app, _clock) = app();
        let table = app.toolkit().table(CONTACTS_TABLE).expect("registered");
        assert_eq!(table.rows()[0], CONTACT_HEADER.map(String::from).to_vec());
        assert_eq!(table.rows().len(), 5);
    }

    #[test]
    fn filter_applies_after_quiet_period() {
        let (mut app, clock) = app();
        let _ = app.update(Message::FilterChanged("a".into()));
        clock.advance_ms(100);
        let _ = app.update(Message::FilterChanged("an".into()));
        clock.advance_ms(100);
        let _ = app.update(Message::FilterChanged("ana".into()));
        assert!(app.is_animating());

        clock.advance_ms(299);
        tick(&mut app);
        assert_eq!(app.applied_filter(), "");

        clock.advance_ms(1);
        tick(&mut app);
        assert_eq!(app.applied_filter(), "ana");
        assert!(!app.is_animating());
    }

    #[test]
    fn demo_loading_hides_itself() {
        let (mut app, clock) = app();
        let _ = app.update(Message::ShowLoading);
        assert!(app.toolkit().loading().is_visible());
        assert_eq!(app.toolkit().loading().message(), Some("Working on it..."));

        clock.advance(DEMO_LOADING_DURATION);
        tick(&mut app);
        assert!(!app.toolkit().loading().is_visible());
    }

    #[test]
    fn sample_toast_names_its_kind() {
        let (mut app, _clock) = app();
        let _ = app.update(Message::Notify(Severity::Warning));
        let note = app.toolkit().notifications().visible().next().expect("toast");
        assert_eq!(note.severity(), Severity::Warning);
        assert_eq!(note.message(), "This is a Warning message");
    }

    #[test]
    fn confirmed_clear_keeps_header_only() {
        let (mut app, _clock) = app();
        let _ = app.update(Message::ClearTableConfirmed(false));
        assert_eq!(app.toolkit().table(CONTACTS_TABLE).map(|t| t.rows().len()), Some(5));

        let _ = app.update(Message::ClearTableConfirmed(true));
        assert_eq!(app.toolkit().table(CONTACTS_TABLE).map(|t| t.rows().len()), Some(1));
    }

    #[test]
    fn copy_table_puts_csv_toast_on_screen() {
        let (mut app, _clock) = app();
        let _ = app.update(Message::CopyTable);
        let note = app.toolkit().notifications().visible().next().expect("toast");
        assert_eq!(note.severity(), Severity::Success);
    }
}
