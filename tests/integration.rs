// SPDX-License-Identifier: MPL-2.0
use pagekit::clock::ManualClock;
use pagekit::config::{self, Config};
use pagekit::helpers::clipboard::MemoryClipboard;
use pagekit::{
    debounce, format_phone_number, to_csv, validate_email, validate_phone, Severity, Table,
    Toolkit, ToolkitOptions,
};
use std::cell::RefCell;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn toolkit_with(config: &Config, lang: &str) -> (Toolkit, ManualClock) {
    let clock = ManualClock::new();
    let options = ToolkitOptions::default()
        .with_lang(lang)
        .with_clock(clock.clone())
        .with_clipboard(MemoryClipboard::new());
    (Toolkit::new(config, options), clock)
}

fn toasts(toolkit: &Toolkit) -> Vec<(Severity, String)> {
    toolkit
        .notifications()
        .visible()
        .map(|n| (n.severity(), n.message().to_string()))
        .collect()
}

#[test]
fn severity_colors_and_fallback() {
    assert_eq!(Severity::parse("success").hex(), "#10b981");
    assert_eq!(Severity::parse("error").hex(), "#ef4444");
    assert_eq!(Severity::parse("warning").hex(), "#f59e0b");
    assert_eq!(Severity::parse("info").hex(), "#3b82f6");
    assert_eq!(Severity::parse("bogus"), Severity::Info);
}

#[test]
fn toast_visible_until_display_ends_and_gone_after_transition() {
    let (mut toolkit, clock) = toolkit_with(&Config::default(), "en-US");
    toolkit.notify("Saved", Severity::Success);

    for _ in 0..29 {
        clock.advance_ms(100);
        toolkit.tick();
        assert_eq!(toolkit.notifications().visible_count(), 1);
    }

    clock.advance_ms(399);
    toolkit.tick();
    assert_eq!(toolkit.notifications().visible_count(), 1);

    clock.advance_ms(1);
    toolkit.tick();
    assert_eq!(toolkit.notifications().visible_count(), 0);
}

#[test]
fn loading_overlay_is_single_and_last_message_wins() {
    let (mut toolkit, _clock) = toolkit_with(&Config::default(), "en-US");

    toolkit.set_loading(false, None);
    assert!(!toolkit.loading().exists());

    toolkit.set_loading(true, Some("X"));
    toolkit.set_loading(true, Some("Y"));
    assert!(toolkit.loading().is_visible());
    assert_eq!(toolkit.loading().message(), Some("Y"));

    toolkit.set_loading(false, None);
    toolkit.set_loading(false, None);
    assert!(!toolkit.loading().is_visible());
}

#[test]
fn validation_samples() {
    assert!(validate_email("a@b.co"));
    assert!(!validate_email("a@b"));
    assert!(!validate_email("a b@c.d"));

    assert!(validate_phone("(11) 98765-4321"));
    assert!(!validate_phone("123"));
    assert!(!validate_phone("12345678901234"));

    assert_eq!(format_phone_number("5511987654321"), "+55 (11) 98765-4321");
    assert_eq!(format_phone_number("123"), "123");
}

#[test]
fn csv_format() {
    let rows = vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["c".to_string(), "d".to_string()],
    ];
    assert_eq!(to_csv(&rows), "\"a\",\"b\"\n\"c\",\"d\"");
}

#[test]
fn debounce_burst_calls_once_with_last_argument() {
    let calls = RefCell::new(Vec::new());
    let mut debounced = debounce(|n: u32| calls.borrow_mut().push(n), Duration::from_millis(200));
    let t0 = Instant::now();

    for (offset, n) in [(0, 1), (50, 2), (100, 3)] {
        debounced.call(t0 + Duration::from_millis(offset), n);
    }
    debounced.poll(t0 + Duration::from_millis(299));
    debounced.poll(t0 + Duration::from_millis(300));
    debounced.poll(t0 + Duration::from_millis(600));
    drop(debounced);

    assert_eq!(calls.into_inner(), vec![3]);
}

#[test]
fn export_round_trip_through_config_directory() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let export_dir = dir.path().join("exports");
    std::fs::create_dir_all(&export_dir).expect("Failed to create export dir");

    let mut config = Config::default();
    config.export.directory = Some(export_dir.clone());
    config.export.default_filename = Some("people.csv".to_string());
    let config_path = dir.path().join("settings.toml");
    config::save_to_path(&config, &config_path).expect("Failed to save config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");

    let (mut toolkit, _clock) = toolkit_with(&loaded, "en-US");
    toolkit.register_table("people", Table::from_rows([["Name"], ["Ana"]]));

    let path = toolkit
        .export_table_to_csv("people", None)
        .expect("export should succeed");
    assert_eq!(path, export_dir.join("people.csv"));
    assert_eq!(
        std::fs::read_to_string(path).expect("Failed to read export"),
        "\"Name\"\n\"Ana\""
    );
}

#[test]
fn failures_are_reported_in_the_configured_language() {
    let mut config = Config::default();
    config.general.language = Some("pt-BR".to_string());
    let dir = tempdir().expect("Failed to create temporary directory");
    config.export.directory = Some(dir.path().to_path_buf());

    let clock = ManualClock::new();
    let options = ToolkitOptions::default()
        .with_clock(clock)
        .with_clipboard(MemoryClipboard::denied());
    let mut toolkit = Toolkit::new(&config, options);

    assert!(toolkit.export_table_to_csv("missing", None).is_none());
    assert!(!toolkit.copy_to_clipboard("text"));

    assert_eq!(
        toasts(&toolkit),
        [
            (Severity::Error, "Tabela não encontrada".to_string()),
            (Severity::Error, "Erro ao copiar".to_string()),
        ]
    );
}

#[test]
fn invalid_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[notifications\nbroken")
        .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
