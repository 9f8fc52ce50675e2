// SPDX-License-Identifier: MPL-2.0
use pagekit::app::{self, Flags};
use pagekit::config::{self, paths};
use pagekit::logging;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let debug = args.contains("--debug");
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("Ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            eprintln!("Ignoring --config-dir: {err}");
            None
        });

    paths::init_cli_overrides(config_dir);
    let (config, config_warning) = config::load();

    logging::init(debug || config.debug.enabled);
    for extra in args.finish() {
        tracing::warn!(argument = ?extra, "ignoring unknown argument");
    }
    if let Some(key) = &config_warning {
        tracing::warn!(key, "settings file could not be loaded, using defaults");
    }

    app::run(Flags {
        lang,
        debug,
        config,
        config_warning,
    })
}
