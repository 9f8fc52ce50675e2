// SPDX-License-Identifier: MPL-2.0
//! Logging setup using tracing.

use tracing::Level;
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

/// Target used for records emitted by [`DebugLogger`].
pub const DEBUG_TARGET: &str = "pagekit::debug";

/// Builds the level filter used by [`init`].
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` when `debug`
/// is set and `info` otherwise. Records on [`DEBUG_TARGET`] always pass, so a
/// [`DebugLogger`] enabled from the config file is never filtered out.
#[must_use]
pub fn filter(debug: bool) -> EnvFilter {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match format!("{DEBUG_TARGET}=debug").parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Initializes the global tracing subscriber. Calling this twice is harmless.
pub fn init(debug: bool) {
    let filter = filter(debug);
    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    // A subscriber may already be installed (tests, embedding hosts).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Conditional debug logger.
///
/// Records are only emitted when the logger was created enabled, which the
/// toolkit derives from the `[debug]` config section or the `--debug` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugLogger {
    enabled: bool,
}

impl DebugLogger {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Emits `message` with a `[DEBUG]` prefix if enabled.
    ///
    /// Returns whether the installed subscriber accepted the record.
    pub fn log(self, message: impl std::fmt::Display) -> bool {
        if !self.enabled {
            return false;
        }
        tracing::debug!(target: DEBUG_TARGET, "[DEBUG] {message}");
        tracing::enabled!(target: DEBUG_TARGET, Level::DEBUG)
    }
}
