// SPDX-License-Identifier: MPL-2.0
use pagekit::clock::ManualClock;
use pagekit::config::Config;
use pagekit::helpers::clipboard::MemoryClipboard;
use pagekit::logging::{self, DEBUG_TARGET};
use pagekit::{Toolkit, ToolkitOptions};

#[test]
fn config_debug_flag_reaches_subscriber_without_cli_flag() {
    logging::init(false);

    let mut config = Config::default();
    config.debug.enabled = true;
    let options = ToolkitOptions::default()
        .with_clock(ManualClock::new())
        .with_clipboard(MemoryClipboard::new());
    let toolkit = Toolkit::new(&config, options);

    assert!(toolkit.is_debug());
    assert!(tracing::enabled!(target: DEBUG_TARGET, tracing::Level::DEBUG));
    assert!(toolkit.debug_log("hello"));
}
