#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Each test binary uses a different subset

use std::sync::Once;

use tracing::Level;
use wordmaster::LogLevel;

/// Sample text shipped with the original web tool.
pub const SAMPLE: &str = include_str!("../fixtures/sample.txt");

/// Route engine logs into `tracing` and install a test subscriber.
///
/// Run with `RUST_LOG`-style verbosity via `--nocapture` to see them.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_test_writer()
            .try_init();

        wordmaster::set_log_callback(|level, msg| match level {
            LogLevel::Debug => tracing::debug!(target: "wordmaster", "{msg}"),
            LogLevel::Info => tracing::info!(target: "wordmaster", "{msg}"),
            LogLevel::Warn => tracing::warn!(target: "wordmaster", "{msg}"),
            LogLevel::Error => tracing::error!(target: "wordmaster", "{msg}"),
        });
    });
}

/// A text made of `count` sentences of `words` words each.
pub fn sentences(count: usize, words: usize) -> String {
    (0..count)
        .map(|i| {
            let body = vec![format!("w{i}"); words].join(" ");
            format!("{body}.")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
