//! Browser console logging.
//!
//! `tracing` events are formatted by `tracing-subscriber` and written to the
//! devtools console. Panics are forwarded to `console.error`.

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

static INIT: Once = Once::new();

/// Level used unless a more verbose build is requested.
pub const fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Install the panic hook and the console subscriber. Only the first call
/// has an effect.
pub fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_writer(MakeWebConsoleWriter::new());

        // Another subscriber may already be installed by a test harness.
        let _ = tracing_subscriber::registry()
            .with(default_level())
            .with(fmt_layer)
            .try_init();
    });
}
