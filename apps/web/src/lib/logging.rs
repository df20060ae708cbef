//! Routes `tracing` output to the browser console through `tracing-wasm`,
//! which maps each level onto the matching `console` method.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// Debug builds log at `DEBUG`, release builds at `INFO`.
const fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Installs the console subscriber. Call once, before mounting the app.
pub fn init() {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level())
        .set_report_logs_in_timings(false)
        .build();

    tracing_wasm::set_as_global_default_with_config(config);
}
