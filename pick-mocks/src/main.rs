//! pick mocks - Component gallery for the selector
//!
//! Web by default; `--features desktop --no-default-features` opens a native window.

use pick_mocks::App;

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    init_logging();

    dioxus::launch(App);
}
