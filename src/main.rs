//! taskdeck - a terminal task board backed by a REST task service.
//!
//! This is the main binary that loads configuration, sets up logging, and
//! launches the TUI application.

use std::time::Duration;

use taskdeck_api::TaskApi;
use taskdeck_config::Config;
use taskdeck_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = Config::load()?;

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    let api = TaskApi::new(&config.api.base_url);
    let mut app = App::new(api, Duration::from_millis(config.toast.duration_ms));
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Routes tracing output to the file named by `TASKDECK_LOG`, if set.
///
/// Stdout belongs to the TUI, so without the variable no subscriber is
/// installed and log events are discarded. Filtering follows `RUST_LOG`.
fn init_tracing() -> anyhow::Result<()> {
    let Ok(path) = std::env::var("TASKDECK_LOG") else {
        return Ok(());
    };

    let file = std::fs::File::create(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(file)
        .with_ansi(false)
        .init();

    tracing::info!(log_file = %path, "tracing initialized");
    Ok(())
}
