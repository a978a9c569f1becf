//! Contact Book - main entry point
//!
//! Runs the assistant bot on stdin/stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use contact_book::{run_repl, Assistant, CliArgs, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Logging is not up yet, anyhow reports a failure on stderr
    let config = Config::from_env()
        .and_then(|cfg| cfg.with_args(&args))
        .context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        window_days = config.birthday_policy.window_days,
        wrap_year_end = config.birthday_policy.wrap_year_end,
        "Starting contact book assistant"
    );

    let mut assistant = Assistant::new(config);
    let stdin = io::stdin();
    if let Err(e) = run_repl(&mut assistant, stdin.lock(), io::stdout().lock()) {
        error!("Session ended with I/O error: {}", e);
        return Err(e.into());
    }

    info!(contacts = assistant.book().len(), "Session finished");
    Ok(())
}
