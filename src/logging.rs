//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// No subscriber is installed.
    Off,
    Stderr,
    /// Appended to a file; used while the keypad owns the terminal.
    File(&'a Path),
}

/// Installs the global subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing(target: LogTarget<'_>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => builder.with_writer(io::stderr).init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
    }
    Ok(())
}
