use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tapcalc::calc::Calculator;
use tapcalc::config::Config;
use tapcalc::logging::{init_tracing, LogTarget};
use tapcalc::ui::app::{App, FAULT_TEXT};
use tapcalc::ui::input::char_intent;
use tapcalc::ui::runtime;

/// Keypad calculator for the terminal.
#[derive(Parser, Debug)]
#[command(name = "tapcalc", version, about)]
struct Args {
    /// Config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Type these keys, print the readout and exit (e.g. "2*3+4=").
    #[arg(long)]
    keys: Option<String>,

    /// Append logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let target = match (&args.log_file, &args.keys) {
        (Some(path), _) => LogTarget::File(path),
        (None, Some(_)) => LogTarget::Stderr,
        (None, None) => LogTarget::Off,
    };
    init_tracing(target).context("Failed to open log file")?;

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;
    tracing::info!(policy = ?config.engine, "Config loaded");

    let calculator = Calculator::new(config.engine);
    match args.keys {
        Some(keys) => type_keys(calculator, &keys),
        None => {
            let app = App::new(calculator, &config.ui);
            runtime::run(app, Duration::from_millis(config.ui.tick_rate_ms))
                .context("Terminal UI failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// One-shot mode: feed every character through the keypad bindings.
fn type_keys(mut calculator: Calculator, keys: &str) -> anyhow::Result<ExitCode> {
    for c in keys.chars().filter(|c| !c.is_whitespace()) {
        let Some(intent) = char_intent(c) else {
            bail!("Unknown key '{c}'");
        };
        // Faults latch inside the calculator; the readout reports them below.
        let _ = calculator.dispatch(intent);
    }

    if calculator.fault().is_some() {
        println!("{FAULT_TEXT}");
        return Ok(ExitCode::from(1));
    }
    println!("{}", calculator.display().text());
    Ok(ExitCode::SUCCESS)
}
