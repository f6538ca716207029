use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use money_cli::config::{ConfigOverrides, SymbolSide, load_config};
use money_cli::{logging, replay, script};
use money_core::{MoneyInput, RecordingListener};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Replay keystrokes against a two-field money input.
///
/// Seeds the input from the config file and flags, applies every event in
/// the script and prints the display and any emitted value after each one.
#[derive(Debug, Parser)]
#[command(name = "money-input")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with symbol, symbol_position, locale, default_integer and default_float
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV event script (columns: field,event,text)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Locale used for integer grouping (e.g. en-US, de-DE, en-IN)
    #[arg(long)]
    locale: Option<String>,

    /// Currency symbol
    #[arg(long)]
    symbol: Option<String>,

    /// Side of the amount the symbol is drawn on; defaults to the config file's value
    #[arg(long, value_enum)]
    symbol_position: Option<SymbolSide>,

    /// Initial integer digits
    #[arg(long)]
    default_integer: Option<String>,

    /// Initial fraction digits
    #[arg(long)]
    default_float: Option<String>,

    /// Log filter, overrides RUST_LOG (e.g. debug, money_core=trace)
    #[arg(long)]
    log_level: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init_logging("info");

    let cli = Cli::parse();
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }

    let overrides = ConfigOverrides {
        symbol: cli.symbol,
        symbol_position: cli.symbol_position.map(Into::into),
        locale: cli.locale,
        default_integer: cli.default_integer,
        default_float: cli.default_float,
    };
    let config = overrides.apply(
        load_config(cli.config.as_deref())
            .with_context(|| "Failed to load money input configuration")?,
    );
    debug!(?config, "configuration resolved");

    let mut input = MoneyInput::new(config, RecordingListener::default());
    println!("  0  {:<28} display={}", "initial", input.snapshot());

    if let Some(path) = &cli.script {
        let events = script::load_from_file(path)
            .with_context(|| format!("Failed to load script: {}", path.display()))?;
        info!(events = events.len(), "replaying {}", path.display());

        for step in replay::replay(&mut input, &events) {
            println!("{step}");
        }
    }

    println!("value:   {:?}", input.value());
    match input.to_decimal() {
        Ok(amount) => println!("decimal: {amount}"),
        Err(e) => println!("decimal: unavailable ({e})"),
    }
    println!("emitted: {:?}", input.listener().values());

    Ok(())
}
