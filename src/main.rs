// src/main.rs

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tscribe::cli::Cli;
use tscribe::config::{Config, ConfigBuilder};
use tscribe::diagnostics::Diagnostics;
use tscribe::errors::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const EXIT_RUNTIME: i32 = 1;
const EXIT_STARTUP: i32 = 2;
const EXIT_INTERRUPTED: i32 = 130;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI flags pick the level while the config file is read; the filter is
    // swapped once the merged options are known.
    let log_filter = init_logging(Diagnostics::new(cli.quiet, cli.verbose))?;

    let config_path = cli.config.clone();
    let config = match ConfigBuilder::from_cli(cli)
        .load_config_file(config_path.as_deref())
        .and_then(ConfigBuilder::build)
    {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };
    log_filter.reload(env_filter(config.diagnostics)?)?;
    config.diagnostics.debug("Configuration built successfully.");

    if let Err(e) = execute(&config) {
        exit_with(e);
    }
    Ok(())
}

fn env_filter(diag: Diagnostics) -> Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive(diag.default_filter(env!("CARGO_CRATE_NAME")).parse()?))
}

fn init_logging(diag: Diagnostics) -> Result<reload::Handle<EnvFilter, Registry>> {
    let (filter, handle) = reload::Layer::new(env_filter(diag)?);
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .without_time()
                .with_target(false),
        )
        .init();
    Ok(handle)
}

#[cfg(feature = "watch")]
fn execute(config: &Config) -> Result<(), Error> {
    if config.watch {
        let token = tscribe::signal::setup_signal_handler()?;
        return tscribe::watch::watch(config, &token);
    }
    tscribe::run(config).map(|_| ())
}

#[cfg(not(feature = "watch"))]
fn execute(config: &Config) -> Result<(), Error> {
    if config.watch {
        log::warn!("Watch mode is not available in this build; running once.");
    }
    tscribe::run(config).map(|_| ())
}

fn exit_with(e: Error) -> ! {
    match e {
        Error::Interrupted => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(EXIT_INTERRUPTED);
        }
        e if e.is_startup_failure() => {
            eprintln!("❌ Startup error: {}", e);
            std::process::exit(EXIT_STARTUP);
        }
        e => {
            eprintln!("❌ Runtime error: {}", e);
            std::process::exit(EXIT_RUNTIME);
        }
    }
}
