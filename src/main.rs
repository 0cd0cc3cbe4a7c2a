mod app;
mod chart;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
mod utils;

use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // try_init: tests may have installed a subscriber already
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = match cli.config.as_deref() {
        Some(path) => match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => Config::load(),
    };
    let cli = cli.with_config(&config);

    if let Err(e) = app::run(cli, config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
