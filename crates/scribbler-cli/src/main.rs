use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use scribbler::ScribblerError;
use scribbler_cli::{Args, ErrorAdapter};

fn main() {
    // Panics are reported through miette like every other failure
    miette::set_panic_hook();

    // Style values are validated here, before any file is touched
    let args = Args::parse();
    init_logging(&args.log_level);

    info!(log_level = args.log_level; "Starting Scribbler");
    debug!(args:?; "Parsed arguments");

    // Load and merge the configuration, decorate the screenshot, write the PNG
    if let Err(err) = scribbler_cli::run(&args) {
        error!("Failed\n{}", render_report(&err));
        process::exit(1);
    }

    info!("Completed successfully");
}

/// Initializes `env_logger`, falling back to warnings for an unknown level.
fn init_logging(level: &str) {
    let log_level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
}

/// Renders `err` with its diagnostic code and help text.
fn render_report(err: &ScribblerError) -> String {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    reporter
        .render_report(&mut writer, &ErrorAdapter(err))
        .expect("Writing to String buffer is infallible");
    writer
}
