//! CLI logic for the Scribbler screenshot decorator.
//!
//! This module contains the core CLI logic: reading the assets, loading and
//! merging the configuration, and writing the decorated PNG.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, StyleArgs};
pub use error_adapter::ErrorAdapter;

use std::fs;

use log::{debug, info};

use scribbler::{Assets, Scribbler, ScribblerError};

/// Run the Scribbler CLI application
///
/// This function decorates the screenshot named in `args` and writes the
/// resulting PNG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ScribblerError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Undecodable images
/// - Styles that cannot be drawn
pub fn run(args: &Args) -> Result<(), ScribblerError> {
    info!(
        screenshot_path = args.screenshot,
        output_path = args.output;
        "Decorating screenshot"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    config::merge(&mut app_config, &args.style);
    debug!(config:? = app_config; "Resolved configuration");

    let screenshot = fs::read(&args.screenshot)?;
    let background_image = args.background_image.as_ref().map(fs::read).transpose()?;

    let mut assets = Assets::new().with_screenshot(&screenshot);
    if let Some(background_image) = &background_image {
        assets = assets.with_background_image(background_image);
    }
    if let Some(caption) = &args.caption {
        assets = assets.with_caption(caption);
    }

    let png = Scribbler::new(app_config).decorate(&assets)?;

    fs::write(&args.output, png)?;

    info!(output_file = args.output; "PNG exported successfully");

    Ok(())
}
