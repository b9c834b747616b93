//! Command-line argument definitions for the Scribbler CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input assets and output path, the
//! configuration file, logging verbosity and per-field style overrides.
//!
//! Style options take the same mini-language strings as the configuration
//! file and are validated while the command line is parsed.

use clap::Parser;

use scribbler::{
    alignment::{Alignment, HorizontalTextAlignment},
    angle::Angle,
    color::{Color, ColorType},
    scaling::ImageScaling,
};
use scribbler_core::layout::LayoutType;
use scribbler_parser::{Codec, ParseError};

/// Command-line arguments for the Scribbler screenshot decorator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the screenshot (PNG or JPEG)
    #[arg(short, long)]
    pub screenshot: String,

    /// Path to the decorated PNG file
    #[arg(short, long)]
    pub output: String,

    /// Path to an image drawn over the background color (PNG or JPEG)
    #[arg(long)]
    pub background_image: Option<String>,

    /// Caption text drawn next to the screenshot
    #[arg(long)]
    pub caption: Option<String>,

    /// Path to configuration file (JSON or TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Style overrides applied on top of the loaded configuration
#[derive(clap::Args, Debug, Default, Clone)]
pub struct StyleArgs {
    /// Arrangement of caption and screenshot, e.g. `caption-before-screenshot`
    #[arg(long = "layout", value_parser = parse_value::<LayoutType>)]
    pub layout_type: Option<LayoutType>,

    /// Screenshot size relative to the canvas
    #[arg(long)]
    pub screenshot_size_factor: Option<f64>,

    /// Corner radius of the screenshot in points
    #[arg(long)]
    pub screenshot_corner_radius: Option<f64>,

    /// Blur size of the screenshot shadow in points, 0 to disable
    #[arg(long)]
    pub screenshot_shadow_size: Option<f64>,

    /// Shadow color, e.g. `#00000080`
    #[arg(long, value_parser = parse_value::<Color>)]
    pub screenshot_shadow_color: Option<Color>,

    /// Border width around the screenshot in points
    #[arg(long)]
    pub screenshot_border_size: Option<f64>,

    /// Border fill, a color or a gradient
    #[arg(long, value_parser = parse_value::<ColorType>)]
    pub screenshot_border_color: Option<ColorType>,

    /// Screenshot rotation, e.g. `-5deg`
    #[arg(long, value_parser = parse_value::<Angle>, allow_hyphen_values = true)]
    pub screenshot_rotation: Option<Angle>,

    /// Background fill, a color or a gradient
    #[arg(long, value_parser = parse_value::<ColorType>)]
    pub background_color: Option<ColorType>,

    /// Background image scaling, e.g. `aspect-fill` or `0.5`
    #[arg(long, value_parser = parse_value::<ImageScaling>)]
    pub background_image_scaling: Option<ImageScaling>,

    /// Background image alignment, e.g. `top center`
    #[arg(long, value_parser = parse_value::<Alignment>)]
    pub background_image_alignment: Option<Alignment>,

    /// Caption height relative to the canvas
    #[arg(long)]
    pub caption_size_factor: Option<f64>,

    /// Horizontal caption alignment, e.g. `center`
    #[arg(long, value_parser = parse_value::<HorizontalTextAlignment>)]
    pub caption_alignment: Option<HorizontalTextAlignment>,

    /// Caption fill, a color or a gradient
    #[arg(long, value_parser = parse_value::<ColorType>)]
    pub caption_color: Option<ColorType>,

    /// Caption font family
    #[arg(long)]
    pub caption_font_name: Option<String>,

    /// Caption font style, e.g. `Bold Italic`
    #[arg(long)]
    pub caption_font_style: Option<String>,

    /// Caption font size in points
    #[arg(long)]
    pub caption_font_size: Option<u32>,

    /// Caption rotation, e.g. `3deg`
    #[arg(long, value_parser = parse_value::<Angle>, allow_hyphen_values = true)]
    pub caption_rotation: Option<Angle>,
}

fn parse_value<T: Codec>(input: &str) -> Result<T, ParseError> {
    T::parse(input)
}
