//! Configuration file loading for the CLI
//!
//! This module finds and loads JSON or TOML configuration files from various
//! locations (explicit path, local directory, system directory) and applies
//! the style overrides given on the command line.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use scribbler::{ScribblerError, config::DecorateConfig};

use crate::args::StyleArgs;

/// File names probed in each configuration directory, in order.
const CONFIG_FILE_NAMES: [&str; 2] = ["config.json", "config.toml"];

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse JSON configuration {path}: {message}")]
    Json { path: PathBuf, message: String },

    #[error("Failed to parse TOML configuration {path}: {message}")]
    Toml { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ScribblerError {
    fn from(err: ConfigError) -> Self {
        ScribblerError::Io(std::io::Error::other(err.to_string()))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (`scribbler/config.json`, `scribbler/config.toml`)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<DecorateConfig, ScribblerError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    if let Some(local_config) = find_config_file(Path::new("scribbler")) {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "scribbler", "scribbler") {
        let config_dir = proj_dirs.config_dir();
        if let Some(system_config) = find_config_file(config_dir) {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = config_dir.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(DecorateConfig::default())
}

fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from a JSON or TOML file
///
/// Files with a `.toml` extension are read as TOML, everything else as JSON.
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - Parsing fails, including malformed style values
fn load_config_file(path: impl AsRef<Path>) -> Result<DecorateConfig, ScribblerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let config = if is_toml {
        toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| ConfigError::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    Ok(config)
}

/// Overwrite the loaded configuration with every style option that was
/// given on the command line.
pub fn merge(config: &mut DecorateConfig, style: &StyleArgs) {
    if let Some(layout_type) = style.layout_type {
        config.layout_mut().set_layout_type(layout_type);
    }

    let screenshot = config.screenshot_mut();
    if let Some(factor) = style.screenshot_size_factor {
        screenshot.set_screenshot_size_factor(factor);
    }
    if let Some(radius) = style.screenshot_corner_radius {
        screenshot.set_screenshot_corner_radius(radius);
    }
    if let Some(size) = style.screenshot_shadow_size {
        screenshot.set_screenshot_shadow_size(size);
    }
    if let Some(color) = style.screenshot_shadow_color {
        screenshot.set_screenshot_shadow_color(color);
    }
    if let Some(size) = style.screenshot_border_size {
        screenshot.set_screenshot_border_size(size);
    }
    if let Some(color) = &style.screenshot_border_color {
        screenshot.set_screenshot_border_color(color.clone());
    }
    if let Some(rotation) = style.screenshot_rotation {
        screenshot.set_screenshot_rotation(rotation);
    }

    let background = config.background_mut();
    if let Some(color) = &style.background_color {
        background.set_background_color(color.clone());
    }
    if let Some(scaling) = style.background_image_scaling {
        background.set_background_image_scaling(scaling);
    }
    if let Some(alignment) = style.background_image_alignment {
        background.set_background_image_alignment(alignment);
    }

    let caption = config.caption_mut();
    if let Some(factor) = style.caption_size_factor {
        caption.set_caption_size_factor(factor);
    }
    if let Some(alignment) = style.caption_alignment {
        caption.set_caption_alignment(alignment);
    }
    if let Some(color) = &style.caption_color {
        caption.set_caption_color(color.clone());
    }
    if let Some(name) = &style.caption_font_name {
        caption.set_caption_font_name(name.as_str());
    }
    if let Some(font_style) = &style.caption_font_style {
        caption.set_caption_font_style(font_style.as_str());
    }
    if let Some(size) = style.caption_font_size {
        caption.set_caption_font_size(size);
    }
    if let Some(rotation) = style.caption_rotation {
        caption.set_caption_rotation(rotation);
    }
}
