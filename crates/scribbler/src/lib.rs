//! Scribbler - Decorates App Store screenshots
//!
//! This library places a screenshot and an optional caption on a generated
//! canvas of the screenshot's size, with backgrounds, gradients, borders,
//! shadows, rounded corners and rotation, and returns the result as PNG.
//!
//! The style is controlled by a [`DecorateConfig`](config::DecorateConfig),
//! usually loaded from JSON or TOML with its values written in the
//! mini-language of [`scribbler_parser`].

pub mod canvas;
pub mod codec;
pub mod config;
pub mod layout;
pub mod render;

mod decorate;
mod error;

pub use scribbler_core::{alignment, angle, color, geometry, scaling};

pub use error::{Result, ScribblerError};

use log::{debug, info};

use config::DecorateConfig;
use decorate::Decorator;
use render::TextManager;

/// The media and text a screenshot is decorated with.
///
/// All assets are optional so that they can be collected one by one; the
/// screenshot is checked for when decorating.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assets<'a> {
    screenshot: Option<&'a [u8]>,
    background_image: Option<&'a [u8]>,
    caption: Option<&'a str>,
}

impl<'a> Assets<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the PNG or JPEG bytes of the screenshot.
    pub fn with_screenshot(mut self, screenshot: &'a [u8]) -> Self {
        self.screenshot = Some(screenshot);
        self
    }

    /// Sets the PNG or JPEG bytes of the background image.
    pub fn with_background_image(mut self, background_image: &'a [u8]) -> Self {
        self.background_image = Some(background_image);
        self
    }

    pub fn with_caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }

    pub fn screenshot(&self) -> Option<&'a [u8]> {
        self.screenshot
    }

    pub fn background_image(&self) -> Option<&'a [u8]> {
        self.background_image
    }

    pub fn caption(&self) -> Option<&'a str> {
        self.caption
    }
}

/// Builder for decorating screenshots.
///
/// Keeps the configuration and the loaded fonts, so one instance can
/// decorate many screenshots with the same style.
///
/// # Examples
///
/// ```rust,no_run
/// use scribbler::{Assets, Scribbler, config::DecorateConfig};
///
/// let screenshot = std::fs::read("screenshot.png").expect("Failed to read screenshot");
///
/// let scribbler = Scribbler::new(DecorateConfig::default());
/// let png = scribbler
///     .decorate(&Assets::new().with_screenshot(&screenshot).with_caption("Plan your day"))
///     .expect("Failed to decorate");
///
/// std::fs::write("decorated.png", png).expect("Failed to write output");
/// ```
#[derive(Default)]
pub struct Scribbler {
    config: DecorateConfig,
    fonts: TextManager,
}

impl Scribbler {
    /// Creates a new builder with the given configuration.
    pub fn new(config: DecorateConfig) -> Self {
        Self {
            config,
            fonts: TextManager::new(),
        }
    }

    pub fn config(&self) -> &DecorateConfig {
        &self.config
    }

    /// Decorates the screenshot of `assets` and encodes the result as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`ScribblerError::MissingAsset`] without a screenshot,
    /// [`ScribblerError::Codec`] for images that cannot be decoded and
    /// [`ScribblerError::Precondition`] for styles that cannot be drawn.
    pub fn decorate(&self, assets: &Assets<'_>) -> Result<Vec<u8>> {
        let screenshot = assets
            .screenshot()
            .ok_or(ScribblerError::MissingAsset("screenshot"))?;

        info!(
            layout_type:? = self.config.layout().layout_type(),
            has_background_image = assets.background_image().is_some(),
            has_caption = assets.caption().is_some();
            "Decorating screenshot"
        );

        let screenshot = codec::decode_image(screenshot)?;
        let background = assets
            .background_image()
            .map(codec::decode_image)
            .transpose()?;

        let canvas = Decorator::new(&self.config, &self.fonts).render(
            &screenshot,
            background.as_ref(),
            assets.caption(),
        )?;
        debug!(width = canvas.width(), height = canvas.height(); "Canvas rendered");

        let png = codec::encode_png(canvas.pixmap())?;
        info!(bytes = png.len(); "Screenshot decorated");
        Ok(png)
    }
}

/// Decorates a screenshot with a one-off [`Scribbler`].
///
/// # Errors
///
/// See [`Scribbler::decorate`].
pub fn decorate(assets: &Assets<'_>, config: &DecorateConfig) -> Result<Vec<u8>> {
    Scribbler::new(config.clone()).decorate(assets)
}
