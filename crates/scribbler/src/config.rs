//! Configuration types for decorating screenshots.
//!
//! This module provides the style settings read by the renderers. All types
//! implement [`serde::Serialize`] and [`serde::Deserialize`] with camelCase
//! keys; every field is optional when deserializing and falls back to its
//! default. Colors, gradients, angles, alignments and scaling modes use
//! their mini-language strings, for example `"#FF8800"` or
//! `"middle center"`.
//!
//! # Overview
//!
//! - [`DecorateConfig`] - Top-level configuration combining all sections.
//! - [`LayoutConfig`] - Where caption and screenshot go.
//! - [`ScreenshotConfig`] - Size, corners, border, shadow and rotation of the screenshot.
//! - [`BackgroundConfig`] - Background fill and background image placement.
//! - [`CaptionConfig`] - Caption band size, font, color and rotation.
//!
//! # Example
//!
//! ```
//! # use scribbler::config::DecorateConfig;
//! # use scribbler_core::layout::LayoutType;
//! let config: DecorateConfig = serde_json::from_str(
//!     r#"{ "layout": { "layoutType": "screenshot-only" } }"#,
//! )
//! .unwrap();
//! assert_eq!(config.layout().layout_type(), LayoutType::ScreenshotOnly);
//! assert_eq!(config.caption().caption_font_size(), 32);
//! ```

mod codec;

use serde::{Deserialize, Serialize};

use scribbler_core::{
    alignment::{Alignment, HorizontalTextAlignment},
    angle::Angle,
    color::{Color, ColorType},
    layout::LayoutType,
    scaling::ImageScaling,
};

/// Top-level configuration of a decorate call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorateConfig {
    layout: LayoutConfig,
    screenshot: ScreenshotConfig,
    background: BackgroundConfig,
    caption: CaptionConfig,
}

impl DecorateConfig {
    pub fn new(
        layout: LayoutConfig,
        screenshot: ScreenshotConfig,
        background: BackgroundConfig,
        caption: CaptionConfig,
    ) -> Self {
        Self {
            layout,
            screenshot,
            background,
            caption,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn screenshot(&self) -> &ScreenshotConfig {
        &self.screenshot
    }

    pub fn background(&self) -> &BackgroundConfig {
        &self.background
    }

    pub fn caption(&self) -> &CaptionConfig {
        &self.caption
    }

    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }

    pub fn screenshot_mut(&mut self) -> &mut ScreenshotConfig {
        &mut self.screenshot
    }

    pub fn background_mut(&mut self) -> &mut BackgroundConfig {
        &mut self.background
    }

    pub fn caption_mut(&mut self) -> &mut CaptionConfig {
        &mut self.caption
    }
}

/// Layout configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(with = "codec")]
    layout_type: LayoutType,
}

impl LayoutConfig {
    pub fn layout_type(&self) -> LayoutType {
        self.layout_type
    }

    pub fn set_layout_type(&mut self, layout_type: LayoutType) {
        self.layout_type = layout_type;
    }
}

/// Screenshot configuration.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Size factor | `0.85` |
/// | Corner radius | `5` |
/// | Shadow size | `5` |
/// | Shadow color | `#000000` |
/// | Border size | `0` |
/// | Border color | `#000000` |
/// | Rotation | `0` |
///
/// Corner radius, shadow size and border size are given in points and are
/// multiplied by the device scale of the screenshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScreenshotConfig {
    /// Size of the drawn screenshot relative to its original size.
    screenshot_size_factor: f64,
    screenshot_corner_radius: f64,
    /// Blur of the shadow behind the screenshot.
    screenshot_shadow_size: f64,
    #[serde(with = "codec")]
    screenshot_shadow_color: Color,
    screenshot_border_size: f64,
    #[serde(with = "codec")]
    screenshot_border_color: ColorType,
    #[serde(with = "codec")]
    screenshot_rotation: Angle,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            screenshot_size_factor: 0.85,
            screenshot_corner_radius: 5.0,
            screenshot_shadow_size: 5.0,
            screenshot_shadow_color: Color::BLACK,
            screenshot_border_size: 0.0,
            screenshot_border_color: ColorType::Solid(Color::BLACK),
            screenshot_rotation: Angle::ZERO,
        }
    }
}

impl ScreenshotConfig {
    pub fn screenshot_size_factor(&self) -> f64 {
        self.screenshot_size_factor
    }

    pub fn screenshot_corner_radius(&self) -> f64 {
        self.screenshot_corner_radius
    }

    pub fn screenshot_shadow_size(&self) -> f64 {
        self.screenshot_shadow_size
    }

    pub fn screenshot_shadow_color(&self) -> Color {
        self.screenshot_shadow_color
    }

    pub fn screenshot_border_size(&self) -> f64 {
        self.screenshot_border_size
    }

    pub fn screenshot_border_color(&self) -> &ColorType {
        &self.screenshot_border_color
    }

    pub fn screenshot_rotation(&self) -> Angle {
        self.screenshot_rotation
    }

    pub fn set_screenshot_size_factor(&mut self, factor: f64) {
        self.screenshot_size_factor = factor;
    }

    pub fn set_screenshot_corner_radius(&mut self, radius: f64) {
        self.screenshot_corner_radius = radius;
    }

    pub fn set_screenshot_shadow_size(&mut self, size: f64) {
        self.screenshot_shadow_size = size;
    }

    pub fn set_screenshot_shadow_color(&mut self, color: Color) {
        self.screenshot_shadow_color = color;
    }

    pub fn set_screenshot_border_size(&mut self, size: f64) {
        self.screenshot_border_size = size;
    }

    pub fn set_screenshot_border_color(&mut self, color: ColorType) {
        self.screenshot_border_color = color;
    }

    pub fn set_screenshot_rotation(&mut self, rotation: Angle) {
        self.screenshot_rotation = rotation;
    }
}

/// Background configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundConfig {
    #[serde(with = "codec")]
    background_color: ColorType,
    #[serde(with = "codec")]
    background_image_scaling: ImageScaling,
    #[serde(with = "codec")]
    background_image_alignment: Alignment,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            background_color: ColorType::Solid(Color::WHITE),
            background_image_scaling: ImageScaling::default(),
            background_image_alignment: Alignment::default(),
        }
    }
}

impl BackgroundConfig {
    pub fn background_color(&self) -> &ColorType {
        &self.background_color
    }

    pub fn background_image_scaling(&self) -> ImageScaling {
        self.background_image_scaling
    }

    pub fn background_image_alignment(&self) -> Alignment {
        self.background_image_alignment
    }

    pub fn set_background_color(&mut self, color: ColorType) {
        self.background_color = color;
    }

    pub fn set_background_image_scaling(&mut self, scaling: ImageScaling) {
        self.background_image_scaling = scaling;
    }

    pub fn set_background_image_alignment(&mut self, alignment: Alignment) {
        self.background_image_alignment = alignment;
    }
}

/// Caption configuration.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Size factor | `0.25` |
/// | Alignment | `center` |
/// | Color | `#000000` |
/// | Font name | `"SF Compact"` |
/// | Font style | `"Bold"` |
/// | Font size | `32` |
/// | Rotation | `0` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptionConfig {
    /// Height of the caption band relative to the canvas height.
    caption_size_factor: f64,
    #[serde(with = "codec")]
    caption_alignment: HorizontalTextAlignment,
    #[serde(with = "codec")]
    caption_color: ColorType,
    caption_font_name: String,
    caption_font_style: String,
    /// Font size in points, multiplied by the device scale.
    caption_font_size: u32,
    #[serde(with = "codec")]
    caption_rotation: Angle,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            caption_size_factor: 0.25,
            caption_alignment: HorizontalTextAlignment::default(),
            caption_color: ColorType::Solid(Color::BLACK),
            caption_font_name: "SF Compact".to_string(),
            caption_font_style: "Bold".to_string(),
            caption_font_size: 32,
            caption_rotation: Angle::ZERO,
        }
    }
}

impl CaptionConfig {
    pub fn caption_size_factor(&self) -> f64 {
        self.caption_size_factor
    }

    pub fn caption_alignment(&self) -> HorizontalTextAlignment {
        self.caption_alignment
    }

    pub fn caption_color(&self) -> &ColorType {
        &self.caption_color
    }

    pub fn caption_font_name(&self) -> &str {
        &self.caption_font_name
    }

    pub fn caption_font_style(&self) -> &str {
        &self.caption_font_style
    }

    pub fn caption_font_size(&self) -> u32 {
        self.caption_font_size
    }

    pub fn caption_rotation(&self) -> Angle {
        self.caption_rotation
    }

    pub fn set_caption_size_factor(&mut self, factor: f64) {
        self.caption_size_factor = factor;
    }

    pub fn set_caption_alignment(&mut self, alignment: HorizontalTextAlignment) {
        self.caption_alignment = alignment;
    }

    pub fn set_caption_color(&mut self, color: ColorType) {
        self.caption_color = color;
    }

    pub fn set_caption_font_name(&mut self, name: impl Into<String>) {
        self.caption_font_name = name.into();
    }

    pub fn set_caption_font_style(&mut self, style: impl Into<String>) {
        self.caption_font_style = style.into();
    }

    pub fn set_caption_font_size(&mut self, size: u32) {
        self.caption_font_size = size;
    }

    pub fn set_caption_rotation(&mut self, rotation: Angle) {
        self.caption_rotation = rotation;
    }
}
