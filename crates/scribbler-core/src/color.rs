//! Color handling for Scribbler
//!
//! This module provides the [`Color`] type, an 8-bit RGBA color, and the
//! [`ColorType`] fill description that is either a solid color or a linear
//! or radial gradient running in a [`Direction`].
//!
//! Conversion to floating point components goes through the `color` crate's
//! sRGB [`AlphaColor`]; the renderer hands those components to the
//! rasterizer.

use color::{AlphaColor, Srgb};

/// An RGBA color with 8 bits per channel.
///
/// The alpha channel defaults to fully opaque (`255`).
///
/// # Examples
///
/// ```
/// use scribbler_core::color::Color;
///
/// let orange = Color::rgb(255, 165, 0);
/// assert_eq!(orange.alpha(), 255);
///
/// let translucent = orange.with_alpha(128);
/// assert_eq!(translucent.alpha(), 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    /// CSS black `#000000`.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// CSS white `#FFFFFF`.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// CSS red `#FF0000`.
    pub const RED: Color = Color::rgb(255, 0, 0);

    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    /// Creates a color from all four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }

    pub fn alpha(self) -> u8 {
        self.alpha
    }

    /// Returns `true` if the alpha channel is `255`.
    pub fn is_opaque(self) -> bool {
        self.alpha == 255
    }

    /// Returns a copy of this color with the given alpha channel.
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// Converts this color to an sRGB color with floating point components.
    pub fn to_alpha_color(self) -> AlphaColor<Srgb> {
        AlphaColor::<Srgb>::from_rgba8(self.red, self.green, self.blue, self.alpha)
    }

    /// Returns the `[red, green, blue, alpha]` components in the range `0.0..=1.0`.
    pub fn components(self) -> [f32; 4] {
        self.to_alpha_color().components
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Horizontal, vertical and diagonal directions a gradient can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    ToRight,
    ToLeft,
    #[default]
    ToBottom,
    ToTop,
    ToBottomRight,
    ToBottomLeft,
    ToTopRight,
    ToTopLeft,
}

impl Direction {
    /// All directions, horizontal and vertical ones first.
    pub const ALL: [Direction; 8] = [
        Direction::ToRight,
        Direction::ToLeft,
        Direction::ToBottom,
        Direction::ToTop,
        Direction::ToBottomRight,
        Direction::ToBottomLeft,
        Direction::ToTopRight,
        Direction::ToTopLeft,
    ];
}

/// A fill: one solid color or a gradient over two or more colors.
///
/// Gradient variants are expected to carry at least two colors. The
/// renderer rejects gradients with fewer colors when it distributes the
/// color stops.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorType {
    /// One solid color.
    Solid(Color),

    /// A linear gradient from the first to the last color.
    LinearGradient {
        colors: Vec<Color>,
        direction: Direction,
    },

    /// A radial gradient from the first (inner) to the last (outer) color.
    RadialGradient {
        colors: Vec<Color>,
        direction: Direction,
    },
}

impl From<Color> for ColorType {
    fn from(color: Color) -> Self {
        ColorType::Solid(color)
    }
}

impl Default for ColorType {
    fn default() -> Self {
        ColorType::Solid(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_color_default_is_opaque_black() {
        let color = Color::default();
        assert_eq!(color, Color::new(0, 0, 0, 255));
        assert!(color.is_opaque());
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::RED.with_alpha(0);
        assert_eq!(color.red(), 255);
        assert_eq!(color.alpha(), 0);
        assert!(!color.is_opaque());
    }

    #[test]
    fn test_color_components() {
        let [r, g, b, a] = Color::new(255, 0, 51, 255).components();
        assert_approx_eq!(f32, r, 1.0);
        assert_approx_eq!(f32, g, 0.0);
        assert_approx_eq!(f32, b, 0.2);
        assert_approx_eq!(f32, a, 1.0);
    }

    #[test]
    fn test_color_type_defaults() {
        assert_eq!(ColorType::from(Color::WHITE), ColorType::Solid(Color::WHITE));
        assert_eq!(ColorType::default(), ColorType::Solid(Color::BLACK));
        assert_eq!(Direction::default(), Direction::ToBottom);
    }
}
