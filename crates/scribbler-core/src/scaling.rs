//! Image scaling policies.

/// Named ways to fit an image into a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageScalingMode {
    /// Keep the image at its natural size.
    None,
    /// Stretch the image to exactly fill the rectangle, ignoring its aspect ratio.
    StretchFill,
    /// Scale by the larger fill ratio; the image may overflow the rectangle.
    AspectFill,
    /// Scale by the smaller fill ratio; the image may not fill the rectangle.
    AspectFit,
}

impl ImageScalingMode {
    pub const ALL: [ImageScalingMode; 4] = [
        ImageScalingMode::None,
        ImageScalingMode::StretchFill,
        ImageScalingMode::AspectFill,
        ImageScalingMode::AspectFit,
    ];
}

/// How an image is resized before it is placed in its target rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageScaling {
    Mode(ImageScalingMode),
    /// A fixed, positive scale factor.
    Factor(f64),
}

impl ImageScaling {
    /// Resolves the scale factor for the given horizontal and vertical fill
    /// ratios (target dimension divided by image dimension).
    ///
    /// Returns `None` for [`ImageScalingMode::StretchFill`], which has no
    /// uniform factor.
    ///
    /// # Examples
    ///
    /// ```
    /// use scribbler_core::scaling::{ImageScaling, ImageScalingMode};
    ///
    /// let fill = ImageScaling::Mode(ImageScalingMode::AspectFill);
    /// assert_eq!(fill.factor(0.5, 2.0), Some(2.0));
    ///
    /// let fit = ImageScaling::Mode(ImageScalingMode::AspectFit);
    /// assert_eq!(fit.factor(0.5, 2.0), Some(0.5));
    /// ```
    pub fn factor(self, horizontal_ratio: f64, vertical_ratio: f64) -> Option<f64> {
        match self {
            ImageScaling::Mode(ImageScalingMode::None) => Some(1.0),
            ImageScaling::Mode(ImageScalingMode::StretchFill) => None,
            ImageScaling::Mode(ImageScalingMode::AspectFill) => {
                Some(horizontal_ratio.max(vertical_ratio))
            }
            ImageScaling::Mode(ImageScalingMode::AspectFit) => {
                Some(horizontal_ratio.min(vertical_ratio))
            }
            ImageScaling::Factor(factor) => Some(factor),
        }
    }
}

impl Default for ImageScaling {
    fn default() -> Self {
        ImageScaling::Mode(ImageScalingMode::StretchFill)
    }
}

impl From<ImageScalingMode> for ImageScaling {
    fn from(mode: ImageScalingMode) -> Self {
        ImageScaling::Mode(mode)
    }
}
