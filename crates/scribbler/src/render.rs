//! Renderers for the building blocks of a decorated screenshot.
//!
//! - [`RectangleRenderer`] - solid or gradient rectangles with rounded
//!   corners and drop shadows
//! - [`ImageRenderer`] - scaled and aligned raster images
//! - [`TextRenderer`] - wrapped caption text with solid or gradient fills
//!
//! Every renderer may rotate what it draws through [`Rotation`], and
//! gradients are resolved by [`GradientGeometry`].

mod gradient;
mod image;
mod rectangle;
mod rotation;
mod text;

pub use gradient::{GradientGeometry, distribute_stops};
pub use image::ImageRenderer;
pub use rectangle::RectangleRenderer;
pub use rotation::Rotation;
pub use text::{FontDescriptor, ShapedText, TextManager, TextRenderer};
