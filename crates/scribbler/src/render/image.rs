//! Scaled, aligned and optionally rotated raster images.

use log::debug;
use tiny_skia::Pixmap;

use scribbler_core::{
    alignment::{Alignment, HorizontalAlignment, VerticalAlignment},
    angle::Angle,
    geometry::{Bounds, Point, Size},
    scaling::ImageScaling,
};

use crate::{
    canvas::{Canvas, rect_path},
    error::Result,
    render::rotation::Rotation,
};

/// Draws an image into a target rectangle.
///
/// The image is not clipped to the target: depending on the scaling it may
/// overflow, and clipping is up to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImageRenderer {
    scaling: ImageScaling,
    alignment: Alignment,
    corner_radius: f32,
    rotation: Rotation,
}

impl ImageRenderer {
    pub fn new(scaling: ImageScaling) -> Self {
        Self {
            scaling,
            ..Self::default()
        }
    }

    /// Sets where a resized image sits inside the target rectangle.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Clips the image to rounded corners.
    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius.max(0.0);
        self
    }

    /// Rotates the placed image around its center.
    pub fn with_rotation(mut self, angle: Angle) -> Self {
        self.rotation = Rotation::new(angle);
        self
    }

    /// Draws `image` into `rect`.
    pub fn draw(&self, canvas: &mut Canvas, image: &Pixmap, rect: Bounds) -> Result<()> {
        let image_size = Size::new(image.width() as f32, image.height() as f32);
        let placement = self.place(image_size, rect);

        self.rotation.draw(canvas, placement, |canvas, rect| {
            canvas.scoped(|canvas| {
                canvas.clip_path(&rect_path(rect, self.corner_radius)?)?;
                canvas.draw_image(image, rect)
            })
        })
    }

    /// Resolves the rectangle the image occupies when drawn into `rect`.
    pub fn place(&self, image_size: Size, rect: Bounds) -> Bounds {
        let horizontal_ratio = f64::from(rect.width() / image_size.width());
        let vertical_ratio = f64::from(rect.height() / image_size.height());

        let Some(factor) = self.scaling.factor(horizontal_ratio, vertical_ratio) else {
            return rect;
        };
        debug!(
            scaling:? = self.scaling,
            horizontal_ratio = horizontal_ratio,
            vertical_ratio = vertical_ratio,
            factor = factor;
            "Scaling image"
        );

        let scaled = image_size.scale(factor as f32);

        let x = match self.alignment.horizontal() {
            HorizontalAlignment::Left => rect.min_x(),
            HorizontalAlignment::Center => rect.mid_x() - scaled.width() / 2.0,
            HorizontalAlignment::Right => rect.max_x() - scaled.width(),
        };
        let y = match self.alignment.vertical() {
            VerticalAlignment::Top => rect.min_y(),
            VerticalAlignment::Middle => rect.mid_y() - scaled.height() / 2.0,
            VerticalAlignment::Bottom => rect.max_y() - scaled.height(),
        };

        Bounds::new_from_top_left(Point::new(x, y), scaled)
    }
}
