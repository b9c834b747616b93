//! Filled rectangles with rounded corners and drop shadows.

use tiny_skia::Path;

use scribbler_core::{
    color::{Color, ColorType},
    geometry::Bounds,
};

use crate::{
    canvas::{Canvas, TilePainter, rect_path},
    error::Result,
    render::gradient::GradientGeometry,
};

/// Draws rectangles filled with a solid color or a gradient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectangleRenderer {
    fill: ColorType,
    corner_radius: f32,
    shadow: Option<(Color, f32)>,
}

impl RectangleRenderer {
    pub fn new(fill: ColorType) -> Self {
        Self {
            fill,
            corner_radius: 0.0,
            shadow: None,
        }
    }

    /// Rounds the corners of every fill and clip. Non-positive radii keep
    /// square corners.
    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius.max(0.0);
        self
    }

    /// Casts a shadow of `color`, blurred over `size` pixels, behind the
    /// rectangle. A non-positive size disables the shadow.
    pub fn with_shadow(mut self, color: Color, size: f32) -> Self {
        self.shadow = (size > 0.0).then_some((color, size));
        self
    }

    pub fn fill(&self) -> &ColorType {
        &self.fill
    }

    /// Draws `rect`: the shadow first, then the fill on top of it.
    pub fn draw(&self, canvas: &mut Canvas, rect: Bounds) -> Result<()> {
        let path = self.path(rect)?;

        if let Some((color, size)) = self.shadow {
            canvas.scoped(|canvas| {
                canvas.set_shadow(color, size);
                canvas.fill_path(&path, color)
            })?;
        }

        self.fill_path(canvas, rect, &path)
    }

    /// Intersects the clip region of `canvas` with `rect`, honoring the
    /// corner radius.
    pub fn clip(&self, canvas: &mut Canvas, rect: Bounds) -> Result<()> {
        canvas.clip_path(&self.path(rect)?)
    }

    fn fill_path(&self, canvas: &mut Canvas, rect: Bounds, path: &Path) -> Result<()> {
        match &self.fill {
            ColorType::Solid(color) => canvas.fill_path(path, *color),
            ColorType::LinearGradient { colors, direction } => {
                let shader = GradientGeometry::resolve(rect, *direction).linear_shader(colors)?;
                canvas.scoped(|canvas| {
                    canvas.clip_path(path)?;
                    canvas.fill_path_with_shader(&rect_path(rect, 0.0)?, shader)
                })
            }
            ColorType::RadialGradient { colors, direction } => {
                let shader = GradientGeometry::resolve(rect, *direction).radial_shader(colors)?;
                canvas.scoped(|canvas| {
                    canvas.clip_path(path)?;
                    let area = rect_path(rect, 0.0)?;
                    // Outside the cone between focal point and end circle the
                    // gradient paints nothing; the last color shows there.
                    if let Some(last) = colors.last() {
                        canvas.fill_path(&area, *last)?;
                    }
                    canvas.fill_path_with_shader(&area, shader)
                })
            }
        }
    }

    fn path(&self, rect: Bounds) -> Result<Path> {
        rect_path(rect, self.corner_radius)
    }
}

impl TilePainter for RectangleRenderer {
    fn paint_tile(&self, canvas: &mut Canvas, tile: Bounds) -> Result<()> {
        let path = self.path(tile)?;
        self.fill_path(canvas, tile, &path)
    }
}
