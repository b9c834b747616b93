//! The raster drawing surface of a single render.
//!
//! [`Canvas`] wraps a `tiny-skia` pixmap with the state a renderer needs on
//! top of the raw fill primitives: a current transform, an intersected clip
//! mask and an optional drop shadow. State changes are always made inside
//! [`Canvas::scoped`], which restores the previous state when the closure
//! returns, whether it succeeded or not.
//!
//! Coordinates are in pixels with the origin at the top-left corner and the
//! y axis pointing down.

mod blur;

use log::trace;
use tiny_skia::{
    FillRule, FilterQuality, Mask, Paint, Path, PathBuilder, Pattern, Pixmap, PixmapPaint, Rect,
    Shader, SpreadMode, Transform,
};

use scribbler_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
};

use crate::error::{Result, ScribblerError};

/// Paints the content of a single tile of a pattern fill.
///
/// Used to fill glyph coverage with anything richer than a flat color: the
/// painter receives a canvas whose coordinate space matches the caller's
/// and the tile rectangle it is expected to cover.
pub trait TilePainter {
    /// Paints `tile` onto `canvas`.
    ///
    /// # Errors
    ///
    /// Returns any error raised while painting; the fill is abandoned.
    fn paint_tile(&self, canvas: &mut Canvas, tile: Bounds) -> Result<()>;
}

/// What a coverage mask is filled with.
pub enum CoverageFill<'a> {
    Solid(Color),
    /// A single tile covering `tile`, painted on demand.
    Tile {
        painter: &'a dyn TilePainter,
        tile: Bounds,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Shadow {
    color: Color,
    blur: f32,
}

#[derive(Debug, Clone)]
struct State {
    transform: Transform,
    clip: Option<Mask>,
    shadow: Option<Shadow>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            clip: None,
            shadow: None,
        }
    }
}

/// A mutable raster target with scoped drawing state.
#[derive(Debug)]
pub struct Canvas {
    pixmap: Pixmap,
    state: State,
    saved: Vec<State>,
}

impl Canvas {
    /// Creates a transparent canvas of the given pixel size.
    ///
    /// # Errors
    ///
    /// Returns [`ScribblerError::Precondition`] if either dimension is zero
    /// or the pixel buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            ScribblerError::Precondition(format!("cannot create a {width}x{height} canvas"))
        })?;
        Ok(Self::from_pixmap(pixmap))
    }

    fn from_pixmap(pixmap: Pixmap) -> Self {
        Self {
            pixmap,
            state: State::default(),
            saved: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The full canvas area in untransformed coordinates.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(
            Point::default(),
            Size::new(self.width() as f32, self.height() as f32),
        )
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// The current user-to-device transform.
    pub fn transform(&self) -> Transform {
        self.state.transform
    }

    /// Reads back a pixel as a straight-alpha color.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let pixel = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::new(
            pixel.red(),
            pixel.green(),
            pixel.blue(),
            pixel.alpha(),
        ))
    }

    /// Runs `draw` with a saved copy of the drawing state and restores it
    /// afterwards, also when `draw` fails.
    pub fn scoped<T>(&mut self, draw: impl FnOnce(&mut Canvas) -> Result<T>) -> Result<T> {
        self.saved.push(self.state.clone());
        let result = draw(self);
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
        result
    }

    /// Moves the origin of the coordinate space.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.state.transform = self.state.transform.pre_translate(dx, dy);
    }

    /// Rotates the coordinate space around the origin.
    ///
    /// Positive angles follow the mathematical direction, counter-clockwise
    /// as seen on screen.
    pub fn rotate(&mut self, radians: f64) {
        // tiny-skia rotates clockwise on a y-down surface.
        self.state.transform = self.state.transform.pre_rotate(-(radians.to_degrees() as f32));
    }

    /// Casts a blurred shadow of `color` behind everything filled until the
    /// state is restored. A non-positive blur disables the shadow.
    pub fn set_shadow(&mut self, color: Color, blur: f32) {
        self.state.shadow = (blur > 0.0).then_some(Shadow { color, blur });
    }

    /// Intersects the clip region with `path`.
    pub fn clip_path(&mut self, path: &Path) -> Result<()> {
        let transform = self.state.transform;
        match self.state.clip.as_mut() {
            Some(clip) => clip.intersect_path(path, FillRule::Winding, true, transform),
            None => {
                let mut clip = self.new_mask()?;
                clip.fill_path(path, FillRule::Winding, true, transform);
                self.state.clip = Some(clip);
            }
        }
        Ok(())
    }

    /// Fills `path` with a flat color.
    pub fn fill_path(&mut self, path: &Path, color: Color) -> Result<()> {
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(color));
        paint.anti_alias = true;
        self.fill_with_paint(path, &paint)
    }

    /// Fills `path` with a shader defined in the current coordinate space.
    pub fn fill_path_with_shader(&mut self, path: &Path, shader: Shader<'_>) -> Result<()> {
        let paint = Paint {
            shader,
            anti_alias: true,
            ..Paint::default()
        };
        self.fill_with_paint(path, &paint)
    }

    /// Draws `image` stretched to exactly cover `rect`.
    pub fn draw_image(&mut self, image: &Pixmap, rect: Bounds) -> Result<()> {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return Ok(());
        }
        let placement = Transform::from_row(
            rect.width() / image.width() as f32,
            0.0,
            0.0,
            rect.height() / image.height() as f32,
            rect.min_x(),
            rect.min_y(),
        );
        let shader = Pattern::new(
            image.as_ref(),
            SpreadMode::Pad,
            FilterQuality::Bicubic,
            1.0,
            placement,
        );
        self.fill_path_with_shader(&rect_path(rect, 0.0)?, shader)
    }

    /// Fills the pixels covered by `coverage`, whose top-left corner sits at
    /// `origin` in the current coordinate space.
    pub fn fill_coverage(
        &mut self,
        coverage: &Mask,
        origin: Point,
        fill: CoverageFill<'_>,
    ) -> Result<()> {
        let mut layer = Pixmap::new(coverage.width(), coverage.height()).ok_or_else(|| {
            ScribblerError::Precondition("cannot create an empty coverage layer".to_string())
        })?;

        match fill {
            CoverageFill::Solid(color) => layer.fill(to_skia_color(color)),
            CoverageFill::Tile { painter, tile } => {
                let mut tile_canvas = Canvas::from_pixmap(layer);
                tile_canvas.translate(-origin.x(), -origin.y());
                painter.paint_tile(&mut tile_canvas, tile)?;
                layer = tile_canvas.into_pixmap();
            }
        }
        layer.apply_mask(coverage);

        // Pixel-aligned layers still sample texel centers exactly.
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        let transform = self.state.transform.pre_translate(origin.x(), origin.y());
        self.pixmap.draw_pixmap(
            0,
            0,
            layer.as_ref(),
            &paint,
            transform,
            self.state.clip.as_ref(),
        );
        Ok(())
    }

    fn fill_with_paint(&mut self, path: &Path, paint: &Paint<'_>) -> Result<()> {
        if let Some(shadow) = self.state.shadow {
            self.fill_shadow(path, shadow)?;
        }
        self.pixmap.fill_path(
            path,
            paint,
            FillRule::Winding,
            self.state.transform,
            self.state.clip.as_ref(),
        );
        Ok(())
    }

    fn fill_shadow(&mut self, path: &Path, shadow: Shadow) -> Result<()> {
        trace!(blur = shadow.blur; "Casting shadow");

        let mut mask = self.new_mask()?;
        mask.fill_path(path, FillRule::Winding, true, self.state.transform);
        blur::blur_mask(&mut mask, shadow.blur);

        if let Some(clip) = &self.state.clip {
            for (value, clip) in mask.data_mut().iter_mut().zip(clip.data()) {
                *value = ((u16::from(*value) * u16::from(*clip) + 127) / 255) as u8;
            }
        }

        let area = Rect::from_xywh(0.0, 0.0, self.width() as f32, self.height() as f32)
            .ok_or_else(|| ScribblerError::Precondition("empty canvas".to_string()))?;
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(shadow.color));
        self.pixmap
            .fill_rect(area, &paint, Transform::identity(), Some(&mask));
        Ok(())
    }

    fn new_mask(&self) -> Result<Mask> {
        Mask::new(self.width(), self.height())
            .ok_or_else(|| ScribblerError::Precondition("cannot create a clip mask".to_string()))
    }
}

/// Builds the outline of `bounds`, with quadratic rounded corners when
/// `corner_radius` is positive.
///
/// The radius is limited to half the shorter side.
///
/// # Errors
///
/// Returns [`ScribblerError::Precondition`] for an empty or non-finite
/// rectangle.
pub fn rect_path(bounds: Bounds, corner_radius: f32) -> Result<Path> {
    let (x, y, w, h) = (
        bounds.min_x(),
        bounds.min_y(),
        bounds.width(),
        bounds.height(),
    );
    let empty = || ScribblerError::Precondition(format!("cannot outline an empty rectangle {w}x{h}"));

    if corner_radius <= 0.0 {
        let rect = Rect::from_xywh(x, y, w, h).ok_or_else(empty)?;
        return Ok(PathBuilder::from_rect(rect));
    }

    let r = corner_radius.min(w / 2.0).min(h / 2.0);
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.quad_to(x + w, y, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.quad_to(x + w, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.quad_to(x, y + h, x, y + h - r);
    pb.line_to(x, y + r);
    pb.quad_to(x, y, x + r, y);
    pb.close();
    pb.finish().ok_or_else(empty)
}

pub(crate) fn to_skia_color(color: Color) -> tiny_skia::Color {
    let [red, green, blue, alpha] = color.components();
    tiny_skia::Color::from_rgba(red, green, blue, alpha).unwrap_or(tiny_skia::Color::TRANSPARENT)
}
