//! Caption text layout and rendering.
//!
//! Text is shaped with `cosmic-text`, rasterized into a coverage mask and
//! painted onto the canvas with either a flat color or a gradient. Gradient
//! fills reuse [`RectangleRenderer`] as the painter of a single tile that
//! spans the measured text block.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use cosmic_text::{
    Align, Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, SwashCache, SwashContent,
    Weight,
};
use log::{debug, info};
use tiny_skia::Mask;

use scribbler_core::{
    alignment::{HorizontalTextAlignment, VerticalAlignment},
    angle::Angle,
    color::ColorType,
    geometry::{Bounds, Point, Size},
};

use crate::{
    canvas::{Canvas, CoverageFill},
    error::Result,
    render::{rectangle::RectangleRenderer, rotation::Rotation},
};

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// The font a caption is set in.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    family: String,
    style: String,
    size: f32,
}

impl FontDescriptor {
    /// Creates a font descriptor.
    ///
    /// # Arguments
    ///
    /// * `family` - The font family name, e.g. `"SF Compact"`.
    /// * `style` - The style name, e.g. `"Bold"` or `"Light Italic"`.
    /// * `size` - The font size in pixels.
    pub fn new(family: impl Into<String>, style: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
            size,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Maps the style name to a weight and slant.
    ///
    /// Matching is by keyword and ignores case, so `"Semibold Italic"` and
    /// `"semibold-italic"` are equivalent. Unknown names are regular.
    fn face(&self) -> (Weight, Style) {
        let style = self.style.to_lowercase();
        let has = |keyword: &str| style.contains(keyword);

        let weight = if has("heavy") || has("black") {
            Weight::BLACK
        } else if has("extrabold") || has("ultrabold") {
            Weight::EXTRA_BOLD
        } else if has("semibold") || has("demibold") {
            Weight::SEMIBOLD
        } else if has("bold") {
            Weight::BOLD
        } else if has("medium") {
            Weight::MEDIUM
        } else if has("extralight") || has("ultralight") {
            Weight::EXTRA_LIGHT
        } else if has("light") {
            Weight::LIGHT
        } else if has("thin") {
            Weight::THIN
        } else {
            Weight::NORMAL
        };

        let slant = if has("italic") {
            Style::Italic
        } else if has("oblique") {
            Style::Oblique
        } else {
            Style::Normal
        };

        (weight, slant)
    }
}

/// Text laid out for a given width.
#[derive(Debug, Clone)]
pub struct ShapedText {
    size: Size,
    coverage: Option<Mask>,
}

impl ShapedText {
    /// The layout box: the available width and the height of all lines.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Glyph coverage over the layout box, `None` for empty text.
    pub fn coverage(&self) -> Option<&Mask> {
        self.coverage.as_ref()
    }
}

struct Fonts {
    system: FontSystem,
    cache: SwashCache,
}

/// Shapes and rasterizes text.
///
/// Loading the system fonts is expensive, so it happens once, on first use.
#[derive(Default)]
pub struct TextManager {
    fonts: OnceLock<Mutex<Fonts>>,
}

impl TextManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn fonts(&self) -> MutexGuard<'_, Fonts> {
        self.fonts
            .get_or_init(|| {
                info!("Initializing FontSystem");
                Mutex::new(Fonts {
                    system: FontSystem::new(),
                    cache: SwashCache::new(),
                })
            })
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Lays out `text` in lines of at most `width` pixels and rasterizes
    /// its glyphs.
    pub fn shape(
        &self,
        text: &str,
        font: &FontDescriptor,
        alignment: HorizontalTextAlignment,
        width: f32,
    ) -> ShapedText {
        if text.trim().is_empty() || width <= 0.0 || font.size() <= 0.0 {
            return ShapedText {
                size: Size::new(width.max(0.0), 0.0),
                coverage: None,
            };
        }

        let mut guard = self.fonts();
        let Fonts { system, cache } = &mut *guard;

        let metrics = Metrics::new(font.size(), font.size() * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(system, metrics);
        {
            let mut buffer = buffer.borrow_with(system);
            let (weight, style) = font.face();
            let attrs = Attrs::new()
                .family(Family::Name(font.family()))
                .weight(weight)
                .style(style);

            buffer.set_size(Some(width), None);
            buffer.set_text(text, &attrs, Shaping::Advanced, Some(to_align(alignment)));
            buffer.shape_until_scroll(true);
        }

        let height = buffer
            .layout_runs()
            .map(|run| run.line_top + run.line_height)
            .fold(0.0_f32, f32::max);
        let size = Size::new(width, height);
        debug!(width = width, height = height; "Measured text");

        let Some(mut coverage) = Mask::new(width.ceil() as u32, height.ceil() as u32) else {
            return ShapedText {
                size,
                coverage: None,
            };
        };

        let mask_width = coverage.width() as i32;
        let mask_height = coverage.height() as i32;
        let data = coverage.data_mut();

        for run in buffer.layout_runs() {
            for glyph in run.glyphs {
                let physical = glyph.physical((0.0, run.line_y), 1.0);
                let Some(image) = cache.get_image(system, physical.cache_key) else {
                    continue;
                };

                let left = physical.x + image.placement.left;
                let top = physical.y - image.placement.top;
                let glyph_width = image.placement.width as i32;
                let glyph_height = image.placement.height as i32;

                for row in 0..glyph_height {
                    let y = top + row;
                    if y < 0 || y >= mask_height {
                        continue;
                    }
                    for column in 0..glyph_width {
                        let x = left + column;
                        if x < 0 || x >= mask_width {
                            continue;
                        }
                        let index = (row * glyph_width + column) as usize;
                        let alpha = match image.content {
                            SwashContent::Mask => image.data.get(index).copied(),
                            SwashContent::Color => image.data.get(index * 4 + 3).copied(),
                            SwashContent::SubpixelMask => image
                                .data
                                .get(index * 4..index * 4 + 3)
                                .map(|rgb| {
                                    ((u16::from(rgb[0]) + u16::from(rgb[1]) + u16::from(rgb[2]))
                                        / 3) as u8
                                }),
                        }
                        .unwrap_or(0);

                        let target = &mut data[(y * mask_width + x) as usize];
                        *target = (*target).max(alpha);
                    }
                }
            }
        }

        ShapedText {
            size,
            coverage: Some(coverage),
        }
    }
}

fn to_align(alignment: HorizontalTextAlignment) -> Align {
    match alignment {
        HorizontalTextAlignment::Left => Align::Left,
        HorizontalTextAlignment::Center => Align::Center,
        HorizontalTextAlignment::Right => Align::Right,
        HorizontalTextAlignment::Justified => Align::Justified,
    }
}

/// Draws a block of text into a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRenderer {
    font: FontDescriptor,
    alignment: HorizontalTextAlignment,
    vertical_alignment: VerticalAlignment,
    fill: ColorType,
    rotation: Rotation,
}

impl TextRenderer {
    pub fn new(font: FontDescriptor, fill: ColorType) -> Self {
        Self {
            font,
            alignment: HorizontalTextAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            fill,
            rotation: Rotation::default(),
        }
    }

    pub fn with_alignment(mut self, alignment: HorizontalTextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_vertical_alignment(mut self, vertical_alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = vertical_alignment;
        self
    }

    /// Rotates the measured text block around its center.
    pub fn with_rotation(mut self, angle: Angle) -> Self {
        self.rotation = Rotation::new(angle);
        self
    }

    /// Draws `text` into `rect`.
    ///
    /// Lines wrap at the width of `rect`; the block of lines is placed
    /// vertically according to the vertical alignment and may overflow
    /// `rect` when it does not fit.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        fonts: &TextManager,
        text: &str,
        rect: Bounds,
    ) -> Result<()> {
        let shaped = fonts.shape(text, &self.font, self.alignment, rect.width());
        let Some(coverage) = shaped.coverage() else {
            return Ok(());
        };

        let text_rect = self.text_rect(shaped.size().height(), rect);
        debug!(
            x = text_rect.min_x(),
            y = text_rect.min_y(),
            width = text_rect.width(),
            height = text_rect.height();
            "Placing text"
        );

        self.rotation.draw(canvas, text_rect, |canvas, rect| match &self.fill {
            ColorType::Solid(color) => {
                canvas.fill_coverage(coverage, rect.min_point(), CoverageFill::Solid(*color))
            }
            gradient => {
                let painter = RectangleRenderer::new(gradient.clone());
                canvas.fill_coverage(
                    coverage,
                    rect.min_point(),
                    CoverageFill::Tile {
                        painter: &painter,
                        tile: rect,
                    },
                )
            }
        })
    }

    /// The rectangle a text block of `height` occupies inside `rect`.
    fn text_rect(&self, height: f32, rect: Bounds) -> Bounds {
        let y = match self.vertical_alignment {
            VerticalAlignment::Top => rect.min_y(),
            VerticalAlignment::Middle => rect.mid_y() - height / 2.0,
            VerticalAlignment::Bottom => rect.max_y() - height,
        };
        Bounds::new_from_top_left(Point::new(rect.min_x(), y), Size::new(rect.width(), height))
    }
}
