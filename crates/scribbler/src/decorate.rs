//! Composition of background, caption and screenshot on one canvas.

use log::debug;
use tiny_skia::Pixmap;

use scribbler_core::{
    alignment::VerticalAlignment,
    geometry::{Bounds, Point, Size},
    scaling::{ImageScaling, ImageScalingMode},
};

use crate::{
    canvas::Canvas,
    config::DecorateConfig,
    error::Result,
    layout::{Partition, ScreenshotArea},
    render::{FontDescriptor, ImageRenderer, RectangleRenderer, Rotation, TextManager, TextRenderer},
};

/// Guesses the display scale (@1x, @2x, @3x) of a screenshot from its pixel
/// width in portrait orientation.
///
/// Phones wider than 1000 px render at 3x, the first 320 px phones at 1x,
/// everything in between at 2x.
pub(crate) fn device_scale(width: u32) -> u32 {
    if width > 1000 {
        3
    } else if width > 320 {
        2
    } else {
        1
    }
}

/// Draws one decorated screenshot.
pub(crate) struct Decorator<'a> {
    config: &'a DecorateConfig,
    fonts: &'a TextManager,
}

impl<'a> Decorator<'a> {
    pub(crate) fn new(config: &'a DecorateConfig, fonts: &'a TextManager) -> Self {
        Self { config, fonts }
    }

    /// Renders onto a new canvas of the screenshot's size.
    pub(crate) fn render(
        &self,
        screenshot: &Pixmap,
        background: Option<&Pixmap>,
        caption: Option<&str>,
    ) -> Result<Canvas> {
        let mut canvas = Canvas::new(screenshot.width(), screenshot.height())?;
        let total = canvas.bounds();
        let scale = device_scale(screenshot.width()) as f32;
        debug!(scale = scale; "Resolved device scale");

        self.draw_background(&mut canvas, total, background)?;

        let partition = Partition::new(
            self.config.layout().layout_type(),
            total,
            self.config.caption().caption_size_factor() as f32,
            self.config.screenshot().screenshot_size_factor() as f32,
        );

        if let (Some(area), Some(text)) = (partition.caption(), caption) {
            debug!(
                y = area.min_y(),
                height = area.height();
                "Drawing caption"
            );
            self.draw_caption(&mut canvas, text, area, scale)?;
        }

        for area in partition.screenshots() {
            debug!(
                y = area.area().min_y(),
                height = area.area().height(),
                anchor:? = area.anchor();
                "Drawing screenshot"
            );
            self.draw_screenshot(&mut canvas, screenshot, *area, scale)?;
        }

        Ok(canvas)
    }

    fn draw_background(
        &self,
        canvas: &mut Canvas,
        total: Bounds,
        image: Option<&Pixmap>,
    ) -> Result<()> {
        let background = self.config.background();
        RectangleRenderer::new(background.background_color().clone()).draw(canvas, total)?;

        if let Some(image) = image {
            ImageRenderer::new(background.background_image_scaling())
                .with_alignment(background.background_image_alignment())
                .draw(canvas, image, total)?;
        }
        Ok(())
    }

    fn draw_caption(&self, canvas: &mut Canvas, text: &str, area: Bounds, scale: f32) -> Result<()> {
        let caption = self.config.caption();
        let font = FontDescriptor::new(
            caption.caption_font_name(),
            caption.caption_font_style(),
            caption.caption_font_size() as f32 * scale,
        );

        TextRenderer::new(font, caption.caption_color().clone())
            .with_alignment(caption.caption_alignment())
            .with_vertical_alignment(VerticalAlignment::Middle)
            .with_rotation(caption.caption_rotation())
            .draw(canvas, self.fonts, text, area)
    }

    /// Draws the screenshot reduced in size, centered horizontally in `area`
    /// and anchored vertically, on top of its border and shadow.
    fn draw_screenshot(
        &self,
        canvas: &mut Canvas,
        screenshot: &Pixmap,
        area: ScreenshotArea,
        scale: f32,
    ) -> Result<()> {
        let config = self.config.screenshot();
        let size = Size::new(screenshot.width() as f32, screenshot.height() as f32)
            .scale(config.screenshot_size_factor() as f32);
        let corner_radius = config.screenshot_corner_radius() as f32 * scale;
        let shadow_size = config.screenshot_shadow_size() as f32 * scale;
        let border_size = config.screenshot_border_size() as f32 * scale;
        let image_rect = anchored_rect(area, size, border_size);

        // Without a border the shadow rectangle stays just inside the image
        // so that no shadow shows through its anti-aliased edges.
        let border_rect = if border_size > 0.0 {
            image_rect.inset(-border_size, -border_size)
        } else {
            image_rect.inset(1.0, 1.0)
        };
        let border = RectangleRenderer::new(config.screenshot_border_color().clone())
            .with_corner_radius(corner_radius + border_size)
            .with_shadow(config.screenshot_shadow_color(), shadow_size);

        let rotation = config.screenshot_rotation();
        Rotation::new(rotation).draw(canvas, border_rect, |canvas, rect| border.draw(canvas, rect))?;

        ImageRenderer::new(ImageScaling::Mode(ImageScalingMode::StretchFill))
            .with_corner_radius(corner_radius)
            .with_rotation(rotation)
            .draw(canvas, screenshot, image_rect)
    }
}

/// Places a rectangle of `size` centered horizontally in the area and at
/// its anchor edge, keeping `border` pixels of room at that edge.
fn anchored_rect(area: ScreenshotArea, size: Size, border: f32) -> Bounds {
    let bounds = area.area();
    let x = bounds.mid_x() - size.width() / 2.0;
    let y = match area.anchor() {
        VerticalAlignment::Top => bounds.min_y() + border,
        VerticalAlignment::Middle => bounds.mid_y() - size.height() / 2.0,
        VerticalAlignment::Bottom => bounds.max_y() - size.height() - border,
    };
    Bounds::new_from_top_left(Point::new(x, y), size)
}
