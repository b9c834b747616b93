//! Partitioning of the canvas into caption and screenshot areas.

use scribbler_core::{alignment::VerticalAlignment, geometry::Bounds, layout::LayoutType};

/// An area to draw the screenshot into, and the edge it is anchored to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenshotArea {
    area: Bounds,
    anchor: VerticalAlignment,
}

impl ScreenshotArea {
    pub fn area(&self) -> Bounds {
        self.area
    }

    /// Where the screenshot sits vertically inside [`area`](Self::area).
    pub fn anchor(&self) -> VerticalAlignment {
        self.anchor
    }
}

/// The areas of a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    caption: Option<Bounds>,
    screenshots: Vec<ScreenshotArea>,
}

impl Partition {
    /// Splits `total` according to `layout_type`.
    ///
    /// The caption band is `caption_size_factor` of the total height and is
    /// inset horizontally by the margin the screenshot leaves on each side
    /// at `screenshot_size_factor` of the total width.
    ///
    /// # Examples
    ///
    /// ```
    /// use scribbler::layout::Partition;
    /// use scribbler_core::{geometry::{Bounds, Size}, layout::LayoutType};
    ///
    /// let total = Bounds::from_size(Size::new(1000.0, 2000.0));
    /// let partition = Partition::new(LayoutType::CaptionBeforeScreenshot, total, 0.25, 0.8);
    /// assert_eq!(partition.caption().unwrap().height(), 500.0);
    /// assert_eq!(partition.screenshots()[0].area().height(), 1500.0);
    /// ```
    pub fn new(
        layout_type: LayoutType,
        total: Bounds,
        caption_size_factor: f32,
        screenshot_size_factor: f32,
    ) -> Self {
        let caption_height = total.height() * caption_size_factor;
        let margin = (total.width() - total.width() * screenshot_size_factor) / 2.0;
        let caption_band = |band: Bounds| Some(band.inset(margin, 0.0));

        match layout_type {
            LayoutType::CaptionBeforeScreenshot => {
                let (top, bottom) = total.split_top(caption_height);
                Self {
                    caption: caption_band(top),
                    screenshots: vec![ScreenshotArea {
                        area: bottom,
                        anchor: VerticalAlignment::Top,
                    }],
                }
            }
            LayoutType::CaptionAfterScreenshot => {
                let (top, bottom) = total.split_bottom(caption_height);
                Self {
                    caption: caption_band(bottom),
                    screenshots: vec![ScreenshotArea {
                        area: top,
                        anchor: VerticalAlignment::Bottom,
                    }],
                }
            }
            LayoutType::CaptionBetweenScreenshots => {
                let half_height = (total.height() - caption_height) / 2.0;
                let (top, rest) = total.split_top(half_height);
                let (middle, bottom) = rest.split_top(caption_height);
                Self {
                    caption: caption_band(middle),
                    screenshots: vec![
                        ScreenshotArea {
                            area: top,
                            anchor: VerticalAlignment::Bottom,
                        },
                        ScreenshotArea {
                            area: bottom,
                            anchor: VerticalAlignment::Top,
                        },
                    ],
                }
            }
            LayoutType::ScreenshotOnly => Self {
                caption: None,
                screenshots: vec![ScreenshotArea {
                    area: total,
                    anchor: VerticalAlignment::Middle,
                }],
            },
        }
    }

    /// The caption band, `None` for layouts without a caption.
    pub fn caption(&self) -> Option<Bounds> {
        self.caption
    }

    pub fn screenshots(&self) -> &[ScreenshotArea] {
        &self.screenshots
    }
}
