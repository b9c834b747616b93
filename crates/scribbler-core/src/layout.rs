//! Caption and screenshot arrangements.

/// How the caption and the screenshot share the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutType {
    /// Caption band at the top, screenshot below it.
    #[default]
    CaptionBeforeScreenshot,
    /// Screenshot at the top, caption band below it.
    CaptionAfterScreenshot,
    /// Caption band in the middle, the screenshot sliced above and below it.
    CaptionBetweenScreenshots,
    /// No caption band, the screenshot is centered on the canvas.
    ScreenshotOnly,
}

impl LayoutType {
    pub const ALL: [LayoutType; 4] = [
        LayoutType::CaptionBeforeScreenshot,
        LayoutType::CaptionAfterScreenshot,
        LayoutType::CaptionBetweenScreenshots,
        LayoutType::ScreenshotOnly,
    ];

    /// Returns `true` if this layout reserves a band for the caption.
    pub fn has_caption(self) -> bool {
        self != LayoutType::ScreenshotOnly
    }
}
