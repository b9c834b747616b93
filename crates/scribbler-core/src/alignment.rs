//! Alignment of images and text inside a rectangle.

/// Horizontal placement inside a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl HorizontalAlignment {
    pub const ALL: [HorizontalAlignment; 3] = [
        HorizontalAlignment::Left,
        HorizontalAlignment::Center,
        HorizontalAlignment::Right,
    ];
}

/// Vertical placement inside a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl VerticalAlignment {
    pub const ALL: [VerticalAlignment; 3] = [
        VerticalAlignment::Top,
        VerticalAlignment::Middle,
        VerticalAlignment::Bottom,
    ];
}

/// Paragraph alignment of caption text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalTextAlignment {
    Left,
    #[default]
    Center,
    Right,
    Justified,
}

impl HorizontalTextAlignment {
    pub const ALL: [HorizontalTextAlignment; 4] = [
        HorizontalTextAlignment::Left,
        HorizontalTextAlignment::Center,
        HorizontalTextAlignment::Right,
        HorizontalTextAlignment::Justified,
    ];
}

/// A combined horizontal and vertical alignment.
///
/// The axes are independent and every combination is valid. The default
/// places content in the middle of both axes.
///
/// # Examples
///
/// ```
/// use scribbler_core::alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
///
/// let alignment = Alignment::default().with_vertical(VerticalAlignment::Bottom);
/// assert_eq!(alignment.horizontal(), HorizontalAlignment::Center);
/// assert_eq!(alignment.vertical(), VerticalAlignment::Bottom);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
}

impl Alignment {
    pub fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn horizontal(self) -> HorizontalAlignment {
        self.horizontal
    }

    pub fn vertical(self) -> VerticalAlignment {
        self.vertical
    }

    pub fn with_horizontal(self, horizontal: HorizontalAlignment) -> Self {
        Self { horizontal, ..self }
    }

    pub fn with_vertical(self, vertical: VerticalAlignment) -> Self {
        Self { vertical, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_default() {
        let alignment = Alignment::default();
        assert_eq!(alignment.horizontal(), HorizontalAlignment::Center);
        assert_eq!(alignment.vertical(), VerticalAlignment::Middle);
        assert_eq!(HorizontalTextAlignment::default(), HorizontalTextAlignment::Center);
    }

    #[test]
    fn test_alignment_builders() {
        let alignment = Alignment::new(HorizontalAlignment::Left, VerticalAlignment::Top)
            .with_horizontal(HorizontalAlignment::Right);
        assert_eq!(
            alignment,
            Alignment::new(HorizontalAlignment::Right, VerticalAlignment::Top)
        );
    }
}
