use scribbler_core::layout::LayoutType;

use crate::{Codec, ParseError, ValueKind, keyword::keyword, parse_compact};

pub(crate) fn layout_token(layout: LayoutType) -> &'static str {
    match layout {
        LayoutType::CaptionBeforeScreenshot => "caption-before-screenshot",
        LayoutType::CaptionAfterScreenshot => "caption-after-screenshot",
        LayoutType::CaptionBetweenScreenshots => "caption-between-screenshots",
        LayoutType::ScreenshotOnly => "screenshot-only",
    }
}

impl Codec for LayoutType {
    const KIND: ValueKind = ValueKind::LayoutType;

    fn parse(input: &str) -> Result<Self, ParseError> {
        parse_compact(Self::KIND, input, |input: &mut &str| {
            keyword(input, &LayoutType::ALL, layout_token)
        })
    }

    fn encode(&self) -> String {
        layout_token(*self).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_type_codec() {
        for layout in LayoutType::ALL {
            assert_eq!(LayoutType::parse(&layout.encode()).unwrap(), layout);
        }
        assert_eq!(
            LayoutType::parse(" screenshot-only ").unwrap(),
            LayoutType::ScreenshotOnly
        );
        assert_eq!(
            LayoutType::default().encode(),
            "caption-before-screenshot"
        );
    }

    #[test]
    fn test_layout_type_errors() {
        for input in ["", "caption", "captionBeforeScreenshot", "screenshot-only-"] {
            assert!(LayoutType::parse(input).is_err(), "input: {input:?}");
        }
    }
}
