use scribbler_core::color::Color;
use winnow::{
    Parser,
    error::{ModalResult, StrContext, StrContextValue},
    token::take_while,
};

use crate::{Codec, ParseError, ValueKind, parse_compact};

/// Parses a `#RRGGBB` or `#RRGGBBAA` color from compact input.
pub(crate) fn color(input: &mut &str) -> ModalResult<Color> {
    (
        '#',
        take_while(1.., |c: char| c.is_ascii_hexdigit()).verify_map(hex_channels),
    )
        .map(|(_, color)| color)
        .context(StrContext::Label("color"))
        .context(StrContext::Expected(StrContextValue::Description(
            "6 or 8 hex digits after `#`",
        )))
        .parse_next(input)
}

fn hex_channels(digits: &str) -> Option<Color> {
    let channel = |index: usize| {
        digits
            .get(index * 2..index * 2 + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };

    match digits.len() {
        6 => Some(Color::rgb(channel(0)?, channel(1)?, channel(2)?)),
        8 => Some(Color::new(
            channel(0)?,
            channel(1)?,
            channel(2)?,
            channel(3)?,
        )),
        _ => None,
    }
}

pub(crate) fn encode_color(color: Color) -> String {
    if color.is_opaque() {
        format!(
            "#{:02X}{:02X}{:02X}",
            color.red(),
            color.green(),
            color.blue()
        )
    } else {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            color.red(),
            color.green(),
            color.blue(),
            color.alpha()
        )
    }
}

impl Codec for Color {
    const KIND: ValueKind = ValueKind::Color;

    fn parse(input: &str) -> Result<Self, ParseError> {
        parse_compact(Self::KIND, input, color)
    }

    fn encode(&self) -> String {
        encode_color(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(Color::parse("#000000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("#FFFFFF").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#ff8800").unwrap(), Color::rgb(255, 136, 0));
        assert_eq!(Color::parse("#Ff8800").unwrap(), Color::rgb(255, 136, 0));
    }

    #[test]
    fn test_parse_rgba() {
        let color = Color::parse("#11223344").unwrap();
        assert_eq!(color, Color::new(0x11, 0x22, 0x33, 0x44));
    }

    #[test]
    fn test_parse_ignores_whitespace() {
        assert_eq!(Color::parse("  #FF 00 00 ").unwrap(), Color::RED);
        assert_eq!(Color::parse("#FF0000\n").unwrap(), Color::RED);
    }

    #[test]
    fn test_parse_errors() {
        for input in [
            "", " ", "#", "#0", "#00", "#000", "#0000", "#00000", "#0000000", "#000000000",
            "000000", "#G00000", "#0G0000", "#00G000", "#000G00", "#0000G0", "#00000G",
            "#000000,",
        ] {
            let err = Color::parse(input).unwrap_err();
            assert_eq!(err.kind(), ValueKind::Color, "input: {input:?}");
            assert_eq!(err.input(), input);
        }
    }

    #[test]
    fn test_encode() {
        assert_eq!(Color::rgb(255, 136, 0).encode(), "#FF8800");
        assert_eq!(Color::new(255, 136, 0, 255).encode(), "#FF8800");
        assert_eq!(Color::new(10, 11, 12, 0).encode(), "#0A0B0C00");
    }
}
