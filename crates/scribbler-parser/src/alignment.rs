use scribbler_core::alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
use winnow::{
    Parser,
    combinator::{alt, repeat},
    error::ModalResult,
};

use crate::{Codec, ParseError, ValueKind, parse_compact};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisToken {
    Horizontal(HorizontalAlignment),
    Vertical(VerticalAlignment),
}

fn horizontal_token(alignment: HorizontalAlignment) -> &'static str {
    match alignment {
        HorizontalAlignment::Left => "left",
        HorizontalAlignment::Center => "center",
        HorizontalAlignment::Right => "right",
    }
}

fn vertical_token(alignment: VerticalAlignment) -> &'static str {
    match alignment {
        VerticalAlignment::Top => "top",
        VerticalAlignment::Middle => "middle",
        VerticalAlignment::Bottom => "bottom",
    }
}

// No token is a prefix of another, so words may follow each other directly.
fn axis_token(input: &mut &str) -> ModalResult<AxisToken> {
    alt((
        "left".value(AxisToken::Horizontal(HorizontalAlignment::Left)),
        "center".value(AxisToken::Horizontal(HorizontalAlignment::Center)),
        "right".value(AxisToken::Horizontal(HorizontalAlignment::Right)),
        "top".value(AxisToken::Vertical(VerticalAlignment::Top)),
        "middle".value(AxisToken::Vertical(VerticalAlignment::Middle)),
        "bottom".value(AxisToken::Vertical(VerticalAlignment::Bottom)),
    ))
    .parse_next(input)
}

fn axis_tokens(input: &mut &str) -> ModalResult<Vec<AxisToken>> {
    repeat(0.., axis_token).parse_next(input)
}

impl Codec for Alignment {
    const KIND: ValueKind = ValueKind::Alignment;

    fn parse(input: &str) -> Result<Self, ParseError> {
        let tokens = parse_compact(Self::KIND, input, axis_tokens)?;

        let mut horizontal: Option<HorizontalAlignment> = None;
        let mut vertical: Option<VerticalAlignment> = None;
        for token in tokens {
            match token {
                AxisToken::Horizontal(value) => {
                    if horizontal.is_some_and(|current| current != value) {
                        return Err(ParseError::new(
                            Self::KIND,
                            input,
                            "conflicting horizontal alignments",
                        ));
                    }
                    horizontal = Some(value);
                }
                AxisToken::Vertical(value) => {
                    if vertical.is_some_and(|current| current != value) {
                        return Err(ParseError::new(
                            Self::KIND,
                            input,
                            "conflicting vertical alignments",
                        ));
                    }
                    vertical = Some(value);
                }
            }
        }

        Ok(Alignment::new(
            horizontal.unwrap_or_default(),
            vertical.unwrap_or_default(),
        ))
    }

    fn encode(&self) -> String {
        format!(
            "{} {}",
            vertical_token(self.vertical()),
            horizontal_token(self.horizontal())
        )
    }
}
