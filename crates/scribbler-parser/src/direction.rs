use scribbler_core::color::Direction;
use winnow::error::ModalResult;

use crate::{Codec, ParseError, ValueKind, keyword::keyword, parse_compact};

pub(crate) fn direction_token(direction: Direction) -> &'static str {
    match direction {
        Direction::ToRight => "to-right",
        Direction::ToLeft => "to-left",
        Direction::ToBottom => "to-bottom",
        Direction::ToTop => "to-top",
        Direction::ToBottomRight => "to-bottom-right",
        Direction::ToBottomLeft => "to-bottom-left",
        Direction::ToTopRight => "to-top-right",
        Direction::ToTopLeft => "to-top-left",
    }
}

/// Parses one direction token from compact input.
pub(crate) fn direction(input: &mut &str) -> ModalResult<Direction> {
    keyword(input, &Direction::ALL, direction_token)
}

impl Codec for Direction {
    const KIND: ValueKind = ValueKind::Direction;

    fn parse(input: &str) -> Result<Self, ParseError> {
        parse_compact(Self::KIND, input, direction)
    }

    fn encode(&self) -> String {
        direction_token(*self).to_string()
    }
}
