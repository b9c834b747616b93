//! Scribbler Mini-language
//!
//! This crate turns the compact strings used in Scribbler configuration
//! files and command lines into the typed values of `scribbler-core`, and
//! back:
//!
//! | Value | Example |
//! |-------|---------|
//! | [`Color`](scribbler_core::color::Color) | `#FF8800`, `#FF880080` |
//! | [`ColorType`](scribbler_core::color::ColorType) | `linear-gradient(to-right, #000000, #FFFFFF)` |
//! | [`Direction`](scribbler_core::color::Direction) | `to-bottom-left` |
//! | [`Angle`](scribbler_core::angle::Angle) | `45deg`, `-3.1415rad`, `0` |
//! | [`Alignment`](scribbler_core::alignment::Alignment) | `top right`, `rightbottom` |
//! | [`ImageScaling`](scribbler_core::scaling::ImageScaling) | `aspect-fit`, `0.5` |
//! | [`LayoutType`](scribbler_core::layout::LayoutType) | `caption-between-screenshots` |
//! | [`HorizontalTextAlignment`](scribbler_core::alignment::HorizontalTextAlignment) | `justified` |
//!
//! Every value implements [`Codec`]. Whitespace anywhere in the input is
//! ignored, and [`Codec::encode`] always produces a canonical string that
//! [`Codec::parse`] accepts again.
//!
//! # Example
//!
//! ```
//! use scribbler_core::color::{Color, ColorType, Direction};
//! use scribbler_parser::Codec;
//!
//! let fill = ColorType::parse("radial-gradient(#000000, #FFFFFF80)").unwrap();
//! assert_eq!(
//!     fill,
//!     ColorType::RadialGradient {
//!         colors: vec![Color::BLACK, Color::WHITE.with_alpha(0x80)],
//!         direction: Direction::ToBottom,
//!     }
//! );
//! assert_eq!(
//!     fill.encode(),
//!     "radial-gradient(to-bottom, #000000, #FFFFFF80)"
//! );
//! ```

mod alignment;
mod angle;
mod color;
mod color_type;
mod decimal;
mod direction;
mod error;
mod image_scaling;
mod keyword;
mod layout_type;
mod text_alignment;

use log::trace;
use winnow::{
    Parser,
    error::{ContextError, ErrMode},
};

pub use error::{ParseError, ValueKind};

/// A value with a string form in the Scribbler mini-language.
pub trait Codec: Sized {
    /// The kind reported in parse errors.
    const KIND: ValueKind;

    /// Parses a value from its string form.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `input` is not a valid string form.
    fn parse(input: &str) -> Result<Self, ParseError>;

    /// Encodes the value to its canonical string form.
    fn encode(&self) -> String;
}

/// Removes every whitespace character from `input` and runs `parser` on
/// the remainder, which must be consumed completely.
fn parse_compact<O>(
    kind: ValueKind,
    input: &str,
    mut parser: impl for<'i> Parser<&'i str, O, ErrMode<ContextError>>,
) -> Result<O, ParseError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    trace!(kind:? = kind, input = compact.as_str(); "Parsing value");

    parser
        .parse(compact.as_str())
        .map_err(|err| ParseError::new(kind, input, err.inner().to_string().replace('\n', ", ")))
}
