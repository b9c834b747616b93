use std::fmt;

use thiserror::Error;

/// The kind of value a mini-language string was supposed to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Color,
    ColorType,
    Direction,
    Angle,
    Alignment,
    ImageScaling,
    LayoutType,
    TextAlignment,
}

impl ValueKind {
    /// A short description of the accepted syntax.
    pub fn expected(self) -> &'static str {
        match self {
            ValueKind::Color => "`#RRGGBB` or `#RRGGBBAA`",
            ValueKind::ColorType => {
                "a hex color or `linear-gradient(...)` / `radial-gradient(...)` with an optional direction and at least two colors"
            }
            ValueKind::Direction => "one of `to-right`, `to-left`, `to-bottom`, `to-top`, `to-bottom-right`, `to-bottom-left`, `to-top-right`, `to-top-left`",
            ValueKind::Angle => "a number with a `deg` or `rad` suffix, or `0`",
            ValueKind::Alignment => {
                "`left`, `center` or `right` and/or `top`, `middle` or `bottom`"
            }
            ValueKind::ImageScaling => {
                "a positive number or one of `none`, `stretch-fill`, `aspect-fill`, `aspect-fit`"
            }
            ValueKind::LayoutType => {
                "one of `caption-before-screenshot`, `caption-after-screenshot`, `caption-between-screenshots`, `screenshot-only`"
            }
            ValueKind::TextAlignment => "one of `left`, `center`, `right`, `justified`",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Color => "color",
            ValueKind::ColorType => "color type",
            ValueKind::Direction => "direction",
            ValueKind::Angle => "angle",
            ValueKind::Alignment => "alignment",
            ValueKind::ImageScaling => "image scaling",
            ValueKind::LayoutType => "layout type",
            ValueKind::TextAlignment => "text alignment",
        };
        f.write_str(name)
    }
}

/// A malformed mini-language string.
///
/// Carries the kind of value being parsed, the offending input as given by
/// the caller and a human readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} `{input}`: {reason}")]
pub struct ParseError {
    kind: ValueKind,
    input: String,
    reason: String,
}

impl ParseError {
    /// Creates a new parse error.
    ///
    /// An empty `reason` is replaced with the accepted syntax of `kind`.
    pub fn new(kind: ValueKind, input: impl Into<String>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let reason = if reason.trim().is_empty() {
            format!("expected {}", kind.expected())
        } else {
            reason
        };
        Self {
            kind,
            input: input.into(),
            reason,
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
