use scribbler_core::alignment::HorizontalTextAlignment;

use crate::{Codec, ParseError, ValueKind, keyword::keyword, parse_compact};

fn text_alignment_token(alignment: HorizontalTextAlignment) -> &'static str {
    match alignment {
        HorizontalTextAlignment::Left => "left",
        HorizontalTextAlignment::Center => "center",
        HorizontalTextAlignment::Right => "right",
        HorizontalTextAlignment::Justified => "justified",
    }
}

impl Codec for HorizontalTextAlignment {
    const KIND: ValueKind = ValueKind::TextAlignment;

    fn parse(input: &str) -> Result<Self, ParseError> {
        parse_compact(Self::KIND, input, |input: &mut &str| {
            keyword(input, &HorizontalTextAlignment::ALL, text_alignment_token)
        })
    }

    fn encode(&self) -> String {
        text_alignment_token(*self).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_alignment_codec() {
        for alignment in HorizontalTextAlignment::ALL {
            assert_eq!(
                HorizontalTextAlignment::parse(&alignment.encode()).unwrap(),
                alignment
            );
        }
        assert_eq!(
            HorizontalTextAlignment::parse("justified").unwrap(),
            HorizontalTextAlignment::Justified
        );
        assert!(HorizontalTextAlignment::parse("middle").is_err());
    }
}
