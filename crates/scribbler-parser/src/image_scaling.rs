use scribbler_core::scaling::{ImageScaling, ImageScalingMode};
use winnow::{Parser, combinator::alt, error::ModalResult};

use crate::{
    Codec, ParseError, ValueKind,
    decimal::{format_decimal, number},
    keyword::keyword,
    parse_compact,
};

/// The smallest factor with a non-zero encoding.
const MIN_ENCODED_FACTOR: f64 = 0.0001;

fn mode_token(mode: ImageScalingMode) -> &'static str {
    match mode {
        ImageScalingMode::None => "none",
        ImageScalingMode::StretchFill => "stretch-fill",
        ImageScalingMode::AspectFill => "aspect-fill",
        ImageScalingMode::AspectFit => "aspect-fit",
    }
}

fn factor(input: &mut &str) -> ModalResult<ImageScaling> {
    number
        .verify(|factor: &f64| *factor > 0.0)
        .map(ImageScaling::Factor)
        .parse_next(input)
}

fn mode(input: &mut &str) -> ModalResult<ImageScaling> {
    keyword(input, &ImageScalingMode::ALL, mode_token).map(ImageScaling::Mode)
}

impl Codec for ImageScaling {
    const KIND: ValueKind = ValueKind::ImageScaling;

    fn parse(input: &str) -> Result<Self, ParseError> {
        parse_compact(Self::KIND, input, |input: &mut &str| {
            alt((factor, mode)).parse_next(input)
        })
    }

    fn encode(&self) -> String {
        match self {
            ImageScaling::Mode(mode) => mode_token(*mode).to_string(),
            ImageScaling::Factor(factor) => format_decimal(factor.max(MIN_ENCODED_FACTOR)),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn image_scaling_strategy() -> impl Strategy<Value = ImageScaling> {
        prop_oneof![
            proptest::sample::select(ImageScalingMode::ALL.to_vec()).prop_map(ImageScaling::Mode),
            (1u32..1_000_000).prop_map(|ten_thousandths| {
                ImageScaling::Factor(f64::from(ten_thousandths) / 10_000.0)
            }),
        ]
    }

    fn check_image_scaling_roundtrip(value: ImageScaling) -> Result<(), TestCaseError> {
        prop_assert_eq!(ImageScaling::parse(&value.encode()).unwrap(), value);
        Ok(())
    }

    /// Any positive factor encodes to a string the parser accepts.
    fn check_positive_factor_encoding_parses(factor: f64) -> Result<(), TestCaseError> {
        let encoded = ImageScaling::Factor(factor).encode();
        let parsed = ImageScaling::parse(&encoded);
        prop_assert!(parsed.is_ok(), "{} encoded as {:?}", factor, encoded);
        Ok(())
    }

    proptest! {
        #[test]
        fn image_scaling_roundtrip(value in image_scaling_strategy()) {
            check_image_scaling_roundtrip(value)?;
        }

        #[test]
        fn positive_factor_encoding_parses(factor in 1e-12f64..10.0) {
            check_positive_factor_encoding_parses(factor)?;
        }
    }
}
