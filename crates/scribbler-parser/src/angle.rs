use scribbler_core::angle::Angle;
use winnow::{
    Parser,
    combinator::alt,
    error::{ModalResult, StrContext, StrContextValue},
};

use crate::{
    Codec, ParseError, ValueKind,
    decimal::{format_decimal, number},
    parse_compact,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AngleUnit {
    Degrees,
    Radians,
}

fn measured_angle(input: &mut &str) -> ModalResult<Angle> {
    let value = number.parse_next(input)?;
    let unit = alt((
        "deg".value(AngleUnit::Degrees),
        "rad".value(AngleUnit::Radians),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "`deg` or `rad` suffix",
    )))
    .parse_next(input)?;

    Ok(match unit {
        AngleUnit::Degrees => Angle::from_degrees(value),
        AngleUnit::Radians => Angle::from_radians(value),
    })
}

fn angle(input: &mut &str) -> ModalResult<Angle> {
    alt((measured_angle, "0".value(Angle::ZERO))).parse_next(input)
}

impl Codec for Angle {
    const KIND: ValueKind = ValueKind::Angle;

    fn parse(input: &str) -> Result<Self, ParseError> {
        parse_compact(Self::KIND, input, angle)
    }

    fn encode(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        if self.prefers_degrees() {
            format!("{}deg", format_decimal(self.degrees()))
        } else {
            format!("{}rad", format_decimal(self.radians()))
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Angles with at most four fractional digits survive encoding exactly.
    fn angle_strategy() -> impl Strategy<Value = Angle> {
        (-7_200_000i64..7_200_000, any::<bool>()).prop_map(|(ten_thousandths, degrees)| {
            let value = ten_thousandths as f64 / 10_000.0;
            if degrees {
                Angle::from_degrees(value)
            } else {
                Angle::from_radians(value)
            }
        })
    }

    fn check_angle_roundtrip(angle: Angle) -> Result<(), TestCaseError> {
        let parsed = Angle::parse(&angle.encode()).unwrap();
        prop_assert_eq!(parsed, angle);
        if !angle.is_zero() {
            prop_assert_eq!(parsed.prefers_degrees(), angle.prefers_degrees());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn angle_roundtrip(angle in angle_strategy()) {
            check_angle_roundtrip(angle)?;
        }
    }
}
