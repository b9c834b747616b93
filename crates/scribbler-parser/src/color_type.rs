use scribbler_core::color::{Color, ColorType, Direction};
use winnow::{
    Parser,
    combinator::{alt, delimited, opt, separated, terminated},
    error::{ModalResult, StrContext, StrContextValue},
};

use crate::{
    Codec, ParseError, ValueKind,
    color::{color, encode_color},
    direction::{direction, direction_token},
    parse_compact,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GradientKind {
    Linear,
    Radial,
}

/// Parses `<direction>,? <color>, <color>, ...` with at least two colors.
fn gradient_arguments(input: &mut &str) -> ModalResult<(Direction, Vec<Color>)> {
    let direction = opt(terminated(direction, opt(','))).parse_next(input)?;
    let colors: Vec<Color> = separated(2.., color, ',')
        .context(StrContext::Expected(StrContextValue::Description(
            "at least two comma separated colors",
        )))
        .parse_next(input)?;
    Ok((direction.unwrap_or_default(), colors))
}

fn gradient(input: &mut &str) -> ModalResult<ColorType> {
    let kind = alt((
        "linear-gradient".value(GradientKind::Linear),
        "radial-gradient".value(GradientKind::Radial),
    ))
    .context(StrContext::Label("gradient"))
    .parse_next(input)?;

    let (direction, colors) = delimited('(', gradient_arguments, ')').parse_next(input)?;

    Ok(match kind {
        GradientKind::Linear => ColorType::LinearGradient { colors, direction },
        GradientKind::Radial => ColorType::RadialGradient { colors, direction },
    })
}

fn color_type(input: &mut &str) -> ModalResult<ColorType> {
    alt((gradient, color.map(ColorType::Solid))).parse_next(input)
}

impl Codec for ColorType {
    const KIND: ValueKind = ValueKind::ColorType;

    fn parse(input: &str) -> Result<Self, ParseError> {
        parse_compact(Self::KIND, input, color_type)
    }

    fn encode(&self) -> String {
        let (name, colors, direction) = match self {
            ColorType::Solid(color) => return encode_color(*color),
            ColorType::LinearGradient { colors, direction } => {
                ("linear-gradient", colors, direction)
            }
            ColorType::RadialGradient { colors, direction } => {
                ("radial-gradient", colors, direction)
            }
        };

        let mut arguments = vec![direction_token(*direction).to_string()];
        arguments.extend(colors.iter().map(|color| encode_color(*color)));
        format!("{name}({})", arguments.join(", "))
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn color_strategy() -> impl Strategy<Value = Color> {
        any::<[u8; 4]>().prop_map(|[r, g, b, a]| Color::new(r, g, b, a))
    }

    fn color_type_strategy() -> impl Strategy<Value = ColorType> {
        let gradient = (
            any::<bool>(),
            proptest::collection::vec(color_strategy(), 2..6),
            proptest::sample::select(Direction::ALL.to_vec()),
        )
            .prop_map(|(linear, colors, direction)| {
                if linear {
                    ColorType::LinearGradient { colors, direction }
                } else {
                    ColorType::RadialGradient { colors, direction }
                }
            });
        prop_oneof![color_strategy().prop_map(ColorType::Solid), gradient]
    }

    fn check_color_type_roundtrip(value: ColorType) -> Result<(), TestCaseError> {
        prop_assert_eq!(ColorType::parse(&value.encode()).unwrap(), value);
        Ok(())
    }

    proptest! {
        #[test]
        fn color_type_roundtrip(value in color_type_strategy()) {
            check_color_type_roundtrip(value)?;
        }
    }
}
