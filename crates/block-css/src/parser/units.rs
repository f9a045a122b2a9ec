use crate::types::value::{CssValue, Unit};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit0, digit1},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Parse a floating point or integer number (`8`, `-2`, `1.5`, `.5`).
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(alt((char('-'), char('+')))),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse the unit suffix (e.g., px, rem, %).
pub fn parse_unit(input: &str) -> IResult<&str, Unit> {
    alt((
        map(tag("px"), |_| Unit::Px),
        map(tag("rem"), |_| Unit::Rem),
        map(tag("em"), |_| Unit::Em),
        map(char('%'), |_| Unit::Percent),
        map(tag("vw"), |_| Unit::ViewWidth),
        map(tag("vh"), |_| Unit::ViewHeight),
        map(tag("fr"), |_| Unit::Fraction),
        map(tag("ch"), |_| Unit::Ch),
        map(tag("ms"), |_| Unit::Milliseconds),
        map(tag("s"), |_| Unit::Seconds),
        map(tag("deg"), |_| Unit::Degrees),
    ))(input)
}

/// Parse a whole value: a number with an optional unit and nothing after it.
///
/// Fails on anything else; callers fall back to treating the text as a
/// keyword.
pub fn parse_css_value(input: &str) -> IResult<&str, CssValue> {
    all_consuming(map(pair(parse_number, opt(parse_unit)), |(value, unit)| {
        match unit {
            Some(unit) => CssValue::Dimension { value, unit },
            None => CssValue::Number(value),
        }
    }))(input)
}
