//! CSS values carried by style props.
//!
//! A [`CssValue`] is what a style prop holds and what the resolver emits:
//!
//! - [`CssValue::Number`]: a bare number, as a JS style object would hold it
//!   (`padding: 8`). The CSS-in-JS convention appends `px` when rendering,
//!   except for unitless properties like `opacity`.
//! - [`CssValue::Dimension`]: a number with an explicit unit (`1.5rem`).
//! - [`CssValue::Keyword`]: any other CSS text (`flex`, `1px solid red`,
//!   `$primary`).

use std::fmt;

use serde::{Serialize, Serializer};

use crate::parser::units::parse_css_value;
use crate::{BlockCssError, Result};

/// Largest integer an f64 (and a JS number) represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Px,
    Rem,
    Em,
    Percent,
    ViewWidth,
    ViewHeight,
    Fraction,
    Ch,
    Seconds,
    Milliseconds,
    Degrees,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Em => "em",
            Unit::Percent => "%",
            Unit::ViewWidth => "vw",
            Unit::ViewHeight => "vh",
            Unit::Fraction => "fr",
            Unit::Ch => "ch",
            Unit::Seconds => "s",
            Unit::Milliseconds => "ms",
            Unit::Degrees => "deg",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single CSS value.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// Unitless number (`8`, `0.5`).
    Number(f64),
    /// Number with a unit (`16px`, `50%`).
    Dimension { value: f64, unit: Unit },
    /// Any other CSS text, emitted verbatim.
    Keyword(String),
}

impl CssValue {
    pub fn keyword(text: impl Into<String>) -> Self {
        CssValue::Keyword(text.into())
    }

    pub fn px(value: f64) -> Self {
        CssValue::Dimension {
            value,
            unit: Unit::Px,
        }
    }

    pub fn percent(value: f64) -> Self {
        CssValue::Dimension {
            value,
            unit: Unit::Percent,
        }
    }

    /// Interprets CSS value text.
    ///
    /// `<number><unit>` becomes a [`CssValue::Dimension`], a bare number a
    /// [`CssValue::Number`], and anything else a trimmed [`CssValue::Keyword`].
    /// Empty text, numbers too large to represent and text that could break
    /// out of a CSS rule (see [`CssValue::validate`]) are rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_css::types::{CssValue, Unit};
    ///
    /// assert_eq!(CssValue::parse("8").unwrap(), CssValue::Number(8.0));
    /// assert_eq!(
    ///     CssValue::parse("1.5rem").unwrap(),
    ///     CssValue::Dimension { value: 1.5, unit: Unit::Rem }
    /// );
    /// assert_eq!(CssValue::parse(" space-between ").unwrap(), CssValue::keyword("space-between"));
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(BlockCssError::InvalidValue(text.to_string()));
        }

        let value = match parse_css_value(trimmed) {
            Ok((_, value)) => value,
            Err(_) => CssValue::Keyword(trimmed.to_string()),
        };
        value.validate()?;
        Ok(value)
    }

    /// Checks that the value can be written into a CSS rule as-is.
    ///
    /// Numbers must be finite. Keywords may not contain braces or line
    /// breaks, which would close the rule they are written into. Semicolons
    /// are allowed (`url(data:image/png;base64,...)`).
    pub fn validate(&self) -> Result<()> {
        match self {
            CssValue::Keyword(text) if text.contains(['{', '}', '\n', '\r']) => {
                Err(BlockCssError::InvalidValue(text.clone()))
            }
            _ if !self.is_finite() => Err(BlockCssError::InvalidValue(self.to_string())),
            _ => Ok(()),
        }
    }

    /// False for `inf` and `NaN` numbers; keywords are always finite.
    pub fn is_finite(&self) -> bool {
        match self {
            CssValue::Number(n) | CssValue::Dimension { value: n, .. } => n.is_finite(),
            CssValue::Keyword(_) => true,
        }
    }

    /// Returns the theme token name if this value is a `$token` reference.
    pub fn token_name(&self) -> Option<&str> {
        match self {
            CssValue::Keyword(text) => text.strip_prefix('$').filter(|name| !name.is_empty()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CssValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Number(n) => write!(f, "{}", n),
            CssValue::Dimension { value, unit } => write!(f, "{}{}", value, unit),
            CssValue::Keyword(text) => f.write_str(text),
        }
    }
}

// Numbers serialize the way a JS object literal holds them: integral values
// as integers so `{"padding": 8}` compares equal to hand-written JSON.
impl Serialize for CssValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CssValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            CssValue::Number(n) => serializer.serialize_f64(*n),
            other => serializer.collect_str(other),
        }
    }
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        CssValue::Number(value)
    }
}

impl From<i32> for CssValue {
    fn from(value: i32) -> Self {
        CssValue::Number(value.into())
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        CssValue::Keyword(value.to_string())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        CssValue::Keyword(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CssValue::Number(8.0).to_string(), "8");
        assert_eq!(CssValue::Number(0.5).to_string(), "0.5");
        assert_eq!(CssValue::px(16.0).to_string(), "16px");
        assert_eq!(CssValue::percent(50.0).to_string(), "50%");
        assert_eq!(CssValue::keyword("auto").to_string(), "auto");
    }

    #[test]
    fn test_parse_rejects_rule_breaking_text() {
        assert_eq!(
            CssValue::parse("red;} body { display: none"),
            Err(BlockCssError::InvalidValue("red;} body { display: none".to_string()))
        );
        assert!(CssValue::parse("red\n.x { color: blue }").is_err());
        assert_eq!(
            CssValue::parse("url(data:image/png;base64,AAAA)").unwrap(),
            CssValue::keyword("url(data:image/png;base64,AAAA)")
        );
    }

    #[test]
    fn test_parse_rejects_overflowing_numbers() {
        let huge = "9".repeat(400);
        assert!(matches!(
            CssValue::parse(&huge),
            Err(BlockCssError::InvalidValue(_))
        ));
        assert!(CssValue::parse(&format!("{}px", huge)).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(CssValue::Number(8.0).validate().is_ok());
        assert!(CssValue::keyword("1px solid red").validate().is_ok());
        assert!(CssValue::Number(f64::NAN).validate().is_err());
        assert!(CssValue::px(f64::INFINITY).validate().is_err());
        assert!(CssValue::keyword("a { b").validate().is_err());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(CssValue::parse("").is_err());
        assert!(CssValue::parse("   ").is_err());
    }

    #[test]
    fn test_parse_keeps_compound_text() {
        assert_eq!(
            CssValue::parse("1px solid red").unwrap(),
            CssValue::keyword("1px solid red")
        );
        assert_eq!(CssValue::parse("12pxx").unwrap(), CssValue::keyword("12pxx"));
    }

    #[test]
    fn test_token_name() {
        assert_eq!(CssValue::keyword("$primary").token_name(), Some("primary"));
        assert_eq!(CssValue::keyword("$").token_name(), None);
        assert_eq!(CssValue::keyword("red").token_name(), None);
        assert_eq!(CssValue::Number(1.0).token_name(), None);
    }

    #[test]
    fn test_serialize_numbers_like_js() {
        assert_eq!(serde_json::to_string(&CssValue::Number(8.0)).unwrap(), "8");
        assert_eq!(serde_json::to_string(&CssValue::Number(0.5)).unwrap(), "0.5");
        assert_eq!(serde_json::to_string(&CssValue::Number(-4.0)).unwrap(), "-4");
        assert_eq!(
            serde_json::to_string(&CssValue::px(2.0)).unwrap(),
            "\"2px\""
        );
    }
}
