//! The style prop vocabulary and the typed/untyped prop surfaces.
//!
//! - [`StyleProps`]: every style prop a primitive accepts, one optional field each
//! - [`StateStyles`]: the six pseudo-state blocks (`_hover`, `_focus`, ...)
//! - [`BlockStyle`]: base props plus state blocks, the resolver's input
//! - [`PropBag`] / [`PropValue`]: an untyped, ordered prop bag as a caller
//!   builds it, mixing style props with DOM attributes
//! - [`partition`]: splits a prop bag into typed style input and forwarded
//!   DOM props
//!
//! The vocabulary is defined once, by the [`StyleProps`] struct. Its
//! `#[derive(StyleProps)]` generates [`StyleVocabulary::KEYS`], which the
//! forwarding filter uses as its denylist, so the two can never drift apart.

mod bag;
mod partition;
mod state_styles;
mod style_props;

pub use bag::{PropBag, PropValue};
pub use partition::{Partitioned, partition};
pub use state_styles::{BlockStyle, StateStyles};
pub use style_props::StyleProps;

use crate::types::CssValue;
use crate::{BlockCssError, Result};

/// Implemented by `#[derive(StyleProps)]`.
pub trait StyleVocabulary {
    /// Every prop key in the vocabulary, in field order.
    const KEYS: &'static [&'static str];

    /// Calls `visit` with `(css property, value)` for every set field that
    /// maps 1:1 onto a CSS property. Shorthand fields are skipped.
    fn visit_passthrough<'a>(&'a self, visit: &mut dyn FnMut(&'static str, &'a CssValue));

    /// Assigns an untyped value to the field named by `key`.
    ///
    /// Returns `Ok(false)` if `key` is not part of the vocabulary.
    fn set_prop(&mut self, key: &str, value: &PropValue) -> Result<bool>;

    /// True when no field is set.
    fn is_empty(&self) -> bool;
}

/// Conversion from an untyped prop value into a style field's value type.
pub trait FromPropValue: Sized {
    fn from_prop_value(key: &str, value: &PropValue) -> Result<Self>;
}

impl FromPropValue for CssValue {
    fn from_prop_value(key: &str, value: &PropValue) -> Result<Self> {
        match value {
            PropValue::Number(n) if !n.is_finite() => Err(BlockCssError::InvalidPropValue {
                key: key.to_string(),
                expected: "finite number",
                found: "non-finite number",
            }),
            PropValue::Number(n) => Ok(CssValue::Number(*n)),
            PropValue::Text(text) => CssValue::parse(text),
            other => Err(BlockCssError::InvalidPropValue {
                key: key.to_string(),
                expected: "number or text",
                found: other.kind(),
            }),
        }
    }
}

impl FromPropValue for bool {
    fn from_prop_value(key: &str, value: &PropValue) -> Result<Self> {
        match value {
            PropValue::Bool(flag) => Ok(*flag),
            other => Err(BlockCssError::InvalidPropValue {
                key: key.to_string(),
                expected: "bool",
                found: other.kind(),
            }),
        }
    }
}
