//! Parsing for CSS value text.
//!
//! Style props coming from untyped sources (HTML attributes, prop bags built
//! from strings) carry their values as text. This module turns that text
//! into typed [`CssValue`](crate::types::CssValue)s.
//!
//! - [`units`]: numeric values with optional unit suffix

pub mod units;

pub use units::{parse_css_value, parse_number, parse_unit};
