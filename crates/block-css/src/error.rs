//! Error types for prop partitioning and value processing.
//!
//! The resolver and the forwarding filter are total and never fail. Errors
//! only come from the untyped edges: converting a prop bag into typed style
//! props, parsing CSS value text, and substituting theme tokens.

use thiserror::Error;

/// Errors that can occur while turning untyped props into style output.
///
/// # Examples
///
/// ```rust
/// use block_css::props::{partition, PropBag};
/// use block_css::BlockCssError;
///
/// // contentCentered only accepts booleans
/// let bag = PropBag::new().with("contentCentered", "yes");
/// assert!(matches!(
///     partition(&bag),
///     Err(BlockCssError::InvalidPropValue { .. })
/// ));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlockCssError {
    /// A style or state prop was given a value of the wrong kind.
    #[error("Invalid value for prop `{key}`: expected {expected}, found {found}")]
    InvalidPropValue {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// CSS value text could not be interpreted (e.g. it was empty).
    #[error("Invalid CSS value: {0:?}")]
    InvalidValue(String),

    /// A `$token` reference had no definition in the active theme.
    #[error("Unknown theme token: {0}")]
    UnknownToken(String),
}

pub type Result<T> = std::result::Result<T, BlockCssError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_prop_value_display() {
        let err = BlockCssError::InvalidPropValue {
            key: "_hover".to_string(),
            expected: "prop bag",
            found: "number",
        };
        let msg = err.to_string();
        assert!(msg.contains("_hover"));
        assert!(msg.contains("expected prop bag, found number"));
    }

    #[test]
    fn test_unknown_token_display() {
        let err = BlockCssError::UnknownToken("primary".to_string());
        assert_eq!(err.to_string(), "Unknown theme token: primary");
    }
}
