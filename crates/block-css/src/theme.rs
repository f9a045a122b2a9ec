//! Theme tokens.
//!
//! A style prop may reference a theme token instead of a literal value by
//! using a `$name` keyword (`backgroundColor: "$surface"`). Resolution keeps
//! the reference as-is; [`Theme::apply`] substitutes tokens afterwards, so
//! the resolver itself stays total and theme-agnostic.
//!
//! Themes carry no built-in tokens. Values are supplied by the application.

use indexmap::IndexMap;

use crate::declaration::{Declaration, Properties};
use crate::types::CssValue;
use crate::{BlockCssError, Result};

/// A named set of token values.
///
/// # Example
///
/// ```rust
/// use block_css::props::{BlockStyle, StyleProps};
/// use block_css::types::CssValue;
/// use block_css::{resolve, Theme};
///
/// let theme = Theme::new("light").with_token("surface", CssValue::keyword("#fafafa"));
///
/// let style = BlockStyle::new(StyleProps {
///     background_color: Some("$surface".into()),
///     ..Default::default()
/// });
///
/// let themed = theme.apply(&resolve(&style)).unwrap();
/// assert_eq!(
///     themed.base().get("backgroundColor"),
///     Some(&CssValue::keyword("#fafafa"))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    name: String,
    tokens: IndexMap<String, CssValue>,
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: IndexMap::new(),
        }
    }

    /// Adds a token, returning the theme for chaining.
    pub fn with_token(mut self, name: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.tokens.insert(name.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self, name: &str) -> Option<&CssValue> {
        self.tokens.get(name)
    }

    pub fn tokens(&self) -> impl Iterator<Item = (&str, &CssValue)> {
        self.tokens.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Substitutes a single value. Non-token values are returned unchanged.
    ///
    /// Token values are not themselves resolved: a token whose value is
    /// another `$reference` is substituted literally.
    pub fn resolve_value(&self, value: &CssValue) -> Result<CssValue> {
        match value.token_name() {
            Some(name) => self
                .token(name)
                .cloned()
                .ok_or_else(|| BlockCssError::UnknownToken(name.to_string())),
            None => Ok(value.clone()),
        }
    }

    /// Returns `declaration` with every `$token` reference substituted.
    pub fn apply(&self, declaration: &Declaration) -> Result<Declaration> {
        let base = self.apply_properties(declaration.base())?;
        let mut states = Vec::new();
        for (state, props) in declaration.states() {
            states.push((state, self.apply_properties(props)?));
        }
        Ok(Declaration::from_parts(base, states))
    }

    fn apply_properties(&self, props: &Properties) -> Result<Properties> {
        props.try_map(|_, value| self.resolve_value(value))
    }
}
