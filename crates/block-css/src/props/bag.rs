use indexmap::IndexMap;

use crate::types::CssValue;

/// An untyped prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// A nested bag, used for state blocks (`_hover: { ... }`).
    Bag(PropBag),
}

impl PropValue {
    /// Short name of the value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PropValue::Bool(_) => "bool",
            PropValue::Number(_) => "number",
            PropValue::Text(_) => "text",
            PropValue::Bag(_) => "prop bag",
        }
    }

    /// Renders the value as an HTML attribute value.
    ///
    /// `false` and nested bags have no attribute form; `true` renders as an
    /// empty (boolean) attribute.
    pub fn to_attribute(&self) -> Option<String> {
        match self {
            PropValue::Bool(true) => Some(String::new()),
            PropValue::Bool(false) | PropValue::Bag(_) => None,
            PropValue::Number(n) => Some(n.to_string()),
            PropValue::Text(text) => Some(text.clone()),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value.into())
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<PropBag> for PropValue {
    fn from(value: PropBag) -> Self {
        PropValue::Bag(value)
    }
}

impl From<CssValue> for PropValue {
    fn from(value: CssValue) -> Self {
        match value {
            CssValue::Number(n) => PropValue::Number(n),
            other => PropValue::Text(other.to_string()),
        }
    }
}

/// An ordered prop bag.
///
/// Inserting an existing key replaces its value in place, like assigning to
/// an object property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropBag {
    entries: IndexMap<String, PropValue>,
}

impl PropBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prop, returning the bag for chaining.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_css::props::PropBag;
    ///
    /// let bag = PropBag::new()
    ///     .with("padding", 8)
    ///     .with("role", "button")
    ///     .with("_hover", PropBag::new().with("opacity", 0.8));
    /// assert_eq!(bag.len(), 3);
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = PropBag::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let bag = PropBag::new()
            .with("id", "a")
            .with("role", "button")
            .with("id", "b");
        let keys: Vec<_> = bag.keys().collect();
        assert_eq!(keys, ["id", "role"]);
        assert_eq!(bag.get("id"), Some(&PropValue::Text("b".to_string())));
    }

    #[test]
    fn test_to_attribute() {
        assert_eq!(PropValue::Bool(true).to_attribute(), Some(String::new()));
        assert_eq!(PropValue::Bool(false).to_attribute(), None);
        assert_eq!(PropValue::Number(3.0).to_attribute(), Some("3".to_string()));
        assert_eq!(PropValue::Bag(PropBag::new()).to_attribute(), None);
    }

    #[test]
    fn test_from_css_value() {
        assert_eq!(PropValue::from(CssValue::Number(4.0)), PropValue::Number(4.0));
        assert_eq!(
            PropValue::from(CssValue::px(4.0)),
            PropValue::Text("4px".to_string())
        );
    }

    #[test]
    fn test_collect() {
        let bag: PropBag = [("id", "x"), ("role", "img")].into_iter().collect();
        assert_eq!(bag.len(), 2);
        assert!(bag.contains("role"));
    }
}
