//! Resolved style declarations.
//!
//! A [`Declaration`] is the resolver's output and the shape a CSS-in-JS
//! engine consumes: CSS properties at the top level, plus one nested block
//! per pseudo-state keyed by its selector (`&:hover`). Serializing it with
//! serde produces exactly that object:
//!
//! ```json
//! { "padding": 8, "display": "flex", "&:hover": { "backgroundColor": "red" } }
//! ```
//!
//! Declarations can also be rendered to plain CSS text with
//! [`Declaration::to_css`].

use std::fmt::Write as _;

use indexmap::IndexMap;
use phf::phf_set;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::Result as CssResult;
use crate::types::{CssValue, PseudoState, StateFlags};

/// Properties whose bare numbers render without a `px` suffix.
static UNITLESS_PROPERTIES: phf::Set<&'static str> = phf_set! {
    "opacity",
    "zIndex",
    "fontWeight",
    "lineHeight",
    "flex",
    "flexGrow",
    "flexShrink",
    "order",
};

/// An ordered map of camelCase CSS property names to values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Properties {
    entries: IndexMap<&'static str, CssValue>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any earlier value in place.
    pub fn insert(&mut self, name: &'static str, value: CssValue) {
        self.entries.insert(name, value);
    }

    /// Sets a property only if it is not already present.
    pub fn insert_default(&mut self, name: &'static str, value: CssValue) {
        self.entries.entry(name).or_insert(value);
    }

    pub fn get(&self, name: &str) -> Option<&CssValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CssValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlays `other` on top of these properties.
    pub fn extend(&mut self, other: &Properties) {
        for (name, value) in other.iter() {
            self.insert(name, value.clone());
        }
    }

    /// Applies a fallible transformation to every value.
    pub fn try_map<E>(
        &self,
        mut f: impl FnMut(&'static str, &CssValue) -> Result<CssValue, E>,
    ) -> Result<Properties, E> {
        let mut mapped = Properties::new();
        for (name, value) in self.iter() {
            mapped.insert(name, f(name, value)?);
        }
        Ok(mapped)
    }

    fn write_rule(&self, css: &mut String, selector: &str) {
        if self.is_empty() {
            return;
        }

        // Writing to a String cannot fail.
        let _ = writeln!(css, "{} {{", selector);
        for (name, value) in self.iter() {
            let _ = writeln!(css, "  {}: {};", kebab_case(name), css_text(name, value));
        }
        css.push_str("}\n");
    }
}

/// Base properties plus pseudo-state blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declaration {
    base: Properties,
    states: IndexMap<PseudoState, Properties>,
}

impl Declaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_base(base: Properties) -> Self {
        Self {
            base,
            states: IndexMap::new(),
        }
    }

    pub fn from_parts(
        base: Properties,
        states: impl IntoIterator<Item = (PseudoState, Properties)>,
    ) -> Self {
        let mut states: IndexMap<_, _> = states.into_iter().collect();
        states.sort_keys();
        Self { base, states }
    }

    pub fn base(&self) -> &Properties {
        &self.base
    }

    pub fn state(&self, state: PseudoState) -> Option<&Properties> {
        self.states.get(&state)
    }

    /// State blocks in emission order.
    pub fn states(&self) -> impl Iterator<Item = (PseudoState, &Properties)> {
        self.states.iter().map(|(state, props)| (*state, props))
    }

    /// Sets a state block, keeping blocks in fixed state order.
    pub fn set_state(&mut self, state: PseudoState, props: Properties) {
        self.states.insert(state, props);
        self.states.sort_keys();
    }

    /// Checks every value with [`CssValue::validate`].
    pub fn validate(&self) -> CssResult<()> {
        let blocks = std::iter::once(&self.base).chain(self.states.values());
        for props in blocks {
            for (_, value) in props.iter() {
                value.validate()?;
            }
        }
        Ok(())
    }

    /// True when there are no base properties and no state blocks.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.states.is_empty()
    }

    /// The properties in effect while the element is in `flags`.
    ///
    /// Base properties are overlaid by every active state block, in fixed
    /// state order (hover, focus, active, disabled, visited, focus-visible).
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_css::props::{BlockStyle, StyleProps};
    /// use block_css::types::{CssValue, PseudoState, StateFlags};
    /// use block_css::resolve;
    ///
    /// let style = BlockStyle::new(StyleProps {
    ///     color: Some("blue".into()),
    ///     ..Default::default()
    /// })
    /// .state(PseudoState::Hover, StyleProps {
    ///     color: Some("red".into()),
    ///     ..Default::default()
    /// });
    ///
    /// let declaration = resolve(&style);
    /// let hovered = declaration.computed(StateFlags::HOVER);
    /// assert_eq!(hovered.get("color"), Some(&CssValue::keyword("red")));
    /// ```
    pub fn computed(&self, flags: StateFlags) -> Properties {
        let mut computed = self.base.clone();
        for state in PseudoState::ALL {
            if !flags.contains(state.flag()) {
                continue;
            }
            if let Some(props) = self.states.get(&state) {
                computed.extend(props);
            }
        }
        computed
    }

    /// Renders the declaration as CSS rules for `selector`.
    ///
    /// Property names are converted to kebab-case and bare numbers get `px`
    /// unless the property is unitless. Empty blocks produce no rule.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_css::props::{BlockStyle, StyleProps};
    /// use block_css::resolve;
    ///
    /// let style = BlockStyle::new(StyleProps {
    ///     padding_x: Some(4.into()),
    ///     ..Default::default()
    /// });
    /// let css = resolve(&style).to_css(".card");
    /// assert_eq!(css, ".card {\n  padding-left: 4px;\n  padding-right: 4px;\n}\n");
    /// ```
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = String::new();
        self.base.write_rule(&mut css, selector);
        for (state, props) in &self.states {
            props.write_rule(&mut css, &format!("{}{}", selector, state.pseudo_class()));
        }
        css
    }
}

impl Serialize for Declaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.base.len() + self.states.len()))?;
        for (name, value) in self.base.iter() {
            map.serialize_entry(name, value)?;
        }
        for (state, props) in &self.states {
            map.serialize_entry(state.nested_selector(), props)?;
        }
        map.end()
    }
}

/// Converts a camelCase property name to its CSS (kebab-case) form.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Renders a value as CSS text for the given property.
pub fn css_text(name: &str, value: &CssValue) -> String {
    match value {
        CssValue::Number(n) if *n != 0.0 && !UNITLESS_PROPERTIES.contains(name) => {
            format!("{}px", n)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("padding"), "padding");
        assert_eq!(kebab_case("zIndex"), "z-index");
        assert_eq!(kebab_case("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_css_text_units() {
        assert_eq!(css_text("padding", &CssValue::Number(8.0)), "8px");
        assert_eq!(css_text("padding", &CssValue::Number(0.0)), "0");
        assert_eq!(css_text("opacity", &CssValue::Number(0.5)), "0.5");
        assert_eq!(css_text("zIndex", &CssValue::Number(10.0)), "10");
        assert_eq!(css_text("width", &CssValue::percent(100.0)), "100%");
        assert_eq!(css_text("display", &CssValue::keyword("flex")), "flex");
    }

    #[test]
    fn test_insert_default_keeps_existing() {
        let mut props = Properties::new();
        props.insert("display", CssValue::keyword("grid"));
        props.insert_default("display", CssValue::keyword("flex"));
        assert_eq!(props.get("display"), Some(&CssValue::keyword("grid")));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut props = Properties::new();
        props.insert("width", CssValue::Number(1.0));
        props.insert("height", CssValue::Number(1.0));
        props.insert("width", CssValue::Number(2.0));
        let names: Vec<_> = props.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["width", "height"]);
    }

    #[test]
    fn test_computed_overlays_in_state_order() {
        let mut base = Properties::new();
        base.insert("color", CssValue::keyword("blue"));
        base.insert("opacity", CssValue::Number(1.0));

        let mut hover = Properties::new();
        hover.insert("color", CssValue::keyword("red"));
        let mut disabled = Properties::new();
        disabled.insert("color", CssValue::keyword("gray"));
        disabled.insert("opacity", CssValue::Number(0.5));

        // Inserted out of order on purpose
        let declaration = Declaration::from_parts(
            base,
            [(PseudoState::Disabled, disabled), (PseudoState::Hover, hover)],
        );

        let computed = declaration.computed(StateFlags::HOVER | StateFlags::DISABLED);
        assert_eq!(computed.get("color"), Some(&CssValue::keyword("gray")));
        assert_eq!(computed.get("opacity"), Some(&CssValue::Number(0.5)));

        let idle = declaration.computed(StateFlags::empty());
        assert_eq!(idle.get("color"), Some(&CssValue::keyword("blue")));
    }

    #[test]
    fn test_to_css_skips_empty_blocks() {
        let mut hover = Properties::new();
        hover.insert("color", CssValue::keyword("red"));
        let declaration = Declaration::from_parts(
            Properties::new(),
            [(PseudoState::Hover, hover), (PseudoState::Focus, Properties::new())],
        );
        assert_eq!(declaration.to_css(".x"), ".x:hover {\n  color: red;\n}\n");
    }

    #[test]
    fn test_state_blocks_keep_fixed_order() {
        let block = |color: &str| {
            let mut props = Properties::new();
            props.insert("color", CssValue::keyword(color));
            props
        };
        let mut declaration = Declaration::from_parts(
            Properties::new(),
            [
                (PseudoState::FocusVisible, block("teal")),
                (PseudoState::Hover, block("red")),
            ],
        );
        declaration.set_state(PseudoState::Active, block("navy"));

        let order: Vec<_> = declaration.states().map(|(state, _)| state).collect();
        assert_eq!(
            order,
            [PseudoState::Hover, PseudoState::Active, PseudoState::FocusVisible]
        );
        assert_eq!(
            declaration.to_css(".x"),
            ".x:hover {\n  color: red;\n}\n\
             .x:active {\n  color: navy;\n}\n\
             .x:focus-visible {\n  color: teal;\n}\n"
        );
        assert_eq!(
            serde_json::to_string(&declaration).unwrap(),
            r##"{"&:hover":{"color":"red"},"&:active":{"color":"navy"},"&:focus-visible":{"color":"teal"}}"##
        );
    }

    #[test]
    fn test_validate_checks_state_blocks() {
        let mut hover = Properties::new();
        hover.insert("color", CssValue::keyword("red } .evil {"));
        let declaration = Declaration::from_parts(Properties::new(), [(PseudoState::Hover, hover)]);
        assert!(declaration.validate().is_err());
        assert!(Declaration::new().validate().is_ok());
    }

    #[test]
    fn test_serialize_nests_state_blocks() {
        let mut base = Properties::new();
        base.insert("color", CssValue::keyword("blue"));
        let mut focus = Properties::new();
        focus.insert("outlineWidth", CssValue::Number(2.0));
        let declaration =
            Declaration::from_parts(base, [(PseudoState::FocusVisible, focus)]);

        assert_eq!(
            serde_json::to_string(&declaration).unwrap(),
            r##"{"color":"blue","&:focus-visible":{"outlineWidth":2}}"##
        );
    }
}
