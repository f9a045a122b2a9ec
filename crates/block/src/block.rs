//! The `Block` primitive.
//!
//! A [`Block`] is a generic element that accepts the full style prop
//! vocabulary alongside ordinary DOM props. Rendering partitions the props,
//! resolves the style props into a declaration, registers it with a
//! [`StyleRegistry`] for a class name, and forwards everything else.
//!
//! A few forwarded props get special treatment, as a UI runtime would:
//!
//! - `as` replaces the element tag (polymorphic rendering)
//! - `className` is appended after the generated class
//! - `children` with a text value becomes a text child

use block_css::props::{PropBag, PropValue, partition};
use block_css::{Declaration, resolve_with};
use log::trace;

use crate::element::{Element, RenderedNode};
use crate::registry::StyleRegistry;
use crate::{BlockError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Block(Block),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    tag: String,
    props: PropBag,
    children: Vec<Node>,
}

impl Block {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            props: PropBag::new(),
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    /// Sets a prop, style or DOM alike.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block::{Block, StyleRegistry};
    ///
    /// let mut registry = StyleRegistry::default();
    /// let element = Block::div()
    ///     .prop("padding", 8)
    ///     .prop("role", "status")
    ///     .render(&mut registry)
    ///     .unwrap();
    ///
    /// assert!(element.class_name.is_some());
    /// assert_eq!(element.attribute("role"), Some("status"));
    /// assert_eq!(element.attribute("padding"), None);
    /// ```
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// Replaces all props with `props`.
    pub fn props(mut self, props: PropBag) -> Self {
        self.props = props;
        self
    }

    pub fn child(mut self, child: Block) -> Self {
        self.children.push(Node::Block(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn prop_bag(&self) -> &PropBag {
        &self.props
    }

    /// Resolves this block's style props without rendering.
    pub fn declaration(&self, registry: &StyleRegistry) -> Result<Declaration> {
        let parts = partition(&self.props)?;
        Ok(resolve_with(&parts.style, &registry.config().resolve))
    }

    /// Renders this block and its children.
    pub fn render(&self, registry: &mut StyleRegistry) -> Result<Element> {
        let parts = partition(&self.props)?;

        let mut tag = self.tag.clone();
        let mut extra_class = None;
        let mut attributes = Vec::with_capacity(parts.forwarded.len());
        let mut children = Vec::with_capacity(self.children.len());

        for (key, value) in parts.forwarded.iter() {
            match (key, value) {
                ("as", PropValue::Text(as_tag)) => tag = as_tag.clone(),
                ("className", PropValue::Text(class)) => extra_class = Some(class.clone()),
                ("children", PropValue::Text(text)) => {
                    children.push(RenderedNode::Text(text.clone()))
                }
                _ => {
                    if !is_valid_attribute_name(key) {
                        return Err(BlockError::InvalidAttribute(key.to_string()));
                    }
                    if let Some(attr) = value.to_attribute() {
                        attributes.push((key.to_string(), attr));
                    }
                }
            }
        }

        if !is_valid_tag(&tag) {
            return Err(BlockError::InvalidTag(tag));
        }

        let declaration = resolve_with(&parts.style, &registry.config().resolve);
        let generated = registry.register(&declaration)?;

        for child in &self.children {
            children.push(match child {
                Node::Block(block) => RenderedNode::Element(block.render(registry)?),
                Node::Text(text) => RenderedNode::Text(text.clone()),
            });
        }

        let class_name = match (generated, extra_class) {
            (Some(generated), Some(extra)) => Some(format!("{} {}", generated, extra)),
            (generated, extra) => generated.or(extra),
        };

        trace!(
            "rendered <{}> with {} forwarded attributes",
            tag,
            attributes.len()
        );

        Ok(Element {
            tag,
            class_name,
            attributes,
            children,
        })
    }
}

fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// HTML attribute names: anything but whitespace, quotes, `>`, `/`, `=` and
/// control characters.
fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tags() {
        assert!(is_valid_tag("div"));
        assert!(is_valid_tag("h1"));
        assert!(is_valid_tag("my-widget"));
        assert!(!is_valid_tag(""));
        assert!(!is_valid_tag("1div"));
        assert!(!is_valid_tag("div onload"));
    }

    #[test]
    fn test_class_name_is_merged() {
        let mut registry = StyleRegistry::default();
        let element = Block::div()
            .prop("color", "red")
            .prop("className", "card")
            .render(&mut registry)
            .unwrap();

        let class = element.class_name.unwrap();
        assert!(class.starts_with("b-"));
        assert!(class.ends_with(" card"));
    }

    #[test]
    fn test_class_name_without_styles() {
        let mut registry = StyleRegistry::default();
        let element = Block::div()
            .prop("className", "plain")
            .render(&mut registry)
            .unwrap();
        assert_eq!(element.class_name.as_deref(), Some("plain"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_as_replaces_tag() {
        let mut registry = StyleRegistry::default();
        let element = Block::div()
            .prop("as", "section")
            .render(&mut registry)
            .unwrap();
        assert_eq!(element.tag, "section");
        assert!(element.attributes.is_empty());
    }

    #[test]
    fn test_invalid_tag() {
        let mut registry = StyleRegistry::default();
        let err = Block::div()
            .prop("as", "<script>")
            .render(&mut registry)
            .unwrap_err();
        assert_eq!(err, BlockError::InvalidTag("<script>".to_string()));
    }

    #[test]
    fn test_valid_attribute_names() {
        assert!(is_valid_attribute_name("id"));
        assert!(is_valid_attribute_name("aria-label"));
        assert!(is_valid_attribute_name("data-test-id"));
        assert!(is_valid_attribute_name("xml:lang"));
        assert!(!is_valid_attribute_name(""));
        assert!(!is_valid_attribute_name("a b"));
        assert!(!is_valid_attribute_name("x=1"));
        assert!(!is_valid_attribute_name("\"quoted"));
        assert!(!is_valid_attribute_name("a/b"));
        assert!(!is_valid_attribute_name("a>b"));
        assert!(!is_valid_attribute_name("tab\u{7}"));
    }

    #[test]
    fn test_invalid_attribute_name() {
        let mut registry = StyleRegistry::default();
        let err = Block::div()
            .prop("color", "red")
            .prop("x onmouseover=alert(1) y", "v")
            .render(&mut registry)
            .unwrap_err();

        assert_eq!(
            err,
            BlockError::InvalidAttribute("x onmouseover=alert(1) y".to_string())
        );
        // Nothing is registered for a block that failed to render
        assert!(registry.is_empty());
    }
}
