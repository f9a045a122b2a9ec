//! Rendered elements.
//!
//! An [`Element`] is what a [`Block`](crate::Block) renders to: a tag, an
//! optional generated class name, the forwarded DOM attributes and children.
//! [`Element::to_html`] serializes it as markup.

use std::fmt::Write as _;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedNode {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    /// Generated class plus any `className` the caller forwarded.
    pub class_name: Option<String>,
    /// Forwarded attributes in prop order.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<RenderedNode>,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Serializes the element and its children as HTML.
    ///
    /// Event handler props (`onClick`, ...) have no markup form and are
    /// skipped. Attribute values and text are escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, html: &mut String) {
        let _ = write!(html, "<{}", self.tag);
        if let Some(class_name) = &self.class_name {
            let _ = write!(html, " class=\"{}\"", escape(class_name));
        }
        for (name, value) in &self.attributes {
            if is_event_handler(name) {
                continue;
            }
            if value.is_empty() {
                let _ = write!(html, " {}", name);
            } else {
                let _ = write!(html, " {}=\"{}\"", name, escape(value));
            }
        }
        html.push('>');

        if self.is_void() {
            return;
        }

        for child in &self.children {
            match child {
                RenderedNode::Element(element) => element.write_html(html),
                RenderedNode::Text(text) => html.push_str(&escape(text)),
            }
        }
        let _ = write!(html, "</{}>", self.tag);
    }
}

fn is_event_handler(name: &str) -> bool {
    name.strip_prefix("on")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
