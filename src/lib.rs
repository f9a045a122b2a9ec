//! # blockstyle
//!
//! Typed style props for UI primitives, compiled to CSS.
//!
//! This crate re-exports the workspace's public API:
//!
//! - [`css`]: the style prop vocabulary, resolver and forwarding filter
//!   (`block-css`)
//! - [`Block`], [`StyleRegistry`] and friends: the `Block` primitive that
//!   turns a mixed prop bag into a class name plus DOM attributes (`block`)
//!
//! ```rust
//! use blockstyle::css::props::PropBag;
//! use blockstyle::{Block, StyleRegistry, should_forward_prop};
//!
//! assert!(!should_forward_prop("marginX"));
//!
//! let mut registry = StyleRegistry::default();
//! let element = Block::div()
//!     .prop("gap", 8)
//!     .prop("_hover", PropBag::new().with("opacity", 0.9))
//!     .render(&mut registry)
//!     .unwrap();
//! assert!(element.class_name.is_some());
//! ```

pub use block::{
    Block, BlockError, Element, Node, RegistryConfig, RenderedNode, Result, StyleRegistry,
};
pub use block_css as css;
pub use block_css::{
    BlockCssError, CssValue, Declaration, Properties, PseudoState, ResolveOptions, StateFlags,
    Theme, resolve, resolve_with, should_forward_prop,
};
