//! # block - the Block UI primitive
//!
//! Builds elements from a mixed prop bag. Style props are compiled to a
//! class name through [`block_css`]; everything else lands on the element.
//!
//! ```rust
//! use block::{Block, StyleRegistry};
//!
//! let mut registry = StyleRegistry::default();
//! let element = Block::new("button")
//!     .prop("paddingX", 12)
//!     .prop("contentCentered", true)
//!     .prop("aria-label", "Close")
//!     .text("×")
//!     .render(&mut registry)
//!     .unwrap();
//!
//! let html = element.to_html();
//! assert!(html.starts_with("<button class=\"b-"));
//! assert!(html.contains("aria-label=\"Close\""));
//! assert!(registry.stylesheet().contains("justify-content: center;"));
//! ```

pub mod block;
pub mod element;
pub mod error;
pub mod registry;

pub use block::{Block, Node};
pub use element::{Element, RenderedNode};
pub use error::{BlockError, Result};
pub use registry::{RegistryConfig, StyleRegistry};
