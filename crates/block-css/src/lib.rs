//! # block-css - Style props compiled to CSS declarations
//!
//! UI primitives like `Block` accept a wide, typed set of style props
//! (spacing, sizing, flex layout, color, border, typography, ...) next to
//! ordinary DOM attributes. This crate provides the two pieces that make
//! that work:
//!
//! - **Resolver**: compiles [`StyleProps`](props::StyleProps) plus optional
//!   pseudo-state blocks into a [`Declaration`], applying shorthand
//!   expansion and precedence rules
//! - **Forwarding filter**: decides for every prop key whether it is a style
//!   prop (consumed) or a DOM prop (forwarded)
//!
//! ## Quick Start
//!
//! ```rust
//! use block_css::props::{partition, PropBag};
//! use block_css::resolve;
//!
//! let bag = PropBag::new()
//!     .with("paddingX", 16)
//!     .with("contentCentered", true)
//!     .with("role", "button")
//!     .with("_hover", PropBag::new().with("backgroundColor", "red"));
//!
//! let parts = partition(&bag).unwrap();
//! let declaration = resolve(&parts.style);
//!
//! assert_eq!(declaration.base().len(), 5);
//! assert!(parts.forwarded.contains("role"));
//! ```
//!
//! ## Precedence
//!
//! - `size` wins over `width`/`height`
//! - `contentCentered` supplies defaults; explicit `display`,
//!   `justifyContent` and `alignItems` win
//! - explicit sides win over axis shorthands (`paddingX`, `marginY`, ...)
//!
//! ## Modules
//!
//! - [`props`]: the vocabulary, prop bags and partitioning
//! - [`resolve`](mod@resolve): the resolver
//! - [`forward`]: the forwarding filter
//! - [`declaration`]: resolved output, CSS text, computed state styles
//! - [`theme`]: `$token` substitution
//! - [`types`]: values and pseudo-states
//! - [`parser`]: CSS value text parsing
//! - [`error`]: error types

// Lets the StyleProps derive refer to this crate as `::block_css` from inside it.
extern crate self as block_css;

pub mod declaration;
pub mod error;
pub mod forward;
pub mod parser;
pub mod props;
pub mod resolve;
pub mod theme;
pub mod types;

pub use block_css_macros::StyleProps;
pub use declaration::{Declaration, Properties};
pub use error::{BlockCssError, Result};
pub use forward::{blocked_props, is_state_prop, is_style_prop, should_forward_prop};
pub use resolve::{ResolveOptions, resolve, resolve_props, resolve_with};
pub use theme::Theme;
pub use types::{CssValue, PseudoState, StateFlags};
