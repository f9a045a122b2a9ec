//! Procedural macros for the block-css style vocabulary.
//!
//! This crate provides `#[derive(StyleProps)]`, which turns a struct of
//! optional style fields into the single source of truth for the prop
//! vocabulary: the list of prop keys used by the forwarding filter, the
//! passthrough visitor used by the resolver, and the typed setter used when
//! partitioning an untyped prop bag.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod codegen;
mod parse;

/// Derives `block_css::props::StyleVocabulary` for a struct of `Option` fields.
///
/// # Field Mapping
///
/// Every field becomes a prop key named after the camelCase form of the
/// field name:
/// - `padding_x` becomes `paddingX`
/// - `z_index` becomes `zIndex`
/// - `#[style(rename = "inset")]` overrides the generated key
///
/// Plain fields must be `Option<CssValue>` and are emitted 1:1 by the
/// resolver. Fields marked `#[style(shorthand)]` are part of the vocabulary
/// (so they are never forwarded to the DOM) but are skipped by the
/// passthrough visitor; the resolver expands them itself.
///
/// # Example
///
/// ```ignore
/// #[derive(Default, StyleProps)]
/// pub struct StyleProps {
///     pub padding: Option<CssValue>,
///     #[style(shorthand)]
///     pub padding_x: Option<CssValue>,
///     #[style(shorthand)]
///     pub content_centered: Option<bool>,
/// }
///
/// assert_eq!(StyleProps::KEYS, &["padding", "paddingX", "contentCentered"]);
/// ```
#[proc_macro_derive(StyleProps, attributes(style))]
pub fn derive_style_props(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match parse::StyleStruct::from_derive(&input) {
        Ok(parsed) => codegen::generate(&parsed).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
