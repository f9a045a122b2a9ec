//! Style prop resolution.
//!
//! Compiles [`StyleProps`] into [`Properties`] and a [`BlockStyle`] into a
//! full [`Declaration`]:
//!
//! 1. Every set passthrough field is copied 1:1, in vocabulary order. Unset
//!    fields are omitted, never defaulted.
//! 2. `size` overwrites `width` and `height`.
//! 3. `contentCentered: true` supplies `display: flex`,
//!    `justifyContent: center` and `alignItems: center` as defaults; explicit
//!    values win.
//! 4. Axis shorthands (`paddingX`, `paddingY`, `marginX`, `marginY`) fill
//!    the two physical sides that were not set explicitly. An explicit side
//!    always wins, whatever order the props were given in.
//! 5. Each state block is resolved with the same rules into its own nested
//!    block. State blocks are one level deep by construction.
//!
//! Resolution is pure and total: equal input yields equal output.

use log::trace;

use crate::declaration::{Declaration, Properties};
use crate::props::{BlockStyle, StyleProps, StyleVocabulary};
use crate::types::CssValue;

/// Options that change how a [`BlockStyle`] is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Drop state blocks that resolve to no properties.
    ///
    /// Off by default: a present-but-empty state block is emitted as an
    /// empty nested block. Either way the rendered CSS is the same.
    pub omit_empty_states: bool,
}

impl ResolveOptions {
    pub fn omit_empty_states(mut self, omit: bool) -> Self {
        self.omit_empty_states = omit;
        self
    }
}

/// Resolves base props and state blocks with default options.
///
/// # Example
///
/// ```rust
/// use block_css::props::{BlockStyle, StyleProps};
/// use block_css::types::CssValue;
/// use block_css::resolve;
///
/// let style = BlockStyle::new(StyleProps {
///     size: Some(24.into()),
///     width: Some(100.into()),
///     ..Default::default()
/// });
///
/// let declaration = resolve(&style);
/// assert_eq!(declaration.base().get("width"), Some(&CssValue::Number(24.0)));
/// assert_eq!(declaration.base().get("height"), Some(&CssValue::Number(24.0)));
/// ```
pub fn resolve(style: &BlockStyle) -> Declaration {
    resolve_with(style, &ResolveOptions::default())
}

/// Resolves base props and state blocks.
pub fn resolve_with(style: &BlockStyle, options: &ResolveOptions) -> Declaration {
    let mut declaration = Declaration::from_base(resolve_props(&style.base));

    for (state, props) in style.states.iter() {
        let resolved = resolve_props(props);
        if options.omit_empty_states && resolved.is_empty() {
            continue;
        }
        declaration.set_state(state, resolved);
    }

    trace!(
        "resolved {} base properties, {} state blocks",
        declaration.base().len(),
        declaration.states().count()
    );

    declaration
}

/// Resolves a single set of style props into flat CSS properties.
pub fn resolve_props(props: &StyleProps) -> Properties {
    let mut out = Properties::new();

    props.visit_passthrough(&mut |name, value| out.insert(name, value.clone()));

    if let Some(size) = &props.size {
        out.insert("width", size.clone());
        out.insert("height", size.clone());
    }

    if props.content_centered == Some(true) {
        out.insert_default("display", CssValue::keyword("flex"));
        out.insert_default("justifyContent", CssValue::keyword("center"));
        out.insert_default("alignItems", CssValue::keyword("center"));
    }

    expand_axis(&mut out, props.padding_x.as_ref(), ["paddingLeft", "paddingRight"]);
    expand_axis(&mut out, props.padding_y.as_ref(), ["paddingTop", "paddingBottom"]);
    expand_axis(&mut out, props.margin_x.as_ref(), ["marginLeft", "marginRight"]);
    expand_axis(&mut out, props.margin_y.as_ref(), ["marginTop", "marginBottom"]);

    out
}

// Sides already present came from explicit props and take precedence.
fn expand_axis(out: &mut Properties, value: Option<&CssValue>, sides: [&'static str; 2]) {
    let Some(value) = value else {
        return;
    };
    for side in sides {
        out.insert_default(side, value.clone());
    }
}
