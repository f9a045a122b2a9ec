use log::warn;

use crate::forward::should_forward_prop;
use crate::props::{BlockStyle, PropBag, PropValue, StyleProps, StyleVocabulary};
use crate::types::PseudoState;
use crate::{BlockCssError, Result};

/// A prop bag split into style input and forwarded DOM props.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitioned {
    /// Typed style props and state blocks, ready for the resolver.
    pub style: BlockStyle,
    /// Everything else, in the bag's original order.
    pub forwarded: PropBag,
}

/// Splits a mixed prop bag into style props and DOM props.
///
/// Style keys are converted into their typed fields; state keys (`_hover`,
/// ...) must hold a nested bag, whose entries become that state's block.
/// Within a state bag, nested state keys and non-style keys are dropped with
/// a warning: they are neither recursed into nor forwarded.
///
/// # Example
///
/// ```rust
/// use block_css::props::{partition, PropBag};
///
/// let bag = PropBag::new()
///     .with("padding", 8)
///     .with("aria-label", "Close")
///     .with("_hover", PropBag::new().with("opacity", 0.5));
///
/// let parts = partition(&bag).unwrap();
/// assert!(parts.style.base.padding.is_some());
/// assert!(parts.forwarded.contains("aria-label"));
/// assert!(!parts.forwarded.contains("_hover"));
/// ```
pub fn partition(bag: &PropBag) -> Result<Partitioned> {
    let mut parts = Partitioned::default();

    for (key, value) in bag.iter() {
        if should_forward_prop(key) {
            parts.forwarded.insert(key, value.clone());
            continue;
        }

        match PseudoState::from_prop_key(key) {
            Some(state) => {
                let PropValue::Bag(inner) = value else {
                    return Err(BlockCssError::InvalidPropValue {
                        key: key.to_string(),
                        expected: "prop bag",
                        found: value.kind(),
                    });
                };
                fill_state_block(state, inner, parts.style.states.entry(state))?;
            }
            None => {
                parts.style.base.set_prop(key, value)?;
            }
        }
    }

    Ok(parts)
}

fn fill_state_block(state: PseudoState, bag: &PropBag, block: &mut StyleProps) -> Result<()> {
    for (key, value) in bag.iter() {
        if PseudoState::from_prop_key(key).is_some() {
            warn!(
                "dropping nested state `{}` inside `{}`: state blocks do not nest",
                key,
                state.prop_key()
            );
            continue;
        }

        if !block.set_prop(key, value)? {
            warn!(
                "dropping non-style prop `{}` inside `{}`",
                key,
                state.prop_key()
            );
        }
    }

    Ok(())
}
