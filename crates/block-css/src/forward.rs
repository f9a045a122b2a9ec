//! Prop forwarding filter.
//!
//! Decides, per prop key, whether a prop reaches the rendered DOM element.
//! The filter is a denylist: every style key and every state key is
//! consumed, everything else (`onClick`, `role`, `aria-*`, `data-*`,
//! `children`, attributes that don't exist yet) is forwarded untouched.
//!
//! The denylist is built once from [`StyleProps::KEYS`], which the
//! `StyleProps` derive generates from the struct definition, plus
//! [`StateStyles::KEYS`].

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::props::{StateStyles, StyleProps, StyleVocabulary};

static BLOCKED_PROPS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    StyleProps::KEYS
        .iter()
        .chain(StateStyles::KEYS.iter())
        .copied()
        .collect()
});

/// Returns `true` if `key` should be passed through to the DOM element.
///
/// # Example
///
/// ```rust
/// use block_css::should_forward_prop;
///
/// assert!(should_forward_prop("onClick"));
/// assert!(should_forward_prop("aria-label"));
/// assert!(!should_forward_prop("paddingX"));
/// assert!(!should_forward_prop("_hover"));
/// ```
pub fn should_forward_prop(key: &str) -> bool {
    !BLOCKED_PROPS.contains(key)
}

/// Returns `true` if `key` is a base style prop.
pub fn is_style_prop(key: &str) -> bool {
    StyleProps::KEYS.contains(&key)
}

/// Returns `true` if `key` is a state block prop (`_hover`, ...).
pub fn is_state_prop(key: &str) -> bool {
    StateStyles::KEYS.contains(&key)
}

/// Every blocked prop key, sorted.
pub fn blocked_props() -> Vec<&'static str> {
    let mut keys: Vec<_> = BLOCKED_PROPS.iter().copied().collect();
    keys.sort_unstable();
    keys
}
