//! Integration tests for the prop forwarding filter.
//!
//! The denylist must match the style vocabulary exactly: a style key that
//! slips through ends up as an invalid DOM attribute, and a DOM key that is
//! blocked silently disappears.

use block_css::props::{PropBag, PropValue, StateStyles, StyleProps, StyleVocabulary, partition};
use block_css::{blocked_props, is_state_prop, is_style_prop, should_forward_prop};
use proptest::prelude::*;

#[test]
fn test_denylist_is_exactly_the_vocabulary() {
    let mut expected: Vec<&str> = StyleProps::KEYS
        .iter()
        .copied()
        .chain(StateStyles::KEYS)
        .collect();
    expected.sort_unstable();

    assert_eq!(blocked_props(), expected);
}

#[test]
fn test_vocabulary_covers_every_category() {
    for key in [
        "position", "inset", "zIndex", "pointerEvents", "opacity", "padding", "paddingX",
        "paddingY", "marginX", "marginY", "display", "flexDirection", "justifyContent", "gap",
        "rowGap", "columnGap", "width", "maxHeight", "size", "borderRadius",
        "borderTopRightRadius", "backgroundColor", "backgroundImage", "backgroundSize",
        "color", "borderLeft", "boxShadow", "outlineOffset", "overflow", "whiteSpace",
        "transition", "cursor", "fontSize", "letterSpacing", "textOverflow",
        "contentCentered",
    ] {
        assert!(is_style_prop(key), "{key} missing from vocabulary");
        assert!(!should_forward_prop(key));
    }
}

#[test]
fn test_state_keys_are_blocked() {
    for key in ["_hover", "_focus", "_active", "_disabled", "_visited", "_focusVisible"] {
        assert!(is_state_prop(key));
        assert!(!should_forward_prop(key), "{key} leaked");
    }
}

#[test]
fn test_known_dom_props_are_forwarded() {
    for key in ["onClick", "id", "role", "data-testid", "aria-label", "children", "href"] {
        assert!(should_forward_prop(key), "{key} was dropped");
    }
}

#[test]
fn test_partition_agrees_with_filter() {
    let mut bag = PropBag::new();
    for key in StyleProps::KEYS {
        let value: PropValue = if *key == "contentCentered" {
            true.into()
        } else {
            "1px".into()
        };
        bag.insert(*key, value);
    }
    bag.insert("aria-hidden", "true");
    bag.insert("data-state", "open");

    let parts = partition(&bag).unwrap();
    let forwarded: Vec<_> = parts.forwarded.keys().collect();
    assert_eq!(forwarded, ["aria-hidden", "data-state"]);
}

proptest! {
    #[test]
    fn aria_and_data_attributes_are_always_forwarded(suffix in "[a-z][a-z-]{0,16}") {
        let aria = format!("aria-{}", suffix);
        let data = format!("data-{}", suffix);
        prop_assert!(should_forward_prop(&aria));
        prop_assert!(should_forward_prop(&data));
    }

    #[test]
    fn unknown_keys_are_forwarded(key in "[a-zA-Z][a-zA-Z0-9]{0,20}") {
        let blocked = StyleProps::KEYS.contains(&key.as_str());
        prop_assert_eq!(should_forward_prop(&key), !blocked);
    }

    #[test]
    fn every_vocabulary_key_is_blocked(index in 0..StyleProps::KEYS.len()) {
        prop_assert!(!should_forward_prop(StyleProps::KEYS[index]));
    }
}
