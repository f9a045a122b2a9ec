//! Interaction states that style props can target.
//!
//! Each [`PseudoState`] is addressed three ways:
//!
//! - as a prop key on a primitive (`_hover`)
//! - as a nested selector in the declaration object (`&:hover`)
//! - as a bit in [`StateFlags`], used to compute the effective style of an
//!   element that is currently in one or more states

use bitflags::bitflags;

bitflags! {
    /// Bitflags representing an element's current pseudo-class states.
    ///
    /// # Example
    ///
    /// ```
    /// use block_css::types::StateFlags;
    ///
    /// let mut states = StateFlags::empty();
    /// states |= StateFlags::HOVER;
    /// states |= StateFlags::FOCUS_VISIBLE;
    ///
    /// assert!(states.contains(StateFlags::HOVER));
    /// assert!(!states.contains(StateFlags::ACTIVE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StateFlags: u8 {
        /// Pointer is over the element
        const HOVER         = 0b0000_0001;
        /// Element has focus
        const FOCUS         = 0b0000_0010;
        /// Element is being pressed
        const ACTIVE        = 0b0000_0100;
        /// Element is disabled
        const DISABLED      = 0b0000_1000;
        /// Link has been visited
        const VISITED       = 0b0001_0000;
        /// Element has keyboard-visible focus
        const FOCUS_VISIBLE = 0b0010_0000;
    }
}

/// A pseudo-class state with its own style block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PseudoState {
    Hover,
    Focus,
    Active,
    Disabled,
    Visited,
    FocusVisible,
}

impl PseudoState {
    /// All states, in the order their blocks are emitted.
    pub const ALL: [PseudoState; 6] = [
        PseudoState::Hover,
        PseudoState::Focus,
        PseudoState::Active,
        PseudoState::Disabled,
        PseudoState::Visited,
        PseudoState::FocusVisible,
    ];

    /// The prop key that carries this state's style block.
    pub const fn prop_key(self) -> &'static str {
        match self {
            PseudoState::Hover => "_hover",
            PseudoState::Focus => "_focus",
            PseudoState::Active => "_active",
            PseudoState::Disabled => "_disabled",
            PseudoState::Visited => "_visited",
            PseudoState::FocusVisible => "_focusVisible",
        }
    }

    /// The CSS pseudo-class, including the leading colon.
    pub const fn pseudo_class(self) -> &'static str {
        match self {
            PseudoState::Hover => ":hover",
            PseudoState::Focus => ":focus",
            PseudoState::Active => ":active",
            PseudoState::Disabled => ":disabled",
            PseudoState::Visited => ":visited",
            PseudoState::FocusVisible => ":focus-visible",
        }
    }

    /// The key used for this state's block in a declaration object.
    pub const fn nested_selector(self) -> &'static str {
        match self {
            PseudoState::Hover => "&:hover",
            PseudoState::Focus => "&:focus",
            PseudoState::Active => "&:active",
            PseudoState::Disabled => "&:disabled",
            PseudoState::Visited => "&:visited",
            PseudoState::FocusVisible => "&:focus-visible",
        }
    }

    pub const fn flag(self) -> StateFlags {
        match self {
            PseudoState::Hover => StateFlags::HOVER,
            PseudoState::Focus => StateFlags::FOCUS,
            PseudoState::Active => StateFlags::ACTIVE,
            PseudoState::Disabled => StateFlags::DISABLED,
            PseudoState::Visited => StateFlags::VISITED,
            PseudoState::FocusVisible => StateFlags::FOCUS_VISIBLE,
        }
    }

    pub fn from_prop_key(key: &str) -> Option<Self> {
        PseudoState::ALL
            .into_iter()
            .find(|state| state.prop_key() == key)
    }
}
