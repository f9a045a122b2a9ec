use crate::props::StyleProps;
use crate::types::PseudoState;

/// Style blocks applied while the element is in a pseudo-class state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateStyles {
    pub hover: Option<StyleProps>,
    pub focus: Option<StyleProps>,
    pub active: Option<StyleProps>,
    pub disabled: Option<StyleProps>,
    pub visited: Option<StyleProps>,
    pub focus_visible: Option<StyleProps>,
}

impl StateStyles {
    /// The state prop keys, in emission order.
    pub const KEYS: [&'static str; 6] = [
        PseudoState::Hover.prop_key(),
        PseudoState::Focus.prop_key(),
        PseudoState::Active.prop_key(),
        PseudoState::Disabled.prop_key(),
        PseudoState::Visited.prop_key(),
        PseudoState::FocusVisible.prop_key(),
    ];

    pub fn get(&self, state: PseudoState) -> Option<&StyleProps> {
        self.slot(state).as_ref()
    }

    pub fn set(&mut self, state: PseudoState, props: StyleProps) {
        *self.slot_mut(state) = Some(props);
    }

    /// Returns the block for `state`, creating an empty one if needed.
    pub fn entry(&mut self, state: PseudoState) -> &mut StyleProps {
        self.slot_mut(state).get_or_insert_with(StyleProps::default)
    }

    /// Present blocks in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (PseudoState, &StyleProps)> {
        PseudoState::ALL
            .into_iter()
            .filter_map(|state| self.get(state).map(|props| (state, props)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn slot(&self, state: PseudoState) -> &Option<StyleProps> {
        match state {
            PseudoState::Hover => &self.hover,
            PseudoState::Focus => &self.focus,
            PseudoState::Active => &self.active,
            PseudoState::Disabled => &self.disabled,
            PseudoState::Visited => &self.visited,
            PseudoState::FocusVisible => &self.focus_visible,
        }
    }

    fn slot_mut(&mut self, state: PseudoState) -> &mut Option<StyleProps> {
        match state {
            PseudoState::Hover => &mut self.hover,
            PseudoState::Focus => &mut self.focus,
            PseudoState::Active => &mut self.active,
            PseudoState::Disabled => &mut self.disabled,
            PseudoState::Visited => &mut self.visited,
            PseudoState::FocusVisible => &mut self.focus_visible,
        }
    }
}

/// Everything the resolver needs: base props plus state blocks.
///
/// # Example
///
/// ```rust
/// use block_css::props::{BlockStyle, StyleProps};
/// use block_css::types::PseudoState;
///
/// let style = BlockStyle::new(StyleProps {
///     color: Some("blue".into()),
///     ..Default::default()
/// })
/// .state(
///     PseudoState::Hover,
///     StyleProps {
///         color: Some("red".into()),
///         ..Default::default()
///     },
/// );
/// assert!(style.states.get(PseudoState::Hover).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockStyle {
    pub base: StyleProps,
    pub states: StateStyles,
}

impl BlockStyle {
    pub fn new(base: StyleProps) -> Self {
        Self {
            base,
            states: StateStyles::default(),
        }
    }

    /// Sets the block for `state`, returning the style for chaining.
    pub fn state(mut self, state: PseudoState, props: StyleProps) -> Self {
        self.states.set(state, props);
        self
    }
}
