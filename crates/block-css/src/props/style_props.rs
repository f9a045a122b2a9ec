use block_css_macros::StyleProps;

use crate::types::CssValue;

/// Every style prop a primitive accepts.
///
/// Fields map to camelCase prop keys (`padding_x` is `paddingX`). Plain
/// fields pass through to the CSS property of the same name; fields marked
/// `#[style(shorthand)]` are expanded by the resolver:
///
/// - `size` sets both `width` and `height`, and wins over them
/// - `padding_x`/`padding_y`/`margin_x`/`margin_y` set two physical sides,
///   unless the side is set explicitly
/// - `content_centered` defaults `display: flex`, `justifyContent: center`
///   and `alignItems: center`
///
/// There are deliberately no state fields here: a state block is itself a
/// `StyleProps`, so state keys cannot nest.
#[derive(Debug, Clone, Default, PartialEq, StyleProps)]
pub struct StyleProps {
    // Positioning
    pub position: Option<CssValue>,
    pub inset: Option<CssValue>,
    pub top: Option<CssValue>,
    pub right: Option<CssValue>,
    pub bottom: Option<CssValue>,
    pub left: Option<CssValue>,
    pub z_index: Option<CssValue>,
    pub pointer_events: Option<CssValue>,
    pub opacity: Option<CssValue>,

    // Spacing
    pub padding: Option<CssValue>,
    pub padding_top: Option<CssValue>,
    pub padding_right: Option<CssValue>,
    pub padding_bottom: Option<CssValue>,
    pub padding_left: Option<CssValue>,
    #[style(shorthand)]
    pub padding_x: Option<CssValue>,
    #[style(shorthand)]
    pub padding_y: Option<CssValue>,
    pub margin: Option<CssValue>,
    pub margin_top: Option<CssValue>,
    pub margin_right: Option<CssValue>,
    pub margin_bottom: Option<CssValue>,
    pub margin_left: Option<CssValue>,
    #[style(shorthand)]
    pub margin_x: Option<CssValue>,
    #[style(shorthand)]
    pub margin_y: Option<CssValue>,

    // Layout
    pub display: Option<CssValue>,
    pub flex: Option<CssValue>,
    pub flex_direction: Option<CssValue>,
    pub flex_wrap: Option<CssValue>,
    pub flex_grow: Option<CssValue>,
    pub flex_shrink: Option<CssValue>,
    pub flex_basis: Option<CssValue>,
    pub justify_content: Option<CssValue>,
    pub align_items: Option<CssValue>,
    pub align_self: Option<CssValue>,
    pub align_content: Option<CssValue>,
    pub gap: Option<CssValue>,
    pub row_gap: Option<CssValue>,
    pub column_gap: Option<CssValue>,
    #[style(shorthand)]
    pub content_centered: Option<bool>,

    // Sizing
    pub width: Option<CssValue>,
    pub height: Option<CssValue>,
    pub min_width: Option<CssValue>,
    pub min_height: Option<CssValue>,
    pub max_width: Option<CssValue>,
    pub max_height: Option<CssValue>,
    #[style(shorthand)]
    pub size: Option<CssValue>,

    // Radius
    pub border_radius: Option<CssValue>,
    pub border_top_left_radius: Option<CssValue>,
    pub border_top_right_radius: Option<CssValue>,
    pub border_bottom_left_radius: Option<CssValue>,
    pub border_bottom_right_radius: Option<CssValue>,

    // Background & color
    pub background_color: Option<CssValue>,
    pub background_image: Option<CssValue>,
    pub background_size: Option<CssValue>,
    pub color: Option<CssValue>,

    // Border
    pub border: Option<CssValue>,
    pub border_top: Option<CssValue>,
    pub border_right: Option<CssValue>,
    pub border_bottom: Option<CssValue>,
    pub border_left: Option<CssValue>,
    pub box_shadow: Option<CssValue>,

    // Outline
    pub outline: Option<CssValue>,
    pub outline_color: Option<CssValue>,
    pub outline_offset: Option<CssValue>,
    pub outline_style: Option<CssValue>,
    pub outline_width: Option<CssValue>,

    // Overflow & misc
    pub overflow: Option<CssValue>,
    pub overflow_x: Option<CssValue>,
    pub overflow_y: Option<CssValue>,
    pub white_space: Option<CssValue>,
    pub transition: Option<CssValue>,
    pub cursor: Option<CssValue>,

    // Typography
    pub font_size: Option<CssValue>,
    pub font_weight: Option<CssValue>,
    pub line_height: Option<CssValue>,
    pub letter_spacing: Option<CssValue>,
    pub text_align: Option<CssValue>,
    pub text_transform: Option<CssValue>,
    pub text_overflow: Option<CssValue>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }
}
