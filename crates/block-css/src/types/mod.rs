pub mod state;
pub mod value;

pub use state::{PseudoState, StateFlags};
pub use value::{CssValue, Unit};
