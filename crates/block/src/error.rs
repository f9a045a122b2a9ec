use block_css::BlockCssError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlockError {
    #[error(transparent)]
    Css(#[from] BlockCssError),

    #[error("Invalid element tag: {0:?}")]
    InvalidTag(String),

    #[error("Invalid attribute name: {0:?}")]
    InvalidAttribute(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, BlockError>;
