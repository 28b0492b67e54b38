//! Error type shared by layout, rendering and export.

use thiserror::Error;

/// Errors raised while laying out or rendering a diagram.
#[derive(Debug, Error)]
pub enum Error {
    /// Layout exists only for 1 to 4 circles.
    #[error("unsupported variable count {0}: expected 1 to 4 variables")]
    UnsupportedVariableCount(usize),

    /// A truth table row whose length is not `variables + 1`.
    #[error("malformed truth table row {row}: expected {expected} values, found {found}")]
    MalformedRow { row: usize, expected: usize, found: usize },

    #[error("failed to export image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
