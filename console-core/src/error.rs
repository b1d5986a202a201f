//! Error types for grid access

use thiserror::Error;

use crate::geometry::Rect;

/// Grid access error. Every variant is an index error: the call that
/// produced it wrote nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A single cell position outside the grid
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A rectangle that does not fit inside the grid
    #[error("{rect} does not fit inside the {width}x{height} grid")]
    RectOutOfBounds {
        rect: Rect,
        width: usize,
        height: usize,
    },

    /// A grid whose cell count overflows `usize`
    #[error("a {width}x{height} grid has too many cells")]
    GridTooLarge { width: usize, height: usize },

    /// A cell buffer whose length does not match its rectangle
    #[error("expected {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },
}

/// Result type for grid operations
pub type Result<T> = std::result::Result<T, Error>;
