//! Error types for tile map loading

use std::io;
use thiserror::Error;

/// Tile map error type
#[derive(Error, Debug)]
pub enum Error {
    /// The stream could not be opened, read in full, or inflated
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A layer declares more tiles than can be addressed
    #[error("layer {layer}: {width}x{height} tiles exceeds the addressable tile count")]
    TooManyTiles { layer: usize, width: u32, height: u32 },

    /// A layer built in code is too large to address
    #[error("a {width}x{height} layer exceeds the addressable tile count")]
    LayerTooLarge { width: u32, height: u32 },

    /// A layer's dimensions differ from the map's (layer 0)
    #[error("layer {layer} is {width}x{height}, expected {expected_width}x{expected_height}")]
    LayerSizeMismatch {
        layer: usize,
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    /// A layer was built with the wrong number of tiles
    #[error("{width}x{height} layer needs {expected} tiles, got {actual}")]
    TileCount {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

impl Error {
    /// True for malformed contents, false for I/O and decompression failures
    pub fn is_format(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

/// Result type for tile map operations
pub type Result<T> = std::result::Result<T, Error>;
