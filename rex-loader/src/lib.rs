//! Rex Loader - REXPaint `.xp` tile map reader and writer
//!
//! This crate reads the layered, gzip-compressed `.xp` format into a
//! [`TileMap`] and merges its layers into one with [`flatten`].
//!
//! - Tiles are 10-byte records: glyph, 3 reserved bytes, fg RGB, bg RGB
//! - Layers are stored column-major
//! - A magenta background `(255, 0, 255)` marks a tile as transparent
//!
//! Every size read from the stream is validated before it is used, and no
//! partial map is returned when decoding fails.

mod decoder;
mod encoder;
mod error;
mod flatten;
mod layer;
mod tile;

pub use decoder::{decode, decode_uncompressed, load};
pub use encoder::{encode, encode_uncompressed, save, to_bytes};
pub use error::{Error, Result};
pub use flatten::flatten;
pub use layer::{tile_count, Layer, TileMap};
pub use tile::{Rgb, Tile};
