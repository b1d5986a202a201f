//! Tile map decoder
//!
//! Stream layout, little-endian, no padding:
//! - `version: u32`, `layer_count: u32`
//! - per layer: `width: u32`, `height: u32`, then `width * height` tiles
//!   in column-major order
//!
//! `.xp` files wrap that stream in gzip.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{Error, Result};
use crate::layer::{tile_count, Layer, TileMap};
use crate::tile::Tile;

/// Upper bound on up-front allocation; larger layers grow as tiles arrive
const MAX_PREALLOCATED_TILES: usize = 64 * 1024;
const MAX_PREALLOCATED_LAYERS: u32 = 64;

/// Open and decode a gzip-compressed tile map file
pub fn load<P: AsRef<Path>>(path: P) -> Result<TileMap> {
    let path = path.as_ref();
    log::debug!("Loading tile map from {:?}", path);
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Decode a gzip-compressed tile map stream
pub fn decode<R: Read>(reader: R) -> Result<TileMap> {
    decode_uncompressed(GzDecoder::new(reader))
}

/// Decode a tile map stream that has already been inflated
pub fn decode_uncompressed<R: Read>(mut reader: R) -> Result<TileMap> {
    let version = read_u32(&mut reader)?;
    let layer_count = read_u32(&mut reader)?;

    let mut layers = Vec::with_capacity(layer_count.min(MAX_PREALLOCATED_LAYERS) as usize);
    for index in 0..layer_count as usize {
        let layer = read_layer(&mut reader, index)?;
        if let Some(first) = layers.first() {
            check_same_size(first, &layer, index)?;
        }
        layers.push(layer);
    }

    let map = TileMap::new(version, layers)?;
    log::debug!(
        "Decoded tile map: version {}, {} layers, {}x{}",
        map.version(),
        map.layer_count(),
        map.width(),
        map.height()
    );
    Ok(map)
}

fn read_layer<R: Read>(reader: &mut R, index: usize) -> Result<Layer> {
    let width = read_u32(reader)?;
    let height = read_u32(reader)?;
    let count = tile_count(width, height).ok_or(Error::TooManyTiles {
        layer: index,
        width,
        height,
    })?;

    let mut tiles = Vec::with_capacity(count.min(MAX_PREALLOCATED_TILES));
    let mut buf = [0u8; Tile::SIZE];
    for _ in 0..count {
        reader.read_exact(&mut buf)?;
        tiles.push(Tile::from_bytes(&buf));
    }

    log::trace!("Layer {}: {}x{}", index, width, height);
    Layer::from_tiles(width, height, tiles)
}

fn check_same_size(first: &Layer, layer: &Layer, index: usize) -> Result<()> {
    if first.width() == layer.width() && first.height() == layer.height() {
        return Ok(());
    }
    Err(Error::LayerSizeMismatch {
        layer: index,
        width: layer.width(),
        height: layer.height(),
        expected_width: first.width(),
        expected_height: first.height(),
    })
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}
