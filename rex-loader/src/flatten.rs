//! Layer flattening
//!
//! Layers are visited from the top (highest index) down to layer 0, and every
//! opaque tile overwrites the accumulator. The last write wins, so each
//! position ends up holding the lowest-indexed opaque tile. Positions that are
//! transparent in every layer stay zero-valued.

use crate::layer::{Layer, TileMap};

/// Merge every layer of `map` into a single layer of the map's size
pub fn flatten(map: &TileMap) -> Layer {
    let count = map.layers().first().map_or(0, |l| l.tiles().len());
    let mut working = Layer::zeroed(map.width(), map.height(), count);

    for layer in map.layers().iter().rev() {
        for (slot, tile) in working.tiles_mut().iter_mut().zip(layer.tiles()) {
            if !tile.is_transparent() {
                *slot = *tile;
            }
        }
    }

    working
}
