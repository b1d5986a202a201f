//! Layers and layered tile maps
//!
//! Layers store their tiles column-major: the tile at column `c`, row `r`
//! lives at `c * height + r`.

use crate::error::{Error, Result};
use crate::tile::Tile;

/// Number of tiles in a `width` x `height` layer, if addressable
pub fn tile_count(width: u32, height: u32) -> Option<usize> {
    width
        .checked_mul(height)
        .and_then(|count| usize::try_from(count).ok())
}

/// One width x height grid of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Layer {
    /// Build a layer from column-major tiles
    pub fn from_tiles(width: u32, height: u32, tiles: Vec<Tile>) -> Result<Self> {
        let expected = tile_count(width, height).ok_or(Error::LayerTooLarge { width, height })?;
        if tiles.len() != expected {
            return Err(Error::TileCount {
                width,
                height,
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// A layer of zero-valued tiles
    pub fn blank(width: u32, height: u32) -> Result<Self> {
        let count = tile_count(width, height).ok_or(Error::LayerTooLarge { width, height })?;
        Self::from_tiles(width, height, vec![Tile::default(); count])
    }

    /// Zero-valued layer whose size was already validated by a TileMap
    pub(crate) fn zeroed(width: u32, height: u32, count: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::default(); count],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tiles in column-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    /// Column-major slot of (col, row), or None if outside the layer
    pub fn index(&self, col: u32, row: u32) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(col as usize * self.height as usize + row as usize)
    }

    pub fn tile(&self, col: u32, row: u32) -> Option<&Tile> {
        self.index(col, row).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, col: u32, row: u32) -> Option<&mut Tile> {
        self.index(col, row).map(move |i| &mut self.tiles[i])
    }
}

/// An ordered stack of equally sized layers (index 0 is the bottom)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    version: u32,
    width: u32,
    height: u32,
    layers: Vec<Layer>,
}

impl TileMap {
    /// Build a map, checking that every layer matches layer 0's size
    pub fn new(version: u32, layers: Vec<Layer>) -> Result<Self> {
        let (width, height) = layers
            .first()
            .map(|l| (l.width, l.height))
            .unwrap_or((0, 0));

        for (index, layer) in layers.iter().enumerate() {
            if layer.width != width || layer.height != height {
                return Err(Error::LayerSizeMismatch {
                    layer: index,
                    width: layer.width,
                    height: layer.height,
                    expected_width: width,
                    expected_height: height,
                });
            }
        }

        Ok(Self {
            version,
            width,
            height,
            layers,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Width of layer 0, or 0 for a map without layers
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of layer 0, or 0 for a map without layers
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }

    /// Merge all layers into one; see [`crate::flatten`]
    pub fn flatten(&self) -> Layer {
        crate::flatten::flatten(self)
    }
}
