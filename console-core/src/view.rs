//! Immutable decoded grids
//!
//! A view is built once from a tile map and never changes afterwards. Its
//! cells are row-major, unlike the column-major layers it is built from.

use std::io::Read;
use std::path::Path;

use rex_loader::{Layer, TileMap};

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::geometry::{checked_index, Size};

/// An immutable row-major grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    size: Size,
    cells: Vec<Cell>,
}

impl View {
    /// Create a view from row-major cells
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        let size = Size::new(width, height);
        let expected = size.area().ok_or(Error::GridTooLarge { width, height })?;
        if cells.len() != expected {
            return Err(Error::CellCount {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Convert a single (usually flattened) layer.
    ///
    /// The tile at column-major slot `c * height + r` lands at row-major
    /// `r * width + c`.
    pub fn from_layer(layer: &Layer) -> Self {
        let width = layer.width() as usize;
        let height = layer.height() as usize;

        let mut cells = vec![Cell::default(); layer.tiles().len()];
        for (idx, tile) in layer.tiles().iter().enumerate() {
            let col = idx / height;
            let row = idx % height;
            cells[row * width + col] = Cell::from_tile(tile);
        }

        Self {
            size: Size::new(width, height),
            cells,
        }
    }

    /// Flatten every layer of `map` and convert the result
    pub fn from_tile_map(map: &TileMap) -> Self {
        Self::from_layer(&map.flatten())
    }

    /// Decode a gzip-compressed `.xp` stream into a view
    pub fn decode<R: Read>(reader: R) -> rex_loader::Result<Self> {
        let map = rex_loader::decode(reader)?;
        Ok(Self::from_tile_map(&map))
    }

    /// Load an `.xp` file: decode, flatten and convert
    pub fn load<P: AsRef<Path>>(path: P) -> rex_loader::Result<Self> {
        let map = rex_loader::load(path)?;
        let view = Self::from_tile_map(&map);
        log::debug!("Loaded {}x{} view", view.width(), view.height());
        Ok(view)
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at column `x`, row `y`
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell> {
        checked_index(x, y, self.size).map(|i| &self.cells[i])
    }

    /// Like [`View::cell`], but None when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cell(x, y).ok()
    }

    /// Iterate over rows, top to bottom. Always yields `height()` rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let width = self.size.width;
        (0..self.size.height).map(move |y| &self.cells[y * width..(y + 1) * width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use rex_loader::{Rgb, Tile};

    fn tile(c: u8) -> Tile {
        Tile::new(c, Rgb::new(200, 200, 200), Rgb::new(0, 0, 0))
    }

    #[test]
    fn test_from_layer_column_to_row_major() {
        // File order: (c0,r0), (c0,r1), (c1,r0), (c1,r1)
        let layer = Layer::from_tiles(2, 2, vec![tile(b'a'), tile(b'b'), tile(b'c'), tile(b'd')])
            .unwrap();
        let view = View::from_layer(&layer);

        assert_eq!(view.cell(0, 0).unwrap().glyph, u32::from(b'a'));
        assert_eq!(view.cell(1, 0).unwrap().glyph, u32::from(b'c'));
        assert_eq!(view.cell(0, 1).unwrap().glyph, u32::from(b'b'));
        assert_eq!(view.cell(1, 1).unwrap().glyph, u32::from(b'd'));
    }

    #[test]
    fn test_from_layer_non_square() {
        // 3 wide, 2 tall
        let tiles = (0..6).map(|i| tile(b'0' + i)).collect();
        let view = View::from_layer(&Layer::from_tiles(3, 2, tiles).unwrap());

        let text: Vec<String> = view
            .rows()
            .map(|row| row.iter().map(|c| char::from_u32(c.glyph).unwrap()).collect())
            .collect();
        assert_eq!(text, vec!["024", "135"]);
    }

    #[test]
    fn test_from_layer_colors() {
        let mut hole = Tile::transparent();
        hole.fg = Rgb::new(1, 2, 3);
        let layer = Layer::from_tiles(2, 1, vec![tile(b'a'), hole]).unwrap();
        let view = View::from_layer(&layer);

        assert_eq!(view.cell(0, 0).unwrap().bg, Rgba::BLACK);
        assert_eq!(view.cell(1, 0).unwrap().fg, Rgba::opaque(1, 2, 3));
        assert_eq!(view.cell(1, 0).unwrap().bg, Rgba::TRANSPARENT);
    }

    #[test]
    fn test_from_tile_map_flattens() {
        let bottom = Layer::from_tiles(1, 1, vec![tile(b'A')]).unwrap();
        let top = Layer::from_tiles(1, 1, vec![tile(b'B')]).unwrap();
        let map = TileMap::new(1, vec![bottom, top]).unwrap();

        let view = View::from_tile_map(&map);
        assert_eq!(view.cell(0, 0).unwrap().glyph, u32::from(b'A'));
    }

    #[test]
    fn test_empty_map() {
        let view = View::from_tile_map(&TileMap::new(1, Vec::new()).unwrap());
        assert_eq!(view.size(), Size::new(0, 0));
        assert!(view.cells().is_empty());
        assert_eq!(view.rows().count(), 0);
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let view = View::new(2, 2, vec![Cell::default(); 4]).unwrap();
        assert!(matches!(
            view.cell(2, 0),
            Err(Error::OutOfBounds { x: 2, y: 0, .. })
        ));
        assert!(view.get(0, 2).is_none());
    }

    #[test]
    fn test_new_checks_cell_count() {
        assert_eq!(
            View::new(2, 2, vec![Cell::default(); 3]),
            Err(Error::CellCount {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            View::new(usize::MAX, 2, Vec::new()),
            Err(Error::GridTooLarge {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn test_rows_of_zero_width_view() {
        let view = View::new(0, 2, Vec::new()).unwrap();
        assert_eq!(view.rows().count(), view.height());
    }

    #[test]
    fn test_decode_gzip_stream() {
        let layer = Layer::from_tiles(1, 1, vec![tile(b'@')]).unwrap();
        let map = TileMap::new(1, vec![layer]).unwrap();
        let bytes = rex_loader::to_bytes(&map).unwrap();

        let view = View::decode(&bytes[..]).unwrap();
        assert_eq!(view.cell(0, 0).unwrap().glyph, u32::from(b'@'));
    }
}
