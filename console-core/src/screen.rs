//! Console screen - the mutable render target
//!
//! A screen is created once and rewritten every frame: `clear()`, then any
//! number of compositing calls. Every write goes through the same bounds
//! check, and calls that would write outside the grid fail before touching
//! any cell.

use crate::cell::Cell;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{check_rect, checked_index, Rect, Size};
use crate::view::View;

/// A mutable row-major grid of cells plus a clear color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    size: Size,
    cells: Vec<Cell>,
    bg_color: Rgba,
}

impl Screen {
    /// Create a cleared screen
    pub fn new(width: usize, height: usize, bg_color: Rgba) -> Result<Self> {
        let size = Size::new(width, height);
        let count = size.area().ok_or(Error::GridTooLarge { width, height })?;
        let cells = vec![Cell::new(0, Rgba::default(), bg_color); count];
        Ok(Self {
            size,
            cells,
            bg_color,
        })
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

    pub fn bg_color(&self) -> Rgba {
        self.bg_color
    }

    /// Change the color used by the next `clear()`
    pub fn set_bg_color(&mut self, color: Rgba) {
        self.bg_color = color;
    }

    /// Reset glyphs to 0 and backgrounds to the clear color.
    ///
    /// Foreground colors are left as they were.
    pub fn clear(&mut self) {
        let bg = self.bg_color;
        for cell in &mut self.cells {
            cell.glyph = 0;
            cell.bg = bg;
        }
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell> {
        checked_index(x, y, self.size).map(|i| &self.cells[i])
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cell(x, y).ok()
    }

    /// Iterate over rows, top to bottom. Always yields `height()` rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let width = self.size.width;
        (0..self.size.height).map(move |y| &self.cells[y * width..(y + 1) * width])
    }

    /// Write one cell at column `x`, row `y`
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        let index = checked_index(x, y, self.size)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Copy a row-major block of `rect.width * rect.height` cells into `rect`.
    ///
    /// Nothing is written unless the whole rect fits and the buffer length
    /// matches.
    pub fn set_cells(&mut self, rect: Rect, cells: &[Cell]) -> Result<()> {
        check_rect(rect, self.size)?;
        let expected = rect.width * rect.height;
        if cells.len() != expected {
            return Err(Error::CellCount {
                expected,
                actual: cells.len(),
            });
        }
        if rect.width == 0 {
            return Ok(());
        }

        for (i, cell) in cells.iter().enumerate() {
            let x = rect.x + i % rect.width;
            let y = rect.y + i / rect.width;
            self.set_cell(x, y, *cell)?;
        }
        Ok(())
    }

    /// Place a whole view with its top-left corner at (x, y)
    pub fn put_view_at(&mut self, view: &View, x: usize, y: usize) -> Result<()> {
        let rect = Rect::new(x, y, view.width(), view.height());
        self.set_cells(rect, view.cells())
    }
}
