//! Console cell representation
//!
//! Each cell in a view or screen contains:
//! - A glyph index into a 16-column glyph sheet
//! - A foreground (tint) color
//! - A background color, advisory for the renderer

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use rex_loader::Tile;

/// A single renderable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub glyph: u32,
    pub fg: Rgba,
    pub bg: Rgba,
}

impl Cell {
    pub const fn new(glyph: u32, fg: Rgba, bg: Rgba) -> Self {
        Self { glyph, fg, bg }
    }

    /// Cell showing a character; the glyph index is the character's scalar value
    pub fn with_char(c: char, fg: Rgba, bg: Rgba) -> Self {
        Self::new(c as u32, fg, bg)
    }

    /// Convert a decoded tile.
    ///
    /// Transparent tiles keep their foreground but get a fully transparent
    /// background.
    pub fn from_tile(tile: &Tile) -> Self {
        let bg = if tile.is_transparent() {
            Rgba::TRANSPARENT
        } else {
            Rgba::from(tile.bg)
        };
        Self::new(u32::from(tile.char_code), Rgba::from(tile.fg), bg)
    }

    /// Glyph 0 is drawn as an empty cell
    pub fn is_blank(&self) -> bool {
        self.glyph == 0
    }
}

impl From<&Tile> for Cell {
    fn from(tile: &Tile) -> Self {
        Cell::from_tile(tile)
    }
}
