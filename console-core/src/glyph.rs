//! Glyph sheet addressing for rendering backends
//!
//! The console does not draw anything itself. A backend walks
//! [`Screen::glyph_draws`], looks up each glyph's source rectangle on a
//! font sheet, tints it with the foreground color and blits it to the
//! destination rectangle.
//!
//! Glyph indices follow code page 437, the layout of the usual
//! 16-column font sheets.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::geometry::{Point, Size};
use crate::screen::Screen;

/// A rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Layout of a font sheet: fixed-size cells, `columns` glyphs per row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphSheet {
    columns: usize,
    cell_width: usize,
    cell_height: usize,
}

impl GlyphSheet {
    /// None if any dimension is zero
    pub fn new(columns: usize, cell_width: usize, cell_height: usize) -> Option<Self> {
        if columns == 0 || cell_width == 0 || cell_height == 0 {
            return None;
        }
        Some(Self {
            columns,
            cell_width,
            cell_height,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    pub fn cell_height(&self) -> usize {
        self.cell_height
    }

    /// Where `glyph` sits on the sheet
    pub fn source_rect(&self, glyph: u32) -> PixelRect {
        let glyph = glyph as usize;
        PixelRect {
            x: (glyph % self.columns) * self.cell_width,
            y: (glyph / self.columns) * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Where the cell at `position` goes on the output surface
    pub fn dest_rect(&self, position: Point) -> PixelRect {
        PixelRect {
            x: position.x * self.cell_width,
            y: position.y * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Surface size in pixels needed for a console of `size` cells
    pub fn surface_size(&self, size: Size) -> (usize, usize) {
        (size.width * self.cell_width, size.height * self.cell_height)
    }
}

impl Default for GlyphSheet {
    /// 16 columns of 10x16 pixel cells
    fn default() -> Self {
        Self {
            columns: 16,
            cell_width: 10,
            cell_height: 16,
        }
    }
}

/// One cell as handed to a rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphDraw {
    pub glyph: u32,
    pub fg: Rgba,
    /// Advisory; background policy belongs to the backend
    pub bg: Rgba,
    pub position: Point,
}

impl Screen {
    /// Every cell in row-major order, ready for drawing
    pub fn glyph_draws(&self) -> impl Iterator<Item = GlyphDraw> + '_ {
        let width = self.width().max(1);
        self.cells().iter().enumerate().map(move |(i, cell)| GlyphDraw {
            glyph: cell.glyph,
            fg: cell.fg,
            bg: cell.bg,
            position: Point::new(i % width, i / width),
        })
    }
}

/// Code page 437, indexed by glyph. Glyph 0 is shown as a space.
const CP437: [char; 256] = [
    ' ', '☺', '☻', '♥', '♦', '♣', '♠', '•', '◘', '○', '◙', '♂', '♀', '♪', '♫', '☼',
    '►', '◄', '↕', '‼', '¶', '§', '▬', '↨', '↑', '↓', '→', '←', '∟', '↔', '▲', '▼',
    ' ', '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '[', '\\', ']', '^', '_',
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '{', '|', '}', '~', '⌂',
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

/// Printable character for a glyph index.
///
/// Indices below 256 use code page 437; larger indices are taken as Unicode
/// scalar values, falling back to `'?'`.
pub fn glyph_char(glyph: u32) -> char {
    match CP437.get(glyph as usize) {
        Some(&c) => c,
        None => char::from_u32(glyph).unwrap_or('?'),
    }
}
