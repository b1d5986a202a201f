//! Rex Console
//!
//! Load layered REXPaint `.xp` art and composite it onto a character grid.
//! This crate ties the workspace together:
//!
//! - `loader`: the `.xp` decoder, encoder and layer flattener
//! - `console`: cells, views, screens, compositing and text flow
//!
//! ```no_run
//! use rex_console::{load_view, Rect, Rgba, Screen};
//!
//! let view = load_view("assets/cat.xp")?;
//! let mut screen = Screen::new(128, 48, Rgba::BLACK)?;
//! screen.clear();
//! screen.put_view_at(&view, 0, 0)?;
//! screen.put_text_at("a cat", Rect::new(0, 40, 20, 2), Rgba::WHITE, Rgba::BLACK)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::Path;

pub use console_core as console;
pub use rex_loader as loader;

pub use console_core::{
    glyph_char, Cell, GlyphDraw, GlyphSheet, Point, Rect, Rgba, Screen, Size, Snapshot, View,
};
pub use rex_loader::{Layer, Tile, TileMap};

/// Load an `.xp` file as a single flattened view
pub fn load_view<P: AsRef<Path>>(path: P) -> loader::Result<View> {
    View::load(path)
}
