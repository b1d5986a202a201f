//! Console Core - character grid model and compositing
//!
//! This crate provides the data structures a console renderer draws from:
//! - Cells holding a glyph index plus foreground and background colors
//! - Views: immutable grids decoded from `.xp` tile maps
//! - Screens: mutable per-frame render targets
//! - Compositing of cell blocks and views onto a screen
//! - Word-wrapped text layout
//!
//! All grid access is bounds-checked. Operations that would touch a cell
//! outside the grid return [`Error`] and leave the grid unchanged.

mod cell;
mod color;
mod error;
mod geometry;
mod glyph;
mod screen;
mod snapshot;
mod text;
mod view;

pub use cell::Cell;
pub use color::Rgba;
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
pub use glyph::{glyph_char, GlyphDraw, GlyphSheet, PixelRect};
pub use screen::Screen;
pub use snapshot::{Snapshot, SnapshotRow, SnapshotSpan};
pub use text::words;
pub use view::View;
