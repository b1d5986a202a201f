//! Console snapshot for testing and debugging
//!
//! Provides a serializable, text-first representation of a screen or view.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::geometry::Size;
use crate::glyph::glyph_char;
use crate::screen::Screen;
use crate::view::View;

/// A complete snapshot of a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Size,
    /// Clear color, screens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    pub rows: Vec<SnapshotRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRow {
    /// Glyphs rendered through code page 437
    pub text: String,
    /// Runs of cells sharing both colors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spans: Vec<SnapshotSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSpan {
    pub start: usize,
    pub end: usize,
    pub fg: String,
    pub bg: String,
}

impl Snapshot {
    fn from_rows<'a>(size: Size, rows: impl Iterator<Item = &'a [Cell]>) -> Self {
        let rows = rows
            .map(|row| SnapshotRow {
                text: row.iter().map(|c| glyph_char(c.glyph)).collect(),
                spans: color_spans(row),
            })
            .collect();
        Self {
            size,
            bg_color: None,
            rows,
        }
    }

    pub fn from_screen(screen: &Screen) -> Self {
        let mut snapshot = Self::from_rows(screen.size(), screen.rows());
        snapshot.bg_color = Some(screen.bg_color().to_hex());
        snapshot
    }

    pub fn from_view(view: &View) -> Self {
        Self::from_rows(view.size(), view.rows())
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Rows joined with newlines
    pub fn text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Split a row into runs of identical (fg, bg)
fn color_spans(row: &[Cell]) -> Vec<SnapshotSpan> {
    let mut spans: Vec<SnapshotSpan> = Vec::new();
    let mut start = 0;

    for (i, cell) in row.iter().enumerate() {
        let next = row.get(i + 1);
        let run_ends = next.map_or(true, |n| n.fg != cell.fg || n.bg != cell.bg);
        if run_ends {
            spans.push(SnapshotSpan {
                start,
                end: i + 1,
                fg: cell.fg.to_hex(),
                bg: cell.bg.to_hex(),
            });
            start = i + 1;
        }
    }

    spans
}

impl Screen {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_screen(self)
    }
}

impl View {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::geometry::Rect;

    #[test]
    fn test_screen_snapshot_text() {
        let mut screen = Screen::new(5, 2, Rgba::BLACK).unwrap();
        screen
            .put_text_at("Hi you", Rect::new(0, 0, 5, 2), Rgba::WHITE, Rgba::BLACK)
            .unwrap();

        let snapshot = screen.snapshot();
        assert_eq!(snapshot.size, Size::new(5, 2));
        assert_eq!(snapshot.bg_color.as_deref(), Some("#000000"));
        assert_eq!(snapshot.text(), "Hi   \nyou  ");
    }

    #[test]
    fn test_color_spans() {
        let a = Cell::new(1, Rgba::WHITE, Rgba::BLACK);
        let b = Cell::new(2, Rgba::opaque(255, 0, 0), Rgba::BLACK);
        let spans = color_spans(&[a, a, b]);

        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].start, spans[0].end), (0, 2));
        assert_eq!(spans[0].fg, "#ffffff");
        assert_eq!((spans[1].start, spans[1].end), (2, 3));
        assert_eq!(spans[1].fg, "#ff0000");
        assert!(color_spans(&[]).is_empty());
    }

    #[test]
    fn test_view_snapshot_has_no_bg_color() {
        let view = View::new(1, 1, vec![Cell::new(u32::from(b'@'), Rgba::WHITE, Rgba::TRANSPARENT)])
            .unwrap();
        let snapshot = view.snapshot();

        assert_eq!(snapshot.bg_color, None);
        assert_eq!(snapshot.text(), "@");
        assert_eq!(snapshot.rows[0].spans[0].bg, "#00000000");
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let mut screen = Screen::new(3, 1, Rgba::opaque(1, 2, 3)).unwrap();
        screen
            .set_cell(1, 0, Cell::new(u32::from(b'x'), Rgba::WHITE, Rgba::BLACK))
            .unwrap();
        let snapshot = screen.snapshot();

        let json = snapshot.to_json().unwrap();
        assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
    }
}
