//! Word-wrapped text layout
//!
//! Text is split into words on runs of spaces and tabs. Words are placed left
//! to right inside a rect, wrapping to the next row when a word would cross
//! the right edge, with a single blank separator cell between words on the
//! same row. A word wider than the rect stops the layout. Rows below the rect
//! are dropped.

use crate::cell::Cell;
use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::{check_rect, Point, Rect};
use crate::screen::Screen;

/// Glyph written between words
const SEPARATOR_GLYPH: u32 = 0;

/// Words of `text`: maximal runs of characters other than space and tab
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split([' ', '\t']).filter(|word| !word.is_empty())
}

impl Screen {
    /// Lay out `text` inside `rect`, word-wrapping at its right edge.
    ///
    /// The rect must fit inside the screen. Text that does not fit below the
    /// rect's last row is silently dropped; a word longer than the rect is
    /// wide ends the layout, leaving earlier words in place.
    pub fn put_text_at(&mut self, text: &str, rect: Rect, fg: Rgba, bg: Rgba) -> Result<()> {
        check_rect(rect, self.size())?;
        let right = rect.x + rect.width;
        let bottom = rect.y + rect.height;

        let mut cursor = Point::new(rect.x, rect.y);
        let mut words = words(text).peekable();

        while let Some(word) = words.next() {
            let len = word.chars().count();
            if len > rect.width {
                log::debug!("Word of {} chars does not fit in {}, stopping", len, rect);
                return Ok(());
            }

            if cursor.x + len > right {
                cursor.x = rect.x;
                cursor.y += 1;
            }
            if cursor.y >= bottom {
                // Nothing below the rect is rendered, and rows never go back up
                log::trace!("Text overflows {}", rect);
                return Ok(());
            }

            for (offset, c) in word.chars().enumerate() {
                self.set_cell(cursor.x + offset, cursor.y, Cell::with_char(c, fg, bg))?;
            }
            cursor.x += len;

            if words.peek().is_some() && cursor.x < right {
                self.set_cell(cursor.x, cursor.y, Cell::new(SEPARATOR_GLYPH, fg, bg))?;
                cursor.x += 1;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;

    const FG: Rgba = Rgba::opaque(200, 200, 200);
    const BG: Rgba = Rgba::opaque(10, 10, 10);
    const CLEAR: Rgba = Rgba::opaque(1, 2, 3);

    /// Render rows as text: glyph 0 as '_', untouched cells as '.'
    fn rows(screen: &Screen) -> Vec<String> {
        screen
            .rows()
            .map(|row| {
                row.iter()
                    .map(|c| match c.glyph {
                        0 if c.bg == CLEAR => '.',
                        0 => '_',
                        g => char::from_u32(g).unwrap_or('?'),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_words() {
        let found: Vec<&str> = words("  ab\t\tcd  e ").collect();
        assert_eq!(found, vec!["ab", "cd", "e"]);
        assert_eq!(words(" \t ").count(), 0);
        assert_eq!(words("line\nbreak").collect::<Vec<_>>(), vec!["line\nbreak"]);
    }

    #[test]
    fn test_single_row() {
        let mut screen = Screen::new(5, 1, CLEAR).unwrap();
        screen.put_text_at("ab cd", Rect::new(0, 0, 5, 1), FG, BG).unwrap();

        assert_eq!(screen.cell(0, 0).unwrap(), &Cell::new('a' as u32, FG, BG));
        assert_eq!(screen.cell(1, 0).unwrap().glyph, 'b' as u32);
        assert_eq!(screen.cell(2, 0).unwrap(), &Cell::new(0, FG, BG));
        assert_eq!(screen.cell(3, 0).unwrap().glyph, 'c' as u32);
        assert_eq!(screen.cell(4, 0).unwrap().glyph, 'd' as u32);
    }

    #[test]
    fn test_wraps_at_right_edge() {
        let mut screen = Screen::new(6, 3, CLEAR).unwrap();
        screen
            .put_text_at("one two three", Rect::new(0, 0, 6, 3), FG, BG)
            .unwrap();

        assert_eq!(rows(&screen), vec!["one_..", "two_..", "three."]);
    }

    #[test]
    fn test_wraps_inside_offset_rect() {
        let mut screen = Screen::new(8, 4, CLEAR).unwrap();
        screen
            .put_text_at("aa bb cc", Rect::new(2, 1, 5, 2), FG, BG)
            .unwrap();

        assert_eq!(
            rows(&screen),
            vec!["........", "..aa_bb.", "..cc....", "........"]
        );
    }

    #[test]
    fn test_no_separator_after_last_word() {
        let mut screen = Screen::new(4, 1, CLEAR).unwrap();
        screen.put_text_at("ab", Rect::new(0, 0, 4, 1), FG, BG).unwrap();
        assert_eq!(rows(&screen), vec!["ab.."]);
    }

    #[test]
    fn test_no_separator_at_right_edge() {
        let mut screen = Screen::new(5, 2, CLEAR).unwrap();
        screen
            .put_text_at("abc de", Rect::new(0, 0, 3, 2), FG, BG)
            .unwrap();
        assert_eq!(rows(&screen), vec!["abc..", "de..."]);
    }

    #[test]
    fn test_long_first_word_writes_nothing() {
        let mut screen = Screen::new(5, 2, CLEAR).unwrap();
        let before = screen.clone();

        screen
            .put_text_at("toolong a b", Rect::new(0, 0, 5, 2), FG, BG)
            .unwrap();

        assert_eq!(screen, before);
    }

    #[test]
    fn test_long_word_stops_layout() {
        let mut screen = Screen::new(5, 2, CLEAR).unwrap();
        screen
            .put_text_at("ab toolong cd", Rect::new(0, 0, 5, 2), FG, BG)
            .unwrap();

        assert_eq!(rows(&screen), vec!["ab_..", "....."]);
    }

    #[test]
    fn test_overflow_below_rect_is_dropped() {
        let mut screen = Screen::new(3, 3, CLEAR).unwrap();
        screen
            .put_text_at("ab cd ef", Rect::new(0, 0, 3, 2), FG, BG)
            .unwrap();

        assert_eq!(rows(&screen), vec!["ab_", "cd_", "..."]);
    }

    #[test]
    fn test_tabs_separate_words() {
        let mut screen = Screen::new(5, 1, CLEAR).unwrap();
        screen
            .put_text_at("\tab\t\tc", Rect::new(0, 0, 5, 1), FG, BG)
            .unwrap();
        assert_eq!(rows(&screen), vec!["ab_c."]);
    }

    #[test]
    fn test_empty_text() {
        let mut screen = Screen::new(3, 1, CLEAR).unwrap();
        let before = screen.clone();
        screen.put_text_at("", Rect::new(0, 0, 3, 1), FG, BG).unwrap();
        screen.put_text_at("   ", Rect::new(0, 0, 3, 1), FG, BG).unwrap();
        assert_eq!(screen, before);
    }

    #[test]
    fn test_rect_outside_screen() {
        let mut screen = Screen::new(3, 1, CLEAR).unwrap();
        let before = screen.clone();

        let err = screen
            .put_text_at("a", Rect::new(1, 0, 3, 1), FG, BG)
            .unwrap_err();

        assert!(matches!(err, Error::RectOutOfBounds { .. }));
        assert_eq!(screen, before);
    }

    #[test]
    fn test_non_ascii_glyphs() {
        let mut screen = Screen::new(3, 1, CLEAR).unwrap();
        screen.put_text_at("é€", Rect::new(0, 0, 3, 1), FG, BG).unwrap();
        assert_eq!(screen.cell(0, 0).unwrap().glyph, 'é' as u32);
        assert_eq!(screen.cell(1, 0).unwrap().glyph, '€' as u32);
    }

    proptest! {
        #[test]
        fn prop_text_stays_inside_rect(
            text in "[a-d \t]{0,40}",
            x in 0usize..4,
            y in 0usize..4,
            w in 0usize..8,
            h in 0usize..4,
        ) {
            let mut screen = Screen::new(12, 8, CLEAR).unwrap();
            let rect = Rect::new(x, y, w, h);
            screen.put_text_at(&text, rect, FG, BG).unwrap();

            for row in 0..8 {
                for col in 0..12 {
                    let cell = screen.cell(col, row).unwrap();
                    if !rect.contains(Point::new(col, row)) {
                        prop_assert_eq!(cell.bg, CLEAR);
                    }
                }
            }
        }
    }
}
