//! Screen composition
//!
//! Clears a console to the configured color, stamps the art at the
//! requested position and lays out an optional caption under it.

use console_core::{Rect, Screen, View};

use crate::config::{CliArgs, Config};

/// Build the frame shown by the viewer
pub fn compose(config: &Config, view: &View, args: &CliArgs) -> console_core::Result<Screen> {
    let size = config.console_size();
    let mut screen = Screen::new(size.width, size.height, config.background())?;
    screen.clear();

    screen.put_view_at(view, args.x, args.y)?;
    log::debug!(
        "Placed {}x{} view at ({}, {})",
        view.width(),
        view.height(),
        args.x,
        args.y
    );

    if let Some(caption) = &args.caption {
        match caption_rect(&screen, view, args) {
            Some(rect) => {
                let (fg, bg) = config.text_colors();
                screen.put_text_at(caption, rect, fg, bg)?;
            }
            None => log::warn!("No room for a caption under the art"),
        }
    }

    Ok(screen)
}

/// Area under the view that the caption may fill
fn caption_rect(screen: &Screen, view: &View, args: &CliArgs) -> Option<Rect> {
    let y = args.y + view.height();
    if y >= screen.height() || args.x >= screen.width() {
        return None;
    }

    let available = screen.width() - args.x;
    let width = args.caption_width.map_or(available, |w| w.min(available));
    if width == 0 {
        return None;
    }

    Some(Rect::new(args.x, y, width, screen.height() - y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::{Cell, Error, Rgba};

    fn small_config(columns: usize, rows: usize) -> Config {
        let mut config = Config::default();
        config.console.columns = columns;
        config.console.rows = rows;
        config.console.background = "#010203".to_string();
        config
    }

    fn art() -> View {
        let cell = Cell::new(u32::from(b'#'), Rgba::WHITE, Rgba::opaque(9, 9, 9));
        View::new(2, 2, vec![cell; 4]).unwrap()
    }

    #[test]
    fn test_compose_places_view() {
        let args = CliArgs {
            x: 1,
            y: 1,
            ..Default::default()
        };
        let screen = compose(&small_config(4, 4), &art(), &args).unwrap();

        assert_eq!(screen.bg_color(), Rgba::opaque(1, 2, 3));
        assert_eq!(screen.cell(0, 0).unwrap().bg, Rgba::opaque(1, 2, 3));
        assert_eq!(screen.cell(1, 1).unwrap().glyph, u32::from(b'#'));
        assert_eq!(screen.cell(2, 2).unwrap().glyph, u32::from(b'#'));
        assert_eq!(screen.cell(3, 3).unwrap().glyph, 0);
    }

    #[test]
    fn test_compose_view_too_large() {
        let args = CliArgs {
            x: 3,
            ..Default::default()
        };
        let err = compose(&small_config(4, 4), &art(), &args).unwrap_err();
        assert!(matches!(err, Error::RectOutOfBounds { .. }));
    }

    #[test]
    fn test_caption_under_view() {
        let args = CliArgs {
            caption: Some("hi there".to_string()),
            ..Default::default()
        };
        let screen = compose(&small_config(6, 4), &art(), &args).unwrap();

        let text = screen.snapshot().text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "hi    ");
        assert_eq!(lines[3], "there ");
        assert_eq!(screen.cell(0, 2).unwrap().fg, Rgba::WHITE);
    }

    #[test]
    fn test_caption_width_is_clamped() {
        let screen = Screen::new(6, 4, Rgba::BLACK).unwrap();
        let args = CliArgs {
            x: 2,
            caption_width: Some(100),
            ..Default::default()
        };
        assert_eq!(
            caption_rect(&screen, &art(), &args),
            Some(Rect::new(2, 2, 4, 2))
        );
    }

    #[test]
    fn test_caption_without_room_is_skipped() {
        let args = CliArgs {
            caption: Some("hidden".to_string()),
            ..Default::default()
        };
        let screen = compose(&small_config(2, 2), &art(), &args).unwrap();
        assert!(screen.cells().iter().all(|c| c.glyph == u32::from(b'#')));
    }
}
