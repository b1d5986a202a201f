//! Output backends for a composed screen

use std::io::{self, Write};

use console_core::{glyph_char, GlyphSheet, PixelRect, Rgba, Screen};
use serde::Serialize;

use crate::config::OutputFormat;

/// Write `screen` to `out` in the chosen format
pub fn render<W: Write>(
    screen: &Screen,
    format: OutputFormat,
    sheet: &GlyphSheet,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Ansi => render_ansi(screen, out),
        OutputFormat::Text => {
            let text = screen.snapshot().text();
            writeln!(out, "{}", text)
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &screen.snapshot())?;
            writeln!(out)
        }
        OutputFormat::Draws => render_draws(screen, sheet, out),
    }
}

/// 24-bit color escape sequences, one line per row.
///
/// Colors are only re-sent when they change. Transparent backgrounds fall
/// back to the terminal default.
fn render_ansi<W: Write>(screen: &Screen, out: &mut W) -> io::Result<()> {
    for row in screen.rows() {
        let mut current: Option<(Rgba, Rgba)> = None;
        for cell in row {
            if current != Some((cell.fg, cell.bg)) {
                write!(
                    out,
                    "\x1b[38;2;{};{};{}m",
                    cell.fg.r(),
                    cell.fg.g(),
                    cell.fg.b()
                )?;
                if cell.bg.is_transparent() {
                    write!(out, "\x1b[49m")?;
                } else {
                    write!(
                        out,
                        "\x1b[48;2;{};{};{}m",
                        cell.bg.r(),
                        cell.bg.g(),
                        cell.bg.b()
                    )?;
                }
                current = Some((cell.fg, cell.bg));
            }
            write!(out, "{}", glyph_char(cell.glyph))?;
        }
        writeln!(out, "\x1b[0m")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct DrawRecord {
    glyph: u32,
    fg: String,
    bg: String,
    src: PixelRect,
    dst: PixelRect,
}

/// One JSON object per cell, row-major
fn render_draws<W: Write>(screen: &Screen, sheet: &GlyphSheet, out: &mut W) -> io::Result<()> {
    for draw in screen.glyph_draws() {
        let record = DrawRecord {
            glyph: draw.glyph,
            fg: draw.fg.to_hex(),
            bg: draw.bg.to_hex(),
            src: sheet.source_rect(draw.glyph),
            dst: sheet.dest_rect(draw.position),
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }
    Ok(())
}
