//! On-disk tile record
//!
//! Each tile is stored as 10 bytes:
//! - char code (1 byte)
//! - 3 reserved bytes
//! - foreground red, green, blue
//! - background red, green, blue

/// 24-bit RGB color as stored in a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Background color marking a tile as transparent
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single tile of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    /// Glyph index into a CP437 font sheet
    pub char_code: u8,
    /// Unused bytes, kept so a tile re-encodes byte-for-byte
    pub reserved: [u8; 3],
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Tile {
    /// Encoded size in bytes
    pub const SIZE: usize = 10;

    /// Create an opaque-looking tile with zeroed reserved bytes
    pub const fn new(char_code: u8, fg: Rgb, bg: Rgb) -> Self {
        Self {
            char_code,
            reserved: [0; 3],
            fg,
            bg,
        }
    }

    /// A tile with the magenta background sentinel
    pub const fn transparent() -> Self {
        Self::new(0, Rgb::new(0, 0, 0), Rgb::MAGENTA)
    }

    /// Transparent iff the background is magenta; glyph and foreground are ignored
    pub fn is_transparent(&self) -> bool {
        self.bg == Rgb::MAGENTA
    }

    pub fn from_bytes(bytes: &[u8; Tile::SIZE]) -> Self {
        Self {
            char_code: bytes[0],
            reserved: [bytes[1], bytes[2], bytes[3]],
            fg: Rgb::new(bytes[4], bytes[5], bytes[6]),
            bg: Rgb::new(bytes[7], bytes[8], bytes[9]),
        }
    }

    pub fn to_bytes(&self) -> [u8; Tile::SIZE] {
        [
            self.char_code,
            self.reserved[0],
            self.reserved[1],
            self.reserved[2],
            self.fg.r,
            self.fg.g,
            self.fg.b,
            self.bg.r,
            self.bg.g,
            self.bg.b,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_byte_layout() {
        let bytes = [b'@', 1, 2, 3, 10, 20, 30, 40, 50, 60];
        let tile = Tile::from_bytes(&bytes);

        assert_eq!(tile.char_code, b'@');
        assert_eq!(tile.reserved, [1, 2, 3]);
        assert_eq!(tile.fg, Rgb::new(10, 20, 30));
        assert_eq!(tile.bg, Rgb::new(40, 50, 60));
        assert_eq!(tile.to_bytes(), bytes);
    }

    #[test]
    fn test_transparency_ignores_glyph_and_fg() {
        let mut tile = Tile::new(b'X', Rgb::new(255, 255, 255), Rgb::MAGENTA);
        assert!(tile.is_transparent());

        tile.char_code = 0;
        tile.fg = Rgb::MAGENTA;
        assert!(tile.is_transparent());
    }

    #[test]
    fn test_near_magenta_is_opaque() {
        assert!(!Tile::new(0, Rgb::default(), Rgb::new(255, 0, 254)).is_transparent());
        assert!(!Tile::new(0, Rgb::default(), Rgb::new(255, 1, 255)).is_transparent());
        assert!(!Tile::default().is_transparent());
    }
}
