//! Tile map encoder
//!
//! Writes the same layout the decoder reads, so maps built in code can be
//! saved as `.xp` files and fed back through [`crate::decode`].

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Result;
use crate::layer::TileMap;

/// Gzip-compress `map` into `writer`, returning the writer when done
pub fn encode<W: Write>(map: &TileMap, writer: W) -> Result<W> {
    let mut encoder = GzEncoder::new(writer, Compression::default());
    encode_uncompressed(map, &mut encoder)?;
    Ok(encoder.finish()?)
}

/// Write `map` without compression
pub fn encode_uncompressed<W: Write>(map: &TileMap, mut writer: W) -> Result<()> {
    let layer_count = u32::try_from(map.layer_count())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "too many layers"))?;

    writer.write_all(&map.version().to_le_bytes())?;
    writer.write_all(&layer_count.to_le_bytes())?;

    for layer in map.layers() {
        writer.write_all(&layer.width().to_le_bytes())?;
        writer.write_all(&layer.height().to_le_bytes())?;
        for tile in layer.tiles() {
            writer.write_all(&tile.to_bytes())?;
        }
    }

    Ok(())
}

/// Gzip-compressed bytes of `map`
pub fn to_bytes(map: &TileMap) -> Result<Vec<u8>> {
    encode(map, Vec::new())
}

/// Write `map` to a gzip-compressed file at `path`
pub fn save<P: AsRef<Path>>(map: &TileMap, path: P) -> Result<()> {
    let path = path.as_ref();
    log::debug!("Saving tile map to {:?}", path);
    let file = BufWriter::new(File::create(path)?);
    encode(map, file)?.flush()?;
    Ok(())
}

impl TileMap {
    /// Gzip-compress this map into `writer`
    pub fn write_to<W: Write>(&self, writer: W) -> Result<W> {
        encode(self, writer)
    }
}
