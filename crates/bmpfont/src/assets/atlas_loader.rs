//! `.bff` font atlas loading
//!
//! Binary layout (little-endian):
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 2 | magic `0xBF 0xF2` |
//! | 2 | 4 | image width |
//! | 6 | 4 | image height |
//! | 10 | 4 | cell width |
//! | 14 | 4 | cell height |
//! | 18 | 1 | bit depth (8, 24 or 32) |
//! | 19 | 1 | first character code in the grid |
//! | 20 | 256 | advance width per character code |
//! | 276 | w×h×depth/8 | pixels, row-major |
//!
//! Pixels are expanded to RGBA8 on load: 8-bit atlases are alpha-only with
//! white color, 24-bit atlases get opaque alpha.

use std::path::Path;

use image::RgbaImage;

use crate::render::RenderResult;
use crate::text::{FontError, FontResult, GlyphMetrics};

/// Magic bytes opening every atlas file
pub const MAGIC: [u8; 2] = [0xBF, 0xF2];

/// Size of the fixed header, advance table included
pub const HEADER_LEN: usize = 276;

/// Per-texel storage in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    /// One alpha byte per texel, color forced white
    Alpha8,
    /// RGB bytes per texel, alpha forced opaque
    Rgb24,
    /// RGBA bytes per texel, stored as-is
    Rgba32,
}

impl BitDepth {
    /// Parse the header depth byte
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            8 => Some(Self::Alpha8),
            24 => Some(Self::Rgb24),
            32 => Some(Self::Rgba32),
            _ => None,
        }
    }

    /// Header depth byte
    pub const fn bits(self) -> u8 {
        match self {
            Self::Alpha8 => 8,
            Self::Rgb24 => 24,
            Self::Rgba32 => 32,
        }
    }

    /// Bytes per texel in the file
    pub const fn bytes_per_texel(self) -> usize {
        self.bits() as usize / 8
    }
}

/// Decoded atlas pixels, always RGBA8
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasImage {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
}

impl AtlasImage {
    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// RGBA texel at `(x, y)`, if inside the image
    pub fn texel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * 4;
        let bytes = self.data.get(index..index + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Save atlas texture to a PNG file for debugging
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let image = RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            crate::render::RenderError::TextureCreation(format!(
                "{} bytes do not cover a {}x{} RGBA image",
                self.data.len(),
                self.width,
                self.height
            ))
        })?;
        image.save(path.as_ref())?;
        log::debug!("Saved atlas image to {:?}", path.as_ref());
        Ok(())
    }
}

/// A parsed `.bff` file: glyph metrics plus RGBA pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasFile {
    /// Grid geometry and advance table
    pub metrics: GlyphMetrics,
    /// Expanded pixel data
    pub image: AtlasImage,
}

impl AtlasFile {
    /// Read and parse an atlas from disk
    pub fn load<P: AsRef<Path>>(path: P) -> FontResult<Self> {
        let path_ref = path.as_ref();
        log::debug!("Loading font atlas from: {:?}", path_ref);

        let bytes = std::fs::read(path_ref)?;
        let atlas = Self::from_bytes(&bytes)?;

        log::info!(
            "Loaded font atlas {:?}: {}x{} image, {}x{} cells, {} glyphs",
            path_ref,
            atlas.image.width,
            atlas.image.height,
            atlas.metrics.cell_width(),
            atlas.metrics.cell_height(),
            atlas.metrics.glyph_count()
        );
        Ok(atlas)
    }

    /// Parse an atlas held in memory
    pub fn from_bytes(bytes: &[u8]) -> FontResult<Self> {
        let mut reader = ByteReader::new(bytes);

        let magic = reader.take(2)?;
        if magic != MAGIC {
            log::warn!("Rejected atlas with magic {:02X} {:02X}", magic[0], magic[1]);
            return Err(FontError::BadMagic(magic[0], magic[1]));
        }

        let image_width = reader.u32_le()?;
        let image_height = reader.u32_le()?;
        let cell_width = reader.u32_le()?;
        let cell_height = reader.u32_le()?;

        let bits = reader.u8()?;
        let depth = BitDepth::from_bits(bits).ok_or_else(|| {
            log::warn!("Rejected atlas with bit depth {}", bits);
            FontError::UnsupportedBitDepth(bits)
        })?;

        let base_char = reader.u8()?;
        let mut advances = [0u8; 256];
        advances.copy_from_slice(reader.take(256)?);

        if cell_width == 0 || cell_height == 0 {
            return Err(FontError::InvalidGeometry(format!(
                "cell size {cell_width}x{cell_height} has a zero dimension"
            )));
        }

        let texels = (image_width as usize)
            .checked_mul(image_height as usize)
            .ok_or_else(|| too_large(image_width, image_height))?;
        let pixel_len = texels
            .checked_mul(depth.bytes_per_texel())
            .ok_or_else(|| too_large(image_width, image_height))?;
        texels
            .checked_mul(4)
            .ok_or_else(|| too_large(image_width, image_height))?;

        let pixels = reader.take(pixel_len)?;
        if reader.remaining() > 0 {
            log::debug!("Ignoring {} trailing bytes after atlas pixels", reader.remaining());
        }

        let data = expand_to_rgba(pixels, depth);
        let metrics = GlyphMetrics::new(
            image_width,
            image_height,
            cell_width,
            cell_height,
            base_char,
            advances,
        );

        Ok(Self {
            metrics,
            image: AtlasImage { width: image_width, height: image_height, data },
        })
    }

    /// Encode as a 32-bit `.bff` file
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.image.data.len());
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&self.metrics.image_width().to_le_bytes());
        bytes.extend_from_slice(&self.metrics.image_height().to_le_bytes());
        bytes.extend_from_slice(&self.metrics.cell_width().to_le_bytes());
        bytes.extend_from_slice(&self.metrics.cell_height().to_le_bytes());
        bytes.push(BitDepth::Rgba32.bits());
        bytes.push(self.metrics.base_char());
        bytes.extend_from_slice(self.metrics.advance_table());
        bytes.extend_from_slice(&self.image.data);
        bytes
    }
}

fn too_large(width: u32, height: u32) -> FontError {
    FontError::InvalidGeometry(format!("{width}x{height} image does not fit in memory"))
}

fn expand_to_rgba(pixels: &[u8], depth: BitDepth) -> Vec<u8> {
    match depth {
        BitDepth::Alpha8 => pixels.iter().flat_map(|&alpha| [0xFF, 0xFF, 0xFF, alpha]).collect(),
        BitDepth::Rgb24 => pixels
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 0xFF])
            .collect(),
        BitDepth::Rgba32 => pixels.to_vec(),
    }
}

/// Bounds-checked little-endian cursor
struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, len: usize) -> FontResult<&'a [u8]> {
        let end = self.pos.checked_add(len).filter(|&end| end <= self.bytes.len()).ok_or(
            FontError::Truncated {
                expected: self.pos.saturating_add(len),
                actual: self.bytes.len(),
            },
        )?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u8(&mut self) -> FontResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn u32_le(&mut self) -> FontResult<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}
