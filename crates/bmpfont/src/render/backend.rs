//! Render backend trait
//!
//! Defines the interface between text layout and whatever draws the pixels.
//! Keeps the layout code independent of GPU/CPU specifics.

use serde::{Deserialize, Serialize};

use crate::assets::AtlasImage;

/// Result type for backend operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised by render backends
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Backend could not turn the atlas pixels into a texture
    #[error("Failed to create texture: {0}")]
    TextureCreation(String),

    /// Image encoding or file error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Packed 32-bit RGBA color, red in the low byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgba(0xFF, 0xFF, 0xFF, 0xFF);
    /// Opaque black
    pub const BLACK: Self = Self::rgba(0x00, 0x00, 0x00, 0xFF);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::rgba(0x00, 0x00, 0x00, 0x00);

    /// Pack four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24))
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Alpha channel
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Channels as `[r, g, b, a]`
    pub const fn to_array(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

/// Sub-rectangle of an atlas texture, in texels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
    /// Left edge in the atlas
    pub x: u32,
    /// Top edge in the atlas
    pub y: u32,
    /// Width in texels
    pub width: u32,
    /// Height in texels
    pub height: u32,
}

impl SourceRect {
    /// Number of texels covered
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// One textured draw: copy `src` from the atlas to `(dest_x, dest_y)`, tinted by `color`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blit {
    /// Destination left edge on the target surface
    pub dest_x: i32,
    /// Destination top edge on the target surface
    pub dest_y: i32,
    /// Atlas region to copy
    pub src: SourceRect,
    /// Tint multiplied into the atlas texels before blending
    pub color: Color,
}

/// Backend-agnostic blit interface
///
/// A backend creates one texture per loaded atlas and blends sub-rectangles of
/// it onto its active target. The texture value is owned by the font that
/// requested it; releasing the underlying resource belongs in its `Drop`.
pub trait RenderBackend {
    /// Backend texture type
    type Texture;

    /// Upload decoded atlas pixels
    fn create_texture(&mut self, image: &AtlasImage) -> RenderResult<Self::Texture>;

    /// Blend `blit.src` of `texture` onto the target
    ///
    /// Callers never pass an empty source rectangle.
    fn draw_texture_part(&mut self, texture: &Self::Texture, blit: &Blit);
}
