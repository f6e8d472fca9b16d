//! Font facade
//!
//! [`FontFace`] owns a loaded atlas: its metrics, the backend texture and the
//! default draw options. Drawing goes through a [`TextCanvas`], which borrows
//! the face and a backend and carries its own copy of the options.

use std::path::Path;

use super::char_wrap::char_wrap_draw;
use super::line_layout::draw_line;
use super::text_metrics::{measure, measure_wrapped, TextSize};
use super::word_wrap::wrap_draw;
use super::{Alignment, ClipRegion, DrawOptions, GlyphMetrics, GlyphRenderer};
use crate::assets::AtlasFile;
use crate::config::{TextConfig, WrapMode};
use crate::render::{Color, RenderBackend, RenderError};

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur while loading a font
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Font file could not be read
    #[error("Failed to read font file: {0}")]
    Io(#[from] std::io::Error),

    /// File does not start with the atlas magic
    #[error("Not a font atlas: bad magic {0:02X} {1:02X}")]
    BadMagic(u8, u8),

    /// Bit depth other than 8, 24 or 32
    #[error("Unsupported bit depth {0}, expected 8, 24 or 32")]
    UnsupportedBitDepth(u8),

    /// File ends before the data its header declares
    #[error("Font atlas truncated: needed {expected} bytes, found {actual}")]
    Truncated {
        /// Bytes required to finish the read in progress
        expected: usize,
        /// Bytes available
        actual: usize,
    },

    /// Header describes an unusable grid
    #[error("Invalid atlas geometry: {0}")]
    InvalidGeometry(String),

    /// Backend could not create the atlas texture
    #[error("Failed to create atlas texture: {0}")]
    Backend(#[from] RenderError),
}

/// A loaded bitmap font
///
/// Created empty; [`FontFace::load`] fills it. The texture is released
/// exactly once: on reload, on [`FontFace::unload`], or when the face drops.
pub struct FontFace<B: RenderBackend> {
    metrics: GlyphMetrics,
    texture: Option<B::Texture>,
    options: DrawOptions,
}

impl<B: RenderBackend> Default for FontFace<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RenderBackend> FontFace<B> {
    /// Create an empty face with no atlas
    pub fn new() -> Self {
        Self { metrics: GlyphMetrics::default(), texture: None, options: DrawOptions::default() }
    }

    /// Create a face and load `path` into it
    pub fn from_file<P: AsRef<Path>>(path: P, backend: &mut B) -> FontResult<Self> {
        let mut face = Self::new();
        face.load(path, backend)?;
        Ok(face)
    }

    /// Load a `.bff` atlas from disk, replacing any current one
    ///
    /// The previous texture is released before the file is read, so a failed
    /// load leaves the face empty.
    pub fn load<P: AsRef<Path>>(&mut self, path: P, backend: &mut B) -> FontResult<()> {
        self.unload();
        let atlas = AtlasFile::load(path)?;
        self.install(&atlas, backend)
    }

    /// Load a `.bff` atlas held in memory
    pub fn load_from_bytes(&mut self, bytes: &[u8], backend: &mut B) -> FontResult<()> {
        self.unload();
        let atlas = AtlasFile::from_bytes(bytes)?;
        self.install(&atlas, backend)
    }

    /// Load an already parsed atlas
    pub fn load_atlas(&mut self, atlas: &AtlasFile, backend: &mut B) -> FontResult<()> {
        self.unload();
        self.install(atlas, backend)
    }

    fn install(&mut self, atlas: &AtlasFile, backend: &mut B) -> FontResult<()> {
        let texture = backend.create_texture(&atlas.image)?;
        self.texture = Some(texture);
        self.metrics = atlas.metrics.clone();
        Ok(())
    }

    /// Release the texture and forget the metrics
    pub fn unload(&mut self) {
        if let Some(texture) = self.texture.take() {
            drop(texture);
            log::debug!("Released font atlas texture");
        }
        self.metrics = GlyphMetrics::default();
    }

    /// Whether an atlas is loaded
    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    /// Glyph metrics of the loaded atlas
    pub fn metrics(&self) -> &GlyphMetrics {
        &self.metrics
    }

    /// Line height in pixels
    pub fn cell_height(&self) -> u32 {
        self.metrics.cell_height()
    }

    /// Clip subsequent draws to a rectangle
    ///
    /// Reversed edges are swapped. All four edges zero clears the clip; use
    /// [`FontFace::set_clip_region`] for a genuinely empty rectangle.
    pub fn set_clip(&mut self, left: i32, top: i32, right: i32, bottom: i32) -> &mut Self {
        self.options.clip = ClipRegion::from_edges(left, top, right, bottom);
        self
    }

    /// Set or clear the clip with an explicit region
    pub fn set_clip_region(&mut self, clip: Option<ClipRegion>) -> &mut Self {
        self.options.clip = clip;
        self
    }

    /// Stop clipping
    pub fn clear_clip(&mut self) -> &mut Self {
        self.options.clip = None;
        self
    }

    /// Whether draws are clipped
    pub fn is_clipped(&self) -> bool {
        self.options.clip.is_some()
    }

    /// Current clip region
    pub fn clip(&self) -> Option<ClipRegion> {
        self.options.clip
    }

    /// Alignment of word-wrapped draws
    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.options.alignment = alignment;
        self
    }

    /// Current alignment
    pub fn alignment(&self) -> Alignment {
        self.options.alignment
    }

    /// Default options new canvases start from
    pub fn options(&self) -> DrawOptions {
        self.options
    }

    /// Replace the default options
    pub fn set_options(&mut self, options: DrawOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// Size of `text` unwrapped (`wrap_width == 0`) or character-wrapped
    pub fn measure(&self, text: impl AsRef<[u8]>, wrap_width: u32) -> TextSize {
        measure(&self.metrics, text.as_ref(), wrap_width)
    }

    /// Size of `text` word-wrapped into `max_width`
    pub fn measure_wrapped(&self, text: impl AsRef<[u8]>, max_width: u32) -> TextSize {
        measure_wrapped(&self.metrics, text.as_ref(), max_width)
    }

    /// Start drawing onto `backend` with this face's current options
    pub fn canvas<'a>(&'a self, backend: &'a mut B) -> TextCanvas<'a, B> {
        TextCanvas { face: self, backend, options: self.options }
    }
}

/// A face bound to a backend for drawing
///
/// Options are copied from the face when the canvas is created; the `with_*`
/// methods change them for this canvas only.
pub struct TextCanvas<'a, B: RenderBackend> {
    face: &'a FontFace<B>,
    backend: &'a mut B,
    options: DrawOptions,
}

impl<B: RenderBackend> TextCanvas<'_, B> {
    /// Clip draws on this canvas
    #[must_use]
    pub fn with_clip(mut self, clip: ClipRegion) -> Self {
        self.options.clip = Some(clip);
        self
    }

    /// Draw unclipped on this canvas
    #[must_use]
    pub fn without_clip(mut self) -> Self {
        self.options.clip = None;
        self
    }

    /// Align word-wrapped draws on this canvas
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.options.alignment = alignment;
        self
    }

    /// Replace all options on this canvas
    #[must_use]
    pub fn with_options(mut self, options: DrawOptions) -> Self {
        self.options = options;
        self
    }

    /// Options in effect
    pub fn options(&self) -> DrawOptions {
        self.options
    }

    fn renderer(&mut self) -> GlyphRenderer<'_, B> {
        GlyphRenderer::new(
            &self.face.metrics,
            self.face.texture.as_ref(),
            self.options.clip,
            &mut *self.backend,
        )
    }

    /// Draw one glyph, returning its advance
    pub fn draw_char(&mut self, code: u8, x: i32, y: i32, color: Color) -> u32 {
        self.renderer().draw_char(code, x, y, color)
    }

    /// Draw text left-aligned with embedded newlines, returning the widest line
    pub fn draw_str(&mut self, text: impl AsRef<[u8]>, x: i32, y: i32, color: Color) -> u32 {
        draw_line(&mut self.renderer(), text.as_ref(), x, y, color)
    }

    /// Draw word-wrapped text, returning the total height
    pub fn draw_str_wrap(
        &mut self,
        text: impl AsRef<[u8]>,
        x: i32,
        y: i32,
        max_width: u32,
        color: Color,
    ) -> u32 {
        let alignment = self.options.alignment;
        wrap_draw(&mut self.renderer(), text.as_ref(), x, y, max_width, alignment, color)
    }

    /// Draw character-wrapped text, returning the total height
    pub fn draw_str_char_wrap(
        &mut self,
        text: impl AsRef<[u8]>,
        x: i32,
        y: i32,
        max_width: u32,
        color: Color,
    ) -> u32 {
        char_wrap_draw(&mut self.renderer(), text.as_ref(), x, y, max_width, color)
    }

    /// Draw with the wrap mode, color, clip and alignment from `config`
    ///
    /// Returns the size the text occupies. A wrap width of zero draws
    /// unwrapped whatever the wrap mode.
    pub fn draw_text(&mut self, text: impl AsRef<[u8]>, x: i32, y: i32, config: &TextConfig) -> TextSize {
        let text = text.as_ref();
        self.options = config.options();

        match config.effective_wrap() {
            WrapMode::None => {
                let width = self.draw_str(text, x, y, config.color);
                TextSize { width, height: self.face.measure(text, 0).height }
            }
            WrapMode::Word => {
                let size = self.face.measure_wrapped(text, config.wrap_width);
                self.draw_str_wrap(text, x, y, config.wrap_width, config.color);
                size
            }
            WrapMode::Char => {
                let size = self.face.measure(text, config.wrap_width);
                self.draw_str_char_wrap(text, x, y, config.wrap_width, config.color);
                size
            }
        }
    }
}
