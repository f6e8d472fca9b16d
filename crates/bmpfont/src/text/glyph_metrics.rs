//! Glyph grid geometry and advance widths

/// Atlas geometry plus the per-code advance table
///
/// Glyphs sit in a grid of `cell_width` x `cell_height` cells, row-major,
/// starting with `base_char`. Codes outside the grid have no glyph and an
/// advance of zero everywhere in the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMetrics {
    image_width: u32,
    image_height: u32,
    cell_width: u32,
    cell_height: u32,
    base_char: u8,
    advances: [u8; 256],
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self {
            image_width: 0,
            image_height: 0,
            cell_width: 0,
            cell_height: 0,
            base_char: 0,
            advances: [0; 256],
        }
    }
}

impl GlyphMetrics {
    /// Create metrics from header fields
    pub const fn new(
        image_width: u32,
        image_height: u32,
        cell_width: u32,
        cell_height: u32,
        base_char: u8,
        advances: [u8; 256],
    ) -> Self {
        Self { image_width, image_height, cell_width, cell_height, base_char, advances }
    }

    /// Create metrics where every code advances by the same width
    pub const fn monospace(
        image_width: u32,
        image_height: u32,
        cell_width: u32,
        cell_height: u32,
        base_char: u8,
        advance: u8,
    ) -> Self {
        Self::new(image_width, image_height, cell_width, cell_height, base_char, [advance; 256])
    }

    /// Atlas image width in pixels
    pub const fn image_width(&self) -> u32 {
        self.image_width
    }

    /// Atlas image height in pixels
    pub const fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Glyph cell width in pixels
    pub const fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Glyph cell height in pixels, also the line height
    pub const fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Code of the first glyph in the grid
    pub const fn base_char(&self) -> u8 {
        self.base_char
    }

    /// The raw 256-entry advance table
    pub const fn advance_table(&self) -> &[u8; 256] {
        &self.advances
    }

    /// Table entry for `code`, ignoring whether a glyph exists
    pub const fn raw_advance(&self, code: u8) -> u8 {
        self.advances[code as usize]
    }

    /// Grid columns
    pub fn columns(&self) -> u32 {
        self.image_width.checked_div(self.cell_width).unwrap_or(0)
    }

    /// Grid rows
    pub fn rows(&self) -> u32 {
        self.image_height.checked_div(self.cell_height).unwrap_or(0)
    }

    /// Number of drawable codes: grid cells, clamped to the byte range
    pub fn glyph_count(&self) -> u32 {
        let cells = u64::from(self.columns()) * u64::from(self.rows());
        let available = 256 - u64::from(self.base_char);
        #[allow(clippy::cast_possible_truncation)]
        let count = cells.min(available) as u32;
        count
    }

    /// Highest drawable code, `None` for an empty grid
    pub fn max_char(&self) -> Option<u8> {
        let count = self.glyph_count();
        if count == 0 {
            return None;
        }
        u8::try_from(u32::from(self.base_char) + count - 1).ok()
    }

    /// Whether `code` has a glyph in the atlas
    pub fn contains(&self, code: u8) -> bool {
        self.max_char().is_some_and(|max| (self.base_char..=max).contains(&code))
    }

    /// Cursor advance for `code`, zero when the code has no glyph
    pub fn advance(&self, code: u8) -> u32 {
        if self.contains(code) {
            u32::from(self.advances[code as usize])
        } else {
            0
        }
    }

    /// Top-left texel of the glyph cell for `code`
    pub fn cell_origin(&self, code: u8) -> Option<(u32, u32)> {
        if !self.contains(code) {
            return None;
        }
        let index = u32::from(code - self.base_char);
        let columns = self.columns();
        Some(((index % columns) * self.cell_width, (index / columns) * self.cell_height))
    }
}
