//! Left-to-right glyph runs
//!
//! [`GlyphFlow`] is the one place that turns a byte string into cursor
//! positions. Plain runs, character wrapping and measurement all walk the same
//! flow, so what gets measured is exactly what gets drawn.

use std::slice;

use super::{shift, GlyphMetrics, GlyphRenderer};
use crate::render::{Color, RenderBackend};

/// A glyph positioned by a [`GlyphFlow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowGlyph {
    /// Character code
    pub code: u8,
    /// Cursor offset from the line start
    pub x: u32,
    /// Zero-based line index
    pub line: u32,
    /// Advance of `code`
    pub advance: u32,
}

/// Cursor walk over a byte string
///
/// A newline moves to the start of the next line and is never yielded. With a
/// wrap width, a glyph that would push the cursor past it also starts a new
/// line first, even at the start of a line.
pub struct GlyphFlow<'m, 't> {
    metrics: &'m GlyphMetrics,
    codes: slice::Iter<'t, u8>,
    wrap_width: Option<u32>,
    cursor: u32,
    line: u32,
}

impl<'m, 't> GlyphFlow<'m, 't> {
    /// Flow that only breaks on newlines
    pub fn new(metrics: &'m GlyphMetrics, text: &'t [u8]) -> Self {
        Self { metrics, codes: text.iter(), wrap_width: None, cursor: 0, line: 0 }
    }

    /// Flow that also breaks before any glyph crossing `wrap_width`
    pub fn wrapped(metrics: &'m GlyphMetrics, text: &'t [u8], wrap_width: u32) -> Self {
        Self { wrap_width: Some(wrap_width), ..Self::new(metrics, text) }
    }

    /// Lines started so far, counting the current one
    pub const fn line_count(&self) -> u32 {
        self.line + 1
    }
}

impl Iterator for GlyphFlow<'_, '_> {
    type Item = FlowGlyph;

    fn next(&mut self) -> Option<FlowGlyph> {
        loop {
            let code = *self.codes.next()?;
            let advance = self.metrics.advance(code);
            let overflow = self
                .wrap_width
                .is_some_and(|wrap| self.cursor.saturating_add(advance) > wrap);

            if code == b'\n' || overflow {
                self.cursor = 0;
                self.line += 1;
            }
            if code == b'\n' {
                continue;
            }

            let glyph = FlowGlyph { code, x: self.cursor, line: self.line, advance };
            self.cursor = self.cursor.saturating_add(advance);
            return Some(glyph);
        }
    }
}

/// Draw `text` starting at `(x, y)`, honoring embedded newlines
///
/// Returns the widest horizontal extent reached on any line.
pub fn draw_line<B: RenderBackend>(
    renderer: &mut GlyphRenderer<'_, B>,
    text: &[u8],
    x: i32,
    y: i32,
    color: Color,
) -> u32 {
    let metrics = renderer.metrics();
    let line_height = metrics.cell_height();
    let mut width = 0;

    for glyph in GlyphFlow::new(metrics, text) {
        let advance = renderer.draw_char(
            glyph.code,
            shift(x, glyph.x),
            shift(y, glyph.line.saturating_mul(line_height)),
            color,
        );
        width = width.max(glyph.x + advance);
    }

    width
}
