//! Character wrapping
//!
//! Breaks at any glyph boundary: a line ends before the first glyph that
//! would cross the wrap width, splitting words wherever that happens.

use super::line_layout::GlyphFlow;
use super::{shift, GlyphRenderer};
use crate::render::{Color, RenderBackend};

/// Character-wrap `text` into `max_width` and draw it at `(x, y)`
///
/// Newlines break without drawing. Returns the total height consumed, last
/// line included.
pub fn char_wrap_draw<B: RenderBackend>(
    renderer: &mut GlyphRenderer<'_, B>,
    text: &[u8],
    x: i32,
    y: i32,
    max_width: u32,
    color: Color,
) -> u32 {
    let metrics = renderer.metrics();
    let line_height = metrics.cell_height();
    let mut flow = GlyphFlow::wrapped(metrics, text, max_width);

    for glyph in flow.by_ref() {
        renderer.draw_char(
            glyph.code,
            shift(x, glyph.x),
            shift(y, glyph.line.saturating_mul(line_height)),
            color,
        );
    }

    flow.line_count().saturating_mul(line_height)
}
