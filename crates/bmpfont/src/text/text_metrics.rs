//! Draw-free text measurement
//!
//! Both functions walk the same structures the draw paths walk, so a size
//! measured here is the size a later draw occupies.

use super::line_layout::GlyphFlow;
use super::word_wrap::WrappedLayout;
use super::GlyphMetrics;

/// Width and height of laid-out text, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextSize {
    /// Widest line
    pub width: u32,
    /// Line count times the line height
    pub height: u32,
}

/// Measure `text` as drawn unwrapped (`wrap_width == 0`) or character-wrapped
///
/// An empty string still occupies one line.
pub fn measure(metrics: &GlyphMetrics, text: &[u8], wrap_width: u32) -> TextSize {
    let mut flow = if wrap_width > 0 {
        GlyphFlow::wrapped(metrics, text, wrap_width)
    } else {
        GlyphFlow::new(metrics, text)
    };

    let width = flow.by_ref().map(|glyph| glyph.x + glyph.advance).max().unwrap_or(0);
    TextSize { width, height: flow.line_count().saturating_mul(metrics.cell_height()) }
}

/// Measure `text` as drawn word-wrapped into `max_width`
pub fn measure_wrapped(metrics: &GlyphMetrics, text: &[u8], max_width: u32) -> TextSize {
    WrappedLayout::build(metrics, text, max_width).size()
}
