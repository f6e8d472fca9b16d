//! Text layout and drawing
//!
//! # Architecture
//!
//! - [`GlyphMetrics`]: atlas grid geometry and advance widths
//! - [`ClipRegion`] / [`DrawOptions`]: per-call clip and alignment
//! - [`GlyphRenderer`]: one glyph, cropped to the clip, through a backend
//! - [`line_layout`]: unwrapped runs with embedded newlines
//! - [`word_wrap`] / [`char_wrap`]: the two wrapping strategies
//! - [`text_metrics`]: measurement sharing the draw paths' break rules
//! - [`FontFace`] / [`TextCanvas`]: the public facade
//!
//! Character codes are bytes throughout. Public entry points accept
//! `impl AsRef<[u8]>`, so `&str` works for ASCII text and byte strings reach
//! codes 128-255.

pub mod glyph_metrics;
pub mod clip;
pub mod options;
pub mod glyph_renderer;
pub mod line_layout;
pub mod word_wrap;
pub mod char_wrap;
pub mod text_metrics;
pub mod font_face;

#[cfg(test)]
mod tests;

pub use glyph_metrics::GlyphMetrics;
pub use clip::ClipRegion;
pub use options::{Alignment, DrawOptions};
pub use glyph_renderer::GlyphRenderer;
pub use line_layout::{draw_line, FlowGlyph, GlyphFlow};
pub use word_wrap::{wrap_draw, BreakUnit, WrappedLayout, WrappedLine};
pub use char_wrap::char_wrap_draw;
pub use text_metrics::{measure, measure_wrapped, TextSize};
pub use font_face::{FontError, FontFace, FontResult, TextCanvas};

/// Offset a signed coordinate by an unsigned distance
pub(crate) fn shift(origin: i32, delta: u32) -> i32 {
    origin.saturating_add(i32::try_from(delta).unwrap_or(i32::MAX))
}
