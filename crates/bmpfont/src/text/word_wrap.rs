//! Word wrapping
//!
//! Wrapping runs in two passes. Segmentation cuts the text into break units:
//! words ending at a space, hyphen or newline, plus a marker for each newline.
//! A run that alone would overflow the wrap width is cut at the overflow point.
//! Packing then places the units greedily, starting a new line whenever a unit
//! does not fit or a newline marker comes up.
//!
//! The packed result is a [`WrappedLayout`], which both the draw pass and
//! [`measure_wrapped`](super::measure_wrapped) consume.

use std::ops::Range;

use super::line_layout::draw_line;
use super::text_metrics::{measure, TextSize};
use super::{shift, Alignment, GlyphMetrics, GlyphRenderer};
use crate::render::{Color, RenderBackend};

/// Segmentation output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakUnit<'t> {
    /// Run of characters, possibly ending in a space or hyphen, possibly empty
    Word(&'t [u8]),
    /// Explicit line break
    Newline,
}

/// Split `text` into break units for a wrap width of `max_width`
pub fn segment<'t>(metrics: &GlyphMetrics, text: &'t [u8], max_width: u32) -> Vec<BreakUnit<'t>> {
    let mut units = Vec::new();
    let mut word: Range<usize> = 0..0;
    let mut run = 0u32;

    for (index, &code) in text.iter().enumerate() {
        let advance = metrics.advance(code);
        let mut overflowed = false;

        if run.saturating_add(advance) > max_width {
            units.push(BreakUnit::Word(&text[word.clone()]));
            word = index..index;
            run = 0;
            overflowed = true;
        }

        // A space that forced the break would only lead the next line
        if code != b'\n' && !(overflowed && code == b' ') {
            word.end = index + 1;
            run = run.saturating_add(advance);
        }

        if matches!(code, b' ' | b'\n' | b'-') {
            units.push(BreakUnit::Word(&text[word.clone()]));
            word = index + 1..index + 1;
            run = 0;
            if code == b'\n' {
                units.push(BreakUnit::Newline);
            }
        }
    }

    if !word.is_empty() {
        units.push(BreakUnit::Word(&text[word]));
    }

    units
}

/// A word placed on a wrapped line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedWord<'t> {
    /// Word bytes
    pub text: &'t [u8],
    /// Cursor offset from the line start
    pub x: u32,
    /// Advance consumed by the word
    pub width: u32,
}

/// One output line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrappedLine<'t> {
    /// Words in drawing order
    pub words: Vec<PlacedWord<'t>>,
    /// Cursor position after the last word
    pub width: u32,
    /// Width without trailing spaces, used for alignment
    pub visible_width: u32,
}

/// Packed word-wrap result for one string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLayout<'t> {
    lines: Vec<WrappedLine<'t>>,
    max_width: u32,
    line_height: u32,
}

impl<'t> WrappedLayout<'t> {
    /// Segment and pack `text` into lines no wider than `max_width` where possible
    pub fn build(metrics: &GlyphMetrics, text: &'t [u8], max_width: u32) -> Self {
        let mut lines = vec![WrappedLine::default()];

        for unit in segment(metrics, text, max_width) {
            let word = match unit {
                BreakUnit::Newline => {
                    lines.push(WrappedLine::default());
                    continue;
                }
                BreakUnit::Word(word) => word,
            };

            let width = measure(metrics, word, 0).width;
            let cursor = lines.last().map_or(0, |line| line.width);
            if cursor.saturating_add(width) > max_width {
                lines.push(WrappedLine::default());
            }

            if let Some(line) = lines.last_mut() {
                line.words.push(PlacedWord { text: word, x: line.width, width });
                line.width = line.width.saturating_add(width);
            }
        }

        for line in &mut lines {
            line.visible_width = visible_width(metrics, &line.words);
        }

        Self { lines, max_width, line_height: metrics.cell_height() }
    }

    /// Packed lines, top to bottom
    pub fn lines(&self) -> &[WrappedLine<'t>] {
        &self.lines
    }

    /// Number of lines, including empty ones from newlines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total height of all lines
    pub fn height(&self) -> u32 {
        u32::try_from(self.lines.len()).map_or(u32::MAX, |count| count.saturating_mul(self.line_height))
    }

    /// Widest line, trailing spaces included
    pub fn width(&self) -> u32 {
        self.lines.iter().map(|line| line.width).max().unwrap_or(0)
    }

    /// Width and height together
    pub fn size(&self) -> TextSize {
        TextSize { width: self.width(), height: self.height() }
    }

    /// Draw every line at `(x, y)`, returning the total height
    pub fn draw<B: RenderBackend>(
        &self,
        renderer: &mut GlyphRenderer<'_, B>,
        x: i32,
        y: i32,
        alignment: Alignment,
        color: Color,
    ) -> u32 {
        let mut line_y = y;

        for line in &self.lines {
            let line_x = shift(x, alignment.offset(self.max_width, line.visible_width));
            for word in &line.words {
                let drawn = draw_line(renderer, word.text, shift(line_x, word.x), line_y, color);
                debug_assert_eq!(drawn, word.width, "draw and measure disagree");
            }
            line_y = shift(line_y, self.line_height);
        }

        self.height()
    }
}

fn visible_width(metrics: &GlyphMetrics, words: &[PlacedWord<'_>]) -> u32 {
    for word in words.iter().rev() {
        let end = word.text.iter().rposition(|&code| code != b' ').map_or(0, |last| last + 1);
        if end > 0 {
            return word.x + measure(metrics, &word.text[..end], 0).width;
        }
    }
    0
}

/// Word-wrap `text` into `max_width` and draw it at `(x, y)`
///
/// Returns the total height consumed, last line included.
pub fn wrap_draw<B: RenderBackend>(
    renderer: &mut GlyphRenderer<'_, B>,
    text: &[u8],
    x: i32,
    y: i32,
    max_width: u32,
    alignment: Alignment,
    color: Color,
) -> u32 {
    WrappedLayout::build(renderer.metrics(), text, max_width).draw(renderer, x, y, alignment, color)
}
