//! Single glyph drawing

use super::{ClipRegion, GlyphMetrics};
use crate::render::{Blit, Color, RenderBackend, SourceRect};

/// Draws individual atlas cells through a backend
///
/// Borrowed for the duration of one draw call; the clip is a copy, so the
/// settings of one call never leak into the next.
pub struct GlyphRenderer<'a, B: RenderBackend> {
    metrics: &'a GlyphMetrics,
    texture: Option<&'a B::Texture>,
    clip: Option<ClipRegion>,
    backend: &'a mut B,
}

impl<'a, B: RenderBackend> GlyphRenderer<'a, B> {
    /// Create a renderer for one atlas
    pub fn new(
        metrics: &'a GlyphMetrics,
        texture: Option<&'a B::Texture>,
        clip: Option<ClipRegion>,
        backend: &'a mut B,
    ) -> Self {
        Self { metrics, texture, clip, backend }
    }

    /// Metrics of the atlas being drawn
    pub fn metrics(&self) -> &'a GlyphMetrics {
        self.metrics
    }

    /// Active clip rectangle
    pub fn clip(&self) -> Option<ClipRegion> {
        self.clip
    }

    /// Draw the glyph for `code` with its cell's top-left at `(x, y)`
    ///
    /// Returns the code's advance width whether or not any pixel survived
    /// clipping. Codes without a glyph return 0 and draw nothing.
    pub fn draw_char(&mut self, code: u8, x: i32, y: i32, color: Color) -> u32 {
        let Some((cell_x, cell_y)) = self.metrics.cell_origin(code) else {
            return 0;
        };

        let cell = SourceRect {
            x: cell_x,
            y: cell_y,
            width: self.metrics.cell_width(),
            height: self.metrics.cell_height(),
        };

        let placed = match self.clip {
            Some(clip) => clip.crop(x, y, cell),
            None => Some((x, y, cell)),
        }
        .filter(|(_, _, src)| src.width > 0 && src.height > 0);

        match (placed, self.texture) {
            (Some((dest_x, dest_y, src)), Some(texture)) => {
                self.backend.draw_texture_part(texture, &Blit { dest_x, dest_y, src, color });
            }
            (None, _) => log::trace!("Glyph {code:#04x} at ({x}, {y}) fully clipped"),
            (Some(_), None) => {}
        }

        self.metrics.advance(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AtlasImage;
    use crate::render::recording::RecordingBackend;

    fn fixture() -> (GlyphMetrics, RecordingBackend) {
        let mut advances = [0u8; 256];
        advances[b'A' as usize] = 6;
        advances[b'B' as usize] = 7;
        (GlyphMetrics::new(32, 32, 8, 16, b'A', advances), RecordingBackend::new())
    }

    fn texture(backend: &mut RecordingBackend) -> crate::render::recording::RecordedTexture {
        let image = AtlasImage { width: 32, height: 32, data: vec![0; 32 * 32 * 4] };
        backend.create_texture(&image).unwrap()
    }

    #[test]
    fn test_draw_in_range_blits_cell() {
        let (metrics, mut backend) = fixture();
        let texture = texture(&mut backend);
        let mut renderer = GlyphRenderer::new(&metrics, Some(&texture), None, &mut backend);

        assert_eq!(renderer.draw_char(b'B', 5, 7, Color::WHITE), 7);
        assert_eq!(
            backend.blits,
            vec![Blit {
                dest_x: 5,
                dest_y: 7,
                src: SourceRect { x: 8, y: 0, width: 8, height: 16 },
                color: Color::WHITE,
            }]
        );
    }

    #[test]
    fn test_out_of_range_draws_nothing() {
        let (metrics, mut backend) = fixture();
        let texture = texture(&mut backend);
        let mut renderer = GlyphRenderer::new(&metrics, Some(&texture), None, &mut backend);

        assert_eq!(renderer.draw_char(b'@', 0, 0, Color::WHITE), 0);
        // 8 glyphs: A..=H
        assert_eq!(renderer.draw_char(b'I', 0, 0, Color::WHITE), 0);
        assert_eq!(renderer.draw_char(0xFF, 0, 0, Color::WHITE), 0);
        assert!(backend.blits.is_empty());
    }

    #[test]
    fn test_clipped_glyph_keeps_advance() {
        let (metrics, mut backend) = fixture();
        let texture = texture(&mut backend);
        let clip = Some(ClipRegion::new(100, 100, 200, 200));
        let mut renderer = GlyphRenderer::new(&metrics, Some(&texture), clip, &mut backend);

        assert_eq!(renderer.draw_char(b'A', 0, 0, Color::WHITE), 6);
        assert!(backend.blits.is_empty());
    }

    #[test]
    fn test_partially_clipped_glyph() {
        let (metrics, mut backend) = fixture();
        let texture = texture(&mut backend);
        let clip = Some(ClipRegion::new(3, 0, 200, 10));
        let mut renderer = GlyphRenderer::new(&metrics, Some(&texture), clip, &mut backend);

        renderer.draw_char(b'B', 0, 0, Color::BLACK);
        assert_eq!(backend.blits.len(), 1);
        assert_eq!(backend.blits[0].dest_x, 3);
        assert_eq!(backend.blits[0].src, SourceRect { x: 11, y: 0, width: 5, height: 10 });
    }

    #[test]
    fn test_without_texture_only_advances() {
        let (metrics, mut backend) = fixture();
        let mut renderer = GlyphRenderer::new(&metrics, None, None, &mut backend);

        assert_eq!(renderer.draw_char(b'A', 0, 0, Color::WHITE), 6);
        assert!(backend.blits.is_empty());
    }
}
