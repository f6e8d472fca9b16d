//! Cross-module tests for the text engines

mod layout_properties;

use crate::assets::{AtlasFile, AtlasImage};
use crate::render::recording::RecordingBackend;
use crate::text::{FontFace, GlyphMetrics};

/// 16x6 grid of 8x16 cells starting at space, every glyph 8 wide
pub(super) fn monospace_atlas() -> AtlasFile {
    atlas_with(GlyphMetrics::monospace(128, 96, 8, 16, 32, 8))
}

/// Same grid with a few narrow and wide glyphs
pub(super) fn proportional_atlas() -> AtlasFile {
    let mut advances = [8u8; 256];
    advances[b' ' as usize] = 4;
    advances[b'i' as usize] = 3;
    advances[b'l' as usize] = 3;
    advances[b'm' as usize] = 12;
    advances[b'W' as usize] = 14;
    atlas_with(GlyphMetrics::new(128, 96, 8, 16, 32, advances))
}

/// Fully opaque white pixels for every cell
pub(super) fn atlas_with(metrics: GlyphMetrics) -> AtlasFile {
    let (width, height) = (metrics.image_width(), metrics.image_height());
    let data = vec![0xFF; width as usize * height as usize * 4];
    AtlasFile { metrics, image: AtlasImage { width, height, data } }
}

pub(super) fn loaded_face(atlas: &AtlasFile) -> (FontFace<RecordingBackend>, RecordingBackend) {
    let mut backend = RecordingBackend::new();
    let mut face = FontFace::new();
    face.load_atlas(atlas, &mut backend).expect("test atlas loads");
    (face, backend)
}
