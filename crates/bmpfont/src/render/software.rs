//! CPU render backend
//!
//! Blends glyph blits into an in-memory `image::RgbaImage`. Useful for
//! headless rendering, tests, and tools that bake text into images.

use std::path::Path;

use image::{Rgba, RgbaImage};

use super::backend::{Blit, Color, RenderBackend, RenderError, RenderResult};
use crate::assets::AtlasImage;

/// Atlas texture held in system memory
#[derive(Debug, Clone)]
pub struct SoftwareTexture {
    image: RgbaImage,
}

impl SoftwareTexture {
    /// Texture dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Software renderer drawing into an RGBA surface
pub struct SoftwareRenderer {
    target: RgbaImage,
}

impl SoftwareRenderer {
    /// Create a renderer with a transparent `width` x `height` surface
    pub fn new(width: u32, height: u32) -> Self {
        Self { target: RgbaImage::new(width, height) }
    }

    /// Render into an existing image
    pub fn from_image(target: RgbaImage) -> Self {
        Self { target }
    }

    /// Fill the whole surface with one color
    pub fn clear(&mut self, color: Color) {
        let pixel = Rgba(color.to_array());
        for dst in self.target.pixels_mut() {
            *dst = pixel;
        }
    }

    /// Current surface
    pub fn target(&self) -> &RgbaImage {
        &self.target
    }

    /// Take the rendered surface
    pub fn into_image(self) -> RgbaImage {
        self.target
    }

    /// Write the surface to a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        self.target.save(path.as_ref())?;
        log::debug!("Saved rendered surface to {:?}", path.as_ref());
        Ok(())
    }
}

impl RenderBackend for SoftwareRenderer {
    type Texture = SoftwareTexture;

    fn create_texture(&mut self, image: &AtlasImage) -> RenderResult<SoftwareTexture> {
        let texture = RgbaImage::from_raw(image.width, image.height, image.data.clone())
            .ok_or_else(|| {
                RenderError::TextureCreation(format!(
                    "{} bytes do not cover a {}x{} RGBA image",
                    image.data.len(),
                    image.width,
                    image.height
                ))
            })?;

        log::debug!("Created {}x{} software texture", image.width, image.height);
        Ok(SoftwareTexture { image: texture })
    }

    fn draw_texture_part(&mut self, texture: &SoftwareTexture, blit: &Blit) {
        let (tex_width, tex_height) = texture.image.dimensions();
        let (dst_width, dst_height) = self.target.dimensions();
        let tint = blit.color.to_array();

        for row in 0..blit.src.height {
            let sy = blit.src.y + row;
            let dy = i64::from(blit.dest_y) + i64::from(row);
            if sy >= tex_height || dy < 0 || dy >= i64::from(dst_height) {
                continue;
            }

            for col in 0..blit.src.width {
                let sx = blit.src.x + col;
                let dx = i64::from(blit.dest_x) + i64::from(col);
                if sx >= tex_width || dx < 0 || dx >= i64::from(dst_width) {
                    continue;
                }

                let texel = texture.image.get_pixel(sx, sy).0;
                let src = [
                    modulate(texel[0], tint[0]),
                    modulate(texel[1], tint[1]),
                    modulate(texel[2], tint[2]),
                    modulate(texel[3], tint[3]),
                ];

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let dst = self.target.get_pixel_mut(dx as u32, dy as u32);
                dst.0 = blend_over(src, dst.0);
            }
        }
    }
}

/// Multiply two normalized channels
fn modulate(a: u8, b: u8) -> u8 {
    #[allow(clippy::cast_possible_truncation)]
    let value = ((u32::from(a) * u32::from(b) + 127) / 255) as u8;
    value
}

/// Source-over compositing, non-premultiplied
fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let alpha = u32::from(src[3]);
    let inv = 255 - alpha;
    let mix = |s: u8, d: u8| -> u8 {
        #[allow(clippy::cast_possible_truncation)]
        let value = ((u32::from(s) * alpha + u32::from(d) * inv + 127) / 255) as u8;
        value
    };
    #[allow(clippy::cast_possible_truncation)]
    let out_alpha = (alpha + (u32::from(dst[3]) * inv + 127) / 255) as u8;
    [mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2]), out_alpha]
}
