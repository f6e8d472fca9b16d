//! Test backend that records blits instead of drawing them

use std::cell::Cell;
use std::rc::Rc;

use super::backend::{Blit, RenderBackend, RenderError, RenderResult};
use crate::assets::AtlasImage;

/// Texture stand-in that counts its own release
#[derive(Debug)]
pub(crate) struct RecordedTexture {
    pub id: usize,
    released: Rc<Cell<usize>>,
}

impl Drop for RecordedTexture {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub blits: Vec<Blit>,
    pub created: usize,
    pub fail_create: bool,
    released: Rc<Cell<usize>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn released(&self) -> usize {
        self.released.get()
    }

    /// Shared release counter that outlives the backend borrow
    pub fn release_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.released)
    }

    /// Sum of blitted source areas
    pub fn drawn_area(&self) -> u64 {
        self.blits.iter().map(|blit| blit.src.area()).sum()
    }
}

impl RenderBackend for RecordingBackend {
    type Texture = RecordedTexture;

    fn create_texture(&mut self, _image: &AtlasImage) -> RenderResult<RecordedTexture> {
        if self.fail_create {
            return Err(RenderError::TextureCreation("refused by test backend".to_string()));
        }
        self.created += 1;
        Ok(RecordedTexture { id: self.created, released: Rc::clone(&self.released) })
    }

    fn draw_texture_part(&mut self, _texture: &RecordedTexture, blit: &Blit) {
        self.blits.push(*blit);
    }
}
