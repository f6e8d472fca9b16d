//! Asset loading
//!
//! Font atlases are the only asset type: a `.bff` file holds the glyph grid
//! geometry, the advance table and the atlas pixels.

pub mod atlas_loader;

pub use atlas_loader::{AtlasFile, AtlasImage, BitDepth, HEADER_LEN, MAGIC};
