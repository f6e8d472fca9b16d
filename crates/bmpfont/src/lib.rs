//! # bmpfont
//!
//! Proportional bitmap text rendering from packed `.bff` font atlases.
//!
//! ## Features
//!
//! - **Atlas Loading**: 8/24/32-bit `.bff` atlases expanded to RGBA8
//! - **Word Wrapping**: greedy breaking on spaces, hyphens and newlines
//! - **Character Wrapping**: breaking at arbitrary glyph boundaries
//! - **Clipping**: pixel-exact cropping of glyph blits to a rectangle
//! - **Alignment**: left, centered or right aligned wrapped paragraphs
//! - **Measurement**: draw-free sizing that agrees with the draw pass
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bmpfont::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut renderer = SoftwareRenderer::new(400, 240);
//!
//!     let mut font = FontFace::new();
//!     font.load("fixedsys.bff", &mut renderer)?;
//!
//!     let size = font.measure("Hello, world!", 0);
//!     font.canvas(&mut renderer)
//!         .draw_str("Hello, world!", 4, 4, Color::WHITE);
//!     font.canvas(&mut renderer)
//!         .with_alignment(Alignment::Center)
//!         .draw_str_wrap("A longer paragraph that wraps.", 0, size.height as i32 + 8, 320, Color::WHITE);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod render;
pub mod text;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        assets::{AtlasFile, AtlasImage, BitDepth},
        config::{Config, ConfigError, TextConfig, WrapMode},
        render::{Blit, Color, RenderBackend, RenderError, SoftwareRenderer, SourceRect},
        text::{
            Alignment, ClipRegion, DrawOptions, FontError, FontFace, FontResult,
            GlyphMetrics, TextCanvas, TextSize,
        },
    };
}
