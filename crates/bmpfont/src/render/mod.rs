//! Rendering backends
//!
//! The text engines never touch pixels directly. Every glyph ends up as a
//! [`Blit`] handed to a [`RenderBackend`], which owns texture creation and the
//! actual blending. [`SoftwareRenderer`] is a CPU implementation targeting an
//! in-memory RGBA image.

pub mod backend;
pub mod software;

#[cfg(test)]
pub(crate) mod recording;

pub use backend::{Blit, Color, RenderBackend, RenderError, RenderResult, SourceRect};
pub use software::{SoftwareRenderer, SoftwareTexture};
