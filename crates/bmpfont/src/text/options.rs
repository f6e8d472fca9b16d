//! Per-draw settings

use serde::{Deserialize, Serialize};

use super::ClipRegion;

/// Horizontal placement of wrapped lines within the wrap width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// Lines start at the origin
    #[default]
    Left,
    /// Lines are centered in the wrap width
    Center,
    /// Lines end at the wrap width
    Right,
}

impl Alignment {
    /// Horizontal shift for a line `used` pixels wide inside `available` pixels
    pub const fn offset(self, available: u32, used: u32) -> u32 {
        let slack = available.saturating_sub(used);
        match self {
            Self::Left => 0,
            Self::Center => slack / 2,
            Self::Right => slack,
        }
    }
}

/// Settings applied to one draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
    /// Optional clip rectangle; `None` draws unclipped
    pub clip: Option<ClipRegion>,
    /// Alignment of word-wrapped lines
    pub alignment: Alignment,
}

impl DrawOptions {
    /// Options with a clip rectangle
    pub const fn clipped(clip: ClipRegion) -> Self {
        Self { clip: Some(clip), alignment: Alignment::Left }
    }
}
