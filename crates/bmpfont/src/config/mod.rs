//! Configuration system
//!
//! Text styles can live in TOML or RON files next to the fonts they use.

pub use serde::{Serialize, Deserialize};

use std::path::Path;

use crate::render::Color;
use crate::text::{Alignment, ClipRegion, DrawOptions};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parse but cannot be used
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Line breaking strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WrapMode {
    /// Break only on newlines
    #[default]
    None,
    /// Break between words, hyphens and newlines
    Word,
    /// Break between any two glyphs
    Char,
}

/// How to draw a block of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Atlas to draw with
    pub font_path: Option<String>,
    /// Tint color
    pub color: Color,
    /// Line breaking strategy
    pub wrap: WrapMode,
    /// Wrap width in pixels; zero disables wrapping
    pub wrap_width: u32,
    /// Alignment of word-wrapped lines
    pub alignment: Alignment,
    /// Optional clip rectangle
    pub clip: Option<ClipRegion>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            color: Color::WHITE,
            wrap: WrapMode::None,
            wrap_width: 0,
            alignment: Alignment::Left,
            clip: None,
        }
    }
}

impl Config for TextConfig {}

impl TextConfig {
    /// Word-wrap into `width` pixels
    #[must_use]
    pub fn word_wrapped(mut self, width: u32) -> Self {
        self.wrap = WrapMode::Word;
        self.wrap_width = width;
        self
    }

    /// Character-wrap into `width` pixels
    #[must_use]
    pub fn char_wrapped(mut self, width: u32) -> Self {
        self.wrap = WrapMode::Char;
        self.wrap_width = width;
        self
    }

    /// Set the tint color
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the alignment
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the clip rectangle
    #[must_use]
    pub fn with_clip(mut self, clip: ClipRegion) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Clip and alignment as draw options
    pub fn options(&self) -> DrawOptions {
        DrawOptions { clip: self.clip, alignment: self.alignment }
    }

    /// Wrap mode actually applied: a zero width means no wrapping
    pub fn effective_wrap(&self) -> WrapMode {
        if self.wrap_width == 0 {
            WrapMode::None
        } else {
            self.wrap
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wrap != WrapMode::None && self.wrap_width == 0 {
            return Err(ConfigError::Invalid(format!(
                "{:?} wrapping needs a non-zero wrap_width",
                self.wrap
            )));
        }

        if self.font_path.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::Invalid("font_path cannot be empty".to_string()));
        }

        Ok(())
    }
}
