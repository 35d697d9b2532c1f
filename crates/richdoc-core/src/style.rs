//! Style configuration for document rendering
//!
//! `StyleConfig` is loaded once at service startup and passed by reference
//! into the renderer. It is never mutated per request; concurrent export
//! requests read the same value.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error raised while loading a style configuration file
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid style file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Font, size and color applied to one text role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleStyle {
    /// Font family name
    pub font: String,

    /// Font size in half-points (22 = 11pt)
    pub size: u32,

    /// Text color as RRGGBB hex, no leading `#`
    pub color: String,
}

impl RoleStyle {
    fn new(font: &str, size: u32, color: &str) -> Self {
        Self {
            font: font.to_string(),
            size,
            color: color.to_string(),
        }
    }
}

/// Rendering configuration: fonts, sizes, colors and spacing per text role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Body paragraph text
    pub body: RoleStyle,

    /// Bullet and ordered list item text
    pub list: RoleStyle,

    /// Table header row text (bold is forced at render time)
    pub table_header: RoleStyle,

    /// Table body row text
    pub table_body: RoleStyle,

    /// The "no content generated" sentinel paragraph
    pub placeholder: RoleStyle,

    /// Line spacing as a multiple of single spacing
    pub line_spacing: f32,

    /// Table border color as RRGGBB hex
    pub table_border_color: String,

    /// Header row background fill as RRGGBB hex
    pub table_header_shading: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            body: RoleStyle::new("Calibri", 22, "000000"),
            list: RoleStyle::new("Calibri", 22, "000000"),
            table_header: RoleStyle::new("Calibri", 22, "000000"),
            table_body: RoleStyle::new("Calibri", 20, "000000"),
            placeholder: RoleStyle::new("Calibri", 22, "808080"),
            line_spacing: 1.15,
            table_border_color: "000000".to_string(),
            table_header_shading: "D9D9D9".to_string(),
        }
    }
}

impl StyleConfig {
    /// Load a style configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from a TOML file, falling back to the default house style when
    /// the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
