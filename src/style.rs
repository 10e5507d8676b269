//! Arrow styling: container defaults, per-relation overrides, TOML themes
//!
//! The container owns a fully resolved `ArrowStyle`; each relation may
//! carry a `StyleOverride` whose set fields win over the container's.
//! A `Theme` is a TOML file overriding the container defaults, so the same
//! scene can be rendered with different visual treatments.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing theme files
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Shape drawn at the target end of an arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndShape {
    /// Triangular arrowhead marker
    #[default]
    Arrow,
    /// Bare line, no marker reference
    None,
}

/// Fully resolved style for drawing one arrow
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowStyle {
    pub stroke_color: String,
    pub stroke_width: f64,
    pub stroke_dasharray: Option<String>,
    /// Marker length along the path direction
    pub arrow_length: f64,
    /// Marker height perpendicular to the path
    pub arrow_thickness: f64,
    pub end_shape: EndShape,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            stroke_color: "#333333".to_string(),
            stroke_width: 2.0,
            stroke_dasharray: None,
            arrow_length: 10.0,
            arrow_thickness: 6.0,
            end_shape: EndShape::Arrow,
        }
    }
}

impl ArrowStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_stroke_dasharray(mut self, dasharray: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(dasharray.into());
        self
    }

    pub fn with_arrow_length(mut self, length: f64) -> Self {
        self.arrow_length = length;
        self
    }

    pub fn with_arrow_thickness(mut self, thickness: f64) -> Self {
        self.arrow_thickness = thickness;
        self
    }

    pub fn with_end_shape(mut self, shape: EndShape) -> Self {
        self.end_shape = shape;
        self
    }
}

/// Per-relation style override; unset fields fall back to the container style
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StyleOverride {
    pub stroke_color: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_dasharray: Option<String>,
    pub arrow_length: Option<f64>,
    pub arrow_thickness: Option<f64>,
    pub end_shape: Option<EndShape>,
}

impl StyleOverride {
    /// Merge this override onto a base style
    pub fn resolve(&self, base: &ArrowStyle) -> ArrowStyle {
        ArrowStyle {
            stroke_color: self
                .stroke_color
                .clone()
                .unwrap_or_else(|| base.stroke_color.clone()),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
            stroke_dasharray: self
                .stroke_dasharray
                .clone()
                .or_else(|| base.stroke_dasharray.clone()),
            arrow_length: self.arrow_length.unwrap_or(base.arrow_length),
            arrow_thickness: self.arrow_thickness.unwrap_or(base.arrow_thickness),
            end_shape: self.end_shape.unwrap_or(base.end_shape),
        }
    }
}

/// A theme overriding the container arrow style, loadable from TOML
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub name: Option<String>,
    pub description: Option<String>,
    pub arrow: StyleOverride,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    arrow: StyleOverride,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            arrow: parsed.arrow,
        })
    }

    /// Apply this theme's overrides to a base style
    pub fn apply(&self, base: &ArrowStyle) -> ArrowStyle {
        self.arrow.resolve(base)
    }
}
