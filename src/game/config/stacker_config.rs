//! Stacker Configuration
//!
//! Lattice bounds and block colors handed to the core once at start-up.
//! `Default` returns the built-in constants; a JSON file may override any
//! subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::render::color::{
    CubePalette, EDGE_COLOR_HEX, FACE_COLOR_HEX, parse_hex_color,
};
use crate::world::{GridBounds, MAX_BOUND_MAGNITUDE};

/// Errors that can occur while loading a [`StackerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(
        "invalid bounds [{min_xyz}, {max_xyz}]: need -{limit} <= min_xyz <= 0 < max_xyz <= {limit}",
        limit = MAX_BOUND_MAGNITUDE
    )]
    InvalidBounds { min_xyz: i32, max_xyz: i32 },
    #[error("invalid {field} color {value:?}: expected #RRGGBB")]
    InvalidColor { field: &'static str, value: String },
}

/// Configuration for the block stacker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackerConfig {
    /// Lattice bounds (x, y in [min, max]; z in [0, max])
    pub bounds: GridBounds,
    /// Wireframe edge color, `#RRGGBB`
    pub edge_color: String,
    /// Face fill color, `#RRGGBB`
    pub face_color: String,
}

impl Default for StackerConfig {
    fn default() -> Self {
        Self {
            bounds: GridBounds::default(),
            edge_color: EDGE_COLOR_HEX.to_string(),
            face_color: FACE_COLOR_HEX.to_string(),
        }
    }
}

impl StackerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: StackerConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::info!(
            "Loaded config {}: bounds [{}, {}]",
            path.display(),
            config.bounds.min_xyz,
            config.bounds.max_xyz
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bounds.is_valid() {
            let GridBounds { min_xyz, max_xyz } = self.bounds;
            return Err(ConfigError::InvalidBounds { min_xyz, max_xyz });
        }
        self.palette().map(|_| ())
    }

    /// Resolve the configured colors.
    pub fn palette(&self) -> Result<CubePalette, ConfigError> {
        let parse = |field: &'static str, value: &str| {
            parse_hex_color(value).ok_or_else(|| ConfigError::InvalidColor {
                field,
                value: value.to_string(),
            })
        };
        Ok(CubePalette {
            edge: parse("edge", &self.edge_color)?,
            face: parse("face", &self.face_color)?,
        })
    }
}
