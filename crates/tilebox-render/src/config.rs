//! JSON presets for renderables.
//!
//! A preset describes the extent, optional hit box and flags of a
//! renderable so level data can declare them instead of code.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tilebox_core::{HitboxAxis, Result, TileboxError, DEFAULT_DEBUG_COLOR};
use tracing::{debug, warn};

/// Hit box override for a preset. Either axis may be left out.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HitboxConfig {
    pub x: Option<HitboxAxis>,
    pub y: Option<HitboxAxis>,
}

/// Configuration for a renderable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderableConfig {
    /// Visual width (default: 32).
    pub width: f32,
    /// Visual height (default: 32).
    pub height: f32,
    /// Optional hit box, applied after the extent.
    pub hitbox: Option<HitboxConfig>,
    /// Normalized pivot (default: center).
    pub anchor_point: [f32; 2],
    pub visible: bool,
    pub always_update: bool,
    pub update_when_paused: bool,
    pub is_persistent: bool,
    pub floating: bool,
    /// Z-order for sorting.
    pub z: i32,
    /// Outline color for debug drawing.
    pub debug_color: String,
}

impl Default for RenderableConfig {
    fn default() -> Self {
        Self {
            width: 32.0,
            height: 32.0,
            hitbox: None,
            anchor_point: [0.5, 0.5],
            visible: true,
            always_update: false,
            update_when_paused: false,
            is_persistent: false,
            floating: false,
            z: 0,
            debug_color: DEFAULT_DEBUG_COLOR.to_string(),
        }
    }
}

impl RenderableConfig {
    /// Parse and validate a preset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            width = config.width,
            height = config.height,
            hitbox = config.hitbox.is_some(),
            "Loaded renderable config"
        );
        Ok(config)
    }

    /// Read, parse and validate a preset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Reading renderable config");
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject extents the geometry layer would silently accept.
    pub fn validate(&self) -> Result<()> {
        check_extent("width", self.width)?;
        check_extent("height", self.height)?;

        if let Some(hitbox) = &self.hitbox {
            for (name, axis) in [("hitbox.x", hitbox.x), ("hitbox.y", hitbox.y)] {
                if let Some(axis) = axis {
                    if !axis.offset.is_finite() {
                        return Err(reject(format!("{name}.offset must be finite")));
                    }
                    check_extent(name, axis.extent)?;
                }
            }
        }

        if !self.anchor_point.iter().all(|v| (0.0..=1.0).contains(v)) {
            return Err(reject(format!(
                "anchor_point {:?} must lie in 0..=1",
                self.anchor_point
            )));
        }
        Ok(())
    }
}

fn check_extent(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(reject(format!(
            "{name} must be finite and non-negative, got {value}"
        )));
    }
    Ok(())
}

fn reject(message: String) -> TileboxError {
    warn!(%message, "Rejected renderable config");
    TileboxError::Config(message)
}
