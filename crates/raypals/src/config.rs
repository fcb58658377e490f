//! Configuration documents.
//!
//! Configuration is plain serde data loaded from JSON. Every field has a
//! default, so a document only needs the keys it wants to override.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::animation::ShapeAnimation;
use crate::color::Color;
use crate::error::Result;

/// Size and clear color of an offscreen canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color::RAYWHITE,
        }
    }
}

impl CanvasConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        from_json_str(json)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        from_path(path)
    }
}

/// Settings for the terminal gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Offscreen canvas each sprite is rasterized into.
    pub canvas: CanvasConfig,
    /// Sprite spin in degrees per second while animation is running.
    pub spin_speed: f32,
    /// Applied to every shape of the selected sprite.
    pub animation: ShapeAnimation,
    /// Catalog entry shown first; wraps around the catalog length.
    pub start_index: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig {
                width: 160,
                height: 160,
                background: Color::rgb(24, 24, 32),
            },
            spin_speed: 45.0,
            animation: ShapeAnimation::new(1.5).pulse(0.9, 1.1).ping_pong(),
            start_index: 0,
        }
    }
}

impl GalleryConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        from_json_str(json)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        from_path(path)
    }
}

/// Parse any configuration type from a JSON string.
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse any configuration type from a JSON file.
pub fn from_path<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let value = from_json_str(&text)?;
    log::debug!("loaded configuration from {}", path.display());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RaypalsError;

    #[test]
    fn missing_keys_use_defaults() {
        let cfg = CanvasConfig::from_json_str(r#"{ "width": 320 }"#).unwrap();
        assert_eq!(cfg.width, 320);
        assert_eq!(cfg.height, 600);
        assert_eq!(cfg.background, Color::RAYWHITE);
    }

    #[test]
    fn background_parses() {
        let cfg = CanvasConfig::from_json_str(
            r#"{ "background": { "r": 10, "g": 20, "b": 30, "a": 255 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.background, Color::rgb(10, 20, 30));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = CanvasConfig::from_json_str("{ width: ").unwrap_err();
        assert!(matches!(err, RaypalsError::Config(_)));
    }

    #[test]
    fn gallery_overrides_nested_fields() {
        let cfg = GalleryConfig::from_json_str(
            r#"{ "canvas": { "width": 64 }, "spin_speed": 0.0, "animation": { "scale_max": 2.0 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.canvas.width, 64);
        assert_eq!(cfg.canvas.height, 600);
        assert_eq!(cfg.spin_speed, 0.0);
        assert_eq!(cfg.animation.scale_max, 2.0);
        assert_eq!(cfg.animation.scale_min, 1.0);
        assert_eq!(cfg.start_index, 0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CanvasConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, RaypalsError::Io(_)));
    }
}
