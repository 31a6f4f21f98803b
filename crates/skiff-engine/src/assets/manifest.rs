use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::api::error::LevelError;

/// Asset manifest describing the atlases and named sprites of a level.
/// Loaded from a JSON file by the host; image decoding happens elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// List of texture atlases. Each atlas is also a sheet that can be cut
    /// into numbered cells (terrain and grass tiles are addressed this way).
    pub atlases: Vec<AtlasDescriptor>,
    /// Named sprite lookup: name → atlas index + cell coordinates + size.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
}

/// Describes a single texture atlas laid out as a uniform grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Human-readable name (e.g., "terrain").
    pub name: String,
    /// Number of columns in the atlas grid.
    pub cols: u32,
    /// Number of rows in the atlas grid.
    pub rows: u32,
    /// Relative path to the PNG file (e.g., "terrain_tiles.png").
    pub path: String,
    /// Width of one grid cell in pixels.
    pub cell_width: f32,
    /// Height of one grid cell in pixels.
    pub cell_height: f32,
}

/// Describes a named sprite within an atlas.
///
/// Animated sprites occupy `frames` consecutive columns starting at `col`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    /// Column in the atlas grid.
    pub col: u32,
    /// Row in the atlas grid.
    pub row: u32,
    /// Pixel width of the sprite image (drives the collision box).
    pub width: f32,
    /// Pixel height of the sprite image.
    pub height: f32,
    /// Number of animation frames (default: 1).
    #[serde(default = "default_frames")]
    pub frames: u32,
    /// Animation speed (default: 9 frames per second).
    #[serde(default = "default_fps")]
    pub fps: f32,
    /// Whether the animation repeats (default: true).
    #[serde(default = "default_looping")]
    pub looping: bool,
}

fn default_frames() -> u32 {
    1
}

fn default_fps() -> f32 {
    9.0
}

fn default_looping() -> bool {
    true
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "atlases": [
                { "name": "terrain", "cols": 4, "rows": 4, "path": "terrain_tiles.png",
                  "cell_width": 64, "cell_height": 64 }
            ],
            "sprites": {
                "crate": { "atlas": 0, "col": 0, "row": 3, "width": 64, "height": 48 }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.atlases.len(), 1);
        assert_eq!(manifest.atlases[0].cols, 4);

        let crate_sprite = &manifest.sprites["crate"];
        assert_eq!(crate_sprite.height, 48.0);
        assert_eq!(crate_sprite.frames, 1);
        assert_eq!(crate_sprite.fps, 9.0);
        assert!(crate_sprite.looping);
    }

    #[test]
    fn sprites_are_optional() {
        let manifest = AssetManifest::from_json(r#"{ "atlases": [] }"#).unwrap();
        assert!(manifest.sprites.is_empty());
    }

    #[test]
    fn missing_required_field_fails() {
        let json = r#"{ "atlases": [ { "name": "terrain" } ] }"#;
        assert!(matches!(
            AssetManifest::from_json(json),
            Err(LevelError::Json(_))
        ));
    }
}
