use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::LevelError;

/// Level configuration, provided by the host.
///
/// Every field has a default, so a JSON document only needs the values it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Grid cell size in pixels (default: 64).
    pub tile_size: f32,
    /// Screen width in pixels; drives the scroll zones (default: 1200).
    pub screen_width: f32,
    /// Screen height in pixels (default: 704).
    pub screen_height: f32,
    /// World shift magnitude while edge-scrolling (default: 8).
    pub scroll_speed: f32,
    /// World shift applied on the first tick, before any scroll decision (default: 0).
    pub initial_world_shift: f32,
    /// Slowest enemy patrol speed, inclusive (default: 3).
    pub enemy_min_speed: u32,
    /// Fastest enemy patrol speed, inclusive (default: 5).
    pub enemy_max_speed: u32,
    /// Seed for enemy speed selection (default: 42).
    pub rng_seed: u64,
    pub player: PlayerConfig,
}

/// Player body tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Collision box size when the asset source has no player sprite.
    pub size: Vec2,
    /// Nominal horizontal speed in pixels per tick (default: 8).
    pub speed: f32,
    /// Added to vertical velocity every tick (default: 0.8).
    pub gravity: f32,
    /// Vertical velocity set on jump; negative is up (default: -16).
    pub jump_speed: f32,
    /// Terminal fall velocity. Unset means falls accelerate without bound.
    pub max_fall_speed: Option<f32>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            tile_size: 64.0,
            screen_width: 1200.0,
            screen_height: 704.0,
            scroll_speed: 8.0,
            initial_world_shift: 0.0,
            enemy_min_speed: 3,
            enemy_max_speed: 5,
            rng_seed: 42,
            player: PlayerConfig::default(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(40.0, 64.0),
            speed: 8.0,
            gravity: 0.8,
            jump_speed: -16.0,
            max_fall_speed: None,
        }
    }
}

impl LevelConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Ticks per second implied by `fixed_dt`.
    pub fn tick_rate(&self) -> f32 {
        1.0 / self.fixed_dt
    }
}
