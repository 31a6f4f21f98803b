pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;
pub mod level;

// Re-export key types at crate root for convenience
pub use api::config::{LevelConfig, PlayerConfig};
pub use api::error::LevelError;
pub use api::types::{Facing, LevelEvent};
pub use assets::manifest::AssetManifest;
pub use assets::registry::{AssetSource, SpriteFrames, SpriteRegistry};
pub use components::animation::{AnimationComponent, AnimationDef};
pub use components::dust::{DustEffect, DustKind};
pub use components::enemy::{reverse_on_constraints, Enemy};
pub use components::group::TileGroup;
pub use components::layer::{Backdrop, RenderLayer};
pub use components::player::{Player, PlayerStatus};
pub use components::sprite::{AtlasId, SpriteComponent};
pub use components::tile::{Anchor, CoinKind, PalmKind, Tile, TileKind};
pub use core::contact::{CeilingContact, Contacts, GroundContact, WallContact};
pub use core::geometry::Rect;
pub use core::physics::{resolve_horizontal, resolve_vertical, KineticBody};
pub use core::runner::LevelRunner;
pub use core::scroll::{ScrollController, ScrollDecision};
pub use core::time::FixedTimestep;
pub use input::queue::{keys, Controls, InputEvent, InputQueue};
pub use level::layout::{LayerKind, LayoutSource, LevelData, EMPTY_CELL};
pub use level::Level;
pub use renderer::instance::{LayerBatch, RenderBuffer, RenderInstance};
pub use renderer::traits::DrawSurface;
pub use systems::rng::Rng;
