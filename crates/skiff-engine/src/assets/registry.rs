use std::collections::HashMap;

use glam::Vec2;

use crate::assets::manifest::AssetManifest;
use crate::components::animation::AnimationDef;
use crate::components::sprite::{AtlasId, SpriteComponent};

/// What the level needs to know about an image: how big it is, which atlas
/// cell to draw, and how to animate it. Pixels never reach the level.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteFrames {
    pub size: Vec2,
    pub sprite: SpriteComponent,
    /// `None` for single-frame sprites.
    pub animation: Option<AnimationDef>,
}

/// Source of decoded sprite geometry, keyed by name or by sheet cell.
pub trait AssetSource {
    /// A named sprite ("crate", "coin_gold", "player_run", ...).
    fn sprite(&self, name: &str) -> Option<SpriteFrames>;

    /// Cell `index` of a sheet cut into a uniform grid, numbered row-major.
    fn sheet_cell(&self, sheet: &str, index: u32) -> Option<SpriteFrames>;
}

#[derive(Debug, Clone)]
struct SheetInfo {
    atlas: AtlasId,
    cols: u32,
    rows: u32,
    cell_size: Vec2,
}

/// Registry of named sprites and sheets, built from an AssetManifest.
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteFrames>,
    sheets: HashMap<String, SheetInfo>,
}

impl SpriteRegistry {
    /// An empty registry: every lookup misses and tiles fall back to their
    /// default geometry without a sprite.
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
            sheets: HashMap::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut sheets = HashMap::with_capacity(manifest.atlases.len());
        for (index, atlas) in manifest.atlases.iter().enumerate() {
            sheets.insert(atlas.name.clone(), SheetInfo {
                atlas: AtlasId(index as u32),
                cols: atlas.cols,
                rows: atlas.rows,
                cell_size: Vec2::new(atlas.cell_width, atlas.cell_height),
            });
        }

        let mut sprites = HashMap::with_capacity(manifest.sprites.len());
        for (name, desc) in &manifest.sprites {
            let animation = (desc.frames > 1).then(|| {
                let def = AnimationDef::horizontal_strip(
                    desc.row as f32,
                    desc.col as f32,
                    desc.frames,
                    desc.fps,
                );
                if desc.looping { def } else { def.once() }
            });
            sprites.insert(name.clone(), SpriteFrames {
                size: Vec2::new(desc.width, desc.height),
                sprite: SpriteComponent::cell(AtlasId(desc.atlas), desc.col as f32, desc.row as f32),
                animation,
            });
        }

        log::debug!(
            "sprite registry: {} sprites, {} sheets",
            sprites.len(),
            sheets.len()
        );
        Self { sprites, sheets }
    }
}

impl AssetSource for SpriteRegistry {
    fn sprite(&self, name: &str) -> Option<SpriteFrames> {
        self.sprites.get(name).cloned()
    }

    fn sheet_cell(&self, sheet: &str, index: u32) -> Option<SpriteFrames> {
        let info = self.sheets.get(sheet)?;
        if info.cols == 0 || index >= info.cols * info.rows {
            return None;
        }
        let col = (index % info.cols) as f32;
        let row = (index / info.cols) as f32;
        Some(SpriteFrames {
            size: info.cell_size,
            sprite: SpriteComponent::cell(info.atlas, col, row),
            animation: None,
        })
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
