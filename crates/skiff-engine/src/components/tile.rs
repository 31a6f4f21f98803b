//! Tile kinds and how each one is placed in its grid cell.
//!
//! Layout cells are string codes. [`TileKind::from_code`] maps a code in a
//! given layer to a closed set of kinds; each kind knows its asset, its
//! default size, its collision size and its [`Anchor`]. Nothing downstream
//! looks at the code again: the resolver only sees rectangles.

use glam::Vec2;

use crate::api::error::LevelError;
use crate::assets::registry::{AssetSource, SpriteFrames};
use crate::components::animation::AnimationComponent;
use crate::components::layer::RenderLayer;
use crate::components::sprite::SpriteComponent;
use crate::core::geometry::Rect;
use crate::level::layout::LayerKind;
use crate::renderer::traits::DrawSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinKind {
    Gold,
    Silver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PalmKind {
    Small,
    Large,
    Background,
}

/// Every kind of tile a layout can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Cell of the terrain sheet.
    Terrain(u32),
    /// Cell of the decorative grass sheet.
    Grass(u32),
    Crate,
    Coin(CoinKind),
    Palm(PalmKind),
    Enemy,
    /// Invisible patrol bound.
    Constraint,
    /// The level's end marker (the hat).
    Goal,
}

/// How a sprite of some size sits inside its grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Top-left corner on the cell's top-left corner.
    TopLeft,
    /// Bottom-left corner on the cell's bottom-left corner. Short sprites
    /// (crates, enemies) stand on the cell floor.
    BottomLeft,
    /// Centered in the cell.
    Center,
    /// Top-left at the cell's left edge, raised by `offset` pixels. Palm
    /// trunks reach up out of their cell.
    Raised { offset: f32 },
}

impl Anchor {
    /// Place a sprite of `size` in the cell whose top-left is `cell`.
    pub fn place(self, cell: Vec2, tile_size: f32, size: Vec2) -> Result<Rect, LevelError> {
        let top_left = match self {
            Anchor::TopLeft => cell,
            Anchor::BottomLeft => Vec2::new(cell.x, cell.y + tile_size - size.y),
            Anchor::Center => {
                let half = (tile_size / 2.0).floor();
                Vec2::new(cell.x + half - size.x / 2.0, cell.y + half - size.y / 2.0)
            }
            Anchor::Raised { offset } => Vec2::new(cell.x, cell.y - offset),
        };
        Rect::from_top_left(top_left, size)
    }
}

/// Where a tile kind's image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRef {
    Sprite(&'static str),
    SheetCell(&'static str, u32),
    /// Never drawn.
    Hidden,
}

impl TileKind {
    /// Map a non-empty layout code to a tile kind. `None` means the code is
    /// not valid for that layer. Player spawns (`"0"` in the player layer)
    /// are not tiles and also map to `None`.
    pub fn from_code(layer: LayerKind, code: &str) -> Option<Self> {
        match layer {
            LayerKind::Terrain => code.parse().ok().map(TileKind::Terrain),
            LayerKind::Grass => code.parse().ok().map(TileKind::Grass),
            LayerKind::Crates => Some(TileKind::Crate),
            LayerKind::Coins => match code {
                "0" => Some(TileKind::Coin(CoinKind::Gold)),
                "1" => Some(TileKind::Coin(CoinKind::Silver)),
                _ => None,
            },
            LayerKind::FgPalms => match code {
                "0" => Some(TileKind::Palm(PalmKind::Small)),
                "1" => Some(TileKind::Palm(PalmKind::Large)),
                _ => None,
            },
            LayerKind::BgPalms => Some(TileKind::Palm(PalmKind::Background)),
            LayerKind::Enemies => Some(TileKind::Enemy),
            LayerKind::Constraints => Some(TileKind::Constraint),
            LayerKind::Player => (code == "1").then_some(TileKind::Goal),
        }
    }

    pub fn anchor(self) -> Anchor {
        match self {
            TileKind::Crate | TileKind::Enemy => Anchor::BottomLeft,
            TileKind::Coin(_) => Anchor::Center,
            TileKind::Palm(PalmKind::Large) => Anchor::Raised { offset: 64.0 },
            TileKind::Palm(_) => Anchor::Raised { offset: 38.0 },
            TileKind::Terrain(_) | TileKind::Grass(_) | TileKind::Constraint | TileKind::Goal => {
                Anchor::TopLeft
            }
        }
    }

    pub fn asset(self) -> AssetRef {
        match self {
            TileKind::Terrain(index) => AssetRef::SheetCell("terrain", index),
            TileKind::Grass(index) => AssetRef::SheetCell("grass", index),
            TileKind::Crate => AssetRef::Sprite("crate"),
            TileKind::Coin(CoinKind::Gold) => AssetRef::Sprite("coin_gold"),
            TileKind::Coin(CoinKind::Silver) => AssetRef::Sprite("coin_silver"),
            TileKind::Palm(PalmKind::Small) => AssetRef::Sprite("palm_small"),
            TileKind::Palm(PalmKind::Large) => AssetRef::Sprite("palm_large"),
            TileKind::Palm(PalmKind::Background) => AssetRef::Sprite("palm_bg"),
            TileKind::Enemy => AssetRef::Sprite("enemy_run"),
            TileKind::Constraint => AssetRef::Hidden,
            TileKind::Goal => AssetRef::Sprite("hat"),
        }
    }

    /// Size used when the asset source has no image for this kind.
    /// Crates keep their short 3/4-height box either way.
    pub fn default_size(self, tile_size: f32) -> Vec2 {
        match self {
            TileKind::Crate => Vec2::new(tile_size, tile_size * 0.75),
            TileKind::Coin(_) => Vec2::splat(tile_size / 2.0),
            _ => Vec2::splat(tile_size),
        }
    }

    /// Collision box for this kind given the size of its image.
    /// Sheet tiles, palms and the goal collide as one full cell whatever
    /// their image; crates, coins and enemies collide with the image itself.
    pub fn collision_size(self, tile_size: f32, image: Vec2) -> Vec2 {
        match self {
            TileKind::Crate | TileKind::Coin(_) | TileKind::Enemy => image,
            TileKind::Terrain(_)
            | TileKind::Grass(_)
            | TileKind::Palm(_)
            | TileKind::Goal
            | TileKind::Constraint => Vec2::splat(tile_size),
        }
    }

    pub fn render_layer(self) -> Option<RenderLayer> {
        match self {
            TileKind::Terrain(_) => Some(RenderLayer::Terrain),
            TileKind::Grass(_) => Some(RenderLayer::Grass),
            TileKind::Crate => Some(RenderLayer::Crates),
            TileKind::Coin(_) => Some(RenderLayer::Coins),
            TileKind::Palm(PalmKind::Background) => Some(RenderLayer::BackgroundPalms),
            TileKind::Palm(_) => Some(RenderLayer::ForegroundPalms),
            TileKind::Enemy => Some(RenderLayer::Enemies),
            TileKind::Goal => Some(RenderLayer::Goal),
            TileKind::Constraint => None,
        }
    }

    fn frames(self, assets: &dyn AssetSource) -> Option<SpriteFrames> {
        match self.asset() {
            AssetRef::Sprite(name) => assets.sprite(name),
            AssetRef::SheetCell(sheet, index) => assets.sheet_cell(sheet, index),
            AssetRef::Hidden => None,
        }
    }
}

/// A placed tile: rectangle plus whatever it needs to be drawn.
#[derive(Debug, Clone)]
pub struct Tile {
    pub kind: TileKind,
    /// Collision box.
    pub rect: Rect,
    /// Drawn size. The image shares the collision box's top-left corner.
    pub image_size: Vec2,
    pub sprite: Option<SpriteComponent>,
    pub animation: Option<AnimationComponent>,
}

impl Tile {
    /// Build the tile for `kind` in the cell whose top-left corner is `cell`.
    pub fn spawn(
        kind: TileKind,
        cell: Vec2,
        tile_size: f32,
        assets: &dyn AssetSource,
    ) -> Result<Self, LevelError> {
        let frames = kind.frames(assets);
        let image_size = frames
            .as_ref()
            .map_or_else(|| kind.default_size(tile_size), |f| f.size);
        let rect = kind
            .anchor()
            .place(cell, tile_size, kind.collision_size(tile_size, image_size))?;
        // A degenerate image is rejected here, not at draw time.
        Rect::from_top_left(rect.top_left(), image_size)?;

        let (sprite, animation) = match frames {
            Some(f) => (
                Some(f.sprite),
                f.animation.map(|def| AnimationComponent::single("default", def)),
            ),
            None => (None, None),
        };

        Ok(Self {
            kind,
            rect,
            image_size,
            sprite,
            animation,
        })
    }

    /// Advance the animation and move with the world.
    pub fn update(&mut self, world_shift: f32, dt: f32) {
        if let Some(anim) = self.animation.as_mut() {
            anim.tick(dt);
            if let (Some(frame), Some(sprite)) = (anim.current_frame(), self.sprite.as_mut()) {
                sprite.set_frame(frame);
            }
        }
        self.rect.shift_x(world_shift);
    }

    /// Where the image is drawn this tick.
    pub fn image_rect(&self) -> Rect {
        Rect::from_top_left(self.rect.top_left(), self.image_size).unwrap_or(self.rect)
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface, flip_x: bool) {
        if let (Some(sprite), Some(layer)) = (&self.sprite, self.kind.render_layer()) {
            surface.draw_sprite(layer, &self.image_rect(), sprite, flip_x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::registry::SpriteRegistry;

    const TILE: f32 = 64.0;

    fn spawn(kind: TileKind, col: f32, row: f32) -> Tile {
        Tile::spawn(kind, Vec2::new(col * TILE, row * TILE), TILE, &SpriteRegistry::new()).unwrap()
    }

    #[test]
    fn codes_map_to_kinds() {
        assert_eq!(TileKind::from_code(LayerKind::Terrain, "7"), Some(TileKind::Terrain(7)));
        assert_eq!(TileKind::from_code(LayerKind::Terrain, "x"), None);
        assert_eq!(
            TileKind::from_code(LayerKind::Coins, "1"),
            Some(TileKind::Coin(CoinKind::Silver))
        );
        assert_eq!(TileKind::from_code(LayerKind::Coins, "2"), None);
        assert_eq!(
            TileKind::from_code(LayerKind::FgPalms, "1"),
            Some(TileKind::Palm(PalmKind::Large))
        );
        assert_eq!(
            TileKind::from_code(LayerKind::BgPalms, "3"),
            Some(TileKind::Palm(PalmKind::Background))
        );
        assert_eq!(TileKind::from_code(LayerKind::Player, "1"), Some(TileKind::Goal));
        assert_eq!(TileKind::from_code(LayerKind::Player, "0"), None);
    }

    #[test]
    fn crate_is_bottom_anchored_and_short() {
        let tile = spawn(TileKind::Crate, 2.0, 3.0);
        assert_eq!(tile.rect.height(), 48.0);
        assert_eq!(tile.rect.bottom(), 4.0 * TILE);
        assert_eq!(tile.rect.top(), 4.0 * TILE - 48.0);
        assert_eq!(tile.rect.left(), 2.0 * TILE);
    }

    #[test]
    fn terrain_is_top_left_anchored() {
        let tile = spawn(TileKind::Terrain(0), 1.0, 1.0);
        assert_eq!(tile.rect.top_left(), Vec2::new(64.0, 64.0));
        assert_eq!(tile.rect.size(), Vec2::splat(64.0));
    }

    #[test]
    fn coin_is_centered() {
        let tile = spawn(TileKind::Coin(CoinKind::Gold), 0.0, 0.0);
        assert_eq!(tile.rect.center(), Vec2::new(32.0, 32.0));
    }

    #[test]
    fn palms_are_raised() {
        let small = spawn(TileKind::Palm(PalmKind::Small), 0.0, 2.0);
        let large = spawn(TileKind::Palm(PalmKind::Large), 0.0, 2.0);
        assert_eq!(small.rect.top(), 128.0 - 38.0);
        assert_eq!(large.rect.top(), 128.0 - 64.0);
    }

    #[test]
    fn asset_size_overrides_default() {
        let json = r#"{
            "atlases": [ { "name": "objects", "cols": 8, "rows": 8, "path": "o.png",
                           "cell_width": 64, "cell_height": 64 } ],
            "sprites": { "enemy_run": { "atlas": 0, "col": 0, "row": 2,
                                        "width": 60, "height": 42, "frames": 6 } }
        }"#;
        let manifest = crate::assets::manifest::AssetManifest::from_json(json).unwrap();
        let reg = SpriteRegistry::from_manifest(&manifest);
        let tile = Tile::spawn(TileKind::Enemy, Vec2::new(0.0, 64.0), TILE, &reg).unwrap();

        assert_eq!(tile.rect.size(), Vec2::new(60.0, 42.0));
        assert_eq!(tile.rect.bottom(), 128.0);
        assert!(tile.sprite.is_some());
        assert!(tile.animation.is_some());
    }

    fn registry(sprites: &str) -> SpriteRegistry {
        let json = format!(
            r#"{{
            "atlases": [ {{ "name": "objects", "cols": 8, "rows": 8, "path": "o.png",
                           "cell_width": 64, "cell_height": 64 }} ],
            "sprites": {{ {sprites} }}
        }}"#
        );
        let manifest = crate::assets::manifest::AssetManifest::from_json(&json).unwrap();
        SpriteRegistry::from_manifest(&manifest)
    }

    #[test]
    fn palm_collides_as_one_cell_whatever_its_image() {
        let reg = registry(r#""palm_small": { "atlas": 0, "col": 0, "row": 0, "width": 76, "height": 96 }"#);
        let palm = Tile::spawn(TileKind::Palm(PalmKind::Small), Vec2::new(0.0, 128.0), TILE, &reg).unwrap();

        assert_eq!(palm.rect.top_left(), Vec2::new(0.0, 90.0));
        assert_eq!(palm.rect.size(), Vec2::splat(64.0));
        assert_eq!(palm.image_rect().top_left(), Vec2::new(0.0, 90.0));
        assert_eq!(palm.image_rect().size(), Vec2::new(76.0, 96.0));
    }

    #[test]
    fn goal_collides_as_one_cell_and_draws_its_image() {
        let reg = registry(r#""hat": { "atlas": 0, "col": 0, "row": 1, "width": 40, "height": 30 }"#);
        let goal = Tile::spawn(TileKind::Goal, Vec2::new(64.0, 64.0), TILE, &reg).unwrap();
        assert_eq!(goal.rect.size(), Vec2::splat(64.0));

        let mut buf = crate::renderer::instance::RenderBuffer::new();
        goal.draw(&mut buf, false);
        let drawn = buf.instances_on(RenderLayer::Goal).next().unwrap();
        assert_eq!((drawn.x, drawn.y), (64.0, 64.0));
        assert_eq!((drawn.width, drawn.height), (40.0, 30.0));
    }

    #[test]
    fn update_shifts_and_animates() {
        let mut tile = spawn(TileKind::Terrain(0), 1.0, 0.0);
        tile.update(-8.0, 1.0 / 60.0);
        assert_eq!(tile.rect.left(), 56.0);
    }

    #[test]
    fn constraints_are_hidden() {
        assert_eq!(TileKind::Constraint.asset(), AssetRef::Hidden);
        assert!(TileKind::Constraint.render_layer().is_none());
    }
}
