//! Builds every group of a level from a layout.

use glam::Vec2;

use crate::api::config::LevelConfig;
use crate::api::error::LevelError;
use crate::assets::registry::AssetSource;
use crate::components::enemy::Enemy;
use crate::components::group::TileGroup;
use crate::components::player::Player;
use crate::components::tile::{Tile, TileKind};
use crate::level::layout::{LayerKind, LayoutSource, EMPTY_CELL};
use crate::systems::rng::Rng;

/// Player-layer code marking where the player starts.
pub const PLAYER_SPAWN_CODE: &str = "0";

/// Everything a level owns, freshly built and not yet moved.
#[derive(Debug, Clone)]
pub struct LevelParts {
    pub terrain: TileGroup,
    pub grass: TileGroup,
    pub crates: TileGroup,
    pub coins: TileGroup,
    pub fg_palms: TileGroup,
    pub bg_palms: TileGroup,
    pub constraints: TileGroup,
    pub goal: TileGroup,
    pub enemies: Vec<Enemy>,
    pub player: Player,
}

/// Non-empty cells of a layer in row-major order, as `(row, col, code)`.
fn cells<'a>(
    layout: &'a dyn LayoutSource,
    layer: LayerKind,
) -> impl Iterator<Item = (usize, usize, &'a str)> + 'a {
    layout.layer(layer).unwrap_or_default().iter().enumerate().flat_map(|(row, cells)| {
        cells
            .iter()
            .enumerate()
            .filter(|(_, code)| code.as_str() != EMPTY_CELL)
            .map(move |(col, code)| (row, col, code.as_str()))
    })
}

fn cell_origin(row: usize, col: usize, tile_size: f32) -> Vec2 {
    Vec2::new(col as f32 * tile_size, row as f32 * tile_size)
}

fn unknown(layer: LayerKind, code: &str, row: usize, col: usize) -> LevelError {
    LevelError::UnknownTileCode {
        layer,
        code: code.to_string(),
        row,
        col,
    }
}

/// Build the tile group for one layer.
pub fn build_group(
    layout: &dyn LayoutSource,
    layer: LayerKind,
    tile_size: f32,
    assets: &dyn AssetSource,
) -> Result<TileGroup, LevelError> {
    cells(layout, layer)
        .map(|(row, col, code)| {
            let kind = TileKind::from_code(layer, code).ok_or_else(|| unknown(layer, code, row, col))?;
            Tile::spawn(kind, cell_origin(row, col, tile_size), tile_size, assets)
        })
        .collect()
}

/// Build enemies, each with a patrol speed drawn from the configured range.
pub fn build_enemies(
    layout: &dyn LayoutSource,
    config: &LevelConfig,
    assets: &dyn AssetSource,
    rng: &mut Rng,
) -> Result<Vec<Enemy>, LevelError> {
    let tiles = build_group(layout, LayerKind::Enemies, config.tile_size, assets)?;
    Ok(tiles
        .into_iter()
        .map(|tile| {
            let speed = rng.range_inclusive(config.enemy_min_speed, config.enemy_max_speed);
            Enemy::new(tile, speed as f32)
        })
        .collect())
}

/// Split the player layer into the player and the goal group.
/// The first spawn cell in row-major order wins.
pub fn build_player(
    layout: &dyn LayoutSource,
    config: &LevelConfig,
    assets: &dyn AssetSource,
) -> Result<(Player, TileGroup), LevelError> {
    let tile_size = config.tile_size;
    let mut spawn = None;
    let mut goal = TileGroup::new();

    for (row, col, code) in cells(layout, LayerKind::Player) {
        if code == PLAYER_SPAWN_CODE {
            if spawn.is_some() {
                log::warn!("extra player spawn at row {row}, column {col} ignored");
                continue;
            }
            spawn = Some(cell_origin(row, col, tile_size));
            continue;
        }
        let kind = TileKind::from_code(LayerKind::Player, code)
            .ok_or_else(|| unknown(LayerKind::Player, code, row, col))?;
        goal.push(Tile::spawn(kind, cell_origin(row, col, tile_size), tile_size, assets)?);
    }

    let spawn = spawn.ok_or(LevelError::MissingPlayerSpawn)?;
    let player = Player::spawn(spawn, &config.player, assets)?;
    Ok((player, goal))
}

/// Build every group of the level.
pub fn build(
    layout: &dyn LayoutSource,
    assets: &dyn AssetSource,
    config: &LevelConfig,
) -> Result<LevelParts, LevelError> {
    let tile_size = config.tile_size;
    let mut rng = Rng::new(config.rng_seed);

    let (player, goal) = build_player(layout, config, assets)?;
    let parts = LevelParts {
        terrain: build_group(layout, LayerKind::Terrain, tile_size, assets)?,
        grass: build_group(layout, LayerKind::Grass, tile_size, assets)?,
        crates: build_group(layout, LayerKind::Crates, tile_size, assets)?,
        coins: build_group(layout, LayerKind::Coins, tile_size, assets)?,
        fg_palms: build_group(layout, LayerKind::FgPalms, tile_size, assets)?,
        bg_palms: build_group(layout, LayerKind::BgPalms, tile_size, assets)?,
        constraints: build_group(layout, LayerKind::Constraints, tile_size, assets)?,
        enemies: build_enemies(layout, config, assets, &mut rng)?,
        goal,
        player,
    };

    log::info!(
        "level built: {} terrain, {} crates, {} coins, {} palms, {} enemies, {} constraints",
        parts.terrain.len(),
        parts.crates.len(),
        parts.coins.len(),
        parts.fg_palms.len() + parts.bg_palms.len(),
        parts.enemies.len(),
        parts.constraints.len(),
    );
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::registry::SpriteRegistry;
    use crate::level::layout::LevelData;

    fn config() -> LevelConfig {
        LevelConfig::default()
    }

    fn layout_with_spawn() -> LevelData {
        let mut data = LevelData::default();
        data.set(LayerKind::Player, 0, 0, "0");
        data
    }

    #[test]
    fn groups_follow_layout_cells() {
        let mut data = layout_with_spawn();
        data.set(LayerKind::Terrain, 2, 0, "0");
        data.set(LayerKind::Terrain, 2, 1, "3");
        data.set(LayerKind::Crates, 1, 3, "0");

        let parts = build(&data, &SpriteRegistry::new(), &config()).unwrap();
        assert_eq!(parts.terrain.len(), 2);
        let first = parts.terrain.iter().next().unwrap();
        assert_eq!(first.kind, TileKind::Terrain(0));
        assert_eq!(first.rect.top_left(), Vec2::new(0.0, 128.0));

        let crate_tile = parts.crates.iter().next().unwrap();
        assert_eq!(crate_tile.rect.bottom(), 128.0);
        assert_eq!(crate_tile.rect.left(), 192.0);
    }

    #[test]
    fn unknown_code_reports_cell() {
        let mut data = layout_with_spawn();
        data.set(LayerKind::Coins, 3, 5, "7");

        let err = build(&data, &SpriteRegistry::new(), &config()).unwrap_err();
        match err {
            LevelError::UnknownTileCode { layer, code, row, col } => {
                assert_eq!(layer, LayerKind::Coins);
                assert_eq!(code, "7");
                assert_eq!((row, col), (3, 5));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn non_numeric_terrain_index_is_unknown() {
        let mut data = layout_with_spawn();
        data.set(LayerKind::Terrain, 0, 1, "abc");
        let err = build(&data, &SpriteRegistry::new(), &config()).unwrap_err();
        assert!(matches!(err, LevelError::UnknownTileCode { layer: LayerKind::Terrain, .. }));
    }

    #[test]
    fn missing_spawn_is_an_error() {
        let mut data = LevelData::default();
        data.set(LayerKind::Player, 0, 4, "1");
        let err = build(&data, &SpriteRegistry::new(), &config()).unwrap_err();
        assert!(matches!(err, LevelError::MissingPlayerSpawn));
    }

    #[test]
    fn player_layer_splits_spawn_and_goal() {
        let mut data = layout_with_spawn();
        data.set(LayerKind::Player, 1, 2, "0");
        data.set(LayerKind::Player, 3, 9, "1");

        let (player, goal) = build_player(&data, &config(), &SpriteRegistry::new()).unwrap();
        assert_eq!(player.rect().top_left(), Vec2::ZERO);
        assert_eq!(goal.len(), 1);
        assert_eq!(goal.iter().next().unwrap().kind, TileKind::Goal);
    }

    #[test]
    fn enemy_speeds_are_seeded_and_in_range() {
        let mut data = layout_with_spawn();
        for col in 0..8 {
            data.set(LayerKind::Enemies, 1, col, "0");
        }
        let a = build(&data, &SpriteRegistry::new(), &config()).unwrap();
        let b = build(&data, &SpriteRegistry::new(), &config()).unwrap();

        let speeds: Vec<f32> = a.enemies.iter().map(|e| e.speed).collect();
        assert_eq!(speeds, b.enemies.iter().map(|e| e.speed).collect::<Vec<_>>());
        assert!(speeds.iter().all(|s| (3.0..=5.0).contains(s)));
        assert!(a.enemies.iter().all(|e| e.direction == 1.0));
    }

    #[test]
    fn full_speed_range_from_json_builds() {
        let config =
            LevelConfig::from_json(r#"{"enemy_min_speed":0,"enemy_max_speed":4294967295}"#).unwrap();
        let mut data = layout_with_spawn();
        data.set(LayerKind::Enemies, 1, 2, "0");

        let parts = build(&data, &SpriteRegistry::new(), &config).unwrap();
        assert_eq!(parts.enemies.len(), 1);
        assert!(parts.enemies[0].speed >= 0.0);
    }
}
