use crate::components::tile::Tile;
use crate::core::geometry::Rect;
use crate::renderer::traits::DrawSurface;

/// One collision/render group of tiles (terrain, crates, coins, ...).
/// Simple storage using a flat Vec; levels hold hundreds of tiles, not millions.
/// Iteration order is insertion order, which for built levels is row-major.
#[derive(Debug, Clone, Default)]
pub struct TileGroup {
    tiles: Vec<Tile>,
}

impl TileGroup {
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    /// Collision rectangles of every tile, in group order.
    pub fn rects(&self) -> impl Iterator<Item = &Rect> + Clone {
        self.tiles.iter().map(|t| &t.rect)
    }

    /// Advance animations and move every tile by `world_shift`.
    pub fn update(&mut self, world_shift: f32, dt: f32) {
        for tile in &mut self.tiles {
            tile.update(world_shift, dt);
        }
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        for tile in &self.tiles {
            tile.draw(surface, false);
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl FromIterator<Tile> for TileGroup {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TileGroup {
    type Item = Tile;
    type IntoIter = std::vec::IntoIter<Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}
