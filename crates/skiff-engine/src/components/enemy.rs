use crate::components::tile::Tile;
use crate::core::geometry::Rect;
use crate::renderer::traits::DrawSurface;

/// A patrolling enemy: walks at a constant speed and turns around when it
/// overlaps a constraint rectangle.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub tile: Tile,
    /// -1.0 (left) or 1.0 (right).
    pub direction: f32,
    /// Pixels per tick.
    pub speed: f32,
}

impl Enemy {
    /// Enemies start walking right.
    pub fn new(tile: Tile, speed: f32) -> Self {
        Self {
            tile,
            direction: 1.0,
            speed,
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.tile.rect
    }

    pub fn reverse(&mut self) {
        self.direction = -self.direction;
    }

    /// Animate, move with the world, then walk.
    pub fn update(&mut self, world_shift: f32, dt: f32) {
        self.tile.update(world_shift, dt);
        self.tile.rect.shift_x(self.direction * self.speed);
    }

    /// Enemy art faces left, so it is mirrored while walking right.
    pub fn flip_x(&self) -> bool {
        self.direction > 0.0
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        self.tile.draw(surface, self.flip_x());
    }
}

/// Turn around every enemy that overlaps any constraint. Positions are left
/// alone: the enemy is already a little way into the constraint and walks
/// back out over the next ticks.
pub fn reverse_on_constraints<'a>(
    enemies: &mut [Enemy],
    constraints: impl Iterator<Item = &'a Rect> + Clone,
) {
    for enemy in enemies.iter_mut() {
        if enemy.rect().overlaps_any(constraints.clone()) {
            enemy.reverse();
            log::trace!("enemy at x={} reversed to {}", enemy.rect().left(), enemy.direction);
        }
    }
}
