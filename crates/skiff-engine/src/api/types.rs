use glam::Vec2;

/// Something the host may want to react to (sound, particles, UI).
/// Collected per tick and readable through `Level::events`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelEvent {
    /// The player left the ground; `at` is where the feet were.
    Jumped { at: Vec2 },
    /// The player touched down after being airborne.
    Landed { at: Vec2 },
}

/// Which way a sprite faces. Art is drawn facing right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn is_right(self) -> bool {
        self == Facing::Right
    }

    /// Whether the renderer should mirror the sprite horizontally.
    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }
}
