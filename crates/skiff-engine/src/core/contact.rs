//! Per-axis contact state for a kinetic body.
//!
//! Each axis is a tiny state machine. Transitions happen only inside the
//! resolver passes in `core::physics`; everything else reads the boolean
//! accessors on [`Contacts`].

/// Horizontal contact. The wall variants remember the snapped edge
/// (`anchor`) so release can tell "still pressed against it" from
/// "moved away while the world scrolled".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WallContact {
    #[default]
    Clear,
    /// Touching an obstacle on the left; `anchor` is the body's left edge at snap time.
    Left { anchor: f32 },
    /// Touching an obstacle on the right; `anchor` is the body's right edge at snap time.
    Right { anchor: f32 },
}

impl WallContact {
    /// Release rule applied after every horizontal pass.
    ///
    /// Left releases once the body's left edge is past the anchor or the body
    /// stops pushing left. Right is the mirror image.
    pub fn release(self, left: f32, right: f32, direction_x: f32) -> Self {
        match self {
            WallContact::Left { anchor } if left < anchor || direction_x >= 0.0 => {
                WallContact::Clear
            }
            WallContact::Right { anchor } if right > anchor || direction_x <= 0.0 => {
                WallContact::Clear
            }
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroundContact {
    #[default]
    Airborne,
    Grounded,
}

impl GroundContact {
    /// Velocity above this still counts as resting; gravity adds less than
    /// this per tick, so a grounded body does not flicker airborne.
    pub const FALL_THRESHOLD: f32 = 1.0;

    /// Release rule applied after every vertical pass.
    pub fn release(self, direction_y: f32) -> Self {
        let jumped = self == GroundContact::Grounded && direction_y < 0.0;
        if jumped || direction_y > Self::FALL_THRESHOLD {
            GroundContact::Airborne
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CeilingContact {
    #[default]
    Clear,
    Touching,
}

impl CeilingContact {
    pub fn release(self, direction_y: f32) -> Self {
        if self == CeilingContact::Touching && direction_y > 0.0 {
            CeilingContact::Clear
        } else {
            self
        }
    }
}

/// All contact state of one body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Contacts {
    pub wall: WallContact,
    pub ground: GroundContact,
    pub ceiling: CeilingContact,
}

impl Contacts {
    pub fn on_left(&self) -> bool {
        matches!(self.wall, WallContact::Left { .. })
    }

    pub fn on_right(&self) -> bool {
        matches!(self.wall, WallContact::Right { .. })
    }

    pub fn on_ground(&self) -> bool {
        self.ground == GroundContact::Grounded
    }

    pub fn on_ceiling(&self) -> bool {
        self.ceiling == CeilingContact::Touching
    }
}
