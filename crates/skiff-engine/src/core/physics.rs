//! Kinetic body integration and axis-separated overlap resolution.
//!
//! Movement is split into two passes per tick: [`resolve_horizontal`] moves
//! the body along x and pushes it out of anything it now overlaps, then
//! [`resolve_vertical`] applies gravity and does the same along y. The
//! horizontal pass must finish first; running the vertical pass on a body
//! that still overlaps a wall sideways would snap it onto the wall's top.

use glam::Vec2;

use crate::core::contact::{CeilingContact, Contacts, GroundContact, WallContact};
use crate::core::geometry::Rect;

/// A body moved by input and gravity and stopped by static geometry.
#[derive(Debug, Clone)]
pub struct KineticBody {
    /// Collision rectangle (top-left anchored).
    pub rect: Rect,
    /// `x` is -1, 0 or 1 and gets scaled by `speed`; `y` is the vertical
    /// velocity and accumulates gravity.
    pub direction: Vec2,
    /// Horizontal speed in pixels per tick.
    pub speed: f32,
    /// Added to `direction.y` every tick.
    pub gravity: f32,
    /// Optional terminal velocity. `None` lets falls accelerate without bound.
    pub max_fall_speed: Option<f32>,
    pub contacts: Contacts,
}

impl KineticBody {
    pub fn new(rect: Rect, speed: f32, gravity: f32) -> Self {
        Self {
            rect,
            direction: Vec2::ZERO,
            speed,
            gravity,
            max_fall_speed: None,
            contacts: Contacts::default(),
        }
    }

    pub fn with_max_fall_speed(mut self, max_fall_speed: Option<f32>) -> Self {
        self.max_fall_speed = max_fall_speed;
        self
    }

    /// Accelerate downward and move by the resulting vertical velocity.
    pub fn apply_gravity(&mut self) {
        self.direction.y += self.gravity;
        if let Some(max) = self.max_fall_speed {
            self.direction.y = self.direction.y.min(max);
        }
        self.rect.y += self.direction.y;
    }

    pub fn on_ground(&self) -> bool {
        self.contacts.on_ground()
    }

    pub fn on_ceiling(&self) -> bool {
        self.contacts.on_ceiling()
    }

    pub fn on_left(&self) -> bool {
        self.contacts.on_left()
    }

    pub fn on_right(&self) -> bool {
        self.contacts.on_right()
    }
}

/// Horizontal pass: speculative move along x, then push out of overlaps.
///
/// Colliders are scanned in order and every overlap re-snaps the body, so
/// with overlapping geometry the last match wins.
pub fn resolve_horizontal(body: &mut KineticBody, colliders: &[Rect]) {
    body.rect.x += body.direction.x * body.speed;

    for obstacle in colliders {
        if !obstacle.overlaps(&body.rect) {
            continue;
        }
        if body.direction.x < 0.0 {
            body.rect.set_left(obstacle.right());
            body.contacts.wall = WallContact::Left { anchor: body.rect.left() };
        } else if body.direction.x > 0.0 {
            body.rect.set_right(obstacle.left());
            body.contacts.wall = WallContact::Right { anchor: body.rect.right() };
        }
    }

    body.contacts.wall =
        body.contacts
            .wall
            .release(body.rect.left(), body.rect.right(), body.direction.x);
}

/// Vertical pass: gravity, then land on or bump into whatever overlaps.
///
/// The first overlap zeroes the vertical velocity, so later overlaps in the
/// same pass are left alone.
pub fn resolve_vertical(body: &mut KineticBody, colliders: &[Rect]) {
    body.apply_gravity();

    for obstacle in colliders {
        if !obstacle.overlaps(&body.rect) {
            continue;
        }
        if body.direction.y > 0.0 {
            body.direction.y = 0.0;
            body.rect.set_bottom(obstacle.top());
            body.contacts.ground = GroundContact::Grounded;
        } else if body.direction.y < 0.0 {
            body.rect.set_top(obstacle.bottom());
            body.direction.y = 0.0;
            body.contacts.ceiling = CeilingContact::Touching;
        }
    }

    body.contacts.ground = body.contacts.ground.release(body.direction.y);
    body.contacts.ceiling = body.contacts.ceiling.release(body.direction.y);
}
