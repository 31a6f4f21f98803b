//! Drawing contract between the level and a host renderer.
//!
//! The level never rasterizes anything. Every visible element is handed to a
//! [`DrawSurface`] in back-to-front order, tagged with the [`RenderLayer`] it
//! belongs to. [`RenderBuffer`](super::instance::RenderBuffer) is the
//! in-crate implementation; hosts with their own GPU path implement the
//! trait directly.

use crate::components::layer::{Backdrop, RenderLayer};
use crate::components::sprite::SpriteComponent;
use crate::core::geometry::Rect;

/// Receiver of one frame's draw calls.
pub trait DrawSurface {
    /// Draw `sprite` into `rect` (world pixels, y-down).
    /// `flip_x` mirrors the image horizontally.
    fn draw_sprite(&mut self, layer: RenderLayer, rect: &Rect, sprite: &SpriteComponent, flip_x: bool);

    /// Draw a decorative backdrop pass. Scrolling backdrops (clouds, water)
    /// move by `world_shift` this frame. Surfaces without backdrops ignore it.
    fn draw_backdrop(&mut self, _backdrop: Backdrop, _world_shift: f32) {}
}
