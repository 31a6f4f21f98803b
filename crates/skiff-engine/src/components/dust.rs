use glam::Vec2;

use crate::api::error::LevelError;
use crate::assets::registry::{AssetSource, SpriteFrames};
use crate::components::animation::{AnimationComponent, AnimationDef};
use crate::components::layer::RenderLayer;
use crate::components::sprite::SpriteComponent;
use crate::core::geometry::Rect;
use crate::renderer::traits::DrawSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DustKind {
    Jump,
    Land,
}

impl DustKind {
    pub fn asset(self) -> &'static str {
        match self {
            DustKind::Jump => "dust_jump",
            DustKind::Land => "dust_land",
        }
    }
}

/// A one-shot dust puff. Lives until its animation has played once.
#[derive(Debug, Clone)]
pub struct DustEffect {
    pub kind: DustKind,
    pub rect: Rect,
    pub sprite: Option<SpriteComponent>,
    pub animation: AnimationComponent,
}

impl DustEffect {
    const FALLBACK_SIZE: Vec2 = Vec2::new(48.0, 16.0);
    const FALLBACK_FRAMES: u32 = 6;
    const FALLBACK_FPS: f32 = 30.0;

    /// Spawn a puff centered on `center`. Without an asset the puff is
    /// invisible but still occupies the dust slot for its usual lifetime.
    pub fn spawn(kind: DustKind, center: Vec2, assets: &dyn AssetSource) -> Result<Self, LevelError> {
        Self::with_frames(kind, center, assets.sprite(kind.asset()))
    }

    /// Spawn from frames looked up ahead of time.
    pub fn with_frames(kind: DustKind, center: Vec2, frames: Option<SpriteFrames>) -> Result<Self, LevelError> {
        let size = frames.as_ref().map_or(Self::FALLBACK_SIZE, |f| f.size);
        let rect = Rect::from_top_left(center - size / 2.0, size)?;

        let (sprite, def) = match frames {
            Some(f) => {
                let def = f.animation.unwrap_or_else(|| {
                    AnimationDef::from_frames(vec![(f.sprite.col, f.sprite.row)], Self::FALLBACK_FPS, false)
                });
                (Some(f.sprite), def)
            }
            None => (
                None,
                AnimationDef::horizontal_strip(0.0, 0.0, Self::FALLBACK_FRAMES, Self::FALLBACK_FPS),
            ),
        };

        Ok(Self {
            kind,
            rect,
            sprite,
            animation: AnimationComponent::single("puff", def.once()),
        })
    }

    pub fn update(&mut self, world_shift: f32, dt: f32) {
        self.animation.tick(dt);
        if let (Some(frame), Some(sprite)) = (self.animation.current_frame(), self.sprite.as_mut()) {
            sprite.set_frame(frame);
        }
        self.rect.shift_x(world_shift);
    }

    pub fn is_finished(&self) -> bool {
        self.animation.is_finished()
    }

    /// Dust is never mirrored; facing only moves where it spawns.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        if let Some(sprite) = &self.sprite {
            surface.draw_sprite(RenderLayer::Dust, &self.rect, sprite, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::registry::SpriteRegistry;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn spawns_centered() {
        let dust = DustEffect::spawn(DustKind::Land, Vec2::new(100.0, 50.0), &SpriteRegistry::new())
            .unwrap();
        assert_eq!(dust.rect.center(), Vec2::new(100.0, 50.0));
        assert!(dust.sprite.is_none());
    }

    #[test]
    fn finishes_after_one_play() {
        let mut dust = DustEffect::spawn(DustKind::Jump, Vec2::ZERO, &SpriteRegistry::new()).unwrap();
        let mut ticks = 0;
        while !dust.is_finished() {
            dust.update(0.0, DT);
            ticks += 1;
            assert!(ticks < 60, "dust never finished");
        }
        // 6 frames at 30 fps: two ticks per frame.
        assert!(ticks >= 10);
    }

    #[test]
    fn moves_with_world() {
        let mut dust = DustEffect::spawn(DustKind::Jump, Vec2::new(50.0, 0.0), &SpriteRegistry::new())
            .unwrap();
        let before = dust.rect.left();
        dust.update(-8.0, DT);
        assert_eq!(dust.rect.left(), before - 8.0);
    }
}
