use glam::Vec2;

use crate::api::config::PlayerConfig;
use crate::api::error::LevelError;
use crate::api::types::{Facing, LevelEvent};
use crate::assets::registry::AssetSource;
use crate::components::animation::{AnimationComponent, AnimationDef};
use crate::components::layer::RenderLayer;
use crate::components::sprite::SpriteComponent;
use crate::core::geometry::Rect;
use crate::core::physics::KineticBody;
use crate::input::queue::Controls;
use crate::renderer::traits::DrawSurface;

/// What the player is doing, derived from its velocity each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
}

impl PlayerStatus {
    pub const ALL: [PlayerStatus; 4] = [
        PlayerStatus::Idle,
        PlayerStatus::Run,
        PlayerStatus::Jump,
        PlayerStatus::Fall,
    ];

    pub fn from_direction(direction: Vec2) -> Self {
        if direction.y < 0.0 {
            PlayerStatus::Jump
        } else if direction.y > 1.0 {
            PlayerStatus::Fall
        } else if direction.x != 0.0 {
            PlayerStatus::Run
        } else {
            PlayerStatus::Idle
        }
    }

    pub fn animation_name(self) -> &'static str {
        match self {
            PlayerStatus::Idle => "idle",
            PlayerStatus::Run => "run",
            PlayerStatus::Jump => "jump",
            PlayerStatus::Fall => "fall",
        }
    }
}

/// The player: a kinetic body driven by controls.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: KineticBody,
    pub facing: Facing,
    pub status: PlayerStatus,
    /// Vertical velocity set when a jump starts (negative is up).
    pub jump_speed: f32,
    pub sprite: Option<SpriteComponent>,
    pub animation: AnimationComponent,
}

impl Player {
    /// Create the player with its top-left corner at `spawn`.
    ///
    /// The collision box comes from the `player_idle` sprite when the asset
    /// source has one, otherwise from `config.size`.
    pub fn spawn(spawn: Vec2, config: &PlayerConfig, assets: &dyn AssetSource) -> Result<Self, LevelError> {
        let mut animation = AnimationComponent::default();
        let mut sprite = None;
        let mut size = config.size;

        for status in PlayerStatus::ALL {
            let name = status.animation_name();
            let Some(frames) = assets.sprite(&format!("player_{name}")) else {
                continue;
            };
            if status == PlayerStatus::Idle {
                size = frames.size;
            }
            if sprite.is_none() {
                sprite = Some(frames.sprite.clone());
            }
            let def = frames.animation.unwrap_or_else(|| {
                AnimationDef::from_frames(vec![(frames.sprite.col, frames.sprite.row)], 1.0, true)
            });
            animation.add(name, def);
        }
        animation.play(PlayerStatus::Idle.animation_name());

        let rect = Rect::from_top_left(spawn, size)?;
        let body = KineticBody::new(rect, config.speed, config.gravity)
            .with_max_fall_speed(config.max_fall_speed);

        Ok(Self {
            body,
            facing: Facing::Right,
            status: PlayerStatus::Idle,
            jump_speed: config.jump_speed,
            sprite,
            animation,
        })
    }

    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    /// Read controls, maybe start a jump, and refresh status and animation.
    /// Horizontal movement itself happens in the resolver.
    pub fn update(&mut self, controls: &Controls, dt: f32) -> Option<LevelEvent> {
        let jumped = self.read_controls(controls);
        self.status = PlayerStatus::from_direction(self.body.direction);
        self.animate(dt);
        jumped
    }

    fn read_controls(&mut self, controls: &Controls) -> Option<LevelEvent> {
        if controls.right {
            self.body.direction.x = 1.0;
            self.facing = Facing::Right;
        } else if controls.left {
            self.body.direction.x = -1.0;
            self.facing = Facing::Left;
        } else {
            self.body.direction.x = 0.0;
        }

        if controls.jump && self.body.on_ground() {
            self.body.direction.y = self.jump_speed;
            let at = self.body.rect.mid_bottom();
            log::debug!("player jumped at ({}, {})", at.x, at.y);
            return Some(LevelEvent::Jumped { at });
        }
        None
    }

    fn animate(&mut self, dt: f32) {
        self.animation.play_if_different(self.status.animation_name());
        self.animation.tick(dt);
        if let (Some(frame), Some(sprite)) = (self.animation.current_frame(), self.sprite.as_mut()) {
            sprite.set_frame(frame);
        }
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        if let Some(sprite) = &self.sprite {
            surface.draw_sprite(RenderLayer::Player, &self.body.rect, sprite, self.facing.flip_x());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::registry::SpriteRegistry;
    use crate::core::contact::GroundContact;

    const DT: f32 = 1.0 / 60.0;

    fn player() -> Player {
        Player::spawn(Vec2::ZERO, &PlayerConfig::default(), &SpriteRegistry::new()).unwrap()
    }

    #[test]
    fn spawns_with_config_size() {
        let p = player();
        assert_eq!(p.rect().size(), PlayerConfig::default().size);
        assert_eq!(p.rect().top_left(), Vec2::ZERO);
        assert_eq!(p.body.speed, 8.0);
    }

    #[test]
    fn controls_set_direction_and_facing() {
        let mut p = player();
        p.update(&Controls { left: true, ..Default::default() }, DT);
        assert_eq!(p.body.direction.x, -1.0);
        assert_eq!(p.facing, Facing::Left);
        assert_eq!(p.status, PlayerStatus::Run);

        p.update(&Controls::default(), DT);
        assert_eq!(p.body.direction.x, 0.0);
        assert_eq!(p.facing, Facing::Left);
        assert_eq!(p.status, PlayerStatus::Idle);
    }

    #[test]
    fn update_does_not_move_body() {
        let mut p = player();
        p.update(&Controls { right: true, ..Default::default() }, DT);
        assert_eq!(p.rect().top_left(), Vec2::ZERO);
    }

    #[test]
    fn jump_requires_ground() {
        let mut p = player();
        let jump = Controls { jump: true, ..Default::default() };

        assert!(p.update(&jump, DT).is_none());
        assert_eq!(p.body.direction.y, 0.0);

        p.body.contacts.ground = GroundContact::Grounded;
        let event = p.update(&jump, DT);
        assert_eq!(p.body.direction.y, -16.0);
        assert_eq!(p.status, PlayerStatus::Jump);
        assert_eq!(event, Some(LevelEvent::Jumped { at: p.rect().mid_bottom() }));
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(PlayerStatus::from_direction(Vec2::new(0.0, 0.8)), PlayerStatus::Idle);
        assert_eq!(PlayerStatus::from_direction(Vec2::new(1.0, 1.0)), PlayerStatus::Run);
        assert_eq!(PlayerStatus::from_direction(Vec2::new(0.0, 1.6)), PlayerStatus::Fall);
        assert_eq!(PlayerStatus::from_direction(Vec2::new(1.0, -3.0)), PlayerStatus::Jump);
    }

    #[test]
    fn idle_sprite_sets_collision_box() {
        let json = r#"{
            "atlases": [ { "name": "character", "cols": 8, "rows": 4, "path": "c.png",
                           "cell_width": 64, "cell_height": 64 } ],
            "sprites": {
                "player_idle": { "atlas": 0, "col": 0, "row": 0, "width": 38, "height": 58, "frames": 5 },
                "player_run": { "atlas": 0, "col": 0, "row": 1, "width": 44, "height": 58, "frames": 6 }
            }
        }"#;
        let manifest = crate::assets::manifest::AssetManifest::from_json(json).unwrap();
        let reg = SpriteRegistry::from_manifest(&manifest);
        let mut p = Player::spawn(Vec2::ZERO, &PlayerConfig::default(), &reg).unwrap();
        assert_eq!(p.rect().size(), Vec2::new(38.0, 58.0));

        p.update(&Controls { right: true, ..Default::default() }, DT);
        assert_eq!(p.animation.current, "run");
        assert_eq!(p.sprite.as_ref().unwrap().row, 1.0);
    }
}
