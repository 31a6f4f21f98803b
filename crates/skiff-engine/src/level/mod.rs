//! A running level: owns every group and steps them once per tick.

pub mod layout;
pub mod setup;

use glam::Vec2;

use crate::api::config::LevelConfig;
use crate::api::error::LevelError;
use crate::api::types::{Facing, LevelEvent};
use crate::assets::registry::{AssetSource, SpriteFrames};
use crate::components::dust::{DustEffect, DustKind};
use crate::components::enemy::{reverse_on_constraints, Enemy};
use crate::components::group::TileGroup;
use crate::components::layer::Backdrop;
use crate::components::player::Player;
use crate::core::geometry::Rect;
use crate::core::physics::{resolve_horizontal, resolve_vertical};
use crate::core::scroll::ScrollController;
use crate::input::queue::Controls;
use crate::renderer::traits::DrawSurface;

use self::layout::LayoutSource;
use self::setup::LevelParts;

/// Where jump dust appears relative to the player's feet, facing right.
/// Mirrored in x when facing left.
const JUMP_DUST_OFFSET: Vec2 = Vec2::new(10.0, 5.0);
/// Same for landing dust.
const LAND_DUST_OFFSET: Vec2 = Vec2::new(10.0, 18.0);

pub struct Level {
    terrain: TileGroup,
    grass: TileGroup,
    crates: TileGroup,
    coins: TileGroup,
    fg_palms: TileGroup,
    bg_palms: TileGroup,
    constraints: TileGroup,
    goal: TileGroup,
    enemies: Vec<Enemy>,
    player: Player,
    dust: Option<DustEffect>,
    jump_dust: Option<SpriteFrames>,
    land_dust: Option<SpriteFrames>,
    scroll: ScrollController,
    /// Shift decided at the end of the previous tick, applied this tick.
    world_shift: f32,
    /// Terrain, crates and foreground palms, rebuilt every tick.
    collidables: Vec<Rect>,
    events: Vec<LevelEvent>,
    dt: f32,
}

impl Level {
    pub fn new(
        layout: &dyn LayoutSource,
        assets: &dyn AssetSource,
        config: LevelConfig,
    ) -> Result<Self, LevelError> {
        let LevelParts {
            terrain,
            grass,
            crates,
            coins,
            fg_palms,
            bg_palms,
            constraints,
            goal,
            enemies,
            player,
        } = setup::build(layout, assets, &config)?;

        let collidables = Vec::with_capacity(terrain.len() + crates.len() + fg_palms.len());
        Ok(Self {
            terrain,
            grass,
            crates,
            coins,
            fg_palms,
            bg_palms,
            constraints,
            goal,
            enemies,
            player,
            dust: None,
            jump_dust: assets.sprite(DustKind::Jump.asset()),
            land_dust: assets.sprite(DustKind::Land.asset()),
            scroll: ScrollController::new(
                config.screen_width,
                config.scroll_speed,
                config.player.speed,
            ),
            world_shift: config.initial_world_shift,
            collidables,
            events: Vec::new(),
            dt: config.fixed_dt,
        })
    }

    /// Advance the level by one tick and draw it back to front.
    pub fn run(&mut self, surface: &mut dyn DrawSurface, controls: &Controls) {
        let shift = self.world_shift;
        let dt = self.dt;
        self.events.clear();

        surface.draw_backdrop(Backdrop::Sky, 0.0);
        surface.draw_backdrop(Backdrop::Clouds, shift);

        self.bg_palms.draw(surface);
        self.bg_palms.update(shift, dt);
        self.fg_palms.draw(surface);
        self.fg_palms.update(shift, dt);

        for enemy in &self.enemies {
            enemy.draw(surface);
        }
        self.constraints.update(shift, dt);
        reverse_on_constraints(&mut self.enemies, self.constraints.rects());
        for enemy in &mut self.enemies {
            enemy.update(shift, dt);
        }

        for group in [&mut self.terrain, &mut self.crates, &mut self.grass, &mut self.coins] {
            group.draw(surface);
            group.update(shift, dt);
        }

        surface.draw_backdrop(Backdrop::Water, shift);

        self.step_player(controls, dt);

        if let Some(dust) = self.dust.as_mut() {
            dust.update(shift, dt);
            if dust.is_finished() {
                self.dust = None;
            } else {
                dust.draw(surface);
            }
        }

        let decision = self
            .scroll
            .decide(self.player.rect().center_x(), self.player.body.direction.x);
        if decision.world_shift != self.world_shift {
            log::trace!("world shift {} -> {}", self.world_shift, decision.world_shift);
        }
        self.world_shift = decision.world_shift;
        self.player.body.speed = decision.player_speed;

        self.goal.draw(surface);
        self.goal.update(shift, dt);
        self.player.draw(surface);
    }

    fn step_player(&mut self, controls: &Controls, dt: f32) {
        self.collidables.clear();
        self.collidables.extend(self.terrain.rects().copied());
        self.collidables.extend(self.crates.rects().copied());
        self.collidables.extend(self.fg_palms.rects().copied());

        if let Some(jumped) = self.player.update(controls, dt) {
            self.events.push(jumped);
            let feet = self.player.rect().mid_bottom();
            let at = feet - mirror(JUMP_DUST_OFFSET, self.player.facing);
            self.spawn_dust(DustKind::Jump, at);
        }

        resolve_horizontal(&mut self.player.body, &self.collidables);
        let was_grounded = self.player.body.on_ground();
        resolve_vertical(&mut self.player.body, &self.collidables);

        if !was_grounded && self.player.body.on_ground() {
            let feet = self.player.rect().mid_bottom();
            log::debug!("player landed at ({}, {})", feet.x, feet.y);
            self.events.push(LevelEvent::Landed { at: feet });
            if self.dust.is_none() {
                let at = feet - mirror(LAND_DUST_OFFSET, self.player.facing);
                self.spawn_dust(DustKind::Land, at);
            }
        }
    }

    /// Jump dust replaces whatever occupies the slot.
    fn spawn_dust(&mut self, kind: DustKind, center: Vec2) {
        let frames = match kind {
            DustKind::Jump => self.jump_dust.clone(),
            DustKind::Land => self.land_dust.clone(),
        };
        match DustEffect::with_frames(kind, center, frames) {
            Ok(dust) => self.dust = Some(dust),
            Err(err) => log::warn!("dust not spawned: {err}"),
        }
    }

    /// Events raised during the last tick.
    pub fn events(&self) -> &[LevelEvent] {
        &self.events
    }

    /// Shift the next tick will apply.
    pub fn world_shift(&self) -> f32 {
        self.world_shift
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn dust(&self) -> Option<&DustEffect> {
        self.dust.as_ref()
    }

    pub fn terrain(&self) -> &TileGroup {
        &self.terrain
    }

    pub fn coins(&self) -> &TileGroup {
        &self.coins
    }

    pub fn goal(&self) -> &TileGroup {
        &self.goal
    }
}

fn mirror(offset: Vec2, facing: Facing) -> Vec2 {
    if facing.is_right() {
        offset
    } else {
        Vec2::new(-offset.x, offset.y)
    }
}
