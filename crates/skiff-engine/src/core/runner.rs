use crate::api::config::LevelConfig;
use crate::api::error::LevelError;
use crate::api::types::LevelEvent;
use crate::assets::registry::AssetSource;
use crate::core::time::FixedTimestep;
use crate::input::queue::{Controls, InputEvent, InputQueue};
use crate::level::layout::LayoutSource;
use crate::level::Level;
use crate::renderer::instance::RenderBuffer;

/// Drives a [`Level`] from a host loop with variable frame times.
///
/// The host pushes input events as they arrive and calls [`tick`](Self::tick)
/// once per displayed frame. The level runs zero or more fixed ticks; the
/// render buffer holds the draw calls of the last one.
pub struct LevelRunner {
    level: Level,
    input: InputQueue,
    controls: Controls,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    /// Events from every tick run during the last frame.
    events: Vec<LevelEvent>,
    ticks: u64,
}

impl LevelRunner {
    pub fn new(level: Level, config: &LevelConfig) -> Self {
        Self {
            level,
            input: InputQueue::new(),
            controls: Controls::default(),
            render_buffer: RenderBuffer::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            events: Vec::new(),
            ticks: 0,
        }
    }

    /// Build the level and wrap it in a runner.
    pub fn load(
        layout: &dyn LayoutSource,
        assets: &dyn AssetSource,
        config: LevelConfig,
    ) -> Result<Self, LevelError> {
        let timestep_config = config.clone();
        let level = Level::new(layout, assets, config)?;
        Ok(Self::new(level, &timestep_config))
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame. Returns the number of level ticks executed.
    pub fn tick(&mut self, frame_dt: f32) -> u32 {
        self.events.clear();

        for event in self.input.drain() {
            self.controls.apply(&event);
        }

        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.render_buffer.clear();
            self.level.run(&mut self.render_buffer, &self.controls);
            self.events.extend_from_slice(self.level.events());
            self.ticks += 1;
        }
        steps
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn events(&self) -> &[LevelEvent] {
        &self.events
    }

    /// Total level ticks since the runner was created.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::registry::SpriteRegistry;
    use crate::input::queue::keys;
    use crate::level::layout::{LayerKind, LevelData};

    const DT: f32 = 1.0 / 60.0;

    fn runner() -> LevelRunner {
        let mut data = LevelData::default();
        data.set(LayerKind::Player, 0, 8, "0");
        for col in 0..16 {
            data.set(LayerKind::Terrain, 1, col, "0");
        }
        LevelRunner::load(&data, &SpriteRegistry::new(), LevelConfig::default()).unwrap()
    }

    #[test]
    fn runs_whole_ticks_only() {
        let mut runner = runner();
        assert_eq!(runner.tick(DT * 0.5), 0);
        assert_eq!(runner.tick(DT * 0.6), 1);
        assert_eq!(runner.tick(DT * 2.0), 2);
        assert_eq!(runner.tick_count(), 3);
    }

    #[test]
    fn first_tick_reports_landing() {
        let mut runner = runner();
        runner.tick(DT);
        assert!(matches!(runner.events(), [LevelEvent::Landed { .. }]));
        runner.tick(DT);
        assert!(runner.events().is_empty());
    }

    #[test]
    fn input_events_drive_the_player() {
        let mut runner = runner();
        runner.tick(DT);
        let start = runner.level().player().rect().left();

        runner.push_input(InputEvent::KeyDown { key_code: keys::RIGHT });
        runner.tick(DT);
        assert!(runner.controls().right);
        assert_eq!(runner.level().player().rect().left(), start + 8.0);

        runner.push_input(InputEvent::KeyUp { key_code: keys::RIGHT });
        runner.tick(DT);
        assert_eq!(runner.level().player().rect().left(), start + 8.0);
    }

    #[test]
    fn held_jump_jumps_once_per_landing() {
        let mut runner = runner();
        runner.tick(DT);
        runner.push_input(InputEvent::KeyDown { key_code: keys::SPACE });
        runner.tick(DT);
        assert!(matches!(runner.events(), [LevelEvent::Jumped { .. }]));
        runner.tick(DT);
        assert!(runner.events().is_empty());
    }
}
