//! Animation component for sprite frame sequences.
//!
//! Coins, palms, enemies and the player loop through atlas frames; dust
//! effects play once and are removed when their animation stops.

use std::collections::HashMap;

/// Definition of a single animation sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    /// Frame indices as (col, row) pairs in the atlas.
    pub frames: Vec<(f32, f32)>,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether to loop when reaching the end.
    pub looping: bool,
}

impl AnimationDef {
    /// Create a looping horizontal strip animation (consecutive columns, same row).
    pub fn horizontal_strip(row: f32, start_col: f32, frame_count: u32, fps: f32) -> Self {
        let frames: Vec<(f32, f32)> = (0..frame_count)
            .map(|i| (start_col + i as f32, row))
            .collect();
        Self {
            frames,
            frame_duration: 1.0 / fps,
            looping: true,
        }
    }

    /// Create from explicit frame list.
    pub fn from_frames(frames: Vec<(f32, f32)>, fps: f32, looping: bool) -> Self {
        Self {
            frames,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Same frames, played once.
    pub fn once(mut self) -> Self {
        self.looping = false;
        self
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Animation state for a tile, body or effect.
#[derive(Debug, Clone)]
pub struct AnimationComponent {
    /// Named animations available.
    pub animations: HashMap<String, AnimationDef>,
    /// Currently playing animation name.
    pub current: String,
    /// Current frame index.
    pub frame_index: usize,
    /// Time accumulated in current frame.
    pub frame_timer: f32,
    /// Whether animation is playing. Non-looping animations stop themselves.
    pub playing: bool,
}

impl Default for AnimationComponent {
    fn default() -> Self {
        Self {
            animations: HashMap::new(),
            current: String::new(),
            frame_index: 0,
            frame_timer: 0.0,
            playing: true,
        }
    }
}

impl AnimationComponent {
    /// Create with a single default animation.
    pub fn single(name: impl Into<String>, def: AnimationDef) -> Self {
        let name = name.into();
        let mut animations = HashMap::new();
        animations.insert(name.clone(), def);
        Self {
            animations,
            current: name,
            ..Default::default()
        }
    }

    /// Add an animation.
    pub fn add(&mut self, name: impl Into<String>, def: AnimationDef) {
        self.animations.insert(name.into(), def);
    }

    /// Play a named animation from the beginning. Unknown names are ignored.
    pub fn play(&mut self, name: &str) {
        if self.animations.contains_key(name) {
            self.current = name.to_string();
            self.frame_index = 0;
            self.frame_timer = 0.0;
            self.playing = true;
        }
    }

    /// Play animation only if it's different from current.
    pub fn play_if_different(&mut self, name: &str) {
        if self.current != name {
            self.play(name);
        }
    }

    pub fn current_def(&self) -> Option<&AnimationDef> {
        self.animations.get(&self.current)
    }

    /// Get current frame (col, row) for sprite rendering.
    pub fn current_frame(&self) -> Option<(f32, f32)> {
        self.current_def()
            .and_then(|def| def.frames.get(self.frame_index).copied())
    }

    /// A non-looping animation that played its last frame out.
    /// Also true when there is nothing to play.
    pub fn is_finished(&self) -> bool {
        match self.current_def() {
            Some(def) => !def.looping && !self.playing,
            None => true,
        }
    }

    /// Advance animation by dt seconds. Returns true if frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.playing {
            return false;
        }

        let Some(def) = self.animations.get(&self.current) else {
            return false;
        };

        if def.frames.is_empty() {
            self.playing = false;
            return false;
        }

        self.frame_timer += dt;
        let mut frame_changed = false;

        while self.frame_timer >= def.frame_duration {
            self.frame_timer -= def.frame_duration;
            self.frame_index += 1;
            frame_changed = true;

            if self.frame_index >= def.frames.len() {
                if def.looping {
                    self.frame_index = 0;
                } else {
                    self.frame_index = def.frames.len() - 1;
                    self.playing = false;
                    break;
                }
            }
        }

        frame_changed
    }
}
