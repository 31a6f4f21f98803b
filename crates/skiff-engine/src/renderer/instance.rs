use bytemuck::{Pod, Zeroable};

use super::traits::DrawSurface;
use crate::components::layer::{Backdrop, RenderLayer};
use crate::components::sprite::SpriteComponent;
use crate::core::geometry::Rect;

/// Per-instance render data handed to the host renderer.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Left edge in world pixels.
    pub x: f32,
    /// Top edge in world pixels.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Atlas column.
    pub sprite_col: f32,
    /// Atlas row.
    pub atlas_row: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// 1.0 when mirrored horizontally, 0.0 otherwise.
    pub flip_x: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(rect: &Rect, sprite: &SpriteComponent, flip_x: bool) -> Self {
        Self {
            x: rect.left(),
            y: rect.top(),
            width: rect.width(),
            height: rect.height(),
            sprite_col: sprite.col,
            atlas_row: sprite.row,
            alpha: sprite.alpha,
            flip_x: if flip_x { 1.0 } else { 0.0 },
        }
    }
}

/// Contiguous run of instances drawn on one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerBatch {
    pub layer: RenderLayer,
    /// Start index in the instance array.
    pub start: u32,
    /// End index (exclusive).
    pub end: u32,
}

impl LayerBatch {
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Render buffer collecting one frame of draw calls in submission order.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
    /// Consecutive draws on the same layer share a batch.
    pub batches: Vec<LayerBatch>,
    /// Backdrop passes requested this frame, with the shift each one used.
    pub backdrops: Vec<(Backdrop, f32)>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
            batches: Vec::with_capacity(RenderLayer::COUNT),
            backdrops: Vec::with_capacity(3),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.batches.clear();
        self.backdrops.clear();
    }

    pub fn push(&mut self, layer: RenderLayer, instance: RenderInstance) {
        let index = self.instances.len() as u32;
        self.instances.push(instance);
        match self.batches.last_mut() {
            Some(batch) if batch.layer == layer => batch.end = index + 1,
            _ => self.batches.push(LayerBatch {
                layer,
                start: index,
                end: index + 1,
            }),
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instances as a flat float slice, ready for upload.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Layers in the order they were first drawn this frame.
    pub fn layer_order(&self) -> Vec<RenderLayer> {
        let mut order: Vec<RenderLayer> = Vec::with_capacity(self.batches.len());
        for batch in &self.batches {
            if !order.contains(&batch.layer) {
                order.push(batch.layer);
            }
        }
        order
    }

    pub fn instances_on(&self, layer: RenderLayer) -> impl Iterator<Item = &RenderInstance> {
        self.batches
            .iter()
            .filter(move |b| b.layer == layer)
            .flat_map(move |b| &self.instances[b.start as usize..b.end as usize])
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for RenderBuffer {
    fn draw_sprite(&mut self, layer: RenderLayer, rect: &Rect, sprite: &SpriteComponent, flip_x: bool) {
        self.push(layer, RenderInstance::new(rect, sprite, flip_x));
    }

    fn draw_backdrop(&mut self, backdrop: Backdrop, world_shift: f32) {
        self.backdrops.push((backdrop, world_shift));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32) -> Rect {
        Rect::new(x, 0.0, 16.0, 16.0).unwrap()
    }

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), 32);
        assert_eq!(RenderInstance::FLOATS, 8);
    }

    #[test]
    fn consecutive_layers_share_a_batch() {
        let mut buf = RenderBuffer::new();
        let sprite = SpriteComponent::default();
        buf.draw_sprite(RenderLayer::Terrain, &rect(0.0), &sprite, false);
        buf.draw_sprite(RenderLayer::Terrain, &rect(16.0), &sprite, false);
        buf.draw_sprite(RenderLayer::Player, &rect(32.0), &sprite, true);

        assert_eq!(buf.instance_count(), 3);
        assert_eq!(buf.batches.len(), 2);
        assert_eq!(buf.batches[0].len(), 2);
        assert_eq!(buf.batches[1].start, 2);
        assert_eq!(buf.instances[2].flip_x, 1.0);
        assert_eq!(buf.layer_order(), vec![RenderLayer::Terrain, RenderLayer::Player]);
    }

    #[test]
    fn instances_on_layer() {
        let mut buf = RenderBuffer::new();
        let sprite = SpriteComponent::default();
        buf.draw_sprite(RenderLayer::Coins, &rect(0.0), &sprite, false);
        buf.draw_sprite(RenderLayer::Player, &rect(5.0), &sprite, false);
        buf.draw_sprite(RenderLayer::Coins, &rect(10.0), &sprite, false);

        let xs: Vec<f32> = buf.instances_on(RenderLayer::Coins).map(|i| i.x).collect();
        assert_eq!(xs, vec![0.0, 10.0]);
    }

    #[test]
    fn float_view_and_clear() {
        let mut buf = RenderBuffer::new();
        buf.draw_sprite(RenderLayer::Goal, &rect(4.0), &SpriteComponent::default(), false);
        buf.draw_backdrop(Backdrop::Water, -8.0);
        assert_eq!(buf.as_floats().len(), 8);
        assert_eq!(buf.as_floats()[0], 4.0);
        assert_eq!(buf.backdrops, vec![(Backdrop::Water, -8.0)]);

        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert!(buf.batches.is_empty());
        assert!(buf.backdrops.is_empty());
    }
}
