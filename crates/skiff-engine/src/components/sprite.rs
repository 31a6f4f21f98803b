/// Identifies which texture atlas a sprite belongs to.
/// Index into the AssetManifest's atlas list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

/// Sprite component — which atlas cell a tile or body is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Which atlas this sprite belongs to.
    pub atlas: AtlasId,
    /// Column in the atlas grid.
    pub col: f32,
    /// Row in the atlas grid.
    pub row: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl SpriteComponent {
    pub fn cell(atlas: AtlasId, col: f32, row: f32) -> Self {
        Self {
            atlas,
            col,
            row,
            alpha: 1.0,
        }
    }

    /// Point the sprite at another cell of the same atlas (animation frames).
    pub fn set_frame(&mut self, (col, row): (f32, f32)) {
        self.col = col;
        self.row = row;
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self::cell(AtlasId(0), 0.0, 0.0)
    }
}
