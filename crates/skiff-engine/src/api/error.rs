use thiserror::Error;

use crate::level::layout::LayerKind;

/// Construction-time failures. A built `Level` never fails while running.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("degenerate rectangle {width}x{height} at ({x}, {y}): width and height must be positive")]
    DegenerateRect { x: f32, y: f32, width: f32, height: f32 },
    #[error("unknown tile code {code:?} in layer {layer} at row {row}, column {col}")]
    UnknownTileCode {
        layer: LayerKind,
        code: String,
        row: usize,
        col: usize,
    },
    #[error("player layer has no spawn cell (code \"0\")")]
    MissingPlayerSpawn,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
