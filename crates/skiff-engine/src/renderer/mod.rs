pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use instance::{LayerBatch, RenderBuffer, RenderInstance};
pub use traits::DrawSurface;
