//! Presentation
//!
//! `scene` turns the world into draw commands; `canvas` (wasm only) replays
//! them on a 2D canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{DrawCommand, Scene};
