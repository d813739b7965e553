//! Rendering module
//!
//! Stars are painted through the `DrawSurface` trait; the browser build backs
//! it with a 2D canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;
pub mod shapes;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCommand, RecordingSurface};
pub use surface::{DrawSurface, Rgba};
