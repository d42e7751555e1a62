//! Rendering module
//!
//! The particle field draws through the `Painter` trait: a 2D canvas
//! context on the web, a command recorder in tests and the native demo.

pub mod painter;

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

pub use painter::{DrawCommand, FrameRecorder, Painter};

#[cfg(target_arch = "wasm32")]
pub use canvas2d::CanvasPainter;
