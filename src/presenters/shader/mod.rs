//! Fragment-shader rendering of the Mandelbrot set.
//!
//! The uniform layouts and row-padding helpers are plain data and always
//! compiled; the wgpu pipeline and offscreen readback need the `gui` feature.

#[cfg(feature = "gui")]
pub mod pipeline;
#[cfg(feature = "gui")]
pub mod readback;
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub mod rows;
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub mod uniforms;

#[cfg(feature = "gui")]
pub use pipeline::MandelbrotPipeline;
#[cfg(feature = "gui")]
pub use readback::FrameReadback;
pub use uniforms::ShaderPrecision;
