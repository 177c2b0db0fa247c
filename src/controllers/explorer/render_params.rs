use crate::core::data::{Complex, Viewport};

/// Everything the fragment shader needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub viewport: Viewport,
    pub center: Complex,
    pub scale: f64,
    pub max_iterations: i32,
}
