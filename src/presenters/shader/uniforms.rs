use bytemuck::{Pod, Zeroable};

use crate::controllers::explorer::RenderParams;

/// Which fragment shader the adapter could build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderPrecision {
    Single,
    Double,
}

impl ShaderPrecision {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "f32",
            Self::Double => "f64",
        }
    }
}

/// Uniform block for `mandelbrot_f32.wgsl`. Field order and padding mirror the
/// WGSL struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SingleUniforms {
    pub resolution: [f32; 2],
    pub center: [f32; 2],
    pub scale: f32,
    pub max_iterations: i32,
    pub _padding: [u32; 2],
}

/// Uniform block for `mandelbrot_f64.wgsl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DoubleUniforms {
    pub center: [f64; 2],
    pub scale: f64,
    pub resolution: [f32; 2],
    pub max_iterations: i32,
    pub _padding: [u32; 3],
}

impl From<&RenderParams> for SingleUniforms {
    fn from(params: &RenderParams) -> Self {
        Self {
            resolution: [
                params.viewport.width() as f32,
                params.viewport.height() as f32,
            ],
            center: [params.center.real as f32, params.center.imag as f32],
            scale: params.scale as f32,
            max_iterations: params.max_iterations,
            _padding: [0; 2],
        }
    }
}

impl From<&RenderParams> for DoubleUniforms {
    fn from(params: &RenderParams) -> Self {
        Self {
            center: [params.center.real, params.center.imag],
            scale: params.scale,
            resolution: [
                params.viewport.width() as f32,
                params.viewport.height() as f32,
            ],
            max_iterations: params.max_iterations,
            _padding: [0; 3],
        }
    }
}

/// Serializes the uniform block for the given precision.
#[must_use]
pub fn uniform_bytes(params: &RenderParams, precision: ShaderPrecision) -> Vec<u8> {
    match precision {
        ShaderPrecision::Single => bytemuck::bytes_of(&SingleUniforms::from(params)).to_vec(),
        ShaderPrecision::Double => bytemuck::bytes_of(&DoubleUniforms::from(params)).to_vec(),
    }
}

#[must_use]
pub fn uniform_size(precision: ShaderPrecision) -> u64 {
    match precision {
        ShaderPrecision::Single => std::mem::size_of::<SingleUniforms>() as u64,
        ShaderPrecision::Double => std::mem::size_of::<DoubleUniforms>() as u64,
    }
}
