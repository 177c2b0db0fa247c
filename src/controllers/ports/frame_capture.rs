use std::path::PathBuf;

use crate::controllers::explorer::render_params::RenderParams;
use crate::core::sequence::CaptureError;

/// One frame of a rendered zoom to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRequest {
    pub frame_index: u64,
    pub path: PathBuf,
    /// The exact parameters presented for this frame.
    pub params: RenderParams,
}

pub trait FrameCapturePort {
    fn capture(&mut self, request: &CaptureRequest) -> Result<(), CaptureError>;
}
