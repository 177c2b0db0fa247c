use std::path::PathBuf;

use crate::core::iterations::budget::DEFAULT_MAX_ITERATIONS;

pub const DEFAULT_OUTPUT_DIR: &str = "render";

/// What to do when a rendered-zoom frame cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureFailurePolicy {
    /// End the sequence and return to interactive mode.
    #[default]
    Abort,
    /// Log the failure and keep zooming; the frame is lost.
    Skip,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSettings {
    pub max_iterations: i32,
    pub output_dir: PathBuf,
    pub capture_failure: CaptureFailurePolicy,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            capture_failure: CaptureFailurePolicy::default(),
        }
    }
}
