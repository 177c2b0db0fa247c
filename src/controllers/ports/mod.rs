pub mod frame_capture;

pub use frame_capture::{CaptureRequest, FrameCapturePort};
