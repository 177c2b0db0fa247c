pub mod errors;
pub mod target;
pub mod zoom_sequencer;

pub use errors::{CaptureError, TargetParseError};
pub use target::ZoomTarget;
pub use zoom_sequencer::{
    FinishReason, MIN_RENDERED_SCALE, RENDERED_ZOOM_FACTOR, SequenceTick, ZoomSequenceState,
    ZoomSequencer,
};
