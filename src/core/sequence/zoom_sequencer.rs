use crate::core::data::Complex;
use crate::core::view::ViewTransform;

/// Per-frame zoom applied while a rendered zoom is running.
pub const RENDERED_ZOOM_FACTOR: f64 = 0.99;

/// The sequence ends once the scale falls below this; beyond it `f64`
/// cannot resolve neighbouring pixels around a unit-magnitude center.
pub const MIN_RENDERED_SCALE: f64 = 2e-16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomSequenceState {
    Idle,
    Active { target: Complex, frame_index: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Cancelled,
    ScaleExhausted,
    CaptureFailed,
}

/// Outcome of one display frame's worth of sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceTick {
    /// Interactive mode; nothing happened.
    Idle,
    /// The view was zoomed; the frame tagged `frame_index` should be captured.
    Stepped { frame_index: u64 },
    /// Active, but there was nothing to render (minimised window); the view
    /// and `frame_index` are untouched.
    Held { frame_index: u64 },
    /// The sequence ended this frame without stepping.
    Finished { reason: FinishReason, frames: u64 },
}

/// Drives the automated "rendered zoom".
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomSequencer {
    state: ZoomSequenceState,
    cancel_requested: bool,
}

impl Default for ZoomSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ZoomSequenceState::Idle,
            cancel_requested: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> ZoomSequenceState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, ZoomSequenceState::Active { .. })
    }

    #[must_use]
    pub fn target(&self) -> Option<Complex> {
        match self.state {
            ZoomSequenceState::Active { target, .. } => Some(target),
            ZoomSequenceState::Idle => None,
        }
    }

    /// Enters `Active`, moving the view to `target` at unit scale.
    ///
    /// Returns `false` and changes nothing if a sequence is already running.
    pub fn start(&mut self, target: Complex, view: &mut ViewTransform) -> bool {
        if self.is_active() {
            return false;
        }

        view.reset_to(target);
        self.state = ZoomSequenceState::Active {
            target,
            frame_index: 0,
        };
        self.cancel_requested = false;
        true
    }

    #[must_use]
    pub fn is_cancel_requested(&self) -> bool {
        self.cancel_requested
    }

    /// Asks the running sequence to stop at the next tick.
    pub fn request_cancel(&mut self) {
        if self.is_active() {
            self.cancel_requested = true;
        }
    }

    /// Stops immediately, returning the number of frames stepped so far.
    pub fn abort(&mut self) -> Option<u64> {
        let frames = match self.state {
            ZoomSequenceState::Active { frame_index, .. } => Some(frame_index),
            ZoomSequenceState::Idle => None,
        };

        self.state = ZoomSequenceState::Idle;
        self.cancel_requested = false;
        frames
    }

    /// Runs once per display frame.
    ///
    /// Termination is checked before stepping: cancellation first, then the
    /// scale threshold.
    pub fn tick(&mut self, view: &mut ViewTransform) -> SequenceTick {
        let ZoomSequenceState::Active {
            target,
            frame_index,
        } = self.state
        else {
            return SequenceTick::Idle;
        };

        let reason = if self.cancel_requested {
            Some(FinishReason::Cancelled)
        } else if view.scale() < MIN_RENDERED_SCALE {
            Some(FinishReason::ScaleExhausted)
        } else {
            None
        };

        if let Some(reason) = reason {
            self.abort();
            return SequenceTick::Finished {
                reason,
                frames: frame_index,
            };
        }

        view.zoom_towards(target, RENDERED_ZOOM_FACTOR);
        self.state = ZoomSequenceState::Active {
            target,
            frame_index: frame_index + 1,
        };

        SequenceTick::Stepped { frame_index }
    }
}
