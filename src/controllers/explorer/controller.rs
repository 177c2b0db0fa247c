use std::path::PathBuf;
use std::time::Duration;

use log::{debug, error, info, warn};

use crate::controllers::explorer::events::InputEvent;
use crate::controllers::explorer::overlay::{OverlayFields, OverlayMode};
use crate::controllers::explorer::render_params::RenderParams;
use crate::controllers::explorer::settings::{CaptureFailurePolicy, ControllerSettings};
use crate::controllers::ports::frame_capture::{CaptureRequest, FrameCapturePort};
use crate::core::data::{Complex, ScreenPoint, Viewport};
use crate::core::iterations::IterationBudget;
use crate::core::sequence::{
    CaptureError, FinishReason, SequenceTick, ZoomSequenceState, ZoomSequencer, ZoomTarget,
};
use crate::core::stats::FrameStats;
use crate::core::view::{PointerState, ViewTransform, scroll_zoom_factor};

/// Owns all explorer state and applies one frame's input and sequencing.
///
/// Per frame the window adapter calls [`Self::apply_events`], then
/// [`Self::advance_frame`], then renders [`Self::render_params`]. Nothing
/// touches the view between the capture inside `advance_frame` and the
/// presentation that follows, so both see the same snapshot.
pub struct ExplorerController {
    view: ViewTransform,
    pointer: PointerState,
    cursor: Option<ScreenPoint>,
    sequencer: ZoomSequencer,
    budget: IterationBudget,
    stats: FrameStats,
    viewport: Viewport,
    settings: ControllerSettings,
    last_capture_error: Option<String>,
}

impl ExplorerController {
    #[must_use]
    pub fn new(settings: ControllerSettings, viewport: Viewport) -> Self {
        Self {
            view: ViewTransform::default(),
            pointer: PointerState::default(),
            cursor: None,
            sequencer: ZoomSequencer::new(),
            budget: IterationBudget::new(settings.max_iterations),
            stats: FrameStats::new(),
            viewport,
            settings,
            last_capture_error: None,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn budget(&self) -> IterationBudget {
        self.budget
    }

    #[must_use]
    pub fn sequence_state(&self) -> ZoomSequenceState {
        self.sequencer.state()
    }

    #[must_use]
    pub fn is_rendering_zoom(&self) -> bool {
        self.sequencer.is_active()
    }

    #[must_use]
    pub fn last_capture_error(&self) -> Option<&str> {
        self.last_capture_error.as_deref()
    }

    /// Fractal position under the cursor, if the cursor has been seen.
    #[must_use]
    pub fn cursor_position(&self) -> Option<Complex> {
        self.cursor
            .and_then(|cursor| self.view.screen_to_fractal(cursor, self.viewport))
    }

    pub fn apply_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.apply_event(event);
        }
    }

    pub fn apply_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved(position) => self.on_pointer_moved(position),
            InputEvent::Scrolled { y_offset } => self.on_scrolled(y_offset),
            InputEvent::PrimaryButton { pressed } => self.pointer.set_primary_down(pressed),
            InputEvent::IncreaseIterations { fine } => self.budget.increase(fine),
            InputEvent::DecreaseIterations { fine } => self.budget.decrease(fine),
            InputEvent::StartRenderedZoom { target } => self.start_rendered_zoom(target),
            InputEvent::CancelRenderedZoom => self.cancel_rendered_zoom(),
            InputEvent::Resized { width, height } => {
                self.viewport = Viewport::new(width, height);
            }
        }
    }

    /// Steps a running rendered zoom and captures the resulting frame.
    ///
    /// While the viewport is empty the sequence is held: no step, no capture,
    /// so frame indices stay contiguous across a minimise. A pending cancel
    /// still ends it.
    pub fn advance_frame(&mut self, capture: &mut dyn FrameCapturePort) -> SequenceTick {
        if self.viewport.is_empty() && !self.sequencer.is_cancel_requested() {
            if let ZoomSequenceState::Active { frame_index, .. } = self.sequencer.state() {
                return SequenceTick::Held { frame_index };
            }
        }

        let tick = self.sequencer.tick(&mut self.view);

        match tick {
            SequenceTick::Idle | SequenceTick::Held { .. } => tick,
            SequenceTick::Stepped { frame_index } => self.capture_frame(frame_index, capture),
            SequenceTick::Finished { reason, frames } => {
                info!(
                    "rendered zoom finished ({reason:?}) after {frames} frames at scale {:e}",
                    self.view.scale()
                );
                self.resume_interactive();
                tick
            }
        }
    }

    pub fn record_frame_time(&mut self, elapsed: Duration) {
        self.stats.record(elapsed);
    }

    #[must_use]
    pub fn render_params(&self) -> RenderParams {
        RenderParams {
            viewport: self.viewport,
            center: self.view.center(),
            scale: self.view.scale(),
            max_iterations: self.budget.max_iterations(),
        }
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayFields {
        let (mode, position) = match self.sequencer.state() {
            ZoomSequenceState::Idle => (OverlayMode::Interactive, self.cursor_position()),
            ZoomSequenceState::Active {
                target,
                frame_index,
            } => (OverlayMode::RenderedZoom { frame_index }, Some(target)),
        };

        OverlayFields {
            mode,
            max_iterations: self.budget.max_iterations(),
            frame_time: self.stats.last_frame_time(),
            average_fps: self.stats.average_fps(),
            position,
            scale: self.view.scale(),
            capture_error: self.last_capture_error.clone(),
        }
    }

    #[must_use]
    pub fn frame_path(&self, frame_index: u64) -> PathBuf {
        self.settings.output_dir.join(format!("{frame_index}.png"))
    }

    fn on_pointer_moved(&mut self, position: ScreenPoint) {
        self.cursor = Some(position);

        if self.sequencer.is_active() {
            return;
        }

        if let Some((dx, dy)) = self.pointer.drag(position) {
            self.view.pan(dx, dy, self.viewport);
        }
    }

    fn on_scrolled(&mut self, y_offset: f64) {
        if self.sequencer.is_active() {
            return;
        }

        let anchor = self.cursor_position().unwrap_or(self.view.center());
        self.view.zoom_towards(anchor, scroll_zoom_factor(y_offset));
    }

    fn start_rendered_zoom(&mut self, target: ZoomTarget) {
        let point = target.resolve(self.cursor_position(), self.view.center());

        if !self.sequencer.start(point, &mut self.view) {
            debug!("rendered zoom already running; ignoring start request");
            return;
        }

        self.last_capture_error = None;
        info!(
            "rendered zoom started at ({}, {}) writing to {}",
            point.real,
            point.imag,
            self.settings.output_dir.display()
        );
    }

    fn cancel_rendered_zoom(&mut self) {
        if self.sequencer.is_active() {
            self.sequencer.request_cancel();
        } else {
            debug!("no rendered zoom to cancel");
        }
    }

    fn capture_frame(&mut self, frame_index: u64, capture: &mut dyn FrameCapturePort) -> SequenceTick {
        let request = CaptureRequest {
            frame_index,
            path: self.frame_path(frame_index),
            params: self.render_params(),
        };

        match capture.capture(&request) {
            Ok(()) => {
                debug!("captured frame {frame_index} to {}", request.path.display());
                SequenceTick::Stepped { frame_index }
            }
            Err(err) => self.on_capture_failed(frame_index, err),
        }
    }

    fn on_capture_failed(&mut self, frame_index: u64, err: CaptureError) -> SequenceTick {
        self.last_capture_error = Some(err.to_string());

        match self.settings.capture_failure {
            CaptureFailurePolicy::Abort => {
                error!("frame {frame_index} capture failed, aborting rendered zoom: {err}");
                let frames = self.sequencer.abort().unwrap_or(frame_index);
                self.resume_interactive();
                SequenceTick::Finished {
                    reason: FinishReason::CaptureFailed,
                    frames,
                }
            }
            CaptureFailurePolicy::Skip => {
                warn!("frame {frame_index} capture failed, skipping: {err}");
                SequenceTick::Stepped { frame_index }
            }
        }
    }

    fn resume_interactive(&mut self) {
        self.pointer.invalidate();
    }
}
