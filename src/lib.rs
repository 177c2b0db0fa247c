mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use controllers::explorer::{
    CaptureFailurePolicy, ControllerSettings, ExplorerController, InputEvent, OverlayFields,
    OverlayMode, RenderParams,
};
pub use controllers::ports::{CaptureRequest, FrameCapturePort};
pub use core::data::{Complex, ScreenPoint, Viewport};
pub use core::iterations::IterationBudget;
pub use core::sequence::{
    CaptureError, FinishReason, MIN_RENDERED_SCALE, RENDERED_ZOOM_FACTOR, SequenceTick,
    TargetParseError, ZoomSequenceState, ZoomSequencer, ZoomTarget,
};
pub use core::stats::FrameStats;
pub use core::view::{PointerState, ViewState, ViewTransform, scroll_zoom_factor};
pub use input::cli::{ExplorerArgs, ExplorerSettings, WindowSettings};
pub use presenters::shader::ShaderPrecision;
pub use storage::write_png;

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
#[cfg(feature = "gui")]
pub use presenters::pixels::PixelsPresenterFactory;
