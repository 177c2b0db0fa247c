use crate::core::data::ScreenPoint;
use crate::core::sequence::ZoomTarget;

/// Input gathered by the window adapter, applied in order at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved(ScreenPoint),
    /// Vertical wheel or trackpad offset; positive is away from the user.
    Scrolled { y_offset: f64 },
    PrimaryButton { pressed: bool },
    IncreaseIterations { fine: bool },
    DecreaseIterations { fine: bool },
    StartRenderedZoom { target: ZoomTarget },
    CancelRenderedZoom,
    Resized { width: u32, height: u32 },
}
