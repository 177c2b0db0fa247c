//! Frame-by-frame application layer for the explorer.
//!
//! The window adapter queues [`InputEvent`]s as they arrive and hands them to
//! the [`ExplorerController`] once per frame. The controller owns the view,
//! pointer, iteration budget and rendered-zoom sequencer, and talks to the
//! outside world through:
//! - [`RenderParams`]: what the shader should draw this frame
//! - [`OverlayFields`]: the numbers shown on screen
//! - [`FrameCapturePort`](crate::controllers::ports::FrameCapturePort): where rendered-zoom frames go

mod controller;
pub mod events;
pub mod overlay;
pub mod render_params;
pub mod settings;

pub use controller::ExplorerController;
pub use events::InputEvent;
pub use overlay::{OverlayFields, OverlayMode};
pub use render_params::RenderParams;
pub use settings::{CaptureFailurePolicy, ControllerSettings};
