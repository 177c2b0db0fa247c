use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to set up GPU surface: {0}")]
    Surface(#[from] pixels::Error),

    #[error("failed to resize GPU surface: {0}")]
    Resize(#[from] pixels::TextureError),
}
