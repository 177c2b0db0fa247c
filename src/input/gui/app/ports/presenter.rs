use egui::Context as EguiContext;
use winit::window::Window;

use crate::controllers::explorer::RenderParams;
use crate::controllers::ports::FrameCapturePort;
use crate::input::cli::WindowSettings;
use crate::input::gui::errors::GuiError;
use crate::presenters::shader::ShaderPrecision;

/// Draws the fractal and the egui overlay to the window, and captures frames.
pub trait GuiPresenterPort: FrameCapturePort {
    fn new(window: &'static Window, settings: &WindowSettings) -> Result<Self, GuiError>
    where
        Self: Sized;
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        params: &RenderParams,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
    fn precision(&self) -> ShaderPrecision;
}
