use winit::window::Window;

use crate::input::cli::WindowSettings;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, settings: &WindowSettings) -> Result<T, GuiError>;
}
