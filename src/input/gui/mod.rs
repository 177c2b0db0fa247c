//! Windowed front end: winit for the window and input, pixels for the wgpu
//! surface, egui for the overlay and target prompt.

pub mod app;
pub mod commands;
pub mod errors;

pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
