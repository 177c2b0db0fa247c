pub mod explorer_input;
pub mod gui_app;
pub mod ports;
pub mod target_prompt;
