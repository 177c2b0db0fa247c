//! Input adapters: command-line settings and, with the `gui` feature, the
//! window that turns pointer, wheel and key events into explorer input.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
