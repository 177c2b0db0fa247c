//! Command-line configuration for the explorer binary.

pub mod args;

pub use args::{ExplorerArgs, ExplorerSettings, WindowSettings};
