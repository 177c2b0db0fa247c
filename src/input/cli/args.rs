use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::controllers::explorer::settings::{
    CaptureFailurePolicy, ControllerSettings, DEFAULT_OUTPUT_DIR,
};
use crate::core::iterations::budget::DEFAULT_MAX_ITERATIONS;

/// Real-time GPU Mandelbrot explorer.
///
/// Drag with the left button to pan, scroll to zoom, Up/Down to change the
/// iteration limit (hold Shift for steps of one), R to start a rendered zoom
/// towards the target entered in the overlay and Escape to cancel it.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "explorer", version, about)]
pub struct ExplorerArgs {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Initial iteration limit
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS, value_parser = clap::value_parser!(i32).range(1..))]
    pub max_iterations: i32,

    /// Directory that receives rendered-zoom frames as <index>.png
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// What to do when a rendered-zoom frame cannot be written
    #[arg(long, value_enum, default_value_t = CaptureFailureArg::Abort)]
    pub on_capture_error: CaptureFailureArg,

    /// Present frames without waiting for vertical sync
    #[arg(long)]
    pub no_vsync: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureFailureArg {
    Abort,
    Skip,
}

impl From<CaptureFailureArg> for CaptureFailurePolicy {
    fn from(arg: CaptureFailureArg) -> Self {
        match arg {
            CaptureFailureArg::Abort => Self::Abort,
            CaptureFailureArg::Skip => Self::Skip,
        }
    }
}

/// Window-level settings for the GUI adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSettings {
    pub window: WindowSettings,
    pub controller: ControllerSettings,
}

impl From<ExplorerArgs> for ExplorerSettings {
    fn from(args: ExplorerArgs) -> Self {
        Self {
            window: WindowSettings {
                title: "Mandelbrot Explorer".to_string(),
                width: args.width,
                height: args.height,
                vsync: !args.no_vsync,
            },
            controller: ControllerSettings {
                max_iterations: args.max_iterations,
                output_dir: args.output_dir,
                capture_failure: args.on_capture_error.into(),
            },
        }
    }
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        ExplorerArgs::parse_from(["explorer"]).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        ExplorerArgs::command().debug_assert();
    }

    #[test]
    fn defaults_match_original_window() {
        let settings = ExplorerSettings::default();

        assert_eq!(settings.window.width, 640);
        assert_eq!(settings.window.height, 480);
        assert!(settings.window.vsync);
        assert_eq!(settings.controller.max_iterations, 64);
        assert_eq!(settings.controller.output_dir, PathBuf::from("render"));
        assert_eq!(settings.controller.capture_failure, CaptureFailurePolicy::Abort);
    }

    #[test]
    fn flags_override_defaults() {
        let args = ExplorerArgs::try_parse_from([
            "explorer",
            "--width",
            "1920",
            "--height",
            "1080",
            "--max-iterations",
            "500",
            "--output-dir",
            "frames/dive",
            "--on-capture-error",
            "skip",
            "--no-vsync",
        ])
        .unwrap();
        let settings = ExplorerSettings::from(args);

        assert_eq!(settings.window.width, 1920);
        assert_eq!(settings.window.height, 1080);
        assert!(!settings.window.vsync);
        assert_eq!(settings.controller.max_iterations, 500);
        assert_eq!(settings.controller.output_dir, PathBuf::from("frames/dive"));
        assert_eq!(settings.controller.capture_failure, CaptureFailurePolicy::Skip);
    }

    #[test]
    fn rejects_zero_iterations_and_sizes() {
        assert!(ExplorerArgs::try_parse_from(["explorer", "--max-iterations", "0"]).is_err());
        assert!(ExplorerArgs::try_parse_from(["explorer", "--width", "0"]).is_err());
        assert!(ExplorerArgs::try_parse_from(["explorer", "--height", "0"]).is_err());
    }

    #[test]
    fn rejects_unknown_capture_policy() {
        assert!(ExplorerArgs::try_parse_from(["explorer", "--on-capture-error", "retry"]).is_err());
    }
}
