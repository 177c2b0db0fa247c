use std::time::Duration;

use crate::core::data::Complex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMode {
    Interactive,
    RenderedZoom { frame_index: u64 },
}

/// Read-only snapshot of the numbers shown on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFields {
    pub mode: OverlayMode,
    pub max_iterations: i32,
    pub frame_time: Option<Duration>,
    pub average_fps: Option<f64>,
    /// Cursor position in interactive mode, the fixed target during a rendered zoom.
    pub position: Option<Complex>,
    pub scale: f64,
    pub capture_error: Option<String>,
}

impl OverlayFields {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(7);

        lines.push(match self.mode {
            OverlayMode::Interactive => "MODE: INTERACTIVE".to_string(),
            OverlayMode::RenderedZoom { frame_index } => {
                format!("MODE: RENDERED ZOOM (frame {frame_index})")
            }
        });
        lines.push(format!("MAX_ITERATIONS: {}", self.max_iterations));
        lines.push(match self.frame_time {
            Some(time) => format!("RENDER_TIME: {:.6}", time.as_secs_f64()),
            None => "RENDER_TIME: -".to_string(),
        });
        lines.push(match self.average_fps {
            Some(fps) => format!("FPS: {fps:.1}"),
            None => "FPS: -".to_string(),
        });

        match self.position {
            Some(position) => {
                lines.push(format!("REAL: {:.16}", position.real));
                lines.push(format!("IMAGINARY: {:.16}", position.imag));
            }
            None => {
                lines.push("REAL: -".to_string());
                lines.push("IMAGINARY: -".to_string());
            }
        }

        lines.push(format!("SCALE: {:e}", self.scale));
        lines
    }
}
