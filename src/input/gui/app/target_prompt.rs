use crate::controllers::explorer::InputEvent;
use crate::core::sequence::ZoomTarget;

/// Text fields for the rendered-zoom target shown in the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPrompt {
    pub real: String,
    pub imag: String,
    error: Option<String>,
}

impl Default for TargetPrompt {
    fn default() -> Self {
        Self {
            real: "0".to_string(),
            imag: "0".to_string(),
            error: None,
        }
    }
}

impl TargetPrompt {
    /// Parses the fields into a start event; on failure the message is kept
    /// for display and nothing starts.
    pub fn submit(&mut self) -> Option<InputEvent> {
        match ZoomTarget::parse(&self.real, &self.imag) {
            Ok(target) => {
                self.error = None;
                Some(InputEvent::StartRenderedZoom { target })
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
