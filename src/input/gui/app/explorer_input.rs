use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::controllers::explorer::InputEvent;
use crate::core::data::ScreenPoint;

/// Trackpads report pixel deltas; this many pixels count as one wheel line.
pub const PIXELS_PER_LINE: f64 = 50.0;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Input(InputEvent),
    /// Start a rendered zoom towards whatever the target prompt currently holds.
    StartRenderedZoomFromPrompt,
}

/// Translates winit input into explorer events. Tracks the Shift modifier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerInputState {
    left_shift_held: bool,
    right_shift_held: bool,
}

impl ExplorerInputState {
    /// Keyboard shortcuts are ignored while a text field has focus.
    pub fn handle_key_event(
        &mut self,
        key_code: KeyCode,
        state: ElementState,
        text_editing: bool,
    ) -> Option<KeyAction> {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::ShiftLeft => self.left_shift_held = pressed,
            KeyCode::ShiftRight => self.right_shift_held = pressed,
            _ => {}
        }

        if !pressed || text_editing {
            return None;
        }

        let fine = self.shift_held();
        match key_code {
            KeyCode::ArrowUp => Some(KeyAction::Input(InputEvent::IncreaseIterations { fine })),
            KeyCode::ArrowDown => Some(KeyAction::Input(InputEvent::DecreaseIterations { fine })),
            KeyCode::KeyR => Some(KeyAction::StartRenderedZoomFromPrompt),
            KeyCode::Escape => Some(KeyAction::Input(InputEvent::CancelRenderedZoom)),
            _ => None,
        }
    }

    #[must_use]
    pub fn shift_held(&self) -> bool {
        self.left_shift_held || self.right_shift_held
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[must_use]
pub fn pointer_moved(position: PhysicalPosition<f64>) -> InputEvent {
    InputEvent::PointerMoved(ScreenPoint::new(position.x, position.y))
}

#[must_use]
pub fn mouse_button(button: MouseButton, state: ElementState) -> Option<InputEvent> {
    match button {
        MouseButton::Left => Some(InputEvent::PrimaryButton {
            pressed: state == ElementState::Pressed,
        }),
        _ => None,
    }
}

/// Wheel lines pass through unchanged; pixel deltas are scaled to lines.
#[must_use]
pub fn mouse_wheel(delta: MouseScrollDelta) -> Option<InputEvent> {
    let y_offset = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_LINE,
    };

    (y_offset != 0.0).then_some(InputEvent::Scrolled { y_offset })
}
