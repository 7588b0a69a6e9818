//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit or TogglePause.
//! Pointer drags and the wheel are NOT mapped here - they go directly to the
//! CameraController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Return the camera to its starting orbit (R key)
    ResetCamera,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Toggle camera inertia (I key)
    ToggleInertia,
    /// Pause or resume the hand animation (Space)
    TogglePause,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and for unbound keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetCamera),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyI => Some(InputAction::ToggleInertia),
            KeyCode::Space => Some(InputAction::TogglePause),
            _ => None,
        }
    }
}
