//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit, NextScene, etc.
//! Rotation keys (1-6, Q-Y) are NOT mapped here - they go directly to AngleController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not rotation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Put all six angles back to zero (Backspace)
    ResetAngles,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Switch between tesseract and axes (Tab)
    NextScene,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for rotation keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::Backspace => Some(InputAction::ResetAngles),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Tab => Some(InputAction::NextScene),
            _ => None, // Rotation keys handled by controller
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperview_input::PLANE_KEYS;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Backspace, ElementState::Pressed),
            Some(InputAction::ResetAngles)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed),
            Some(InputAction::ToggleFullscreen)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Tab, ElementState::Pressed),
            Some(InputAction::NextScene)
        );
    }

    #[test]
    fn test_rotation_keys_not_mapped() {
        for (plane, inc, dec) in PLANE_KEYS {
            for key in [inc, dec] {
                let action = InputMapper::map_keyboard(key, ElementState::Pressed);
                assert_eq!(action, None, "{} key {:?} should not be mapped", plane, key);
            }
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released);
        assert_eq!(action, None);
    }
}
