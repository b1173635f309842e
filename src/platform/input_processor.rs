//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit events into the game's InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent → InputBuffer
//
// Cursor positions arrive in physical pixels and are divided by the
// window scale factor, so the core always sees logical (stage) pixels.
// Keys the game does not bind are filtered out (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, MouseButton};

//=== InputProcessor ======================================================

/// Converts Winit events to InputEvents, tracking the window scale factor.
pub(crate) struct InputProcessor {
    scale_factor: f64,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self { scale_factor: 1.0 }
    }

    //--- Scale Factor -----------------------------------------------------

    pub(crate) fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    pub(crate) fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent (filters unbound keys and auto-repeat).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        if key_event.repeat {
            return None;
        }

        let key_code = match key_event.physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        self.key_input_event(key_code, key_event.state)
    }

    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let mouse_button = MouseButton::from(button);

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown(mouse_button),
            ElementState::Released => InputEvent::MouseButtonUp(mouse_button),
        }
    }

    /// Creates a pointer move event in logical pixels.
    pub(crate) fn process_mouse_move(&self, position: PhysicalPosition<f64>) -> InputEvent {
        let logical = position.to_logical::<f64>(self.scale_factor);
        InputEvent::MouseMoved {
            x: logical.x as f32,
            y: logical.y as f32,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_input_event(&self, key: KeyCode, state: ElementState) -> Option<InputEvent> {
        if key == KeyCode::Unidentified {
            return None;
        }

        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown(key),
            ElementState::Released => InputEvent::KeyUp(key),
        })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to game key codes.
///
/// Maps letters, arrows and the keys the menus use. Everything else
/// becomes `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter | NumpadEnter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Backspace => KeyCode::Backspace,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Left/Right/Middle map directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_events_follow_element_state() {
        let processor = InputProcessor::new();

        assert_eq!(
            processor.key_input_event(KeyCode::KeyS, ElementState::Pressed),
            Some(InputEvent::KeyDown(KeyCode::KeyS))
        );
        assert_eq!(
            processor.key_input_event(KeyCode::KeyS, ElementState::Released),
            Some(InputEvent::KeyUp(KeyCode::KeyS))
        );
    }

    #[test]
    fn unidentified_keys_are_filtered() {
        let processor = InputProcessor::new();
        let key = KeyCode::from(WinitKeyCode::F13);

        assert_eq!(key, KeyCode::Unidentified);
        assert_eq!(processor.key_input_event(key, ElementState::Pressed), None);
    }

    #[test]
    fn mouse_buttons_map_to_down_and_up() {
        let processor = InputProcessor::new();

        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed),
            InputEvent::MouseButtonDown(MouseButton::Left)
        );
        assert_eq!(
            processor.process_mouse_button(WinitMouseButton::Back, ElementState::Released),
            InputEvent::MouseButtonUp(MouseButton::Other)
        );
    }

    #[test]
    fn cursor_is_converted_to_logical_pixels() {
        let mut processor = InputProcessor::new();
        processor.set_scale_factor(2.0);

        match processor.process_mouse_move(PhysicalPosition::new(200.0, 100.0)) {
            InputEvent::MouseMoved { x, y } => assert_eq!((x, y), (100.0, 50.0)),
            other => panic!("Expected MouseMoved, got {:?}", other),
        }
    }

    #[test]
    fn non_positive_scale_factor_is_ignored() {
        let mut processor = InputProcessor::new();
        processor.set_scale_factor(0.0);
        assert_eq!(processor.scale_factor(), 1.0);
    }

    #[test]
    fn keycode_conversion_covers_bindings() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::KeyA);
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Enter);
        assert_eq!(KeyCode::from(WinitKeyCode::Backspace), KeyCode::Backspace);
    }
}
