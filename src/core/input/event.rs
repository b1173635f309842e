//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts away platform-specific input (Winit) into a
// small, game-friendly vocabulary used by the state tracker.
//
// Responsibilities:
// - Represent keyboard and mouse inputs in a stable, portable way
// - Provide equality and hashing semantics for deduplication
// - Enable event coalescing (multiple MouseMoved → last position)
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (folds events into held state)
//         ↓
//    InputSnapshot → EdgeDetector (per scene)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The game only ever reacts to `Left` (the primary pointer button); the
/// other variants exist so the platform can report everything it sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Coverage is limited to what the game binds: letters for name entry,
/// arrows and Enter for the menu, Space for pause, Escape for the menu
/// shortcut and Backspace for editing a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Backspace,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

impl KeyCode {
    /// Letter keys in alphabetical order.
    pub const LETTERS: [KeyCode; 26] = [
        KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD,
        KeyCode::KeyE, KeyCode::KeyF, KeyCode::KeyG, KeyCode::KeyH,
        KeyCode::KeyI, KeyCode::KeyJ, KeyCode::KeyK, KeyCode::KeyL,
        KeyCode::KeyM, KeyCode::KeyN, KeyCode::KeyO, KeyCode::KeyP,
        KeyCode::KeyQ, KeyCode::KeyR, KeyCode::KeyS, KeyCode::KeyT,
        KeyCode::KeyU, KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX,
        KeyCode::KeyY, KeyCode::KeyZ,
    ];

    /// Returns the uppercase letter for a letter key, `None` otherwise.
    pub fn letter(self) -> Option<char> {
        Self::LETTERS
            .iter()
            .position(|&k| k == self)
            .map(|i| (b'A' + i as u8) as char)
    }
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Events are compared by type + payload (key/button). `MouseMoved`
/// events are equal regardless of coordinates, allowing coalescing in a
/// set (last position wins).
///
/// ```text
/// KeyDown(A)       == KeyDown(A)        ✓
/// KeyDown(A)       == KeyUp(A)          ✗ (different type)
/// MouseMoved{...}  == MouseMoved{...}   ✓ (always equal)
/// ```
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Mouse button pressed.
    MouseButtonDown(MouseButton),

    /// Mouse button released.
    MouseButtonUp(MouseButton),

    /// Mouse cursor moved to new position.
    ///
    /// Coordinates are logical pixels, top-left origin, which is also the
    /// stage coordinate space.
    MouseMoved { x: f32, y: f32 },

    /// Unrecognized or unsupported event, ignored by the tracker.
    Unidentified,
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown(a), KeyDown(b)) => a == b,
            (KeyUp(a), KeyUp(b)) => a == b,
            (MouseButtonDown(a), MouseButtonDown(b)) => a == b,
            (MouseButtonUp(a), MouseButtonUp(b)) => a == b,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => key.hash(state),
            InputEvent::MouseButtonDown(button) | InputEvent::MouseButtonUp(button) => {
                button.hash(state)
            }
            // Coordinates deliberately excluded (coalescing)
            InputEvent::MouseMoved { .. } | InputEvent::Unidentified => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
