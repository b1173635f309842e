//=========================================================================
// Input Snapshot & Edge Detection
//=========================================================================
//
// `InputSnapshot` is the sampled device state for one tick. Scenes never
// see raw events; they compare the current snapshot with the one they
// kept from their previous update through an `EdgeDetector`.
//
//   StateTracker::snapshot() ──► Tick ──► EdgeDetector::key_pressed()
//                                               │
//                                      latch() at end of update
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{KeyCode, MouseButton};

//=== InputSnapshot =======================================================

/// Raw keyboard and mouse state sampled once per tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    pointer: (f32, f32),
}

impl InputSnapshot {
    pub fn new(
        keys_down: HashSet<KeyCode>,
        buttons_down: HashSet<MouseButton>,
        pointer: (f32, f32),
    ) -> Self {
        Self { keys_down, buttons_down, pointer }
    }

    //--- Builders (used by hosts and tests) -------------------------------

    /// Returns a copy with `key` held.
    pub fn with_key(mut self, key: KeyCode) -> Self {
        self.keys_down.insert(key);
        self
    }

    /// Returns a copy with `button` held.
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.buttons_down.insert(button);
        self
    }

    /// Returns a copy with the pointer moved to `(x, y)`.
    pub fn with_pointer(mut self, x: f32, y: f32) -> Self {
        self.pointer = (x, y);
        self
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Pointer position in stage coordinates.
    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }
}

//=== EdgeDetector ========================================================

/// Remembers the previous snapshot so "freshly pressed" can be computed.
///
/// Freshly pressed = down in the current snapshot and up in the previous
/// one. Each scene owns its own detector, so a scene that was not updated
/// for a while compares against the last state it actually saw.
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    previous: InputSnapshot,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `key` went from up to down since the last `latch`.
    pub fn key_pressed(&self, current: &InputSnapshot, key: KeyCode) -> bool {
        current.is_key_down(key) && !self.previous.is_key_down(key)
    }

    /// `true` if `button` went from up to down since the last `latch`.
    pub fn button_pressed(&self, current: &InputSnapshot, button: MouseButton) -> bool {
        current.is_button_down(button) && !self.previous.is_button_down(button)
    }

    /// Forces the remembered state of `button` to "held".
    ///
    /// A button already held when this is called must be released and
    /// pressed again before `button_pressed` reports it.
    pub fn prime_button(&mut self, button: MouseButton) {
        self.previous.buttons_down.insert(button);
    }

    /// Stores `current` as the previous sample for the next update.
    pub fn latch(&mut self, current: &InputSnapshot) {
        self.previous.clone_from(current);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
