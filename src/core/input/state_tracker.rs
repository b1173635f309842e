//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state tracking across frames.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys/buttons held) → snapshot()
//
// Frame lifecycle: clear() → process_events() → snapshot()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};
use super::snapshot::InputSnapshot;

//=== StateTracker ========================================================

/// Tracks persistent state (keys held) and the keys pressed this frame.
///
/// The per-frame pressed sets exist so that a tap which goes down and up
/// between two ticks still shows up as "down" in that tick's snapshot.
/// Without them, edge detection on snapshots would never see the tap.
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),

    //--- Frame Deltas (reset each frame via clear()) --------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,
}

impl StateTracker {
    /// Creates a new state tracker with empty state.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            keys_pressed_this_frame: HashSet::new(),
            mouse_buttons_pressed_this_frame: HashSet::new(),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas.
    pub fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.mouse_buttons_pressed_this_frame.clear();
    }

    /// Processes input events, updating internal state.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Produces the sampled device state for this frame.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot::new(
            self.keys_down.union(&self.keys_pressed_this_frame).copied().collect(),
            self.mouse_buttons_down
                .union(&self.mouse_buttons_pressed_this_frame)
                .copied()
                .collect(),
            self.mouse_position,
        )
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                // Only mark as pressed if it wasn't already down
                if self.keys_down.insert(*key) {
                    self.keys_pressed_this_frame.insert(*key);
                }
            }

            InputEvent::KeyUp(key) => {
                self.keys_down.remove(key);
            }

            InputEvent::MouseButtonDown(button) => {
                if self.mouse_buttons_down.insert(*button) {
                    self.mouse_buttons_pressed_this_frame.insert(*button);
                }
            }

            InputEvent::MouseButtonUp(button) => {
                self.mouse_buttons_down.remove(button);
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (*x, *y);
            }

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` while the mouse button is held.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Returns mouse position in stage coordinates (top-left origin).
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
