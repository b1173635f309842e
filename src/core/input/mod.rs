//=========================================================================
// Input System
//=========================================================================
//
// Turns platform input events into per-tick snapshots.
//
// Architecture:
//   InputEvent batches → StateTracker → InputSnapshot → EdgeDetector
//
// The tracker is owned by GlobalSystems on the logic thread. Scenes only
// receive snapshots and keep their own edge detectors.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod snapshot;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, MouseButton};
pub use snapshot::{EdgeDetector, InputSnapshot};
pub use state_tracker::StateTracker;

//=== Bindings ============================================================

/// Key that pauses and resumes gameplay.
pub const PAUSE_KEY: KeyCode = KeyCode::Space;

/// Key that returns to the main menu from any scene.
pub const MENU_KEY: KeyCode = KeyCode::Escape;

/// Pointer button that starts play, lifts the helicopter and restarts.
pub const PRIMARY_BUTTON: MouseButton = MouseButton::Left;
