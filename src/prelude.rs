//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use helicopter_madness::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::config::GameConfig;
pub use crate::engine::{Engine, EngineBuilder};

// Global systems and context
pub use crate::core::globals::{GameContext, GlobalSystems, SoundCue, Stage};

// Input system
pub use crate::core::input::{InputEvent, InputSnapshot, KeyCode, MouseButton, StateTracker};

// Scene system
pub use crate::core::scene::{MenuItem, Scene, SceneKey, SceneManager, SceneTransition, Tick};

// Scenes
pub use crate::scenes::{
    ActionScene, ActionSceneState, HighScoreEntry, HighScoreScene, HighScoreState,
    MemoryScoreStore, RonScoreStore, ScoreStore,
};
