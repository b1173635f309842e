//=========================================================================
// Global Game State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   GlobalSystems: StateTracker + SceneManager (owned by orchestrator)
//   GameContext:   stage, stage speed, rng, audio cues (passed to scenes)
//   settings:      fixed constants shared by every scene
//
//=========================================================================

//=== Module Declarations =================================================

mod global_context;
mod global_systems;
mod settings;

//=== Public API ==========================================================

pub use global_context::{
    AudioCues, GameContext, SoundCue, DEFAULT_MUSIC_VOLUME, DUCKED_MUSIC_VOLUME,
};
pub use global_systems::GlobalSystems;
pub use settings::*;
