//=========================================================================
// Scenes
//=========================================================================
//
// Concrete scenes owned by the scene manager, plus the gameplay
// components the action scene is built from.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod action;
pub mod components;
pub mod high_score;
mod info;
mod menu;

//=== Public API ==========================================================

pub use action::{ActionScene, ActionSceneState};
pub use high_score::{
    HighScoreEntry, HighScoreScene, HighScoreState, MemoryScoreStore, RonScoreStore, ScoreStore,
    ScoreStoreError,
};
pub use info::InfoScene;
pub use menu::MenuScene;
