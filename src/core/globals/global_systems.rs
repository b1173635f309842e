//=========================================================================
// Global Systems
//=========================================================================
//
// Container for the logic-thread systems.
//
// Contains the input state tracker and the scene manager. Systems operate
// on the GameContext handed in by the orchestrator.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::GameContext;
use crate::core::input::{InputEvent, StateTracker};
use crate::core::scene::{SceneManager, Tick};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `input`: folds platform events into per-tick snapshots
/// - `scene_manager`: owns every scene and the enabled-scene switch
pub struct GlobalSystems {
    /// Held keys, buttons and pointer position.
    pub input: StateTracker,

    /// Scene ownership and global transitions.
    pub scene_manager: SceneManager,
}

impl GlobalSystems {
    pub fn new(scene_manager: SceneManager) -> Self {
        Self {
            input: StateTracker::new(),
            scene_manager,
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input**: fold this tick's events into the tracker
    /// 2. **Snapshot**: sample held state (taps included)
    /// 3. **Scenes**: tick the scene manager
    /// 4. **Reset**: drop per-tick press deltas
    pub fn update(&mut self, context: &mut GameContext, events: &[InputEvent], elapsed: Duration) {
        self.input.process_events(events);

        let tick = Tick::new(self.input.snapshot(), elapsed);
        self.scene_manager.update(context, &tick);

        self.input.clear();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
