//=========================================================================
// Scene System
//=========================================================================
//
// Closed set of scenes switched by a single coordinator.
//
// Architecture:
//   SceneManager
//     ├─ registry: HashMap<MenuItem, SceneKey>
//     ├─ menu / action / high_scores / info scenes (typed, owned)
//     └─ enabled: SceneKey
//
// Flow:
//   update() → evaluate_transition() → apply → enabled scene update()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::globals::GameContext;
use crate::core::input::InputSnapshot;

//=== Module Declarations =================================================

mod scene_manager;

//=== Public API ==========================================================

pub use scene_manager::SceneManager;

//=== Scene Keys ==========================================================

/// Identity of every scene the manager owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKey {
    Menu,
    Action,
    HighScore,
    HowToPlay,
    Help,
    Credits,
}

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    StartGame,
    HowToPlay,
    Help,
    HighScore,
    Credit,
    Quit,
}

impl MenuItem {
    /// All entries in display order.
    pub const ALL: [MenuItem; 6] = [
        MenuItem::StartGame,
        MenuItem::HowToPlay,
        MenuItem::Help,
        MenuItem::HighScore,
        MenuItem::Credit,
        MenuItem::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::StartGame => "Start Game",
            MenuItem::HowToPlay => "How To Play",
            MenuItem::Help => "Help",
            MenuItem::HighScore => "High Score",
            MenuItem::Credit => "Credits",
            MenuItem::Quit => "Quit",
        }
    }
}

//=== Scene Transition ====================================================

/// Scene switch decided by the manager for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition {
    /// Escape pressed outside the menu.
    BackToMenu,

    /// Game over with a qualifying score; carries the score to submit.
    SubmitScore(u32),

    /// High-score entry finished; return to the gameplay scene.
    ResumePlay,

    /// No transition occurs.
    Empty,
}

impl Default for SceneTransition {
    fn default() -> Self {
        Self::Empty
    }
}

//=== Tick ================================================================

/// Per-frame input handed to the enabled scene.
#[derive(Debug, Clone, Default)]
pub struct Tick {
    /// Sampled device state for this frame.
    pub input: InputSnapshot,

    /// Time since the previous tick.
    pub elapsed: Duration,
}

impl Tick {
    pub fn new(input: InputSnapshot, elapsed: Duration) -> Self {
        Self { input, elapsed }
    }

    /// Elapsed time in whole milliseconds, saturating at `u32::MAX`.
    pub fn elapsed_millis(&self) -> u32 {
        u32::try_from(self.elapsed.as_millis()).unwrap_or(u32::MAX)
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

//=== Scene Trait =========================================================

/// Uniform capability interface shared by every scene.
///
/// Scenes are built once and live for the process lifetime; `show` and
/// `hide` only toggle whether they are visible and updating.
pub trait Scene: Send {
    /// Makes the scene visible and updating.
    fn show(&mut self);

    /// Hides the scene and stops its updates.
    fn hide(&mut self);

    /// Called once per tick while the scene is the enabled one.
    fn update(&mut self, context: &mut GameContext, tick: &Tick);

    fn is_enabled(&self) -> bool;

    /// One-line text describing what the scene currently shows.
    ///
    /// Hosts without a renderer display this (the platform uses it as
    /// the window title).
    fn caption(&self) -> String;
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_default_is_empty() {
        assert_eq!(SceneTransition::default(), SceneTransition::Empty);
    }

    #[test]
    fn menu_items_are_listed_in_display_order() {
        let labels: Vec<_> = MenuItem::ALL.iter().map(|item| item.label()).collect();
        assert_eq!(
            labels,
            ["Start Game", "How To Play", "Help", "High Score", "Credits", "Quit"]
        );
    }

    #[test]
    fn tick_elapsed_millis_saturates() {
        let tick = Tick::new(InputSnapshot::default(), Duration::from_secs(u64::MAX / 2));
        assert_eq!(tick.elapsed_millis(), u32::MAX);

        let tick = Tick::new(InputSnapshot::default(), Duration::from_millis(16));
        assert_eq!(tick.elapsed_millis(), 16);
    }
}
