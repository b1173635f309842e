//=========================================================================
// High Score Scene
//=========================================================================
//
// Shows the high-score table and collects a name for a new entry.
//
// States:
//   View ──add_score_entry()──→ Entry ──Enter──→ ResumePlay
//     ↑                                              │
//     └──────────────────── hide() ←─────────────────┘
//
// The scene manager watches for ResumePlay and hands control back to
// the action scene.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::globals::{GameContext, BLINK_RATE_MS, MAX_NAME_CHARS};
use crate::core::input::{EdgeDetector, KeyCode};
use crate::core::scene::{Scene, Tick};

//=== Module Declarations =================================================

mod store;

//=== Public API ==========================================================

pub use store::{HighScoreEntry, MemoryScoreStore, RonScoreStore, ScoreStore, ScoreStoreError};

/// Name stored when the player commits without typing anything.
pub const ANONYMOUS_NAME: &str = "???";

//=== HighScoreState ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighScoreState {
    /// Table on display.
    View,

    /// Waiting for the player's name.
    Entry,

    /// Entry committed; gameplay should resume.
    ResumePlay,
}

//=== HighScoreScene ======================================================

pub struct HighScoreScene {
    enabled: bool,
    state: HighScoreState,
    entries: Vec<HighScoreEntry>,
    capacity: usize,
    store: Box<dyn ScoreStore>,

    // Name entry
    pending_score: Option<u32>,
    name: String,
    cursor_visible: bool,
    blink_elapsed_ms: u32,

    edges: EdgeDetector,
}

impl HighScoreScene {
    /// Loads the table from `store`. A store that fails to load leaves
    /// the table empty.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(mut store: Box<dyn ScoreStore>, capacity: usize) -> Self {
        assert!(capacity > 0, "High score capacity must be greater than zero");

        let mut entries = store.load().unwrap_or_else(|e| {
            warn!("Could not load high scores, starting empty: {}", e);
            Vec::new()
        });
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(capacity);

        Self {
            enabled: false,
            state: HighScoreState::View,
            entries,
            capacity,
            store,
            pending_score: None,
            name: String::new(),
            cursor_visible: true,
            blink_elapsed_ms: 0,
            edges: EdgeDetector::new(),
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> HighScoreState {
        self.state
    }

    /// Table sorted from best to worst.
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// Score to beat for a place on the table; 0 while there are free
    /// slots.
    pub fn lowest_score(&self) -> u32 {
        if self.entries.len() < self.capacity {
            return 0;
        }
        self.entries.last().map_or(0, |e| e.score)
    }

    pub fn highest_score(&self) -> u32 {
        self.entries.first().map_or(0, |e| e.score)
    }

    /// Name typed so far during entry.
    pub fn pending_name(&self) -> &str {
        &self.name
    }

    pub fn pending_score(&self) -> Option<u32> {
        self.pending_score
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    //--- Entry ------------------------------------------------------------

    /// Starts name entry for `score`.
    pub fn add_score_entry(&mut self, score: u32) {
        debug!("high score: entry started for {}", score);
        self.state = HighScoreState::Entry;
        self.pending_score = Some(score);
        self.name.clear();
        self.cursor_visible = true;
        self.blink_elapsed_ms = 0;
    }

    fn commit_entry(&mut self) {
        let Some(score) = self.pending_score.take() else {
            return;
        };

        let name = if self.name.is_empty() {
            ANONYMOUS_NAME.to_string()
        } else {
            std::mem::take(&mut self.name)
        };

        // Ties keep the older entry first.
        let index = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(index, HighScoreEntry::new(name, score));
        self.entries.truncate(self.capacity);

        if let Err(e) = self.store.save(&self.entries) {
            warn!("Could not save high scores: {}", e);
        }

        debug!("high score: committed {} at rank {}", score, index + 1);
        self.state = HighScoreState::ResumePlay;
    }

    fn edit_name(&mut self, tick: &Tick) {
        let input = &tick.input;

        for key in KeyCode::LETTERS {
            if self.name.len() >= MAX_NAME_CHARS {
                break;
            }
            if self.edges.key_pressed(input, key) {
                if let Some(letter) = key.letter() {
                    self.name.push(letter);
                }
            }
        }

        if self.edges.key_pressed(input, KeyCode::Backspace) {
            self.name.pop();
        }

        if self.edges.key_pressed(input, KeyCode::Enter) {
            self.commit_entry();
        }
    }

    fn blink(&mut self, elapsed_ms: u32) {
        self.blink_elapsed_ms = self.blink_elapsed_ms.saturating_add(elapsed_ms);
        if self.blink_elapsed_ms >= BLINK_RATE_MS {
            self.blink_elapsed_ms = 0;
            self.cursor_visible = !self.cursor_visible;
        }
    }
}

//=== Scene Implementation ================================================

impl Scene for HighScoreScene {
    fn show(&mut self) {
        self.enabled = true;
        self.state = HighScoreState::View;
    }

    /// Drops any unfinished entry.
    fn hide(&mut self) {
        self.enabled = false;
        self.state = HighScoreState::View;
        self.pending_score = None;
        self.name.clear();
    }

    fn update(&mut self, _context: &mut GameContext, tick: &Tick) {
        if !self.enabled {
            return;
        }

        if self.state == HighScoreState::Entry {
            self.blink(tick.elapsed_millis());
            self.edit_name(tick);
        }

        self.edges.latch(&tick.input);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn caption(&self) -> String {
        match self.state {
            HighScoreState::Entry => {
                let cursor = if self.cursor_visible { "_" } else { " " };
                format!(
                    "New high score {}! Enter your name: {}{}",
                    self.pending_score.unwrap_or_default(),
                    self.name,
                    cursor
                )
            }
            HighScoreState::View | HighScoreState::ResumePlay => {
                if self.entries.is_empty() {
                    return "High Scores: none yet".to_string();
                }
                let table: Vec<String> = self
                    .entries
                    .iter()
                    .enumerate()
                    .map(|(i, e)| format!("{}. {} {}", i + 1, e.name, e.score))
                    .collect();
                format!("High Scores: {}", table.join("  "))
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::globals::Stage;
    use crate::core::input::InputSnapshot;
    use std::time::Duration;

    //=== Helpers ===

    fn context() -> GameContext {
        GameContext::with_seed(Stage::new(1024.0, 600.0), 1)
    }

    fn press(key: KeyCode) -> Tick {
        Tick::new(InputSnapshot::default().with_key(key), Duration::from_millis(16))
    }

    fn idle() -> Tick {
        Tick::new(InputSnapshot::default(), Duration::from_millis(16))
    }

    fn type_keys(scene: &mut HighScoreScene, context: &mut GameContext, keys: &[KeyCode]) {
        for &key in keys {
            scene.update(context, &press(key));
            scene.update(context, &idle());
        }
    }

    fn full_table(capacity: usize) -> MemoryScoreStore {
        let entries = (0..capacity as u32)
            .map(|i| HighScoreEntry::new("AAA", 100 - i * 10))
            .collect();
        MemoryScoreStore::with_entries(entries)
    }

    //=== Thresholds ===

    #[test]
    fn lowest_score_is_zero_with_free_slots() {
        let scene = HighScoreScene::new(Box::new(full_table(3)), 5);
        assert_eq!(scene.lowest_score(), 0);
        assert_eq!(scene.highest_score(), 100);
    }

    #[test]
    fn lowest_score_is_last_entry_when_full() {
        let scene = HighScoreScene::new(Box::new(full_table(5)), 5);
        assert_eq!(scene.lowest_score(), 60);
    }

    #[test]
    fn loaded_table_is_sorted_and_truncated() {
        let store = MemoryScoreStore::with_entries(vec![
            HighScoreEntry::new("LOW", 1),
            HighScoreEntry::new("TOP", 50),
            HighScoreEntry::new("MID", 20),
        ]);
        let scene = HighScoreScene::new(Box::new(store), 2);

        let names: Vec<_> = scene.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["TOP", "MID"]);
    }

    //=== Entry ===

    #[test]
    fn typed_name_is_committed_and_saved() {
        let store = full_table(5);
        let mut scene = HighScoreScene::new(Box::new(store.clone()), 5);
        let mut context = context();
        scene.show();
        scene.add_score_entry(85);

        type_keys(&mut scene, &mut context, &[KeyCode::KeyJ, KeyCode::KeyO, KeyCode::KeyE]);
        assert_eq!(scene.pending_name(), "JOE");
        type_keys(&mut scene, &mut context, &[KeyCode::Enter]);

        assert_eq!(scene.state(), HighScoreState::ResumePlay);
        assert_eq!(scene.entries()[2], HighScoreEntry::new("JOE", 85));
        assert_eq!(scene.entries().len(), 5);
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.entries(), scene.entries());
    }

    #[test]
    fn name_is_capped_and_editable() {
        let mut scene = HighScoreScene::new(Box::new(MemoryScoreStore::new()), 5);
        let mut context = context();
        scene.show();
        scene.add_score_entry(10);

        type_keys(
            &mut scene,
            &mut context,
            &[KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD],
        );
        assert_eq!(scene.pending_name(), "ABC");

        type_keys(&mut scene, &mut context, &[KeyCode::Backspace, KeyCode::KeyZ]);
        assert_eq!(scene.pending_name(), "ABZ");
    }

    #[test]
    fn empty_name_is_stored_anonymously() {
        let mut scene = HighScoreScene::new(Box::new(MemoryScoreStore::new()), 5);
        let mut context = context();
        scene.show();
        scene.add_score_entry(42);

        type_keys(&mut scene, &mut context, &[KeyCode::Enter]);

        assert_eq!(scene.entries(), [HighScoreEntry::new(ANONYMOUS_NAME, 42)]);
    }

    #[test]
    fn held_key_types_once() {
        let mut scene = HighScoreScene::new(Box::new(MemoryScoreStore::new()), 5);
        let mut context = context();
        scene.show();
        scene.add_score_entry(10);

        for _ in 0..4 {
            scene.update(&mut context, &press(KeyCode::KeyQ));
        }

        assert_eq!(scene.pending_name(), "Q");
    }

    #[test]
    fn keys_are_ignored_while_viewing() {
        let mut scene = HighScoreScene::new(Box::new(MemoryScoreStore::new()), 5);
        let mut context = context();
        scene.show();

        type_keys(&mut scene, &mut context, &[KeyCode::KeyA, KeyCode::Enter]);

        assert_eq!(scene.state(), HighScoreState::View);
        assert!(scene.entries().is_empty());
    }

    //=== Lifecycle ===

    #[test]
    fn hide_drops_unfinished_entry() {
        let store = MemoryScoreStore::new();
        let mut scene = HighScoreScene::new(Box::new(store.clone()), 5);
        let mut context = context();
        scene.show();
        scene.add_score_entry(10);
        type_keys(&mut scene, &mut context, &[KeyCode::KeyA]);

        scene.hide();

        assert_eq!(scene.state(), HighScoreState::View);
        assert_eq!(scene.pending_score(), None);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn cursor_blinks_during_entry() {
        let mut scene = HighScoreScene::new(Box::new(MemoryScoreStore::new()), 5);
        let mut context = context();
        scene.show();
        scene.add_score_entry(10);
        assert!(scene.cursor_visible());

        let tick = Tick::new(InputSnapshot::default(), Duration::from_millis(BLINK_RATE_MS as u64));
        scene.update(&mut context, &tick);
        assert!(!scene.cursor_visible());
        scene.update(&mut context, &tick);
        assert!(scene.cursor_visible());
    }
}
