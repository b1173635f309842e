//=========================================================================
// Scene Manager
//=========================================================================
//
// Owns every scene and decides which single one is enabled.
//
// Scenes are built once and never dropped; switching only hides the
// current scene and shows the next. Menu entries are resolved through a
// registry keyed by `MenuItem`.
//
// Per-tick order:
//   1. evaluate_transition()   escape > score hand-off > resume play
//   2. apply_transition()
//   3. audio ducking + best score push
//   4. enabled scene update()
//   5. menu selection dispatch
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{MenuItem, Scene, SceneKey, SceneTransition, Tick};
use crate::core::globals::{GameContext, SoundCue, DEFAULT_MUSIC_VOLUME, DUCKED_MUSIC_VOLUME};
use crate::core::input::{EdgeDetector, MENU_KEY};
use crate::scenes::{
    ActionScene, ActionSceneState, HighScoreScene, HighScoreState, InfoScene, MenuScene,
    ScoreStore,
};

//=== Scene Manager =======================================================

pub struct SceneManager {
    menu: MenuScene,
    action: ActionScene,
    high_scores: HighScoreScene,
    how_to_play: InfoScene,
    help: InfoScene,
    credits: InfoScene,

    registry: HashMap<MenuItem, SceneKey>,
    enabled: SceneKey,

    edges: EdgeDetector,
    handoff_latched: bool,
    exit_requested: bool,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    /// Builds every scene and enables the menu.
    pub fn new(
        context: &mut GameContext,
        store: Box<dyn ScoreStore>,
        high_score_capacity: usize,
    ) -> Self {
        let mut manager = Self {
            menu: MenuScene::new(),
            action: ActionScene::new(context),
            high_scores: HighScoreScene::new(store, high_score_capacity),
            how_to_play: InfoScene::how_to_play(),
            help: InfoScene::help(),
            credits: InfoScene::credits(),
            registry: HashMap::new(),
            enabled: SceneKey::Menu,
            edges: EdgeDetector::new(),
            handoff_latched: false,
            exit_requested: false,
        };

        manager.register(MenuItem::StartGame, SceneKey::Action);
        manager.register(MenuItem::HowToPlay, SceneKey::HowToPlay);
        manager.register(MenuItem::Help, SceneKey::Help);
        manager.register(MenuItem::HighScore, SceneKey::HighScore);
        manager.register(MenuItem::Credit, SceneKey::Credits);

        manager.hide_all();
        manager.menu.show();

        manager
    }

    fn register(&mut self, item: MenuItem, key: SceneKey) {
        if self.registry.insert(item, key).is_some() {
            warn!("Menu item {:?} was already registered and has been replaced", item);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Scene currently visible and updating.
    pub fn enabled(&self) -> SceneKey {
        self.enabled
    }

    pub fn action(&self) -> &ActionScene {
        &self.action
    }

    pub fn high_scores(&self) -> &HighScoreScene {
        &self.high_scores
    }

    pub fn menu(&self) -> &MenuScene {
        &self.menu
    }

    /// Set once Quit has been selected.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Caption of the enabled scene.
    pub fn caption(&self) -> String {
        self.scene(self.enabled).caption()
    }

    pub fn scene(&self, key: SceneKey) -> &dyn Scene {
        match key {
            SceneKey::Menu => &self.menu,
            SceneKey::Action => &self.action,
            SceneKey::HighScore => &self.high_scores,
            SceneKey::HowToPlay => &self.how_to_play,
            SceneKey::Help => &self.help,
            SceneKey::Credits => &self.credits,
        }
    }

    fn scene_mut(&mut self, key: SceneKey) -> &mut dyn Scene {
        match key {
            SceneKey::Menu => &mut self.menu,
            SceneKey::Action => &mut self.action,
            SceneKey::HighScore => &mut self.high_scores,
            SceneKey::HowToPlay => &mut self.how_to_play,
            SceneKey::Help => &mut self.help,
            SceneKey::Credits => &mut self.credits,
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick: global transitions first, then the enabled scene.
    pub fn update(&mut self, context: &mut GameContext, tick: &Tick) {
        let transition = self.evaluate_transition(tick);
        self.apply_transition(transition, context);

        if self.action.state() != ActionSceneState::GameOver {
            self.handoff_latched = false;
        }

        let in_play = self.enabled == SceneKey::Action
            && self.action.state() == ActionSceneState::InPlay;
        context.audio.set_music_volume(if in_play {
            DUCKED_MUSIC_VOLUME
        } else {
            DEFAULT_MUSIC_VOLUME
        });

        self.action.set_highest_score(self.high_scores.highest_score());

        let key = self.enabled;
        self.scene_mut(key).update(context, tick);

        if key == SceneKey::Menu {
            if let Some(item) = self.menu.take_selection() {
                self.on_menu_selection(item, context);
            }
        }

        self.edges.latch(&tick.input);
    }

    //--- Transitions ------------------------------------------------------

    fn evaluate_transition(&self, tick: &Tick) -> SceneTransition {
        if self.enabled != SceneKey::Menu && self.edges.key_pressed(&tick.input, MENU_KEY) {
            return SceneTransition::BackToMenu;
        }

        let score = self.action.score();
        if self.enabled == SceneKey::Action
            && self.action.state() == ActionSceneState::GameOver
            && self.high_scores.state() == HighScoreState::View
            && score > self.high_scores.lowest_score()
            && !self.handoff_latched
        {
            return SceneTransition::SubmitScore(score);
        }

        if self.enabled == SceneKey::HighScore
            && self.high_scores.state() == HighScoreState::ResumePlay
        {
            return SceneTransition::ResumePlay;
        }

        SceneTransition::Empty
    }

    fn apply_transition(&mut self, transition: SceneTransition, context: &mut GameContext) {
        match transition {
            SceneTransition::BackToMenu => {
                debug!("scene: {:?} → Menu (escape)", self.enabled);
                self.hide_all();
                self.menu.show();
                self.enabled = SceneKey::Menu;
                context.audio.play(SoundCue::BackToMenu);
            }
            SceneTransition::SubmitScore(score) => {
                debug!("scene: Action → HighScore with score {}", score);
                self.handoff_latched = true;
                self.switch_to(SceneKey::HighScore);
                self.high_scores.add_score_entry(score);
            }
            SceneTransition::ResumePlay => {
                debug!("scene: HighScore → Action");
                self.switch_to(SceneKey::Action);
            }
            SceneTransition::Empty => {}
        }
    }

    /// Handles a menu choice: Quit requests exit, anything else shows the
    /// registered scene.
    ///
    /// # Panics
    ///
    /// Panics if `item` has no registered scene.
    pub fn on_menu_selection(&mut self, item: MenuItem, context: &mut GameContext) {
        self.menu.hide();

        if item == MenuItem::Quit {
            debug!("scene: quit selected");
            self.exit_requested = true;
            return;
        }

        let Some(&key) = self.registry.get(&item) else {
            panic!("Menu item {:?} has no registered scene", item);
        };

        debug!("scene: Menu → {:?}", key);
        context.audio.play(SoundCue::MenuSelect);
        self.enabled = key;
        self.scene_mut(key).show();
    }

    fn switch_to(&mut self, key: SceneKey) {
        let current = self.enabled;
        self.scene_mut(current).hide();
        self.enabled = key;
        self.scene_mut(key).show();
    }

    fn hide_all(&mut self) {
        for key in [
            SceneKey::Menu,
            SceneKey::Action,
            SceneKey::HighScore,
            SceneKey::HowToPlay,
            SceneKey::Help,
            SceneKey::Credits,
        ] {
            self.scene_mut(key).hide();
        }
    }

    #[cfg(test)]
    pub(crate) fn unregister(&mut self, item: MenuItem) {
        self.registry.remove(&item);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
