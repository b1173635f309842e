//=========================================================================
// Action Scene
//=========================================================================
//
// The gameplay state machine.
//
// States:
//   PreStart ──click──→ InPlay ──space──→ Paused ──space──→ InPlay
//                         │
//                      crashed
//                         ↓
//                      GameOver ──click──→ PreStart (full reset)
//
// Each update picks exactly one branch, in priority order:
//   1. InPlay   + pause pressed        → Paused
//   2. Paused   + pause pressed        → InPlay
//   3. PreStart + click inside stage   → InPlay
//   4. crashed  + not GameOver         → GameOver
//   5. InPlay                          → score, speed, recycle
//   6. GameOver + click inside stage   → reset
//
// Anything else is ignored. After the branch, the enabled components run
// in a fixed order: obstacles → helicopter → explosion → collisions.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::globals::{
    GameContext, Stage, HIGHEST_SCORE_COLOR, MESSAGE_TEXT_COLOR, NORMAL_TEXT_COLOR,
};
use crate::core::input::{EdgeDetector, InputSnapshot, PAUSE_KEY, PRIMARY_BUTTON};
use crate::core::scene::{Scene, Tick};
use crate::scenes::components::{
    Border, Component, Explosion, Helicopter, Rect, TextDisplay,
};

//=== Module Declarations =================================================

mod collision;
mod obstacle_pool;

//=== Public API ==========================================================

pub use collision::CollisionManager;
pub use obstacle_pool::{ObstaclePool, NUMBER_OF_OBSTACLES};

//=== Constants ===========================================================

/// Raw accumulator units per displayed score point.
pub const SCORE_SCALE: u32 = 100;

/// Approximate glyph advance used to right-align the best-score text.
const GLYPH_WIDTH: f32 = 18.0;

pub const START_MESSAGE: &str = "Click To Start Playing";
pub const PAUSE_MESSAGE: &str = "Press Space to Unpause.";
pub const GAME_OVER_MESSAGE: &str = "Game Over";
pub const RESTART_MESSAGE: &str = "Click to start";

//=== ActionSceneState ====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSceneState {
    PreStart,
    InPlay,
    Paused,
    GameOver,
}

//=== ActionScene =========================================================

pub struct ActionScene {
    enabled: bool,
    state: ActionSceneState,
    stage: Stage,

    // Components
    helicopter: Helicopter,
    top_border: Border,
    bottom_border: Border,
    obstacles: ObstaclePool,
    explosion: Explosion,
    collisions: CollisionManager,
    message: TextDisplay,
    score_display: TextDisplay,
    best_display: TextDisplay,

    // Scoring
    duration_score: u32,
    highest_score: u32,

    edges: EdgeDetector,
}

impl ActionScene {
    /// Builds the scene in `PreStart`, disabled, with every obstacle
    /// hidden just off the right edge.
    pub fn new(context: &mut GameContext) -> Self {
        let stage = context.stage;
        let obstacles = ObstaclePool::new(&stage, &mut context.rng);

        let mut scene = Self {
            enabled: false,
            state: ActionSceneState::PreStart,
            stage,
            helicopter: Helicopter::new(&stage),
            top_border: Border::top(&stage),
            bottom_border: Border::bottom(&stage),
            obstacles,
            explosion: Explosion::new(),
            collisions: CollisionManager::new(),
            message: TextDisplay::new(stage.center(), MESSAGE_TEXT_COLOR)
                .with_message(START_MESSAGE),
            score_display: TextDisplay::new(Vec2::new(1.0, 1.0), NORMAL_TEXT_COLOR),
            best_display: TextDisplay::new(Vec2::new(stage.width(), 1.0), HIGHEST_SCORE_COLOR),
            duration_score: 0,
            highest_score: 0,
            edges: EdgeDetector::new(),
        };

        scene.refresh_score_text();
        scene
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> ActionSceneState {
        self.state
    }

    /// Displayed score (accumulator / `SCORE_SCALE`).
    pub fn score(&self) -> u32 {
        self.duration_score / SCORE_SCALE
    }

    /// Raw score accumulator.
    pub fn duration_score(&self) -> u32 {
        self.duration_score
    }

    /// Current mid-screen message; empty while flying.
    pub fn message(&self) -> &str {
        self.message.message()
    }

    pub fn score_text(&self) -> &str {
        self.score_display.message()
    }

    pub fn best_score_text(&self) -> &str {
        self.best_display.message()
    }

    pub fn helicopter(&self) -> &Helicopter {
        &self.helicopter
    }

    pub fn obstacles(&self) -> &ObstaclePool {
        &self.obstacles
    }

    pub fn explosion(&self) -> &Explosion {
        &self.explosion
    }

    /// Best score on the high-score table, shown until beaten.
    pub fn set_highest_score(&mut self, score: u32) {
        if self.highest_score != score {
            self.highest_score = score;
            self.refresh_score_text();
        }
    }

    /// Visible borders and obstacles with their layer depth, deepest
    /// first (the order a renderer draws them in).
    pub fn scenery(&self) -> Vec<(Rect, f32)> {
        let borders = [&self.top_border, &self.bottom_border]
            .into_iter()
            .filter(|b| b.is_visible())
            .map(|b| (b.bounds(), b.layer()));
        let obstacles = self
            .obstacles
            .iter()
            .filter(|o| o.is_visible())
            .map(|o| (o.bounds(), o.layer()));

        let mut scenery: Vec<_> = borders.chain(obstacles).collect();
        scenery.sort_by(|a, b| b.1.total_cmp(&a.1));
        scenery
    }

    //--- Transitions ------------------------------------------------------

    fn start_game(&mut self) {
        debug!("action: PreStart → InPlay");
        self.state = ActionSceneState::InPlay;
        self.message.clear();
        self.for_each_component(|c| c.activate());
    }

    fn pause_game(&mut self) {
        debug!("action: InPlay → Paused");
        self.state = ActionSceneState::Paused;
        self.freeze();
        self.message.set_message(PAUSE_MESSAGE);
    }

    fn resume_game(&mut self) {
        debug!("action: Paused → InPlay");
        self.state = ActionSceneState::InPlay;
        self.for_each_component(|c| c.set_enabled(true));
        self.message.clear();
    }

    fn end_game(&mut self) {
        debug!("action: GameOver with score {}", self.score());
        self.state = ActionSceneState::GameOver;
        self.freeze();
        self.message.set_message(GAME_OVER_MESSAGE);

        self.explosion.start(self.helicopter.bounds().center());
        self.helicopter.set_visible(false);
    }

    /// Full reset back to `PreStart`. Two resets in a row leave the scene
    /// in the same observable state.
    fn reset(&mut self, context: &mut GameContext) {
        debug!("action: reset to PreStart");
        self.state = ActionSceneState::PreStart;
        self.message.set_message(RESTART_MESSAGE);

        context.reset_stage_speed();
        self.duration_score = 0;

        self.helicopter.reset();
        self.top_border.set_enabled(false);
        self.bottom_border.set_enabled(false);
        self.explosion.stop();

        self.obstacles.hide_all();
        let ratio = context.speed_ratio();
        self.obstacles.recycle(ratio, true, &self.stage, &mut context.rng);

        self.refresh_score_text();
    }

    //--- Component Set ----------------------------------------------------

    /// Every component the scene toggles together. The explosion is
    /// deliberately absent so it can keep animating after a crash.
    fn for_each_component(&mut self, mut f: impl FnMut(&mut dyn Component)) {
        f(&mut self.helicopter);
        f(&mut self.top_border);
        f(&mut self.bottom_border);
        f(&mut self.collisions);
        f(&mut self.message);
        f(&mut self.score_display);
        f(&mut self.best_display);
        for obstacle in self.obstacles.iter_mut() {
            f(obstacle);
        }
    }

    fn freeze(&mut self) {
        self.for_each_component(|c| c.set_enabled(false));
    }

    //--- In-Play Step -----------------------------------------------------

    fn accrue_score(&mut self, elapsed_millis: u32, speed_ratio: f32) {
        let multiplier = speed_ratio.floor().max(0.0) as u32;
        let increase = elapsed_millis.saturating_mul(multiplier);
        self.duration_score = self.duration_score.saturating_add(increase);
    }

    fn refresh_score_text(&mut self) {
        let score = self.score();
        self.score_display.set_message(score.to_string());

        let best = score.max(self.highest_score).to_string();
        let x = self.stage.width() - best.len() as f32 * GLYPH_WIDTH;
        self.best_display.set_position(Vec2::new(x, 1.0));
        self.best_display.set_message(best);
    }

    fn clicked_inside_stage(&self, input: &InputSnapshot) -> bool {
        if !self.edges.button_pressed(input, PRIMARY_BUTTON) {
            return false;
        }
        let (x, y) = input.pointer();
        self.stage.contains(Vec2::new(x, y))
    }

    fn update_components(&mut self, context: &GameContext, tick: &Tick) {
        let dt = tick.elapsed_secs();

        self.obstacles.update(dt, context.stage_speed());
        self.helicopter
            .update(dt, tick.input.is_button_down(PRIMARY_BUTTON));
        self.explosion.update();
        self.collisions.update(
            &mut self.helicopter,
            [&self.top_border, &self.bottom_border],
            &self.obstacles,
        );
    }
}

//=== Scene Implementation ================================================

impl Scene for ActionScene {
    /// Primes the primary button so a click held over from the previous
    /// scene must be released first. Returning after a game over zeroes
    /// the accumulator so the score is never handed off twice.
    fn show(&mut self) {
        if self.state == ActionSceneState::GameOver {
            self.duration_score = 0;
        }
        self.edges.prime_button(PRIMARY_BUTTON);
        self.enabled = true;
    }

    fn hide(&mut self) {
        if self.state == ActionSceneState::InPlay && !self.helicopter.has_crashed() {
            self.pause_game();
        }
        self.enabled = false;
    }

    fn update(&mut self, context: &mut GameContext, tick: &Tick) {
        if !self.enabled {
            return;
        }

        let input = &tick.input;
        let pause_pressed = self.edges.key_pressed(input, PAUSE_KEY);

        match self.state {
            ActionSceneState::InPlay if pause_pressed => self.pause_game(),
            ActionSceneState::Paused if pause_pressed => self.resume_game(),
            ActionSceneState::PreStart if self.clicked_inside_stage(input) => self.start_game(),
            state if self.helicopter.has_crashed() && state != ActionSceneState::GameOver => {
                self.end_game()
            }
            ActionSceneState::InPlay => {
                // Score uses the ratio from before this tick's growth.
                self.accrue_score(tick.elapsed_millis(), context.speed_ratio());
                context.accelerate_stage();

                let ratio = context.speed_ratio();
                self.obstacles.recycle(ratio, false, &self.stage, &mut context.rng);
                self.refresh_score_text();
            }
            ActionSceneState::GameOver if self.clicked_inside_stage(input) => self.reset(context),
            _ => {}
        }

        self.edges.latch(input);
        self.update_components(context, tick);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn caption(&self) -> String {
        let mut caption = format!(
            "Score: {}  Best: {}",
            self.score_display.message(),
            self.best_display.message()
        );
        if !self.message.message().is_empty() {
            caption.push_str("  |  ");
            caption.push_str(self.message.message());
        }
        caption
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
