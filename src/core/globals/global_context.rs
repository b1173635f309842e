//=========================================================================
// Game Context
//=========================================================================
//
// Shared mutable data handed to every scene update:
// - stage: stage dimensions
// - stage_speed: current horizontal scroll speed
// - rng: the single random generator (obstacle placement)
// - audio: music volume and queued sound cues
//
// Owned by the logic thread; there is exactly one per running game.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

//=== Internal Dependencies ===============================================

use super::settings::{
    Stage, DEFAULT_STAGE_SPEED_X, MAX_STAGE_SPEED_FACTOR, STAGE_SPEED_GROWTH,
};

//=== Audio ===============================================================

/// Music volume while the helicopter is in flight.
pub const DUCKED_MUSIC_VOLUME: f32 = 0.1;

/// Music volume everywhere else.
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.3;

/// One-shot sound effects requested by the scene manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    MenuSelect,
    BackToMenu,
}

/// Audio requests collected during a tick for the host's audio backend.
#[derive(Debug, Clone)]
pub struct AudioCues {
    music_volume: f32,
    pending: Vec<SoundCue>,
}

impl AudioCues {
    fn new() -> Self {
        Self {
            music_volume: DEFAULT_MUSIC_VOLUME,
            pending: Vec::new(),
        }
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = volume.clamp(0.0, 1.0);
    }

    pub fn play(&mut self, cue: SoundCue) {
        self.pending.push(cue);
    }

    /// Cues queued since the last drain, oldest first.
    pub fn pending(&self) -> &[SoundCue] {
        &self.pending
    }

    /// Takes all queued cues, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.pending)
    }
}

//=== GameContext =========================================================

/// Simulation context passed explicitly into every scene update.
///
/// Replaces process-wide mutable settings: the stage speed and random
/// generator have exactly one owner and are reachable only through the
/// `&mut GameContext` the scene manager hands down each tick.
pub struct GameContext {
    /// Stage dimensions (fixed for the process lifetime).
    pub stage: Stage,

    /// Random generator for obstacle placement.
    pub rng: StdRng,

    /// Music volume and one-shot sound requests.
    pub audio: AudioCues,

    stage_speed: Vec2,
}

impl GameContext {
    /// Creates a context, seeding the generator from `seed` or from OS
    /// entropy when `None`.
    pub fn new(stage: Stage, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            stage,
            rng,
            audio: AudioCues::new(),
            stage_speed: Vec2::new(DEFAULT_STAGE_SPEED_X, 0.0),
        }
    }

    /// Deterministic context, mainly for tests and replays of a layout.
    pub fn with_seed(stage: Stage, seed: u64) -> Self {
        Self::new(stage, Some(seed))
    }

    //--- Stage Speed ------------------------------------------------------

    /// Current scroll velocity (pixels per second, x only).
    pub fn stage_speed(&self) -> Vec2 {
        self.stage_speed
    }

    /// Current speed relative to the default speed (1.0 ..= 2.0).
    pub fn speed_ratio(&self) -> f32 {
        self.stage_speed.x / DEFAULT_STAGE_SPEED_X
    }

    /// Applies one tick of speed growth, capped at the maximum factor.
    pub fn accelerate_stage(&mut self) {
        self.stage_speed.x = (self.stage_speed.x * STAGE_SPEED_GROWTH)
            .min(DEFAULT_STAGE_SPEED_X * MAX_STAGE_SPEED_FACTOR);
    }

    pub fn reset_stage_speed(&mut self) {
        self.stage_speed.x = DEFAULT_STAGE_SPEED_X;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn context() -> GameContext {
        GameContext::with_seed(Stage::new(1024.0, 600.0), 7)
    }

    #[test]
    fn starts_at_default_speed() {
        let ctx = context();
        assert_eq!(ctx.stage_speed().x, DEFAULT_STAGE_SPEED_X);
        assert_eq!(ctx.speed_ratio(), 1.0);
    }

    #[test]
    fn acceleration_is_monotonic_and_capped() {
        let mut ctx = context();
        let mut last = ctx.stage_speed().x;

        for _ in 0..5_000 {
            ctx.accelerate_stage();
            let now = ctx.stage_speed().x;
            assert!(now >= last);
            last = now;
        }

        assert_eq!(ctx.stage_speed().x, DEFAULT_STAGE_SPEED_X * MAX_STAGE_SPEED_FACTOR);
        assert_eq!(ctx.speed_ratio(), 2.0);
    }

    #[test]
    fn reset_restores_default_speed() {
        let mut ctx = context();
        for _ in 0..100 {
            ctx.accelerate_stage();
        }
        ctx.reset_stage_speed();
        assert_eq!(ctx.stage_speed().x, DEFAULT_STAGE_SPEED_X);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = context();
        let mut b = context();
        let xs: Vec<u32> = (0..8).map(|_| a.rng.gen()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.rng.gen()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn audio_drain_empties_queue() {
        let mut ctx = context();
        ctx.audio.play(SoundCue::MenuSelect);
        ctx.audio.play(SoundCue::BackToMenu);

        assert_eq!(ctx.audio.drain(), vec![SoundCue::MenuSelect, SoundCue::BackToMenu]);
        assert!(ctx.audio.pending().is_empty());
    }

    #[test]
    fn music_volume_is_clamped() {
        let mut ctx = context();
        ctx.audio.set_music_volume(3.0);
        assert_eq!(ctx.audio.music_volume(), 1.0);
    }
}
