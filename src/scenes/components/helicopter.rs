//=========================================================================
// Helicopter
//=========================================================================
//
// The player body. Falls under gravity, climbs while the primary pointer
// button is held. The crashed flag is set by the collision manager and
// stays set until `reset`.
//
//=========================================================================

use glam::Vec2;

use super::{Component, Rect};
use crate::core::globals::Stage;

//=== Tuning ==============================================================

/// Size of one animation frame (and of the collision box).
pub const HELICOPTER_FRAME_SIZE: Vec2 = Vec2::new(120.0, 61.0);

/// Number of rotor animation frames.
const FRAME_COUNT: usize = 4;

/// Updates spent on each rotor frame.
const FRAME_DELAY: u32 = 3;

/// Downward acceleration, pixels per second squared.
const GRAVITY: f32 = 900.0;

/// Upward acceleration while the pointer is held.
const LIFT: f32 = 1_800.0;

/// Vertical speed limit in either direction.
const MAX_VERTICAL_SPEED: f32 = 420.0;

//=== Helicopter ==========================================================

#[derive(Debug, Clone)]
pub struct Helicopter {
    start: Vec2,
    position: Vec2,
    velocity_y: f32,
    enabled: bool,
    visible: bool,
    crashed: bool,
    frame: usize,
    frame_timer: u32,
}

impl Helicopter {
    /// Creates a disabled helicopter a quarter of the way across the
    /// stage, vertically centred.
    pub fn new(stage: &Stage) -> Self {
        let start = Vec2::new(
            stage.width() / 4.0 - HELICOPTER_FRAME_SIZE.x / 2.0,
            (stage.height() - HELICOPTER_FRAME_SIZE.y) / 2.0,
        );

        Self {
            start,
            position: start,
            velocity_y: 0.0,
            enabled: false,
            visible: true,
            crashed: false,
            frame: 0,
            frame_timer: 0,
        }
    }

    /// Advances flight by `dt` seconds. No-op while disabled.
    pub fn update(&mut self, dt: f32, lifting: bool) {
        if !self.enabled {
            return;
        }

        let acceleration = if lifting { GRAVITY - LIFT } else { GRAVITY };
        self.velocity_y =
            (self.velocity_y + acceleration * dt).clamp(-MAX_VERTICAL_SPEED, MAX_VERTICAL_SPEED);
        self.position.y += self.velocity_y * dt;

        self.frame_timer += 1;
        if self.frame_timer >= FRAME_DELAY {
            self.frame_timer = 0;
            self.frame = (self.frame + 1) % FRAME_COUNT;
        }
    }

    //--- Crash State ------------------------------------------------------

    pub fn has_crashed(&self) -> bool {
        self.crashed
    }

    /// Marks the helicopter as crashed (sticky until `reset`).
    pub fn crash(&mut self) {
        self.crashed = true;
    }

    /// Back to the start position: not crashed, visible, disabled.
    pub fn reset(&mut self) {
        self.position = self.start;
        self.velocity_y = 0.0;
        self.crashed = false;
        self.enabled = false;
        self.visible = true;
        self.frame = 0;
        self.frame_timer = 0;
    }

    //--- Queries ----------------------------------------------------------

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, HELICOPTER_FRAME_SIZE)
    }

    /// Current rotor animation frame.
    pub fn frame(&self) -> usize {
        self.frame
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

impl Component for Helicopter {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn helicopter() -> Helicopter {
        Helicopter::new(&Stage::new(1024.0, 600.0))
    }

    #[test]
    fn starts_disabled_at_quarter_width() {
        let heli = helicopter();
        assert!(!heli.is_enabled());
        assert!(heli.is_visible());
        assert_eq!(heli.position(), Vec2::new(256.0 - 60.0, (600.0 - 61.0) / 2.0));
    }

    #[test]
    fn disabled_helicopter_does_not_move() {
        let mut heli = helicopter();
        let before = heli.position();
        heli.update(DT, false);
        assert_eq!(heli.position(), before);
    }

    #[test]
    fn falls_without_lift_and_climbs_with_it() {
        let mut heli = helicopter();
        heli.set_enabled(true);
        let start_y = heli.position().y;

        for _ in 0..10 {
            heli.update(DT, false);
        }
        assert!(heli.position().y > start_y);

        let low_y = heli.position().y;
        for _ in 0..60 {
            heli.update(DT, true);
        }
        assert!(heli.position().y < low_y);
    }

    #[test]
    fn vertical_speed_is_clamped() {
        let mut heli = helicopter();
        heli.set_enabled(true);
        for _ in 0..600 {
            heli.update(DT, false);
        }
        assert!(heli.velocity_y() <= MAX_VERTICAL_SPEED);
    }

    #[test]
    fn crash_is_sticky_until_reset() {
        let mut heli = helicopter();
        heli.set_enabled(true);
        heli.crash();
        heli.update(DT, true);
        assert!(heli.has_crashed());

        heli.set_position(Vec2::new(0.0, 0.0));
        heli.reset();
        assert!(!heli.has_crashed());
        assert!(!heli.is_enabled());
        assert_eq!(heli.position(), helicopter().position());
    }

    #[test]
    fn rotor_animation_cycles() {
        let mut heli = helicopter();
        heli.set_enabled(true);
        for _ in 0..(FRAME_DELAY as usize * FRAME_COUNT) {
            heli.update(DT, true);
        }
        assert_eq!(heli.frame(), 0);
        heli.update(DT, true);
        heli.update(DT, true);
        heli.update(DT, true);
        assert_eq!(heli.frame(), 1);
    }
}
