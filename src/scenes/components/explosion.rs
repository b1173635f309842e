//=========================================================================
// Explosion
//=========================================================================
//
// One-shot sprite animation played where the helicopter crashed. It is
// the only component left running when the action scene freezes.
//
//=========================================================================

use glam::Vec2;

use super::Component;

/// Size of one explosion frame.
pub const EXPLOSION_FRAME_SIZE: Vec2 = Vec2::new(64.0, 64.0);

/// Frames in the explosion sheet.
pub const EXPLOSION_FRAME_COUNT: usize = 16;

/// Updates spent on each frame.
pub const EXPLOSION_FRAME_DELAY: u32 = 2;

#[derive(Debug, Clone)]
pub struct Explosion {
    position: Vec2,
    frame: usize,
    delay_counter: u32,
    enabled: bool,
    visible: bool,
}

impl Explosion {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            frame: 0,
            delay_counter: 0,
            enabled: false,
            visible: false,
        }
    }

    /// Restarts the animation centred on `center`.
    pub fn start(&mut self, center: Vec2) {
        self.position = center - EXPLOSION_FRAME_SIZE / 2.0;
        self.frame = 0;
        self.delay_counter = 0;
        self.activate();
    }

    /// Advances the animation; hides the explosion after the last frame.
    pub fn update(&mut self) {
        if !self.enabled {
            return;
        }

        self.delay_counter += 1;
        if self.delay_counter < EXPLOSION_FRAME_DELAY {
            return;
        }

        self.delay_counter = 0;
        self.frame += 1;

        if self.frame >= EXPLOSION_FRAME_COUNT {
            self.frame = 0;
            self.enabled = false;
            self.visible = false;
        }
    }

    /// Stops and hides the animation.
    pub fn stop(&mut self) {
        self.frame = 0;
        self.delay_counter = 0;
        self.enabled = false;
        self.visible = false;
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
}

impl Default for Explosion {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Explosion {
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
