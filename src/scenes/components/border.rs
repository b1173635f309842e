//=========================================================================
// Border
//=========================================================================

use glam::Vec2;

use super::{Component, Rect};
use crate::core::globals::{Stage, BORDER_LAYER};

/// Height of the top and bottom stage borders.
pub const BORDER_HEIGHT: f32 = 24.0;

/// Static full-width strip along the top or bottom edge of the stage.
#[derive(Debug, Clone)]
pub struct Border {
    position: Vec2,
    size: Vec2,
    flipped: bool,
    enabled: bool,
    visible: bool,
}

impl Border {
    pub fn top(stage: &Stage) -> Self {
        Self::new(Vec2::ZERO, stage.width(), false)
    }

    /// Bottom border; drawn flipped so the jagged edge faces the corridor.
    pub fn bottom(stage: &Stage) -> Self {
        Self::new(Vec2::new(0.0, stage.height() - BORDER_HEIGHT), stage.width(), true)
    }

    fn new(position: Vec2, width: f32, flipped: bool) -> Self {
        Self {
            position,
            size: Vec2::new(width, BORDER_HEIGHT),
            flipped,
            enabled: true,
            visible: true,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn layer(&self) -> f32 {
        BORDER_LAYER
    }
}

impl Component for Border {
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
