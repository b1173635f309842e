//=========================================================================
// Obstacle
//=========================================================================
//
// Recyclable block scrolling from right to left. Once it has fully left
// the stage it hides itself, which marks it as ready to be repositioned
// by the obstacle pool.
//
//=========================================================================

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::Rng;

use super::{Component, Rect};
use crate::core::globals::OBSTACLE_LAYER;

/// Width and height of every obstacle.
pub const OBSTACLE_SIZE: Vec2 = Vec2::new(48.0, 180.0);

#[derive(Debug, Clone)]
pub struct Obstacle {
    position: Vec2,
    enabled: bool,
    visible: bool,
}

impl Obstacle {
    /// Creates a hidden, disabled obstacle at the origin.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            enabled: false,
            visible: false,
        }
    }

    /// Places the obstacle `U[min_spacing, max_spacing]` to the right of
    /// `previous_x`, at a random height within `vertical`.
    ///
    /// A `max_spacing` below `min_spacing` collapses the range to
    /// `min_spacing`.
    pub fn generate_random_position<R: Rng + ?Sized>(
        &mut self,
        previous_x: f32,
        min_spacing: f32,
        max_spacing: f32,
        vertical: RangeInclusive<f32>,
        rng: &mut R,
    ) {
        let max_spacing = max_spacing.max(min_spacing);
        let spacing = if max_spacing > min_spacing {
            rng.gen_range(min_spacing..=max_spacing)
        } else {
            min_spacing
        };

        let (top, bottom) = vertical.into_inner();
        let y = if bottom > top { rng.gen_range(top..=bottom) } else { top };

        self.position = Vec2::new(previous_x + spacing, y);
    }

    /// Scrolls left at `stage_speed`; hides itself once off the left edge.
    pub fn update(&mut self, dt: f32, stage_speed: Vec2) {
        if !self.enabled {
            return;
        }

        self.position.x -= stage_speed.x * dt;

        if self.bounds().right() <= 0.0 {
            self.hide();
        }
    }

    pub fn show(&mut self) {
        self.activate();
    }

    pub fn hide(&mut self) {
        self.enabled = false;
        self.visible = false;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, OBSTACLE_SIZE)
    }

    pub fn layer(&self) -> f32 {
        OBSTACLE_LAYER
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

impl Default for Obstacle {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Obstacle {
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
