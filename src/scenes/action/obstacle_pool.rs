//=========================================================================
// Obstacle Pool
//=========================================================================
//
// Fixed ring of recyclable obstacles. Obstacles are never created or
// destroyed after construction; one that scrolls off the left edge hides
// itself and is placed again ahead of the frontmost obstacle.
//
// Placement order:
//   slot 0      → after the last slot
//   slot i > 0  → after slot i - 1
//
// Gap: U[min_spacing, max_spacing × speed_ratio], so gaps widen as the
// stage speeds up and on-screen density stays roughly constant.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use rand::Rng;

//=== Internal Dependencies ===============================================

use crate::core::globals::Stage;
use crate::scenes::components::{
    Component, Obstacle, BORDER_HEIGHT, HELICOPTER_FRAME_SIZE, OBSTACLE_SIZE,
};

//=== Constants ===========================================================

/// The pool holds `NUMBER_OF_OBSTACLES + 1` obstacles.
pub const NUMBER_OF_OBSTACLES: usize = 7;

//=== ObstaclePool ========================================================

#[derive(Debug, Clone)]
pub struct ObstaclePool {
    obstacles: Vec<Obstacle>,
    min_spacing: f32,
    max_spacing: f32,
    vertical: (f32, f32),
}

impl ObstaclePool {
    /// Builds the pool with every obstacle hidden and laid out to the
    /// right of the stage, slot 0 exactly at the right edge.
    pub fn new<R: Rng + ?Sized>(stage: &Stage, rng: &mut R) -> Self {
        let min_spacing = HELICOPTER_FRAME_SIZE.x * 1.15 + OBSTACLE_SIZE.x;
        let vertical = (
            BORDER_HEIGHT,
            (stage.height() - BORDER_HEIGHT - OBSTACLE_SIZE.y).max(BORDER_HEIGHT),
        );

        let mut pool = Self {
            obstacles: Vec::with_capacity(NUMBER_OF_OBSTACLES + 1),
            min_spacing,
            max_spacing: min_spacing * 2.0,
            vertical,
        };

        let mut previous_x: Option<f32> = None;
        for _ in 0..=NUMBER_OF_OBSTACLES {
            let mut obstacle = Obstacle::new();
            match previous_x {
                None => obstacle.generate_random_position(
                    stage.width(), 0.0, 0.0, pool.vertical_range(), rng,
                ),
                Some(x) => obstacle.generate_random_position(
                    x, pool.min_spacing, pool.max_spacing, pool.vertical_range(), rng,
                ),
            }
            previous_x = Some(obstacle.position().x);
            pool.obstacles.push(obstacle);
        }

        pool
    }

    //--- Recycling --------------------------------------------------------

    /// Repositions every disabled obstacle and returns how many moved.
    ///
    /// Outside a reset, repositioned obstacles are shown again. During a
    /// reset they stay hidden and slot 0 restarts at the stage's right
    /// edge.
    pub fn recycle<R: Rng + ?Sized>(
        &mut self,
        speed_ratio: f32,
        game_reset: bool,
        stage: &Stage,
        rng: &mut R,
    ) -> usize {
        let min_spacing = self.min_spacing;
        let max_spacing = self.max_spacing * speed_ratio;
        let vertical = self.vertical_range();
        let last = self.obstacles.len() - 1;
        let mut recycled = 0;

        for i in 0..self.obstacles.len() {
            if self.obstacles[i].is_enabled() {
                continue;
            }

            if game_reset && i == 0 {
                self.obstacles[i].generate_random_position(
                    stage.width(), 0.0, 0.0, vertical.clone(), rng,
                );
            } else {
                let anchor = if i == 0 { last } else { i - 1 };
                let previous_x = self.obstacles[anchor].position().x;
                self.obstacles[i].generate_random_position(
                    previous_x, min_spacing, max_spacing, vertical.clone(), rng,
                );
            }

            if !game_reset {
                self.obstacles[i].show();
            }

            recycled += 1;
        }

        recycled
    }

    //--- Per-Tick ---------------------------------------------------------

    /// Scrolls every enabled obstacle.
    pub fn update(&mut self, dt: f32, stage_speed: Vec2) {
        for obstacle in &mut self.obstacles {
            obstacle.update(dt, stage_speed);
        }
    }

    pub fn hide_all(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.hide();
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.iter_mut()
    }

    /// Largest x position in the pool.
    pub fn frontmost_x(&self) -> f32 {
        self.obstacles
            .iter()
            .map(|o| o.position().x)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn min_spacing(&self) -> f32 {
        self.min_spacing
    }

    pub fn max_spacing(&self) -> f32 {
        self.max_spacing
    }

    fn vertical_range(&self) -> std::ops::RangeInclusive<f32> {
        self.vertical.0..=self.vertical.1
    }

    #[cfg(test)]
    pub(crate) fn get_mut(&mut self, index: usize) -> &mut Obstacle {
        &mut self.obstacles[index]
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
