//=========================================================================
// Collision Manager
//=========================================================================
//
// Tests the helicopter against the stage borders and every visible
// obstacle once per tick. The manager owns none of the bodies; the
// action scene lends them to `update` each call.
//
// Borders span the full stage width, so they are tested as half-planes:
// a helicopter that moves past a border within a single long tick still
// counts as a hit.
//
//=========================================================================

use log::debug;

use crate::scenes::components::{Border, Component, Helicopter};

use super::obstacle_pool::ObstaclePool;

#[derive(Debug, Clone, Default)]
pub struct CollisionManager {
    enabled: bool,
}

impl CollisionManager {
    /// Creates a disabled manager; the action scene enables it on start.
    pub fn new() -> Self {
        Self { enabled: false }
    }

    /// Marks the helicopter crashed on its first collision.
    ///
    /// Returns `true` only on the tick that detected the crash. Does
    /// nothing while the manager or the helicopter is disabled, or after
    /// the helicopter has already crashed.
    pub fn update(
        &self,
        helicopter: &mut Helicopter,
        borders: [&Border; 2],
        obstacles: &ObstaclePool,
    ) -> bool {
        if !self.enabled || !helicopter.is_enabled() || helicopter.has_crashed() {
            return false;
        }

        let body = helicopter.bounds();

        let hit_border = borders.iter().filter(|b| b.is_visible()).any(|border| {
            let edge = border.bounds();
            if border.is_flipped() {
                body.bottom() > edge.top()
            } else {
                body.top() < edge.bottom()
            }
        });

        let hit_obstacle = obstacles
            .iter()
            .filter(|o| o.is_visible())
            .any(|o| o.bounds().intersects(&body));

        if hit_border || hit_obstacle {
            debug!(
                "helicopter crashed at ({:.0}, {:.0}) border={} obstacle={}",
                body.left(),
                body.top(),
                hit_border,
                hit_obstacle
            );
            helicopter.crash();
            return true;
        }

        false
    }
}

impl Component for CollisionManager {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The manager draws nothing.
    fn set_visible(&mut self, _visible: bool) {}

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_visible(&self) -> bool {
        false
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
