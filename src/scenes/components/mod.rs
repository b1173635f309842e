//=========================================================================
// Gameplay Components
//=========================================================================
//
// Entities owned by the action scene. Each one carries an `enabled`
// (updating) and `visible` (drawn, collidable) flag exposed through the
// `Component` trait, so the scene can toggle an explicit set of them
// without inspecting concrete types.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Module Declarations =================================================

mod border;
mod explosion;
mod helicopter;
mod obstacle;
mod text_display;

//=== Public API ==========================================================

pub use border::{Border, BORDER_HEIGHT};
pub use explosion::{
    Explosion, EXPLOSION_FRAME_COUNT, EXPLOSION_FRAME_DELAY, EXPLOSION_FRAME_SIZE,
};
pub use helicopter::{Helicopter, HELICOPTER_FRAME_SIZE};
pub use obstacle::{Obstacle, OBSTACLE_SIZE};
pub use text_display::TextDisplay;

//=== Component Trait =====================================================

/// Enable/visibility switches shared by every gameplay component.
pub trait Component {
    fn set_enabled(&mut self, enabled: bool);
    fn set_visible(&mut self, visible: bool);
    fn is_enabled(&self) -> bool;
    fn is_visible(&self) -> bool;

    /// Enables and shows the component.
    fn activate(&mut self) {
        self.set_enabled(true);
        self.set_visible(true);
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle in stage coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    /// Strict overlap; rectangles that only touch do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
