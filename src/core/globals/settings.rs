//=========================================================================
// Shared Settings
//=========================================================================
//
// Constants shared by every scene: stage speed tuning, layer depths,
// text colours and name-entry limits. The mutable part (stage size,
// current speed, random generator) lives in `GameContext`.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Stage Speed =========================================================

/// Default horizontal scroll speed of the stage, in pixels per second.
pub const DEFAULT_STAGE_SPEED_X: f32 = 540.0;

/// Upper bound of the stage speed as a multiple of the default.
pub const MAX_STAGE_SPEED_FACTOR: f32 = 2.0;

/// Multiplicative speed growth applied once per in-play tick.
pub const STAGE_SPEED_GROWTH: f32 = 1.0005;

//=== Layer Depths ========================================================

pub const OBSTACLE_LAYER: f32 = 0.76;
pub const BORDER_LAYER: f32 = 0.75;

//=== Text ================================================================

/// Maximum number of characters in a high-score name.
pub const MAX_NAME_CHARS: usize = 3;

/// Blink period for flashing text, in milliseconds.
pub const BLINK_RATE_MS: u32 = 100;

/// Vertical position of scene titles.
pub const TITLE_POSITION_Y: f32 = 52.0;

//=== Color ===============================================================

/// Plain RGB colour used by text displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_RED: Color = Color::rgb(139, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const AZURE: Color = Color::rgb(240, 255, 255);
    pub const GREEN_YELLOW: Color = Color::rgb(173, 255, 47);
    pub const WHITE_SMOKE: Color = Color::rgb(245, 245, 245);
}

pub const TITLE_TEXT_COLOR: Color = Color::BLACK;
pub const HIGHLIGHT_TEXT_COLOR: Color = Color::DARK_RED;
pub const NORMAL_TEXT_COLOR: Color = Color::YELLOW;
pub const HELP_TEXT_COLOR: Color = Color::AZURE;
pub const HIGHEST_SCORE_COLOR: Color = Color::GREEN_YELLOW;
pub const MESSAGE_TEXT_COLOR: Color = Color::WHITE_SMOKE;

//=== Stage ===============================================================

/// The stage coordinate space: `(0, 0)` top-left to `size` bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    size: Vec2,
}

impl Stage {
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "Stage dimensions must be positive, got {}x{}",
            width,
            height
        );
        Self { size: Vec2::new(width, height) }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }

    /// `true` if `point` lies inside the stage (edges inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.size.x && point.y <= self.size.y
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
