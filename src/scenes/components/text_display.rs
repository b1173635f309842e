//=========================================================================
// Text Display
//=========================================================================

use glam::Vec2;

use super::Component;
use crate::core::globals::Color;

/// A single line of on-screen text.
#[derive(Debug, Clone)]
pub struct TextDisplay {
    message: String,
    position: Vec2,
    color: Color,
    enabled: bool,
    visible: bool,
}

impl TextDisplay {
    pub fn new(position: Vec2, color: Color) -> Self {
        Self {
            message: String::new(),
            position,
            color,
            enabled: true,
            visible: true,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn clear(&mut self) {
        self.message.clear();
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Component for TextDisplay {
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
