//=========================================================================
// Info Scene
//=========================================================================
//
// Static text screens reached from the menu: How To Play, Help and
// Credits. Each one shows a heading on the title line and a block of
// body text. The scene never reads input; Escape is handled by the
// scene manager, which sends the player back to the menu.
//
//=========================================================================

use glam::Vec2;

use crate::core::globals::{
    Color, GameContext, HELP_TEXT_COLOR, TITLE_POSITION_Y, TITLE_TEXT_COLOR,
};
use crate::core::scene::{Scene, Tick};
use crate::scenes::components::TextDisplay;

const HOW_TO_PLAY: &[&str] = &[
    "Click to start flying.",
    "Hold the left mouse button to climb, release it to fall.",
    "Avoid the borders and the obstacles.",
    "Space pauses the game, Escape returns to the menu.",
];

const HELP: &[&str] = &[
    "Menu: arrow keys to move, Enter to select.",
    "High scores: type up to three letters, Enter to save.",
];

const CREDITS: &[&str] = &[
    "Helicopter Madness",
    "Game design and programming: the Helicopter Madness team",
];

/// A static text screen; only Escape (handled by the scene manager)
/// leaves it.
pub struct InfoScene {
    heading: TextDisplay,
    lines: &'static [&'static str],
    enabled: bool,
}

impl InfoScene {
    /// The heading sits on the title line; the renderer centres it
    /// horizontally.
    pub fn new(title: &'static str, lines: &'static [&'static str]) -> Self {
        Self {
            heading: TextDisplay::new(Vec2::new(0.0, TITLE_POSITION_Y), TITLE_TEXT_COLOR)
                .with_message(title),
            lines,
            enabled: false,
        }
    }

    pub fn how_to_play() -> Self {
        Self::new("How To Play", HOW_TO_PLAY)
    }

    pub fn help() -> Self {
        Self::new("Help", HELP)
    }

    pub fn credits() -> Self {
        Self::new("Credits", CREDITS)
    }

    pub fn title(&self) -> &str {
        self.heading.message()
    }

    pub fn heading(&self) -> &TextDisplay {
        &self.heading
    }

    pub fn lines(&self) -> &[&'static str] {
        self.lines
    }

    pub fn text_color(&self) -> Color {
        HELP_TEXT_COLOR
    }
}

impl Scene for InfoScene {
    fn show(&mut self) {
        self.enabled = true;
    }

    fn hide(&mut self) {
        self.enabled = false;
    }

    fn update(&mut self, _context: &mut GameContext, _tick: &Tick) {}

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn caption(&self) -> String {
        format!("{}: {}", self.title(), self.lines.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_screens_have_titles_and_text() {
        for scene in [InfoScene::how_to_play(), InfoScene::help(), InfoScene::credits()] {
            assert!(!scene.title().is_empty());
            assert!(!scene.lines().is_empty());
            assert!(scene.caption().starts_with(scene.title()));
        }
    }

    #[test]
    fn heading_sits_on_the_title_line() {
        let scene = InfoScene::credits();

        assert_eq!(scene.heading().message(), "Credits");
        assert_eq!(scene.heading().position().y, TITLE_POSITION_Y);
        assert_eq!(scene.heading().color(), TITLE_TEXT_COLOR);
        assert_eq!(scene.text_color(), HELP_TEXT_COLOR);
    }

    #[test]
    fn show_and_hide_toggle_enabled() {
        let mut scene = InfoScene::new("T", HELP);
        scene.show();
        assert!(scene.is_enabled());
        scene.hide();
        assert!(!scene.is_enabled());
    }
}
