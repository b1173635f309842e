//=========================================================================
// Menu Scene
//=========================================================================
//
// Main menu. ArrowUp/ArrowDown move the highlight (wrapping), Enter
// selects. The scene manager collects the selection right after the
// menu's update through `take_selection`.
//
//=========================================================================

use log::debug;

use crate::core::globals::{Color, GameContext, HIGHLIGHT_TEXT_COLOR, NORMAL_TEXT_COLOR};
use crate::core::input::{EdgeDetector, KeyCode};
use crate::core::scene::{MenuItem, Scene, Tick};

pub struct MenuScene {
    enabled: bool,
    selected: usize,
    selection: Option<MenuItem>,
    edges: EdgeDetector,
}

impl MenuScene {
    pub fn new() -> Self {
        Self {
            enabled: false,
            selected: 0,
            selection: None,
            edges: EdgeDetector::new(),
        }
    }

    /// Entry currently highlighted.
    pub fn highlighted(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }

    /// Text colour for `item`: highlighted when selected.
    pub fn entry_color(&self, item: MenuItem) -> Color {
        if item == self.highlighted() {
            HIGHLIGHT_TEXT_COLOR
        } else {
            NORMAL_TEXT_COLOR
        }
    }

    /// Returns the entry chosen during the last update, if any.
    pub fn take_selection(&mut self) -> Option<MenuItem> {
        self.selection.take()
    }
}

impl Default for MenuScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for MenuScene {
    fn show(&mut self) {
        self.enabled = true;
        self.selection = None;
    }

    fn hide(&mut self) {
        self.enabled = false;
    }

    fn update(&mut self, _context: &mut GameContext, tick: &Tick) {
        if !self.enabled {
            return;
        }

        let input = &tick.input;
        let count = MenuItem::ALL.len();

        if self.edges.key_pressed(input, KeyCode::ArrowDown) {
            self.selected = (self.selected + 1) % count;
        }
        if self.edges.key_pressed(input, KeyCode::ArrowUp) {
            self.selected = (self.selected + count - 1) % count;
        }
        if self.edges.key_pressed(input, KeyCode::Enter) {
            debug!("menu: selected {:?}", self.highlighted());
            self.selection = Some(self.highlighted());
        }

        self.edges.latch(input);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn caption(&self) -> String {
        let entries: Vec<String> = MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == self.selected {
                    format!("[{}]", item.label())
                } else {
                    item.label().to_string()
                }
            })
            .collect();
        format!("Helicopter Madness  {}", entries.join("  "))
    }
}
