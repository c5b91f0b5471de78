/// Game trait and game construction.

pub mod memory_room;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::config::AssetConfig;
use crate::input::{ClickState, InputEvent};

/// What the host loop needs from a game.
pub trait Game {
    /// Handle an input event. Returns true if the event was consumed.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Advance timed presentation by `delta_ticks` reveal ticks.
    fn tick(&mut self, delta_ticks: u32);

    /// Whether the game is waiting on ticks right now. The host stops its
    /// clock while this is false.
    fn is_animating(&self) -> bool {
        false
    }

    /// Render into `area`, registering click targets as it goes.
    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);
}

pub fn create_game(config: AssetConfig) -> Box<dyn Game> {
    Box::new(memory_room::MemoryRoomGame::new(config))
}
