//! Memory Room: explore her apartment, open what she locked, and decide
//! where to go looking for her.

pub mod actions;
pub mod catalog;
pub mod endings;
pub mod hotspots;
pub mod locks;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::config::AssetConfig;
use crate::games::Game;
use crate::input::{ClickState, InputEvent};

use actions::*;
use catalog::{scene_info, LAPTOP_APPS};
use state::{Direction, Ending, Overlay, Phase, Session};

/// What currently owns the screen and the input. Earlier variants win.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Ending(Ending),
    Message,
    Title,
    Story,
    Overlay(Overlay),
    Scene,
}

pub fn screen(session: &Session) -> Screen {
    let state = session.state();
    if let Some(ending) = state.ending {
        return Screen::Ending(ending);
    }
    if session.ui.message.is_some() {
        return Screen::Message;
    }
    match state.phase {
        Phase::Title => Screen::Title,
        Phase::Story => Screen::Story,
        Phase::Playing => match session.ui.overlay {
            Some(overlay) => Screen::Overlay(overlay),
            None => Screen::Scene,
        },
    }
}

pub struct MemoryRoomGame {
    pub session: Session,
    pub config: AssetConfig,
}

impl MemoryRoomGame {
    pub fn new(config: AssetConfig) -> Self {
        Self {
            session: Session::new(),
            config,
        }
    }

    fn nth_hotspot(&mut self, index: usize) -> bool {
        let scene = scene_info(self.session.state().scene);
        match scene.hotspots.get(index) {
            Some(&object) => logic::interact(&mut self.session, object),
            None => false,
        }
    }

    fn nth_item(&mut self, index: usize) -> bool {
        match self.session.state().inventory.get(index).copied() {
            Some(item) => logic::examine_item(&mut self.session, item),
            None => false,
        }
    }

    fn nth_destination(&mut self, index: usize) -> bool {
        match endings::offered(self.session.state()).get(index) {
            Some(&destination) => logic::choose_ending(&mut self.session, Some(destination)),
            None => false,
        }
    }

    fn nth_app(&mut self, index: usize) -> bool {
        match LAPTOP_APPS.get(index) {
            Some(&app) => logic::interact(&mut self.session, app),
            None => false,
        }
    }

    fn advance_story(&mut self) -> bool {
        if logic::story_complete(&self.session) {
            logic::begin_playing(&mut self.session)
        } else {
            logic::skip_story(&mut self.session)
        }
    }

    fn back(&mut self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::EndingChoice => logic::choose_ending(&mut self.session, None),
            _ => logic::close_overlay(&mut self.session),
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match screen(&self.session) {
            Screen::Ending(_) => match action_id {
                RESTART => {
                    logic::reset(&mut self.session);
                    true
                }
                _ => false,
            },
            Screen::Message => match action_id {
                DISMISS_MESSAGE => logic::dismiss_message(&mut self.session),
                _ => false,
            },
            Screen::Title => match action_id {
                START_GAME => logic::start(&mut self.session),
                _ => false,
            },
            Screen::Story => match action_id {
                SKIP_STORY => logic::skip_story(&mut self.session),
                BEGIN_PLAYING => logic::begin_playing(&mut self.session),
                _ => false,
            },
            Screen::Overlay(overlay) => self.handle_overlay_click(overlay, action_id),
            Screen::Scene => match action_id {
                id if (HOTSPOT_BASE..HOTSPOT_BASE + 10).contains(&id) => {
                    self.nth_hotspot((id - HOTSPOT_BASE) as usize)
                }
                SCENE_PREV => logic::change_scene(&mut self.session, Direction::Prev),
                SCENE_NEXT => logic::change_scene(&mut self.session, Direction::Next),
                OPEN_INVENTORY => logic::open_inventory(&mut self.session),
                _ => false,
            },
        }
    }

    fn handle_overlay_click(&mut self, overlay: Overlay, action_id: u16) -> bool {
        if action_id == CLOSE_OVERLAY {
            return self.back(overlay);
        }
        match overlay {
            Overlay::CodeLock(_) => match action_id {
                CODE_SUBMIT => {
                    logic::submit_current_code(&mut self.session);
                    true
                }
                CODE_ERASE => logic::erase_code_char(&mut self.session),
                id => match keypad_char(id) {
                    Some(ch) => logic::type_code_char(&mut self.session, ch),
                    None => false,
                },
            },
            Overlay::EndingChoice => match action_id {
                id if (CHOICE_BASE..CHOICE_BASE + 10).contains(&id) => {
                    self.nth_destination((id - CHOICE_BASE) as usize)
                }
                _ => false,
            },
            Overlay::LaptopDesktop => match action_id {
                id if (LAPTOP_APP_BASE..LAPTOP_APP_BASE + 10).contains(&id) => {
                    self.nth_app((id - LAPTOP_APP_BASE) as usize)
                }
                _ => false,
            },
            Overlay::Inventory => match action_id {
                id if (ITEM_BASE..ITEM_BASE + 10).contains(&id) => {
                    self.nth_item((id - ITEM_BASE) as usize)
                }
                _ => false,
            },
            Overlay::ItemDetail(item) => match action_id {
                EQUIP_TOGGLE => logic::select_item(&mut self.session, item),
                _ => false,
            },
            Overlay::Discovery(_) => false,
        }
    }

    fn handle_key(&mut self, event: &InputEvent) -> bool {
        match screen(&self.session) {
            Screen::Ending(_) => match event {
                InputEvent::Key('r' | 'R') => {
                    logic::reset(&mut self.session);
                    true
                }
                _ => false,
            },
            Screen::Message => match event {
                InputEvent::Key('0' | ' ') | InputEvent::Enter | InputEvent::Escape => {
                    logic::dismiss_message(&mut self.session)
                }
                _ => false,
            },
            Screen::Title => match event {
                InputEvent::Key('1' | ' ') | InputEvent::Enter => logic::start(&mut self.session),
                _ => false,
            },
            Screen::Story => match event {
                InputEvent::Key('1' | ' ') | InputEvent::Enter => self.advance_story(),
                _ => false,
            },
            Screen::Overlay(overlay) => self.handle_overlay_key(overlay, event),
            Screen::Scene => match event {
                InputEvent::Key(c @ '1'..='9') => self.nth_hotspot(digit_index(*c)),
                InputEvent::Key('a' | '<' | 'h') => {
                    logic::change_scene(&mut self.session, Direction::Prev)
                }
                InputEvent::Key('d' | '>' | 'l') => {
                    logic::change_scene(&mut self.session, Direction::Next)
                }
                InputEvent::Key('i') => logic::open_inventory(&mut self.session),
                _ => false,
            },
        }
    }

    fn handle_overlay_key(&mut self, overlay: Overlay, event: &InputEvent) -> bool {
        // Digits are code input on the lock prompt, so it only closes on Esc.
        if let Overlay::CodeLock(_) = overlay {
            return match event {
                InputEvent::Key(c) => logic::type_code_char(&mut self.session, *c),
                InputEvent::Backspace => logic::erase_code_char(&mut self.session),
                InputEvent::Enter => {
                    logic::submit_current_code(&mut self.session);
                    true
                }
                InputEvent::Escape => self.back(overlay),
                InputEvent::Click(_) => false,
            };
        }

        if matches!(event, InputEvent::Key('0') | InputEvent::Escape) {
            return self.back(overlay);
        }
        match (overlay, event) {
            (Overlay::EndingChoice, InputEvent::Key(c @ '1'..='9')) => {
                self.nth_destination(digit_index(*c))
            }
            (Overlay::LaptopDesktop, InputEvent::Key(c @ '1'..='9')) => {
                self.nth_app(digit_index(*c))
            }
            (Overlay::Inventory, InputEvent::Key(c @ '1'..='9')) => self.nth_item(digit_index(*c)),
            (Overlay::Inventory, InputEvent::Key('i')) => self.back(overlay),
            (Overlay::ItemDetail(item), InputEvent::Key('1') | InputEvent::Enter) => {
                logic::select_item(&mut self.session, item)
            }
            (Overlay::Discovery(_), InputEvent::Key(' ') | InputEvent::Enter) => self.back(overlay),
            _ => false,
        }
    }
}

fn digit_index(c: char) -> usize {
    c.to_digit(10).map_or(0, |d| d as usize).saturating_sub(1)
}

impl Game for MemoryRoomGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        let consumed = match event {
            InputEvent::Click(id) => self.handle_click(*id),
            other => self.handle_key(other),
        };
        if consumed {
            match logic::snapshot(&self.session) {
                Ok(json) => tracing::trace!(state = %json, "input handled"),
                Err(err) => tracing::warn!(%err, "state snapshot failed"),
            }
        }
        consumed
    }

    fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.session, delta_ticks);
    }

    fn is_animating(&self) -> bool {
        self.session.state().phase == Phase::Story && !logic::story_complete(&self.session)
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.session, &self.config, f, area, click_state);
    }
}
