//! Memory Room event handlers (no rendering / IO).
//!
//! Every handler takes the session, validates the event against the current
//! phase and overlay, and either applies it completely or leaves the session
//! untouched. Handlers return whether anything changed so the input layer
//! can tell consumed events from ignored ones.

use super::catalog::{ItemId, ObjectId, STORY_LINES};
use super::endings::{self, Destination};
use super::hotspots;
use super::locks::{self, Verdict};
use super::state::{Direction, LockId, Overlay, Phase, Session};

// ── Phases ───────────────────────────────────────────────────

/// Title → Story.
pub fn start(session: &mut Session) -> bool {
    if session.state().phase != Phase::Title {
        return false;
    }
    session.update(|s| s.phase = Phase::Story);
    session.ui.story_lines_shown = 0;
    true
}

pub fn story_complete(session: &Session) -> bool {
    session.ui.story_lines_shown >= STORY_LINES.len()
}

/// Reveal one more intro line. Driven by the reveal clock.
pub fn tick(session: &mut Session, delta_ticks: u32) {
    if delta_ticks == 0 || session.state().phase != Phase::Story || story_complete(session) {
        return;
    }
    session.ui.story_lines_shown += 1;
}

pub fn skip_story(session: &mut Session) -> bool {
    if session.state().phase != Phase::Story || story_complete(session) {
        return false;
    }
    session.ui.story_lines_shown = STORY_LINES.len();
    true
}

/// Story → Playing.
pub fn begin_playing(session: &mut Session) -> bool {
    if session.state().phase != Phase::Story {
        return false;
    }
    session.update(|s| s.phase = Phase::Playing);
    session.ui.story_lines_shown = STORY_LINES.len();
    tracing::info!("exploration started");
    true
}

// ── Exploration ──────────────────────────────────────────────

/// Interact with a hotspot. Objects out of reach are ignored.
pub fn interact(session: &mut Session, object: ObjectId) -> bool {
    hotspots::dispatch(session, object)
}

/// Move to the neighbouring scene. Leaving a scene closes whatever was open
/// on top of it.
pub fn change_scene(session: &mut Session, direction: Direction) -> bool {
    if !session.state().is_exploring() {
        return false;
    }
    session.update(|s| s.scene = s.scene.step(direction));
    session.ui.overlay = None;
    session.ui.code_input.clear();
    tracing::debug!(scene = ?session.state().scene, "scene changed");
    true
}

// ── Code locks ───────────────────────────────────────────────

pub fn submit_code(session: &mut Session, lock: LockId, code: &str) -> Verdict {
    locks::submit_code(session, lock, code)
}

/// Submit whatever has been typed into the open code prompt.
pub fn submit_current_code(session: &mut Session) -> Verdict {
    let Some(Overlay::CodeLock(lock)) = session.ui.overlay else {
        return Verdict::Unsupported;
    };
    let code = std::mem::take(&mut session.ui.code_input);
    submit_code(session, lock, &code)
}

pub fn type_code_char(session: &mut Session, ch: char) -> bool {
    let Some(Overlay::CodeLock(lock)) = session.ui.overlay else {
        return false;
    };
    if !locks::accepts_char(lock, ch)
        || session.ui.code_input.chars().count() >= locks::max_input_len(lock)
    {
        return false;
    }
    session.ui.code_input.push(ch);
    true
}

pub fn erase_code_char(session: &mut Session) -> bool {
    matches!(session.ui.overlay, Some(Overlay::CodeLock(_))) && session.ui.code_input.pop().is_some()
}

// ── Inventory ────────────────────────────────────────────────

pub fn open_inventory(session: &mut Session) -> bool {
    if !session.state().is_exploring() {
        return false;
    }
    session.open(Overlay::Inventory);
    true
}

/// Equip or unequip an owned item. Back to the scene afterwards so the item
/// can be used straight away.
pub fn select_item(session: &mut Session, item: ItemId) -> bool {
    if !session.state().is_exploring() || !session.update(|s| s.toggle_selected(item)) {
        return false;
    }
    tracing::debug!(selected = ?session.state().selected_item, "equipment changed");
    if matches!(
        session.ui.overlay,
        Some(Overlay::Inventory | Overlay::ItemDetail(_))
    ) {
        session.ui.overlay = None;
    }
    true
}

pub fn examine_item(session: &mut Session, item: ItemId) -> bool {
    if !session.state().is_exploring() || !session.state().has_item(item) {
        return false;
    }
    session.open(Overlay::ItemDetail(item));
    true
}

// ── Ending ───────────────────────────────────────────────────

/// `None` closes the choice prompt without leaving.
pub fn choose_ending(session: &mut Session, choice: Option<Destination>) -> bool {
    endings::choose(session, choice.unwrap_or(Destination::Stay))
}

// ── Overlays / messages ──────────────────────────────────────

/// Step back out of the open overlay. Nested screens return to their parent.
pub fn close_overlay(session: &mut Session) -> bool {
    let Some(overlay) = session.ui.overlay else {
        return false;
    };
    session.ui.code_input.clear();
    session.ui.overlay = match overlay {
        Overlay::CodeLock(LockId::LaptopFolder) => Some(Overlay::LaptopDesktop),
        Overlay::ItemDetail(_) => Some(Overlay::Inventory),
        Overlay::CodeLock(_)
        | Overlay::EndingChoice
        | Overlay::LaptopDesktop
        | Overlay::Inventory
        | Overlay::Discovery(_) => None,
    };
    true
}

pub fn dismiss_message(session: &mut Session) -> bool {
    session.ui.message.take().is_some()
}

pub fn reset(session: &mut Session) {
    session.reset();
    tracing::info!("session reset");
}

/// JSON snapshot of the game state for debug logging.
pub fn snapshot(session: &Session) -> Result<String, serde_json::Error> {
    serde_json::to_string(session.state())
}
