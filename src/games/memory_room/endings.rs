//! Ending resolver.
//!
//! The main door opens a menu of destinations. Which entries appear depends
//! on what the player has found; which ending an entry leads to can depend
//! on what is equipped at the moment of choosing.

use super::catalog::ItemId;
use super::state::{Ending, GameState, Overlay, SeenFlag, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Her workplace.
    Workplace,
    /// Her male friend's apartment.
    FriendHouse,
    Hospital,
    /// Leave a breakup letter and go.
    LeaveNote,
    /// Close the menu and keep exploring.
    Stay,
}

/// Menu order; gated entries are skipped when not offered.
pub const MENU_ORDER: [Destination; 5] = [
    Destination::Workplace,
    Destination::FriendHouse,
    Destination::Hospital,
    Destination::LeaveNote,
    Destination::Stay,
];

impl Destination {
    pub fn label(self) -> &'static str {
        match self {
            Destination::Workplace => "去她工作地點找她",
            Destination::FriendHouse => "去她異性朋友家找她",
            Destination::Hospital => "去醫院找她",
            Destination::LeaveNote => "留下分手信離開這裡",
            Destination::Stay => "繼續探索",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Destination::Workplace => "🏙️",
            Destination::FriendHouse => "🏠",
            Destination::Hospital => "🏥",
            Destination::LeaveNote => "✉️",
            Destination::Stay => "↩",
        }
    }
}

pub fn is_offered(state: &GameState, destination: Destination) -> bool {
    match destination {
        Destination::Hospital => state.has_item(ItemId::TestReport),
        Destination::FriendHouse => state.seen.has_seen(SeenFlag::Chat),
        Destination::Workplace | Destination::LeaveNote | Destination::Stay => true,
    }
}

/// Destinations currently on the menu, in display order.
pub fn offered(state: &GameState) -> Vec<Destination> {
    MENU_ORDER
        .into_iter()
        .filter(|&d| is_offered(state, d))
        .collect()
}

/// Ending a destination leads to right now. `None` for staying.
pub fn resolve(state: &GameState, destination: Destination) -> Option<Ending> {
    match destination {
        Destination::Workplace => Some(Ending::Normal),
        Destination::FriendHouse => Some(Ending::Bad1),
        Destination::Hospital if state.is_equipped(ItemId::MaleShirt) => Some(Ending::Perfect),
        Destination::Hospital => Some(Ending::Happy),
        Destination::LeaveNote => Some(Ending::Bad2),
        Destination::Stay => None,
    }
}

/// Apply a menu choice. Only valid while the choice prompt is open and the
/// destination is on offer; returns false otherwise.
pub fn choose(session: &mut Session, destination: Destination) -> bool {
    if !session.state().is_exploring() || session.ui.overlay != Some(Overlay::EndingChoice) {
        return false;
    }
    if !is_offered(session.state(), destination) {
        tracing::debug!(?destination, "destination not offered");
        return false;
    }

    match resolve(session.state(), destination) {
        Some(ending) => {
            session.update(|s| s.ending = Some(ending));
            session.ui.overlay = None;
            session.ui.message = None;
            tracing::info!(?destination, ?ending, "ending reached");
        }
        None => session.ui.overlay = None,
    }
    true
}
