//! Memory Room game state: data structures only, no rules.
//!
//! `GameState` is the single source of truth for a play session. Transient
//! presentation state (open overlay, displayed message, code being typed)
//! lives next to it in `UiState` so that a reset can drop both at once.

use serde::Serialize;

use super::catalog::ItemId;

// ── Phase / Scene ────────────────────────────────────────────

/// Coarse progression gate. Only moves forward, except on reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Phase {
    #[default]
    Title,
    Story,
    Playing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SceneId {
    #[default]
    Entrance,
    Desk,
    Bed,
    Bathroom,
}

/// Scene cycle order used by next/previous navigation.
pub const ALL_SCENES: [SceneId; 4] = [
    SceneId::Entrance,
    SceneId::Desk,
    SceneId::Bed,
    SceneId::Bathroom,
];

impl SceneId {
    fn index(self) -> usize {
        match self {
            SceneId::Entrance => 0,
            SceneId::Desk => 1,
            SceneId::Bed => 2,
            SceneId::Bathroom => 3,
        }
    }

    pub fn next(self) -> SceneId {
        ALL_SCENES[(self.index() + 1) % ALL_SCENES.len()]
    }

    pub fn prev(self) -> SceneId {
        ALL_SCENES[(self.index() + ALL_SCENES.len() - 1) % ALL_SCENES.len()]
    }

    pub fn step(self, direction: Direction) -> SceneId {
        match direction {
            Direction::Next => self.next(),
            Direction::Prev => self.prev(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

// ── Endings ──────────────────────────────────────────────────

/// Terminal narrative outcome. `GameState::ending == None` while exploring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Ending {
    Normal,
    Bad1,
    Happy,
    Bad2,
    Perfect,
}

// ── Locks ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum LockId {
    Laptop,
    Cabinet,
    Door,
    LaptopFolder,
    Nightstand,
}

/// One flag per lockable fixture; `true` means locked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LockFlags {
    pub laptop: bool,
    pub cabinet: bool,
    /// Never locked in this revision of the room; see DESIGN.md.
    pub door: bool,
    pub laptop_folder: bool,
    pub nightstand: bool,
}

impl Default for LockFlags {
    fn default() -> Self {
        Self {
            laptop: true,
            cabinet: true,
            door: false,
            laptop_folder: true,
            nightstand: true,
        }
    }
}

impl LockFlags {
    pub fn is_locked(&self, lock: LockId) -> bool {
        match lock {
            LockId::Laptop => self.laptop,
            LockId::Cabinet => self.cabinet,
            LockId::Door => self.door,
            LockId::LaptopFolder => self.laptop_folder,
            LockId::Nightstand => self.nightstand,
        }
    }

    /// Returns true if the lock was closed before this call.
    pub fn unlock(&mut self, lock: LockId) -> bool {
        let flag = match lock {
            LockId::Laptop => &mut self.laptop,
            LockId::Cabinet => &mut self.cabinet,
            LockId::Door => &mut self.door,
            LockId::LaptopFolder => &mut self.laptop_folder,
            LockId::Nightstand => &mut self.nightstand,
        };
        std::mem::replace(flag, false)
    }
}

// ── Seen flags ───────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SeenFlag {
    Calendar,
    Chat,
    Bookshelf,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeenFlags {
    pub calendar: bool,
    pub chat: bool,
    pub bookshelf: bool,
}

impl SeenFlags {
    pub fn has_seen(&self, flag: SeenFlag) -> bool {
        match flag {
            SeenFlag::Calendar => self.calendar,
            SeenFlag::Chat => self.chat,
            SeenFlag::Bookshelf => self.bookshelf,
        }
    }

    /// Returns true on the first sighting only.
    pub fn mark(&mut self, flag: SeenFlag) -> bool {
        let seen = match flag {
            SeenFlag::Calendar => &mut self.calendar,
            SeenFlag::Chat => &mut self.chat,
            SeenFlag::Bookshelf => &mut self.bookshelf,
        };
        !std::mem::replace(seen, true)
    }
}

// ── Root Game State ──────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub phase: Phase,
    pub scene: SceneId,
    /// Insertion-ordered, no duplicates.
    pub inventory: Vec<ItemId>,
    pub locks: LockFlags,
    pub seen: SeenFlags,
    /// Equipped item. Always an inventory member.
    pub selected_item: Option<ItemId>,
    pub ending: Option<Ending>,
}

impl GameState {
    pub fn has_item(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    /// Append `item` unless it is already owned. Returns true if it was added.
    pub fn grant(&mut self, item: ItemId) -> bool {
        if self.has_item(item) {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Equip `item`, or unequip it if it is already equipped.
    /// Items the player does not own are ignored.
    pub fn toggle_selected(&mut self, item: ItemId) -> bool {
        if !self.has_item(item) {
            return false;
        }
        self.selected_item = if self.selected_item == Some(item) {
            None
        } else {
            Some(item)
        };
        true
    }

    pub fn is_equipped(&self, item: ItemId) -> bool {
        self.selected_item == Some(item)
    }

    pub fn is_terminal(&self) -> bool {
        self.ending.is_some()
    }

    /// Hotspots, navigation and locks only respond while this holds.
    pub fn is_exploring(&self) -> bool {
        self.phase == Phase::Playing && !self.is_terminal()
    }
}

// ── Transient UI State ───────────────────────────────────────

/// Narrative text for the presentation layer to show until dismissed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    pub title: String,
    pub content: String,
}

impl Message {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Full-screen picture revealed by a discovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Discovery {
    BookshelfPhoto,
}

/// Specialized screens drawn over the current scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Overlay {
    CodeLock(LockId),
    EndingChoice,
    LaptopDesktop,
    Inventory,
    ItemDetail(ItemId),
    Discovery(Discovery),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub message: Option<Message>,
    pub overlay: Option<Overlay>,
    /// Characters typed into the open code lock prompt.
    pub code_input: String,
    /// Story intro lines revealed so far.
    pub story_lines_shown: usize,
}

// ── Session ──────────────────────────────────────────────────

/// One play session: the owned game state plus its transient UI state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    state: GameState,
    pub ui: UiState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The single mutation entry point for game state. The closure runs to
    /// completion before anything else can observe the state.
    pub fn update<R>(&mut self, transform: impl FnOnce(&mut GameState) -> R) -> R {
        transform(&mut self.state)
    }

    pub fn show(&mut self, message: Message) {
        self.ui.message = Some(message);
    }

    pub fn open(&mut self, overlay: Overlay) {
        self.ui.code_input.clear();
        self.ui.overlay = Some(overlay);
    }

    /// Replace everything with a fresh session.
    pub fn reset(&mut self) {
        *self = Session::default();
    }
}
