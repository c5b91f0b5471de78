//! Semantic action IDs for Memory Room click targets.

// ── Scene ────────────────────────────────────────────────────
pub const HOTSPOT_BASE: u16 = 10; // +index into the scene's hotspot list
pub const SCENE_PREV: u16 = 30;
pub const SCENE_NEXT: u16 = 31;
pub const OPEN_INVENTORY: u16 = 32;

// ── Inventory / item detail ──────────────────────────────────
pub const ITEM_BASE: u16 = 40; // +inventory index
pub const EQUIP_TOGGLE: u16 = 50;

// ── Ending choice ────────────────────────────────────────────
pub const CHOICE_BASE: u16 = 60; // +index into the offered destinations

// ── Laptop desktop ───────────────────────────────────────────
pub const LAPTOP_APP_BASE: u16 = 70; // +index into LAPTOP_APPS

// ── Code lock ────────────────────────────────────────────────
pub const CODE_SUBMIT: u16 = 80;
pub const CODE_ERASE: u16 = 81;
/// Keypad keys carry their ASCII code: `KEYPAD_BASE + ch as u16`.
pub const KEYPAD_BASE: u16 = 200;

// ── Shared ───────────────────────────────────────────────────
pub const CLOSE_OVERLAY: u16 = 100;
pub const DISMISS_MESSAGE: u16 = 101;

// ── Title / story / ending ───────────────────────────────────
pub const START_GAME: u16 = 110;
pub const SKIP_STORY: u16 = 111;
pub const BEGIN_PLAYING: u16 = 112;
pub const RESTART: u16 = 120;

pub fn keypad_id(ch: char) -> u16 {
    KEYPAD_BASE + ch as u16
}

/// Inverse of [`keypad_id`]. Only ASCII keys are ever registered.
pub fn keypad_char(action_id: u16) -> Option<char> {
    let code = action_id.checked_sub(KEYPAD_BASE)?;
    if code > 0x7f {
        return None;
    }
    char::from_u32(code as u32)
}
