//! Lock / puzzle resolver.
//!
//! Three kinds of lock: four-digit passcodes, a key item that must be
//! equipped, and a case-insensitive password. There is no retry limit and
//! a wrong answer never touches game state.

use super::catalog::ItemId;
use super::state::{LockId, Message, Overlay, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockKind {
    Numeric { code: &'static str },
    KeyItem { key: ItemId, reward: ItemId },
    Text { secret: &'static str },
}

/// Mechanism guarding each fixture. The door has none in this revision.
pub fn lock_kind(lock: LockId) -> Option<LockKind> {
    match lock {
        LockId::Laptop => Some(LockKind::Numeric { code: "0921" }),
        LockId::Nightstand => Some(LockKind::Numeric { code: "1225" }),
        LockId::Cabinet => Some(LockKind::KeyItem {
            key: ItemId::CabinetKey,
            reward: ItemId::HeartKey,
        }),
        LockId::LaptopFolder => Some(LockKind::Text { secret: "kael" }),
        LockId::Door => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Opened,
    Rejected,
    AlreadyOpen,
    /// The lock does not take this kind of answer, or play is not running.
    Unsupported,
}

/// Longest input the code prompt accepts for `lock`.
pub fn max_input_len(lock: LockId) -> usize {
    match lock_kind(lock) {
        Some(LockKind::Numeric { code }) => code.len(),
        Some(LockKind::Text { .. }) => 16,
        _ => 0,
    }
}

pub fn accepts_char(lock: LockId, ch: char) -> bool {
    match lock_kind(lock) {
        Some(LockKind::Numeric { .. }) => ch.is_ascii_digit(),
        Some(LockKind::Text { .. }) => ch.is_ascii_alphanumeric(),
        _ => false,
    }
}

fn is_four_digits(code: &str) -> bool {
    code.len() == 4 && code.bytes().all(|b| b.is_ascii_digit())
}

/// Pure check of a typed answer against a lock's solution.
pub fn code_matches(kind: LockKind, code: &str) -> bool {
    match kind {
        LockKind::Numeric { code: expected } => is_four_digits(code) && code == expected,
        LockKind::Text { secret } => code.trim().eq_ignore_ascii_case(secret),
        LockKind::KeyItem { .. } => false,
    }
}

/// Validate a typed code for a passcode or password lock.
pub fn submit_code(session: &mut Session, lock: LockId, code: &str) -> Verdict {
    if !session.state().is_exploring() {
        return Verdict::Unsupported;
    }
    let kind = match lock_kind(lock) {
        Some(kind @ (LockKind::Numeric { .. } | LockKind::Text { .. })) => kind,
        _ => return Verdict::Unsupported,
    };
    if !session.state().locks.is_locked(lock) {
        return Verdict::AlreadyOpen;
    }

    if !code_matches(kind, code) {
        tracing::debug!(?lock, "wrong code");
        session.ui.code_input.clear();
        session.show(failure_message(lock));
        return Verdict::Rejected;
    }

    session.update(|s| s.locks.unlock(lock));
    tracing::info!(?lock, "unlocked");
    session.ui.code_input.clear();
    session.ui.overlay = overlay_after_unlock(lock);
    session.show(success_message(lock));
    Verdict::Opened
}

/// Try the equipped item against a key-item lock.
pub fn use_key(session: &mut Session, lock: LockId) -> Verdict {
    if !session.state().is_exploring() {
        return Verdict::Unsupported;
    }
    let Some(LockKind::KeyItem { key, reward }) = lock_kind(lock) else {
        return Verdict::Unsupported;
    };
    if !session.state().locks.is_locked(lock) {
        return Verdict::AlreadyOpen;
    }

    if !session.state().is_equipped(key) {
        session.show(failure_message(lock));
        return Verdict::Rejected;
    }

    session.update(|s| {
        s.locks.unlock(lock);
        s.grant(reward);
    });
    tracing::info!(?lock, %reward, "unlocked with key");
    session.show(success_message(lock));
    Verdict::Opened
}

/// Where the player lands after a code prompt succeeds.
fn overlay_after_unlock(lock: LockId) -> Option<Overlay> {
    match lock {
        LockId::LaptopFolder => Some(Overlay::LaptopDesktop),
        _ => None,
    }
}

fn success_message(lock: LockId) -> Message {
    match lock {
        LockId::Laptop => Message::new("解鎖成功", "電腦解鎖了。"),
        LockId::Nightstand => Message::new("解鎖成功", "床頭櫃的鎖「喀」的一聲彈開了。"),
        LockId::LaptopFolder => Message::new("解鎖成功", "資料夾打開了。"),
        LockId::Cabinet => Message::new("打開了矮櫃", "矮櫃裡放著一把【小鑰匙】。"),
        LockId::Door => Message::new("房門", "門開著。"),
    }
}

fn failure_message(lock: LockId) -> Message {
    match lock {
        LockId::Laptop => Message::new("密碼錯誤", "這不是正確的日期。"),
        LockId::Nightstand => Message::new("密碼錯誤", "鎖沒有任何反應。"),
        LockId::LaptopFolder => Message::new("密碼錯誤", "Password incorrect."),
        LockId::Cabinet => Message::new("矮櫃", "矮櫃上鎖了，需要一把特定的鑰匙。"),
        LockId::Door => Message::new("房門", "門鎖住了。"),
    }
}

/// Prompt hint shown under the code input.
pub fn lock_hint(lock: LockId) -> &'static str {
    match lock {
        LockId::Laptop => "Hint: A date drawn with a heart on the calendar.",
        LockId::Nightstand => "Hint: 我們決定在一起的日子。",
        LockId::LaptopFolder => "Hint: 她最常喊的那個名字。",
        LockId::Cabinet | LockId::Door => "",
    }
}
