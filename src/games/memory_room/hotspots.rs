//! Hotspot dispatcher.
//!
//! Every interactive object is described by rows of `RULES`: a precondition
//! over the game state, the effects to apply and the message to show. Rows
//! for the same object are tried top to bottom and the first whose
//! conditions all hold wins, so the usual shape for a collectible is
//!
//! ```text
//! (object, [prerequisite missing])   -> flavor
//! (object, [Lacks(reward)])          -> Grant(reward) + "found it"
//! (object, [])                       -> "already taken" flavor
//! ```
//!
//! `Effect::Grant` goes through `GameState::grant`, which refuses
//! duplicates, so a repeated interaction can never hand out a reward twice.

use super::catalog::{ItemId, ObjectId};
use super::locks;
use super::state::{Discovery, GameState, LockId, Message, Overlay, SeenFlag, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Owns(ItemId),
    Lacks(ItemId),
    Seen(SeenFlag),
    Unseen(SeenFlag),
    Locked(LockId),
    Unlocked(LockId),
}

impl Condition {
    pub fn holds(self, state: &GameState) -> bool {
        match self {
            Condition::Owns(item) => state.has_item(item),
            Condition::Lacks(item) => !state.has_item(item),
            Condition::Seen(flag) => state.seen.has_seen(flag),
            Condition::Unseen(flag) => !state.seen.has_seen(flag),
            Condition::Locked(lock) => state.locks.is_locked(lock),
            Condition::Unlocked(lock) => !state.locks.is_locked(lock),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Grant(ItemId),
    See(SeenFlag),
    Open(Overlay),
    /// Hand over to the lock resolver with the equipped item.
    UseKey(LockId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Text {
    pub title: &'static str,
    pub content: &'static str,
}

impl From<Text> for Message {
    fn from(text: Text) -> Self {
        Message::new(text.title, text.content)
    }
}

#[derive(Debug)]
pub struct Rule {
    pub object: ObjectId,
    pub when: &'static [Condition],
    pub effects: &'static [Effect],
    pub text: Option<Text>,
}

const fn say(title: &'static str, content: &'static str) -> Option<Text> {
    Some(Text { title, content })
}

use Condition::*;
use Effect::*;

pub static RULES: &[Rule] = &[
    // ── Entrance ────────────────────────────────────────────
    Rule {
        object: ObjectId::MainDoor,
        when: &[],
        effects: &[Open(Overlay::EndingChoice)],
        text: None,
    },
    Rule {
        object: ObjectId::Sofa,
        when: &[],
        effects: &[],
        text: say("沙發", "舒服的沙發，是她省錢了好一陣子才買下手的。"),
    },
    Rule {
        object: ObjectId::Cabinet,
        when: &[Locked(LockId::Cabinet)],
        effects: &[UseKey(LockId::Cabinet)],
        text: None,
    },
    Rule {
        object: ObjectId::Cabinet,
        when: &[],
        effects: &[],
        text: say("矮櫃", "矮櫃已經打開了，裡面空空的。"),
    },
    Rule {
        object: ObjectId::Plant1,
        when: &[Unseen(SeenFlag::Bookshelf)],
        effects: &[],
        text: say("盆栽", "葉片還帶著淡淡的水氣。"),
    },
    Rule {
        object: ObjectId::Plant1,
        when: &[Seen(SeenFlag::Bookshelf), Lacks(ItemId::CabinetKey)],
        effects: &[Grant(ItemId::CabinetKey)],
        text: say(
            "獲得物品",
            "【矮櫃鑰匙】\n想起照片背面的字，我抬起盆栽，底下果然藏著一把鑰匙。",
        ),
    },
    Rule {
        object: ObjectId::Plant1,
        when: &[],
        effects: &[],
        text: say("盆栽", "盆栽底下已經什麼都沒有了。"),
    },
    // ── Desk ────────────────────────────────────────────────
    Rule {
        object: ObjectId::Bookshelf,
        when: &[Unseen(SeenFlag::Bookshelf)],
        effects: &[
            See(SeenFlag::Bookshelf),
            Open(Overlay::Discovery(Discovery::BookshelfPhoto)),
        ],
        text: None,
    },
    Rule {
        object: ObjectId::Bookshelf,
        when: &[],
        effects: &[],
        text: say("書櫃", "滿滿的書，記錄著這裡的時光。"),
    },
    Rule {
        object: ObjectId::Laptop,
        when: &[Locked(LockId::Laptop)],
        effects: &[Open(Overlay::CodeLock(LockId::Laptop))],
        text: None,
    },
    Rule {
        object: ObjectId::Laptop,
        when: &[],
        effects: &[Open(Overlay::LaptopDesktop)],
        text: None,
    },
    Rule {
        object: ObjectId::Diary,
        when: &[Lacks(ItemId::HeartKey)],
        effects: &[],
        text: say("日記本", "日記本上掛著一個心形的小鎖。"),
    },
    Rule {
        object: ObjectId::Diary,
        when: &[Owns(ItemId::HeartKey), Lacks(ItemId::DiaryPage)],
        effects: &[Grant(ItemId::DiaryPage)],
        text: say("獲得物品", "【日記的內容】\n小鑰匙剛好能打開日記本的鎖。"),
    },
    Rule {
        object: ObjectId::Diary,
        when: &[],
        effects: &[],
        text: say("日記本", "最後一頁寫著：「要給他一個生日驚喜」。"),
    },
    // ── Bed ─────────────────────────────────────────────────
    Rule {
        object: ObjectId::Photo,
        when: &[Lacks(ItemId::BirthdayCard)],
        effects: &[Grant(ItemId::BirthdayCard)],
        text: say("獲得物品", "【生日卡片】\n相框背後夾著一張卡片。"),
    },
    Rule {
        object: ObjectId::Photo,
        when: &[],
        effects: &[],
        text: say("合照", "那張照片裡，我們都笑得好燦爛。"),
    },
    Rule {
        object: ObjectId::Calendar,
        when: &[Unseen(SeenFlag::Calendar)],
        effects: &[See(SeenFlag::Calendar)],
        text: say("月曆", "九月份的 21 號那天畫了一個小小的心。"),
    },
    Rule {
        object: ObjectId::Calendar,
        when: &[],
        effects: &[],
        text: say("月曆", "那顆小小的心還在 9 月 21 日上。"),
    },
    Rule {
        object: ObjectId::Nightstand,
        when: &[Locked(LockId::Nightstand)],
        effects: &[Open(Overlay::CodeLock(LockId::Nightstand))],
        text: None,
    },
    Rule {
        object: ObjectId::Nightstand,
        when: &[Lacks(ItemId::MaleShirt)],
        effects: &[Grant(ItemId::MaleShirt)],
        text: say(
            "獲得物品",
            "【男用襯衫】\n抽屜裡放著一個包裝好的禮盒，裡面是一件深藍色的襯衫。",
        ),
    },
    Rule {
        object: ObjectId::Nightstand,
        when: &[],
        effects: &[],
        text: say("床頭櫃", "抽屜裡只剩下包裝紙。"),
    },
    // ── Bathroom ────────────────────────────────────────────
    Rule {
        object: ObjectId::Mirror,
        when: &[Lacks(ItemId::TestReport)],
        effects: &[],
        text: say("鏡子", "鏡子裡的我，看起來好憔悴。"),
    },
    Rule {
        object: ObjectId::Mirror,
        when: &[],
        effects: &[],
        text: say("鏡子", "想起報告上她的名字，鏡子裡的我握緊了拳頭。"),
    },
    Rule {
        object: ObjectId::Scale,
        when: &[],
        effects: &[],
        text: say("體重計", "妳總說自己重了，但在我心裡妳一直都很完美。"),
    },
    Rule {
        object: ObjectId::Switch,
        when: &[],
        effects: &[],
        text: say("開關", "清脆的聲音在靜謐的房間迴盪。"),
    },
    Rule {
        object: ObjectId::Plant2,
        when: &[],
        effects: &[],
        text: say("小盆栽", "她說浴室也要有一點綠色。"),
    },
    Rule {
        object: ObjectId::TrashCan,
        when: &[Lacks(ItemId::TestReport)],
        effects: &[Grant(ItemId::TestReport)],
        text: say(
            "獲得物品",
            "【檢查報告】\n垃圾桶裡有一張被揉皺的紙，是醫院的檢查報告。",
        ),
    },
    Rule {
        object: ObjectId::TrashCan,
        when: &[],
        effects: &[],
        text: say("垃圾桶", "裡面只剩下一些衛生紙。"),
    },
    // ── Laptop desktop ──────────────────────────────────────
    Rule {
        object: ObjectId::LaptopChat,
        when: &[Unlocked(LockId::Laptop)],
        effects: &[See(SeenFlag::Chat)],
        text: say(
            "Chat: 學長",
            "學長：上次跟妳提到的，那個牌子的襯衫妳買了嗎？\n\
             她：我覺得質料很好，誰收到都會很開心的。\n\
             她：我明天下班就要偷偷去買了。\n\
             學長：妳要買什麼顏色的？\n\
             她：我想買深藍色的，你覺得呢？\n\
             學長：好眼光！我也有一件同樣色系的，是很熱賣的顏色。\n\
             她：真的嗎？那我就放心了，謝謝學長！",
        ),
    },
    Rule {
        object: ObjectId::LaptopSearch,
        when: &[Unlocked(LockId::Laptop)],
        effects: &[],
        text: say(
            "Browser History",
            "MRI 磁振造影 報告解讀指南  (2 hours ago)\n\
             腦部膠質瘤 初期徵兆與治療成功率  (5 hours ago)\n\
             如何向親人隱瞞病情並不讓他們難過  (Yesterday)",
        ),
    },
    Rule {
        object: ObjectId::LaptopShop,
        when: &[Unlocked(LockId::Laptop)],
        effects: &[],
        text: say(
            "Shopping History",
            "👔 品牌男用正式襯衫 (藏青色)  $ 3,200\nStatus: Delivered to Nightstand Safe",
        ),
    },
    Rule {
        object: ObjectId::LaptopFolder,
        when: &[Unlocked(LockId::Laptop), Locked(LockId::LaptopFolder)],
        effects: &[Open(Overlay::CodeLock(LockId::LaptopFolder))],
        text: None,
    },
    Rule {
        object: ObjectId::LaptopFolder,
        when: &[Unlocked(LockId::Laptop)],
        effects: &[],
        text: say(
            "Folder: Our Memories",
            "📸 PHOTO_20201225_FINAL.JPG\nCREATION DATE: 1225\n\n床頭櫃的密碼是我們決定在一起的日子。",
        ),
    },
];

/// Whether `object` can be touched from where the player is now.
pub fn is_reachable(session: &Session, object: ObjectId) -> bool {
    match object.scene() {
        Some(scene) => session.state().scene == scene,
        None => session.ui.overlay == Some(Overlay::LaptopDesktop),
    }
}

/// First rule for `object` whose conditions all hold.
pub fn find_rule(state: &GameState, object: ObjectId) -> Option<&'static Rule> {
    RULES
        .iter()
        .filter(|rule| rule.object == object)
        .find(|rule| rule.when.iter().all(|c| c.holds(state)))
}

/// Run the matching rule for `object`. Returns false when nothing happened:
/// play is not running, the object is out of reach, or no rule applies.
pub fn dispatch(session: &mut Session, object: ObjectId) -> bool {
    if !session.state().is_exploring() || !is_reachable(session, object) {
        return false;
    }
    let Some(rule) = find_rule(session.state(), object) else {
        tracing::debug!(%object, "no rule applies");
        return false;
    };

    tracing::debug!(%object, effects = rule.effects.len(), "hotspot");
    for &effect in rule.effects {
        apply(session, effect);
    }
    if let Some(text) = rule.text {
        session.show(text.into());
    }
    true
}

fn apply(session: &mut Session, effect: Effect) {
    match effect {
        Effect::Grant(item) => {
            if session.update(|s| s.grant(item)) {
                tracing::info!(%item, "item collected");
            }
        }
        Effect::See(flag) => {
            session.update(|s| s.seen.mark(flag));
        }
        Effect::Open(overlay) => session.open(overlay),
        Effect::UseKey(lock) => {
            locks::use_key(session, lock);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::memory_room::catalog::ALL_OBJECTS;
    use crate::games::memory_room::state::{Phase, SceneId};

    fn playing_in(scene: SceneId) -> Session {
        let mut session = Session::new();
        session.update(|s| {
            s.phase = Phase::Playing;
            s.scene = scene;
        });
        session
    }

    fn message_content(session: &Session) -> String {
        session.ui.message.as_ref().map(|m| m.content.clone()).unwrap_or_default()
    }

    // ── Table shape ─────────────────────────────────────────

    #[test]
    fn every_object_has_a_rule() {
        for object in ALL_OBJECTS {
            assert!(RULES.iter().any(|r| r.object == object), "{object}");
        }
    }

    #[test]
    fn every_scene_object_has_an_unconditional_fallback() {
        for object in ALL_OBJECTS.into_iter().filter(|o| o.scene().is_some()) {
            let last = RULES.iter().filter(|r| r.object == object).last().unwrap();
            assert!(last.when.is_empty(), "{object} has no fallback");
        }
    }

    #[test]
    fn grants_are_guarded_by_lacks() {
        for rule in RULES {
            for effect in rule.effects {
                if let Effect::Grant(item) = effect {
                    assert!(
                        rule.when.contains(&Condition::Lacks(*item)),
                        "{} grants {item} without a Lacks guard",
                        rule.object
                    );
                }
            }
        }
    }

    /// Session where `rule` is the first match for its object: every lock
    /// open and every positive condition met.
    fn session_for(rule: &Rule) -> Session {
        let scene = rule.object.scene().unwrap_or(SceneId::Desk);
        let mut s = playing_in(scene);
        s.update(|st| {
            for lock in [LockId::Laptop, LockId::Nightstand, LockId::LaptopFolder] {
                st.locks.unlock(lock);
            }
            for &condition in rule.when {
                match condition {
                    Condition::Owns(item) => {
                        st.grant(item);
                    }
                    Condition::Seen(flag) => {
                        st.seen.mark(flag);
                    }
                    _ => {}
                }
            }
        });
        if rule.object.scene().is_none() {
            s.open(Overlay::LaptopDesktop);
        }
        s
    }

    #[test]
    fn every_reward_is_granted_once_with_a_changed_message() {
        let rewarding = RULES.iter().filter_map(|rule| {
            rule.effects.iter().find_map(|effect| match effect {
                Effect::Grant(item) => Some((rule, *item)),
                _ => None,
            })
        });
        for (rule, item) in rewarding {
            let mut s = session_for(rule);
            assert!(find_rule(s.state(), rule.object).is_some_and(|r| std::ptr::eq(r, rule)));

            assert!(dispatch(&mut s, rule.object), "{}", rule.object);
            let first = message_content(&s);
            assert!(dispatch(&mut s, rule.object), "{}", rule.object);
            let second = message_content(&s);

            let copies = s.state().inventory.iter().filter(|&&i| i == item).count();
            assert_eq!(copies, 1, "{} granted {item} {copies} times", rule.object);
            assert_ne!(first, second, "{} repeats its reward message", rule.object);
        }
    }

    #[test]
    fn seen_and_unseen_are_complementary() {
        let mut state = GameState::default();
        assert!(Condition::Unseen(SeenFlag::Bookshelf).holds(&state));
        assert!(!Condition::Seen(SeenFlag::Bookshelf).holds(&state));
        state.seen.mark(SeenFlag::Bookshelf);
        assert!(Condition::Seen(SeenFlag::Bookshelf).holds(&state));
        assert!(!Condition::Unseen(SeenFlag::Bookshelf).holds(&state));
    }

    // ── Dispatch ────────────────────────────────────────────

    #[test]
    fn plant_is_flavor_before_bookshelf_discovery() {
        let mut s = playing_in(SceneId::Entrance);
        assert!(dispatch(&mut s, ObjectId::Plant1));
        assert!(!s.state().has_item(ItemId::CabinetKey));
    }

    #[test]
    fn plant_grants_key_once_after_discovery() {
        let mut s = playing_in(SceneId::Entrance);
        s.update(|st| st.seen.mark(SeenFlag::Bookshelf));

        dispatch(&mut s, ObjectId::Plant1);
        let first = message_content(&s);
        assert_eq!(s.state().inventory, vec![ItemId::CabinetKey]);

        dispatch(&mut s, ObjectId::Plant1);
        let second = message_content(&s);
        assert_eq!(s.state().inventory, vec![ItemId::CabinetKey]);
        assert_ne!(first, second);
    }

    #[test]
    fn bookshelf_first_visit_opens_discovery() {
        let mut s = playing_in(SceneId::Desk);
        dispatch(&mut s, ObjectId::Bookshelf);
        assert!(s.state().seen.bookshelf);
        assert_eq!(
            s.ui.overlay,
            Some(Overlay::Discovery(Discovery::BookshelfPhoto))
        );

        s.ui.overlay = None;
        dispatch(&mut s, ObjectId::Bookshelf);
        assert_eq!(s.ui.overlay, None);
        assert_eq!(s.ui.message.as_ref().unwrap().title, "書櫃");
    }

    #[test]
    fn objects_outside_current_scene_are_ignored() {
        let mut s = playing_in(SceneId::Desk);
        assert!(!dispatch(&mut s, ObjectId::TrashCan));
        assert!(s.state().inventory.is_empty());
        assert!(s.ui.message.is_none());
    }

    #[test]
    fn locked_cabinet_routes_to_key_lock() {
        let mut s = playing_in(SceneId::Entrance);
        dispatch(&mut s, ObjectId::Cabinet);
        assert!(s.state().locks.cabinet);
        assert_eq!(
            message_content(&s),
            "矮櫃上鎖了，需要一把特定的鑰匙。"
        );

        s.update(|st| {
            st.grant(ItemId::CabinetKey);
            st.toggle_selected(ItemId::CabinetKey);
        });
        dispatch(&mut s, ObjectId::Cabinet);
        assert!(!s.state().locks.cabinet);
        assert!(s.state().has_item(ItemId::HeartKey));

        dispatch(&mut s, ObjectId::Cabinet);
        assert_eq!(s.ui.message.as_ref().unwrap().content, "矮櫃已經打開了，裡面空空的。");
    }

    #[test]
    fn locked_laptop_opens_code_prompt_then_desktop() {
        let mut s = playing_in(SceneId::Desk);
        dispatch(&mut s, ObjectId::Laptop);
        assert_eq!(s.ui.overlay, Some(Overlay::CodeLock(LockId::Laptop)));

        s.update(|st| st.locks.unlock(LockId::Laptop));
        s.ui.overlay = None;
        dispatch(&mut s, ObjectId::Laptop);
        assert_eq!(s.ui.overlay, Some(Overlay::LaptopDesktop));
    }

    #[test]
    fn laptop_apps_need_the_desktop_open() {
        let mut s = playing_in(SceneId::Desk);
        s.update(|st| st.locks.unlock(LockId::Laptop));
        assert!(!dispatch(&mut s, ObjectId::LaptopChat));
        assert!(!s.state().seen.chat);

        s.open(Overlay::LaptopDesktop);
        assert!(dispatch(&mut s, ObjectId::LaptopChat));
        assert!(s.state().seen.chat);
    }

    #[test]
    fn locked_folder_prompts_for_password() {
        let mut s = playing_in(SceneId::Desk);
        s.update(|st| st.locks.unlock(LockId::Laptop));
        s.open(Overlay::LaptopDesktop);
        dispatch(&mut s, ObjectId::LaptopFolder);
        assert_eq!(s.ui.overlay, Some(Overlay::CodeLock(LockId::LaptopFolder)));
    }

    #[test]
    fn nightstand_reward_after_unlock() {
        let mut s = playing_in(SceneId::Bed);
        dispatch(&mut s, ObjectId::Nightstand);
        assert_eq!(s.ui.overlay, Some(Overlay::CodeLock(LockId::Nightstand)));
        assert!(!s.state().has_item(ItemId::MaleShirt));

        s.update(|st| st.locks.unlock(LockId::Nightstand));
        s.ui.overlay = None;
        dispatch(&mut s, ObjectId::Nightstand);
        let first = message_content(&s);
        dispatch(&mut s, ObjectId::Nightstand);
        assert_eq!(s.state().inventory, vec![ItemId::MaleShirt]);
        assert_ne!(first, message_content(&s));
    }

    #[test]
    fn diary_needs_heart_key() {
        let mut s = playing_in(SceneId::Desk);
        dispatch(&mut s, ObjectId::Diary);
        assert!(!s.state().has_item(ItemId::DiaryPage));

        s.update(|st| st.grant(ItemId::HeartKey));
        dispatch(&mut s, ObjectId::Diary);
        assert!(s.state().has_item(ItemId::DiaryPage));
    }

    #[test]
    fn calendar_marks_seen_and_changes_text() {
        let mut s = playing_in(SceneId::Bed);
        dispatch(&mut s, ObjectId::Calendar);
        let first = message_content(&s);
        assert!(s.state().seen.calendar);
        dispatch(&mut s, ObjectId::Calendar);
        assert_ne!(first, message_content(&s));
    }

    #[test]
    fn door_always_opens_choice() {
        let mut s = playing_in(SceneId::Entrance);
        dispatch(&mut s, ObjectId::MainDoor);
        assert_eq!(s.ui.overlay, Some(Overlay::EndingChoice));
        assert!(s.state().ending.is_none());
    }

    #[test]
    fn nothing_dispatches_after_an_ending() {
        let mut s = playing_in(SceneId::Bathroom);
        s.update(|st| st.ending = Some(crate::games::memory_room::state::Ending::Normal));
        assert!(!dispatch(&mut s, ObjectId::TrashCan));
        assert!(s.state().inventory.is_empty());
    }
}
