//! Static content: items, scenes, hotspot objects, endings and story text.
//!
//! Everything here is immutable data looked up by id. Behaviour lives in
//! `hotspots`, `locks` and `endings`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::state::{Discovery, Ending, SceneId};

/// Raised when a presentation-layer string names nothing in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} id `{value}`")]
pub struct UnknownId {
    pub kind: &'static str,
    pub value: String,
}

// ── Items ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemId {
    CabinetKey,
    HeartKey,
    DiaryPage,
    BirthdayCard,
    MaleShirt,
    TestReport,
}

pub const ALL_ITEMS: [ItemId; 6] = [
    ItemId::CabinetKey,
    ItemId::HeartKey,
    ItemId::DiaryPage,
    ItemId::BirthdayCard,
    ItemId::MaleShirt,
    ItemId::TestReport,
];

pub struct Item {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub fn item_info(id: ItemId) -> Item {
    match id {
        ItemId::CabinetKey => Item {
            name: "矮櫃鑰匙",
            icon: "🔑",
            description: "藏在盆栽底下的鑰匙。",
        },
        ItemId::HeartKey => Item {
            name: "小鑰匙",
            icon: "🗝️",
            description: "一把造型精緻的小鑰匙，握柄是一顆心。",
        },
        ItemId::DiaryPage => Item {
            name: "日記的內容",
            icon: "📜",
            description: "日記上寫滿了字，描述了近期身體有點狀況，以及未來的計劃……最後寫到「要給他一個生日驚喜」。",
        },
        ItemId::BirthdayCard => Item {
            name: "生日卡片",
            icon: "✉️",
            description: "她送給我的生日卡片。上面寫著：「給最親愛的 Kael，希望我們能一直在一起。」",
        },
        ItemId::MaleShirt => Item {
            name: "男用襯衫",
            icon: "👔",
            description: "一件剪裁合身的男用襯衫，標籤還沒拆掉。這是我一直想要的那一款。",
        },
        ItemId::TestReport => Item {
            name: "檢查報告",
            icon: "📄",
            description: "醫院的磁振造影報告，日期是上個禮拜。上面的名字是她。",
        },
    }
}

impl ItemId {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemId::CabinetKey => "cabinet_key",
            ItemId::HeartKey => "heart_key",
            ItemId::DiaryPage => "diary_page",
            ItemId::BirthdayCard => "birthday_card",
            ItemId::MaleShirt => "male_shirt",
            ItemId::TestReport => "test_report",
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemId {
    type Err = UnknownId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ITEMS
            .into_iter()
            .find(|item| item.as_str() == s)
            .ok_or_else(|| UnknownId {
                kind: "item",
                value: s.to_string(),
            })
    }
}

// ── Hotspot Objects ──────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectId {
    // Entrance
    MainDoor,
    Sofa,
    Cabinet,
    Plant1,
    // Desk
    Bookshelf,
    Laptop,
    Diary,
    // Bed
    Photo,
    Calendar,
    Nightstand,
    // Bathroom
    Mirror,
    Scale,
    Switch,
    Plant2,
    TrashCan,
    // Laptop desktop apps
    LaptopChat,
    LaptopSearch,
    LaptopShop,
    LaptopFolder,
}

pub const ALL_OBJECTS: [ObjectId; 19] = [
    ObjectId::MainDoor,
    ObjectId::Sofa,
    ObjectId::Cabinet,
    ObjectId::Plant1,
    ObjectId::Bookshelf,
    ObjectId::Laptop,
    ObjectId::Diary,
    ObjectId::Photo,
    ObjectId::Calendar,
    ObjectId::Nightstand,
    ObjectId::Mirror,
    ObjectId::Scale,
    ObjectId::Switch,
    ObjectId::Plant2,
    ObjectId::TrashCan,
    ObjectId::LaptopChat,
    ObjectId::LaptopSearch,
    ObjectId::LaptopShop,
    ObjectId::LaptopFolder,
];

/// Apps on the laptop desktop, in tab order.
pub const LAPTOP_APPS: [ObjectId; 4] = [
    ObjectId::LaptopChat,
    ObjectId::LaptopSearch,
    ObjectId::LaptopShop,
    ObjectId::LaptopFolder,
];

impl ObjectId {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectId::MainDoor => "main_door",
            ObjectId::Sofa => "sofa",
            ObjectId::Cabinet => "cabinet",
            ObjectId::Plant1 => "plant1",
            ObjectId::Bookshelf => "bookshelf",
            ObjectId::Laptop => "laptop",
            ObjectId::Diary => "diary",
            ObjectId::Photo => "photo",
            ObjectId::Calendar => "calendar",
            ObjectId::Nightstand => "nightstand",
            ObjectId::Mirror => "mirror",
            ObjectId::Scale => "scale",
            ObjectId::Switch => "switch",
            ObjectId::Plant2 => "plant2",
            ObjectId::TrashCan => "trash_can",
            ObjectId::LaptopChat => "laptop_chat",
            ObjectId::LaptopSearch => "laptop_search",
            ObjectId::LaptopShop => "laptop_shop",
            ObjectId::LaptopFolder => "laptop_folder",
        }
    }

    /// Scene the hotspot belongs to. Laptop apps live on the laptop
    /// desktop overlay instead of a scene.
    pub fn scene(self) -> Option<SceneId> {
        match self {
            ObjectId::MainDoor | ObjectId::Sofa | ObjectId::Cabinet | ObjectId::Plant1 => {
                Some(SceneId::Entrance)
            }
            ObjectId::Bookshelf | ObjectId::Laptop | ObjectId::Diary => Some(SceneId::Desk),
            ObjectId::Photo | ObjectId::Calendar | ObjectId::Nightstand => Some(SceneId::Bed),
            ObjectId::Mirror
            | ObjectId::Scale
            | ObjectId::Switch
            | ObjectId::Plant2
            | ObjectId::TrashCan => Some(SceneId::Bathroom),
            ObjectId::LaptopChat
            | ObjectId::LaptopSearch
            | ObjectId::LaptopShop
            | ObjectId::LaptopFolder => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ObjectId::MainDoor => "房門",
            ObjectId::Sofa => "沙發",
            ObjectId::Cabinet => "矮櫃",
            ObjectId::Plant1 => "盆栽",
            ObjectId::Bookshelf => "大書櫃",
            ObjectId::Laptop => "筆電",
            ObjectId::Diary => "日記本",
            ObjectId::Photo => "照片",
            ObjectId::Calendar => "月曆",
            ObjectId::Nightstand => "床頭櫃",
            ObjectId::Mirror => "鏡子",
            ObjectId::Scale => "體重計",
            ObjectId::Switch => "開關",
            ObjectId::Plant2 => "小盆栽",
            ObjectId::TrashCan => "垃圾桶",
            ObjectId::LaptopChat => "WeChat",
            ObjectId::LaptopSearch => "Search",
            ObjectId::LaptopShop => "Shopping",
            ObjectId::LaptopFolder => "Secret",
        }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectId {
    type Err = UnknownId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_OBJECTS
            .into_iter()
            .find(|object| object.as_str() == s)
            .ok_or_else(|| UnknownId {
                kind: "object",
                value: s.to_string(),
            })
    }
}

// ── Scenes ───────────────────────────────────────────────────

pub struct SceneInfo {
    pub title: &'static str,
    /// Background image file, relative to the configured asset base.
    pub background: &'static str,
    pub description: &'static str,
    /// Hotspots in display order.
    pub hotspots: &'static [ObjectId],
}

pub fn scene_info(id: SceneId) -> SceneInfo {
    match id {
        SceneId::Entrance => SceneInfo {
            title: "Room Entrance",
            background: "entrance.jpg",
            description: "小小的玄關，右邊是沙發，角落放著一盆盆栽。",
            hotspots: &[
                ObjectId::MainDoor,
                ObjectId::Sofa,
                ObjectId::Cabinet,
                ObjectId::Plant1,
            ],
        },
        SceneId::Desk => SceneInfo {
            title: "The Workspace",
            background: "desk.jpg",
            description: "凌亂的木頭書桌上擺著筆電，後面是塞滿書的書櫃。",
            hotspots: &[ObjectId::Bookshelf, ObjectId::Laptop, ObjectId::Diary],
        },
        SceneId::Bed => SceneInfo {
            title: "Bedroom Corner",
            background: "bed.jpg",
            description: "整齊的床鋪，床頭櫃上有一個相框，牆上掛著月曆。",
            hotspots: &[ObjectId::Photo, ObjectId::Calendar, ObjectId::Nightstand],
        },
        SceneId::Bathroom => SceneInfo {
            title: "Bathroom Side",
            background: "bathroom.jpg",
            description: "乾淨的浴室，一面大鏡子，地上有體重計。",
            hotspots: &[
                ObjectId::Mirror,
                ObjectId::Scale,
                ObjectId::Switch,
                ObjectId::Plant2,
                ObjectId::TrashCan,
            ],
        },
    }
}

// ── Discoveries ──────────────────────────────────────────────

pub struct DiscoveryInfo {
    pub title: &'static str,
    pub image: &'static str,
    pub caption: &'static str,
}

pub fn discovery_info(id: Discovery) -> DiscoveryInfo {
    match id {
        Discovery::BookshelfPhoto => DiscoveryInfo {
            title: "夾在書裡的照片",
            image: "bookshelf_photo.jpg",
            caption: "我們搬進來那天拍的照片。背面寫著：「備用鑰匙交給門口的綠色朋友保管。」",
        },
    }
}

// ── Endings ──────────────────────────────────────────────────

pub struct EndingInfo {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

pub fn ending_info(ending: Ending) -> EndingInfo {
    match ending {
        Ending::Normal => EndingInfo {
            title: "NORMAL END",
            text: "生活依舊繼續，只是少了某些色彩。",
            icon: "🏙️",
        },
        Ending::Bad1 => EndingInfo {
            title: "BAD END 1",
            text: "我不該在那裡見到妳。信任的裂痕終究無法修補。",
            icon: "🌑",
        },
        Ending::Happy => EndingInfo {
            title: "HAPPY END",
            text: "在醫院的門口，我抱住了疲憊的妳。這一次，我們一起面對。",
            icon: "🌸",
        },
        Ending::Bad2 => EndingInfo {
            title: "BAD END 2",
            text: "留下信的那刻，我以為我解脫了。",
            icon: "🍂",
        },
        Ending::Perfect => EndingInfo {
            title: "PERFECT END",
            text: "我穿著妳挑的襯衫走進病房。妳愣了一下，然後笑著哭了。這一次，換我給妳驚喜。",
            icon: "💝",
        },
    }
}

// ── Story Intro ──────────────────────────────────────────────

pub const GAME_TITLE: &str = "回憶的房間";

pub const STORY_LINES: &[&str] = &[
    "她已經三天沒有回訊息了。",
    "電話總是轉進語音信箱。",
    "我用備用鑰匙打開了她的房門。",
    "房間裡很安靜，一切都和平常一樣。",
    "也許，答案就藏在這裡的某個角落。",
];
