//! Memory Room rendering.
//!
//! One screen at a time, chosen by [`screen`]. Overlays replace the scene;
//! a pending message is drawn as a popup over whatever sits underneath and
//! takes the click targets for itself.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::config::AssetConfig;
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, TabBar};

use super::actions::*;
use super::catalog::{
    discovery_info, ending_info, item_info, scene_info, ItemId, GAME_TITLE, LAPTOP_APPS,
    STORY_LINES,
};
use super::endings;
use super::locks::{self, LockKind};
use super::state::{Discovery, Ending, LockId, Message, Overlay, Session, ALL_SCENES};
use super::{screen, Screen};

const ACCENT: Color = Color::LightMagenta;

pub fn render(
    session: &Session,
    config: &AssetConfig,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    match screen(session) {
        Screen::Ending(ending) => render_ending(ending, f, area, click_state),
        Screen::Title => render_title(f, area, click_state),
        Screen::Story => render_story(session, f, area, click_state),
        Screen::Overlay(overlay) => render_overlay(session, config, overlay, f, area, click_state),
        Screen::Scene => render_scene(session, config, f, area, click_state),
        Screen::Message => {
            match session.ui.overlay {
                Some(overlay) => render_overlay(session, config, overlay, f, area, click_state),
                None => render_scene(session, config, f, area, click_state),
            }
            // Modal: nothing underneath stays clickable.
            click_state.borrow_mut().targets.clear();
            if let Some(message) = &session.ui.message {
                render_message(message, f, area, click_state);
            }
        }
    }
}

fn borders_for(area_width: u16) -> Borders {
    if is_narrow_layout(area_width) { Borders::TOP | Borders::BOTTOM } else { Borders::ALL }
}

fn panel_block(title: impl Into<String>, color: Color, area_width: u16) -> Block<'static> {
    Block::default()
        .borders(borders_for(area_width))
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {} ", title.into()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
}

/// Draw `block` with wrapped `body` text on top and the clickable `cl`
/// rows directly below it. Returns the area left over underneath.
fn render_panel(
    f: &mut Frame,
    area: Rect,
    block: Block,
    body: Vec<Line>,
    cl: ClickableList,
    cs: &mut ClickState,
) -> Rect {
    let inner = block.inner(area);
    f.render_widget(block, area);

    let body = Paragraph::new(body).wrap(Wrap { trim: false });
    let list_h = (cl.len() as u16).min(inner.height);
    let body_h = (body.line_count(inner.width) as u16).min(inner.height - list_h);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(body_h),
            Constraint::Length(list_h),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(body, chunks[0]);
    if !cl.is_empty() {
        cl.register_targets(chunks[1], cs, 0, 0, 0, 0);
        f.render_widget(Paragraph::new(cl.into_lines()), chunks[1]);
    }
    chunks[2]
}

fn dim(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(Color::DarkGray)))
}

fn plain(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(Color::White)))
}

fn push_choice(cl: &mut ClickableList, key: char, label: &str, action_id: u16) {
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                format!(" [{}] ", key),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(label.to_string(), Style::default().fg(Color::White)),
        ]),
        action_id,
    );
}

fn push_close(cl: &mut ClickableList, label: &str, action_id: u16) {
    cl.push_clickable(
        Line::from(Span::styled(format!(" [0] {}", label), Style::default().fg(Color::Yellow))),
        action_id,
    );
}

// ── Title / Story ───────────────────────────────────────────

fn render_title(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let body = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", GAME_TITLE),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        dim(" A Memory Room"),
        Line::from(""),
    ];
    let mut cl = ClickableList::new();
    push_choice(&mut cl, '1', "開始", START_GAME);

    let block = panel_block("Memory Room", Color::DarkGray, area.width);
    render_panel(f, area, block, body, cl, &mut click_state.borrow_mut());
}

fn render_story(session: &Session, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let shown = session.ui.story_lines_shown.min(STORY_LINES.len());
    let mut body = vec![Line::from("")];
    for text in &STORY_LINES[..shown] {
        body.push(plain(format!(" {}", text)));
        body.push(Line::from(""));
    }

    let mut cl = ClickableList::new();
    if shown == STORY_LINES.len() {
        push_choice(&mut cl, '1', "走進房間", BEGIN_PLAYING);
    } else {
        push_choice(&mut cl, '1', "跳過", SKIP_STORY);
    }

    let block = panel_block(GAME_TITLE, Color::DarkGray, area.width);
    render_panel(f, area, block, body, cl, &mut click_state.borrow_mut());
}

// ── Scene ───────────────────────────────────────────────────

fn render_scene(
    session: &Session,
    config: &AssetConfig,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let state = session.state();
    let info = scene_info(state.scene);
    let borders = borders_for(area.width);
    let mut cs = click_state.borrow_mut();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6), Constraint::Length(3)])
        .split(area);

    // Status
    let position = ALL_SCENES.iter().position(|&s| s == state.scene).unwrap_or(0) + 1;
    let equipped = match state.selected_item {
        Some(item) => {
            let it = item_info(item);
            format!("{} {}", it.icon, it.name)
        }
        None => "無".to_string(),
    };
    let status = Line::from(vec![
        Span::styled(
            format!(" 📍 {} ({}/{})", info.title, position, ALL_SCENES.len()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("   裝備: {}", equipped), Style::default().fg(ACCENT)),
    ]);
    let status_block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(status).block(status_block), chunks[0]);

    // Description + hotspots
    let body = vec![
        plain(format!(" {}", info.description)),
        dim(format!(" 🖼 {}", config.asset_path(info.background))),
        Line::from(""),
    ];
    let mut cl = ClickableList::new();
    for (i, object) in info.hotspots.iter().enumerate() {
        let key = char::from_digit(i as u32 + 1, 10).unwrap_or('?');
        push_choice(&mut cl, key, object.label(), HOTSPOT_BASE + i as u16);
    }
    let block = panel_block(info.title, ACCENT, area.width);
    render_panel(f, chunks[1], block, body, cl, &mut cs);

    // Navigation
    let nav_style = Style::default().fg(Color::Cyan);
    let nav_block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray));
    TabBar::new(" │ ")
        .tab("◀ 上一處", nav_style, SCENE_PREV)
        .tab(format!("🎒 物品 ({})", state.inventory.len()), nav_style, OPEN_INVENTORY)
        .tab("下一處 ▶", nav_style, SCENE_NEXT)
        .block(nav_block)
        .render(f, chunks[2], &mut cs);
}

// ── Overlays ────────────────────────────────────────────────

fn render_overlay(
    session: &Session,
    config: &AssetConfig,
    overlay: Overlay,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cs = click_state.borrow_mut();
    match overlay {
        Overlay::CodeLock(lock) => render_code_lock(session, lock, f, area, &mut cs),
        Overlay::EndingChoice => render_ending_choice(session, f, area, &mut cs),
        Overlay::LaptopDesktop => render_laptop(session, f, area, &mut cs),
        Overlay::Inventory => render_inventory(session, f, area, &mut cs),
        Overlay::ItemDetail(item) => render_item_detail(session, item, f, area, &mut cs),
        Overlay::Discovery(discovery) => render_discovery(config, discovery, f, area, &mut cs),
    }
}

fn lock_title(lock: LockId) -> &'static str {
    match lock {
        LockId::Laptop => "筆電密碼",
        LockId::Nightstand => "床頭櫃密碼鎖",
        LockId::LaptopFolder => "加密資料夾",
        LockId::Cabinet => "矮櫃",
        LockId::Door => "房門",
    }
}

fn render_code_lock(session: &Session, lock: LockId, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let typed = &session.ui.code_input;
    let slots = locks::max_input_len(lock);
    let numeric = matches!(locks::lock_kind(lock), Some(LockKind::Numeric { .. }));

    let entry = if numeric {
        let mut spans = vec![Span::raw(" ")];
        let mut chars = typed.chars();
        for _ in 0..slots {
            let (text, style) = match chars.next() {
                Some(c) => (c, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                None => ('_', Style::default().fg(Color::DarkGray)),
            };
            spans.push(Span::styled(format!(" {} ", text), style.add_modifier(Modifier::REVERSED)));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    } else {
        Line::from(vec![
            Span::styled(format!(" > {}", typed), Style::default().fg(Color::White)),
            Span::styled("▏", Style::default().fg(ACCENT)),
        ])
    };

    let body = vec![
        Line::from(""),
        dim(format!(" {}", locks::lock_hint(lock))),
        Line::from(""),
        entry,
        Line::from(""),
    ];

    let block = panel_block(lock_title(lock), ACCENT, area.width);
    let rest = render_panel(f, area, block, body, ClickableList::new(), cs);

    let rows: &[&str] = if numeric {
        &["12345", "67890"]
    } else {
        &["abcdefghi", "jklmnopqr", "stuvwxyz", "0123456789"]
    };
    let key_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let mut y = rest.y;
    for row in rows {
        if y >= rest.y + rest.height {
            return;
        }
        let bar = row
            .chars()
            .fold(TabBar::new(" "), |bar, c| bar.tab(c.to_string(), key_style, keypad_id(c)));
        bar.render(f, Rect::new(rest.x, y, rest.width, 1), cs);
        y += 1;
    }
    if y + 1 >= rest.y + rest.height {
        return;
    }
    TabBar::new(" │ ")
        .tab("⌫ 刪除", Style::default().fg(Color::Yellow), CODE_ERASE)
        .tab("✔ 確認", Style::default().fg(Color::Green), CODE_SUBMIT)
        .tab("✖ 離開", Style::default().fg(Color::DarkGray), CLOSE_OVERLAY)
        .render(f, Rect::new(rest.x, y + 1, rest.width, 1), cs);
}

fn render_ending_choice(session: &Session, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let body = vec![
        Line::from(""),
        plain(" 我站在門口，握著門把。"),
        plain(" 要去哪裡找她？"),
        Line::from(""),
    ];
    let mut cl = ClickableList::new();
    for (i, destination) in endings::offered(session.state()).into_iter().enumerate() {
        let key = char::from_digit(i as u32 + 1, 10).unwrap_or('?');
        let label = format!("{} {}", destination.icon(), destination.label());
        push_choice(&mut cl, key, &label, CHOICE_BASE + i as u16);
    }

    let block = panel_block("房門", ACCENT, area.width);
    render_panel(f, area, block, body, cl, cs);
}

fn render_laptop(session: &Session, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    let app_style = Style::default().fg(Color::Cyan);
    let tabs = LAPTOP_APPS.iter().enumerate().fold(TabBar::new(" │ "), |bar, (i, app)| {
        bar.tab(format!("{} {}", i + 1, app.label()), app_style, LAPTOP_APP_BASE + i as u16)
    });
    tabs.block(
        Block::default()
            .borders(borders_for(area.width))
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(" Desktop ", Style::default().fg(Color::DarkGray))),
    )
    .render(f, chunks[0], cs);

    let folder = if session.state().locks.laptop_folder {
        " 🔒 Secret 資料夾上了密碼。"
    } else {
        " 🔓 Secret 資料夾已解鎖。"
    };
    let body = vec![
        Line::from(""),
        plain(" 桌布是我們在海邊的合照。"),
        dim(folder),
        Line::from(""),
    ];
    let mut cl = ClickableList::new();
    push_close(&mut cl, "闔上筆電", CLOSE_OVERLAY);

    let block = panel_block("筆電", ACCENT, area.width);
    render_panel(f, chunks[1], block, body, cl, cs);
}

fn render_inventory(session: &Session, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let state = session.state();
    let mut body = vec![Line::from("")];
    if state.inventory.is_empty() {
        body.push(dim(" 還沒有找到任何東西。"));
    }

    let mut cl = ClickableList::new();
    for (i, &item) in state.inventory.iter().enumerate().take(9) {
        let info = item_info(item);
        let marker = if state.is_equipped(item) { "  ★ 裝備中" } else { "" };
        let key = char::from_digit(i as u32 + 1, 10).unwrap_or('?');
        push_choice(
            &mut cl,
            key,
            &format!("{} {}{}", info.icon, info.name, marker),
            ITEM_BASE + i as u16,
        );
    }
    cl.push(Line::from(""));
    push_close(&mut cl, "關閉", CLOSE_OVERLAY);

    let block = panel_block(format!("物品 ({})", state.inventory.len()), Color::Green, area.width);
    render_panel(f, area, block, body, cl, cs);
}

fn render_item_detail(
    session: &Session,
    item: ItemId,
    f: &mut Frame,
    area: Rect,
    cs: &mut ClickState,
) {
    let info = item_info(item);
    let body = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}  {}", info.icon, info.name),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        plain(format!(" 「{}」", info.description)),
        Line::from(""),
    ];
    let equip = if session.state().is_equipped(item) { "取消裝備" } else { "裝備" };
    let mut cl = ClickableList::new();
    push_choice(&mut cl, '1', equip, EQUIP_TOGGLE);
    push_close(&mut cl, "返回", CLOSE_OVERLAY);

    let block = panel_block(info.name, Color::Green, area.width);
    render_panel(f, area, block, body, cl, cs);
}

fn render_discovery(
    config: &AssetConfig,
    discovery: Discovery,
    f: &mut Frame,
    area: Rect,
    cs: &mut ClickState,
) {
    let info = discovery_info(discovery);
    let body = vec![
        Line::from(""),
        dim(format!(" 🖼 {}", config.asset_path(info.image))),
        Line::from(""),
        plain(format!(" {}", info.caption)),
        Line::from(""),
    ];
    let mut cl = ClickableList::new();
    push_close(&mut cl, "放回書櫃", CLOSE_OVERLAY);

    let block = panel_block(info.title, ACCENT, area.width);
    render_panel(f, area, block, body, cl, cs);
}

// ── Message popup ───────────────────────────────────────────

fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

fn render_message(
    message: &Message,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let width = if is_narrow_layout(area.width) { area.width } else { 56 };
    let body: Vec<Line> = message
        .content
        .lines()
        .map(|l| plain(format!(" {}", l)))
        .collect();
    // Borders + blank line + close row.
    let text_h = Paragraph::new(body.clone())
        .wrap(Wrap { trim: false })
        .line_count(width.saturating_sub(2)) as u16;
    let popup = popup_rect(area, width, text_h + 4);

    let mut cl = ClickableList::new();
    cl.push(Line::from(""));
    push_close(&mut cl, "繼續", DISMISS_MESSAGE);

    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(Span::styled(
            format!(" {} ", message.title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    render_panel(f, popup, block, body, cl, &mut click_state.borrow_mut());
}

// ── Ending ──────────────────────────────────────────────────

fn render_ending(ending: Ending, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let info = ending_info(ending);
    let body = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}  {}", info.icon, info.title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        plain(format!(" {}", info.text)),
        Line::from(""),
    ];
    let mut cl = ClickableList::new();
    push_choice(&mut cl, 'R', "重新開始", RESTART);

    let block = panel_block(info.title, ACCENT, area.width);
    render_panel(f, area, block, body, cl, &mut click_state.borrow_mut());
}
