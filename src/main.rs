mod config;
mod games;
mod input;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use config::AssetConfig;
use games::Game;
use input::{ClickState, InputEvent};
use time::RevealClock;

/// Resolve a page click to an action ID using the grid container's rect.
fn dom_click_target(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<u16> {
    let document = web_sys::window()?.document()?;
    // DomBackend renders its grid as a <div> directly inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let x = mouse_x as f64 - rect.left();
    let y = mouse_y as f64 - rect.top();
    let hit = cs.hit_test_pixel(x, y, rect.width(), rect.height());
    tracing::trace!(x, y, targets = cs.targets.len(), ?hit, "click");
    hit
}

fn key_event(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Char(c) => Some(InputEvent::Key(c)),
        KeyCode::Enter => Some(InputEvent::Enter),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Esc => Some(InputEvent::Escape),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    let config = AssetConfig::load();
    let clock = RefCell::new(RevealClock::new(config.reveal_interval_ms));
    let game: Rc<RefCell<Box<dyn Game>>> = Rc::new(RefCell::new(games::create_game(config)));
    let click_state = Rc::new(RefCell::new(ClickState::new()));

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;
    tracing::info!("memory room ready");

    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let target = dom_click_target(mouse_event.x, mouse_event.y, &cs);
            drop(cs);

            if let Some(action_id) = target {
                game.borrow_mut().handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    terminal.on_key_event({
        let game = game.clone();
        move |key| {
            if let Some(event) = key_event(key.code) {
                game.borrow_mut().handle_input(&event);
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let size = f.area();
            click_state.borrow_mut().begin_frame(size.width, size.height);

            let ticks = {
                let mut clock = clock.borrow_mut();
                clock.set_running(game.borrow().is_animating());
                clock.update(js_sys::Date::now())
            };
            if ticks > 0 {
                game.borrow_mut().tick(ticks);
            }

            game.borrow().render(f, size, &click_state);
        }
    });

    Ok(())
}
