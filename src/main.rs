mod audio;
mod game;
mod input;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use audio::SoundPlayer;
use game::{ClickerGame, Outcome, Persist, SoundCue};
use input::{pixel_to_cell, ClickState, InputEvent};
use time::GameTime;

/// Query the grid container's bounding rect and convert client pixel
/// coordinates to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    pixel_to_cell(
        mouse_x as f64 - rect.left(),
        mouse_y as f64 - rect.top(),
        rect.width(),
        rect.height(),
        cs.terminal_cols,
        cs.terminal_rows,
    )
}

/// Play the cued sound and run the persistence effect an input produced.
fn run_side_effects(outcome: &Outcome, game: &ClickerGame, player: &mut SoundPlayer) {
    if outcome.sound == Some(SoundCue::Click) {
        player.play_click(&game.state.audio);
    }
    match outcome.persist {
        Persist::Snapshot => game::save::save_game(&game.state),
        Persist::Clear => game::save::clear_save(),
        Persist::RewriteClicks => game::save::rewrite_total_clicks(game.state.total_clicks),
        Persist::None => {}
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let game = Rc::new(RefCell::new(ClickerGame::new()));
    game::save::load_game(&mut game.borrow_mut().state);

    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let player = Rc::new(RefCell::new(SoundPlayer::new()));
    let game_time = Rc::new(RefCell::new(GameTime::new(1)));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    // Mouse/touch handler: convert to a cell, hit-test the registered
    // targets, and dispatch the matched action. A press that lands on
    // nothing interactive gets the punch sound (unless a dialog is open).
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        let player = player.clone();
        move |mouse_event| {
            if mouse_event.kind != MouseEventKind::ButtonDown(MouseButton::Left) {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let action = cs.hit_test(mouse_event.col, mouse_event.row);
            drop(cs);

            let mut player = player.borrow_mut();
            match action {
                Some(action) => {
                    let mut g = game.borrow_mut();
                    let outcome = g.handle_input(&InputEvent::Action(action));
                    run_side_effects(&outcome, &g, &mut player);
                }
                None => {
                    if game.borrow().background_tap_allowed() {
                        player.play_punch();
                    }
                }
            }
        }
    });

    // Keyboard handler: every binding maps onto the same semantic actions
    // the click targets use.
    terminal.on_key_event({
        let game = game.clone();
        let player = player.clone();
        move |key_event| {
            let key = match key_event.code {
                KeyCode::Char(c) => c.to_ascii_lowercase(),
                KeyCode::Esc => '\u{1b}',
                _ => return,
            };
            let mut g = game.borrow_mut();
            let outcome = g.handle_input(&InputEvent::Key(key));
            if outcome.consumed {
                run_side_effects(&outcome, &g, &mut player.borrow_mut());
            }
        }
    });

    terminal.draw_web({
        let game = game.clone();
        let click_state = click_state.clone();
        move |f| {
            // Advance the auto-clicker clock before drawing.
            let now = web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now());
            if let Some(now) = now {
                let ticks = game_time.borrow_mut().update(now);
                if ticks > 0 {
                    let mut g = game.borrow_mut();
                    g.tick(ticks);
                    if g.state.cps() > 0 {
                        game::save::save_game(&g.state);
                    }
                }
            }

            let g = game.borrow();
            let area = f.area();

            let mut cs = click_state.borrow_mut();
            cs.terminal_cols = area.width;
            cs.terminal_rows = area.height;
            cs.clear_targets();

            g.render(f, area, &mut cs);
        }
    });

    Ok(())
}
