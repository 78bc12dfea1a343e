//! Red Button Clicker — click the button, buy upgrades, profit.

pub mod actions;
pub mod logic;
pub mod render;
pub mod save;
pub mod state;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

use state::{Dialog, GameState, Tab};

/// Sound the main loop should play after an input was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
}

/// Persistence side effect the main loop should run after an input.
///
/// Kept out of the game itself so the dispatch logic stays testable on
/// native targets, where localStorage doesn't exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persist {
    None,
    /// Write a fresh snapshot of the current state.
    Snapshot,
    /// Remove the stored entry entirely (full reset).
    Clear,
    /// Zero only the stored `totalClicks` field (clicks reset).
    RewriteClicks,
}

/// What an input did, and what the main loop owes in response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub consumed: bool,
    pub sound: Option<SoundCue>,
    pub persist: Persist,
}

impl Outcome {
    fn ignored() -> Self {
        Self {
            consumed: false,
            sound: None,
            persist: Persist::None,
        }
    }

    fn handled(persist: Persist) -> Self {
        Self {
            consumed: true,
            sound: None,
            persist,
        }
    }
}

pub struct ClickerGame {
    pub state: GameState,
}

impl ClickerGame {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Map a key press to the semantic action it triggers, given the current
    /// UI state. Mouse clicks arrive as actions directly.
    fn action_for_key(&self, key: char) -> Option<u16> {
        if self.state.dialog != Dialog::None {
            return match key {
                'y' => Some(actions::DIALOG_CONFIRM),
                'n' | '\u{1b}' => Some(actions::DIALOG_CANCEL),
                _ => None,
            };
        }
        match key {
            'c' | ' ' => Some(actions::CLICK_BUTTON),
            'b' => Some(actions::TAB_BUTTON),
            's' => Some(actions::TAB_SHOP),
            'a' => Some(actions::TAB_AUDIO),
            '1' => Some(actions::BUY_MULTIPLIER),
            '2' => Some(actions::BUY_AUTO),
            'r' => Some(actions::OPEN_RESET_ALL),
            't' => Some(actions::OPEN_RESET_CLICKS),
            'w' => Some(actions::AUDIO_WAVEFORM_NEXT),
            '-' => Some(actions::AUDIO_FREQ_DOWN),
            '+' | '=' => Some(actions::AUDIO_FREQ_UP),
            '[' => Some(actions::AUDIO_DUR_DOWN),
            ']' => Some(actions::AUDIO_DUR_UP),
            _ => None,
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> Outcome {
        let action = match event {
            InputEvent::Key(c) => match self.action_for_key(*c) {
                Some(a) => a,
                None => return Outcome::ignored(),
            },
            InputEvent::Action(a) => *a,
        };

        // While a dialog is open nothing else is interactive. The overlay
        // already wiped the other click targets; this guards the key path and
        // any stale action.
        if self.state.dialog != Dialog::None
            && action != actions::DIALOG_CONFIRM
            && action != actions::DIALOG_CANCEL
        {
            return Outcome::ignored();
        }

        self.apply_action(action)
    }

    fn apply_action(&mut self, action: u16) -> Outcome {
        match action {
            actions::CLICK_BUTTON => {
                logic::click(&mut self.state);
                Outcome {
                    consumed: true,
                    sound: Some(SoundCue::Click),
                    persist: Persist::Snapshot,
                }
            }
            actions::TAB_BUTTON => {
                self.state.tab = Tab::Button;
                Outcome::handled(Persist::None)
            }
            actions::TAB_SHOP => {
                self.state.tab = Tab::Shop;
                Outcome::handled(Persist::None)
            }
            actions::TAB_AUDIO => {
                self.state.tab = Tab::Audio;
                Outcome::handled(Persist::None)
            }
            actions::BUY_MULTIPLIER => {
                if logic::buy_multiplier(&mut self.state) {
                    Outcome::handled(Persist::Snapshot)
                } else {
                    Outcome::handled(Persist::None)
                }
            }
            actions::BUY_AUTO => {
                if logic::buy_auto(&mut self.state) {
                    Outcome::handled(Persist::Snapshot)
                } else {
                    Outcome::handled(Persist::None)
                }
            }
            actions::OPEN_RESET_ALL => {
                logic::request_reset_all(&mut self.state);
                Outcome::handled(Persist::None)
            }
            actions::OPEN_RESET_CLICKS => {
                logic::request_reset_clicks(&mut self.state);
                Outcome::handled(Persist::None)
            }
            actions::AUDIO_WAVEFORM_NEXT => {
                logic::cycle_waveform(&mut self.state);
                Outcome::handled(Persist::None)
            }
            actions::AUDIO_FREQ_DOWN => {
                logic::adjust_frequency(&mut self.state, -10.0);
                Outcome::handled(Persist::None)
            }
            actions::AUDIO_FREQ_UP => {
                logic::adjust_frequency(&mut self.state, 10.0);
                Outcome::handled(Persist::None)
            }
            actions::AUDIO_DUR_DOWN => {
                logic::adjust_duration(&mut self.state, -0.05);
                Outcome::handled(Persist::None)
            }
            actions::AUDIO_DUR_UP => {
                logic::adjust_duration(&mut self.state, 0.05);
                Outcome::handled(Persist::None)
            }
            actions::DIALOG_CONFIRM => match self.state.dialog {
                Dialog::ResetAll => {
                    logic::confirm_reset_all(&mut self.state);
                    Outcome::handled(Persist::Clear)
                }
                Dialog::ResetClicks => {
                    logic::confirm_reset_clicks(&mut self.state);
                    Outcome::handled(Persist::RewriteClicks)
                }
                Dialog::None => Outcome::ignored(),
            },
            actions::DIALOG_CANCEL => {
                if self.state.dialog == Dialog::None {
                    return Outcome::ignored();
                }
                logic::cancel_dialog(&mut self.state);
                Outcome::handled(Persist::None)
            }
            _ => Outcome::ignored(),
        }
    }

    /// Whether a press on empty space should play the backdrop punch sound.
    /// Muted while a confirmation dialog is open.
    pub fn background_tap_allowed(&self) -> bool {
        self.state.dialog == Dialog::None
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
    }

    pub fn render(&self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        render::render(&self.state, f, area, cs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_key_earns_a_point() {
        let mut game = ClickerGame::new();
        let outcome = game.handle_input(&InputEvent::Key('c'));
        assert!(outcome.consumed);
        assert_eq!(outcome.sound, Some(SoundCue::Click));
        assert_eq!(outcome.persist, Persist::Snapshot);
        assert_eq!(game.state.score, 1);
        assert_eq!(game.state.total_clicks, 1);
    }

    #[test]
    fn space_also_clicks() {
        let mut game = ClickerGame::new();
        game.handle_input(&InputEvent::Key(' '));
        assert_eq!(game.state.score, 1);
    }

    #[test]
    fn click_action_matches_key_path() {
        let mut game = ClickerGame::new();
        game.handle_input(&InputEvent::Action(actions::CLICK_BUTTON));
        assert_eq!(game.state.score, 1);
        assert_eq!(game.state.total_clicks, 1);
    }

    #[test]
    fn tab_keys_switch_tabs() {
        let mut game = ClickerGame::new();
        game.handle_input(&InputEvent::Key('s'));
        assert_eq!(game.state.tab, Tab::Shop);
        game.handle_input(&InputEvent::Key('a'));
        assert_eq!(game.state.tab, Tab::Audio);
        game.handle_input(&InputEvent::Key('b'));
        assert_eq!(game.state.tab, Tab::Button);
    }

    #[test]
    fn buy_multiplier_via_key() {
        let mut game = ClickerGame::new();
        game.state.score = 50;
        let outcome = game.handle_input(&InputEvent::Key('1'));
        assert_eq!(outcome.persist, Persist::Snapshot);
        assert_eq!(game.state.mult_level, 1);
        assert_eq!(game.state.per_click, 2);
    }

    #[test]
    fn failed_purchase_consumes_but_does_not_save() {
        let mut game = ClickerGame::new();
        let outcome = game.handle_input(&InputEvent::Key('2'));
        assert!(outcome.consumed);
        assert_eq!(outcome.persist, Persist::None);
        assert_eq!(game.state.auto_count, 0);
    }

    #[test]
    fn dialog_blocks_other_keys() {
        let mut game = ClickerGame::new();
        game.handle_input(&InputEvent::Key('r'));
        assert_eq!(game.state.dialog, Dialog::ResetAll);

        // Clicking and buying must be inert while the dialog is up.
        let outcome = game.handle_input(&InputEvent::Key('c'));
        assert!(!outcome.consumed);
        assert_eq!(game.state.score, 0);

        let outcome = game.handle_input(&InputEvent::Action(actions::CLICK_BUTTON));
        assert!(!outcome.consumed);
        assert_eq!(game.state.total_clicks, 0);
    }

    #[test]
    fn dialog_confirm_resets_and_clears_save() {
        let mut game = ClickerGame::new();
        game.state.score = 500;
        game.state.mult_level = 2;
        game.state.per_click = 4;
        game.state.total_clicks = 40;
        game.handle_input(&InputEvent::Key('r'));

        let outcome = game.handle_input(&InputEvent::Key('y'));
        assert_eq!(outcome.persist, Persist::Clear);
        assert_eq!(game.state.score, 0);
        assert_eq!(game.state.per_click, 1);
        assert_eq!(game.state.total_clicks, 40);
        assert_eq!(game.state.dialog, Dialog::None);
    }

    #[test]
    fn clicks_reset_rewrites_only_clicks() {
        let mut game = ClickerGame::new();
        game.state.score = 500;
        game.state.total_clicks = 40;
        game.handle_input(&InputEvent::Key('t'));

        let outcome = game.handle_input(&InputEvent::Key('y'));
        assert_eq!(outcome.persist, Persist::RewriteClicks);
        assert_eq!(game.state.total_clicks, 0);
        assert_eq!(game.state.score, 500);
    }

    #[test]
    fn escape_cancels_dialog() {
        let mut game = ClickerGame::new();
        game.handle_input(&InputEvent::Key('t'));
        let outcome = game.handle_input(&InputEvent::Key('\u{1b}'));
        assert!(outcome.consumed);
        assert_eq!(game.state.dialog, Dialog::None);
        assert_eq!(game.state.total_clicks, 0);
    }

    #[test]
    fn background_tap_muted_while_dialog_open() {
        let mut game = ClickerGame::new();
        assert!(game.background_tap_allowed());

        game.handle_input(&InputEvent::Key('r'));
        assert!(!game.background_tap_allowed());

        game.handle_input(&InputEvent::Key('n'));
        assert!(game.background_tap_allowed());
    }

    #[test]
    fn cancel_without_dialog_is_ignored() {
        let mut game = ClickerGame::new();
        let outcome = game.handle_input(&InputEvent::Action(actions::DIALOG_CANCEL));
        assert!(!outcome.consumed);
    }

    #[test]
    fn audio_keys_adjust_settings() {
        let mut game = ClickerGame::new();
        game.handle_input(&InputEvent::Key('-'));
        assert!((game.state.audio.frequency_hz - 430.0).abs() < f64::EPSILON);
        game.handle_input(&InputEvent::Key('+'));
        game.handle_input(&InputEvent::Key('='));
        assert!((game.state.audio.frequency_hz - 450.0).abs() < f64::EPSILON);
        game.handle_input(&InputEvent::Key(']'));
        assert!((game.state.audio.duration_sec - 0.2).abs() < 1e-9);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut game = ClickerGame::new();
        let outcome = game.handle_input(&InputEvent::Key('z'));
        assert!(!outcome.consumed);
    }

    #[test]
    fn tick_applies_passive_income() {
        let mut game = ClickerGame::new();
        game.state.auto_count = 2; // 2 cps
        game.tick(3);
        assert_eq!(game.state.score, 6);
    }
}
