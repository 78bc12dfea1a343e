//! Game logic — pure functions over [`GameState`], fully testable.

use super::state::{Dialog, GameState};

/// Ticks the pressed-button art stays visible after a click.
const CLICK_FLASH_TICKS: u32 = 2;

/// Frequency bounds for the Audio tab's stepper (Hz).
const FREQ_MIN: f64 = 20.0;
const FREQ_MAX: f64 = 20_000.0;
/// Duration bounds for the click tone (seconds).
const DUR_MIN: f64 = 0.05;
const DUR_MAX: f64 = 2.0;

/// Manual click: always succeeds. Saturating, like all score arithmetic —
/// deep endgame states must degrade instead of wrapping.
pub fn click(state: &mut GameState) {
    state.score = state.score.saturating_add(state.per_click);
    state.total_clicks = state.total_clicks.saturating_add(1);
    state.click_flash = CLICK_FLASH_TICKS;
}

/// Buy one multiplier level, doubling per-click power.
/// Fails closed (no state change) when unaffordable.
pub fn buy_multiplier(state: &mut GameState) -> bool {
    let cost = state.multiplier_cost();
    if state.score < cost {
        return false;
    }
    state.score -= cost;
    state.mult_level += 1;
    state.per_click = state.per_click.saturating_mul(2);
    true
}

/// Buy one auto-clicker. Fails closed when unaffordable.
pub fn buy_auto(state: &mut GameState) -> bool {
    let cost = state.auto_cost();
    if state.score < cost {
        return false;
    }
    state.score -= cost;
    state.auto_count += 1;
    true
}

/// Advance the passive yield by `delta_ticks` whole seconds.
pub fn tick(state: &mut GameState, delta_ticks: u32) {
    if delta_ticks == 0 {
        return;
    }
    let earned = state.cps().saturating_mul(delta_ticks as u64);
    state.score = state.score.saturating_add(earned);
    state.click_flash = state.click_flash.saturating_sub(delta_ticks);
}

/// Open the full-reset confirmation dialog.
pub fn request_reset_all(state: &mut GameState) {
    state.dialog = Dialog::ResetAll;
}

/// Open the clicks-only reset confirmation dialog.
pub fn request_reset_clicks(state: &mut GameState) {
    state.dialog = Dialog::ResetClicks;
}

/// Close whichever dialog is open without performing its reset.
pub fn cancel_dialog(state: &mut GameState) {
    state.dialog = Dialog::None;
}

/// Confirmed full reset: progress returns to defaults, lifetime clicks stay.
pub fn confirm_reset_all(state: &mut GameState) {
    state.score = 0;
    state.per_click = 1;
    state.mult_level = 0;
    state.auto_count = 0;
    state.dialog = Dialog::None;
}

/// Confirmed clicks-only reset: zero the lifetime counter, nothing else.
pub fn confirm_reset_clicks(state: &mut GameState) {
    state.total_clicks = 0;
    state.dialog = Dialog::None;
}

/// Advance the click-sound waveform selector.
pub fn cycle_waveform(state: &mut GameState) {
    state.audio.waveform = state.audio.waveform.next();
}

/// Step the click-sound frequency by `delta` Hz, clamped to audible range.
pub fn adjust_frequency(state: &mut GameState, delta: f64) {
    state.audio.frequency_hz = (state.audio.frequency_hz + delta).clamp(FREQ_MIN, FREQ_MAX);
}

/// Step the click-sound duration by `delta` seconds.
pub fn adjust_duration(state: &mut GameState, delta: f64) {
    state.audio.duration_sec = (state.audio.duration_sec + delta).clamp(DUR_MIN, DUR_MAX);
}

/// Format an integer with comma grouping (1234567 → "1,234,567").
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut grouped = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}
