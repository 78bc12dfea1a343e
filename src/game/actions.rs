//! Semantic action IDs for click targets.
//!
//! Each constant represents a distinct clickable action in the UI. These IDs
//! are registered during render and dispatched via `InputEvent::Action`;
//! keyboard shortcuts map onto the same IDs.

// ── Core actions ────────────────────────────────────────────────
pub const CLICK_BUTTON: u16 = 0;
pub const OPEN_RESET_ALL: u16 = 1;
pub const OPEN_RESET_CLICKS: u16 = 2;

// ── Tab navigation ──────────────────────────────────────────────
pub const TAB_BUTTON: u16 = 10;
pub const TAB_SHOP: u16 = 11;
pub const TAB_AUDIO: u16 = 12;

// ── Shop purchases ──────────────────────────────────────────────
pub const BUY_MULTIPLIER: u16 = 100;
pub const BUY_AUTO: u16 = 101;

// ── Audio tab controls ──────────────────────────────────────────
pub const AUDIO_WAVEFORM_NEXT: u16 = 200;
pub const AUDIO_FREQ_DOWN: u16 = 201;
pub const AUDIO_FREQ_UP: u16 = 202;
pub const AUDIO_DUR_DOWN: u16 = 203;
pub const AUDIO_DUR_UP: u16 = 204;

// ── Confirmation dialogs ────────────────────────────────────────
pub const DIALOG_CONFIRM: u16 = 300;
pub const DIALOG_CANCEL: u16 = 301;
