//! Save/load of progress to localStorage.
//!
//! The stored entry is a flat JSON object of exactly five fields:
//! `{score, perClick, multLevel, autoCount, totalClicks}`. Missing fields fall
//! back to their defaults, unknown fields are ignored, and malformed content
//! is treated as no save at all. Every storage or parse failure is swallowed
//! with a console warning — persistence errors are never surfaced to the
//! player, the session just runs from defaults or stops persisting.

#[cfg(any(target_arch = "wasm32", test))]
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// localStorage key.
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "rbc-save";

/// The persisted snapshot. Audio settings and UI state are deliberately
/// absent; they reset every session.
#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct SaveData {
    pub score: u64,
    #[serde(rename = "perClick")]
    pub per_click: u64,
    #[serde(rename = "multLevel")]
    pub mult_level: u32,
    #[serde(rename = "autoCount")]
    pub auto_count: u32,
    #[serde(rename = "totalClicks")]
    pub total_clicks: u64,
}

#[cfg(any(target_arch = "wasm32", test))]
impl Default for SaveData {
    fn default() -> Self {
        Self {
            score: 0,
            per_click: 1,
            mult_level: 0,
            auto_count: 0,
            total_clicks: 0,
        }
    }
}

/// Snapshot the five persisted fields.
#[cfg(any(target_arch = "wasm32", test))]
pub fn extract(state: &GameState) -> SaveData {
    SaveData {
        score: state.score,
        per_click: state.per_click,
        mult_level: state.mult_level,
        auto_count: state.auto_count,
        total_clicks: state.total_clicks,
    }
}

/// Restore the five persisted fields, leaving transient state untouched.
#[cfg(any(target_arch = "wasm32", test))]
pub fn apply(state: &mut GameState, save: &SaveData) {
    state.score = save.score;
    state.per_click = save.per_click;
    state.mult_level = save.mult_level;
    state.auto_count = save.auto_count;
    state.total_clicks = save.total_clicks;
}

/// Rewrite only the `totalClicks` field of a stored JSON snapshot, preserving
/// every other field byte-for-byte semantically (including fields this
/// version doesn't know about). Returns `None` when the input isn't a JSON
/// object.
#[cfg(any(target_arch = "wasm32", test))]
pub fn set_total_clicks_field(json: &str, total_clicks: u64) -> Option<String> {
    let mut value: serde_json::Value = serde_json::from_str(json).ok()?;
    let obj = value.as_object_mut()?;
    obj.insert("totalClicks".into(), serde_json::json!(total_clicks));
    serde_json::to_string(&value).ok()
}

#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load the snapshot into `state`. Returns false (leaving `state` as-is) when
/// there is no entry or it cannot be read.
#[cfg(target_arch = "wasm32")]
pub fn load_game(state: &mut GameState) -> bool {
    let storage = match get_storage() {
        Some(s) => s,
        None => return false,
    };

    let json = match storage.get_item(STORAGE_KEY) {
        Ok(Some(j)) => j,
        _ => return false,
    };

    let save: SaveData = match serde_json::from_str(&json) {
        Ok(s) => s,
        Err(e) => {
            web_sys::console::warn_1(&format!("discarding unreadable save: {e}").into());
            return false;
        }
    };

    apply(state, &save);
    true
}

/// Persist the current snapshot. Called after every state change.
#[cfg(target_arch = "wasm32")]
pub fn save_game(state: &GameState) {
    let json = match serde_json::to_string(&extract(state)) {
        Ok(j) => j,
        Err(e) => {
            web_sys::console::warn_1(&format!("failed to serialize save: {e}").into());
            return;
        }
    };
    if let Some(storage) = get_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
            web_sys::console::warn_1(&format!("failed to write save: {e:?}").into());
        }
    }
}

/// Remove the stored entry (full reset only).
#[cfg(target_arch = "wasm32")]
pub fn clear_save() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

/// Zero the stored entry's `totalClicks` in place, leaving the other stored
/// fields as they are. No-op when there is no readable entry.
#[cfg(target_arch = "wasm32")]
pub fn rewrite_total_clicks(total_clicks: u64) {
    let Some(storage) = get_storage() else { return };
    let json = match storage.get_item(STORAGE_KEY) {
        Ok(Some(j)) => j,
        _ => return,
    };
    if let Some(updated) = set_total_clicks_field(&json, total_clicks) {
        if let Err(e) = storage.set_item(STORAGE_KEY, &updated) {
            web_sys::console::warn_1(&format!("failed to rewrite save: {e:?}").into());
        }
    }
}

// Native builds have no localStorage; persistence is inert there so the rest
// of the crate stays testable.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_game(_state: &mut GameState) -> bool {
    false
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_game(_state: &GameState) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_save() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn rewrite_total_clicks(_total_clicks: u64) {}
