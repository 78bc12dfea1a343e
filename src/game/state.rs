//! Game state definitions and the economy's derived values.

/// Oscillator waveforms the player can pick for the click sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// All waveforms in selector order.
    pub fn all() -> &'static [Waveform] {
        &[
            Waveform::Sine,
            Waveform::Square,
            Waveform::Sawtooth,
            Waveform::Triangle,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "Sine",
            Waveform::Square => "Square",
            Waveform::Sawtooth => "Sawtooth",
            Waveform::Triangle => "Triangle",
        }
    }

    /// Next waveform in selector order, wrapping around.
    pub fn next(&self) -> Waveform {
        let all = Waveform::all();
        let idx = all.iter().position(|w| w == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// Click-sound parameters, editable on the Audio tab. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioSettings {
    pub waveform: Waveform,
    pub frequency_hz: f64,
    pub duration_sec: f64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            waveform: Waveform::Square,
            frequency_hz: 440.0,
            duration_sec: 0.15,
        }
    }
}

/// Which menu tab is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Button,
    Shop,
    Audio,
}

/// The active confirmation dialog, if any. At most one is ever open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    None,
    ResetAll,
    ResetClicks,
}

/// Multiplier cost curve base and growth.
const MULT_BASE: f64 = 50.0;
const MULT_SCALE: f64 = 1.5;
/// Auto-clicker cost curve base and growth.
const AUTO_BASE: f64 = 100.0;
const AUTO_SCALE: f64 = 1.6;

/// Full session state. One instance lives in the top-level `ClickerGame`;
/// every action takes it by `&mut` — no globals, so tests build fresh ones.
pub struct GameState {
    /// Spendable points.
    pub score: u64,
    /// Points per manual click. Always `2^mult_level`, saturating at
    /// `u64::MAX`.
    pub per_click: u64,
    /// Multiplier purchases made.
    pub mult_level: u32,
    /// Auto-clicker purchases made.
    pub auto_count: u32,
    /// Lifetime manual clicks; survives a full reset.
    pub total_clicks: u64,
    /// Click-sound parameters (transient).
    pub audio: AudioSettings,
    /// Active tab (transient).
    pub tab: Tab,
    /// Open confirmation dialog (transient).
    pub dialog: Dialog,
    /// Ticks remaining of the pressed-button visual (transient).
    pub click_flash: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            per_click: 1,
            mult_level: 0,
            auto_count: 0,
            total_clicks: 0,
            audio: AudioSettings::default(),
            tab: Tab::Button,
            dialog: Dialog::None,
            click_flash: 0,
        }
    }

    /// Cost of the next multiplier level: `floor(50 * 1.5^mult_level)`.
    pub fn multiplier_cost(&self) -> u64 {
        (MULT_BASE * MULT_SCALE.powi(self.mult_level as i32)).floor() as u64
    }

    /// Cost of the next auto-clicker: `floor(100 * 1.6^auto_count)`.
    pub fn auto_cost(&self) -> u64 {
        (AUTO_BASE * AUTO_SCALE.powi(self.auto_count as i32)).floor() as u64
    }

    /// Passive yield per second: `2^(auto_count-1)`, or 0 with no
    /// auto-clickers. Doubles with each purchase (1 → 2 → 4 → 8…),
    /// saturating at `u64::MAX` once the doubling outgrows 64 bits.
    pub fn cps(&self) -> u64 {
        match self.auto_count {
            0 => 0,
            n => 1u64.checked_shl(n - 1).unwrap_or(u64::MAX),
        }
    }
}
