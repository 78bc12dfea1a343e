//! Procedural sound effects via the Web Audio API.
//!
//! No audio files — every effect is an oscillator/noise graph built on the
//! fly. The `AudioContext` is created lazily on the first sound-producing
//! action: browsers refuse to construct one before a user gesture, and every
//! call site here is an input handler, so the first call is always safe.

use crate::game::state::AudioSettings;

/// Envelope floor for exponential gain ramps (must stay above zero).
#[cfg(any(target_arch = "wasm32", test))]
const ENVELOPE_FLOOR: f64 = 0.001;

/// Owns the session's audio engine handle.
///
/// Lifecycle is uninitialized → ready; a failed construction disables audio
/// for the rest of the session (logged once, never surfaced to the player —
/// same policy as persistence errors).
pub struct SoundPlayer {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<web_sys::AudioContext>,
    #[cfg(target_arch = "wasm32")]
    init_failed: bool,
}

impl SoundPlayer {
    pub fn new() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            ctx: None,
            #[cfg(target_arch = "wasm32")]
            init_failed: false,
        }
    }
}

/// Fill a noise burst with a linearly decaying amplitude:
/// `sample[i] = (rand*2 - 1) * (1 - i/len)`, with `rand` in `[0,1)`.
#[cfg(any(target_arch = "wasm32", test))]
pub fn noise_burst(len: usize, mut rand: impl FnMut() -> f64) -> Vec<f32> {
    let mut samples = Vec::with_capacity(len);
    for i in 0..len {
        let amp = 1.0 - i as f64 / len as f64;
        samples.push(((rand() * 2.0 - 1.0) * amp) as f32);
    }
    samples
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;
    use crate::game::state::Waveform;
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    fn osc_type(waveform: Waveform) -> OscillatorType {
        match waveform {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Square => OscillatorType::Square,
            Waveform::Sawtooth => OscillatorType::Sawtooth,
            Waveform::Triangle => OscillatorType::Triangle,
        }
    }

    impl SoundPlayer {
        /// Create (or reuse) the session's `AudioContext`, resuming it if the
        /// browser auto-suspended it.
        fn ensure_ctx(&mut self) -> Option<&AudioContext> {
            if self.ctx.is_none() && !self.init_failed {
                match AudioContext::new() {
                    Ok(ctx) => self.ctx = Some(ctx),
                    Err(e) => {
                        web_sys::console::warn_1(
                            &format!("audio disabled: AudioContext failed: {e:?}").into(),
                        );
                        self.init_failed = true;
                    }
                }
            }
            let ctx = self.ctx.as_ref()?;
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
            Some(ctx)
        }

        /// Click feedback: one oscillator voice with the player's waveform and
        /// frequency (plus up to 10 Hz of jitter so rapid clicks don't sound
        /// machine-gun identical), gain decaying 0.2 → floor over the
        /// configured duration.
        pub fn play_click(&mut self, settings: &AudioSettings) {
            let freq = settings.frequency_hz + js_sys::Math::random() * 10.0;
            let waveform = settings.waveform;
            let duration = settings.duration_sec;
            let Some(ctx) = self.ensure_ctx() else { return };

            let Some((osc, gain)) = create_voice(ctx, freq, osc_type(waveform)) else {
                return;
            };
            let t = ctx.current_time();
            gain.gain().set_value_at_time(0.2, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(ENVELOPE_FLOOR as f32, t + duration)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + duration).ok();
        }

        /// Background-tap feedback: a sine sweep 120 → 60 Hz layered with a
        /// short decaying noise burst for the impact.
        pub fn play_punch(&mut self) {
            let Some(ctx) = self.ensure_ctx() else { return };
            let t = ctx.current_time();

            if let Some((osc, gain)) = create_voice(ctx, 120.0, OscillatorType::Sine) {
                gain.gain().set_value_at_time(0.6, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(ENVELOPE_FLOOR as f32, t + 0.25)
                    .ok();
                osc.frequency().set_value_at_time(120.0, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(60.0, t + 0.25)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.3).ok();
            }

            play_noise_burst(ctx, t);
        }
    }

    /// Oscillator + gain wired to the destination.
    fn create_voice(
        ctx: &AudioContext,
        freq: f64,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;
        osc.set_type(osc_type);
        osc.frequency().set_value(freq as f32);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;
        Some((osc, gain))
    }

    /// 0.1s of amplitude-decaying white noise through its own gain ramp.
    fn play_noise_burst(ctx: &AudioContext, t: f64) {
        let sample_rate = ctx.sample_rate();
        let len = (sample_rate as f64 * 0.1) as usize;
        if len == 0 {
            return;
        }
        let Ok(buffer) = ctx.create_buffer(1, len as u32, sample_rate) else {
            return;
        };
        let mut samples = noise_burst(len, js_sys::Math::random);
        if buffer.copy_to_channel(&mut samples, 0).is_err() {
            return;
        }

        let Ok(source) = ctx.create_buffer_source() else {
            return;
        };
        source.set_buffer(Some(&buffer));
        let Ok(gain) = ctx.create_gain() else { return };
        gain.gain().set_value_at_time(0.4, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(ENVELOPE_FLOOR as f32, t + 0.15)
            .ok();
        if source.connect_with_audio_node(&gain).is_err() {
            return;
        }
        if gain.connect_with_audio_node(&ctx.destination()).is_err() {
            return;
        }
        source.start().ok();
        source.stop_with_when(t + 0.15).ok();
    }
}

// Native builds (cargo test) never produce sound; the player is inert.
#[cfg(not(target_arch = "wasm32"))]
impl SoundPlayer {
    pub fn play_click(&mut self, _settings: &AudioSettings) {}
    pub fn play_punch(&mut self) {}
}
