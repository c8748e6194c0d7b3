//! Audio cues
//!
//! Each cue plays from an `<audio>` element in the page, rewound to the start
//! so rapid hits retrigger instead of overlapping. When the page has no
//! element for a cue, a short tone is synthesized with the Web Audio API.

use wasm_bindgen::JsCast;
use web_sys::{AudioContext, Document, GainNode, HtmlAudioElement, OscillatorNode, OscillatorType};

use crate::feedback::Cue;
use crate::settings::Settings;

/// Element ids of the cue assets
const HIT_SOUND_ID: &str = "hitSound";
const SCORE_SOUND_ID: &str = "scoreSound";

/// Audio manager for the game
pub struct AudioManager {
    hit: Option<HtmlAudioElement>,
    score: Option<HtmlAudioElement>,
    /// Created lazily, only when a cue has no element
    ctx: Option<AudioContext>,
    /// Master * sfx volume, zero when muted
    volume: f32,
    synth_failed: bool,
}

impl AudioManager {
    pub fn new(document: &Document, settings: &Settings) -> Self {
        let find = |id: &str| {
            let el = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());
            if el.is_none() {
                log::warn!("No <audio id=\"{id}\"> - using synthesized cue");
            }
            el
        };

        Self {
            hit: find(HIT_SOUND_ID),
            score: find(SCORE_SOUND_ID),
            ctx: None,
            volume: settings.effective_volume(),
            synth_failed: false,
        }
    }

    /// Play a cue from time zero
    pub fn play(&mut self, cue: Cue) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }

        let element = match cue {
            Cue::Hit => self.hit.as_ref(),
            Cue::Score => self.score.as_ref(),
        };

        if let Some(el) = element {
            el.set_volume(vol as f64);
            el.set_current_time(0.0);
            // Rejected until the user has interacted with the page
            let _ = el.play();
            return;
        }

        let Some(ctx) = self.context() else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match cue {
            Cue::Hit => play_hit_tone(ctx, vol),
            Cue::Score => play_score_tone(ctx, vol),
        }
    }

    fn context(&mut self) -> Option<&AudioContext> {
        if self.ctx.is_none() && !self.synth_failed {
            match AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(_) => {
                    log::warn!("Failed to create AudioContext - audio disabled");
                    self.synth_failed = true;
                }
            }
        }
        self.ctx.as_ref()
    }
}

/// Create an oscillator with gain envelope
fn create_osc(
    ctx: &AudioContext,
    freq: f32,
    osc_type: OscillatorType,
) -> Option<(OscillatorNode, GainNode)> {
    let osc = ctx.create_oscillator().ok()?;
    let gain = ctx.create_gain().ok()?;

    osc.set_type(osc_type);
    osc.frequency().set_value(freq);
    osc.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    Some((osc, gain))
}

/// Paddle/wall hit - short blip
fn play_hit_tone(ctx: &AudioContext, vol: f32) {
    let Some((osc, gain)) = create_osc(ctx, 440.0, OscillatorType::Square) else {
        return;
    };
    let t = ctx.current_time();

    gain.gain().set_value_at_time(vol * 0.25, t).ok();
    gain.gain()
        .exponential_ramp_to_value_at_time(0.01, t + 0.06)
        .ok();

    osc.start().ok();
    osc.stop_with_when(t + 0.08).ok();
}

/// Goal - falling two-step tone
fn play_score_tone(ctx: &AudioContext, vol: f32) {
    let Some((osc, gain)) = create_osc(ctx, 660.0, OscillatorType::Triangle) else {
        return;
    };
    let t = ctx.current_time();

    gain.gain().set_value_at_time(vol * 0.4, t).ok();
    gain.gain()
        .exponential_ramp_to_value_at_time(0.01, t + 0.35)
        .ok();
    osc.frequency().set_value_at_time(660.0, t).ok();
    osc.frequency().set_value_at_time(440.0, t + 0.15).ok();

    osc.start().ok();
    osc.stop_with_when(t + 0.4).ok();
}
