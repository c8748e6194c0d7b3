//! Browser platform layer
//!
//! Handles the DOM side of the game:
//! - Score readouts and audio (the feedback sink)
//! - Canvas placement for pointer scaling
//! - Event listener registration

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::{Closure, WasmClosure};
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlCanvasElement};

use crate::audio::AudioManager;
use crate::feedback::{Cue, FeedbackSink};
use crate::input::SurfaceRect;
use crate::settings::Settings;

/// Element ids of the score readouts
const PLAYER_SCORE_ID: &str = "playerScore";
const AI_SCORE_ID: &str = "aiScore";

/// Feedback sink backed by the page: score text plus audio cues
pub struct DomFeedback {
    player_score: Option<Element>,
    ai_score: Option<Element>,
    audio: AudioManager,
}

impl DomFeedback {
    pub fn new(document: &Document, settings: &Settings) -> Self {
        let player_score = document.get_element_by_id(PLAYER_SCORE_ID);
        let ai_score = document.get_element_by_id(AI_SCORE_ID);
        if player_score.is_none() || ai_score.is_none() {
            log::warn!("Score elements missing - scores will not be shown");
        }
        Self {
            player_score,
            ai_score,
            audio: AudioManager::new(document, settings),
        }
    }
}

impl FeedbackSink for DomFeedback {
    fn play_cue(&mut self, cue: Cue) {
        self.audio.play(cue);
    }

    fn show_scores(&mut self, player: u32, ai: u32) {
        if let Some(el) = &self.player_score {
            el.set_text_content(Some(&player.to_string()));
        }
        if let Some(el) = &self.ai_score {
            el.set_text_content(Some(&ai.to_string()));
        }
    }
}

/// Where the canvas currently sits in the viewport
pub fn surface_rect(canvas: &HtmlCanvasElement) -> SurfaceRect {
    let rect = canvas.get_bounding_client_rect();
    SurfaceRect {
        top: rect.top() as f32,
        height: rect.height() as f32,
    }
}

/// Register `closure` for `event` on `target` and leak it for the page's
/// lifetime. Non-passive listeners may call `preventDefault` to stop the
/// browser from scrolling or zooming.
pub fn listen<E>(target: &EventTarget, event: &str, passive: bool, closure: Closure<dyn FnMut(E)>)
where
    dyn FnMut(E): WasmClosure,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    if target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        log::warn!("Failed to register {event} listener");
    }
    closure.forget();
}
