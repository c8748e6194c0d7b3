//! Turns simulation events into side effects
//!
//! The simulation only reports what happened. This module decides which
//! sound cue each event gets and when the score display must refresh, and
//! hands both to a [`FeedbackSink`] (DOM + audio in the browser, a recorder
//! in tests).

use crate::sim::{GameEvent, World};

/// The two sound assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Paddle or wall contact
    Hit,
    /// Goal
    Score,
}

impl Cue {
    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::WallBounce | GameEvent::PlayerHit | GameEvent::AiHit => Cue::Hit,
            GameEvent::PlayerScored | GameEvent::AiScored => Cue::Score,
        }
    }
}

/// Receiver of feedback side effects
pub trait FeedbackSink {
    /// Restart the cue from the beginning and play it
    fn play_cue(&mut self, cue: Cue);
    /// Refresh both score readouts
    fn show_scores(&mut self, player: u32, ai: u32);
}

/// Feed one tick's events to `sink`, in order. Scoring events refresh the
/// score display before their cue plays.
///
/// Readouts come from `world` after the whole tick, so a tick with two
/// scoring events shows the final scores both times.
pub fn dispatch<S: FeedbackSink + ?Sized>(events: &[GameEvent], world: &World, sink: &mut S) {
    for &event in events {
        if event.is_score() {
            let (player, ai) = world.scores();
            sink.show_scores(player, ai);
        }
        sink.play_cue(Cue::for_event(event));
    }
}
