//! Per-frame simulation
//!
//! All gameplay logic lives here. This module stays pure:
//! - One tick per rendered frame, no wall-clock time
//! - Randomness only through the injected RNG
//! - No rendering, audio or platform dependencies; effects leave as events

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{Ball, GameEvent, Paddle, Side, World};
pub use tick::{TickInput, tick, track_ball};
