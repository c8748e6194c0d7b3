//! Pong Canvas - classic two-paddle Pong against a reactive AI
//!
//! Core modules:
//! - `sim`: Per-frame simulation (collisions, scoring, AI tracking)
//! - `input`: Pointer/touch normalization into field coordinates
//! - `feedback`: Event dispatch to sound cues and score text
//! - `renderer`: Draw list construction and Canvas 2D backend
//! - `settings`: Game tuning and audio preferences
//! - `platform`: Browser wiring (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod error;
pub mod feedback;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{GameConfig, Settings};

/// Game configuration constants
pub mod consts {
    /// Default playfield size (the host canvas is 800x500)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Paddle speed in field units per tick (the AI moves at a fraction of it)
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 14.0;
    /// Horizontal serve speed in field units per tick
    pub const BALL_BASE_SPEED: f32 = 5.0;

    /// dy = ENGLISH_FACTOR * (ball center - paddle center) after a paddle hit
    pub const ENGLISH_FACTOR: f32 = 0.20;
    /// AI paddle step = AI_SPEED_FACTOR * PADDLE_SPEED
    pub const AI_SPEED_FACTOR: f32 = 0.7;
    /// Serve dy is drawn from [-SERVE_SPREAD / 2, SERVE_SPREAD / 2]
    pub const SERVE_SPREAD: f32 = 6.0;

    /// Net dash length and period
    pub const NET_DASH: f32 = 10.0;
    pub const NET_PERIOD: f32 = 20.0;
}
