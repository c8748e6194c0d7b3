//! Configuration error types
//!
//! The simulation itself cannot fail; only loading settings can.

use thiserror::Error;

/// Errors raised while loading or validating [`Settings`](crate::Settings).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings JSON could not be parsed.
    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),

    /// A size or speed that must be strictly positive was not.
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidDimension {
        /// Field name as it appears in the JSON.
        name: &'static str,
        /// Offending value.
        value: f32,
    },

    /// The paddles and ball do not fit in the playfield.
    #[error("field {width}x{height} cannot hold two {paddle_width}x{paddle_height} paddles")]
    FieldTooSmall {
        width: f32,
        height: f32,
        paddle_width: f32,
        paddle_height: f32,
    },

    /// Volumes are fractions in [0, 1].
    #[error("{name} must be within 0.0..=1.0, got {value}")]
    InvalidVolume { name: &'static str, value: f32 },
}
