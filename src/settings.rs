//! Game settings and preferences
//!
//! Read once at startup from an optional JSON block embedded in the page.
//! Nothing is written back.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Playfield geometry and gameplay tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Field units per tick
    pub paddle_speed: f32,
    pub ball_size: f32,
    /// Horizontal serve speed, field units per tick
    pub ball_base_speed: f32,
    /// Scale applied to the contact offset on paddle hits
    pub english_factor: f32,
    /// AI step as a fraction of `paddle_speed`
    pub ai_speed_factor: f32,
    /// Width of the uniform serve dy range (centered on zero)
    pub serve_spread: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            ball_size: BALL_SIZE,
            ball_base_speed: BALL_BASE_SPEED,
            english_factor: ENGLISH_FACTOR,
            ai_speed_factor: AI_SPEED_FACTOR,
            serve_spread: SERVE_SPREAD,
        }
    }
}

impl GameConfig {
    /// Distance the AI paddle moves per tick while tracking
    pub fn ai_step(&self) -> f32 {
        self.ai_speed_factor * self.paddle_speed
    }

    /// This config on a `width` x `height` field. Falls back to the default
    /// config if the paddles and ball do not fit.
    pub fn fit_to(&self, width: f32, height: f32) -> GameConfig {
        let config = GameConfig {
            field_width: width,
            field_height: height,
            ..*self
        };
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Field {width}x{height} does not fit the game ({e}), using default field");
                GameConfig::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_base_speed", self.ball_base_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        for (name, value) in [
            ("english_factor", self.english_factor),
            ("ai_speed_factor", self.ai_speed_factor),
            ("serve_spread", self.serve_spread),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        if self.field_width <= 2.0 * self.paddle_width
            || self.field_height <= self.paddle_height
            || self.field_height <= self.ball_size
        {
            return Err(ConfigError::FieldTooSmall {
                width: self.field_width,
                height: self.field_height,
                paddle_width: self.paddle_width,
                paddle_height: self.paddle_height,
            });
        }

        Ok(())
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Use the canvas element's size for the field instead of `game.field_*`
    pub fit_canvas: bool,
    pub game: GameConfig,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fit_canvas: true,
            game: GameConfig::default(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Id of the `<script type="application/json">` element holding overrides
    pub const ELEMENT_ID: &'static str = "pong-settings";

    /// Parse and validate settings; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;
        for (name, value) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidVolume { name, value });
            }
        }
        Ok(())
    }

    /// Volume actually applied to sound cues
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(json) = json else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings: {e}");
                Self::default()
            }
        }
    }

    /// Native: defaults only
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Settings::default().validate().is_ok());
        assert_eq!(GameConfig::default().field_width, 800.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "muted": true, "game": { "paddle_height": 100 } }"#)
            .expect("valid settings");
        assert!(settings.muted);
        assert_eq!(settings.game.paddle_height, 100.0);
        assert_eq!(settings.game.ball_size, BALL_SIZE);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_positive_dimension() {
        let err = Settings::from_json(r#"{ "game": { "ball_size": 0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDimension { name: "ball_size", .. }
        ));
    }

    #[test]
    fn test_rejects_field_smaller_than_paddles() {
        let config = GameConfig {
            field_width: 20.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FieldTooSmall { .. })
        ));
    }

    #[test]
    fn test_rejects_volume_out_of_range() {
        let err = Settings::from_json(r#"{ "sfx_volume": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVolume { name: "sfx_volume", .. }));
    }

    #[test]
    fn test_fit_to_adopts_canvas_size() {
        let config = GameConfig {
            paddle_height: 100.0,
            ..GameConfig::default()
        };
        let fitted = config.fit_to(640.0, 360.0);
        assert_eq!(fitted.field_width, 640.0);
        assert_eq!(fitted.field_height, 360.0);
        assert_eq!(fitted.paddle_height, 100.0);
    }

    #[test]
    fn test_fit_to_falls_back_when_canvas_too_small() {
        let config = GameConfig {
            paddle_height: 100.0,
            ..GameConfig::default()
        };
        // Shorter than the paddle
        assert_eq!(config.fit_to(800.0, 60.0), GameConfig::default());
        // Zero-sized canvas
        assert_eq!(config.fit_to(0.0, 0.0), GameConfig::default());
    }

    #[test]
    fn test_ai_step() {
        let config = GameConfig::default();
        assert!((config.ai_step() - 4.9).abs() < 1e-5);
    }
}
