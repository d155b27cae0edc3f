use glam::Vec2;
use serde::Deserialize;

use crate::components::PlayerId;
use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration
///
/// Every field parameterizes geometry or speed only. Missing fields in a
/// TOML document fall back to [`Params`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub base_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            base_speed: Params::BASE_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject geometry the simulation cannot represent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("base_speed", self.base_speed),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                field_height: self.field_height,
            });
        }

        if self.ball_radius * 2.0 > self.field_height {
            return Err(ConfigError::BallTooLarge {
                ball_radius: self.ball_radius,
                field_height: self.field_height,
            });
        }

        let required = 2.0 * (Params::PADDLE_INSET + self.paddle_width);
        if self.field_width <= required {
            return Err(ConfigError::FieldTooNarrow {
                field_width: self.field_width,
                required,
            });
        }

        Ok(())
    }

    /// Fixed X anchor of a paddle's left edge
    pub fn paddle_x(&self, player: PlayerId) -> f32 {
        match player {
            PlayerId::Left => Params::PADDLE_INSET,
            PlayerId::Right => self.field_width - Params::PADDLE_INSET - self.paddle_width,
        }
    }

    /// Y of a paddle's top edge when vertically centered
    pub fn paddle_origin_y(&self) -> f32 {
        self.field_height * 0.5 - self.paddle_height * 0.5
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.field_width * 0.5, self.field_height * 0.5)
    }

    /// Clamp a paddle's top edge so the paddle stays inside the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        if y < 0.0 {
            0.0
        } else if y + self.paddle_height > self.field_height {
            self.field_height - self.paddle_height
        } else {
            y
        }
    }
}
