use std::fmt;

/// Errors raised while loading or validating a [`Config`](crate::Config).
#[derive(Debug)]
pub enum ConfigError {
    Parse(toml::de::Error),
    NonPositive { field: &'static str, value: f32 },
    PaddleTooTall { paddle_height: f32, field_height: f32 },
    BallTooLarge { ball_radius: f32, field_height: f32 },
    FieldTooNarrow { field_width: f32, required: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
            ConfigError::NonPositive { field, value } => {
                write!(f, "config value `{field}` must be finite and positive, got {value}")
            }
            ConfigError::PaddleTooTall {
                paddle_height,
                field_height,
            } => write!(
                f,
                "paddle height {paddle_height} does not fit in field height {field_height}"
            ),
            ConfigError::BallTooLarge {
                ball_radius,
                field_height,
            } => write!(
                f,
                "ball radius {ball_radius} does not fit in field height {field_height}"
            ),
            ConfigError::FieldTooNarrow {
                field_width,
                required,
            } => write!(
                f,
                "field width {field_width} cannot hold both paddles (needs more than {required})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}
