//! Session files: configuration plus a script of key events

use std::fmt;
use std::path::Path;

use game_core::{Config, ConfigError, Key, KeyEvent};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Down,
    Up,
}

/// One key event fired at the start of `frame`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptedKey {
    pub frame: u64,
    pub key: Key,
    #[serde(default)]
    pub action: Action,
}

impl ScriptedKey {
    pub fn event(&self) -> KeyEvent {
        match self.action {
            Action::Down => KeyEvent::Pressed(self.key),
            Action::Up => KeyEvent::Released(self.key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Session {
    pub frames: u64,
    pub config: Config,
    pub events: Vec<ScriptedKey>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            frames: 600,
            config: Config::default(),
            events: Vec::new(),
        }
    }
}

impl Session {
    pub fn from_toml_str(src: &str) -> Result<Self, SessionError> {
        let session: Session = toml::from_str(src)?;
        session.config.validate()?;
        Ok(session)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    /// Key events scripted for `frame`, in file order
    pub fn events_at(&self, frame: u64) -> impl Iterator<Item = KeyEvent> + '_ {
        self.events
            .iter()
            .filter(move |scripted| scripted.frame == frame)
            .map(ScriptedKey::event)
    }
}

#[derive(Debug)]
pub enum SessionError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    Config(ConfigError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io { path, source } => write!(f, "cannot read session {path}: {source}"),
            SessionError::Parse(err) => write!(f, "session parse error: {err}"),
            SessionError::Config(err) => write!(f, "invalid session config: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io { source, .. } => Some(source),
            SessionError::Parse(err) => Some(err),
            SessionError::Config(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for SessionError {
    fn from(err: toml::de::Error) -> Self {
        SessionError::Parse(err)
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        SessionError::Config(err)
    }
}
