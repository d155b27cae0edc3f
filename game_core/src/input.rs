//! Keyboard translation layer
//!
//! Turns raw key events into [`Intent`]s. The shell queues intents as they
//! arrive; the core drains them once per frame.

use serde::Deserialize;

use crate::components::{Direction, PlayerId};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Enter,
    Escape,
}

impl Key {
    /// Accepts DOM `KeyboardEvent.key` names as well as short names
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "Up" | "up" => Some(Key::Up),
            "ArrowDown" | "Down" | "down" => Some(Key::Down),
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            "Enter" | "enter" | "Return" => Some(Key::Enter),
            "Escape" | "escape" | "Esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

impl TryFrom<String> for Key {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Key::from_name(&name).ok_or_else(|| format!("unknown key `{name}`"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// A directive consumed by the core on the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Press { player: PlayerId, dir: Direction },
    Release { player: PlayerId, dir: Direction },
    ResetRound,
    Quit,
}

/// Steering keys: arrows drive player 1, W/S drive player 2
fn steering(key: Key) -> Option<(PlayerId, Direction)> {
    match key {
        Key::Up => Some((PlayerId::Left, Direction::Up)),
        Key::Down => Some((PlayerId::Left, Direction::Down)),
        Key::W => Some((PlayerId::Right, Direction::Up)),
        Key::S => Some((PlayerId::Right, Direction::Down)),
        Key::Enter | Key::Escape => None,
    }
}

/// Translate a key event into an intent
pub fn translate(event: KeyEvent) -> Option<Intent> {
    match event {
        KeyEvent::Pressed(Key::Enter) => Some(Intent::ResetRound),
        KeyEvent::Pressed(Key::Escape) => Some(Intent::Quit),
        KeyEvent::Pressed(key) => steering(key).map(|(player, dir)| Intent::Press { player, dir }),
        KeyEvent::Released(key) => {
            steering(key).map(|(player, dir)| Intent::Release { player, dir })
        }
    }
}
