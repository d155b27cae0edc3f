use game_core::{ConfigError, Game};

use crate::session::Session;

/// How a headless session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub scores: (u32, u32),
    pub frames: u64,
    pub quit: bool,
}

/// Play a session frame by frame, feeding scripted keys before each tick
pub fn run(session: &Session) -> Result<Outcome, ConfigError> {
    let mut game = Game::new(session.config.clone())?;

    for frame in 0..session.frames {
        for event in session.events_at(frame) {
            game.push_key(event);
        }

        let goal = game.tick().goal;
        if let Some(scorer) = goal {
            let (left, right) = game.scores();
            log::info!("frame {frame}: {scorer} scored ({left}:{right})");
        }
        if game.events().round_reset {
            log::info!("frame {frame}: round reset");
        }
        if game.quit_requested() {
            log::info!("frame {frame}: quit requested");
            break;
        }
    }

    Ok(Outcome {
        scores: game.scores(),
        frames: game.frame(),
        quit: game.quit_requested(),
    })
}
