use hecs::World;

use crate::components::*;
use crate::input::Intent;
use crate::Config;

/// Gameplay events raised during the current frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub paddle_hit: Option<PlayerId>,
    pub wall_bounce: bool,
    pub goal: Option<PlayerId>, // The player who scored
    pub round_reset: bool,
    pub quit_requested: bool, // Survives `clear` until the shell acts on it
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.paddle_hit = None;
        self.wall_bounce = false;
        self.goal = None;
        self.round_reset = false;
    }
}

/// Intents queued by the shell between frames
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    pub intents: Vec<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    /// Take every queued intent in arrival order
    pub fn drain(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.intents)
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

/// Read-only copy of the round for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
}

/// Both paddles and the ball. Scores live on the paddles.
pub struct RoundState {
    pub world: World,
}

impl RoundState {
    /// Spawn both paddles at their origins and the ball at the field center
    pub fn new(config: &Config) -> Self {
        let mut world = World::new();
        for player in PlayerId::ALL {
            crate::create_paddle(&mut world, player, config);
        }
        crate::create_ball(&mut world, Ball::spawn(config));
        Self { world }
    }

    pub fn paddle(&self, player: PlayerId) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .find(|paddle| paddle.player == player)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// (player 1, player 2)
    pub fn scores(&self) -> (u32, u32) {
        let score = |player: PlayerId| self.paddle(player).map_or(0, |p| p.score);
        (score(PlayerId::Left), score(PlayerId::Right))
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        Some(Snapshot {
            left: self.paddle(PlayerId::Left)?,
            right: self.paddle(PlayerId::Right)?,
            ball: self.ball()?,
        })
    }
}
