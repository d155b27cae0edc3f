use std::fmt;

use glam::Vec2;

use crate::geometry::Aabb;
use crate::{Config, Params};

/// Which side a paddle defends. `Left` is player 1, `Right` is player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerId {
    Left,
    Right,
}

impl PlayerId {
    /// Collision priority order: player 1 is always tested first
    pub const ALL: [PlayerId; 2] = [PlayerId::Left, PlayerId::Right];

    pub fn opponent(self) -> Self {
        match self {
            PlayerId::Left => PlayerId::Right,
            PlayerId::Right => PlayerId::Left,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Left => write!(f, "player 1"),
            PlayerId::Right => write!(f, "player 2"),
        }
    }
}

/// Vertical steering direction. Screen space: y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Idle,
    Down,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Idle => 0.0,
            Direction::Down => 1.0,
        }
    }
}

/// Paddle component - a player's paddle plus that player's score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub player: PlayerId,
    pub pos: Vec2,  // Top-left corner
    pub size: Vec2, // Width, height
    pub speed: f32, // Signed vertical speed, 0 when idle
    pub score: u32,
    pub origin_x: f32,
}

impl Paddle {
    pub fn new(player: PlayerId, config: &Config) -> Self {
        let origin_x = config.paddle_x(player);
        Self {
            player,
            pos: Vec2::new(origin_x, config.paddle_origin_y()),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            speed: 0.0,
            score: 0,
            origin_x,
        }
    }

    /// Integrate one frame of motion, then clamp to the field
    pub fn advance(&mut self, config: &Config) {
        self.pos.y = config.clamp_paddle_y(self.pos.y + self.speed);
    }

    /// Speed is always one of `{-base_speed, 0, +base_speed}`
    pub fn set_direction(&mut self, dir: Direction, base_speed: f32) {
        self.speed = dir.sign() * base_speed;
    }

    /// Back to the origin anchor with a zero score
    pub fn reset(&mut self, config: &Config) {
        self.pos = Vec2::new(self.origin_x, config.paddle_origin_y());
        self.score = 0;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin_size(self.pos, self.size)
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Center
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// A ball at the field center moving at base speed down and to the right
    pub fn spawn(config: &Config) -> Self {
        Self::new(
            config.center(),
            Vec2::splat(config.base_speed),
            config.ball_radius,
        )
    }

    /// Integrate one frame of motion.
    ///
    /// Bounces off the top and bottom walls by flipping `vel.y` once the
    /// post-move position touches or crosses a wall. Position is not
    /// clamped, so the ball may sit past the wall for a frame. The side
    /// lines are goal lines and are handled by scoring, not here.
    ///
    /// Returns `true` when a wall bounce happened.
    pub fn advance(&mut self, field_height: f32) -> bool {
        self.pos += self.vel;

        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= field_height {
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }

    /// Paddle contact: reflect and speed up horizontally, speed up vertically.
    /// `vel.y` keeps its sign.
    pub fn turn(&mut self) {
        self.vel *= Vec2::new(-Params::TURN_FACTOR, Params::TURN_FACTOR);
    }

    pub fn reset(&mut self, config: &Config) {
        self.pos = config.center();
        self.vel = Vec2::splat(config.base_speed);
    }
}

/// Held steering direction for a paddle, fed by intents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: Direction,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, dir: Direction) {
        self.dir = dir;
    }

    /// Only releasing the held direction stops the paddle; a late release of
    /// the other key after a quick switch is ignored.
    pub fn release(&mut self, dir: Direction) {
        if self.dir == dir {
            self.dir = Direction::Idle;
        }
    }
}
