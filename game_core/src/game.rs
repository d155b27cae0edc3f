//! Frame orchestrator owned by the shell

use crate::systems::reset_round;
use crate::{
    translate, Config, ConfigError, Direction, Events, Intent, IntentQueue, KeyEvent, Paddle,
    PaddleIntent, PlayerId, RoundState, Snapshot,
};

/// A running game: configuration, round state and the input/event plumbing
/// around it.
pub struct Game {
    config: Config,
    round: RoundState,
    queue: IntentQueue,
    events: Events,
    frame: u64,
}

impl Game {
    /// Validate `config` and spawn a fresh round
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let round = RoundState::new(&config);
        log::info!(
            "new game on a {}x{} field",
            config.field_width,
            config.field_height
        );
        Ok(Self {
            config,
            round,
            queue: IntentQueue::new(),
            events: Events::new(),
            frame: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Direct access for shells and tests that place entities by hand
    pub fn round_mut(&mut self) -> &mut RoundState {
        &mut self.round
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn quit_requested(&self) -> bool {
        self.events.quit_requested
    }

    /// Translate a key event and queue the resulting intent, if any
    pub fn push_key(&mut self, event: KeyEvent) {
        if let Some(intent) = translate(event) {
            self.queue.push(intent);
        }
    }

    pub fn push_intent(&mut self, intent: Intent) {
        self.queue.push(intent);
    }

    /// Set a paddle's steering immediately, bypassing the queue
    pub fn set_paddle_velocity(&mut self, player: PlayerId, dir: Direction) {
        let base_speed = self.config.base_speed;
        for (_entity, (paddle, intent)) in self
            .round
            .world
            .query_mut::<(&mut Paddle, &mut PaddleIntent)>()
        {
            if paddle.player == player {
                intent.press(dir);
                paddle.set_direction(dir, base_speed);
            }
        }
    }

    /// Reset both paddles and the ball immediately and zero the scores
    pub fn trigger_round_reset(&mut self) {
        reset_round(&mut self.round.world, &self.config, &mut self.events);
    }

    pub fn advance_frame(&mut self) {
        crate::advance_frame(&mut self.round, &self.config, &mut self.events);
    }

    pub fn run_collisions(&mut self) {
        crate::run_collisions(&mut self.round, &self.config, &mut self.events);
    }

    /// One full frame: queued intents, motion, collisions
    pub fn tick(&mut self) -> &Events {
        crate::step(
            &mut self.round,
            &self.config,
            &mut self.queue,
            &mut self.events,
        );
        self.frame += 1;
        &self.events
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.round.snapshot()
    }

    /// (player 1, player 2)
    pub fn scores(&self) -> (u32, u32) {
        self.round.scores()
    }
}
