pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one deterministic frame of the game
///
/// Intents queued since the last frame are applied first, then every entity
/// advances, then collisions and goals are resolved on the post-motion
/// positions.
pub fn step(
    round: &mut RoundState,
    config: &Config,
    queue: &mut IntentQueue,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest intents (steering, round reset, quit)
    ingest_intents(&mut round.world, queue, config, events);

    // 2. Paddle 1, paddle 2, ball
    advance_frame(round, config, events);

    // 3. Paddle contact, then goals
    run_collisions(round, config, events);
}

/// Pure motion integration for every entity
pub fn advance_frame(round: &mut RoundState, config: &Config, events: &mut Events) {
    move_paddles(&mut round.world, config);
    move_ball(&mut round.world, config, events);
}

/// Collision & scoring pass over post-motion positions
pub fn run_collisions(round: &mut RoundState, config: &Config, events: &mut Events) {
    check_collisions(&mut round.world, events);
    check_scoring(&mut round.world, config, events);
}

/// Helper to create a paddle entity at its origin
pub fn create_paddle(world: &mut World, player: PlayerId, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(player, config), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
