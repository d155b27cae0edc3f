use crate::{Ball, Config, Events, Paddle};
use hecs::World;

/// Integrate paddle motion, player 1 first
pub fn move_paddles(world: &mut World, config: &Config) {
    let mut paddles: Vec<&mut Paddle> = world
        .query_mut::<&mut Paddle>()
        .into_iter()
        .map(|(_e, paddle)| paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.player);

    for paddle in paddles {
        paddle.advance(config);
    }
}

/// Integrate ball motion and bounce off the top and bottom walls
pub fn move_ball(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(config.field_height) {
            events.wall_bounce = true;
            log::debug!("ball bounced off wall at y={:.1}", ball.pos.y);
        }
    }
}
