use crate::{Ball, Config, Events, Paddle};
use hecs::World;

/// Put both paddles and the ball back to their starting state and zero the scores
pub fn reset_round(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.reset(config);
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config);
    }
    events.round_reset = true;
    log::info!("round reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, PlayerId};
    use glam::Vec2;

    #[test]
    fn test_reset_round_restores_everything() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        for player in PlayerId::ALL {
            create_paddle(&mut world, player, &config);
        }
        create_ball(
            &mut world,
            Ball::new(Vec2::new(12.0, 400.0), Vec2::new(-5.3, 1.7), config.ball_radius),
        );
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.pos.y = 0.0;
            paddle.score = 9;
        }

        reset_round(&mut world, &config, &mut events);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.score, 0, "{} score should be zeroed", paddle.player);
            assert_eq!(
                paddle.pos,
                Vec2::new(config.paddle_x(paddle.player), config.paddle_origin_y())
            );
        }
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(*ball, Ball::spawn(&config));
        }
        assert!(events.round_reset);
    }
}
