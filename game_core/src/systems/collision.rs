use crate::geometry::Aabb;
use crate::{Ball, Events, Paddle, Params, PlayerId};
use glam::Vec2;
use hecs::World;

/// Sample the ball's horizontal span `[x - r/2, x + r/2)` in unit steps at
/// the ball's y and return the first paddle hit.
///
/// At each sample the paddles are tested in slice order, so callers pass
/// player 1 first. This is a coarse scan rather than a swept test: a ball
/// moving faster than the paddle's capture window can pass through.
pub fn scan_for_paddle(ball: &Ball, paddles: &[(PlayerId, Aabb)]) -> Option<PlayerId> {
    let half_span = ball.radius * 0.5;
    let start = ball.pos.x - half_span;
    let end = ball.pos.x + half_span;

    // Integer sample count: at large |x| adding the step no longer changes an f32
    let samples = ((end - start) / Params::SCAN_STEP).ceil() as u32;

    for i in 0..samples {
        let probe = Vec2::new(start + i as f32 * Params::SCAN_STEP, ball.pos.y);
        if let Some((player, _)) = paddles.iter().find(|(_, bounds)| bounds.contains(probe)) {
            return Some(*player);
        }
    }
    None
}

/// Turn the ball around on paddle contact. At most one turn per frame.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    let mut paddles: Vec<(PlayerId, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.player, paddle.bounds()))
        .collect();
    paddles.sort_by_key(|(player, _)| *player);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(player) = scan_for_paddle(ball, &paddles) {
            ball.turn();
            events.paddle_hit = Some(player);
            log::debug!(
                "ball hit {player} paddle at ({:.1}, {:.1}), velocity now ({:.2}, {:.2})",
                ball.pos.x,
                ball.pos.y,
                ball.vel.x,
                ball.vel.y
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config};

    fn setup_world() -> (World, Config, Events) {
        let config = Config {
            paddle_height: 50.0,
            ball_radius: 10.0,
            ..Config::default()
        };
        (World::new(), config, Events::new())
    }

    fn place_paddle(world: &mut World, player: PlayerId, pos: Vec2) {
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.player == player {
                paddle.pos = pos;
            }
        }
    }

    fn ball_of(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball spawned");
        *ball
    }

    #[test]
    fn test_ball_turns_on_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, PlayerId::Left, &config);
        place_paddle(&mut world, PlayerId::Left, Vec2::new(50.0, 215.0));
        create_ball(
            &mut world,
            Ball::new(Vec2::new(53.0, 232.0), Vec2::new(-2.0, 2.0), 10.0),
        );

        check_collisions(&mut world, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel, Vec2::new(2.2, 2.2));
        assert_eq!(ball.pos, Vec2::new(53.0, 232.0), "Turn does not move the ball");
        assert_eq!(events.paddle_hit, Some(PlayerId::Left));
    }

    #[test]
    fn test_ball_turns_on_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, PlayerId::Right, &config);
        let paddle_x = config.paddle_x(PlayerId::Right);
        create_ball(
            &mut world,
            Ball::new(
                Vec2::new(paddle_x - 2.0, config.field_height * 0.5),
                Vec2::new(3.0, -1.0),
                10.0,
            ),
        );

        check_collisions(&mut world, &mut events);

        let ball = ball_of(&world);
        assert!(ball.vel.x < 0.0, "Ball should head back left");
        assert!(ball.vel.y < 0.0, "Vertical direction is kept");
        assert!((ball.vel.x + 3.3).abs() < 1e-5);
        assert!((ball.vel.y + 1.1).abs() < 1e-5);
        assert_eq!(events.paddle_hit, Some(PlayerId::Right));
    }

    #[test]
    fn test_ball_turns_even_when_moving_away() {
        // The scan has no direction check
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, PlayerId::Left, &config);
        place_paddle(&mut world, PlayerId::Left, Vec2::new(50.0, 215.0));
        create_ball(
            &mut world,
            Ball::new(Vec2::new(53.0, 232.0), Vec2::new(2.0, 2.0), 10.0),
        );

        check_collisions(&mut world, &mut events);

        assert!(ball_of(&world).vel.x < 0.0);
        assert!(events.paddle_hit.is_some());
    }

    #[test]
    fn test_no_turn_when_ball_is_level_with_paddle_bottom() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, PlayerId::Left, &config);
        place_paddle(&mut world, PlayerId::Left, Vec2::new(50.0, 215.0));
        // y == paddle.y + height is outside the half-open box
        create_ball(
            &mut world,
            Ball::new(Vec2::new(53.0, 265.0), Vec2::new(-2.0, 2.0), 10.0),
        );

        check_collisions(&mut world, &mut events);

        assert_eq!(ball_of(&world).vel, Vec2::new(-2.0, 2.0));
        assert_eq!(events.paddle_hit, None);
    }

    #[test]
    fn test_scan_window_misses_paddle_just_out_of_reach() {
        let config = Config::default();
        let paddle = Paddle::new(PlayerId::Left, &config);
        // Span is [x - 2.5, x + 2.5); paddle right edge is 105 (exclusive)
        let ball = Ball::new(
            Vec2::new(107.5, paddle.pos.y + 1.0),
            Vec2::new(-2.0, 0.0),
            5.0,
        );
        assert_eq!(
            scan_for_paddle(&ball, &[(PlayerId::Left, paddle.bounds())]),
            None
        );

        let ball = Ball::new(
            Vec2::new(107.4, paddle.pos.y + 1.0),
            Vec2::new(-2.0, 0.0),
            5.0,
        );
        assert_eq!(
            scan_for_paddle(&ball, &[(PlayerId::Left, paddle.bounds())]),
            Some(PlayerId::Left)
        );
    }

    #[test]
    fn test_scan_prefers_player_one_on_overlap() {
        let overlapping = Aabb::from_origin_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let ball = Ball::new(Vec2::new(5.0, 5.0), Vec2::ZERO, 4.0);
        let paddles = [
            (PlayerId::Left, overlapping),
            (PlayerId::Right, overlapping),
        ];
        assert_eq!(scan_for_paddle(&ball, &paddles), Some(PlayerId::Left));
    }

    #[test]
    fn test_scan_terminates_far_from_origin() {
        // Past 2^24 an f32 no longer moves by a unit step
        let far = Aabb::from_origin_size(Vec2::new(3.0e7, 0.0), Vec2::new(5.0, 20.0));
        let ball = Ball::new(Vec2::new(3.0e7, 10.0), Vec2::ZERO, 10.0);
        assert_eq!(
            scan_for_paddle(&ball, &[(PlayerId::Right, far)]),
            Some(PlayerId::Right)
        );

        let ball = Ball::new(Vec2::new(4.0e7, 10.0), Vec2::ZERO, 10.0);
        assert_eq!(scan_for_paddle(&ball, &[(PlayerId::Right, far)]), None);
    }

    #[test]
    fn test_fast_ball_tunnels_through_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, PlayerId::Left, &config);
        let paddle_x = config.paddle_x(PlayerId::Left);
        let y = config.field_height * 0.5;
        // One frame earlier it was right of the paddle, now it is left of it
        create_ball(
            &mut world,
            Ball::new(Vec2::new(paddle_x - 12.0, y), Vec2::new(-30.0, 0.0), 10.0),
        );

        check_collisions(&mut world, &mut events);

        assert_eq!(events.paddle_hit, None, "Discrete scan misses the paddle");
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, PlayerId::Left, &config);

        check_collisions(&mut world, &mut events);

        assert_eq!(events.paddle_hit, None);
    }
}
