use crate::{Ball, Config, Events, Paddle, PlayerId};
use hecs::World;

/// Who scores, if the ball has reached a goal line.
///
/// The left line is tested on the center, the right line on the center plus
/// half a radius. The two cases are exclusive.
pub fn goal_scorer(ball: &Ball, field_width: f32) -> Option<PlayerId> {
    if ball.pos.x <= 0.0 {
        Some(PlayerId::Right)
    } else if ball.pos.x + ball.radius * 0.5 >= field_width {
        Some(PlayerId::Left)
    } else {
        None
    }
}

/// Award a goal and send the ball back to the center
pub fn check_scoring(world: &mut World, config: &Config, events: &mut Events) {
    let scorer = world
        .query::<&Ball>()
        .iter()
        .next()
        .and_then(|(_e, ball)| goal_scorer(ball, config.field_width));

    let Some(scorer) = scorer else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.player == scorer {
            paddle.score += 1;
            log::info!("goal: {scorer} scores, now at {}", paddle.score);
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config);
    }

    events.goal = Some(scorer);
}
