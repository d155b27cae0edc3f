use super::reset_round;
use crate::{Config, Events, Intent, IntentQueue, Paddle, PaddleIntent, PlayerId};
use hecs::World;

fn steer(world: &mut World, config: &Config, player: PlayerId, apply: impl Fn(&mut PaddleIntent)) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        if paddle.player == player {
            apply(intent);
            paddle.set_direction(intent.dir, config.base_speed);
        }
    }
}

/// Drain queued intents and apply them before the frame advances
pub fn ingest_intents(
    world: &mut World,
    queue: &mut IntentQueue,
    config: &Config,
    events: &mut Events,
) {
    for intent in queue.drain() {
        log::trace!("ingesting {intent:?}");
        match intent {
            Intent::Press { player, dir } => steer(world, config, player, |i| i.press(dir)),
            Intent::Release { player, dir } => steer(world, config, player, |i| i.release(dir)),
            Intent::ResetRound => reset_round(world, config, events),
            Intent::Quit => events.quit_requested = true,
        }
    }
}
