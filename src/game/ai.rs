use rand::{rngs::SmallRng, Rng};

use crate::config::{BOT_FIRE_CHANCE, BOT_SPEED};
use crate::entities::{DirectionSet, Tank};

/// One frame of bot behavior: a random trigger pull, then a greedy
/// single-axis chase toward the player's position.
pub(super) fn drive_bot(
    bot: &mut Tank,
    target_x: f32,
    target_y: f32,
    rng: &mut SmallRng,
    now_ms: u64,
) {
    if rng.random_range(0..100) < BOT_FIRE_CHANCE && !bot.reloading {
        bot.shoot(now_ms);
    }

    let dx = target_x - bot.x;
    let dy = target_y - bot.y;
    let mut held = DirectionSet::default();
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            held.right = true;
        } else if dx < 0.0 {
            held.left = true;
        }
    } else if dy > 0.0 {
        held.down = true;
    } else if dy < 0.0 {
        held.up = true;
    }
    bot.drive(held, BOT_SPEED);
}
