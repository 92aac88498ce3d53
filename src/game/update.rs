use tracing::{debug, info};

use crate::config::TANK_SPEED;
use crate::entities::{Side, Tank};

use super::input::{Control, InputSnapshot};
use super::{ai, Game, ScreenState};

impl Game {
    /// Advances one frame. `now_ms` is wall-clock milliseconds and only
    /// feeds reload timing; everything else is per-frame.
    pub fn update(&mut self, input: &InputSnapshot, now_ms: u64) {
        match self.screen {
            ScreenState::Start => {
                if input.clicked == Some(Control::Start) {
                    info!("match started");
                    self.screen = ScreenState::Playing;
                }
            }
            ScreenState::Playing => {
                if input.clicked == Some(Control::Pause) {
                    debug!("paused");
                    self.screen = ScreenState::Paused;
                    return;
                }
                self.step_match(input, now_ms);
            }
            ScreenState::Paused => {
                if input.clicked == Some(Control::Resume) {
                    debug!("resumed");
                    self.screen = ScreenState::Playing;
                }
            }
            ScreenState::GameOver => {
                if input.clicked == Some(Control::PlayAgain) {
                    info!("rematch");
                    self.reset_match();
                    self.screen = ScreenState::Playing;
                }
            }
        }
    }

    fn step_match(&mut self, input: &InputSnapshot, now_ms: u64) {
        if input.fire {
            self.player.shoot(now_ms);
        }
        if input.reload {
            self.player.start_reload(now_ms);
        }
        self.player.drive(input.held, TANK_SPEED);

        ai::drive_bot(
            &mut self.bot,
            self.player.x,
            self.player.y,
            &mut self.rng,
            now_ms,
        );

        self.player.reload(now_ms);
        self.bot.reload(now_ms);

        for bullet in &mut self.player.bullets {
            bullet.advance();
        }
        for bullet in &mut self.bot.bullets {
            bullet.advance();
        }
        resolve_bullets(&mut self.player, &mut self.bot);
        resolve_bullets(&mut self.bot, &mut self.player);

        self.check_game_over();
    }

    fn check_game_over(&mut self) {
        if !self.player.defeated() && !self.bot.defeated() {
            return;
        }
        // bot first: a same-frame double knockout counts as a player win
        let winner = if self.bot.defeated() {
            Side::Player
        } else {
            Side::Bot
        };
        self.winner = Some(winner);
        self.screen = ScreenState::GameOver;
        info!(?winner, "match over");
    }
}

/// Walks the shooter's bullets against the other tank: a hit costs the
/// target one health and consumes the bullet; a miss survives unless it
/// has left the screen. Hits win over the bounds check.
fn resolve_bullets(shooter: &mut Tank, target: &mut Tank) {
    let target_rect = target.rect();
    shooter.bullets.retain(|bullet| {
        if bullet.rect.intersects(&target_rect) {
            target.health = (target.health - 1).max(0);
            return false;
        }
        !bullet.off_screen()
    });
}
