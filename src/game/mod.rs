mod ai;
pub mod input;
pub mod scene;
pub mod ui;
mod update;

use rand::{rngs::SmallRng, SeedableRng};

use crate::config::{BOT_START, PLAYER_START};
use crate::entities::{Side, Tank};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
    Start,
    Playing,
    Paused,
    GameOver,
}

pub struct Game {
    screen: ScreenState,
    player: Tank,
    bot: Tank,
    winner: Option<Side>,
    rng: SmallRng,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let (player, bot) = starting_tanks();
        Game {
            screen: ScreenState::Start,
            player,
            bot,
            winner: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn player(&self) -> &Tank {
        &self.player
    }

    pub fn bot(&self) -> &Tank {
        &self.bot
    }

    fn reset_match(&mut self) {
        let (player, bot) = starting_tanks();
        self.player = player;
        self.bot = bot;
        self.winner = None;
    }
}

fn starting_tanks() -> (Tank, Tank) {
    (
        Tank::new(Side::Player, PLAYER_START.0, PLAYER_START.1),
        Tank::new(Side::Bot, BOT_START.0, BOT_START.1),
    )
}
