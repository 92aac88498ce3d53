use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use clap::Parser;
use raylib::prelude::{KeyboardKey, MouseButton, RaylibHandle};
use tracing::info;

use tank_duel::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS};
use tank_duel::entities::DirectionSet;
use tank_duel::game::input::InputSnapshot;
use tank_duel::game::ui;
use tank_duel::game::{Game, ScreenState};

mod render;

#[derive(Parser)]
#[command(name = "tank-duel")]
#[command(about = "Player vs AI tank duel")]
struct Args {
    /// Fixes the bot's dice rolls; taken from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .try_init()
        .map_err(|err| anyhow!("logging setup failed: {err}"))?;

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(system_seed);
    info!(seed, "starting");

    let (mut rl, thread) = raylib::init()
        .size(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32)
        .title("Player vs AI Tank Game")
        .build();

    rl.set_target_fps(TARGET_FPS);

    let mut game = Game::new(seed);

    while !rl.window_should_close() {
        let now_ms = (rl.get_time() * 1000.0) as u64;
        let input = poll_input(&rl, game.screen());
        game.update(&input, now_ms);
        let scene = game.scene();
        let mut d = rl.begin_drawing(&thread);
        render::draw(&mut d, &scene);
    }

    Ok(())
}

fn poll_input(rl: &RaylibHandle, screen: ScreenState) -> InputSnapshot {
    let clicked = if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let mouse = rl.get_mouse_position();
        ui::control_at(screen, mouse.x, mouse.y)
    } else {
        None
    };

    InputSnapshot {
        held: DirectionSet {
            up: rl.is_key_down(KeyboardKey::KEY_UP),
            down: rl.is_key_down(KeyboardKey::KEY_DOWN),
            left: rl.is_key_down(KeyboardKey::KEY_LEFT),
            right: rl.is_key_down(KeyboardKey::KEY_RIGHT),
        },
        fire: rl.is_key_pressed(KeyboardKey::KEY_SPACE),
        reload: rl.is_key_pressed(KeyboardKey::KEY_E),
        clicked,
    }
}

fn system_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
