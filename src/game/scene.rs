use crate::config::{
    BARREL_LENGTH, BARREL_THICKNESS, HEALTH_BAR_HEIGHT, HEALTH_BAR_RAISE, HEALTH_BAR_WIDTH,
    MAX_HEALTH, SCREEN_HEIGHT, SCREEN_WIDTH, TANK_HEIGHT, TANK_WIDTH,
};
use crate::entities::{Direction, Side, Tank};
use crate::geom::Rect;

use super::input::Control;
use super::ui::{self, Button};
use super::{Game, ScreenState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const BLUE: Rgb = Rgb(0, 0, 255);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    TopLeft(f32, f32),
    Center(f32, f32),
}

/// One renderer-agnostic drawing instruction. The renderer clears the frame
/// to black first, then executes these in order, later commands on top.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Fill {
        rect: Rect,
        color: Rgb,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        thickness: f32,
        color: Rgb,
    },
    Text {
        text: String,
        anchor: Anchor,
        size: i32,
        color: Rgb,
    },
}

impl Game {
    /// Composes the active screen into a draw list. Each screen draws only
    /// its own content; the paused and game-over screens do not show the
    /// field.
    pub fn scene(&self) -> Vec<DrawCmd> {
        let mut out = Vec::new();
        match self.screen {
            ScreenState::Start => {
                push_banner(&mut out, "CLICK START TO PLAY", SCREEN_HEIGHT / 2.0 - 50.0);
            }
            ScreenState::Playing => self.compose_playing(&mut out),
            ScreenState::Paused => {
                push_banner(&mut out, "PAUSED", SCREEN_HEIGHT / 2.0 - 50.0);
            }
            ScreenState::GameOver => {
                let message = if self.winner == Some(Side::Player) {
                    "YOU WON!!"
                } else {
                    "YOU LOST"
                };
                push_banner(&mut out, message, SCREEN_HEIGHT / 2.0);
            }
        }
        for button in ui::active_buttons(self.screen) {
            push_button(&mut out, button);
        }
        out
    }

    fn compose_playing(&self, out: &mut Vec<DrawCmd>) {
        push_tank(out, &self.player);
        push_tank(out, &self.bot);
        out.push(DrawCmd::Text {
            text: format!("Player Health: {}", self.player.health),
            anchor: Anchor::TopLeft(10.0, 10.0),
            size: 36,
            color: WHITE,
        });
        out.push(DrawCmd::Text {
            text: format!("Bot Health: {}", self.bot.health),
            anchor: Anchor::TopLeft(SCREEN_WIDTH - 200.0, 10.0),
            size: 36,
            color: WHITE,
        });
    }
}

fn push_banner(out: &mut Vec<DrawCmd>, text: &str, center_y: f32) {
    out.push(DrawCmd::Text {
        text: text.to_string(),
        anchor: Anchor::Center(SCREEN_WIDTH / 2.0, center_y),
        size: 72,
        color: WHITE,
    });
}

fn push_tank(out: &mut Vec<DrawCmd>, tank: &Tank) {
    let color = tank_color(tank.side);
    out.push(DrawCmd::Fill { rect: tank.rect(), color });

    let (cx, cy) = tank.rect().center();
    out.push(DrawCmd::Text {
        text: tank.side.label().to_string(),
        anchor: Anchor::Center(cx, cy),
        size: 24,
        color: BLACK,
    });

    let (from, to) = barrel_line(tank);
    out.push(DrawCmd::Line { from, to, thickness: BARREL_THICKNESS, color });

    for bullet in &tank.bullets {
        out.push(DrawCmd::Fill { rect: bullet.rect, color: WHITE });
    }

    push_health_bar(out, tank);
}

fn barrel_line(tank: &Tank) -> ((f32, f32), (f32, f32)) {
    let (cx, cy) = tank.rect().center();
    match tank.dir {
        Direction::Up => ((cx, tank.y), (cx, tank.y - BARREL_LENGTH)),
        Direction::Down => (
            (cx, tank.y + TANK_HEIGHT),
            (cx, tank.y + TANK_HEIGHT + BARREL_LENGTH),
        ),
        Direction::Left => ((tank.x, cy), (tank.x - BARREL_LENGTH, cy)),
        Direction::Right => (
            (tank.x + TANK_WIDTH, cy),
            (tank.x + TANK_WIDTH + BARREL_LENGTH, cy),
        ),
    }
}

fn push_health_bar(out: &mut Vec<DrawCmd>, tank: &Tank) {
    let x = tank.x + (TANK_WIDTH - HEALTH_BAR_WIDTH) / 2.0;
    let y = tank.y - HEALTH_BAR_RAISE;
    out.push(DrawCmd::Fill {
        rect: Rect::new(x, y, HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT),
        color: RED,
    });
    let fill = HEALTH_BAR_WIDTH * tank.health as f32 / MAX_HEALTH as f32;
    out.push(DrawCmd::Fill {
        rect: Rect::new(x, y, fill, HEALTH_BAR_HEIGHT),
        color: GREEN,
    });
}

fn push_button(out: &mut Vec<DrawCmd>, button: &Button) {
    let (bg, fg) = button_colors(button.control);
    out.push(DrawCmd::Fill { rect: button.rect, color: bg });
    let (cx, cy) = button.rect.center();
    out.push(DrawCmd::Text {
        text: button.label.to_string(),
        anchor: Anchor::Center(cx, cy),
        size: 36,
        color: fg,
    });
}

fn tank_color(side: Side) -> Rgb {
    match side {
        Side::Player => RED,
        Side::Bot => BLUE,
    }
}

fn button_colors(control: Control) -> (Rgb, Rgb) {
    match control {
        Control::Start | Control::Pause | Control::Resume => (RED, WHITE),
        Control::PlayAgain => (GREEN, BLACK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::input::InputSnapshot;

    fn playing_game() -> Game {
        let mut game = Game::new(1);
        let start = InputSnapshot { clicked: Some(Control::Start), ..Default::default() };
        game.update(&start, 0);
        game
    }

    fn texts(scene: &[DrawCmd]) -> Vec<&str> {
        scene
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn fills(scene: &[DrawCmd]) -> Vec<(Rect, Rgb)> {
        scene
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Fill { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn start_screen_shows_banner_and_button_only() {
        let game = Game::new(1);
        let scene = game.scene();
        assert_eq!(scene.len(), 3);
        assert_eq!(
            scene[0],
            DrawCmd::Text {
                text: "CLICK START TO PLAY".to_string(),
                anchor: Anchor::Center(600.0, 400.0),
                size: 72,
                color: WHITE,
            }
        );
        assert_eq!(
            fills(&scene),
            vec![(Rect::new(500.0, 450.0, 200.0, 50.0), RED)]
        );
        assert!(texts(&scene).contains(&"START"));
    }

    #[test]
    fn playing_screen_draws_both_tanks_and_hud() {
        let game = playing_game();
        let scene = game.scene();

        let fills = fills(&scene);
        assert!(fills.contains(&(Rect::new(100.0, 300.0, 40.0, 40.0), RED)));
        assert!(fills.contains(&(Rect::new(600.0, 300.0, 40.0, 40.0), BLUE)));

        let texts = texts(&scene);
        assert!(texts.contains(&"YOU"));
        assert!(texts.contains(&"BOT"));
        assert!(texts.contains(&"Player Health: 5"));
        assert!(texts.contains(&"Bot Health: 5"));
        assert!(texts.contains(&"PAUSE"));
    }

    #[test]
    fn hud_labels_sit_at_the_screen_corners() {
        let game = playing_game();
        let scene = game.scene();
        assert!(scene.contains(&DrawCmd::Text {
            text: "Player Health: 5".to_string(),
            anchor: Anchor::TopLeft(10.0, 10.0),
            size: 36,
            color: WHITE,
        }));
        assert!(scene.contains(&DrawCmd::Text {
            text: "Bot Health: 5".to_string(),
            anchor: Anchor::TopLeft(1000.0, 10.0),
            size: 36,
            color: WHITE,
        }));
    }

    #[test]
    fn barrel_follows_the_facing_edge() {
        let mut game = playing_game();
        game.player.dir = Direction::Right;
        let scene = game.scene();
        assert!(scene.contains(&DrawCmd::Line {
            from: (140.0, 320.0),
            to: (160.0, 320.0),
            thickness: BARREL_THICKNESS,
            color: RED,
        }));
        // the bot still faces up
        assert!(scene.contains(&DrawCmd::Line {
            from: (620.0, 300.0),
            to: (620.0, 280.0),
            thickness: BARREL_THICKNESS,
            color: BLUE,
        }));
    }

    #[test]
    fn bullets_render_as_white_fills() {
        let mut game = playing_game();
        game.player.dir = Direction::Right;
        game.player.shoot(0);
        let scene = game.scene();
        assert!(fills(&scene).contains(&(Rect::new(140.0, 315.0, 10.0, 10.0), WHITE)));
    }

    #[test]
    fn health_bar_fill_tracks_damage() {
        let mut game = playing_game();
        game.bot.health = 3;
        let scene = game.scene();
        let fills = fills(&scene);
        // the bar sits centered 10 px above the bot
        assert!(fills.contains(&(Rect::new(595.0, 290.0, 50.0, 5.0), RED)));
        assert!(fills.contains(&(Rect::new(595.0, 290.0, 30.0, 5.0), GREEN)));
    }

    #[test]
    fn paused_screen_hides_the_field() {
        let mut game = playing_game();
        let pause = InputSnapshot { clicked: Some(Control::Pause), ..Default::default() };
        game.update(&pause, 0);
        let scene = game.scene();
        assert_eq!(scene.len(), 3);
        let texts = texts(&scene);
        assert!(texts.contains(&"PAUSED"));
        assert!(texts.contains(&"RESUME"));
        assert!(!texts.contains(&"YOU"));
    }

    #[test]
    fn game_over_message_tracks_the_winner() {
        let mut game = playing_game();
        game.bot.health = 0;
        game.update(&InputSnapshot::default(), 16);
        let scene = game.scene();
        assert!(texts(&scene).contains(&"YOU WON!!"));
        assert!(texts(&scene).contains(&"PLAY AGAIN"));
        assert!(fills(&scene).contains(&(Rect::new(500.0, 500.0, 200.0, 50.0), GREEN)));

        let mut game = playing_game();
        game.player.health = 0;
        game.update(&InputSnapshot::default(), 16);
        assert!(texts(&game.scene()).contains(&"YOU LOST"));
    }
}
