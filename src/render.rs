use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle, Rectangle, Vector2};

use tank_duel::game::scene::{self, Anchor, DrawCmd, Rgb};

pub fn draw(d: &mut RaylibDrawHandle, scene: &[DrawCmd]) {
    d.clear_background(color_of(scene::BLACK));
    for cmd in scene {
        match cmd {
            DrawCmd::Fill { rect, color } => {
                d.draw_rectangle_rec(
                    Rectangle {
                        x: rect.x,
                        y: rect.y,
                        width: rect.w,
                        height: rect.h,
                    },
                    color_of(*color),
                );
            }
            DrawCmd::Line { from, to, thickness, color } => {
                d.draw_line_ex(
                    Vector2 { x: from.0, y: from.1 },
                    Vector2 { x: to.0, y: to.1 },
                    *thickness,
                    color_of(*color),
                );
            }
            DrawCmd::Text { text, anchor, size, color } => {
                let (x, y) = match *anchor {
                    Anchor::TopLeft(x, y) => (x as i32, y as i32),
                    Anchor::Center(cx, cy) => {
                        let width = d.measure_text(text, *size);
                        (cx as i32 - width / 2, cy as i32 - *size / 2)
                    }
                };
                d.draw_text(text, x, y, *size, color_of(*color));
            }
        }
    }
}

fn color_of(Rgb(r, g, b): Rgb) -> Color {
    Color::new(r, g, b, 255)
}
