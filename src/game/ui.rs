use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geom::Rect;

use super::input::Control;
use super::ScreenState;

#[derive(Clone, Copy, Debug)]
pub struct Button {
    pub control: Control,
    pub rect: Rect,
    pub label: &'static str,
}

const START: Button = Button {
    control: Control::Start,
    rect: Rect::new(SCREEN_WIDTH / 2.0 - 100.0, SCREEN_HEIGHT / 2.0, 200.0, 50.0),
    label: "START",
};

const PAUSE: Button = Button {
    control: Control::Pause,
    rect: Rect::new(SCREEN_WIDTH - 120.0, 20.0, 100.0, 40.0),
    label: "PAUSE",
};

const RESUME: Button = Button {
    control: Control::Resume,
    rect: Rect::new(SCREEN_WIDTH / 2.0 - 100.0, SCREEN_HEIGHT / 2.0, 200.0, 50.0),
    label: "RESUME",
};

const PLAY_AGAIN: Button = Button {
    control: Control::PlayAgain,
    rect: Rect::new(SCREEN_WIDTH / 2.0 - 100.0, SCREEN_HEIGHT / 2.0 + 50.0, 200.0, 50.0),
    label: "PLAY AGAIN",
};

/// The buttons live on each screen; clicks only ever test against the
/// active screen's set.
pub fn active_buttons(screen: ScreenState) -> &'static [Button] {
    match screen {
        ScreenState::Start => &[START],
        ScreenState::Playing => &[PAUSE],
        ScreenState::Paused => &[RESUME],
        ScreenState::GameOver => &[PLAY_AGAIN],
    }
}

pub fn control_at(screen: ScreenState, x: f32, y: f32) -> Option<Control> {
    active_buttons(screen)
        .iter()
        .find(|button| button.rect.contains_point(x, y))
        .map(|button| button.control)
}
