pub const SCREEN_WIDTH: f32 = 1200.0;
pub const SCREEN_HEIGHT: f32 = 900.0;
pub const TARGET_FPS: u32 = 60;

pub const TANK_WIDTH: f32 = 40.0;
pub const TANK_HEIGHT: f32 = 40.0;
pub const BULLET_WIDTH: f32 = 10.0;
pub const BULLET_HEIGHT: f32 = 10.0;
pub const BARREL_LENGTH: f32 = 20.0;
pub const BARREL_THICKNESS: f32 = 5.0;
pub const HEALTH_BAR_WIDTH: f32 = 50.0;
pub const HEALTH_BAR_HEIGHT: f32 = 5.0;
pub const HEALTH_BAR_RAISE: f32 = 10.0;

// distances are pixels per frame at the 60 fps target
pub const TANK_SPEED: f32 = 5.0;
pub const BOT_SPEED: f32 = 1.5;
pub const BULLET_SPEED: f32 = 10.0;

pub const MAX_HEALTH: i32 = 5;
pub const MAGAZINE_SIZE: u32 = 10;
pub const RELOAD_TIME_MS: u64 = 2000;
// rolled against 0..100 once per frame
pub const BOT_FIRE_CHANCE: u32 = 5;

pub const PLAYER_START: (f32, f32) = (100.0, 300.0);
pub const BOT_START: (f32, f32) = (600.0, 300.0);
