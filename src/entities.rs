use crate::config::{
    BULLET_HEIGHT, BULLET_SPEED, BULLET_WIDTH, MAGAZINE_SIZE, MAX_HEALTH, RELOAD_TIME_MS,
    SCREEN_HEIGHT, SCREEN_WIDTH, TANK_HEIGHT, TANK_WIDTH,
};
use crate::geom::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One row of the bullet spawn table: footprint offset from the tank's
/// top-left corner plus the bullet's size for that facing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletSpawn {
    pub dx: f32,
    pub dy: f32,
    pub w: f32,
    pub h: f32,
}

impl Direction {
    pub fn travel(self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }

    /// Bullets leave centered on the facing edge; horizontal travel swaps
    /// the footprint's width and height.
    pub fn bullet_spawn(self) -> BulletSpawn {
        match self {
            Direction::Up => BulletSpawn {
                dx: TANK_WIDTH / 2.0 - BULLET_WIDTH / 2.0,
                dy: 0.0,
                w: BULLET_WIDTH,
                h: BULLET_HEIGHT,
            },
            Direction::Down => BulletSpawn {
                dx: TANK_WIDTH / 2.0 - BULLET_WIDTH / 2.0,
                dy: TANK_HEIGHT,
                w: BULLET_WIDTH,
                h: BULLET_HEIGHT,
            },
            Direction::Left => BulletSpawn {
                dx: 0.0,
                dy: TANK_HEIGHT / 2.0 - BULLET_HEIGHT / 2.0,
                w: BULLET_HEIGHT,
                h: BULLET_WIDTH,
            },
            Direction::Right => BulletSpawn {
                dx: TANK_WIDTH,
                dy: TANK_HEIGHT / 2.0 - BULLET_HEIGHT / 2.0,
                w: BULLET_HEIGHT,
                h: BULLET_WIDTH,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionSet {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Bot,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "YOU",
            Side::Bot => "BOT",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rect,
    pub dir: Direction,
}

impl Bullet {
    pub fn advance(&mut self) {
        let (dx, dy) = self.dir.travel();
        self.rect.x += dx * BULLET_SPEED;
        self.rect.y += dy * BULLET_SPEED;
    }

    pub fn off_screen(&self) -> bool {
        self.rect.x < 0.0
            || self.rect.x > SCREEN_WIDTH
            || self.rect.y < 0.0
            || self.rect.y > SCREEN_HEIGHT
    }
}

#[derive(Clone, Debug)]
pub struct Tank {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub health: i32,
    pub dir: Direction,
    pub bullets: Vec<Bullet>,
    pub shots_fired: u32,
    pub reloading: bool,
    pub reload_started_ms: u64,
}

impl Tank {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Tank {
            side,
            x,
            y,
            health: MAX_HEALTH,
            dir: Direction::Up,
            bullets: Vec::new(),
            shots_fired: 0,
            reloading: false,
            reload_started_ms: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, TANK_WIDTH, TANK_HEIGHT)
    }

    pub fn defeated(&self) -> bool {
        self.health <= 0
    }

    /// Applies one frame of held directions. Each axis is independent, so
    /// diagonals work; movement clamps to the arena and turns the tank,
    /// while a direction held flush against its wall does neither.
    pub fn drive(&mut self, held: DirectionSet, speed: f32) {
        if held.up && self.y > 0.0 {
            self.y = (self.y - speed).max(0.0);
            self.dir = Direction::Up;
        }
        if held.down && self.y < SCREEN_HEIGHT - TANK_HEIGHT {
            self.y = (self.y + speed).min(SCREEN_HEIGHT - TANK_HEIGHT);
            self.dir = Direction::Down;
        }
        if held.left && self.x > 0.0 {
            self.x = (self.x - speed).max(0.0);
            self.dir = Direction::Left;
        }
        if held.right && self.x < SCREEN_WIDTH - TANK_WIDTH {
            self.x = (self.x + speed).min(SCREEN_WIDTH - TANK_WIDTH);
            self.dir = Direction::Right;
        }
    }

    /// Fires along the current facing. A spent magazine turns the trigger
    /// pull into a reload; nothing fires while reloading.
    pub fn shoot(&mut self, now_ms: u64) {
        if self.reloading {
            return;
        }
        if self.shots_fired >= MAGAZINE_SIZE {
            self.start_reload(now_ms);
            return;
        }
        let spawn = self.dir.bullet_spawn();
        self.bullets.push(Bullet {
            rect: Rect::new(self.x + spawn.dx, self.y + spawn.dy, spawn.w, spawn.h),
            dir: self.dir,
        });
        self.shots_fired += 1;
    }

    pub fn start_reload(&mut self, now_ms: u64) {
        self.reloading = true;
        self.reload_started_ms = now_ms;
    }

    /// Per-frame tick: finishes an in-flight reload once the reload time
    /// has elapsed, refilling the magazine.
    pub fn reload(&mut self, now_ms: u64) {
        if self.reloading && now_ms.saturating_sub(self.reload_started_ms) >= RELOAD_TIME_MS {
            self.shots_fired = 0;
            self.reloading = false;
        }
    }
}
