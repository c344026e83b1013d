//! Static level catalog
//!
//! Layouts are authored against the fixed playfield size. Walls are listed
//! as rectangles with a velocity; zero velocity means static scenery.

use glam::Vec2;

use super::pickup::PowerUpKind;
use super::rect::Rect;
use super::wall::WallStyle;
use crate::consts::{MAX_LEVELS, PLAYFIELD_HEIGHT as H, PLAYFIELD_WIDTH as W};

/// A wall placement
#[derive(Debug, Clone, Copy)]
pub struct WallSpec {
    pub rect: Rect,
    pub velocity: Vec2,
    pub style: WallStyle,
}

/// Everything needed to build one level
#[derive(Debug)]
pub struct LevelDef {
    /// Top-left corners of each coin
    pub coins: &'static [Vec2],
    pub walls: &'static [WallSpec],
    pub powerups: &'static [PowerUpKind],
}

const fn wall(x: f32, y: f32, width: f32, height: f32, vx: f32, vy: f32) -> WallSpec {
    WallSpec {
        rect: Rect {
            x,
            y,
            width,
            height,
        },
        velocity: Vec2::new(vx, vy),
        style: WallStyle::Plain,
    }
}

const fn pulsing(x: f32, y: f32, width: f32, height: f32, vx: f32, vy: f32) -> WallSpec {
    let mut spec = wall(x, y, width, height, vx, vy);
    spec.style = WallStyle::Pulsing;
    spec
}

const fn coin(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

static LEVEL_1: LevelDef = LevelDef {
    coins: &[
        coin(W * 0.25, H * 0.1),
        coin(W - W * 0.25, H * 0.08),
        coin(W / 2.0, H / 2.0),
        coin(W * 0.1, H - H * 0.1),
        coin(W - W * 0.1, H - H * 0.15),
    ],
    walls: &[
        wall(W * 0.15, 0.0, 20.0, H * 0.25, 0.0, 70.0),
        wall(W * 0.3, H - H * 0.25, 20.0, H * 0.25, 0.0, -90.0),
        wall(W * 0.45, 0.0, 20.0, H * 0.3, 0.0, 100.0),
        wall(W * 0.6, H - H * 0.35, 20.0, H * 0.35, 0.0, -80.0),
        wall(W * 0.2, H * 0.2, 100.0, 20.0, 50.0, 0.0),
        wall(W - W * 0.3, H * 0.4, 100.0, 20.0, -50.0, 0.0),
    ],
    powerups: &[PowerUpKind::Life, PowerUpKind::Shield],
};

static LEVEL_2: LevelDef = LevelDef {
    coins: &[
        coin(W * 0.15, H * 0.4),
        coin(W * 0.475, H * 0.15),
        coin(W * 0.6, H * 0.6),
        coin(W - W * 0.15, H * 0.3),
        coin(W * 0.05, H * 0.05),
        coin(W - W * 0.05, H - H * 0.05),
        coin(W / 2.0 + 50.0, H / 2.0 + 50.0),
    ],
    walls: &[
        wall(W * 0.1, 0.0, 20.0, H * 0.3, 0.0, 100.0),
        wall(W * 0.25, H - H * 0.3, 20.0, H * 0.3, 0.0, -120.0),
        pulsing(W * 0.4, H * 0.05, 20.0, H * 0.4, 0.0, 150.0),
        pulsing(W * 0.55, H - H * 0.45, 20.0, H * 0.4, 0.0, -140.0),
        wall(W * 0.2, H * 0.25, 150.0, 20.0, 0.0, 0.0),
        wall(W - W * 0.35, H * 0.35, 150.0, 20.0, 0.0, 0.0),
        wall(W / 2.0 - 100.0, H * 0.1, 200.0, 20.0, 0.0, 0.0),
        wall(W / 2.0 - 100.0, H - H * 0.12, 200.0, 20.0, 0.0, 0.0),
    ],
    powerups: &[PowerUpKind::Life, PowerUpKind::Shield, PowerUpKind::Speed],
};

static LEVEL_3: LevelDef = LevelDef {
    coins: &[
        coin(W * 0.1, H * 0.45),
        coin(W * 0.5, H * 0.05),
        coin(W - W * 0.2, H * 0.25),
        coin(W * 0.7, H * 0.7),
        coin(W * 0.2, H * 0.6),
        coin(W / 2.0 + 100.0, H * 0.3),
        coin(W * 0.05, H - H * 0.2),
        coin(W - W * 0.05, H * 0.1),
        coin(W / 2.0, H * 0.8),
        coin(W * 0.15, H * 0.15),
    ],
    walls: &[
        wall(W * 0.1, H * 0.05, 20.0, H * 0.35, 0.0, 180.0),
        wall(W * 0.25, H - H * 0.4, 20.0, H * 0.35, 0.0, -200.0),
        pulsing(W * 0.4, 0.0, 20.0, H * 0.5, 0.0, 220.0),
        pulsing(W * 0.55, H - H * 0.55, 20.0, H * 0.5, 0.0, -210.0),
        wall(W * 0.2, H * 0.2, 200.0, 20.0, 0.0, 0.0),
        wall(W - W * 0.4, H * 0.4, 200.0, 20.0, 0.0, 0.0),
        wall(W / 3.0, 0.0, 20.0, 100.0, 0.0, 0.0),
        wall(W / 3.0, H - 100.0, 20.0, 100.0, 0.0, 0.0),
        wall(20.0, H / 3.0, 80.0, 20.0, 0.0, 0.0),
        wall(W - 100.0, H / 3.0, 80.0, 20.0, 0.0, 0.0),
        wall(W / 2.0 - 150.0, H / 2.0 - 10.0, 300.0, 20.0, 0.0, 0.0),
        pulsing(W / 2.0 - 10.0, 50.0, 20.0, 150.0, 0.0, 100.0),
        pulsing(W / 2.0 - 10.0, H - 200.0, 20.0, 150.0, 0.0, -100.0),
    ],
    powerups: &[PowerUpKind::Life, PowerUpKind::Shield, PowerUpKind::Speed],
};

/// Look up a level by its 1-based index
pub fn definition(level: u32) -> Option<&'static LevelDef> {
    match level {
        1 => Some(&LEVEL_1),
        2 => Some(&LEVEL_2),
        3 => Some(&LEVEL_3),
        _ => None,
    }
}

/// True for the final level
pub fn is_last(level: u32) -> bool {
    level >= MAX_LEVELS
}
