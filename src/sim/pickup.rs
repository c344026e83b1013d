//! Collectibles: one-shot coins and respawning power-ups

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::entity::{Entity, StepContext};
use super::player::Player;
use super::rect::Rect;
use crate::consts::*;
use crate::settings::DelayRange;

/// A coin. Once collected it stays gone until the next level load.
#[derive(Debug, Clone, Serialize)]
pub struct Coin {
    pub rect: Rect,
    pub active: bool,
    /// Pulse angle in radians for drawing; starts at a random offset
    pub phase: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32, phase: f32) -> Self {
        Self {
            rect: Rect::square(x, y, COIN_SIZE),
            active: true,
            phase,
        }
    }

    /// Collect the coin if it is still present and overlaps `player`
    pub fn try_collect(&mut self, player: &Rect) -> bool {
        if self.active && overlaps(player, &self.rect) {
            self.active = false;
            return true;
        }
        false
    }
}

impl Entity for Coin {
    fn advance(&mut self, dt: f32, _ctx: &mut StepContext<'_>) {
        if self.active {
            self.phase = (self.phase + COIN_PULSE_RATE * dt) % std::f32::consts::TAU;
        }
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// One extra life (capped)
    Life,
    /// Temporary damage immunity
    Shield,
    /// Temporary speed multiplier
    Speed,
}

#[derive(Debug, Clone, Serialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub rect: Rect,
    pub active: bool,
    /// Seconds until the next appearance (counts only while inactive)
    pub spawn_timer: f32,
    /// Set by the latest advance that made the power-up appear
    pub just_spawned: bool,
    #[serde(skip)]
    respawn_delay: DelayRange,
}

impl PowerUp {
    pub fn new<R: Rng + ?Sized>(
        kind: PowerUpKind,
        first_delay: DelayRange,
        respawn_delay: DelayRange,
        rng: &mut R,
    ) -> Self {
        Self {
            kind,
            rect: Rect::square(0.0, 0.0, POWERUP_SIZE),
            active: false,
            spawn_timer: first_delay.sample(rng),
            just_spawned: false,
            respawn_delay,
        }
    }

    /// Count down while hidden; appear somewhere inside the spawn margin when
    /// the timer runs out. Returns true on the frame the power-up appears.
    pub fn advance_spawn<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R, playfield: &Rect) -> bool {
        self.just_spawned = false;
        if self.active {
            return false;
        }
        self.spawn_timer -= dt;
        if self.spawn_timer > 0.0 {
            return false;
        }

        let margin = POWERUP_SPAWN_MARGIN as i32;
        let min_x = playfield.x as i32 + margin;
        let max_x = playfield.right() as i32 - margin;
        let min_y = playfield.y as i32 + margin;
        let max_y = playfield.bottom() as i32 - margin;
        self.rect.x = rng.random_range(min_x..=max_x) as f32;
        self.rect.y = rng.random_range(min_y..=max_y) as f32;
        self.active = true;
        // Drawn now so the power-up stays hidden for a full fresh countdown
        // once collected.
        self.spawn_timer = self.respawn_delay.sample(rng);
        self.just_spawned = true;
        log::debug!(
            "{:?} power-up spawned at ({}, {}), next delay {}s",
            self.kind,
            self.rect.x,
            self.rect.y,
            self.spawn_timer
        );
        true
    }

    /// Collect and apply the effect if present and overlapping the player
    pub fn try_collect(&mut self, player: &mut Player) -> bool {
        if !self.active || !overlaps(&player.rect, &self.rect) {
            return false;
        }
        self.active = false;
        match self.kind {
            PowerUpKind::Life => player.gain_life(),
            PowerUpKind::Shield => player.raise_shield(),
            PowerUpKind::Speed => player.boost_speed(),
        }
        true
    }
}

impl Entity for PowerUp {
    fn advance(&mut self, dt: f32, ctx: &mut StepContext<'_>) {
        let playfield = ctx.playfield;
        self.advance_spawn(dt, &mut *ctx.rng, &playfield);
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}
