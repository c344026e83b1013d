//! Level exit
//!
//! The goal is inert until every coin in the level has been collected.

use serde::Serialize;

use super::entity::{Entity, StepContext};
use super::rect::Rect;
use crate::consts::*;

#[derive(Debug, Clone, Serialize)]
pub struct Goal {
    pub rect: Rect,
    pub enabled: bool,
    /// Reveal animation progress in [0, 1]; cosmetic only
    pub reveal: f32,
}

impl Goal {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::square(x, y, GOAL_SIZE),
            enabled: false,
            reveal: 0.0,
        }
    }

    /// Default exit position on the right edge of the playfield
    pub fn at_exit() -> Self {
        Self::new(
            PLAYFIELD_WIDTH - 2.0 * GOAL_SIZE,
            PLAYFIELD_HEIGHT / 2.0 - GOAL_SIZE / 2.0,
        )
    }

    /// Unlock the goal. Returns true only on the locked -> unlocked edge;
    /// the reveal animation is not restarted if already enabled.
    pub fn enable(&mut self) -> bool {
        if self.enabled {
            return false;
        }
        self.enabled = true;
        self.reveal = 0.0;
        true
    }

    pub fn advance_reveal(&mut self, dt: f32) {
        if self.enabled && self.reveal < 1.0 {
            self.reveal = (self.reveal + dt * 2.0).min(1.0);
        }
    }

    /// Size factor for drawing: grows from half size to full while revealing
    pub fn reveal_scale(&self) -> f32 {
        if self.reveal >= 1.0 {
            1.0
        } else {
            0.5 + 0.5 * self.reveal
        }
    }
}

impl Entity for Goal {
    fn advance(&mut self, dt: f32, _ctx: &mut StepContext<'_>) {
        self.advance_reveal(dt);
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}
