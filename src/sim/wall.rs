//! Moving obstacles

use glam::Vec2;
use serde::Serialize;

use super::collision::bounce_velocity;
use super::entity::{Entity, StepContext};
use super::rect::Rect;

/// Draw treatment for a wall. Has no effect on movement or collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WallStyle {
    #[default]
    Plain,
    /// Flickering energy wall
    Pulsing,
}

#[derive(Debug, Clone, Serialize)]
pub struct Wall {
    pub rect: Rect,
    /// Pixels per second; zero means static scenery
    pub velocity: Vec2,
    pub style: WallStyle,
}

impl Wall {
    pub fn new(rect: Rect, velocity: Vec2, style: WallStyle) -> Self {
        debug_assert!(rect.is_valid());
        Self {
            rect,
            velocity,
            style,
        }
    }

    pub fn is_static(&self) -> bool {
        self.velocity == Vec2::ZERO
    }
}

impl Entity for Wall {
    fn advance(&mut self, dt: f32, ctx: &mut StepContext<'_>) {
        self.rect.translate(self.velocity * dt);
        // Checked from the post-move position and never clamped: a wall that
        // overshoots can flip again next frame.
        self.velocity = bounce_velocity(&self.rect, self.velocity, &ctx.playfield);
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}
