//! Shared entity capabilities
//!
//! Every playfield object advances once per frame and exposes its collision
//! bounds. Entities live in per-kind `Vec`s owned by the session; nothing
//! holds references to them across frames.

use rand_pcg::Pcg32;

use super::rect::Rect;
use super::tick::TickInput;

/// Per-frame environment handed to [`Entity::advance`]
pub struct StepContext<'a> {
    /// Logical actions for this frame
    pub input: &'a TickInput,
    /// Session RNG
    pub rng: &'a mut Pcg32,
    /// Area entities are confined to
    pub playfield: Rect,
}

pub trait Entity {
    /// Advance by `dt` seconds
    fn advance(&mut self, dt: f32, ctx: &mut StepContext<'_>);

    /// Current collision volume
    fn bounds(&self) -> Rect;
}
