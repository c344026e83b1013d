//! Demo-mode driver
//!
//! Produces the input a simple bot would send: walk toward the nearest
//! remaining coin, then toward the open exit. It makes no attempt to dodge
//! walls.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Per-axis distance under which the bot stops pressing that direction
const DEADZONE: f32 = 3.0;

/// Pick the input for the next frame
pub fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput {
        elapsed: state.elapsed,
        ..Default::default()
    };

    match state.phase {
        GamePhase::Menu => input.start = true,
        GamePhase::Paused => input.resume = true,
        GamePhase::LevelTransition | GamePhase::Victory | GamePhase::GameOver => {
            input.confirm = true
        }
        GamePhase::Playing => {
            if let Some(target) = target(state) {
                let delta = target - state.player.rect.center();
                input.left = delta.x < -DEADZONE;
                input.right = delta.x > DEADZONE;
                input.up = delta.y < -DEADZONE;
                input.down = delta.y > DEADZONE;
            }
        }
    }

    input
}

/// Nearest active coin, or the goal once it is open
fn target(state: &GameState) -> Option<Vec2> {
    let from = state.player.rect.center();
    let nearest_coin = state
        .coins
        .iter()
        .filter(|c| c.active)
        .map(|c| c.rect.center())
        .min_by(|a, b| a.distance_squared(from).total_cmp(&b.distance_squared(from)));

    nearest_coin.or_else(|| {
        state
            .goal
            .as_ref()
            .filter(|g| g.enabled)
            .map(|g| g.rect.center())
    })
}
