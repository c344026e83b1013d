//! Frame-stepped session update
//!
//! One call to [`tick`] per host frame. Gameplay only advances while
//! `Playing`; cosmetic animation runs in every phase.

use super::collision::overlaps;
use super::entity::{Entity, StepContext};
use super::events::{EventSink, GameEvent};
use super::level;
use super::particles::ParticleTint;
use super::pickup::PowerUpKind;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Logical actions for a single frame
///
/// Directions are held; the rest are edge-triggered presses.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Leave the menu and start a session
    pub start: bool,
    pub pause: bool,
    pub resume: bool,
    /// Acknowledge a level transition, victory or game over
    pub confirm: bool,
    /// Host clock in seconds, stored for cosmetic animation
    pub elapsed: f64,
}

impl TickInput {
    pub fn is_moving(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Advance the session by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, events: &mut impl EventSink) {
    state.elapsed = input.elapsed;

    match state.phase {
        GamePhase::Menu => {
            if input.start {
                state.start_session();
            }
        }
        GamePhase::Playing => update_playing(state, input, dt, events),
        GamePhase::Paused => {
            if input.resume {
                state.set_phase(GamePhase::Playing);
            }
        }
        GamePhase::LevelTransition => {
            if input.confirm {
                state.advance_level();
            }
        }
        GamePhase::Victory | GamePhase::GameOver => {
            if input.confirm {
                state.set_phase(GamePhase::Menu);
            }
        }
    }

    update_cosmetics(state, input, dt);
}

fn update_playing(state: &mut GameState, input: &TickInput, dt: f32, events: &mut impl EventSink) {
    if input.pause {
        state.set_phase(GamePhase::Paused);
        return;
    }

    state.time_remaining -= dt;
    if state.time_remaining <= 0.0 {
        state.time_remaining = 0.0;
        log::info!("Out of time with score {}", state.score);
        state.set_phase(GamePhase::GameOver);
        events.emit(GameEvent::GameOver);
        return;
    }

    let playfield = state.playfield();

    // Player
    {
        let mut ctx = StepContext {
            input,
            rng: &mut state.rng,
            playfield,
        };
        state.player.advance(dt, &mut ctx);
    }
    if input.is_moving() {
        let origin = state.player.rect.center();
        state
            .particles
            .emit(&mut state.rng, origin, 1, ParticleTint::Trail, 50.0, (1.0, 3.0));
    }

    // Power-ups
    for powerup in state.powerups.iter_mut() {
        let mut ctx = StepContext {
            input,
            rng: &mut state.rng,
            playfield,
        };
        powerup.advance(dt, &mut ctx);
        if powerup.just_spawned {
            events.emit(GameEvent::PowerUpSpawned(powerup.kind));
        }
        if powerup.try_collect(&mut state.player) {
            log::debug!("{:?} power-up collected", powerup.kind);
            events.emit(GameEvent::PowerUpCollected(powerup.kind));
            if powerup.kind == PowerUpKind::Speed {
                events.emit(GameEvent::SpeedBoostCollected);
            }
            state.particles.emit(
                &mut state.rng,
                powerup.rect.center(),
                20,
                powerup.kind.into(),
                100.0,
                (3.0, 6.0),
            );
        }
    }

    // Coins
    let player_rect = state.player.rect;
    for coin in state.coins.iter_mut() {
        let mut ctx = StepContext {
            input,
            rng: &mut state.rng,
            playfield,
        };
        coin.advance(dt, &mut ctx);
        if coin.try_collect(&player_rect) {
            state.score += COIN_SCORE;
            events.emit(GameEvent::CoinCollected);
            state
                .particles
                .emit(&mut state.rng, coin.rect.center(), 15, ParticleTint::Coin, 80.0, (2.0, 4.0));
        }
    }
    let all_collected = state.coins.iter().all(|c| !c.active);

    // Goal unlock
    if all_collected {
        if let Some(goal) = state.goal.as_mut() {
            if goal.enable() {
                log::debug!("All coins collected, exit open");
                events.emit(GameEvent::GoalEnabled);
                state
                    .particles
                    .emit(&mut state.rng, goal.rect.center(), 50, ParticleTint::Goal, 200.0, (5.0, 10.0));
            }
        }
    }

    // Walls
    for wall in state.walls.iter_mut() {
        let mut ctx = StepContext {
            input,
            rng: &mut state.rng,
            playfield,
        };
        wall.advance(dt, &mut ctx);

        if overlaps(&wall.bounds(), &state.player.bounds()) && state.player.take_damage() {
            log::debug!("Player hit, {} lives left", state.player.lives);
            events.emit(GameEvent::Hit);
            state.screen_shake = 1.0;
            state.particles.emit(
                &mut state.rng,
                state.player.rect.center(),
                30,
                ParticleTint::Hit,
                120.0,
                (4.0, 8.0),
            );
        }
    }

    if state.player.lives == 0 {
        log::info!("Out of lives with score {}", state.score);
        state.set_phase(GamePhase::GameOver);
        events.emit(GameEvent::GameOver);
        return;
    }

    let reached_goal = state
        .goal
        .as_ref()
        .is_some_and(|goal| goal.enabled && overlaps(&state.player.rect, &goal.rect));
    if reached_goal {
        state.score += LEVEL_BONUS;
        if level::is_last(state.level) {
            log::info!("Final level cleared with score {}", state.score);
            state.set_phase(GamePhase::Victory);
            events.emit(GameEvent::Victory);
        } else {
            log::info!("Level {} cleared", state.level);
            state.set_phase(GamePhase::LevelTransition);
            events.emit(GameEvent::LevelComplete);
        }
    }
}

fn update_cosmetics(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.screen_shake > 0.0 {
        state.screen_shake = (state.screen_shake - SHAKE_DECAY * dt).max(0.0);
    }
    state.particles.advance(dt);
    let playfield = state.playfield();
    if let Some(goal) = state.goal.as_mut() {
        let mut ctx = StepContext {
            input,
            rng: &mut state.rng,
            playfield,
        };
        goal.advance(dt, &mut ctx);
    }
}
