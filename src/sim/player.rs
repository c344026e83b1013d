//! The player square and its timed effects

use glam::Vec2;
use serde::Serialize;

use super::collision::clamp_inside;
use super::entity::{Entity, StepContext};
use super::rect::Rect;
use crate::consts::*;

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub rect: Rect,
    pub lives: u8,
    /// Post-hit grace period (seconds, 0 = inactive)
    pub invincibility: f32,
    /// Shield power-up (seconds, 0 = inactive)
    pub shield: f32,
    /// Speed power-up (seconds, 0 = inactive)
    pub speed_boost: f32,
    pub base_speed: f32,
    pub current_speed: f32,
}

impl Player {
    pub fn new(base_speed: f32) -> Self {
        Self {
            rect: Self::spawn_rect(),
            lives: MAX_LIVES,
            invincibility: 0.0,
            shield: 0.0,
            speed_boost: 0.0,
            base_speed,
            current_speed: base_speed,
        }
    }

    fn spawn_rect() -> Rect {
        Rect::square(
            PLAYFIELD_WIDTH / 20.0,
            PLAYFIELD_HEIGHT / 2.0 - PLAYER_SIZE / 2.0,
            PLAYER_SIZE,
        )
    }

    /// Back to spawn with full lives and no active effects (run on every level load)
    pub fn reset(&mut self) {
        self.rect = Self::spawn_rect();
        self.lives = MAX_LIVES;
        self.invincibility = 0.0;
        self.shield = 0.0;
        self.speed_boost = 0.0;
        self.current_speed = self.base_speed;
    }

    /// True while invincibility or shield blocks damage
    pub fn is_protected(&self) -> bool {
        self.invincibility > 0.0 || self.shield > 0.0
    }

    /// Lose a life unless protected. Returns whether damage was applied.
    pub fn take_damage(&mut self) -> bool {
        if self.is_protected() {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.invincibility = INVINCIBILITY_DURATION;
        true
    }

    pub fn gain_life(&mut self) {
        if self.lives < MAX_LIVES {
            self.lives += 1;
        }
    }

    pub fn raise_shield(&mut self) {
        self.shield = SHIELD_DURATION;
    }

    pub fn boost_speed(&mut self) {
        self.speed_boost = SPEED_BOOST_DURATION;
        self.current_speed = self.base_speed * SPEED_BOOST_MULTIPLIER;
    }

    fn tick_timers(&mut self, dt: f32) {
        if self.invincibility > 0.0 {
            self.invincibility = (self.invincibility - dt).max(0.0);
        }
        if self.shield > 0.0 {
            self.shield = (self.shield - dt).max(0.0);
        }
        if self.speed_boost > 0.0 {
            self.speed_boost = (self.speed_boost - dt).max(0.0);
            if self.speed_boost <= 0.0 {
                self.current_speed = self.base_speed;
            }
        }
    }
}

impl Entity for Player {
    fn advance(&mut self, dt: f32, ctx: &mut StepContext<'_>) {
        self.tick_timers(dt);

        // Axes are independent, so diagonals move at speed * sqrt(2)
        let step = self.current_speed * dt;
        let input = ctx.input;
        let mut delta = Vec2::ZERO;
        if input.up {
            delta.y -= step;
        }
        if input.down {
            delta.y += step;
        }
        if input.left {
            delta.x -= step;
        }
        if input.right {
            delta.x += step;
        }
        self.rect.translate(delta);
        clamp_inside(&mut self.rect, &ctx.playfield);
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::TickInput;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> Rect {
        Rect::new(0.0, 0.0, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }

    fn step(player: &mut Player, input: &TickInput, dt: f32) {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ctx = StepContext {
            input,
            rng: &mut rng,
            playfield: field(),
        };
        player.advance(dt, &mut ctx);
    }

    #[test]
    fn test_damage_sets_grace_window() {
        let mut player = Player::new(PLAYER_BASE_SPEED);
        assert!(player.take_damage());
        assert_eq!(player.lives, 2);
        assert_eq!(player.invincibility, INVINCIBILITY_DURATION);

        // Still inside the window
        assert!(!player.take_damage());
        assert_eq!(player.lives, 2);
    }

    #[test]
    fn test_grace_window_expires() {
        let mut player = Player::new(PLAYER_BASE_SPEED);
        player.take_damage();
        step(&mut player, &TickInput::default(), 1.0);
        assert!(!player.take_damage());
        step(&mut player, &TickInput::default(), 0.6);
        assert_eq!(player.invincibility, 0.0);
        assert!(player.take_damage());
        assert_eq!(player.lives, 1);
    }

    #[test]
    fn test_lives_never_underflow() {
        let mut player = Player::new(PLAYER_BASE_SPEED);
        player.lives = 0;
        player.take_damage();
        assert_eq!(player.lives, 0);
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let mut player = Player::new(100.0);
        let start = player.rect.center();
        let input = TickInput {
            down: true,
            right: true,
            ..Default::default()
        };
        step(&mut player, &input, 0.1);
        let moved = player.rect.center() - start;
        assert!((moved.x - 10.0).abs() < 1e-4);
        assert!((moved.y - 10.0).abs() < 1e-4);
        assert!((moved.length() - 10.0 * std::f32::consts::SQRT_2).abs() < 1e-3);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut player = Player::new(100.0);
        let start = player.rect;
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        step(&mut player, &input, 0.5);
        assert_eq!(player.rect, start);
    }

    #[test]
    fn test_clamped_to_playfield() {
        let mut player = Player::new(PLAYER_BASE_SPEED);
        let input = TickInput {
            up: true,
            left: true,
            ..Default::default()
        };
        step(&mut player, &input, 10.0);
        assert_eq!((player.rect.x, player.rect.y), (0.0, 0.0));

        let input = TickInput {
            down: true,
            right: true,
            ..Default::default()
        };
        step(&mut player, &input, 10.0);
        assert_eq!(player.rect.right(), PLAYFIELD_WIDTH);
        assert_eq!(player.rect.bottom(), PLAYFIELD_HEIGHT);
    }

    #[test]
    fn test_speed_boost_expires() {
        let mut player = Player::new(200.0);
        player.boost_speed();
        assert_eq!(player.current_speed, 300.0);

        step(&mut player, &TickInput::default(), SPEED_BOOST_DURATION - 0.5);
        assert_eq!(player.current_speed, 300.0);

        step(&mut player, &TickInput::default(), 1.0);
        assert_eq!(player.speed_boost, 0.0);
        assert_eq!(player.current_speed, 200.0);
    }

    #[test]
    fn test_gain_life_capped() {
        let mut player = Player::new(PLAYER_BASE_SPEED);
        player.gain_life();
        assert_eq!(player.lives, MAX_LIVES);
        player.lives = 1;
        player.gain_life();
        assert_eq!(player.lives, 2);
    }

    #[test]
    fn test_reset_clears_effects() {
        let mut player = Player::new(PLAYER_BASE_SPEED);
        player.take_damage();
        player.raise_shield();
        player.boost_speed();
        player.rect.x = 500.0;
        player.reset();
        assert_eq!(player.lives, MAX_LIVES);
        assert_eq!(player.invincibility, 0.0);
        assert_eq!(player.shield, 0.0);
        assert_eq!(player.speed_boost, 0.0);
        assert_eq!(player.current_speed, PLAYER_BASE_SPEED);
        assert_eq!(player.rect.x, PLAYFIELD_WIDTH / 20.0);
    }

    proptest! {
        #[test]
        fn prop_protection_blocks_damage(
            invincibility in 0.0f32..5.0,
            shield in 0.0f32..5.0,
            lives in 1u8..=3,
        ) {
            prop_assume!(invincibility > 0.0 || shield > 0.0);
            let mut player = Player::new(PLAYER_BASE_SPEED);
            player.lives = lives;
            player.invincibility = invincibility;
            player.shield = shield;
            prop_assert!(!player.take_damage());
            prop_assert_eq!(player.lives, lives);
        }
    }
}
