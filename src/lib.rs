//! Shadow Maze - a maze arcade session simulator
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, collisions, session state machine)
//! - `settings`: Data-driven session tuning loaded from JSON
//! - `error`: Settings loading/validation errors
//!
//! Drawing and audio live outside this crate. Hosts read a [`sim::Snapshot`]
//! each frame and react to [`sim::GameEvent`]s.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use settings::{DelayRange, Settings};

/// Game configuration constants
pub mod consts {
    /// Host frame timestep used by the headless runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions (level layouts are authored against these)
    pub const PLAYFIELD_WIDTH: f32 = 1280.0;
    pub const PLAYFIELD_HEIGHT: f32 = 960.0;

    /// Number of shipped levels
    pub const MAX_LEVELS: u32 = 3;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_BASE_SPEED: f32 = 250.0;
    pub const MAX_LIVES: u8 = 3;
    /// Grace window after taking a hit
    pub const INVINCIBILITY_DURATION: f32 = 1.5;

    /// Power-up effects
    pub const SHIELD_DURATION: f32 = 5.0;
    pub const SPEED_BOOST_DURATION: f32 = 4.0;
    pub const SPEED_BOOST_MULTIPLIER: f32 = 1.5;
    pub const POWERUP_SIZE: f32 = 25.0;
    /// Power-ups spawn at least this far from every playfield edge
    pub const POWERUP_SPAWN_MARGIN: f32 = 100.0;

    /// Collectibles and exit
    pub const COIN_SIZE: f32 = 15.0;
    /// Coin pulse angular speed (radians per second)
    pub const COIN_PULSE_RATE: f32 = 5.0;
    pub const GOAL_SIZE: f32 = 40.0;

    /// Scoring
    pub const COIN_SCORE: u64 = 100;
    pub const LEVEL_BONUS: u64 = 5000;

    /// Session-wide countdown (seconds), shared by every level
    pub const SESSION_TIME: f32 = 180.0;

    /// Screen shake decay per second
    pub const SHAKE_DECAY: f32 = 5.0;
}
