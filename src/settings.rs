//! Session tuning
//!
//! Loaded from a JSON file by the host; every field falls back to its default
//! when missing.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SettingsError};

/// Inclusive range of whole seconds, drawn uniformly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min: u32,
    pub max: u32,
}

impl DelayRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Draw a delay in seconds
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.min..=self.max) as f32
    }
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for power-up placement and particles
    pub seed: u64,
    /// Session-wide countdown in seconds
    pub session_time: f32,
    /// Player base speed in pixels per second
    pub player_speed: f32,
    /// Delay before a power-up first appears in a level
    pub first_spawn_delay: DelayRange,
    /// Delay before a collected power-up reappears
    pub respawn_delay: DelayRange,
    /// Particle feedback (purely cosmetic)
    pub particles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED_u64,
            session_time: SESSION_TIME,
            player_speed: PLAYER_BASE_SPEED,
            first_spawn_delay: DelayRange::new(8, 15),
            respawn_delay: DelayRange::new(15, 25),
            particles: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.session_time > 0.0) {
            return Err(SettingsError::Invalid {
                field: "session_time",
                reason: format!("must be positive, got {}", self.session_time),
            });
        }
        if !(self.player_speed > 0.0) {
            return Err(SettingsError::Invalid {
                field: "player_speed",
                reason: format!("must be positive, got {}", self.player_speed),
            });
        }
        validate_delay("first_spawn_delay", self.first_spawn_delay)?;
        validate_delay("respawn_delay", self.respawn_delay)?;
        Ok(())
    }
}

// Delays are whole seconds, at least one.
fn validate_delay(field: &'static str, range: DelayRange) -> Result<()> {
    if range.min == 0 {
        return Err(SettingsError::Invalid {
            field,
            reason: "minimum must be at least 1 second".to_string(),
        });
    }
    if range.min > range.max {
        return Err(SettingsError::Invalid {
            field,
            reason: format!("min {} exceeds max {}", range.min, range.max),
        });
    }
    Ok(())
}
