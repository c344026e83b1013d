//! Session state and core simulation types
//!
//! `GameState` exclusively owns every entity of the current level. Level
//! loads drop the previous level's entities before building the next set.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::goal::Goal;
use super::level;
use super::particles::{Particle, ParticlePool};
use super::pickup::{Coin, PowerUp};
use super::player::Player;
use super::rect::Rect;
use super::wall::Wall;
use crate::consts::*;
use crate::error::Result;
use crate::settings::Settings;

/// Current phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Menu,
    /// Active gameplay
    Playing,
    /// Gameplay frozen, waiting for resume
    Paused,
    /// Level cleared, waiting for confirm to load the next one
    LevelTransition,
    /// Final level cleared
    Victory,
    /// Out of lives or out of time
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub phase: GamePhase,
    /// Current level index (1-based)
    pub level: u32,
    /// Session-wide countdown in seconds, never refilled between levels
    pub time_remaining: f32,
    pub score: u64,
    /// Cosmetic shake magnitude in [0, 1]
    pub screen_shake: f32,
    /// Host clock from the latest frame, for cosmetic animation phases
    pub elapsed: f64,
    pub player: Player,
    pub walls: Vec<Wall>,
    pub coins: Vec<Coin>,
    pub powerups: Vec<PowerUp>,
    /// Absent until the first level loads
    pub goal: Option<Goal>,
    pub particles: ParticlePool,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a session sitting at the menu
    ///
    /// Fails with [`crate::SettingsError::Invalid`] if `settings` do not validate.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            phase: GamePhase::Menu,
            level: 1,
            time_remaining: settings.session_time,
            score: 0,
            screen_shake: 0.0,
            elapsed: 0.0,
            player: Player::new(settings.player_speed),
            walls: Vec::new(),
            coins: Vec::new(),
            powerups: Vec::new(),
            goal: None,
            particles: ParticlePool::new(settings.particles),
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
        })
    }

    /// Area the player and walls are confined to
    pub fn playfield(&self) -> Rect {
        Rect::new(0.0, 0.0, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Start a fresh session on level 1
    pub fn start_session(&mut self) {
        self.score = 0;
        self.level = 1;
        self.time_remaining = self.settings.session_time;
        log::info!(
            "Session started: {}s on the clock, seed {}",
            self.time_remaining,
            self.settings.seed
        );
        self.load_level(self.level);
        self.set_phase(GamePhase::Playing);
    }

    /// Move on to the next level, keeping score and the session clock
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.load_level(self.level);
        self.set_phase(GamePhase::Playing);
    }

    /// Replace every level entity with a fresh copy of `level`'s layout
    ///
    /// # Panics
    /// If `level` is outside 1..=MAX_LEVELS. The state machine never
    /// requests such a level.
    pub fn load_level(&mut self, level: u32) {
        let def = level::definition(level)
            .unwrap_or_else(|| panic!("level {level} outside 1..={MAX_LEVELS}"));

        self.walls.clear();
        self.coins.clear();
        self.powerups.clear();
        self.goal = None;

        self.player.reset();

        for pos in def.coins {
            let phase = self.rng.random_range(0..=100u32) as f32;
            self.coins.push(Coin::new(pos.x, pos.y, phase));
        }
        self.goal = Some(Goal::at_exit());
        for &kind in def.powerups {
            self.powerups.push(PowerUp::new(
                kind,
                self.settings.first_spawn_delay,
                self.settings.respawn_delay,
                &mut self.rng,
            ));
        }
        self.walls.extend(
            def.walls
                .iter()
                .map(|spec| Wall::new(spec.rect, spec.velocity, spec.style)),
        );

        log::info!(
            "Level {} loaded: {} coins, {} walls, {} power-ups",
            level,
            self.coins.len(),
            self.walls.len(),
            self.powerups.len()
        );
    }

    /// Number of coins still in play
    pub fn coins_remaining(&self) -> usize {
        self.coins.iter().filter(|c| c.active).count()
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            level: self.level,
            max_levels: MAX_LEVELS,
            score: self.score,
            time_remaining: self.time_remaining,
            screen_shake: self.screen_shake,
            elapsed: self.elapsed,
            player: &self.player,
            walls: &self.walls,
            coins: &self.coins,
            powerups: &self.powerups,
            goal: self.goal.as_ref(),
            particles: self.particles.as_slice(),
        }
    }
}

/// How urgently the HUD should present the remaining time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeWarning {
    Normal,
    /// Under 20 seconds
    Low,
    /// Under 10 seconds
    Critical,
}

/// Borrowed view of everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub level: u32,
    pub max_levels: u32,
    pub score: u64,
    pub time_remaining: f32,
    pub screen_shake: f32,
    pub elapsed: f64,
    pub player: &'a Player,
    pub walls: &'a [Wall],
    pub coins: &'a [Coin],
    pub powerups: &'a [PowerUp],
    pub goal: Option<&'a Goal>,
    pub particles: &'a [Particle],
}

impl Snapshot<'_> {
    /// Whole seconds left, as shown on the HUD
    pub fn time_display(&self) -> u32 {
        self.time_remaining.max(0.0) as u32
    }

    pub fn time_warning(&self) -> TimeWarning {
        if self.time_remaining < 10.0 {
            TimeWarning::Critical
        } else if self.time_remaining < 20.0 {
            TimeWarning::Low
        } else {
            TimeWarning::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use crate::settings::DelayRange;

    #[test]
    fn test_new_state_sits_at_menu() {
        let state = GameState::new(Settings::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.walls.is_empty());
        assert!(state.goal.is_none());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let settings = Settings {
            respawn_delay: DelayRange::new(9, 3),
            ..Default::default()
        };
        let err = GameState::new(settings).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "respawn_delay", .. }));

        let settings = Settings {
            player_speed: 0.0,
            ..Default::default()
        };
        assert!(GameState::new(settings).is_err());
    }

    #[test]
    fn test_start_session_loads_level_one() {
        let mut state = GameState::new(Settings::default()).unwrap();
        state.start_session();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 1);
        assert_eq!(state.time_remaining, SESSION_TIME);
        assert_eq!(state.coins.len(), 5);
        assert_eq!(state.walls.len(), 6);
        assert_eq!(state.powerups.len(), 2);
        assert!(state.powerups.iter().all(|p| !p.active));
        let goal = state.goal.as_ref().unwrap();
        assert!(!goal.enabled);
    }

    #[test]
    fn test_level_load_replaces_entities() {
        let mut state = GameState::new(Settings::default()).unwrap();
        state.start_session();
        state.coins[0].active = false;
        state.goal.as_mut().unwrap().enable();
        state.player.lives = 1;
        state.player.raise_shield();

        state.load_level(2);
        assert_eq!(state.coins.len(), 7);
        assert!(state.coins.iter().all(|c| c.active));
        assert_eq!(state.walls.len(), 8);
        assert_eq!(state.powerups.len(), 3);
        assert!(!state.goal.as_ref().unwrap().enabled);
        assert_eq!(state.player.lives, MAX_LIVES);
        assert_eq!(state.player.shield, 0.0);
    }

    #[test]
    fn test_advance_level_keeps_clock_and_score() {
        let mut state = GameState::new(Settings::default()).unwrap();
        state.start_session();
        state.time_remaining = 120.0;
        state.score = 5500;
        state.set_phase(GamePhase::LevelTransition);

        state.advance_level();
        assert_eq!(state.level, 2);
        assert_eq!(state.time_remaining, 120.0);
        assert_eq!(state.score, 5500);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_unknown_level_panics() {
        let mut state = GameState::new(Settings::default()).unwrap();
        state.load_level(MAX_LEVELS + 1);
    }

    #[test]
    fn test_snapshot_views_state() {
        let mut state = GameState::new(Settings::default()).unwrap();
        state.start_session();
        state.score = 300;
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.score, 300);
        assert_eq!(snap.walls.len(), 6);
        assert_eq!(snap.max_levels, MAX_LEVELS);
        assert!(snap.goal.is_some());

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["level"], 1);
        assert_eq!(json["coins"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_time_display_and_warning() {
        let mut state = GameState::new(Settings::default()).unwrap();
        state.time_remaining = 25.7;
        assert_eq!(state.snapshot().time_display(), 25);
        assert_eq!(state.snapshot().time_warning(), TimeWarning::Normal);
        state.time_remaining = 19.9;
        assert_eq!(state.snapshot().time_warning(), TimeWarning::Low);
        state.time_remaining = 9.5;
        assert_eq!(state.snapshot().time_warning(), TimeWarning::Critical);
        state.time_remaining = 0.0;
        assert_eq!(state.snapshot().time_display(), 0);
    }
}
