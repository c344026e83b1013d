//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (level authoring order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod events;
pub mod goal;
pub mod level;
pub mod particles;
pub mod pickup;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;
pub mod wall;

pub use autopilot::autopilot;
pub use collision::{bounce_velocity, clamp_inside, overlaps};
pub use entity::{Entity, StepContext};
pub use events::{EventSink, GameEvent};
pub use goal::Goal;
pub use level::{LevelDef, WallSpec};
pub use particles::{Particle, ParticlePool, ParticleTint};
pub use pickup::{Coin, PowerUp, PowerUpKind};
pub use player::Player;
pub use rect::Rect;
pub use state::{GamePhase, GameState, Snapshot, TimeWarning};
pub use tick::{TickInput, tick};
pub use wall::{Wall, WallStyle};
