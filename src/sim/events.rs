//! Fire-and-forget notifications for the audio/visual layer

use serde::Serialize;

use super::pickup::PowerUpKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Player lost a life to a wall
    Hit,
    CoinCollected,
    PowerUpSpawned(PowerUpKind),
    PowerUpCollected(PowerUpKind),
    /// Fired alongside `PowerUpCollected(Speed)`
    SpeedBoostCollected,
    /// Last coin collected, exit unlocked
    GoalEnabled,
    LevelComplete,
    Victory,
    GameOver,
}

/// Receiver for simulation events. The simulation never reads anything back.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards every event
impl EventSink for () {
    fn emit(&mut self, _event: GameEvent) {}
}
