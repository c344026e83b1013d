//! Shadow Maze entry point
//!
//! The native build runs a headless demo session driven by the autopilot
//! and prints the final frame as JSON. Usage: `shadow-maze [settings.json]`.

#[cfg(not(target_arch = "wasm32"))]
use shadow_maze::sim::{EventSink, GameEvent};

/// Forwards simulation events to the log and keeps a tally
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
struct LogSink {
    hits: u32,
    coins: u32,
    powerups: u32,
}

#[cfg(not(target_arch = "wasm32"))]
impl EventSink for LogSink {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::Hit => self.hits += 1,
            GameEvent::CoinCollected => self.coins += 1,
            GameEvent::PowerUpCollected(_) => self.powerups += 1,
            _ => {}
        }
        log::debug!("event: {:?}", event);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use shadow_maze::Settings;
    use shadow_maze::consts::*;
    use shadow_maze::sim::{GamePhase, GameState, autopilot, tick};

    env_logger::init();
    log::info!("Shadow Maze (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load settings from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let mut state = match GameState::new(settings) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            std::process::exit(1);
        }
    };
    let mut sink = LogSink::default();

    // Session clock plus slack for the menu and transition frames
    let max_frames = ((state.settings.session_time + 10.0) / SIM_DT) as u64;
    let mut frame = 0u64;
    while frame < max_frames {
        let mut input = autopilot(&state);
        input.elapsed = frame as f64 * SIM_DT as f64;
        tick(&mut state, &input, SIM_DT, &mut sink);
        frame += 1;

        if matches!(state.phase, GamePhase::Victory | GamePhase::GameOver) {
            break;
        }
    }

    log::info!(
        "Finished after {} frames: {:?} on level {} with score {} ({} coins, {} power-ups, {} hits)",
        frame,
        state.phase,
        state.level,
        state.score,
        sink.coins,
        sink.powerups,
        sink.hits
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `shadow_maze::sim::tick` directly
}
