//! Platform Hopper entry point
//!
//! Native builds run a headless session with a scripted player (hold right,
//! keep jumping) and log progression. The browser build is driven from JS
//! through `platform::web::WasmGame`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use platform_hopper::consts::SIM_DT;
    use platform_hopper::platform::FixedStep;
    use platform_hopper::sim::{GameEvent, GameState};
    use platform_hopper::tuning::Tuning;

    /// Give up on a level after this many deaths and skip ahead
    const MAX_ATTEMPTS_PER_LEVEL: u32 = 5;
    /// Hard stop for the session (ten minutes of game time)
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    /// Load tuning from a JSON file, falling back to defaults
    fn load_tuning(path: Option<String>) -> Tuning {
        let Some(path) = path else {
            log::info!("Using default tuning");
            return Tuning::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Tuning::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::error!("Invalid tuning file {}: {}", path, e);
                    Tuning::default()
                }
            },
            Err(e) => {
                log::error!("Failed to read tuning file {}: {}", path, e);
                Tuning::default()
            }
        }
    }

    pub fn run() {
        let tuning = load_tuning(std::env::args().nth(1));
        let mut state = GameState::with_tuning(tuning);
        let mut step = FixedStep::new();

        let mut attempts = 0u32;
        let mut deaths = 0u32;
        let mut skipped = 0u32;
        let mut frames = 0u32;

        while !state.is_game_complete() && frames < MAX_FRAMES {
            // Right half, upper half: run right and jump whenever grounded
            state.handle_input(1.0, 1.0, true);
            let frame = step.advance(&mut state, SIM_DT);
            frames += 1;

            for event in frame.events {
                match event {
                    GameEvent::LevelCompleted { level } => {
                        log::info!("Cleared level {} in {} attempt(s)", level, attempts + 1);
                        attempts = 0;
                    }
                    GameEvent::PlayerDied { cause } => {
                        log::debug!("Died: {:?}", cause);
                        deaths += 1;
                    }
                    GameEvent::GameCompleted => log::info!("All levels complete!"),
                    GameEvent::Jumped | GameEvent::Landed => {}
                }
            }

            if state.is_player_dead() {
                state.handle_input(0.0, 0.0, false);
                attempts += 1;
                if attempts >= MAX_ATTEMPTS_PER_LEVEL {
                    log::warn!(
                        "Skipping level {} after {} attempts",
                        state.current_level_number(),
                        attempts
                    );
                    skipped += 1;
                    attempts = 0;
                    state.next_level();
                    // next_level leaves alive untouched
                    state.restart_level();
                } else {
                    state.restart_level();
                }
                step.clear();
            }
        }

        log::info!(
            "Session over: level {}, {:.1}s simulated, {} deaths, {} skipped",
            state.current_level_number(),
            state.game_time(),
            deaths,
            skipped
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Platform Hopper (native) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::WasmGame, this is just to satisfy the compiler
}
