//! Browser bindings
//!
//! The JS side owns the canvas, the render loop and touch capture. It forwards
//! frame times and decoded touches here and pulls a JSON snapshot to draw.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::FixedStep;
use crate::sim::{GameEvent, GameState, Level, Player};

/// Oldest pending events are dropped past this many
const MAX_PENDING_EVENTS: usize = 256;

/// Everything the renderer needs for one frame
#[derive(Serialize)]
struct Snapshot<'a> {
    level_number: u32,
    game_time: f32,
    complete: bool,
    dead: bool,
    player: &'a Player,
    level: Option<&'a Level>,
    events: Vec<GameEvent>,
}

#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
    step: FixedStep,
    /// Events not yet handed to JS
    pending: Vec<GameEvent>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        console_error_panic_hook::set_once();
        // Already initialized when a second game is created
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Platform Hopper starting...");
        WasmGame {
            state: GameState::new(),
            step: FixedStep::new(),
            pending: Vec::new(),
        }
    }

    /// Advance by a wall-clock frame time (seconds)
    pub fn update(&mut self, frame_dt: f32) {
        let frame = self.step.advance(&mut self.state, frame_dt);
        self.pending.extend(frame.events);
        if self.pending.len() > MAX_PENDING_EVENTS {
            let excess = self.pending.len() - MAX_PENDING_EVENTS;
            self.pending.drain(..excess);
        }
    }

    /// Touch in screen-relative units, origin at the canvas centre, y up
    pub fn handle_input(&mut self, x: f32, y: f32, pressed: bool) {
        self.state.handle_input(x, y, pressed);
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.step.clear();
    }

    pub fn next_level(&mut self) {
        self.state.next_level();
        self.pending.extend(self.state.drain_events());
        self.step.clear();
    }

    pub fn restart_level(&mut self) {
        self.state.restart_level();
        self.step.clear();
    }

    pub fn current_level_number(&self) -> u32 {
        self.state.current_level_number()
    }

    pub fn is_game_complete(&self) -> bool {
        self.state.is_game_complete()
    }

    pub fn is_player_dead(&self) -> bool {
        self.state.is_player_dead()
    }

    /// Serialize the frame for the renderer. Hands over pending events.
    pub fn snapshot_json(&mut self) -> Result<String, JsValue> {
        let events = std::mem::take(&mut self.pending);
        let snapshot = Snapshot {
            level_number: self.state.current_level_number(),
            game_time: self.state.game_time(),
            complete: self.state.is_game_complete(),
            dead: self.state.is_player_dead(),
            player: self.state.player(),
            level: self.state.current_level(),
            events,
        };
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
