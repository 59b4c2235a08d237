//! Platform abstraction layer
//!
//! Host-side glue between a render loop and the simulation:
//! - Fixed-timestep frame pacing (shared by the native runner and the browser)
//! - Browser bindings (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameEvent, GameState};

/// Longest wall-clock frame the host will try to catch up on (seconds)
pub const MAX_FRAME_TIME: f32 = 0.1;

/// What one render frame did to the simulation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSteps {
    /// Fixed steps taken
    pub substeps: u32,
    /// Events from every step, in order
    pub events: Vec<GameEvent>,
}

/// Converts variable render-frame deltas into fixed simulation steps
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run as many fixed steps as `frame_dt` covers
    pub fn advance(&mut self, state: &mut GameState, frame_dt: f32) -> FrameSteps {
        let mut frame = FrameSteps::default();
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return frame;
        }
        self.accumulator += frame_dt.min(MAX_FRAME_TIME);

        while self.accumulator >= SIM_DT && frame.substeps < MAX_SUBSTEPS {
            frame.events.extend_from_slice(state.update(SIM_DT));
            self.accumulator -= SIM_DT;
            frame.substeps += 1;
        }
        frame
    }

    /// Drop leftover time (after a pause or a level restart)
    pub fn clear(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut state = GameState::new();
        let mut step = FixedStep::new();

        assert_eq!(step.advance(&mut state, SIM_DT * 0.5).substeps, 0);
        assert_eq!(state.game_time(), 0.0);

        assert_eq!(step.advance(&mut state, SIM_DT * 0.6).substeps, 1);
        assert!((state.game_time() - SIM_DT).abs() < 1e-6);
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut state = GameState::new();
        let mut step = FixedStep::new();
        let steps = step.advance(&mut state, 3.0).substeps;
        assert!(steps <= MAX_SUBSTEPS);
        assert!(steps > 0);
    }

    #[test]
    fn test_invalid_frames_ignored() {
        let mut state = GameState::new();
        let mut step = FixedStep::new();
        assert_eq!(step.advance(&mut state, -1.0), FrameSteps::default());
        assert_eq!(step.advance(&mut state, f32::NAN).substeps, 0);
        assert_eq!(state.game_time(), 0.0);
    }

    #[test]
    fn test_clear_drops_leftover() {
        let mut state = GameState::new();
        let mut step = FixedStep::new();
        step.advance(&mut state, SIM_DT * 0.9);
        step.clear();
        assert_eq!(step.advance(&mut state, SIM_DT * 0.5).substeps, 0);
    }

    #[test]
    fn test_events_collected_across_substeps() {
        let mut state = GameState::new();
        let mut step = FixedStep::new();

        // Each render frame reports only what its own steps raised
        let mut landed = 0;
        for _ in 0..60 {
            let frame = step.advance(&mut state, SIM_DT * 4.0);
            assert!(frame.events.len() <= 4 * frame.substeps as usize);
            landed += frame.events.iter().filter(|e| **e == GameEvent::Landed).count();
        }
        assert_eq!(landed, 1);
        assert!(state.events().len() <= 1);
    }
}
