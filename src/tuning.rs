//! Data-driven game balance
//!
//! Player constants and world thresholds. Loaded from JSON by the host when
//! present; missing fields keep their defaults.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable physics and world constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Full extents of the player box
    pub player_size: Vec3,
    /// Upward velocity applied on jump (m/s)
    pub jump_force: f32,
    /// Horizontal run speed while a direction is held (m/s)
    pub move_speed: f32,
    /// Per-frame horizontal velocity multiplier with no direction held
    pub friction: f32,

    // === World ===
    /// Horizontal clamp for the player centre
    pub world_half_width: f32,
    /// Player dies below this height
    pub void_y: f32,
    /// Distance to the level end that completes the level
    pub goal_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: Vec3::new(0.2, 0.2, 0.1),
            jump_force: 8.0,
            move_speed: 4.0,
            friction: 0.8,

            world_half_width: WORLD_HALF_WIDTH,
            void_y: VOID_Y,
            goal_radius: GOAL_RADIUS,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON (for writing a template file)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Filter a frame delta. Returns None for deltas that must not be simulated.
    ///
    /// Valid deltas pass through unchanged; capping long frames is the host's job.
    pub fn sanitize_dt(&self, dt: f32) -> Option<f32> {
        if !dt.is_finite() || dt <= 0.0 {
            return None;
        }
        Some(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_player_constants() {
        let t = Tuning::default();
        assert_eq!(t.jump_force, 8.0);
        assert_eq!(t.move_speed, 4.0);
        assert_eq!(t.player_size, Vec3::new(0.2, 0.2, 0.1));
        assert_eq!(t.world_half_width, 10.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "jump_force": 10.5 }"#).unwrap();
        assert_eq!(t.jump_force, 10.5);
        assert_eq!(t.move_speed, 4.0);
        assert_eq!(t.void_y, -5.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut t = Tuning::default();
        t.friction = 0.5;
        let json = t.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Tuning::from_json("{ jump_force: }").is_err());
    }

    #[test]
    fn test_sanitize_dt() {
        let t = Tuning::default();
        assert_eq!(t.sanitize_dt(0.0), None);
        assert_eq!(t.sanitize_dt(-0.016), None);
        assert_eq!(t.sanitize_dt(f32::NAN), None);
        assert_eq!(t.sanitize_dt(f32::INFINITY), None);
        assert_eq!(t.sanitize_dt(0.05), Some(0.05));
        assert_eq!(t.sanitize_dt(0.5), Some(0.5));
    }
}
