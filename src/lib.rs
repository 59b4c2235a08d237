//! Platform Hopper - A 20-level touch platformer
//!
//! Core modules:
//! - `sim`: Simulation (level catalog, player physics, collisions, progression)
//! - `tuning`: Data-driven player and world constants
//! - `platform`: Browser host bindings (wasm32 only)

pub mod platform;
pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, GameState};
pub use tuning::Tuning;

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    /// Fixed host timestep (60 Hz, matches the touch devices we target)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Number of levels in the catalog
    pub const LEVEL_COUNT: usize = 20;

    /// Player is clamped to [-WORLD_HALF_WIDTH, WORLD_HALF_WIDTH] on x
    pub const WORLD_HALF_WIDTH: f32 = 10.0;
    /// Moving obstacles bounce once they pass ±OBSTACLE_BOUND on x
    pub const OBSTACLE_BOUND: f32 = 9.0;
    /// Falling below this height kills the player
    pub const VOID_Y: f32 = -5.0;
    /// Reaching within this distance of the level end completes it
    pub const GOAL_RADIUS: f32 = 1.0;
}

/// Drop the (unused) z component
#[inline]
pub fn flatten(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// Planar (x, y) distance between two points, ignoring z
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    flatten(a).distance(flatten(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_distance_ignores_z() {
        let a = Vec3::new(0.0, 0.0, 5.0);
        let b = Vec3::new(3.0, 4.0, -5.0);
        assert!((planar_distance(a, b) - 5.0).abs() < 1e-6);
    }
}
