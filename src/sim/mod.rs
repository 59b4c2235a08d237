//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Level catalog is a function of level number only
//! - Stable iteration order (platform and obstacle list order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geom;
pub mod kinematics;
pub mod levels;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, resolve_collisions};
pub use geom::Aabb;
pub use kinematics::advance_level;
pub use levels::{build_level, build_levels, difficulty_for_level, gravity_for_level};
pub use state::{
    DeathCause, GameEvent, GameState, HeldInput, Level, Obstacle, Platform, Player,
};
pub use tick::{advance_player, tick};
