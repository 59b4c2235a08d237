//! Collision detection and response
//!
//! Only landing on top of a platform is resolved. Side and underside contacts
//! pass through. Any overlap with an obstacle is lethal.

use super::state::{DeathCause, Obstacle, Platform, Player};

/// Result of resolving the player against a level for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionResult {
    /// Snapped onto at least one platform this frame
    pub landed: bool,
    /// Set when an obstacle killed the player
    pub death: Option<DeathCause>,
}

/// Snap the player onto `platform` if it is falling onto its top surface.
///
/// Returns true when the player was placed on the platform.
pub fn land_on_platform(player: &mut Player, platform: &Platform) -> bool {
    let bounds = platform.aabb();
    if !player.aabb().overlaps(&bounds) {
        return false;
    }

    let top = bounds.top();
    if player.velocity.y <= 0.0 && player.position.y > top {
        player.position.y = top + player.half_height();
        player.velocity.y = 0.0;
        player.on_ground = true;
        return true;
    }

    false
}

/// Index of the first obstacle the player overlaps, in list order
pub fn first_lethal_contact(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    let bounds = player.aabb();
    obstacles.iter().position(|o| bounds.overlaps(&o.aabb()))
}

/// Resolve the player against every platform, then every obstacle.
///
/// `on_ground` is recomputed from scratch; it never carries over from the previous frame.
pub fn resolve_collisions(
    player: &mut Player,
    platforms: &[Platform],
    obstacles: &[Obstacle],
) -> CollisionResult {
    player.on_ground = false;

    let mut result = CollisionResult::default();
    for platform in platforms {
        if land_on_platform(player, platform) {
            result.landed = true;
        }
    }

    if let Some(index) = first_lethal_contact(player, obstacles) {
        player.alive = false;
        result.death = Some(DeathCause::Obstacle { index });
    }

    result
}
