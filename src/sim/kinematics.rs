//! Moving platforms and obstacles
//!
//! Platforms ping-pong within a radius of their anchor. Obstacles slide along
//! x and bounce at fixed world-space bounds.

use super::state::{Obstacle, Platform};
use crate::consts::OBSTACLE_BOUND;
use crate::flatten;

impl Platform {
    /// Step along the travel direction, reversing once past `move_range` from the anchor
    pub fn advance(&mut self, dt: f32) {
        if !self.is_moving {
            return;
        }

        self.position.x += self.move_direction.x * self.move_speed * dt;
        self.position.y += self.move_direction.y * self.move_speed * dt;

        let dist_from_anchor = flatten(self.position).distance(flatten(self.original_pos));
        if dist_from_anchor > self.move_range {
            self.move_direction.x = -self.move_direction.x;
            self.move_direction.y = -self.move_direction.y;
        }
    }
}

impl Obstacle {
    /// Slide along x, bouncing outside ±OBSTACLE_BOUND
    pub fn advance(&mut self, dt: f32) {
        if !self.is_moving {
            return;
        }

        self.position.x += self.move_direction.x * self.move_speed * dt;

        if self.position.x > OBSTACLE_BOUND || self.position.x < -OBSTACLE_BOUND {
            self.move_direction.x = -self.move_direction.x;
        }
    }
}

/// Advance every moving platform and obstacle in a level
pub fn advance_level(platforms: &mut [Platform], obstacles: &mut [Obstacle], dt: f32) {
    for platform in platforms.iter_mut() {
        platform.advance(dt);
    }
    for obstacle in obstacles.iter_mut() {
        obstacle.advance(dt);
    }
}
