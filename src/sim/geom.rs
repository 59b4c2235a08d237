//! Axis-aligned boxes in the x/y plane
//!
//! Every gameplay shape is a box described by its centre and full extents.
//! The z component is ignored.

use glam::{Vec2, Vec3};

use crate::flatten;

/// An axis-aligned bounding box in the gameplay plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a centre position and full size (half-extents are size / 2)
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let c = flatten(center);
        let half = flatten(size) / 2.0;
        Self {
            min: c - half,
            max: c + half,
        }
    }

    /// Strict overlap on both axes. Boxes that only touch along an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Top surface height
    #[inline]
    pub fn top(&self) -> f32 {
        self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box(x: f32, y: f32) -> Aabb {
        Aabb::from_center_size(Vec3::new(x, y, 0.0), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_from_center_size() {
        let b = Aabb::from_center_size(Vec3::new(2.0, -1.0, 7.0), Vec3::new(4.0, 0.5, 0.5));
        assert_eq!(b.min, Vec2::new(0.0, -1.25));
        assert_eq!(b.max, Vec2::new(4.0, -0.75));
        assert_eq!(b.top(), -0.75);
    }

    #[test]
    fn test_overlap() {
        assert!(unit_box(0.0, 0.0).overlaps(&unit_box(0.5, 0.5)));
        assert!(!unit_box(0.0, 0.0).overlaps(&unit_box(2.0, 0.0)));
        assert!(!unit_box(0.0, 0.0).overlaps(&unit_box(0.0, -2.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // Shared vertical edge at x = 0.5
        assert!(!unit_box(0.0, 0.0).overlaps(&unit_box(1.0, 0.0)));
        // Shared horizontal edge at y = 0.5
        assert!(!unit_box(0.0, 0.0).overlaps(&unit_box(0.0, 1.0)));
    }
}
