// =============================================================================
// GEOMETRY.RS: Axis-aligned boxes in world pixel space
//
// Everything the controller knows about the world is a box:
// - the player's bounds (derived from center + size)
// - platforms, coins, hazards and decoration tiles from the level layers
// World space is y-up: `bottom <= top`.
// =============================================================================

use glam::Vec2;

/// Axis-aligned bounding box in world pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Aabb {
    /// Build a box from its edges. Swapped edges are normalised so that
    /// `left <= right` and `bottom <= top` always hold.
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left: left.min(right),
            right: left.max(right),
            bottom: bottom.min(top),
            top: bottom.max(top),
        }
    }

    /// Box of `size` centred on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            left: center.x - half.x,
            right: center.x + half.x,
            bottom: center.y - half.y,
            top: center.y + half.y,
        }
    }

    /// Box whose bottom-left corner is `(x, y)`.
    pub fn from_corner(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, x + width, y, y + height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap,
    /// so a player resting exactly on a platform is not "inside" it.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.bottom < other.top
            && self.top > other.bottom
    }

    /// Copy of this box shifted by `(dx, dy)`.
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            left: self.left + dx,
            right: self.right + dx,
            bottom: self.bottom + dy,
            top: self.top + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalises_edges() {
        let b = Aabb::new(10.0, 0.0, 5.0, -5.0);
        assert_eq!(b, Aabb { left: 0.0, right: 10.0, bottom: -5.0, top: 5.0 });
    }

    #[test]
    fn test_from_center() {
        let b = Aabb::from_center(Vec2::new(64.0, 225.0), Vec2::new(40.0, 100.0));
        assert_eq!(b.left, 44.0);
        assert_eq!(b.right, 84.0);
        assert_eq!(b.bottom, 175.0);
        assert_eq!(b.top, 275.0);
        assert_eq!((b.width(), b.height()), (40.0, 100.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let floor = Aabb::from_corner(0.0, 0.0, 64.0, 64.0);
        let standing = Aabb::from_corner(10.0, 64.0, 20.0, 40.0);
        assert!(!floor.overlaps(&standing));
        assert!(floor.overlaps(&standing.translated(0.0, -1.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Aabb::from_corner(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_corner(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }
}
