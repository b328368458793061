use glam::Vec2;

use crate::geometry::Aabb;

/// The player's body: position, per-tick velocity and hitbox size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// `(center_x, center_y)` in world pixels.
    pub center: Vec2,
    /// `(change_x, change_y)` in pixels per tick.
    pub velocity: Vec2,
    pub size: Vec2,
}

impl PlayerState {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, velocity: Vec2::ZERO, size }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.center, self.size)
    }

    /// Put the player back on `start` at rest.
    pub fn respawn(&mut self, start: Vec2) {
        self.velocity = Vec2::ZERO;
        self.center = start;
    }
}
