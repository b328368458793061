// =============================================================================
// PHYSICS.RS: Platformer movement against static boxes
//
// The session only talks to the `Physics` trait. `Platformer` is the stock
// implementation: constant gravity, then move-and-push-out one axis at a time
// against the platform set. No slopes, no moving platforms, no substeps.
// =============================================================================

use crate::geometry::Aabb;
use crate::level::SpriteSet;
use crate::player::PlayerState;

/// How far below the feet `can_jump` probes for ground.
pub const GROUND_PROBE: f32 = 5.0;

/// Overlap depth below which two boxes count as touching, not colliding.
/// Snapping with fractional tile or hitbox sizes leaves a few ulps behind.
pub const CONTACT_SLOP: f32 = 0.01;

pub trait Physics {
    /// True if the player is standing on something this tick.
    fn can_jump(&self, player: &PlayerState, platforms: &SpriteSet) -> bool;
    /// Integrate one tick of movement, resolving collisions with `platforms`.
    fn step(&mut self, player: &mut PlayerState, platforms: &SpriteSet);
}

#[derive(Debug, Clone, Copy)]
pub struct Platformer {
    /// Downward acceleration in pixels per tick².
    pub gravity: f32,
}

impl Platformer {
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }
}

impl Physics for Platformer {
    fn can_jump(&self, player: &PlayerState, platforms: &SpriteSet) -> bool {
        let probe = player.bounds().translated(0.0, -GROUND_PROBE);
        platforms.any_overlap(&probe)
    }

    fn step(&mut self, player: &mut PlayerState, platforms: &SpriteSet) {
        player.velocity.y -= self.gravity;

        // Vertical first: land on floors, bump heads on ceilings. Boxes only
        // grazed sideways (a wall just snapped against) are not floors.
        player.center.y += player.velocity.y;
        let bounds = player.bounds();
        let half_h = player.size.y * 0.5;
        let blocking = |b: &&Aabb| b.right.min(bounds.right) - b.left.max(bounds.left) > CONTACT_SLOP;
        if player.velocity.y <= 0.0 {
            let floor = platforms.overlapping(&bounds).filter(blocking).map(|p| p.top).reduce(f32::max);
            if let Some(top) = floor {
                player.center.y = top + half_h;
                player.velocity.y = 0.0;
            }
        } else {
            let ceiling = platforms.overlapping(&bounds).filter(blocking).map(|p| p.bottom).reduce(f32::min);
            if let Some(bottom) = ceiling {
                player.center.y = bottom - half_h;
                player.velocity.y = 0.0;
            }
        }

        // Then horizontal: stop flush against walls. Boxes only grazed
        // vertically (a floor just snapped onto) are not walls.
        player.center.x += player.velocity.x;
        let bounds = player.bounds();
        let half_w = player.size.x * 0.5;
        let blocking = |b: &&Aabb| b.top.min(bounds.top) - b.bottom.max(bounds.bottom) > CONTACT_SLOP;
        if player.velocity.x > 0.0 {
            if let Some(left) = platforms.overlapping(&bounds).filter(blocking).map(|p| p.left).reduce(f32::min) {
                player.center.x = left - half_w;
            }
        } else if player.velocity.x < 0.0 {
            if let Some(right) = platforms.overlapping(&bounds).filter(blocking).map(|p| p.right).reduce(f32::max) {
                player.center.x = right + half_w;
            }
        }
    }
}
