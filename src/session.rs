use glam::Vec2;

use crate::player::PlayerState;
use crate::viewport::ViewportState;

/// Per-level progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelContext {
    /// 1-based; only ever increases.
    pub level_number: u32,
    /// x-coordinate of the level's right edge.
    pub end_of_map: f32,
    /// Survives respawns, cleared by level setup.
    pub score: u32,
}

/// All mutable state of one running game, owned by the session and handed
/// to the per-tick functions by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionState {
    pub player: PlayerState,
    pub viewport: ViewportState,
    pub level: LevelContext,
}

impl SessionState {
    pub fn new(level_number: u32, end_of_map: f32, start: Vec2, player_size: Vec2) -> Self {
        Self {
            player: PlayerState::new(start, player_size),
            viewport: ViewportState::new(),
            level: LevelContext { level_number, end_of_map, score: 0 },
        }
    }

    /// Fresh start on a (possibly new) level: player at rest on `start`,
    /// camera at the origin, score cleared.
    pub fn setup(&mut self, level_number: u32, end_of_map: f32, start: Vec2) {
        self.player.respawn(start);
        self.viewport.reset();
        self.level = LevelContext { level_number, end_of_map, score: 0 };
    }

    /// Send the player back to `start` after a hazard or a fall. The score is
    /// kept.
    pub fn respawn(&mut self, start: Vec2) {
        self.player.respawn(start);
        self.viewport.reset();
    }
}
