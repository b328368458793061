use crate::audio::Sound;
use crate::config::WorldConfig;
use crate::level::LevelData;
use crate::session::SessionState;

/// Something that happened during a tick that the outside world hears about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Jump,
    Collect,
    Fail,
    LevelComplete { next_level: u32 },
}

impl Signal {
    pub fn sound(&self) -> Option<Sound> {
        match self {
            Signal::Jump => Some(Sound::Jump),
            Signal::Collect => Some(Sound::Collect),
            Signal::Fail => Some(Sound::GameOver),
            Signal::LevelComplete { .. } => None,
        }
    }
}

/// Which of the post-physics effects fired this tick. Several can fire at
/// once; they are independent guards, not states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub collected: u32,
    pub hazard_hit: bool,
    pub fell_off_map: bool,
    pub level_complete: bool,
}

impl TickOutcome {
    /// True if a respawn put the camera back at the origin.
    pub fn viewport_reset(&self) -> bool {
        self.hazard_hit || self.fell_off_map
    }
}

/// Test the player against the level after the physics step and apply every
/// matching effect, in order: collectibles, hazards, falling, level end.
///
/// Each check sees the state left by the previous one. Level completion only
/// reports `next_level`; loading it is the caller's job.
pub fn classify(
    session: &mut SessionState,
    level: &mut LevelData,
    world: &WorldConfig,
    signals: &mut Vec<Signal>,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    let picked = level.collectibles.remove_overlapping(&session.player.bounds());
    for _ in &picked {
        session.level.score += 1;
        signals.push(Signal::Collect);
    }
    outcome.collected = picked.len() as u32;

    if level.hazards.any_overlap(&session.player.bounds()) {
        session.respawn(world.start());
        signals.push(Signal::Fail);
        outcome.hazard_hit = true;
    }

    if session.player.center.y < world.fall_threshold {
        session.respawn(world.start());
        signals.push(Signal::Fail);
        outcome.fell_off_map = true;
    }

    if session.player.center.x >= session.level.end_of_map {
        signals.push(Signal::LevelComplete { next_level: session.level.level_number + 1 });
        outcome.level_complete = true;
    }

    outcome
}
