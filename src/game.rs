use std::collections::VecDeque;

use crate::audio::SoundSink;
use crate::config::GameConfig;
use crate::error::LoadError;
use crate::input::{InputEvent, InputState};
use crate::level::{LevelData, LevelLoader};
use crate::outcome::{Signal, TickOutcome, classify};
use crate::physics::Physics;
use crate::session::SessionState;
use crate::velocity::resolve_velocity;
use crate::viewport::ViewportRect;

/// Score line drawn in the bottom-left corner of the view.
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub text: String,
    /// World-space anchor, follows the camera.
    pub x: f32,
    pub y: f32,
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    pub signals: Vec<Signal>,
    /// `Some` only when the camera moved or was reset this tick.
    pub viewport: Option<ViewportRect>,
}

/// One running game: session state, current level, and the collaborators
/// that move, load and play things.
pub struct Game<P, L, S> {
    config: GameConfig,
    session: SessionState,
    level: LevelData,
    input: InputState,
    pending: VecDeque<InputEvent>,
    physics: P,
    loader: L,
    sounds: S,
}

impl<P: Physics, L: LevelLoader, S: SoundSink> Game<P, L, S> {
    /// Load `start_level` and place the player on it.
    pub fn new(config: GameConfig, physics: P, loader: L, sounds: S, start_level: u32) -> Result<Self, LoadError> {
        let level = loader.load(start_level)?;
        let session = SessionState::new(
            start_level,
            level.end_of_map,
            config.world.start(),
            config.world.player_size(),
        );
        tracing::info!(level = start_level, "session started");
        Ok(Self {
            config,
            session,
            level,
            input: InputState::new(),
            pending: VecDeque::new(),
            physics,
            loader,
            sounds,
        })
    }

    /// (Re)start on `level_number`. The load happens first; on failure the
    /// current level and session are left exactly as they were.
    pub fn setup(&mut self, level_number: u32) -> Result<(), LoadError> {
        let level = self.loader.load(level_number)?;
        self.session.setup(level_number, level.end_of_map, self.config.world.start());
        self.level = level;
        tracing::info!(level = level_number, "level set up");
        Ok(())
    }

    /// Queue a key transition for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Advance the game by one step.
    ///
    /// Order: apply queued input, resolve velocity, physics, classify
    /// outcomes, play sounds, reload on level completion, scroll the camera.
    pub fn tick(&mut self, delta_time: f32) -> Result<TickReport, LoadError> {
        let input = self.input.apply_all(self.pending.drain(..));
        let mut signals = Vec::new();

        let can_jump = self.physics.can_jump(&self.session.player, &self.level.platforms);
        let intent = resolve_velocity(input, can_jump, &self.config.movement);
        intent.apply(&mut self.session.player);
        if intent.jumped {
            signals.push(Signal::Jump);
        }

        self.physics.step(&mut self.session.player, &self.level.platforms);

        let outcome = classify(&mut self.session, &mut self.level, &self.config.world, &mut signals);
        for signal in &signals {
            if let Some(sound) = signal.sound() {
                self.sounds.play(sound);
            }
        }
        if outcome.viewport_reset() {
            tracing::debug!(score = self.session.level.score, "player respawned");
        }

        let mut dirty = outcome.viewport_reset();
        if outcome.level_complete {
            self.setup(self.session.level.level_number + 1)?;
            dirty = true;
        }

        let screen = self.config.screen.size();
        dirty |= self.session.viewport.follow(&self.session.player.bounds(), &self.config.margins, screen);

        let viewport = dirty.then(|| self.viewport_rect());
        tracing::trace!(delta_time, ?viewport, "tick");
        Ok(TickReport { outcome, signals, viewport })
    }

    pub fn viewport_rect(&self) -> ViewportRect {
        self.session.viewport.rect(self.config.screen.width, self.config.screen.height)
    }

    pub fn hud(&self) -> Hud {
        Hud {
            text: format!("Score: {}", self.session.level.score),
            x: 10.0 + self.session.viewport.view_left as f32,
            y: 10.0 + self.session.viewport.view_bottom as f32,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn level(&self) -> &LevelData {
        &self.level
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sounds(&self) -> &S {
        &self.sounds
    }
}
