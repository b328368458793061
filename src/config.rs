// ── GameConfig ────────────────────────────────────────────────────────────────
//
// Every tunable number of the game in one serde tree. Each section is
// `#[serde(default)]`, so a config file only needs the values it overrides.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const SCREEN_WIDTH: u32 = 1000;
pub const SCREEN_HEIGHT: u32 = 650;
pub const SCREEN_TITLE: &str = "Priya's 2D Funhouse";

pub const PLAYER_MOVEMENT_SPEED: f32 = 3.0;
pub const PLAYER_JUMP_SPEED: f32 = 13.0;
pub const GRAVITY: f32 = 0.8;

pub const LEFT_VIEWPORT_MARGIN: f32 = 200.0;
pub const RIGHT_VIEWPORT_MARGIN: f32 = 200.0;
pub const BOTTOM_VIEWPORT_MARGIN: f32 = 150.0;
pub const TOP_VIEWPORT_MARGIN: f32 = 100.0;

pub const PLAYER_START_X: f32 = 64.0;
pub const PLAYER_START_Y: f32 = 225.0;
pub const FALL_THRESHOLD: f32 = -100.0;

pub const SPRITE_PIXEL_SIZE: f32 = 128.0;
pub const TILE_SCALING: f32 = 0.5;

/// Screen (window) dimensions and title.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            title: SCREEN_TITLE.to_string(),
        }
    }
}

impl ScreenConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Per-tick movement tuning (pixels per tick, not per second).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub speed: f32,
    pub jump_speed: f32,
    pub gravity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: PLAYER_MOVEMENT_SPEED,
            jump_speed: PLAYER_JUMP_SPEED,
            gravity: GRAVITY,
        }
    }
}

/// Minimum distance kept between the player's box and each screen edge
/// before the camera scrolls.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportMargins {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Default for ViewportMargins {
    fn default() -> Self {
        Self {
            left: LEFT_VIEWPORT_MARGIN,
            right: RIGHT_VIEWPORT_MARGIN,
            bottom: BOTTOM_VIEWPORT_MARGIN,
            top: TOP_VIEWPORT_MARGIN,
        }
    }
}

/// Player spawn point, hitbox size and the fall-off-map line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub start_x: f32,
    pub start_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub fall_threshold: f32,
    pub sprite_pixel_size: f32,
    pub tile_scaling: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            start_x: PLAYER_START_X,
            start_y: PLAYER_START_Y,
            player_width: 60.0,
            player_height: 110.0,
            fall_threshold: FALL_THRESHOLD,
            sprite_pixel_size: SPRITE_PIXEL_SIZE,
            tile_scaling: TILE_SCALING,
        }
    }
}

impl WorldConfig {
    pub fn start(&self) -> Vec2 {
        Vec2::new(self.start_x, self.start_y)
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.player_width, self.player_height)
    }

    /// Edge length of one map tile in world pixels.
    pub fn grid_pixel_size(&self) -> f32 {
        self.sprite_pixel_size * self.tile_scaling
    }
}

/// Where levels and sounds live on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub levels_dir: PathBuf,
    /// Level `n` is read from `{levels_dir}/{level_prefix}_{n}.json`.
    pub level_prefix: String,
    pub collect_sound: PathBuf,
    pub jump_sound: PathBuf,
    pub game_over_sound: PathBuf,
    /// Effect volume as linear amplitude, clamped to `0.0..=2.0`.
    pub sound_volume: f32,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            levels_dir: PathBuf::from("levels"),
            level_prefix: "funhouse_level".to_string(),
            collect_sound: PathBuf::from("sounds/coin1.wav"),
            jump_sound: PathBuf::from("sounds/jump1.wav"),
            game_over_sound: PathBuf::from("sounds/gameover1.wav"),
            sound_volume: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub movement: MovementConfig,
    pub margins: ViewportMargins,
    pub world: WorldConfig,
    pub assets: AssetConfig,
    /// Simulation ticks per second.
    pub tick_rate: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            movement: MovementConfig::default(),
            margins: ViewportMargins::default(),
            world: WorldConfig::default(),
            assets: AssetConfig::default(),
            tick_rate: 60.0,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file. Missing fields fall back to the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Seconds per simulation tick. A non-positive rate falls back to 60 Hz.
    pub fn tick_duration(&self) -> f32 {
        if self.tick_rate > 0.0 { 1.0 / self.tick_rate } else { 1.0 / 60.0 }
    }
}
