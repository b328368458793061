use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{
    BACKGROUND_LAYER, COINS_LAYER, FOREGROUND_LAYER, HAZARDS_LAYER, LevelData, LevelLoader,
    PLATFORMS_LAYER, SpriteSet,
};
use crate::config::GameConfig;
use crate::error::LoadError;
use crate::geometry::Aabb;

/// On-disk level description: named layers of equal-sized ASCII rows.
/// Row 0 is the top of the map; `.` and space are empty cells.
#[derive(Debug, Deserialize)]
struct LevelFile {
    width: u32,
    height: u32,
    #[serde(default)]
    background_color: Option<[u8; 3]>,
    #[serde(default)]
    layers: HashMap<String, Vec<String>>,
}

/// Reads `{dir}/{prefix}_{n}.json` for level `n`.
#[derive(Debug, Clone)]
pub struct JsonLevelLoader {
    dir: PathBuf,
    prefix: String,
    tile_size: f32,
}

impl JsonLevelLoader {
    pub fn new<P: AsRef<Path>>(dir: P, prefix: &str, tile_size: f32) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            prefix: prefix.to_string(),
            tile_size,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            &config.assets.levels_dir,
            &config.assets.level_prefix,
            config.world.grid_pixel_size(),
        )
    }

    pub fn path_for(&self, level: u32) -> PathBuf {
        self.dir.join(format!("{}_{}.json", self.prefix, level))
    }
}

impl LevelLoader for JsonLevelLoader {
    fn load(&self, level: u32) -> Result<LevelData, LoadError> {
        if level == 0 {
            return Err(LoadError::InvalidLevelNumber(level));
        }
        let path = self.path_for(level);
        let text = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::MissingLevel { level, path: path.clone() }
            } else {
                LoadError::Io { path: path.clone(), source }
            }
        })?;
        let data = parse_level(level, &text, self.tile_size)?;
        tracing::info!(
            level,
            path = %path.display(),
            platforms = data.platforms.len(),
            coins = data.collectibles.len(),
            hazards = data.hazards.len(),
            "loaded level"
        );
        Ok(data)
    }
}

/// Parse a level description. `tile_size` is the edge length of one tile
/// in world pixels; the map's right edge is `width * tile_size`.
pub fn parse_level(level: u32, text: &str, tile_size: f32) -> Result<LevelData, LoadError> {
    let file: LevelFile =
        serde_json::from_str(text).map_err(|source| LoadError::Parse { level, source })?;

    let layer = |name: &str| -> Result<SpriteSet, LoadError> {
        match file.layers.get(name) {
            Some(rows) => layer_boxes(level, name, rows, file.width, file.height, tile_size),
            None => {
                tracing::warn!(level, layer = name, "layer missing, using empty set");
                Ok(SpriteSet::default())
            }
        }
    };

    Ok(LevelData {
        number: level,
        platforms: layer(PLATFORMS_LAYER)?,
        collectibles: layer(COINS_LAYER)?,
        hazards: layer(HAZARDS_LAYER)?,
        foreground: layer(FOREGROUND_LAYER)?,
        background: layer(BACKGROUND_LAYER)?,
        end_of_map: file.width as f32 * tile_size,
        background_color: file.background_color,
    })
}

fn layer_boxes(
    level: u32,
    name: &str,
    rows: &[String],
    width: u32,
    height: u32,
    tile_size: f32,
) -> Result<SpriteSet, LoadError> {
    if rows.len() != height as usize {
        return Err(LoadError::LayerHeight {
            level,
            layer: name.to_string(),
            found: rows.len(),
            expected: height,
        });
    }

    let mut boxes = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != width as usize {
            return Err(LoadError::RaggedLayer {
                level,
                layer: name.to_string(),
                row,
                found,
                expected: width,
            });
        }
        // Flip rows: the file is top-down, the world is y-up.
        let bottom = (height as usize - 1 - row) as f32 * tile_size;
        for (col, cell) in line.chars().enumerate() {
            if cell == '.' || cell == ' ' {
                continue;
            }
            let left = col as f32 * tile_size;
            boxes.push(Aabb::from_corner(left, bottom, tile_size, tile_size));
        }
    }
    Ok(SpriteSet::new(boxes))
}
