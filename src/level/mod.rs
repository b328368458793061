pub mod loader;

pub use loader::{JsonLevelLoader, parse_level};

use crate::error::LoadError;
use crate::geometry::Aabb;

pub const PLATFORMS_LAYER: &str = "Platforms";
pub const COINS_LAYER: &str = "Coins";
pub const FOREGROUND_LAYER: &str = "Foreground";
pub const BACKGROUND_LAYER: &str = "Background";
pub const HAZARDS_LAYER: &str = "Don't Touch";

/// A flat list of tile boxes from one map layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteSet {
    boxes: Vec<Aabb>,
}

impl SpriteSet {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Aabb> {
        self.boxes.iter()
    }

    pub fn overlapping<'a>(&'a self, target: &'a Aabb) -> impl Iterator<Item = &'a Aabb> + 'a {
        self.boxes.iter().filter(move |b| b.overlaps(target))
    }

    pub fn any_overlap(&self, target: &Aabb) -> bool {
        self.boxes.iter().any(|b| b.overlaps(target))
    }

    /// Remove and return every box overlapping `target`. A removed box is
    /// gone for good, so a second call with the same target returns nothing.
    pub fn remove_overlapping(&mut self, target: &Aabb) -> Vec<Aabb> {
        let mut removed = Vec::new();
        self.boxes.retain(|b| {
            if b.overlaps(target) {
                removed.push(*b);
                false
            } else {
                true
            }
        });
        removed
    }
}

impl FromIterator<Aabb> for SpriteSet {
    fn from_iter<I: IntoIterator<Item = Aabb>>(iter: I) -> Self {
        Self { boxes: iter.into_iter().collect() }
    }
}

/// Everything the session needs from one level description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelData {
    pub number: u32,
    pub platforms: SpriteSet,
    pub collectibles: SpriteSet,
    pub hazards: SpriteSet,
    pub foreground: SpriteSet,
    pub background: SpriteSet,
    /// x-coordinate of the level's right edge.
    pub end_of_map: f32,
    pub background_color: Option<[u8; 3]>,
}

/// Produces the level for a 1-based level number.
pub trait LevelLoader {
    fn load(&self, level: u32) -> Result<LevelData, LoadError>;
}
