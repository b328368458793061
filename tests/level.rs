use std::fs;

use funhouse::error::LoadError;
use funhouse::geometry::Aabb;
use funhouse::level::{JsonLevelLoader, LevelLoader, SpriteSet, parse_level};

const TILE: f32 = 64.0;

const SMALL: &str = r#####"{
    "width": 4,
    "height": 3,
    "background_color": [10, 20, 30],
    "layers": {
        "Platforms":   ["....", "..#.", "####"],
        "Don't Touch": ["...x", "....", "...."]
    }
}"#####;

#[test]
fn test_rows_are_flipped_to_y_up() {
    let level = parse_level(1, SMALL, TILE).unwrap();
    assert_eq!(level.platforms.len(), 5);
    // Bottom row sits on y = 0.
    assert!(level.platforms.iter().any(|b| *b == Aabb::from_corner(0.0, 0.0, TILE, TILE)));
    // Middle-row tile at column 2.
    assert!(level.platforms.iter().any(|b| *b == Aabb::new(128.0, 192.0, 64.0, 128.0)));
    // Top row of the file is the highest row in the world.
    let hazard: Vec<_> = level.hazards.iter().copied().collect();
    assert_eq!(hazard, vec![Aabb::new(192.0, 256.0, 128.0, 192.0)]);
}

#[test]
fn test_end_of_map_and_colour() {
    let level = parse_level(3, SMALL, TILE).unwrap();
    assert_eq!(level.number, 3);
    assert_eq!(level.end_of_map, 256.0);
    assert_eq!(level.background_color, Some([10, 20, 30]));
}

#[test]
fn test_missing_layers_are_empty() {
    let level = parse_level(1, SMALL, TILE).unwrap();
    assert!(level.collectibles.is_empty());
    assert!(level.foreground.is_empty());
    assert!(level.background.is_empty());
}

#[test]
fn test_ragged_row_is_rejected() {
    let text = r#"{"width": 4, "height": 2, "layers": {"Coins": ["....", "..."]}}"#;
    let err = parse_level(1, text, TILE).unwrap_err();
    assert!(matches!(err, LoadError::RaggedLayer { row: 1, found: 3, expected: 4, .. }));
}

#[test]
fn test_wrong_row_count_is_rejected() {
    let text = r###"{"width": 2, "height": 3, "layers": {"Platforms": ["##", "##"]}}"###;
    let err = parse_level(1, text, TILE).unwrap_err();
    assert!(matches!(err, LoadError::LayerHeight { found: 2, expected: 3, .. }));
}

#[test]
fn test_malformed_json() {
    let err = parse_level(2, "not json", TILE).unwrap_err();
    assert!(matches!(err, LoadError::Parse { level: 2, .. }));
}

#[test]
fn test_loader_reads_numbered_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("funhouse_level_1.json"), SMALL).unwrap();
    let loader = JsonLevelLoader::new(dir.path(), "funhouse_level", TILE);

    assert_eq!(loader.path_for(3), dir.path().join("funhouse_level_3.json"));

    let level = loader.load(1).unwrap();
    assert_eq!(level.platforms.len(), 5);

    assert!(matches!(loader.load(2), Err(LoadError::MissingLevel { level: 2, .. })));
    assert!(matches!(loader.load(0), Err(LoadError::InvalidLevelNumber(0))));
}

#[test]
fn test_sprite_set_removal() {
    let mut coins: SpriteSet = [
        Aabb::from_corner(0.0, 0.0, 10.0, 10.0),
        Aabb::from_corner(50.0, 0.0, 10.0, 10.0),
    ]
    .into_iter()
    .collect();
    let player = Aabb::new(5.0, 20.0, 0.0, 20.0);

    assert!(coins.any_overlap(&player));
    assert_eq!(coins.remove_overlapping(&player).len(), 1);
    assert_eq!(coins.len(), 1);
    assert!(coins.remove_overlapping(&player).is_empty());
}
