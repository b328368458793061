use funhouse::config::WorldConfig;
use funhouse::geometry::Aabb;
use funhouse::level::{LevelData, SpriteSet};
use funhouse::outcome::{Signal, classify};
use funhouse::session::SessionState;
use funhouse::viewport::ViewportState;
use glam::Vec2;

fn session_at(x: f32, y: f32) -> SessionState {
    let world = WorldConfig::default();
    let mut session = SessionState::new(1, 1000.0, world.start(), world.player_size());
    session.player.center = Vec2::new(x, y);
    session.viewport = ViewportState { view_left: 320, view_bottom: -40 };
    session
}

fn level() -> LevelData {
    LevelData { number: 1, end_of_map: 1000.0, ..Default::default() }
}

#[test]
fn test_falling_off_map_respawns() {
    let world = WorldConfig::default();
    let mut session = session_at(400.0, -150.0);
    session.player.velocity = Vec2::new(3.0, -12.0);
    let mut signals = Vec::new();

    let outcome = classify(&mut session, &mut level(), &world, &mut signals);

    assert!(outcome.fell_off_map);
    assert!(!outcome.hazard_hit);
    assert!(outcome.viewport_reset());
    assert_eq!(session.player.center, Vec2::new(64.0, 225.0));
    assert_eq!(session.player.velocity, Vec2::ZERO);
    assert_eq!(session.viewport, ViewportState::new());
    assert_eq!(signals, vec![Signal::Fail]);
}

#[test]
fn test_hazard_respawns_and_zeroes_velocity() {
    let world = WorldConfig::default();
    let mut session = session_at(500.0, 300.0);
    session.player.velocity = Vec2::new(3.0, 5.0);
    session.level.score = 4;
    let mut level = level();
    level.hazards = SpriteSet::new(vec![Aabb::from_corner(480.0, 240.0, 64.0, 64.0)]);
    let mut signals = Vec::new();

    let outcome = classify(&mut session, &mut level, &world, &mut signals);

    assert!(outcome.hazard_hit);
    assert!(!outcome.fell_off_map);
    assert_eq!(session.player.center, world.start());
    assert_eq!(session.player.velocity, Vec2::ZERO);
    assert_eq!(session.viewport, ViewportState::new());
    assert_eq!(session.level.score, 4);
    assert_eq!(signals, vec![Signal::Fail]);
}

#[test]
fn test_collecting_coins() {
    let world = WorldConfig::default();
    let mut session = session_at(500.0, 300.0);
    let mut level = level();
    level.collectibles = SpriteSet::new(vec![
        Aabb::from_corner(480.0, 260.0, 32.0, 32.0),
        Aabb::from_corner(500.0, 320.0, 32.0, 32.0),
        Aabb::from_corner(900.0, 300.0, 32.0, 32.0),
    ]);
    let mut signals = Vec::new();

    let outcome = classify(&mut session, &mut level, &world, &mut signals);
    assert_eq!(outcome.collected, 2);
    assert_eq!(session.level.score, 2);
    assert_eq!(signals, vec![Signal::Collect, Signal::Collect]);
    assert_eq!(level.collectibles.len(), 1);

    // Collected coins are gone; standing still does not score again.
    signals.clear();
    let outcome = classify(&mut session, &mut level, &world, &mut signals);
    assert_eq!(outcome.collected, 0);
    assert_eq!(session.level.score, 2);
    assert!(signals.is_empty());
}

#[test]
fn test_level_complete_is_inclusive() {
    let world = WorldConfig::default();
    let mut signals = Vec::new();

    let mut session = session_at(1000.0, 300.0);
    let outcome = classify(&mut session, &mut level(), &world, &mut signals);
    assert!(outcome.level_complete);
    assert_eq!(signals, vec![Signal::LevelComplete { next_level: 2 }]);
    // Reloading is the caller's job.
    assert_eq!(session.level.level_number, 1);

    signals.clear();
    let mut session = session_at(999.5, 300.0);
    let outcome = classify(&mut session, &mut level(), &world, &mut signals);
    assert!(!outcome.level_complete);
    assert!(signals.is_empty());
}

#[test]
fn test_effects_fire_together() {
    let world = WorldConfig::default();
    let mut session = session_at(400.0, -150.0);
    let mut level = level();
    level.collectibles = SpriteSet::new(vec![Aabb::from_corner(390.0, -160.0, 20.0, 20.0)]);
    let mut signals = Vec::new();

    let outcome = classify(&mut session, &mut level, &world, &mut signals);

    assert_eq!(outcome.collected, 1);
    assert!(outcome.fell_off_map);
    assert_eq!(session.level.score, 1);
    assert_eq!(signals, vec![Signal::Collect, Signal::Fail]);
}

#[test]
fn test_signal_sounds() {
    use funhouse::audio::Sound;
    assert_eq!(Signal::Jump.sound(), Some(Sound::Jump));
    assert_eq!(Signal::Collect.sound(), Some(Sound::Collect));
    assert_eq!(Signal::Fail.sound(), Some(Sound::GameOver));
    assert_eq!(Signal::LevelComplete { next_level: 3 }.sound(), None);
}
