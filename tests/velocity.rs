use funhouse::config::MovementConfig;
use funhouse::input::InputState;
use funhouse::player::PlayerState;
use funhouse::velocity::resolve_velocity;
use glam::Vec2;

fn input(up: bool, down: bool, left: bool, right: bool) -> InputState {
    InputState { up, down, left, right }
}

#[test]
fn test_no_input_stops_horizontal_only() {
    let intent = resolve_velocity(InputState::new(), true, &MovementConfig::default());
    assert_eq!(intent.change_x, 0.0);
    assert_eq!(intent.change_y, None);
    assert!(!intent.jumped);
}

#[test]
fn test_jump_requires_ground() {
    let m = MovementConfig::default();
    let grounded = resolve_velocity(input(true, false, false, false), true, &m);
    assert_eq!(grounded.change_y, Some(m.jump_speed));
    assert!(grounded.jumped);

    let airborne = resolve_velocity(input(true, false, false, false), false, &m);
    assert_eq!(airborne.change_y, None);
    assert!(!airborne.jumped);
}

#[test]
fn test_down_pushes_down() {
    let m = MovementConfig::default();
    let intent = resolve_velocity(input(false, true, false, false), false, &m);
    assert_eq!(intent.change_y, Some(-m.speed));
}

#[test]
fn test_opposite_keys_cancel() {
    let m = MovementConfig::default();
    let intent = resolve_velocity(input(true, true, true, true), true, &m);
    assert_eq!(intent.change_x, 0.0);
    assert_eq!(intent.change_y, None);
    assert!(!intent.jumped);
}

#[test]
fn test_every_combination() {
    let m = MovementConfig::default();
    for bits in 0..16u8 {
        let i = input(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
        for can_jump in [false, true] {
            let intent = resolve_velocity(i, can_jump, &m);

            let expected_x = match (i.left, i.right) {
                (true, false) => -m.speed,
                (false, true) => m.speed,
                _ => 0.0,
            };
            assert_eq!(intent.change_x, expected_x, "{i:?}");

            let expected_y = match (i.up, i.down) {
                (true, false) if can_jump => Some(m.jump_speed),
                (false, true) => Some(-m.speed),
                _ => None,
            };
            assert_eq!(intent.change_y, expected_y, "{i:?} can_jump={can_jump}");
            assert_eq!(intent.jumped, i.up && !i.down && can_jump);
        }
    }
}

#[test]
fn test_apply_keeps_vertical_when_unset() {
    let mut player = PlayerState::new(Vec2::ZERO, Vec2::new(60.0, 110.0));
    player.velocity = Vec2::new(3.0, -4.5);
    let intent = resolve_velocity(InputState::new(), false, &MovementConfig::default());
    intent.apply(&mut player);
    assert_eq!(player.velocity, Vec2::new(0.0, -4.5));
}
