use funhouse::input::{Action, InputEvent, InputState, KeyBindings, KeyCode};

#[test]
fn test_default_bindings() {
    let keys = KeyBindings::default();
    assert_eq!(keys.action_for(KeyCode::ArrowUp), Some(Action::Up));
    assert_eq!(keys.action_for(KeyCode::KeyW), Some(Action::Up));
    assert_eq!(keys.action_for(KeyCode::Space), Some(Action::Up));
    assert_eq!(keys.action_for(KeyCode::KeyS), Some(Action::Down));
    assert_eq!(keys.action_for(KeyCode::KeyA), Some(Action::Left));
    assert_eq!(keys.action_for(KeyCode::ArrowRight), Some(Action::Right));
    assert_eq!(keys.action_for(KeyCode::KeyQ), None);
}

#[test]
fn test_translate() {
    let keys = KeyBindings::default();
    assert_eq!(keys.translate(KeyCode::Space, true), Some(InputEvent::Pressed(Action::Up)));
    assert_eq!(keys.translate(KeyCode::KeyA, false), Some(InputEvent::Released(Action::Left)));
    assert_eq!(keys.translate(KeyCode::Escape, true), None);
}

#[test]
fn test_rebind() {
    let mut keys = KeyBindings::new();
    assert_eq!(keys.action_for(KeyCode::KeyJ), None);
    keys.bind(Action::Left, KeyCode::KeyJ);
    keys.bind(Action::Right, KeyCode::KeyJ);
    assert_eq!(keys.action_for(KeyCode::KeyJ), Some(Action::Right));
}

#[test]
fn test_apply_all_in_order() {
    let mut state = InputState::new();
    let snapshot = state.apply_all([
        InputEvent::Pressed(Action::Up),
        InputEvent::Pressed(Action::Left),
        InputEvent::Released(Action::Up),
    ]);
    assert_eq!(snapshot, state);
    assert!(!state.is_held(Action::Up));
    assert!(state.is_held(Action::Left));
    assert!(!state.is_held(Action::Right));
}
