use std::collections::HashMap;
pub use winit::keyboard::KeyCode;

/// Logical directions the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

/// A key-down or key-up for a bound action, queued by the host and
/// applied at the top of the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Action),
    Released(Action),
}

/// Held state of the four directions, sampled once per tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        let (action, held) = match event {
            InputEvent::Pressed(a) => (a, true),
            InputEvent::Released(a) => (a, false),
        };
        match action {
            Action::Up => self.up = held,
            Action::Down => self.down = held,
            Action::Left => self.left = held,
            Action::Right => self.right = held,
        }
    }

    /// Apply every event in order and return the resulting snapshot.
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = InputEvent>) -> InputState {
        for event in events {
            self.apply(event);
        }
        *self
    }

    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::Up => self.up,
            Action::Down => self.down,
            Action::Left => self.left,
            Action::Right => self.right,
        }
    }
}

/// Maps physical keys to actions. Several keys may drive the same action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Action>,
}

impl KeyBindings {
    /// Empty map; nothing is bound.
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, action: Action, key: KeyCode) {
        self.bindings.insert(key, action);
    }

    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Translate a raw key transition into an input event for a bound key.
    pub fn translate(&self, key: KeyCode, pressed: bool) -> Option<InputEvent> {
        self.action_for(key).map(|action| {
            if pressed { InputEvent::Pressed(action) } else { InputEvent::Released(action) }
        })
    }
}

impl Default for KeyBindings {
    /// Arrow keys and WASD; Space also jumps.
    fn default() -> Self {
        let mut map = Self::new();
        for key in [KeyCode::ArrowUp, KeyCode::KeyW, KeyCode::Space] {
            map.bind(Action::Up, key);
        }
        for key in [KeyCode::ArrowDown, KeyCode::KeyS] {
            map.bind(Action::Down, key);
        }
        for key in [KeyCode::ArrowLeft, KeyCode::KeyA] {
            map.bind(Action::Left, key);
        }
        for key in [KeyCode::ArrowRight, KeyCode::KeyD] {
            map.bind(Action::Right, key);
        }
        map
    }
}
