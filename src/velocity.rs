use crate::config::MovementConfig;
use crate::input::InputState;
use crate::player::PlayerState;

/// What the input asks the player to do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityIntent {
    pub change_x: f32,
    /// `None` leaves the vertical velocity to the physics step.
    pub change_y: Option<f32>,
    pub jumped: bool,
}

impl VelocityIntent {
    pub fn apply(&self, player: &mut PlayerState) {
        player.velocity.x = self.change_x;
        if let Some(change_y) = self.change_y {
            player.velocity.y = change_y;
        }
    }
}

/// Resolve held directions into this tick's target velocity.
///
/// Vertical is decided first: up (when grounded) jumps, down pushes down,
/// both held cancel. Horizontal defaults to zero and opposite keys cancel.
/// Nothing latches: a jump is injected only on ticks where `can_jump` holds.
pub fn resolve_velocity(input: InputState, can_jump: bool, movement: &MovementConfig) -> VelocityIntent {
    let mut change_y = None;
    let mut jumped = false;

    if input.up && !input.down {
        if can_jump {
            change_y = Some(movement.jump_speed);
            jumped = true;
        }
    } else if input.down && !input.up {
        change_y = Some(-movement.speed);
    }

    let change_x = if input.left && !input.right {
        -movement.speed
    } else if input.right && !input.left {
        movement.speed
    } else {
        0.0
    };

    VelocityIntent { change_x, change_y, jumped }
}
