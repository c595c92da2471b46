//! Keyboard Mapping
//!
//! Maps keyboard and pointer input to throw commands.

use winit::keyboard::KeyCode;

use super::actions::{MovementState, ThrowCommand};

/// Map a keyboard key event to a [`ThrowCommand`].
///
/// Force and angle adjustments repeat while the key is held (the caller
/// re-sends key-down events); one-shot commands only fire on press.
///
/// # Bindings
/// * `W` / `S` - force up/down by 1 m/s
/// * `ArrowUp` / `ArrowDown` - angle up/down by 0.05 rad
/// * `Space` - throw
/// * `E` - pickup or drop
/// * `Escape` - stop aiming
pub fn map_key_to_command(key: KeyCode, pressed: bool) -> Option<ThrowCommand> {
    if !pressed {
        return None;
    }
    match key {
        KeyCode::KeyW => Some(ThrowCommand::AdjustForce(1.0)),
        KeyCode::KeyS => Some(ThrowCommand::AdjustForce(-1.0)),
        KeyCode::ArrowUp => Some(ThrowCommand::AdjustAngle(0.05)),
        KeyCode::ArrowDown => Some(ThrowCommand::AdjustAngle(-0.05)),
        KeyCode::Space => Some(ThrowCommand::Throw),
        KeyCode::KeyE => Some(ThrowCommand::PickupOrDrop),
        KeyCode::Escape => Some(ThrowCommand::StopAim),
        _ => None,
    }
}

/// Map a primary pointer-button event to an aim command.
///
/// Press begins aiming; release throws (when the state machine is in
/// aiming mode; otherwise the release is ignored downstream).
pub fn map_pointer_button(pressed: bool) -> ThrowCommand {
    if pressed {
        ThrowCommand::BeginAim
    } else {
        ThrowCommand::Release
    }
}

/// Update the movement state for a key event.
///
/// Returns `true` if the key was a movement key (IJKL).
pub fn apply_movement_key(movement: &mut MovementState, key: KeyCode, pressed: bool) -> bool {
    match key {
        KeyCode::KeyI => movement.forward = pressed,
        KeyCode::KeyK => movement.backward = pressed,
        KeyCode::KeyJ => movement.left = pressed,
        KeyCode::KeyL => movement.right = pressed,
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_keys_map_to_signed_deltas() {
        assert_eq!(
            map_key_to_command(KeyCode::KeyW, true),
            Some(ThrowCommand::AdjustForce(1.0))
        );
        assert_eq!(
            map_key_to_command(KeyCode::KeyS, true),
            Some(ThrowCommand::AdjustForce(-1.0))
        );
    }

    #[test]
    fn test_release_events_do_not_fire_commands() {
        assert_eq!(map_key_to_command(KeyCode::Space, false), None);
        assert_eq!(map_key_to_command(KeyCode::KeyW, false), None);
    }

    #[test]
    fn test_unbound_key_maps_to_nothing() {
        assert_eq!(map_key_to_command(KeyCode::KeyZ, true), None);
    }

    #[test]
    fn test_pointer_press_release_cycle() {
        assert_eq!(map_pointer_button(true), ThrowCommand::BeginAim);
        assert_eq!(map_pointer_button(false), ThrowCommand::Release);
    }

    #[test]
    fn test_movement_keys_toggle_state() {
        let mut movement = MovementState::default();
        assert!(apply_movement_key(&mut movement, KeyCode::KeyI, true));
        assert!(movement.forward);
        assert!(apply_movement_key(&mut movement, KeyCode::KeyI, false));
        assert!(!movement.forward);
        assert!(!apply_movement_key(&mut movement, KeyCode::KeyQ, true));
    }
}
