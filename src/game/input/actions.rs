//! Input Actions
//!
//! Defines all possible input commands for decoupled input handling.

use glam::Vec3;

/// Movement state for held movement keys
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementState {
    /// Get movement direction as a normalized horizontal vector
    pub fn get_direction(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;

        if self.forward {
            dir.z -= 1.0;
        }
        if self.backward {
            dir.z += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }

        if dir != Vec3::ZERO {
            dir = dir.normalize();
        }

        dir
    }

    /// Check if any movement key is held
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// High-level throw command enum
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrowCommand {
    /// Enter aiming mode (pointer press outside UI chrome)
    BeginAim,
    /// Release the aim: throws the ball when aiming
    Release,
    /// Leave aiming mode without throwing
    StopAim,
    /// Change throw force by a signed amount (m/s, clamped)
    AdjustForce(f32),
    /// Change launch angle by a signed amount (radians, clamped)
    AdjustAngle(f32),
    /// Throw immediately, independent of pointer aim
    Throw,
    /// Drop the held ball, or pick a loose ball back up
    PickupOrDrop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_no_direction() {
        let movement = MovementState::default();
        assert_eq!(movement.get_direction(), Vec3::ZERO);
        assert!(!movement.is_moving());
    }

    #[test]
    fn test_direction_is_normalized() {
        let movement = MovementState {
            forward: true,
            right: true,
            ..Default::default()
        };
        let dir = movement.get_direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.z < 0.0);
        assert!(dir.x > 0.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let movement = MovementState {
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert_eq!(movement.get_direction(), Vec3::ZERO);
    }
}
