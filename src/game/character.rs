//! Character Module
//!
//! The ball-throwing character: a position on the ground plane, a facing
//! heading, and the anchor points the held ball and throw release use.
//! Movement is command-driven and view-relative; there is no physics body
//! behind the character, it walks on the flat ground directly.

use glam::Vec3;

use super::config::ThrowConfig;
use super::input::MovementState;

/// Height of the carrying hand above the character's feet (meters)
pub const HAND_HEIGHT: f32 = 1.4;

/// The player character.
pub struct Character {
    /// Feet position in world space
    pub position: Vec3,
    /// Horizontal facing direction (unit vector); follows movement
    pub heading: Vec3,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: Vec3::NEG_Z,
        }
    }
}

impl Character {
    /// Move the character on the horizontal plane.
    ///
    /// Input is interpreted relative to `view_dir` (the camera's horizontal
    /// forward): pressing forward walks along the view. The heading updates
    /// to the walk direction so a later drop nudges the ball the way the
    /// character is facing.
    pub fn update(&mut self, movement: &MovementState, view_dir: Vec3, speed: f32, dt: f32) {
        let input = movement.get_direction();
        if input == Vec3::ZERO {
            return;
        }

        let forward = Vec3::new(view_dir.x, 0.0, view_dir.z).normalize_or_zero();
        let forward = if forward == Vec3::ZERO { self.heading } else { forward };
        let right = Vec3::new(-forward.z, 0.0, forward.x);

        let walk = (forward * -input.z + right * input.x).normalize_or_zero();
        if walk == Vec3::ZERO {
            return;
        }

        self.position += walk * speed * dt;
        self.heading = walk;
    }

    /// World position of the carrying hand.
    pub fn hand_anchor(&self) -> Vec3 {
        self.position + Vec3::new(0.0, HAND_HEIGHT, 0.0)
    }

    /// World position a throw is released from.
    pub fn release_point(&self, config: &ThrowConfig) -> Vec3 {
        self.position + Vec3::new(0.0, config.release_height, 0.0)
    }
}
