//! Rigid body representation for the thrown ball
//!
//! A body is either *pose-driven* (its transform is dictated externally,
//! e.g. by the hand holding it) or *simulated* (its transform is produced
//! by the world's integration). The mode flag is the single switch the
//! rest of the simulation uses to hand authority back and forth.

use glam::Vec3;

/// Who owns a body's transform this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyMode {
    /// Transform is written from outside (hand pose); integration skips it
    #[default]
    PoseDriven,
    /// Transform is produced by physics integration
    Simulated,
}

/// Contact response parameters for the body/ground pairing.
#[derive(Debug, Clone, Copy)]
pub struct BodyMaterial {
    /// Fraction of tangential speed lost per ground contact
    pub friction: f32,
    /// Fraction of normal speed retained per bounce
    pub restitution: f32,
}

impl Default for BodyMaterial {
    fn default() -> Self {
        Self {
            friction: 0.3,
            restitution: 0.6,
        }
    }
}

/// A sphere body simulated against the ground plane.
#[derive(Debug, Clone, Copy)]
pub struct RigidBody {
    /// Current position in world space (meters)
    pub position: Vec3,
    /// Current velocity (m/s)
    pub velocity: Vec3,
    /// Current angular velocity (rad/s)
    pub angular_velocity: Vec3,
    /// Mass (kilograms)
    pub mass: f32,
    /// Sphere radius (meters)
    pub radius: f32,
    /// Pose-driven vs. simulated
    pub mode: BodyMode,
    /// Linear velocity decay per second (0 = ideal projectile)
    pub linear_damping: f32,
    /// Angular velocity decay per second
    pub angular_damping: f32,
    /// Ground contact response parameters
    pub material: BodyMaterial,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: 1.0,
            radius: 0.5,
            mode: BodyMode::PoseDriven,
            linear_damping: 0.0,
            angular_damping: 0.0,
            material: BodyMaterial::default(),
        }
    }
}

impl RigidBody {
    /// Create a sphere body at `position`.
    pub fn sphere(position: Vec3, radius: f32, mass: f32) -> Self {
        Self {
            position,
            radius,
            mass: mass.max(0.001),
            ..Self::default()
        }
    }

    /// Overwrite the transform from an external pose and stop all motion.
    ///
    /// Only meaningful while pose-driven; the world never integrates a
    /// pose-driven body, so this is the sole way its position changes.
    pub fn set_pose(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
    }

    /// Semi-implicit Euler integration over one fixed substep.
    ///
    /// Velocity is updated before position, then decayed by the damping
    /// coefficients. Pose-driven bodies are not integrated.
    pub(crate) fn integrate(&mut self, gravity: Vec3, dt: f32) {
        if self.mode != BodyMode::Simulated {
            return;
        }

        self.velocity += gravity * dt;
        if self.linear_damping > 0.0 {
            self.velocity *= (1.0 - self.linear_damping * dt).max(0.0);
        }
        if self.angular_damping > 0.0 {
            self.angular_velocity *= (1.0 - self.angular_damping * dt).max(0.0);
        }
        self.position += self.velocity * dt;
    }
}
