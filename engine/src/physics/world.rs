//! Ground-plane physics world with fixed-substep stepping
//!
//! Owns every registered rigid body and advances the simulated ones with a
//! fixed substep, capped per call so a frame hitch cannot snowball into an
//! unbounded catch-up loop. Ground contacts are collected during stepping
//! and handed back to the caller *after* the step returns; nothing outside
//! the integrator runs mid-step.

use glam::Vec3;

use super::rigid_body::{BodyMode, RigidBody};

/// Below this impact speed a touch-down is treated as the ball coming to
/// rest: vertical motion stops and no contact event is emitted. Keeps a
/// settled ball from spamming zero-speed contacts every substep.
const REST_SPEED_EPSILON: f32 = 0.5;

/// Handle to a body registered in a [`PhysicsWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyHandle(usize);

/// A ground contact produced during stepping.
#[derive(Debug, Clone, Copy)]
pub struct ContactEvent {
    /// Body that touched the ground
    pub body: BodyHandle,
    /// World-space contact point (on the ground plane)
    pub position: Vec3,
    /// Surface normal at the contact (always +Y for the ground plane)
    pub normal: Vec3,
    /// Impact speed along the contact normal, positive into the ground (m/s)
    pub impact_speed: f32,
}

/// Simulation world: gravity, registered bodies, and the contact queue.
pub struct PhysicsWorld {
    gravity: Vec3,
    bodies: Vec<RigidBody>,
    contacts: Vec<ContactEvent>,
    accumulator: f32,
}

impl PhysicsWorld {
    /// Create a world with the given downward gravity magnitude (m/s²).
    pub fn new(gravity: f32) -> Self {
        Self {
            gravity: Vec3::new(0.0, -gravity, 0.0),
            bodies: Vec::new(),
            contacts: Vec::new(),
            accumulator: 0.0,
        }
    }

    /// Gravity acceleration vector.
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Register a body and return its handle.
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        self.bodies.push(body);
        BodyHandle(self.bodies.len() - 1)
    }

    /// Access a registered body.
    pub fn body(&self, handle: BodyHandle) -> &RigidBody {
        &self.bodies[handle.0]
    }

    /// Mutably access a registered body.
    pub fn body_mut(&mut self, handle: BodyHandle) -> &mut RigidBody {
        &mut self.bodies[handle.0]
    }

    /// Advance the simulation by `wall_delta` seconds of real time.
    ///
    /// Integration runs in fixed `fixed_dt` substeps, at most `max_substeps`
    /// per call; leftover time stays in the accumulator for the next frame.
    /// Returns the contacts produced during this call, in substep order.
    pub fn step(&mut self, fixed_dt: f32, wall_delta: f32, max_substeps: u32) -> &[ContactEvent] {
        self.contacts.clear();
        self.accumulator += wall_delta.max(0.0);
        // Time the substep cap cannot absorb this call is dropped, not
        // carried: carrying it would replay the hitch over later frames.
        self.accumulator = self.accumulator.min(fixed_dt * max_substeps as f32);

        let mut steps = 0u32;
        while self.accumulator >= fixed_dt && steps < max_substeps {
            self.substep(fixed_dt);
            self.accumulator -= fixed_dt;
            steps += 1;
        }

        &self.contacts
    }

    fn substep(&mut self, dt: f32) {
        for (index, body) in self.bodies.iter_mut().enumerate() {
            if body.mode != BodyMode::Simulated {
                continue;
            }

            body.integrate(self.gravity, dt);

            // Ground plane collision (y = 0, sphere of body.radius)
            if body.position.y < body.radius {
                body.position.y = body.radius;
                let impact_speed = -body.velocity.y;
                if impact_speed > REST_SPEED_EPSILON {
                    // Bounce: reflect the normal component scaled by
                    // restitution, shed tangential speed to friction.
                    body.velocity.y = impact_speed * body.material.restitution;
                    let tangential_keep = 1.0 - body.material.friction;
                    body.velocity.x *= tangential_keep;
                    body.velocity.z *= tangential_keep;

                    self.contacts.push(ContactEvent {
                        body: BodyHandle(index),
                        position: Vec3::new(body.position.x, 0.0, body.position.z),
                        normal: Vec3::Y,
                        impact_speed,
                    });
                    log::trace!(
                        "ground contact: body {index} at {:?}, impact {impact_speed:.2} m/s",
                        body.position
                    );
                } else if body.velocity.y < 0.0 {
                    // Resting contact: kill the residual vertical motion
                    body.velocity.y = 0.0;
                }
            }
        }
    }
}
