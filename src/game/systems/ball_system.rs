//! Ball lifecycle management system.
//!
//! Owns the ball's rigid body and the switch between its two lives:
//! pose-driven while carried (the transform mirrors the hand), simulated
//! while flying. Reports the first qualifying ground contact after a
//! release as the landing; later bounces only damp the ball further.

use glam::Vec3;

use crate::game::config::ThrowConfig;
use crate::physics::rigid_body::{BodyMaterial, BodyMode, RigidBody};
use crate::physics::world::{BodyHandle, PhysicsWorld};

/// Landing report produced by [`BallSystem::advance`].
#[derive(Debug, Clone, Copy)]
pub struct LandingSignal {
    /// Ground point of the first qualifying contact
    pub position: Vec3,
    /// Impact speed along the contact normal (m/s)
    pub impact_speed: f32,
}

/// Manages the ball's rigid body across carry, flight, and rest.
pub struct BallSystem {
    body: BodyHandle,
    release_time: Option<f64>,
    landing_signaled: bool,
}

impl BallSystem {
    /// Register the ball body in `world` and return the system.
    pub fn new(world: &mut PhysicsWorld, config: &ThrowConfig, position: Vec3) -> Self {
        let mut body = RigidBody::sphere(position, config.ball_radius, config.ball_mass);
        body.linear_damping = config.held_damping;
        body.angular_damping = config.held_damping;
        body.material = BodyMaterial {
            friction: config.ground_friction,
            restitution: config.ground_restitution,
        };
        let body = world.add_body(body);
        Self {
            body,
            release_time: None,
            landing_signaled: false,
        }
    }

    /// Current ball position.
    pub fn position(&self, world: &PhysicsWorld) -> Vec3 {
        world.body(self.body).position
    }

    /// Read access to the ball's body.
    pub fn body<'a>(&self, world: &'a PhysicsWorld) -> &'a RigidBody {
        world.body(self.body)
    }

    /// When the current flight started, if the ball is mid-throw.
    pub fn release_time(&self) -> Option<f64> {
        self.release_time
    }

    /// Carry the ball: pose-driven, parked just above the hand, no motion.
    ///
    /// Called every frame while held - the ball follows the hand through
    /// this method and nothing else.
    pub fn attach_to_hand(&mut self, world: &mut PhysicsWorld, config: &ThrowConfig, hand: Vec3) {
        let body = world.body_mut(self.body);
        body.mode = BodyMode::PoseDriven;
        body.set_pose(hand + Vec3::new(0.0, config.hold_offset, 0.0));
        body.linear_damping = config.held_damping;
        body.angular_damping = config.held_damping;
        self.release_time = None;
        self.landing_signaled = false;
    }

    /// Launch the ball from `origin` with `velocity` at simulation time
    /// `now`.
    ///
    /// The body is snapped to the release point so the simulated flight
    /// starts exactly where the analytic arc does, and damping is cleared
    /// so it stays on that parabola until contact.
    pub fn release_with_velocity(
        &mut self,
        world: &mut PhysicsWorld,
        origin: Vec3,
        velocity: Vec3,
        now: f64,
    ) {
        let body = world.body_mut(self.body);
        body.mode = BodyMode::Simulated;
        body.position = origin;
        body.velocity = velocity;
        body.angular_velocity = Vec3::ZERO;
        body.linear_damping = 0.0;
        body.angular_damping = 0.0;
        self.release_time = Some(now);
        self.landing_signaled = false;
        log::debug!("ball released with velocity {velocity:?}");
    }

    /// Let go of the ball without a throw: simulated, small forward nudge,
    /// carry damping kept. Not a release - no landing will be signaled.
    pub fn drop_with_nudge(&mut self, world: &mut PhysicsWorld, nudge: Vec3) {
        let body = world.body_mut(self.body);
        body.mode = BodyMode::Simulated;
        body.velocity = Vec3::new(nudge.x, 0.0, nudge.z);
        self.release_time = None;
        self.landing_signaled = false;
        log::debug!("ball dropped with nudge {nudge:?}");
    }

    /// Step the simulation and return the landing, if this frame produced
    /// the first qualifying contact since the release.
    ///
    /// Contacts are consumed strictly after the world's step returns. Every
    /// qualifying contact damps the ball's velocity; only the first one
    /// after a release counts as the landing.
    pub fn advance(&mut self, world: &mut PhysicsWorld, config: &ThrowConfig, wall_delta: f32) -> Option<LandingSignal> {
        let contacts: Vec<_> = world
            .step(
                config.fixed_physics_step,
                wall_delta,
                config.max_physics_substeps,
            )
            .to_vec();

        let mut landing = None;
        for contact in contacts {
            if contact.body != self.body || contact.impact_speed <= config.contact_speed_threshold {
                continue;
            }

            let body = world.body_mut(self.body);
            body.velocity *= config.bounce_damping;

            if self.release_time.is_some() && !self.landing_signaled {
                self.landing_signaled = true;
                landing = Some(LandingSignal {
                    position: contact.position,
                    impact_speed: contact.impact_speed,
                });
            }
        }

        landing
    }

    /// Park the ball at `position` and stop it (analytic fallback landing).
    pub fn settle_at(&mut self, world: &mut PhysicsWorld, config: &ThrowConfig, position: Vec3) {
        let body = world.body_mut(self.body);
        body.position = Vec3::new(position.x, config.ball_radius, position.z);
        body.velocity = Vec3::ZERO;
        body.angular_velocity = Vec3::ZERO;
        self.landing_signaled = true;
    }
}
