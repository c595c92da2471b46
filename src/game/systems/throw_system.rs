//! Throw state machine.
//!
//! The authoritative ball lifecycle: exactly one of Held / Aiming /
//! Thrown / Landed at all times, with explicit transition functions
//! instead of scattered boolean flags. Aim parameters (force, angle)
//! live here while mutable and are frozen into a [`ThrowParameters`]
//! snapshot at the instant of release; nothing can change a flight
//! already underway.

use glam::Vec3;

use crate::game::config::ThrowConfig;
use crate::physics::trajectory::ThrowParameters;

/// Lifecycle phase of the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallPhase {
    /// Carried by the character, following the hand
    #[default]
    Held,
    /// Carried and actively aimed (pointer held)
    Aiming,
    /// In simulated flight
    Thrown,
    /// On the ground after a flight or a drop
    Landed,
}

impl BallPhase {
    /// Overlay label for this phase.
    pub fn label(self) -> &'static str {
        match self {
            BallPhase::Thrown => "in flight",
            BallPhase::Aiming => "aiming",
            BallPhase::Held | BallPhase::Landed => "ready",
        }
    }

    /// Whether the character is carrying the ball.
    pub fn is_holding(self) -> bool {
        matches!(self, BallPhase::Held | BallPhase::Aiming)
    }
}

/// State machine driving the throw lifecycle.
///
/// Rejected transitions (throw while already thrown, pickup while in
/// flight, aim edits mid-flight) are no-ops logged at debug level -
/// they are user timing, not errors.
pub struct ThrowSystem {
    phase: BallPhase,
    force: f32,
    angle: f32,
    snapshot: Option<ThrowParameters>,
    auto_pickup_at: Option<f64>,
}

impl ThrowSystem {
    pub fn new(config: &ThrowConfig) -> Self {
        Self {
            phase: BallPhase::Held,
            force: config.clamp_force(config.initial_force),
            angle: config.clamp_angle(config.initial_angle),
            snapshot: None,
            auto_pickup_at: None,
        }
    }

    pub fn phase(&self) -> BallPhase {
        self.phase
    }

    /// Current aim force (m/s).
    pub fn force(&self) -> f32 {
        self.force
    }

    /// Current aim angle (radians).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Parameters of the most recent throw, if any.
    pub fn snapshot(&self) -> Option<&ThrowParameters> {
        self.snapshot.as_ref()
    }

    /// Change the aim force. Clamped; ignored unless the ball is held.
    pub fn adjust_force(&mut self, config: &ThrowConfig, delta: f32) -> bool {
        if !self.phase.is_holding() {
            log::debug!("force edit ignored while {:?}", self.phase);
            return false;
        }
        self.force = config.clamp_force(self.force + delta);
        true
    }

    /// Change the aim angle. Clamped; ignored unless the ball is held.
    pub fn adjust_angle(&mut self, config: &ThrowConfig, delta: f32) -> bool {
        if !self.phase.is_holding() {
            log::debug!("angle edit ignored while {:?}", self.phase);
            return false;
        }
        self.angle = config.clamp_angle(self.angle + delta);
        true
    }

    /// Held → Aiming. The preview keeps running; only the flag flips.
    pub fn begin_aim(&mut self) -> bool {
        if self.phase != BallPhase::Held {
            log::debug!("begin aim ignored while {:?}", self.phase);
            return false;
        }
        self.phase = BallPhase::Aiming;
        true
    }

    /// Aiming → Held without throwing.
    pub fn stop_aim(&mut self) -> bool {
        if self.phase != BallPhase::Aiming {
            return false;
        }
        self.phase = BallPhase::Held;
        true
    }

    /// Held/Aiming → Thrown: freeze the aim into a snapshot.
    ///
    /// Returns the frozen parameters, or `None` if the ball is not in
    /// hand (already thrown, or waiting on the ground).
    pub fn try_throw(&mut self, origin: Vec3, direction: Vec3, now: f64) -> Option<ThrowParameters> {
        if !self.phase.is_holding() {
            log::debug!("throw rejected while {:?}", self.phase);
            return None;
        }
        let params = ThrowParameters::new(self.force, self.angle, direction, origin, now);
        self.snapshot = Some(params);
        self.phase = BallPhase::Thrown;
        self.auto_pickup_at = None;
        log::info!(
            "throw: force {:.1} m/s, angle {:.1}°",
            params.force,
            params.angle.to_degrees()
        );
        Some(params)
    }

    /// Held/Aiming → Landed via a drop: the ball is let go without a
    /// throw, so there is no snapshot and no automatic pickup.
    pub fn mark_dropped(&mut self) -> bool {
        if !self.phase.is_holding() {
            return false;
        }
        self.phase = BallPhase::Landed;
        self.auto_pickup_at = None;
        true
    }

    /// Thrown → Landed. Schedules the automatic pickup `grace_delay`
    /// seconds from `now`.
    pub fn mark_landed(&mut self, now: f64, grace_delay: f32) -> bool {
        if self.phase != BallPhase::Thrown {
            log::debug!("landing ignored while {:?}", self.phase);
            return false;
        }
        self.phase = BallPhase::Landed;
        self.auto_pickup_at = Some(now + grace_delay as f64);
        true
    }

    /// Landed → Held. A pickup while already holding is a no-op; a
    /// pickup while the ball is in flight is rejected.
    pub fn try_pickup(&mut self) -> bool {
        match self.phase {
            BallPhase::Landed => {
                self.phase = BallPhase::Held;
                self.auto_pickup_at = None;
                true
            }
            BallPhase::Held | BallPhase::Aiming => false,
            BallPhase::Thrown => {
                log::debug!("pickup rejected while in flight");
                false
            }
        }
    }

    /// Deferred pickup callback: fires at most once, and only if the
    /// ball is still on the ground when the deadline passes. A manual
    /// pickup in the meantime leaves nothing for this to do.
    pub fn poll_auto_pickup(&mut self, now: f64) -> bool {
        match self.auto_pickup_at {
            Some(deadline) if now >= deadline => {
                self.auto_pickup_at = None;
                if self.phase == BallPhase::Landed {
                    self.phase = BallPhase::Held;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}
