//! Flight Data
//!
//! The combined analytic + measured statistics for one throw. Predicted
//! values are written continuously while aiming; the measured `range` and
//! `flight_time` are written exactly once when the ball lands. Measured
//! and predicted values are expected to diverge - the simulated flight
//! includes contact damping the ideal parabola does not - and both are
//! kept side by side for display.

use glam::Vec3;

/// Flight statistics for a single throw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightRecord {
    /// Launch speed (m/s)
    pub initial_velocity: f32,
    /// Launch angle (radians)
    pub angle: f32,
    /// While aiming: predicted range; after landing: measured range (meters)
    pub range: f32,
    /// Peak height above the release point (meters)
    pub max_height: f32,
    /// While aiming: predicted time; after landing: measured time (seconds)
    pub flight_time: f32,
    /// Sampled-trajectory landing range (meters); retained after landing
    pub theoretical_range: f32,
    /// Sampled-trajectory flight time (seconds); retained after landing
    pub theoretical_time: f32,
}

/// Fold a measured landing into `record`.
///
/// `range` becomes the horizontal distance from the throw origin to the
/// landing point and `flight_time` the elapsed time since release, both
/// taken as-is with no extra rounding. The theoretical fields keep their
/// pre-throw values.
pub fn reconcile(record: &mut FlightRecord, origin: Vec3, landing: Vec3, elapsed: f32) {
    let dx = landing.x - origin.x;
    let dz = landing.z - origin.z;
    record.range = (dx * dx + dz * dz).sqrt();
    record.flight_time = elapsed;
}
