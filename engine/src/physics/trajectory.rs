//! Analytic projectile trajectory prediction
//!
//! Closed-form sampling of ideal projectile motion, used for the aim-time
//! preview path and for the flight statistics shown next to the measured
//! results. No drag: the preview models the ideal parabola the thrown ball
//! is launched onto.
//!
//! # Example
//!
//! ```ignore
//! use planet_toss_engine::physics::trajectory::{ThrowParameters, predict};
//! use glam::Vec3;
//!
//! let params = ThrowParameters::new(
//!     15.0,
//!     std::f32::consts::FRAC_PI_4,
//!     Vec3::NEG_Z,
//!     Vec3::new(0.0, 1.5, 0.0),
//!     0.0,
//! );
//! let prediction = predict(&params, 9.82);
//! assert!(prediction.landing.is_some());
//! ```

use glam::Vec3;

/// Time between consecutive preview samples (seconds)
pub const SAMPLE_TIME_STEP: f32 = 0.1;
/// Prediction horizon: sampling stops after this much flight time (seconds)
pub const SAMPLE_MAX_TIME: f32 = 5.0;
/// Upper bound on samples per prediction (full horizon, inclusive endpoints)
pub const MAX_PREVIEW_SAMPLES: usize = (SAMPLE_MAX_TIME / SAMPLE_TIME_STEP) as usize + 1;

// Preview buffers are rebuilt every frame; keep the per-frame allocation small.
static_assertions::const_assert!(MAX_PREVIEW_SAMPLES <= 64);

/// Launch parameters for a single throw.
///
/// Captured from the live aim state at the instant of release and never
/// modified afterwards; aim edits made while the ball is in flight act on
/// the *next* throw, not this one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowParameters {
    /// Launch speed (m/s)
    pub force: f32,
    /// Launch elevation angle (radians above the horizontal)
    pub angle: f32,
    /// Horizontal aim direction (unit vector, y = 0)
    pub direction: Vec3,
    /// Release point in world space (meters)
    pub origin: Vec3,
    /// Simulation-clock timestamp of the release (seconds)
    pub start_time: f64,
}

impl ThrowParameters {
    /// Create parameters with the direction flattened onto the horizontal
    /// plane and normalized. A degenerate direction falls back to -Z.
    pub fn new(force: f32, angle: f32, direction: Vec3, origin: Vec3, start_time: f64) -> Self {
        let flat = Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero();
        let direction = if flat == Vec3::ZERO { Vec3::NEG_Z } else { flat };
        Self {
            force,
            angle,
            direction,
            origin,
            start_time,
        }
    }

    /// Decompose the launch speed into (horizontal, vertical) components.
    pub fn velocity_components(&self) -> (f32, f32) {
        (
            self.force * self.angle.cos(),
            self.force * self.angle.sin(),
        )
    }

    /// Initial world-space velocity vector of the throw.
    pub fn launch_velocity(&self) -> Vec3 {
        let (vx, vy) = self.velocity_components();
        Vec3::new(self.direction.x * vx, vy, self.direction.z * vx)
    }

    /// Ideal position `t` seconds after release (no drag, constant gravity).
    pub fn position_at(&self, t: f32, gravity: f32) -> Vec3 {
        let (vx, vy) = self.velocity_components();
        Vec3::new(
            self.origin.x + self.direction.x * vx * t,
            self.origin.y + vy * t - 0.5 * gravity * t * t,
            self.origin.z + self.direction.z * vx * t,
        )
    }
}

/// Landing statistics derived from a completed prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingEstimate {
    /// Ground point where the sampled path first reached height ≤ 0
    pub point: Vec3,
    /// Horizontal distance from the origin to the landing point (meters)
    pub range: f32,
    /// Peak height above the release point (meters)
    pub max_height: f32,
    /// Sampled flight time at the terminal sample (seconds)
    pub flight_time: f32,
}

/// A discretized preview of one throw's ideal flight path.
///
/// `samples` holds every airborne point up to (not including) the terminal
/// sample. `landing` is `None` when no sample within the horizon reached
/// the ground - an incomplete prediction, not an error.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryPrediction {
    pub samples: Vec<Vec3>,
    pub landing: Option<LandingEstimate>,
}

impl TrajectoryPrediction {
    /// Whether the sampled path reached the ground within the horizon.
    pub fn is_complete(&self) -> bool {
        self.landing.is_some()
    }
}

/// Sample the ideal flight path for `params` under `gravity`.
///
/// Walks `t = 0, Δt, 2Δt, …` up to [`SAMPLE_MAX_TIME`], tracking the
/// running peak height. Sampling stops at the first `t > 0` whose height
/// is ≤ 0; that sample becomes the landing estimate and is excluded from
/// the preview points. The `t > 0` guard keeps a zero-elevation throw
/// from a positive origin height from landing at the release instant.
///
/// Every call produces a fresh sample buffer; predictions are replaced
/// wholesale, never merged.
pub fn predict(params: &ThrowParameters, gravity: f32) -> TrajectoryPrediction {
    let mut samples = Vec::with_capacity(MAX_PREVIEW_SAMPLES);
    let mut max_y = params.origin.y;
    let mut landing = None;

    let mut step = 0usize;
    loop {
        let t = step as f32 * SAMPLE_TIME_STEP;
        if t > SAMPLE_MAX_TIME {
            break;
        }

        let point = params.position_at(t, gravity);
        max_y = max_y.max(point.y);

        if point.y <= 0.0 && t > 0.0 {
            let dx = point.x - params.origin.x;
            let dz = point.z - params.origin.z;
            landing = Some(LandingEstimate {
                point: Vec3::new(point.x, 0.0, point.z),
                range: (dx * dx + dz * dz).sqrt(),
                max_height: max_y - params.origin.y,
                flight_time: t,
            });
            break;
        }

        samples.push(point);
        step += 1;
    }

    TrajectoryPrediction { samples, landing }
}

/// Closed-form ideal range on flat ground: `f²·sin(2θ) / g`.
pub fn ideal_range(force: f32, angle: f32, gravity: f32) -> f32 {
    force * force * (2.0 * angle).sin() / gravity
}

/// Closed-form ideal peak height: `(f·sinθ)² / 2g`.
pub fn ideal_max_height(force: f32, angle: f32, gravity: f32) -> f32 {
    let vy = force * angle.sin();
    vy * vy / (2.0 * gravity)
}

/// Closed-form ideal flight time on flat ground: `2·f·sinθ / g`.
pub fn ideal_flight_time(force: f32, angle: f32, gravity: f32) -> f32 {
    2.0 * force * angle.sin() / gravity
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    const G: f32 = 9.82;

    fn level_params(force: f32, angle: f32) -> ThrowParameters {
        ThrowParameters::new(force, angle, Vec3::NEG_Z, Vec3::ZERO, 0.0)
    }

    #[test]
    fn test_direction_flattened_and_normalized() {
        let p = ThrowParameters::new(10.0, 0.5, Vec3::new(3.0, 7.0, 4.0), Vec3::ZERO, 0.0);
        assert!(p.direction.y.abs() < 1e-6);
        assert!((p.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_direction_falls_back() {
        let p = ThrowParameters::new(10.0, 0.5, Vec3::Y, Vec3::ZERO, 0.0);
        assert_eq!(p.direction, Vec3::NEG_Z);
    }

    #[test]
    fn test_launch_velocity_components() {
        let p = level_params(15.0, FRAC_PI_4);
        let v = p.launch_velocity();
        // 45°: horizontal and vertical speeds are equal
        assert!((v.y - 15.0 * FRAC_PI_4.sin()).abs() < 1e-4);
        let horizontal = Vec3::new(v.x, 0.0, v.z).length();
        assert!((horizontal - v.y).abs() < 1e-4);
    }

    #[test]
    fn test_prediction_lands_within_horizon() {
        let prediction = predict(&level_params(15.0, FRAC_PI_4), G);
        let landing = prediction.landing.expect("should land within 5s");
        assert!(landing.flight_time > 0.0);
        assert!(!prediction.samples.is_empty());
        // Preview points are all airborne
        for (i, point) in prediction.samples.iter().enumerate() {
            assert!(point.y >= 0.0 || i == 0, "sample {i} below ground");
        }
    }

    #[test]
    fn test_prediction_incomplete_beyond_horizon() {
        // Ideal flight time ≈ 10.1s, far beyond the 5s horizon
        let prediction = predict(&level_params(50.0, 1.5), G);
        assert!(prediction.landing.is_none());
        assert_eq!(prediction.samples.len(), MAX_PREVIEW_SAMPLES);
    }

    #[test]
    fn test_flat_throw_does_not_land_at_release() {
        // Zero elevation from shoulder height: first sample sits at the
        // origin with y > 0 and must not count as a landing.
        let p = ThrowParameters::new(10.0, 0.0, Vec3::NEG_Z, Vec3::new(0.0, 1.5, 0.0), 0.0);
        let prediction = predict(&p, G);
        let landing = prediction.landing.expect("falls to the ground");
        assert!(landing.flight_time >= SAMPLE_TIME_STEP);
        assert!(!prediction.samples.is_empty());
    }

    #[test]
    fn test_predictions_replaced_not_merged() {
        let p = level_params(15.0, FRAC_PI_4);
        let first = predict(&p, G);
        let second = predict(&p, G);
        assert_eq!(first.samples.len(), second.samples.len());
    }

    #[test]
    fn test_range_tracks_direction() {
        let east = ThrowParameters::new(15.0, FRAC_PI_4, Vec3::X, Vec3::ZERO, 0.0);
        let prediction = predict(&east, G);
        let landing = prediction.landing.unwrap();
        assert!(landing.point.x > 0.0);
        assert!(landing.point.z.abs() < 1e-4);
    }

    #[test]
    fn test_closed_form_concrete_values() {
        // force 15 m/s at 45°: vx = vy ≈ 10.607 m/s
        let range = ideal_range(15.0, FRAC_PI_4, G);
        let height = ideal_max_height(15.0, FRAC_PI_4, G);
        let time = ideal_flight_time(15.0, FRAC_PI_4, G);
        assert!((range - 22.88).abs() < 0.05, "range {range}");
        assert!((height - 5.73).abs() < 0.05, "height {height}");
        assert!((time - 2.16).abs() < 0.05, "time {time}");
    }

    #[test]
    fn test_max_height_relative_to_origin() {
        let elevated = ThrowParameters::new(15.0, FRAC_PI_4, Vec3::NEG_Z, Vec3::new(0.0, 1.5, 0.0), 0.0);
        let prediction = predict(&elevated, G);
        let landing = prediction.landing.unwrap();
        // Peak height is measured above the release point, not above ground
        assert!((landing.max_height - ideal_max_height(15.0, FRAC_PI_4, G)).abs() < 0.05);
    }
}
