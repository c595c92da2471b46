//! Trajectory Tests - Discretized Sampling vs. Closed Form
//!
//! The sampled preview walks the ideal parabola in 0.1s steps, so its
//! landing statistics may differ from the closed-form values by at most
//! one step's worth of motion. These tests pin that bound across the
//! whole force/angle domain and check the canonical worked example.

use glam::Vec3;
use planet_toss_engine::physics::trajectory::{
    SAMPLE_MAX_TIME, SAMPLE_TIME_STEP, ThrowParameters, ideal_flight_time, ideal_max_height,
    ideal_range, predict,
};
use proptest::prelude::*;

const G: f32 = 9.82;

fn level_throw(force: f32, angle: f32) -> ThrowParameters {
    ThrowParameters::new(force, angle, Vec3::NEG_Z, Vec3::ZERO, 0.0)
}

// ============================================================================
// Concrete scenario: force 15 m/s at 45°
// ============================================================================

#[test]
fn test_worked_example_closed_form() {
    let angle = std::f32::consts::FRAC_PI_4;
    // vx = vy ≈ 10.607 m/s
    assert!((ideal_range(15.0, angle, G) - 22.88).abs() < 0.05);
    assert!((ideal_max_height(15.0, angle, G) - 5.73).abs() < 0.05);
    assert!((ideal_flight_time(15.0, angle, G) - 2.16).abs() < 0.05);
}

#[test]
fn test_worked_example_sampled() {
    let angle = std::f32::consts::FRAC_PI_4;
    let prediction = predict(&level_throw(15.0, angle), G);
    let landing = prediction.landing.expect("lands inside the horizon");

    // Sampled time lands on the next 0.1s boundary after the ideal 2.16s
    assert!((landing.flight_time - 2.2).abs() < 1e-4);
    assert!((landing.range - ideal_range(15.0, angle, G)).abs() < 15.0 * SAMPLE_TIME_STEP);
    assert!((landing.max_height - 5.73).abs() < 0.05);
}

// ============================================================================
// Property: discretization error is bounded by one sample step
// ============================================================================

proptest! {
    #[test]
    fn prop_sampled_stats_match_closed_form(
        force in 1.0f32..50.0,
        angle in 0.05f32..(std::f32::consts::FRAC_PI_2 - 0.05),
    ) {
        // Keep to throws that land inside the sampling horizon
        prop_assume!(ideal_flight_time(force, angle, G) < SAMPLE_MAX_TIME - SAMPLE_TIME_STEP);

        let prediction = predict(&level_throw(force, angle), G);
        let landing = prediction.landing.expect("complete prediction");

        let ideal_t = ideal_flight_time(force, angle, G);
        let ideal_r = ideal_range(force, angle, G);
        let ideal_h = ideal_max_height(force, angle, G);

        // The terminal sample is the first step at or past the ideal
        // landing time
        prop_assert!(landing.flight_time >= ideal_t - 1e-3);
        prop_assert!(landing.flight_time <= ideal_t + SAMPLE_TIME_STEP + 1e-3);

        // One step of horizontal travel bounds the range error
        let range_bound = force * SAMPLE_TIME_STEP + 1e-2;
        prop_assert!(
            (landing.range - ideal_r).abs() <= range_bound,
            "range {} vs ideal {} (bound {})",
            landing.range, ideal_r, range_bound
        );

        // The sampled peak can miss the true apex by at most half a step:
        // g·(Δt/2)²/2 ≈ 0.013m
        prop_assert!(landing.max_height <= ideal_h + 1e-3);
        prop_assert!(landing.max_height >= ideal_h - 0.05);
    }

    #[test]
    fn prop_samples_are_airborne_and_ordered(
        force in 1.0f32..50.0,
        angle in 0.05f32..(std::f32::consts::FRAC_PI_2 - 0.05),
    ) {
        let origin = Vec3::new(0.0, 1.5, 0.0);
        let params = ThrowParameters::new(force, angle, Vec3::X, origin, 0.0);
        let prediction = predict(&params, G);

        // Every preview point is above ground (only the terminal sample
        // may dip below, and it is excluded)
        for point in &prediction.samples {
            prop_assert!(point.y > 0.0 || *point == origin);
        }

        // Horizontal progress is monotonic along +X
        for pair in prediction.samples.windows(2) {
            prop_assert!(pair[1].x >= pair[0].x);
        }
    }
}

// ============================================================================
// Horizon and edge behavior
// ============================================================================

#[test]
fn test_high_throw_is_incomplete_not_an_error() {
    // 50 m/s nearly straight up stays airborne past the 5s horizon
    let prediction = predict(&level_throw(50.0, 1.5), G);
    assert!(prediction.landing.is_none());
    assert!(!prediction.samples.is_empty());
    assert!(!prediction.is_complete());
}

#[test]
fn test_flat_throw_from_height_lands_after_first_step() {
    let params = ThrowParameters::new(10.0, 0.0, Vec3::X, Vec3::new(0.0, 1.5, 0.0), 0.0);
    let prediction = predict(&params, G);
    let landing = prediction.landing.expect("drops to the ground");
    assert!(landing.flight_time >= SAMPLE_TIME_STEP);
}

#[test]
fn test_recompute_replaces_samples() {
    let strong = predict(&level_throw(30.0, 0.8), G);
    let weak = predict(&level_throw(5.0, 0.8), G);
    // A weaker throw has strictly fewer airborne samples, not a merge of both
    assert!(weak.samples.len() < strong.samples.len());
}
