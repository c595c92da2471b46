//! Physics module for the Planet Toss engine
//!
//! Custom physics implementation for the throw simulation. Built from
//! scratch without external physics library dependencies (no Rapier).
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Mass in kg
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec3, Quat) re-exported from glam
//! - [`trajectory`] - Analytic projectile preview and closed-form flight statistics
//! - [`rigid_body`] - The ball rigid body: pose-driven vs. simulated modes
//! - [`world`] - Ground-plane world with fixed-substep stepping and contact events

pub mod rigid_body;
pub mod trajectory;
pub mod types;
pub mod world;

// Re-export commonly used types at the physics module level
pub use rigid_body::{BodyMaterial, BodyMode, RigidBody};
pub use trajectory::{
    LandingEstimate, ThrowParameters, TrajectoryPrediction, ideal_flight_time, ideal_max_height,
    ideal_range, predict,
};
pub use types::{Quat, Vec3};
pub use world::{BodyHandle, ContactEvent, PhysicsWorld};
