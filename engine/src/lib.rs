//! Planet Toss Engine Library
//!
//! Core simulation infrastructure for the interactive projectile-throw
//! environment: analytic trajectory prediction and the stepped rigid-body
//! world the thrown ball flies in. Presentation (rendering, windowing,
//! overlay styling) lives outside this crate behind the collaborator
//! traits in [`game::render`] and [`game::ui`].
//!
//! # Modules
//!
//! - [`physics`] - Trajectory prediction, the ball rigid body, and the
//!   ground-plane physics world with fixed-substep stepping
//! - [`game`] - Game-level systems: throw state machine, ball bridge,
//!   character, flight records, per-frame scene driver
//!
//! # Example
//!
//! ```ignore
//! use planet_toss_engine::game::config::ThrowConfig;
//! use planet_toss_engine::game::input::{MovementState, ThrowCommand};
//! use planet_toss_engine::game::render::NullSink;
//! use planet_toss_engine::game::scenes::ThrowScene;
//! use planet_toss_engine::game::ui::ConsolePanel;
//! use glam::Vec3;
//!
//! let mut scene = ThrowScene::new(ThrowConfig::default());
//! let mut sink = NullSink;
//! let mut panel = ConsolePanel::new();
//!
//! // Aim and throw, one frame per update call
//! scene.update(
//!     1.0 / 60.0,
//!     &[ThrowCommand::BeginAim, ThrowCommand::Release],
//!     &MovementState::default(),
//!     Vec3::NEG_Z,
//!     &mut sink,
//!     &mut panel,
//! );
//! ```

pub mod physics;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used physics types at crate level for convenience
pub use physics::{
    BodyMode, ContactEvent, PhysicsWorld, RigidBody, ThrowParameters, TrajectoryPrediction,
};
// Re-export the scene driver and its command vocabulary
pub use game::input::{MovementState, ThrowCommand};
pub use game::scenes::ThrowScene;
