//! Game systems — self-contained modules that own state and logic.

pub mod ball_system;
pub mod throw_system;

pub use ball_system::{BallSystem, LandingSignal};
pub use throw_system::{BallPhase, ThrowSystem};
