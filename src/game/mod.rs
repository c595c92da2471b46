//! Game Module
//!
//! Contains game-specific systems that build on top of the engine.

pub mod camera;
pub mod character;
pub mod config;
pub mod flight;
pub mod input;
pub mod render;
pub mod scenes;
pub mod systems;
pub mod ui;

// Re-exports from the game modules
pub use camera::{CameraPose, frame_throw};
pub use character::{Character, HAND_HEIGHT};
pub use config::{ConfigError, ThrowConfig};
pub use flight::{FlightRecord, reconcile};
pub use input::{MovementState, ThrowCommand};
pub use render::{NullSink, RecordingSink, SceneSink};
pub use scenes::ThrowScene;
pub use systems::{BallPhase, BallSystem, LandingSignal, ThrowSystem};
pub use ui::{ConsolePanel, FlightDisplay, RecordingDisplay};
