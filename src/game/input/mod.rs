//! Input Module
//!
//! Discrete command layer for decoupled input handling. The simulation
//! consumes [`ThrowCommand`] values and a [`MovementState`]; how they are
//! produced (keyboard, pointer, script) is up to the caller.

pub mod actions;
pub mod keyboard;

pub use actions::{MovementState, ThrowCommand};
pub use keyboard::{apply_movement_key, map_key_to_command, map_pointer_button};
