//! Config Module
//!
//! Centralized configuration for throw mechanics and physics tuning.

pub mod throw_config;

pub use throw_config::{ConfigError, ThrowConfig};
