//! Throw Configuration
//!
//! Centralized tuning for the throw simulation. `Default` returns the
//! canonical values; a JSON file can override them for experiments
//! (different planets get different gravity, for one).

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error produced when loading or saving a config file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config file I/O error: {err}"),
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Central configuration for the throw simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrowConfig {
    /// Gravity magnitude (m/s²)
    pub gravity: f32,
    /// Minimum throw force (m/s)
    pub force_min: f32,
    /// Maximum throw force (m/s)
    pub force_max: f32,
    /// Force change per adjust command (m/s)
    pub force_step: f32,
    /// Minimum launch angle (radians)
    pub angle_min: f32,
    /// Maximum launch angle (radians)
    pub angle_max: f32,
    /// Angle change per adjust command (radians)
    pub angle_step: f32,
    /// Starting throw force (m/s)
    pub initial_force: f32,
    /// Starting launch angle (radians)
    pub initial_angle: f32,

    /// Ball mass (kg)
    pub ball_mass: f32,
    /// Ball radius (meters)
    pub ball_radius: f32,
    /// Vertical offset above the hand anchor while held (meters)
    pub hold_offset: f32,
    /// Height above the character's feet the ball is released from (meters)
    pub release_height: f32,
    /// Forward speed given to a dropped (not thrown) ball (m/s)
    pub drop_nudge_speed: f32,
    /// Linear/angular damping applied while the ball is held or dropped
    pub held_damping: f32,

    /// Fixed physics substep (seconds)
    pub fixed_physics_step: f32,
    /// Maximum physics substeps per frame
    pub max_physics_substeps: u32,
    /// Minimum impact speed along the normal that counts as a landing (m/s)
    pub contact_speed_threshold: f32,
    /// Velocity scale applied on each qualifying ground contact
    pub bounce_damping: f32,
    /// Fraction of tangential speed lost to ground friction per contact
    pub ground_friction: f32,
    /// Fraction of normal speed retained per bounce
    pub ground_restitution: f32,

    /// Seconds after landing before the ball returns to the hand on its own
    pub grace_delay: f32,
    /// Character walk speed (m/s)
    pub move_speed: f32,
}

impl Default for ThrowConfig {
    fn default() -> Self {
        Self {
            gravity: 9.82,
            force_min: 1.0,
            force_max: 50.0,
            force_step: 1.0,
            angle_min: 0.05,
            angle_max: std::f32::consts::FRAC_PI_2,
            angle_step: 0.05,
            initial_force: 15.0,
            initial_angle: std::f32::consts::FRAC_PI_4,

            ball_mass: 2.0,
            ball_radius: 0.5,
            hold_offset: 0.2,
            release_height: 1.5,
            drop_nudge_speed: 2.0,
            held_damping: 0.3,

            fixed_physics_step: 1.0 / 60.0,
            max_physics_substeps: 3,
            contact_speed_threshold: 1.0,
            bounce_damping: 0.8,
            ground_friction: 0.3,
            ground_restitution: 0.6,

            grace_delay: 2.0,
            move_speed: 5.0,
        }
    }
}

impl ThrowConfig {
    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Save this config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Clamp a force value to the configured bounds.
    pub fn clamp_force(&self, force: f32) -> f32 {
        force.clamp(self.force_min, self.force_max)
    }

    /// Clamp an angle value to the configured bounds.
    pub fn clamp_angle(&self, angle: f32) -> f32 {
        angle.clamp(self.angle_min, self.angle_max)
    }
}
