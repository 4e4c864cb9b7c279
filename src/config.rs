//! TOML configuration for the solver binaries.
//!
//! ```toml
//! [physical]
//! flywheel_mass = 1.27      # kg
//! flywheel_radius = 0.0508  # m
//! min_launch_angle_deg = 33.3
//! max_launch_angle_deg = 60.0
//! clamp_angle = true
//!
//! [shot]
//! target_offset_ft = 2.5
//! height_above_reference_ft = 9.2
//! target_height_ft = 6.67
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::geometry::{
    DEFAULT_HEIGHT_ABOVE_REFERENCE_M, DEFAULT_TARGET_HEIGHT_M, DEFAULT_TARGET_OFFSET_M,
};
use crate::core::physics::{PhysicalConfig, meters_to_feet};
use crate::core::ShotGeometry;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Shot defaults in feet, used when a request leaves them out.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShotDefaults {
    pub target_offset_ft: f64,
    pub height_above_reference_ft: f64,
    pub target_height_ft: f64,
}

impl Default for ShotDefaults {
    fn default() -> Self {
        Self {
            target_offset_ft: meters_to_feet(DEFAULT_TARGET_OFFSET_M),
            height_above_reference_ft: meters_to_feet(DEFAULT_HEIGHT_ABOVE_REFERENCE_M),
            target_height_ft: meters_to_feet(DEFAULT_TARGET_HEIGHT_M),
        }
    }
}

impl ShotDefaults {
    pub fn geometry(&self, floor_distance_ft: f64) -> ShotGeometry {
        ShotGeometry::from_feet(
            floor_distance_ft,
            self.target_offset_ft,
            self.height_above_reference_ft,
            self.target_height_ft,
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub physical: PhysicalConfig,
    pub shot: ShotDefaults,
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<SolverConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    from_toml_str(&contents)
}

pub fn from_toml_str(contents: &str) -> Result<SolverConfig, ConfigError> {
    let config: SolverConfig = toml::from_str(contents)?;
    validate(&config.physical)?;
    Ok(config)
}

/// Rejects physical properties that have no meaning. Shot geometry is never
/// checked here; degenerate shots are the solver's business.
fn validate(physical: &PhysicalConfig) -> Result<(), ConfigError> {
    let positive = [
        ("gravity", physical.gravity),
        ("projectile_mass", physical.projectile_mass),
        ("projectile_radius", physical.projectile_radius),
        ("projectile_inertia_fraction", physical.projectile_inertia_fraction),
        ("flywheel_mass", physical.flywheel_mass),
        ("flywheel_radius", physical.flywheel_radius),
        ("flywheel_inertia_fraction", physical.flywheel_inertia_fraction),
    ];
    for (name, value) in positive {
        if !(value.is_finite() && value > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{name} must be a positive number, got {value}"
            )));
        }
    }
    Ok(())
}
