use serde::Deserialize;

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;

pub const METERS_PER_FOOT: f64 = 0.3048;
pub const METERS_PER_INCH: f64 = 0.0254;
pub const KILOGRAMS_PER_POUND: f64 = 0.453_592_37;
pub const KILOGRAMS_PER_OUNCE: f64 = 0.028_349_523_125;

/// Shooter launch point height above the floor (3 ft).
pub const DEFAULT_LAUNCH_HEIGHT_M: f64 = 3.0 * METERS_PER_FOOT;

pub const DEFAULT_FLYWHEEL_MASS_KG: f64 = 2.8 * KILOGRAMS_PER_POUND;
pub const DEFAULT_FLYWHEEL_RADIUS_M: f64 = 2.0 * METERS_PER_INCH;
pub const SOLID_CYLINDER_INERTIA_FRACTION: f64 = 1.0 / 2.0;

pub const DEFAULT_PROJECTILE_MASS_KG: f64 = 9.5 * KILOGRAMS_PER_OUNCE;
pub const DEFAULT_PROJECTILE_RADIUS_M: f64 = 4.75 * METERS_PER_INCH;
pub const HOLLOW_SPHERE_INERTIA_FRACTION: f64 = 2.0 / 3.0;

pub const DEFAULT_MIN_LAUNCH_ANGLE_DEG: f64 = 33.3;
pub const DEFAULT_MAX_LAUNCH_ANGLE_DEG: f64 = 60.0;

pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

pub fn rad_per_s_to_rpm(rad_per_s: f64) -> f64 {
    rad_per_s * 60.0 / std::f64::consts::TAU
}

/// Physical properties of the shooter, flywheel and projectile.
///
/// Lengths are metres, masses kilograms. The launch-angle bounds are kept in
/// degrees because that is how the mechanism's range of motion is measured.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicalConfig {
    pub gravity: f64,
    pub projectile_mass: f64,
    pub projectile_radius: f64,
    pub projectile_inertia_fraction: f64,
    pub flywheel_mass: f64,
    pub flywheel_radius: f64,
    pub flywheel_inertia_fraction: f64,
    pub launch_height: f64,
    pub min_launch_angle_deg: f64,
    pub max_launch_angle_deg: f64,
    pub clamp_angle: bool,
}

impl Default for PhysicalConfig {
    fn default() -> Self {
        Self {
            gravity: EARTH_GRAVITY_MPS2,
            projectile_mass: DEFAULT_PROJECTILE_MASS_KG,
            projectile_radius: DEFAULT_PROJECTILE_RADIUS_M,
            projectile_inertia_fraction: HOLLOW_SPHERE_INERTIA_FRACTION,
            flywheel_mass: DEFAULT_FLYWHEEL_MASS_KG,
            flywheel_radius: DEFAULT_FLYWHEEL_RADIUS_M,
            flywheel_inertia_fraction: SOLID_CYLINDER_INERTIA_FRACTION,
            launch_height: DEFAULT_LAUNCH_HEIGHT_M,
            min_launch_angle_deg: DEFAULT_MIN_LAUNCH_ANGLE_DEG,
            max_launch_angle_deg: DEFAULT_MAX_LAUNCH_ANGLE_DEG,
            clamp_angle: true,
        }
    }
}

impl PhysicalConfig {
    pub fn set_physical_properties(
        &mut self,
        flywheel_mass: f64,
        flywheel_radius: f64,
        min_angle_deg: f64,
        max_angle_deg: f64,
    ) {
        self.flywheel_mass = flywheel_mass;
        self.flywheel_radius = flywheel_radius;
        self.min_launch_angle_deg = min_angle_deg;
        self.max_launch_angle_deg = max_angle_deg;
    }

    pub fn mass_ratio(&self) -> f64 {
        self.flywheel_mass / self.projectile_mass
    }

    /// Clamping only applies when enabled and the bounds form a proper interval.
    pub fn clamp_active(&self) -> bool {
        self.clamp_angle && self.min_launch_angle_deg < self.max_launch_angle_deg
    }
}
