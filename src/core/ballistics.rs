use tracing::debug;

use crate::core::geometry::{ShotGeometry, TrajectoryFit, apex_height};
use crate::core::physics::{PhysicalConfig, rad_per_s_to_rpm};

/// Everything derived for one shot. Times in seconds, heights in metres,
/// velocities in m/s, angles in degrees, angular velocity in rad/s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SolveResult {
    pub ascent_time: f64,
    pub descent_time: f64,
    pub total_time: f64,
    pub apex_height: f64,
    pub horizontal_velocity: f64,
    pub vertical_velocity: f64,
    pub exit_velocity: f64,
    pub unclamped_launch_angle_deg: f64,
    pub launch_angle_deg: f64,
    pub landing_angle_deg: f64,
    pub angular_velocity: f64,
    pub rpm: f64,
}

impl SolveResult {
    pub fn is_finite(&self) -> bool {
        [
            self.total_time,
            self.exit_velocity,
            self.launch_angle_deg,
            self.landing_angle_deg,
            self.angular_velocity,
            self.rpm,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// `geometry` is the one actually solved, after the zero-offset guard.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShotSolution {
    pub geometry: ShotGeometry,
    pub fit: TrajectoryFit,
    pub result: SolveResult,
}

pub fn flight_times(
    apex_height: f64,
    launch_height: f64,
    target_height: f64,
    gravity: f64,
) -> (f64, f64) {
    let ascent = (2.0 * (apex_height - launch_height) / gravity).sqrt();
    let descent = (2.0 * (apex_height - target_height) / gravity).sqrt();
    (ascent, descent)
}

/// Signed arrival angle in radians; negative while descending.
pub fn landing_angle(
    vertical_velocity: f64,
    horizontal_velocity: f64,
    total_time: f64,
    gravity: f64,
) -> f64 {
    let vy_final = vertical_velocity - gravity * total_time;
    let vx_final = horizontal_velocity;
    (vy_final / vx_final).atan()
}

pub fn vertical_velocity(apex_height: f64, launch_height: f64, gravity: f64) -> f64 {
    (2.0 * gravity * (apex_height - launch_height)).sqrt()
}

pub fn clamp_launch_angle(angle_deg: f64, config: &PhysicalConfig) -> f64 {
    if config.clamp_active() {
        angle_deg.clamp(config.min_launch_angle_deg, config.max_launch_angle_deg)
    } else {
        angle_deg
    }
}

/// Exit speed that carries the projectile `distance` forward and `rise` up
/// when launched at `angle_rad`.
pub fn exit_speed_for_angle(distance: f64, rise: f64, angle_rad: f64, gravity: f64) -> f64 {
    (gravity * distance * distance / (2.0 * (distance * angle_rad.tan() - rise))).sqrt()
        / angle_rad.cos()
}

pub fn flywheel_angular_velocity(exit_speed: f64, config: &PhysicalConfig) -> f64 {
    let transfer = 2.0
        + (config.projectile_inertia_fraction + 1.0)
            / (config.flywheel_inertia_fraction * config.mass_ratio());
    exit_speed / config.flywheel_radius * transfer
}

/// Runs the whole pipeline for one request.
///
/// Nothing is validated apart from the zero-offset substitution; degenerate
/// geometry shows up as NaN or infinity in the result.
pub fn solve(geometry: &ShotGeometry, config: &PhysicalConfig) -> ShotSolution {
    let geometry = geometry.guarded();
    let g = config.gravity;
    let launch_height = config.launch_height;

    let fit = TrajectoryFit::through(&geometry, launch_height);

    let apex = apex_height(&geometry, launch_height);
    let (ascent_time, descent_time) = flight_times(apex, launch_height, geometry.target_height, g);
    let total_time = ascent_time + descent_time;

    let distance = geometry.total_distance();
    let vy = vertical_velocity(apex, launch_height, g);
    let vx = distance / total_time;

    let unclamped_launch_angle_deg = (vy / vx).atan().to_degrees();
    let launch_angle_deg = clamp_launch_angle(unclamped_launch_angle_deg, config);

    // The clamp may have moved the angle away from (vx, vy), so the speed is
    // solved again for the angle actually used.
    let rise = geometry.target_height - launch_height;
    let exit_velocity = exit_speed_for_angle(distance, rise, launch_angle_deg.to_radians(), g);

    let landing_angle_deg = landing_angle(vy, vx, total_time, g).to_degrees();
    debug!(landing_angle_deg, "landing angle");

    let angular_velocity = flywheel_angular_velocity(exit_velocity, config);

    ShotSolution {
        geometry,
        fit,
        result: SolveResult {
            ascent_time,
            descent_time,
            total_time,
            apex_height: apex,
            horizontal_velocity: vx,
            vertical_velocity: vy,
            exit_velocity,
            unclamped_launch_angle_deg,
            launch_angle_deg,
            landing_angle_deg,
            angular_velocity,
            rpm: rad_per_s_to_rpm(angular_velocity),
        },
    }
}
