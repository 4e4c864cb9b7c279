use flywheel_ballistics::core::ballistics::flywheel_angular_velocity;
use flywheel_ballistics::core::{PhysicalConfig, ShotGeometry, ShotTracker, solve};

#[test]
fn low_arc_shot_is_solvable() {
    let config = PhysicalConfig::default();
    let solution = solve(&ShotGeometry::from_feet(12.0, 2.5, 6.5, 6.17), &config);
    let r = solution.result;

    assert!(r.is_finite());
    assert!(r.rpm > 0.0);
    assert!(r.launch_angle_deg >= config.min_launch_angle_deg);
    assert!(r.launch_angle_deg <= config.max_launch_angle_deg);
    assert!(r.total_time > r.ascent_time);
    assert!(r.total_time > r.descent_time);
}

#[test]
fn fit_and_apex_agree_across_distances() {
    let config = PhysicalConfig::default();
    for distance_ft in [5.0, 8.0, 11.0, 14.0, 17.0, 20.0] {
        let solution = solve(
            &ShotGeometry::from_feet(distance_ft, 2.5, 9.2, 80.0 / 12.0),
            &config,
        );
        let (_, vertex_y) = solution.fit.vertex();
        let fitted_apex = vertex_y + config.launch_height;
        assert!(
            (fitted_apex - solution.result.apex_height).abs() < 1e-9,
            "distance {distance_ft}: fit {fitted_apex} vs apex {}",
            solution.result.apex_height
        );
    }
}

#[test]
fn bigger_flywheel_radius_lowers_angular_rate() {
    let base = PhysicalConfig::default();
    let solution = solve(&ShotGeometry::from_feet(12.0, 2.5, 9.2, 80.0 / 12.0), &base);
    let exit_speed = solution.result.exit_velocity;

    let mut wider = base;
    wider.set_physical_properties(base.flywheel_mass, base.flywheel_radius + 0.01, 33.3, 60.0);

    assert!(
        flywheel_angular_velocity(exit_speed, &wider)
            < flywheel_angular_velocity(exit_speed, &base)
    );
}

#[test]
fn tracker_zero_offset_uses_minimum() {
    let mut tracker = ShotTracker::default();
    let geometry = ShotGeometry::from_feet(12.0, 0.0, 9.2, 80.0 / 12.0);
    let rpm = tracker.solve(
        geometry.floor_distance,
        geometry.target_offset,
        geometry.height_above_reference,
        geometry.target_height,
    );

    assert!(rpm.is_finite());
    assert_eq!(tracker.geometry().target_offset, 0.001);
}
