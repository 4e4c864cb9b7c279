//! Text dumps and delimited log rows for solved shots.
//!
//! Lengths are reported in feet and angles in degrees whatever the solver
//! used internally. Column order is fixed so old logs stay comparable.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::physics::meters_to_feet;
use crate::core::{PhysicalConfig, ShotSolution};

const SWEEP_HEADER: &str = "Vision Dist to Center of Target [ft],Dist to Front of Target [ft],Dist from Front of Target [ft],heightAboveReference [ft],heightTarget [ft],Flywheel [rpm],launchAngle [deg],landingAngle [deg]";

/// Hood servo position for a launch angle, from the bench calibration fit.
pub fn hood_servo_position(angle_deg: f64) -> f64 {
    let x = angle_deg;
    -2.58 + 0.159 * x - 0.00298 * x * x + 0.0000216 * x * x * x
}

/// Multi-line dump of every intermediate and final value.
pub fn intermediate_results(solution: &ShotSolution, config: &PhysicalConfig) -> String {
    let g = &solution.geometry;
    let r = &solution.result;
    let rows: [(&str, f64, &str); 15] = [
        ("ascent_time", r.ascent_time, "s"),
        ("descent_time", r.descent_time, "s"),
        ("total_time", r.total_time, "s"),
        ("height_above_reference", meters_to_feet(g.height_above_reference), "ft"),
        ("launch_height", meters_to_feet(config.launch_height), "ft"),
        ("target_height", meters_to_feet(g.target_height), "ft"),
        ("apex_height", meters_to_feet(r.apex_height), "ft"),
        ("floor_distance", meters_to_feet(g.floor_distance), "ft"),
        ("target_offset", meters_to_feet(g.target_offset), "ft"),
        ("horizontal_velocity", r.horizontal_velocity, "mps"),
        ("vertical_velocity", r.vertical_velocity, "mps"),
        ("exit_velocity", r.exit_velocity, "mps"),
        ("launch_angle", r.launch_angle_deg, "deg"),
        ("angular_velocity", r.angular_velocity, "rad_per_s"),
        ("rpm", r.rpm, "rpm"),
    ];

    rows.iter()
        .map(|(name, value, unit)| format!("  {name} {value:.6} {unit}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header for [`csv_row`]. It embeds the crossing height and launch angle of
/// `solution` so a log records which tuning produced it.
pub fn csv_header(solution: &ShotSolution) -> String {
    let hah_ft = meters_to_feet(solution.geometry.height_above_reference);
    let angle = solution.result.launch_angle_deg;
    format!(
        "Dist to Front of Target [ft],Dist from Front of Target [ft],\
         Flywheel [rpm] HAH {hah_ft:.1},launchAngle [deg] HAH {angle:.1},\
         landingAngle [deg] HAH {hah_ft:.1},timeTotal [s],heightAboveReference [ft],\
         heightTarget [ft],heightMax [ft],velInit [mps]"
    )
}

pub fn csv_row(solution: &ShotSolution) -> String {
    let g = &solution.geometry;
    let r = &solution.result;
    format!(
        "{:.2},{:.2},{:.1},{:.1},{:.1},{:.1},{:.1},{:.1},{:.1},{:.1}",
        meters_to_feet(g.floor_distance),
        meters_to_feet(g.target_offset),
        r.rpm,
        r.launch_angle_deg,
        r.landing_angle_deg,
        r.total_time,
        meters_to_feet(g.height_above_reference),
        meters_to_feet(g.target_height),
        meters_to_feet(r.apex_height),
        r.exit_velocity,
    )
}

pub fn sweep_header() -> &'static str {
    SWEEP_HEADER
}

pub fn sweep_row(solution: &ShotSolution) -> String {
    let g = &solution.geometry;
    let r = &solution.result;
    format!(
        "{:.2},{:.2},{:.2},{:.1},{:.1},{:.1},{:.1},{:.1}",
        meters_to_feet(g.total_distance()),
        meters_to_feet(g.floor_distance),
        meters_to_feet(g.target_offset),
        meters_to_feet(g.height_above_reference),
        meters_to_feet(g.target_height),
        r.rpm,
        r.launch_angle_deg,
        r.landing_angle_deg,
    )
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Writes the sweep header and one row per solution, each followed by the
/// hood servo position for its launch angle.
pub fn write_sweep(writer: &mut dyn Write, solutions: &[ShotSolution]) -> io::Result<()> {
    writeln!(writer, "{},hoodServo", sweep_header())?;
    for solution in solutions {
        let servo = hood_servo_position(solution.result.launch_angle_deg);
        writeln!(writer, "{},{servo:.3}", sweep_row(solution))?;
    }
    writer.flush()
}

/// Writes the summary header (taken from the first solution) and rows.
pub fn write_summary(writer: &mut dyn Write, solutions: &[ShotSolution]) -> io::Result<()> {
    let Some(first) = solutions.first() else {
        return Ok(());
    };
    writeln!(writer, "{}", csv_header(first))?;
    for solution in solutions {
        writeln!(writer, "{}", csv_row(solution))?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ShotGeometry, solve};

    fn default_solution() -> ShotSolution {
        solve(
            &ShotGeometry::from_feet(12.0, 2.5, 9.2, 80.0 / 12.0),
            &PhysicalConfig::default(),
        )
    }

    #[test]
    fn dump_lists_values_in_order() {
        let dump = intermediate_results(&default_solution(), &PhysicalConfig::default());
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 15);
        assert!(lines[0].starts_with("  ascent_time 0.684"));
        assert_eq!(lines[3], "  height_above_reference 9.200000 ft");
        assert_eq!(lines[4], "  launch_height 3.000000 ft");
        assert_eq!(lines[7], "  floor_distance 12.000000 ft");
        assert_eq!(lines[12], "  launch_angle 60.000000 deg");
        assert!(lines[14].starts_with("  rpm 3895.8"));
        assert!(lines[14].ends_with(" rpm"));
        assert!(!dump.ends_with('\n'));
    }

    #[test]
    fn summary_row_matches_header_width() {
        let solution = default_solution();
        let header = csv_header(&solution);
        let row = csv_row(&solution);

        assert_eq!(header.split(',').count(), 10);
        assert_eq!(row.split(',').count(), 10);
        assert!(header.contains("Flywheel [rpm] HAH 9.2"));
        assert!(header.contains("launchAngle [deg] HAH 60.0"));
        assert!(row.starts_with("12.00,2.50,3895.8,60.0,-51.9,1.2,9.2,6.7,10.5,7.7"));
    }

    #[test]
    fn sweep_row_starts_with_vision_distance() {
        let row = sweep_row(&default_solution());
        assert_eq!(sweep_header().split(',').count(), 8);
        assert_eq!(row, "14.50,12.00,2.50,9.2,6.7,3895.8,60.0,-51.9");
    }

    #[test]
    fn hood_servo_calibration() {
        let at_45 = hood_servo_position(45.0);
        let expected = -2.58 + 0.159 * 45.0 - 0.00298 * 2025.0 + 0.0000216 * 91125.0;
        assert!((at_45 - expected).abs() < 1e-12);
        assert!(hood_servo_position(60.0) > hood_servo_position(33.3));
    }

    #[test]
    fn sweep_writer_appends_servo_column() {
        let solutions = [default_solution(), default_solution()];
        let mut buffer = Vec::new();
        write_sweep(&mut buffer, &solutions).expect("write to memory");

        let text = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(",hoodServo"));
        assert_eq!(lines[1].split(',').count(), 9);
    }

    #[test]
    fn empty_summary_writes_nothing() {
        let mut buffer = Vec::new();
        write_summary(&mut buffer, &[]).expect("write to memory");
        assert!(buffer.is_empty());
    }

    #[test]
    fn summary_writer_emits_header_then_rows() {
        let near = solve(
            &ShotGeometry::from_feet(8.0, 2.5, 9.2, 80.0 / 12.0),
            &PhysicalConfig::default(),
        );
        let solutions = [near, default_solution()];
        let mut buffer = Vec::new();
        write_summary(&mut buffer, &solutions).expect("write to memory");

        let text = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], csv_header(&near));
        assert!(lines[1].starts_with("8.00,2.50,"));
        assert!(lines[2].starts_with("12.00,2.50,3895.8,60.0,-51.9"));
    }

    #[test]
    fn non_finite_values_are_written_as_is() {
        let solution = solve(&ShotGeometry::new(0.0, 1.0, 2.0, 1.0), &PhysicalConfig::default());
        assert!(csv_row(&solution).contains("NaN"));
    }
}
