use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn solve_prints_dump_and_summary() {
    Command::cargo_bin("flywheel_ballistics")
        .expect("flywheel_ballistics bin")
        .args(["solve", "--distance", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  ascent_time "))
        .stdout(predicate::str::contains("  floor_distance 12.000000 ft"))
        .stdout(predicate::str::contains("Flywheel: 3895.8 rpm"))
        .stdout(predicate::str::contains("Launch angle: 60.0 deg"));
}

#[test]
fn no_clamp_reports_ideal_angle() {
    Command::cargo_bin("flywheel_ballistics")
        .expect("flywheel_ballistics bin")
        .args(["solve", "--distance", "12", "--no-clamp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Launch angle: 60.7 deg"));
}

#[test]
fn degenerate_shot_still_succeeds() {
    Command::cargo_bin("flywheel_ballistics")
        .expect("flywheel_ballistics bin")
        .args(["solve", "--distance", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NaN"));
}

#[test]
fn sweep_writes_csv_with_servo_column() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("logs").join("sweep.csv");

    Command::cargo_bin("flywheel_ballistics")
        .expect("flywheel_ballistics bin")
        .args([
            "sweep",
            "--near",
            "4",
            "--far",
            "15",
            "--step",
            "1",
            "--hah-near",
            "9.7",
            "--hah-far",
            "9.2",
            "--output",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&csv_path).expect("sweep csv");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 13);
    assert!(lines[0].starts_with("Vision Dist to Center of Target [ft]"));
    assert!(lines[0].ends_with(",hoodServo"));
    assert!(lines[1].starts_with("6.50,4.00,2.50,9.7,"));
    assert!(lines[12].starts_with("17.50,15.00,2.50,9.2,"));
}

#[test]
fn sweep_to_stdout() {
    Command::cargo_bin("flywheel_ballistics")
        .expect("flywheel_ballistics bin")
        .args(["sweep", "--near", "10", "--far", "10", "--output", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hoodServo"))
        .stdout(predicate::str::contains("12.50,10.00,2.50,9.2,"));
}

#[test]
fn config_file_changes_flywheel() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("solver.toml");
    fs::write(&config_path, "[physical]\nflywheel_radius = 0.1016\n").expect("write config");

    Command::cargo_bin("flywheel_ballistics")
        .expect("flywheel_ballistics bin")
        .args(["solve", "--distance", "12", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flywheel: 1947.9 rpm"));
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("solver.toml");
    fs::write(&config_path, "[physical]\ngravity = -9.81\n").expect("write config");

    Command::cargo_bin("flywheel_ballistics")
        .expect("flywheel_ballistics bin")
        .args(["solve", "--distance", "12", "--config", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gravity"));
}

#[test]
fn sweep_writes_summary_log() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("sweep.csv");
    let log_path = dir.path().join("logs").join("summary.csv");

    Command::cargo_bin("flywheel_ballistics")
        .expect("flywheel_ballistics bin")
        .args([
            "sweep",
            "--near",
            "4",
            "--far",
            "6",
            "--hah-near",
            "9.7",
            "--output",
            csv_path.to_str().unwrap(),
            "--log",
            log_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&log_path).expect("summary log");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Dist to Front of Target [ft]"));
    assert!(lines[0].contains("Flywheel [rpm] HAH 9.7"));
    assert!(lines[1].starts_with("4.00,2.50,"));
    assert!(lines[3].starts_with("6.00,2.50,"));
}

#[test]
fn sweep_rejects_infinite_range() {
    Command::cargo_bin("flywheel_ballistics")
        .expect("flywheel_ballistics bin")
        .args(["sweep", "--near", "4", "--far", "inf", "--output", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be finite"));
}
