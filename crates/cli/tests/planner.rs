use assert_cmd::Command;
use predicates::prelude::*;

fn planner() -> Command {
    let mut cmd = Command::cargo_bin("planner").expect("planner binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn mars_mission_prints_launch_box() {
    planner()
        .args(["--at", "2025-01-01T00:00:00Z", "--target", "mars"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-01 00:00:00 - Mission Planning to Mars"))
        .stdout(predicate::str::contains("Mission to Mars:"))
        .stdout(predicate::str::contains("Optimal launch: 2025-02-04"))
        .stdout(predicate::str::contains("Travel time: 258.9 days"))
        .stdout(predicate::str::contains("Arrival: 2025-10-21"));
}

#[test]
fn date_only_instant_is_accepted() {
    planner()
        .args(["--at", "2025-01-01", "--target", "Venus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Optimal launch: 2025-09-18"))
        .stdout(predicate::str::contains("Travel time: 146.0 days"))
        .stdout(predicate::str::contains("target behind Earth"));
}

#[test]
fn unknown_target_degrades_to_positions() {
    planner()
        .args(["--at", "2025-01-01T00:00:00Z", "--target", "Pluto"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Invalid planet 'Pluto'. Showing regular solar system view.",
        ))
        .stdout(predicate::str::contains("Neptune"))
        .stdout(predicate::str::contains("Mission to").not());
}

#[test]
fn origin_as_target_degrades_with_reason() {
    planner()
        .args(["--at", "2025-01-01T00:00:00Z", "--target", "Earth"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot plan a transfer from Earth"))
        .stdout(predicate::str::contains("Mission to").not());
}

#[test]
fn json_report_parses() {
    let output = planner()
        .args([
            "--at",
            "2025-01-01T00:00:00Z",
            "--target",
            "Jupiter",
            "--format",
            "json",
        ])
        .output()
        .expect("run planner");
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(report["origin"], "Earth");
    assert_eq!(report["target"], "Jupiter");
    assert_eq!(report["positions"].as_array().map(Vec::len), Some(8));
    assert_eq!(report["transfer"]["source_radius_au"], 1.0);
    let days = report["launch_window"]["days_to_launch"].as_f64().unwrap();
    assert!((0.0..365.25).contains(&days));
    assert!(report["delta_v_estimate"]["dv_total_km_s"].as_f64().unwrap() > 0.0);
}

#[test]
fn interactive_prompt_reads_target() {
    planner()
        .args(["--at", "2025-01-01T00:00:00Z", "--interactive"])
        .write_stdin("mars\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Available planets: Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune",
        ))
        .stdout(predicate::str::contains("Mission to Mars:"))
        .stdout(predicate::str::contains("Available planets").not());
}

#[test]
fn interactive_json_keeps_stdout_parseable() {
    let output = planner()
        .args([
            "--at",
            "2025-01-01T00:00:00Z",
            "--interactive",
            "--format",
            "json",
        ])
        .write_stdin("mars\n")
        .output()
        .expect("run planner");
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(report["target"], "Mars");
    let prompt = String::from_utf8_lossy(&output.stderr);
    assert!(prompt.contains("Enter target planet"));
}

#[test]
fn interactive_empty_answer_skips_mission() {
    planner()
        .args(["--at", "2025-01-01T00:00:00Z", "--interactive"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mission to").not());
}

#[test]
fn positions_csv_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/positions.csv");
    planner()
        .args(["--at", "2025-01-01T00:00:00Z", "--positions-csv"])
        .arg(&path)
        .assert()
        .success();
    let csv = std::fs::read_to_string(&path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("body,angle_rad,angle_deg,x_au,y_au,radius_au,period_years")
    );
    assert_eq!(csv.lines().count(), 9);
    assert!(csv.contains("\nNeptune,"));
}

#[test]
fn custom_body_table_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bodies.yaml");
    std::fs::write(
        &path,
        "- name: Earth\n  semi_major_axis_au: 1.0\n  period_years: 1.0\n- name: Ceres\n  semi_major_axis_au: 2.77\n  period_years: 4.6\n",
    )
    .unwrap();
    planner()
        .args(["--at", "2025-01-01T00:00:00Z", "--target", "Ceres", "--bodies"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mission to Ceres:"))
        .stdout(predicate::str::contains("Mars").not());
}

#[test]
fn invalid_body_table_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bodies.yaml");
    std::fs::write(
        &path,
        "- name: Earth\n  semi_major_axis_au: 1.0\n  period_years: 0.0\n",
    )
    .unwrap();
    planner()
        .args(["--bodies"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid period"));
}

#[test]
fn estimate_dv_line_is_optional() {
    planner()
        .args(["--at", "2025-01-01T00:00:00Z", "--target", "Mars", "--estimate-dv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hohmann est."));
}
