//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn txline() -> Command {
    cargo_bin_cmd!("txline")
}

#[test]
fn test_cli_help() {
    txline()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transmission-line"));
}

#[test]
fn test_cli_version() {
    txline()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_two_wire_defaults_print_reference_line() {
    txline()
        .arg("two-wire")
        .assert()
        .success()
        .stdout(predicate::str::contains("R: 3.956135e0"))
        .stdout(predicate::str::contains("L: 3.895490e-3"))
        .stdout(predicate::str::contains("C: 1.785119e-8"))
        .stdout(predicate::str::contains("G:").not());
}

#[test]
fn test_two_wire_with_dielectric_loss_prints_conductance() {
    txline()
        .args(["two-wire", "--insulator-conductivity", "1e-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("G: "));
}

#[test]
fn test_coax_json_output() {
    let output = txline()
        .args(["coax", "--inner-radius", "0.000813", "--outer-radius", "0.02", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let l = value["L"].as_f64().unwrap();
    assert!((l - 1.601_378_221_494_158_8e-3).abs() < 1.0e-12);
    assert!(value.get("G").is_none());
}

#[test]
fn test_equal_radii_fail_with_geometry_error() {
    txline()
        .args(["coax", "--inner-radius", "0.01", "--outer-radius", "0.01"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid geometry"));
}

#[test]
fn test_zero_conductivity_fails_with_material_error() {
    txline()
        .args(["two-wire", "--conductor-conductivity", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid material"));
}

#[test]
fn test_negative_frequency_is_rejected() {
    txline()
        .args(["two-wire", "--frequency=-60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("frequency"));
}

#[test]
fn test_sweep_writes_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sweep.csv");

    txline()
        .args(["sweep", "--quiet", "--csv"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Length (m), R (Ohm), L (H), C (F), G (S)"));
    assert_eq!(lines.count(), 50);
}

#[test]
fn test_sweep_console_table() {
    txline()
        .args(["sweep", "--start", "100", "--stop", "300", "--step", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Length (m)"))
        .stdout(predicate::str::contains("3.00000e2"));
}

#[test]
fn test_sweep_rejects_zero_step() {
    txline()
        .args(["sweep", "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sweep range"));
}

#[test]
fn test_two_wire_impedance_report() {
    let output = txline()
        .args(["two-wire", "--frequency", "1e6", "--impedance", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // (η/π)·acosh(D/d) for the 14 AWG pair in air.
    let z0 = value["Z0"].as_f64().unwrap();
    assert!((z0 - 467.1).abs() < 0.5, "Z0 = {z0}");
    let velocity = value["velocity"].as_f64().unwrap();
    assert!((velocity / 2.998e8 - 1.0).abs() < 1.0e-3, "v = {velocity}");
    assert!(value["attenuation_dB"].as_f64().unwrap() > 0.0);
    assert_eq!(value["Zc"].as_array().unwrap().len(), 2);
}

#[test]
fn test_impedance_text_lines() {
    txline()
        .args(["coax", "--impedance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Z0: "))
        .stdout(predicate::str::contains("Zc: "))
        .stdout(predicate::str::contains("velocity: "));
}

#[test]
fn test_huge_spacing_ratio_prints_finite_values() {
    txline()
        .args(["two-wire", "--radius", "1e-160", "--spacing", "1", "--length", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inf").not())
        .stdout(predicate::str::contains("NaN").not());
}
