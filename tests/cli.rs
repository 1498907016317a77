use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const GRID_JSON: &str = r#"{"columns": [
    [[700, 0, 20], [700, 300, 30]],
    [[1250, 0, 50], [1250, 600, 1500]]
]}"#;

fn write_grid(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("scan.json");
    fs::write(&path, GRID_JSON).unwrap();
    path
}

#[test]
fn match_prints_qcut() {
    Command::cargo_bin("mcgrid")
        .unwrap()
        .args(["match", "GlGl", "700", "1250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("118").and(predicate::str::contains("0.245")));
}

#[test]
fn xsec_rejects_unknown_process() {
    Command::cargo_bin("mcgrid")
        .unwrap()
        .args(["xsec", "Unknown", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown"));
}

#[test]
fn match_out_of_range_exits_with_input_error() {
    Command::cargo_bin("mcgrid")
        .unwrap()
        .args(["match", "GlGl", "50"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn eff_summarizes_grid() {
    let dir = tempfile::tempdir().unwrap();
    let grid = write_grid(&dir);
    Command::cargo_bin("mcgrid")
        .unwrap()
        .args(["eff", "--process", "GlGl", "--grid"])
        .arg(&grid)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 points in 2 columns"));
}

#[test]
fn plot_writes_one_file_per_type() {
    let dir = tempfile::tempdir().unwrap();
    let grid = write_grid(&dir);
    let out = dir.path().join("plots");

    for format in ["pdf", "svg"] {
        Command::cargo_bin("mcgrid")
            .unwrap()
            .args(["plot", "--model", "T1tttt", "--process", "GlGl", "--type", "events,lumi_br4"])
            .args(["--format", format, "--grid"])
            .arg(&grid)
            .arg("--out-dir")
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("1.6 million events"));

        assert!(out.join(format!("T1tttt_events.{format}")).is_file());
        assert!(out.join(format!("T1tttt_lumi_br4.{format}")).is_file());
    }

    let svg = fs::read_to_string(out.join("T1tttt_events.svg")).unwrap();
    assert!(svg.contains("Thousands of T1tttt events to generate"));
}

#[test]
fn plot_of_empty_grid_fails() {
    let dir = tempfile::tempdir().unwrap();
    let grid = dir.path().join("empty.json");
    fs::write(&grid, r#"{"points": []}"#).unwrap();
    Command::cargo_bin("mcgrid")
        .unwrap()
        .args(["plot", "--model", "T1tttt", "--process", "GlGl", "--grid"])
        .arg(&grid)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .code(3);
}

#[test]
fn failing_plot_type_leaves_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let grid = dir.path().join("zero_mass.json");
    fs::write(&grid, r#"{"columns": [[[0, 0, 20]], [[700, 0, 30]]]}"#).unwrap();
    let out = dir.path().join("plots");

    Command::cargo_bin("mcgrid")
        .unwrap()
        .args(["plot", "--model", "M", "--process", "GlGl", "--type", "events,lumi", "--grid"])
        .arg(&grid)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .code(2);

    assert!(!out.join("M_events.pdf").exists());
    assert!(!out.join("M_lumi.pdf").exists());
}
