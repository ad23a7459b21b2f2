//! Integration tests for the nutri binary.
//!
//! These tests verify end-to-end behavior including:
//! - Goal calculation from flags and from profile files
//! - Insufficient-data reporting
//! - Legacy goal mapping
//! - Config handling and goal export

use assert_cmd::Command;
use nutri_core::export::load_goals;
use nutri_core::{ActivityLevel, WeightGoal};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a test directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nutri"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// CLI pointed at a config file inside the temp dir, so user config never leaks in
fn cli_in(dir: &Path) -> Command {
    let mut cmd = cli();
    cmd.arg("--config").arg(config_path(dir));
    cmd
}

fn config_path(dir: &Path) -> PathBuf {
    dir.join("config.toml")
}

fn reference_flags(cmd: &mut Command) -> &mut Command {
    cmd.args([
        "--weight",
        "80",
        "--height",
        "180",
        "--age",
        "30",
        "--gender",
        "male",
        "--activity",
        "sedentary",
    ])
}

fn parse_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout was not JSON")
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Offline daily nutrition goal calculator",
        ));
}

#[test]
fn test_calc_reference_json() {
    let temp_dir = setup_test_dir();

    let mut cmd = cli_in(temp_dir.path());
    cmd.arg("calc");
    reference_flags(&mut cmd);
    let output = cmd.arg("--json").assert().success().get_output().clone();

    let goals = parse_json(&output.stdout);
    assert_eq!(goals["daily_calorie_goal"], 2136);
    assert_eq!(goals["protein_goal"], 144);
    assert_eq!(goals["carb_goal"], 235);
    assert_eq!(goals["fat_goal"], 69);
    assert_eq!(goals["fiber_goal"], 30);
    assert_eq!(goals["sugar_goal"], 50);
    assert_eq!(goals["saturated_fat_goal"], 23);
    assert_eq!(goals["weight_goal"], "maintain");
    assert_eq!(goals["activity_level"], "sedentary");
}

#[test]
fn test_calc_summary() {
    let temp_dir = setup_test_dir();

    let mut cmd = cli_in(temp_dir.path());
    cmd.arg("calc");
    reference_flags(&mut cmd)
        .assert()
        .success()
        .stdout(predicate::str::contains("DAILY NUTRITION GOALS"))
        .stdout(predicate::str::contains("2136 kcal"))
        .stdout(predicate::str::contains("BMR:  1780 kcal"));
}

#[test]
fn test_calc_missing_age_fails() {
    let temp_dir = setup_test_dir();

    cli_in(temp_dir.path())
        .args([
            "calc",
            "--weight",
            "80",
            "--height",
            "180",
            "--gender",
            "male",
            "--activity",
            "sedentary",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient profile data"))
        .stderr(predicate::str::contains("age"));
}

#[test]
fn test_calc_from_profile_file() {
    let temp_dir = setup_test_dir();
    let profile_path = temp_dir.path().join("profile.json");

    let json = r#"{
        "weight": 80.0,
        "height": 180.0,
        "age": 30,
        "gender": "male",
        "activity_level": "sedentary",
        "weight_goal": "lose_heavy",
        "target_weight": 72.0
    }"#;
    fs::write(&profile_path, json).unwrap();

    let output = cli_in(temp_dir.path())
        .arg("calc")
        .arg("--profile")
        .arg(&profile_path)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .clone();

    let goals = parse_json(&output.stdout);
    assert_eq!(goals["weight_goal"], "lose_0_75");
    assert_eq!(goals["daily_calorie_goal"], 2136 - 750);
    assert_eq!(goals["target_weight"], 72.0);
}

#[test]
fn test_flags_override_profile_file() {
    let temp_dir = setup_test_dir();
    let profile_path = temp_dir.path().join("profile.json");

    // Profile has no activity level; the flag supplies it
    fs::write(
        &profile_path,
        r#"{ "weight": 80, "height": 180, "age": 30, "gender": "male", "weight_goal": "gain" }"#,
    )
    .unwrap();

    let output = cli_in(temp_dir.path())
        .arg("calc")
        .arg("--profile")
        .arg(&profile_path)
        .args(["--activity", "sedentary", "--goal", "maintain", "--json"])
        .assert()
        .success()
        .get_output()
        .clone();

    let goals = parse_json(&output.stdout);
    assert_eq!(goals["weight_goal"], "maintain");
    assert_eq!(goals["daily_calorie_goal"], 2136);
}

#[test]
fn test_unknown_activity_warns_and_defaults() {
    let temp_dir = setup_test_dir();

    let output = cli_in(temp_dir.path())
        .args([
            "calc",
            "--weight",
            "80",
            "--height",
            "180",
            "--age",
            "30",
            "--gender",
            "male",
            "--activity",
            "couch",
            "--json",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("defaulting to sedentary"))
        .get_output()
        .clone();

    let goals = parse_json(&output.stdout);
    assert_eq!(goals["activity_level"], "sedentary");
    assert_eq!(goals["daily_calorie_goal"], 2136);
}

#[test]
fn test_output_file_written() {
    let temp_dir = setup_test_dir();
    let out_path = temp_dir.path().join("export").join("goals.json");

    let mut cmd = cli_in(temp_dir.path());
    cmd.arg("calc");
    reference_flags(&mut cmd)
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Goals written"));

    let goals = load_goals(&out_path).expect("Failed to read goals file");
    assert_eq!(goals.daily_calorie_goal, 2136);
    assert_eq!(goals.protein_goal, 144);
    assert_eq!(goals.weight_goal, WeightGoal::Maintain);
    assert_eq!(goals.activity_level, ActivityLevel::Sedentary);
}

#[test]
fn test_map_goal() {
    cli()
        .args(["map-goal", "lose_heavy"])
        .assert()
        .success()
        .stdout(predicate::str::diff("lose_0_75\n"));

    cli()
        .args(["map-goal", "unknown_value"])
        .assert()
        .success()
        .stdout(predicate::str::diff("maintain\n"));
}

#[test]
fn test_init_config_then_refuse_overwrite() {
    let temp_dir = setup_test_dir();

    cli_in(temp_dir.path())
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let contents = fs::read_to_string(config_path(temp_dir.path())).unwrap();
    assert!(contents.contains("mifflin_st_jeor"));

    cli_in(temp_dir.path())
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cli_in(temp_dir.path())
        .args(["init-config", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_selects_formula_and_floor() {
    let temp_dir = setup_test_dir();
    fs::write(
        config_path(temp_dir.path()),
        "[engine]\nbmr_formula = \"harris_benedict\"\n",
    )
    .unwrap();

    let mut cmd = cli_in(temp_dir.path());
    cmd.arg("calc");
    let output = reference_flags(&mut cmd)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .clone();

    let goals = parse_json(&output.stdout);
    assert_eq!(goals["daily_calorie_goal"], 2237);

    fs::write(
        config_path(temp_dir.path()),
        "[calories]\nenforce_minimum = true\n",
    )
    .unwrap();

    let output = cli_in(temp_dir.path())
        .args([
            "calc",
            "--weight",
            "45",
            "--height",
            "150",
            "--age",
            "60",
            "--gender",
            "female",
            "--activity",
            "sedentary",
            "--goal",
            "lose_1",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .clone();

    let goals = parse_json(&output.stdout);
    assert_eq!(goals["daily_calorie_goal"], 1200);
}
