//! CLI contract tests. All runs use `--offline` and a scratch working
//! directory so no network or API key is involved.

use assert_cmd::Command;
use predicates::prelude::*;

fn natal_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("natal").unwrap();
    cmd.current_dir(dir).env_remove("NATAL_API_KEY");
    cmd
}

#[test]
fn chart_prints_placements() {
    let dir = tempfile::tempdir().unwrap();

    natal_in(dir.path())
        .args([
            "chart", "--name", "Ada", "--date", "1990-03-21", "--time", "00:00", "--place",
            "London", "--lat", "51.5", "--lon", "-0.12", "--offline",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Natal chart for Ada"))
        .stdout(predicate::str::contains("Sun     Aries"))
        .stdout(predicate::str::contains("Mercury"))
        .stdout(predicate::str::contains("House 12"));
}

#[test]
fn chart_json_emits_the_full_record() {
    let dir = tempfile::tempdir().unwrap();

    let output = natal_in(dir.path())
        .args([
            "chart", "--name", "Ada", "--date", "1990-03-21", "--time", "00:00", "--place",
            "London", "--offline", "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let record: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(record["sun_sign"], "Aries");
    assert_eq!(record["planets"].as_array().unwrap().len(), 8);
    assert_eq!(record["houses"].as_array().unwrap().len(), 12);
    assert!(!record["interpretation"].as_str().unwrap().is_empty());
}

#[test]
fn chart_save_then_history_lists_it() {
    let dir = tempfile::tempdir().unwrap();

    natal_in(dir.path())
        .args([
            "chart", "--name", "Ada", "--date", "1990-03-21", "--time", "00:00", "--place",
            "London", "--offline", "--save", "--owner", "ada",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved chart as chart-"));

    natal_in(dir.path())
        .args(["history", "--owner", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("Sun Aries"));
}

#[test]
fn history_with_no_charts_is_friendly() {
    let dir = tempfile::tempdir().unwrap();

    natal_in(dir.path())
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved charts."));
}

#[test]
fn invalid_date_fails_with_validation_error() {
    let dir = tempfile::tempdir().unwrap();

    natal_in(dir.path())
        .args([
            "chart", "--name", "Ada", "--date", "21/03/1990", "--time", "00:00", "--place",
            "London", "--offline",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid birth date"));
}

#[test]
fn horoscope_without_api_key_reports_configuration_error() {
    let dir = tempfile::tempdir().unwrap();

    natal_in(dir.path())
        .args(["horoscope", "chart-123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NATAL_API_KEY"));
}
