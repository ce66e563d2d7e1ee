use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, starts_with};
use std::fs;

mod common;
use common::{rho, temp_config, temp_path, write_listings};

#[test]
fn test_parse_prints_schedule() {
    let cfg = temp_config("parse_prints_schedule");

    rho()
        .args(["--config", &cfg, "parse", "Du mardi au samedi, de 10h à 18h."])
        .assert()
        .success()
        .stdout(contains("\"tuesday_start_hour_am\": \"10:00:00\""))
        .stdout(contains("\"saturday_end_hour_pm\": \"18:00:00\""))
        .stdout(contains("monday").not());
}

#[test]
fn test_parse_with_suppressed_id_prints_empty_object() {
    let cfg = temp_config("parse_suppressed");

    rho()
        .args([
            "--config",
            &cfg,
            "parse",
            "--id",
            "4006",
            "Concert hommage [...] Vendredi 16 mai à 20h30 [...]",
        ])
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn test_extract_to_stdout() {
    let cfg = temp_config("extract_stdout");
    let input = write_listings("extract_stdout");

    rho()
        .args(["--config", &cfg, "extract", "--input", &input])
        .assert()
        .success()
        .stdout(contains("\"3109\""))
        .stdout(contains("\"9385\""))
        .stdout(contains("\"11199\""))
        .stdout(contains("\"4006\"").not())
        .stdout(contains("\"2627\"").not())
        .stderr(contains("1 row(s) skipped"));
}

#[test]
fn test_extract_csv_file() {
    let cfg = temp_config("extract_csv_file");
    let input = write_listings("extract_csv_file");
    let out = temp_path("extract_csv_file_out", "csv");

    rho()
        .args([
            "--config", &cfg, "extract", "--input", &input, "--output", &out, "--format", "csv",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,key,time\n"));
    assert!(content.contains("3109,thursday_start_hour_am,08:00:00"));
    assert!(content.contains("11199,friday_end_hour_pm,17:30:00"));
    assert!(!content.contains("4006,"));
}

#[test]
fn test_extract_csv_to_stdout() {
    let cfg = temp_config("extract_csv_stdout");
    let input = write_listings("extract_csv_stdout");

    rho()
        .args(["--config", &cfg, "extract", "--input", &input, "--format", "csv"])
        .assert()
        .success()
        .stdout(starts_with("id,key,time\n"))
        .stdout(contains("3109,thursday_start_hour_am,08:00:00"))
        .stdout(contains("{").not())
        .stderr(contains("Writing csv to stdout"));
}

#[test]
fn test_extract_json_file_without_overrides() {
    let cfg = temp_config("extract_json_no_overrides");
    let input = write_listings("extract_json_no_overrides");
    let out = temp_path("extract_json_no_overrides_out", "json");

    rho()
        .args([
            "--config",
            &cfg,
            "extract",
            "--input",
            &input,
            "--output",
            &out,
            "--no-overrides",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(json["4006"]["friday_start_hour_pm"], "20:30:00");
    assert_eq!(json["3109"]["thursday_end_hour_pm"], "13:00:00");
}

#[test]
fn test_extract_missing_column_fails() {
    let cfg = temp_config("extract_missing_column");
    let input = write_listings("extract_missing_column");

    rho()
        .args([
            "--config",
            &cfg,
            "extract",
            "--input",
            &input,
            "--text-column",
            "texte",
        ])
        .assert()
        .failure()
        .stderr(contains("missing column 'texte'"));
}

#[test]
fn test_overrides_listing() {
    let cfg = temp_config("overrides_listing");

    rho()
        .args(["--config", &cfg, "overrides"])
        .assert()
        .success()
        .stdout(contains("RECORD"))
        .stdout(contains("2263"))
        .stdout(contains("wednesday,friday,sunday (marker)"))
        .stdout(contains("suppress"));
}

#[test]
fn test_extra_overrides_from_config() {
    let cfg = temp_config("extra_overrides");
    let rules = temp_path("extra_overrides_rules", "yaml");
    fs::write(&rules, "- record_id: 3109\n  action: suppress\n").expect("write rules");
    fs::write(&cfg, format!("overrides_file: {rules}\n")).expect("write config");
    let input = write_listings("extra_overrides");

    rho()
        .args(["--config", &cfg, "extract", "--input", &input])
        .assert()
        .success()
        .stdout(contains("\"3109\"").not())
        .stdout(contains("\"9385\""));
}

#[test]
fn test_init_then_print_config() {
    let cfg = temp_config("init_then_print");

    rho()
        .args(["--config", &cfg, "init"])
        .assert()
        .success();

    rho()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("scope_window: 50"))
        .stdout(contains("marker_window: 80"))
        .stdout(contains("fallback_distance: 100"));
}

#[test]
fn test_invalid_config_is_reported() {
    let cfg = temp_config("invalid_config");
    fs::write(&cfg, "scope_window: [1, 2]\n").expect("write config");

    rho()
        .args(["--config", &cfg, "parse", "Tous les jeudis de 8h à 13h"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
