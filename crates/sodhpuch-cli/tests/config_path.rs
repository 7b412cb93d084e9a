use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("sodhpuch")
        .env("SODHPUCH_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("sodhpuch")
        .env("SODHPUCH_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    assert!(config_path.exists());

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("# api_base_url ="));
    assert!(contents.contains("timeout_secs ="));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "# existing config").unwrap();

    cargo_bin_cmd!("sodhpuch")
        .env("SODHPUCH_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_set_api_url_keeps_existing_settings() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "# my settings\ntimeout_secs = 5\n").unwrap();

    cargo_bin_cmd!("sodhpuch")
        .env("SODHPUCH_HOME", dir.path())
        .args(["config", "set-api-url", "https://api.example.com/api/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://api.example.com/api"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("# my settings"));
    assert!(contents.contains("timeout_secs = 5"));
    assert!(contents.contains(r#"api_base_url = "https://api.example.com/api""#));
}

#[test]
fn test_broken_config_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "timeout_secs = \"soon\"\n").unwrap();

    cargo_bin_cmd!("sodhpuch")
        .env("SODHPUCH_HOME", dir.path())
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("sodhpuch")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set-api-url"));
}
