use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("sodhpuch")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_login_help_mentions_password_env() {
    cargo_bin_cmd!("sodhpuch")
        .args(["login", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--email"))
        .stdout(predicate::str::contains("SODHPUCH_PASSWORD"));
}

#[test]
fn test_login_requires_email() {
    cargo_bin_cmd!("sodhpuch")
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--email"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("sodhpuch")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_home_lists_pages() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("sodhpuch")
        .env("SODHPUCH_HOME", dir.path())
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("CollegeSodhpuch"))
        .stdout(predicate::str::contains(
            "International university and visa guidance platform",
        ))
        .stdout(predicate::str::contains("/dashboard"));
}

#[test]
fn test_tui_rejects_unknown_page() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("sodhpuch")
        .env("SODHPUCH_HOME", dir.path())
        .args(["tui", "--page", "/admin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown page '/admin'"));
}

#[test]
fn test_tui_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("sodhpuch")
        .env("SODHPUCH_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
