use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run the binary with a throwaway home directory and a fixed "today"
/// (Wednesday 2023-06-14).
fn dolah(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dolah").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("DOLAH_CONFIG")
        .env("NO_COLOR", "1")
        .args(["--today", "2023-06-14"]);
    cmd
}

#[test]
fn parse_defaults_to_add() {
    let home = TempDir::new().unwrap();
    dolah(&home)
        .args(["-o", "json", "parse", "buy", "milk", "by", "friday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"command\": \"add\""))
        .stdout(predicate::str::contains("\"description\": \"buy milk\""))
        .stdout(predicate::str::contains("\"type\": \"deadline\""));
}

#[test]
fn parse_done_stores_zero_based_id() {
    let home = TempDir::new().unwrap();
    dolah(&home)
        .args(["-o", "json", "parse", "done", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"task_id\": 2"));
}

#[test]
fn parse_rejects_extra_arguments() {
    let home = TempDir::new().unwrap();
    dolah(&home)
        .args(["parse", "clear", "extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too many arguments"));
}

#[test]
fn parse_rejects_negative_done() {
    let home = TempDir::new().unwrap();
    dolah(&home)
        .args(["parse", "done", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid task ID"));
}

#[test]
fn date_resolves_relative_expression() {
    let home = TempDir::new().unwrap();
    dolah(&home)
        .args(["date", "next", "week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-06-21"));
}

#[test]
fn date_accepts_quoted_phrase() {
    let home = TempDir::new().unwrap();
    dolah(&home)
        .args(["date", "25 dec"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-12-25"));
}

#[test]
fn parse_task_with_offset() {
    let home = TempDir::new().unwrap();
    dolah(&home)
        .args(["-o", "json", "parse", "call mom in 3 weeks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"description\": \"call mom\""))
        .stdout(predicate::str::contains("\"type\": \"event\""));
}

#[test]
fn date_rejects_invalid_day() {
    let home = TempDir::new().unwrap();
    dolah(&home)
        .args(["date", "31/02/2023"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date expression"));
}

#[test]
fn repl_reports_each_line() {
    let home = TempDir::new().unwrap();
    dolah(&home)
        .args(["-o", "json", "repl"])
        .write_stdin("del 5\nundo x\ntomorrow call bob\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"task_id\": 4"))
        .stdout(predicate::str::contains("Too many arguments"))
        .stdout(predicate::str::contains("tomorrow call bob"));
}

#[test]
fn config_aliases_are_used() {
    let home = TempDir::new().unwrap();
    let config = home.path().join(".dolah").join("config.yaml");
    std::fs::create_dir_all(config.parent().unwrap()).unwrap();
    std::fs::write(&config, "commands:\n  aliases:\n    rm: delete\n").unwrap();

    dolah(&home)
        .args(["-o", "json", "parse", "rm", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"command\": \"delete\""))
        .stdout(predicate::str::contains("\"task_id\": 1"));
}

#[test]
fn config_init_writes_default_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.yaml");

    dolah(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    dolah(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn broken_config_is_reported() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("broken.yaml");
    std::fs::write(&config, "general: [").unwrap();

    dolah(&home)
        .arg("--config")
        .arg(&config)
        .args(["date", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
