use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("pulse-admin-cli").unwrap()
}

#[test]
fn test_help_command() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Administration dashboard"))
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("comment"))
        .stdout(predicate::str::contains("dashboard"));
}

#[test]
fn test_version_command() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_completions_command() {
    cli()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("_pulse-admin-cli"));
}

#[test]
fn test_config_init_writes_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    cli()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration initialized"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("base_url"));
    assert!(contents.contains("%d/%m/%Y"));
}

#[test]
fn test_config_path_from_env() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[api]\nbase_url = \"http://gateway.internal:8080\"\n").unwrap();

    cli()
        .env("PULSE_ADMIN_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://gateway.internal:8080"));
}

#[test]
fn test_unreachable_gateway_reports_localized_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nbase_url = \"http://127.0.0.1:9\"\ntimeout_seconds = 2\n").unwrap();

    cli()
        .arg("--config")
        .arg(&path)
        .args(["users", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Échec de la récupération des utilisateurs",
        ));
}

#[test]
fn test_comment_delete_requires_id() {
    cli().args(["comment", "delete"]).assert().failure();
}

#[test]
fn test_exercise_add_survives_failed_list_reload() {
    let mut server = mockito::Server::new();
    let create = server
        .mock("POST", "/api/exercises")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":7,"title":"Lunge"}"#)
        .create();
    server
        .mock("GET", "/api/exercises")
        .with_status(500)
        .with_body(r#"{"error":"Failed to fetch exercises"}"#)
        .create();

    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, format!("[api]\nbase_url = \"{}\"\n", server.url())).unwrap();

    cli()
        .arg("--config")
        .arg(&path)
        .args(["exercises", "add", "--title", "Lunge"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercice ajouté : Lunge (#7)"))
        .stdout(predicate::str::contains("exercices au catalogue").not());

    create.assert();
}

#[test]
fn test_invalid_date_format_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ndate_format = \"%Q\"\n").unwrap();

    cli()
        .arg("--config")
        .arg(&path)
        .args(["users", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date_format '%Q'"));
}
