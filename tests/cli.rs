//! End-to-end tests for the `weave` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn weave() -> Command {
    let mut cmd = Command::cargo_bin("weave").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_parse_to_gdscript() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "player.dsl", "Cl'Player'Node2D';fn'jump''void\n");

    weave()
        .args(["parse", path.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("class_name Player\nextends Node2D\n"))
        .stdout(predicate::str::contains("func jump():\n\t# Implement jump\n"));
}

#[test]
fn test_parse_to_dsl_normalizes() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "player.dsl", "Cl'Player;cv'hp''int");

    weave()
        .args(["parse", path.as_str(), "--format", "dsl"])
        .assert()
        .success()
        .stdout("Cl'Player'';up'hp''int''0");
}

#[test]
fn test_parse_json_record() {
    let dir = TempDir::new().unwrap();
    let record = r#"{"id": "dsl_9", "name": "Coin", "kind": "normal", "parent": "Area2D"}"#;
    let path = write(&dir, "coin.json", record);

    weave()
        .args(["parse", path.as_str(), "-f", "dsl"])
        .assert()
        .success()
        .stdout("Cl'Coin'Area2D'");
}

#[test]
fn test_parse_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "a.dsl", "Cl'A");

    weave()
        .args(["parse", path.as_str(), "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format 'yaml' not found"));
}

#[test]
fn test_parse_error_fails() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "a.dsl", "sg'Died''");

    weave()
        .args(["parse", path.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing class header"));
}

#[test]
fn test_validate() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.dsl", "Cl'A;zz'x''y");
    let bad = write(&dir, "bad.dsl", "Cl'");

    weave()
        .args(["validate", good.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: section 1: unknown section 'zz' ignored"))
        .stdout(predicate::str::contains("valid"));

    weave()
        .args(["validate", bad.as_str()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error: class header in section 0 has an empty name"));
}

#[test]
fn test_compress_and_expand() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "a.dsl", "Cl ' A ' ; sg ' Died '' ");

    weave()
        .args(["compress", path.as_str()])
        .assert()
        .success()
        .stdout("Cl'A';sg'Died''\n");

    let compact = write(&dir, "b.dsl", "Cl'A'';sg'Died''");
    weave()
        .args(["expand", compact.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(";\nsg ' Died '   ' "));
}

#[test]
fn test_export() {
    let dir = TempDir::new().unwrap();
    let player = write(&dir, "player.dsl", "Cl'Player'Node2D'");
    let state = write(&dir, "state.dsl", "Cl'GlobalState'Node'");
    let out = dir.path().join("out");

    weave()
        .args(["export", out.to_str().unwrap(), player.as_str(), state.as_str(), "--name", "Demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 files"));

    assert!(out.join("scripts/Player.gd").exists());
    assert!(out.join("autoloads/GlobalState.gd").exists());
    let registry = fs::read_to_string(out.join("project_autoloads.cfg")).unwrap();
    assert!(registry.contains("GlobalState=\"*res://autoloads/GlobalState.gd\""));
    let manifest = fs::read_to_string(out.join("weave_setup.json")).unwrap();
    assert!(manifest.contains("\"projectName\": \"Demo\""));
}

#[test]
fn test_export_with_config() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "weave.toml", "[export]\nscripts_dir = \"src\"\n");
    let player = write(&dir, "player.dsl", "Cl'Player");
    let out = dir.path().join("out");

    weave()
        .args(["--config", config.as_str(), "export", out.to_str().unwrap(), player.as_str()])
        .assert()
        .success();

    assert!(out.join("src/Player.gd").exists());
}

#[test]
fn test_export_refuses_path_like_class_names() {
    let dir = TempDir::new().unwrap();
    let evil = write(&dir, "evil.dsl", "Cl'../../escape'Node");
    let out = dir.path().join("nested/out");

    weave()
        .args(["export", out.to_str().unwrap(), evil.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used as a file name"));

    assert!(!out.exists());
    assert!(!dir.path().join("escape.gd").exists());
}

#[test]
fn test_export_refuses_duplicate_classes() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "a.dsl", "Cl'Dup'Node");
    let second = write(&dir, "b.dsl", "Cl'Dup'Node2D");
    let out = dir.path().join("out");

    weave()
        .args(["export", out.to_str().unwrap(), first.as_str(), second.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("class 'Dup' is defined more than once"));

    assert!(!out.exists());
}

#[test]
fn test_working_directory_config_is_picked_up() {
    let dir = TempDir::new().unwrap();
    write(&dir, "weave.toml", "[export]\nscripts_dir = \"gd\"\n");
    let player = write(&dir, "player.dsl", "Cl'Player");
    let out = dir.path().join("out");

    weave()
        .current_dir(dir.path())
        .args(["export", out.to_str().unwrap(), player.as_str()])
        .assert()
        .success();

    assert!(out.join("gd/Player.gd").exists());
}

#[test]
fn test_list_formats() {
    weave()
        .arg("list-formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("autoload"))
        .stdout(predicate::str::contains("gdscript"))
        .stdout(predicate::str::contains("json"));
}
