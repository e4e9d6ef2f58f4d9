//! Integration tests for the PassKeep CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! `add` reads the password from piped stdin in every test, so nothing
//! here depends on an interactive terminal.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the passkeep binary.
fn passkeep() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passkeep").expect("binary should exist")
}

#[test]
fn help_flag_shows_usage() {
    passkeep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local encrypted password vault"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn version_flag_shows_version() {
    passkeep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passkeep"));
}

#[test]
fn no_args_shows_help() {
    // Running with no subcommand should show an error or help.
    passkeep()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn add_from_stdin_then_show_recovers_password() {
    let tmp = TempDir::new().unwrap();

    passkeep()
        .arg("add")
        .current_dir(tmp.path())
        .write_stdin("hunter2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("sealed"));

    // The store file lands in the default directory.
    assert!(tmp.path().join(".passkeep").join("passwords.store").exists());

    passkeep()
        .arg("show")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2"));
}

#[test]
fn add_appends_multiple_passwords() {
    let tmp = TempDir::new().unwrap();

    for password in ["alpha", "beta", "gamma"] {
        passkeep()
            .arg("add")
            .current_dir(tmp.path())
            .write_stdin(format!("{password}\n"))
            .assert()
            .success();
    }

    let show = passkeep().arg("show").current_dir(tmp.path()).assert().success();
    let out = String::from_utf8_lossy(&show.get_output().stdout).to_string();
    assert!(out.contains("alpha"));
    assert!(out.contains("beta"));
    assert!(out.contains("gamma"));
}

#[test]
fn add_with_inline_value_warns_about_shell_history() {
    let tmp = TempDir::new().unwrap();

    passkeep()
        .args(["add", "inline-secret"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("shell history"));
}

#[test]
fn show_on_missing_store_is_friendly() {
    let tmp = TempDir::new().unwrap();

    passkeep()
        .arg("show")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No passwords"));
}

#[test]
fn list_shows_sealed_entries_without_values() {
    let tmp = TempDir::new().unwrap();

    passkeep()
        .arg("add")
        .current_dir(tmp.path())
        .write_stdin("listed-password\n")
        .assert()
        .success();

    let list = passkeep().arg("list").current_dir(tmp.path()).assert().success();
    let out = String::from_utf8_lossy(&list.get_output().stdout).to_string();
    assert!(out.contains("sealed"));
    assert!(
        !out.contains("listed-password"),
        "list must never print plaintext"
    );
}

#[test]
fn store_dir_flag_overrides_default_location() {
    let tmp = TempDir::new().unwrap();

    passkeep()
        .args(["add", "--store-dir", "elsewhere"])
        .current_dir(tmp.path())
        .write_stdin("relocated\n")
        .assert()
        .success();

    assert!(tmp.path().join("elsewhere").join("passwords.store").exists());
    assert!(!tmp.path().join(".passkeep").exists());
}

#[test]
fn config_file_sets_store_location() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(".passkeep.toml"),
        "store_dir = \"configured\"\nstore_file = \"mine.store\"\n",
    )
    .unwrap();

    passkeep()
        .arg("add")
        .current_dir(tmp.path())
        .write_stdin("from-config\n")
        .assert()
        .success();

    assert!(tmp.path().join("configured").join("mine.store").exists());
}

#[test]
fn store_dir_flag_overrides_config_but_keeps_store_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(".passkeep.toml"),
        "store_dir = \"configured\"\nstore_file = \"mine.store\"\n",
    )
    .unwrap();

    passkeep()
        .args(["add", "--store-dir", "flagged"])
        .current_dir(tmp.path())
        .write_stdin("flag-wins\n")
        .assert()
        .success();

    // The flag replaces the configured directory only; the configured
    // file name still applies.
    assert!(tmp.path().join("flagged").join("mine.store").exists());
    assert!(!tmp.path().join("configured").exists());
}

#[test]
fn corrupt_record_is_reported_but_show_continues() {
    let tmp = TempDir::new().unwrap();

    passkeep()
        .arg("add")
        .current_dir(tmp.path())
        .write_stdin("good-password\n")
        .assert()
        .success();

    // Append a broken record by hand.
    let store = tmp.path().join(".passkeep").join("passwords.store");
    let mut contents = std::fs::read_to_string(&store).unwrap();
    contents.push_str("[broken], \n");
    std::fs::write(&store, contents).unwrap();

    passkeep()
        .arg("show")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("good-password"))
        .stderr(predicate::str::contains("record 1"));
}
