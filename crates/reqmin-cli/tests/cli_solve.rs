use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn reqmin() -> Command {
    Command::cargo_bin("reqmin").unwrap()
}

/// Points the default config lookup at an empty home directory.
fn isolated(home: &TempDir) -> Command {
    let mut cmd = reqmin();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn solves_arguments() {
    let home = TempDir::new().unwrap();
    isolated(&home)
        .args([">2", ">=2.1", "<4", "!=4.5"])
        .assert()
        .success()
        .stdout(">=2.1 <4\n");
}

#[test]
fn solves_single_quoted_argument() {
    let home = TempDir::new().unwrap();
    isolated(&home)
        .arg(">2 >=2.1 <4 !=4.5 !=3.7")
        .assert()
        .success()
        .stdout(">=2.1 !=3.7 <4\n");
}

#[test]
fn prints_unsatisfiable() {
    let home = TempDir::new().unwrap();
    isolated(&home)
        .args(["==1", "!=1"])
        .assert()
        .success()
        .stdout("unsatisfiable\n");
}

#[test]
fn prompts_on_stdin() {
    let home = TempDir::new().unwrap();
    isolated(&home)
        .write_stdin(">=3 !=3\n")
        .assert()
        .success()
        .stdout("Enter version inequalities: >3\n");
}

#[test]
fn empty_line_prints_empty_result() {
    let home = TempDir::new().unwrap();
    isolated(&home)
        .write_stdin("\n")
        .assert()
        .success()
        .stdout("Enter version inequalities: \n");
}

#[test]
fn invalid_requirement_fails() {
    let home = TempDir::new().unwrap();
    isolated(&home)
        .args([">=1", "~2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid requirement '~2'"));
}

#[test]
fn prompt_comes_from_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "[cli]\nprompt = \"constraints> \"\n").unwrap();

    isolated(&home)
        .arg("--config")
        .arg(&config)
        .write_stdin(">=3 <=3.0\n")
        .assert()
        .success()
        .stdout("constraints> ==3\n");
}

#[test]
fn default_config_is_read_from_home() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".reqmin")).unwrap();
    fs::write(
        home.path().join(".reqmin/config.toml"),
        "[cli]\nprompt = \"? \"\n",
    )
    .unwrap();

    isolated(&home)
        .write_stdin("<3.0 <3.1\n")
        .assert()
        .success()
        .stdout("? <3.0\n");
}

#[test]
fn broken_config_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("broken.toml");
    fs::write(&config, "[cli\n").unwrap();

    isolated(&home)
        .args(["--config"])
        .arg(&config)
        .arg("<1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let home = TempDir::new().unwrap();
    isolated(&home)
        .args(["-v", ">=3", "!=3"])
        .assert()
        .success()
        .stdout(">3\n")
        .stderr(predicate::str::contains("parsed 2 requirements"));
}
