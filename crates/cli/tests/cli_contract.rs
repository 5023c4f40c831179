use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;

/// The binary with session settings cleared from the inherited environment.
fn printq() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("printq");
    cmd.env_remove("PRINTQ_FORMAT").env_remove("PRINTQ_STOP_ON_ERROR");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn scenario_text_output() {
    let output = printq()
        .arg("run")
        .arg("--script")
        .arg(fixture("scenario.txt"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("stdout should be utf-8");
    insta::assert_snapshot!("scenario_text_output", stdout);
}

#[test]
fn reads_commands_from_stdin() {
    printq()
        .arg("run")
        .write_stdin("insert Quarterly report 3\ninsert flyer 8\nprocess\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Job \"Quarterly report\" added successfully."))
        .stdout(predicate::str::contains("Processing job: flyer (Priority: 8)"));
}

#[test]
fn json_format_emits_json_lines() {
    let output = printq()
        .arg("run")
        .arg("--format")
        .arg("json")
        .write_stdin("insert A 5\ninsert A 6\nlist\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("stdout should be utf-8");
    let events: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be json"))
        .collect();

    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["event"], "inserted");
    assert_eq!(events[1]["event"], "rejected");
    assert_eq!(events[2]["jobs"][0]["priority"], 5);
}

#[test]
fn format_can_come_from_environment() {
    printq()
        .arg("run")
        .env("PRINTQ_FORMAT", "json")
        .write_stdin("peek\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"event\":\"empty\""));
}

#[test]
fn invalid_environment_fails() {
    printq()
        .arg("run")
        .env("PRINTQ_FORMAT", "xml")
        .write_stdin("peek\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid session configuration"));
}

#[test]
fn rejected_commands_do_not_fail_by_default() {
    printq()
        .arg("run")
        .write_stdin("update ghost 4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: No job found with the name \"ghost\"."));
}

#[test]
fn default_session_output_is_plain_text() {
    printq()
        .arg("run")
        .write_stdin("peek\n")
        .assert()
        .success()
        .stdout("No jobs in the queue.\n");
}

#[test]
fn stop_on_error_exits_non_zero() {
    printq()
        .arg("run")
        .arg("--stop-on-error")
        .write_stdin("insert A 1\ninsert A 2\ninsert B 3\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("\"B\"").not())
        .stderr(predicate::str::contains("stopped after rejected command"));
}

#[test]
fn missing_script_fails() {
    printq()
        .arg("run")
        .arg("--script")
        .arg(fixture("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open script"));
}

#[test]
fn script_from_temp_file() {
    let temp = tempfile::tempdir().expect("temp dir should be created");
    let script = temp.path().join("jobs.txt");
    std::fs::write(&script, "add low -1\nadd high 10\nupdate low 50\ndump\n")
        .expect("script should be written");

    printq()
        .arg("run")
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Current jobs:\nJob name: low, Job priority: 50\nJob name: high, Job priority: 10",
        ));
}

#[test]
fn commands_prints_reference() {
    printq()
        .arg("commands")
        .assert()
        .success()
        .stdout(predicate::str::contains("update <name> <priority>"));
}

#[test]
fn version_prints_crate_version() {
    printq()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
