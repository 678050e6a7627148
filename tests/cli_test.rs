use assert_cmd::cargo;
use predicates::prelude::*;

#[tokio::test]
async fn test_cli_help() {
    let mut cmd = cargo::cargo_bin_cmd!("scorely");
    let assert = cmd.arg("--help").assert();

    // On Windows, the binary name in help might be "scorely.exe"
    let expected_pattern = if cfg!(windows) {
        "scorely.exe [OPTIONS] <INPUT>"
    } else {
        "scorely [OPTIONS] <INPUT>"
    };

    assert
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains(expected_pattern));
}

#[tokio::test]
async fn test_cli_missing_input_fails() {
    let mut cmd = cargo::cargo_bin_cmd!("scorely");
    cmd.arg("dosya-yok.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
