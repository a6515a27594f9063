#![cfg(feature = "cli")]
use assert_cmd::Command;
use insta::assert_snapshot;
use rstest::rstest;
use std::fs;
use tempfile::tempdir;

fn fixture_path(stem: &str) -> String {
    format!("tests/fixtures/avsc/{stem}.avsc")
}

fn run_fixture(stem: &str) -> String {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join(format!("{stem}.avsc"));
    let output_path = dir.path().join(format!("{stem}.graphql"));

    let schema = fs::read_to_string(fixture_path(stem)).unwrap();
    fs::write(&input_path, schema).unwrap();

    Command::cargo_bin("avsc2graphql")
        .unwrap()
        .arg(input_path.to_str().unwrap())
        .arg(output_path.to_str().unwrap())
        .assert()
        .success();

    fs::read_to_string(&output_path).unwrap()
}

#[rstest]
#[case("primitives")]
#[case("enums_reuse")]
#[case("unions")]
#[case("entity")]
fn cli_fixtures(#[case] stem: &str) {
    let output = run_fixture(stem);
    assert_snapshot!(stem, output);
}

#[test]
fn stdout_matches_file_output() {
    let written = run_fixture("entity");

    let assert = Command::cargo_bin("avsc2graphql")
        .unwrap()
        .arg(fixture_path("entity"))
        .assert()
        .success();
    let printed = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert_eq!(printed, written);
}

#[test]
fn unsupported_type_exits_with_error() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("unsupported.graphql");

    let assert = Command::cargo_bin("avsc2graphql")
        .unwrap()
        .arg(fixture_path("unsupported"))
        .arg(output_path.to_str().unwrap())
        .assert()
        .failure()
        .code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();

    assert!(stderr.contains("Error: type {\"type\":\"fixed\""), "{stderr}");
    assert!(!output_path.exists());
}

#[test]
fn missing_input_exits_with_error() {
    let assert = Command::cargo_bin("avsc2graphql")
        .unwrap()
        .arg("tests/fixtures/avsc/does_not_exist.avsc")
        .assert()
        .failure()
        .code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();

    assert!(stderr.contains("Error: IO error"), "{stderr}");
}
