use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const DOCUMENT: &str = r#"[97.24, true, {"name": false, "pass": "HelloKitty"}, null]"#;

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write test file");
}

#[test]
fn print_renders_document() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("input.json");
    write_file(&input, DOCUMENT);

    cargo_bin_cmd!("ejson")
        .arg("print")
        .arg(&input)
        .assert()
        .success()
        .stdout("[97.240000, true, {\"name\": false, \"pass\": \"HelloKitty\"}, null]\n");
}

#[test]
fn print_reads_stdin() {
    cargo_bin_cmd!("ejson")
        .arg("print")
        .write_stdin("{ \"a\" : [1,2] }")
        .assert()
        .success()
        .stdout("{\"a\": [1, 2]}\n");
}

#[test]
fn print_with_small_buffer_warns_about_truncation() {
    cargo_bin_cmd!("ejson")
        .args(["print", "--buffer", "5"])
        .write_stdin("[1, 2, 3]")
        .assert()
        .success()
        .stdout("[1, \n")
        .stderr(contains("truncated").and(contains("9 bytes needed")));
}

#[test]
fn print_writes_output_file() {
    let dir = TempDir::new().expect("tempdir");
    let output = dir.path().join("out.json");

    cargo_bin_cmd!("ejson")
        .args(["print", "-", "--output"])
        .arg(&output)
        .write_stdin("true")
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(written, "true\n");
}

#[test]
fn print_single_quotes_need_flag() {
    cargo_bin_cmd!("ejson")
        .arg("print")
        .write_stdin("['x']")
        .assert()
        .failure()
        .stderr(contains("ERROR  Unexpected character '''"));

    cargo_bin_cmd!("ejson")
        .args(["print", "--single-quotes"])
        .write_stdin("['x']")
        .assert()
        .success()
        .stdout("[\"x\"]\n");
}

#[test]
fn print_reports_parse_error() {
    cargo_bin_cmd!("ejson")
        .arg("print")
        .write_stdin("[1, 2")
        .assert()
        .code(1)
        .stderr(contains("ERROR  Source end in array (after value)"));
}

#[test]
fn match_prints_captures_as_json_lines() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("input.json");
    write_file(&input, DOCUMENT);

    cargo_bin_cmd!("ejson")
        .args(["match", "[?, $b, {'pass': $s}, null]"])
        .arg(&input)
        .assert()
        .success()
        .stdout("true\n\"HelloKitty\"\n");
}

#[test]
fn match_reports_no_match() {
    cargo_bin_cmd!("ejson")
        .args(["match", "[$s, ?, ?, ?]"])
        .write_stdin(DOCUMENT)
        .assert()
        .code(1)
        .stderr(contains("no match"));
}

#[test]
fn match_reports_bad_pattern() {
    cargo_bin_cmd!("ejson")
        .args(["match", "[$z, ?, ?, ?]"])
        .write_stdin(DOCUMENT)
        .assert()
        .code(2)
        .stderr(contains("ERROR  bad pattern").and(contains("'z'")));
}
