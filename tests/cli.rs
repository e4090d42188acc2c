//! Process-level CLI tests, following the teacher's `tests/cli/mod.rs`
//! style: `assert_cmd` driving the built binary, `predicates` on its
//! stdout/stderr, `tempfile` for throwaway input directories.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn tempren() -> Command {
    Command::cargo_bin("tempren").unwrap()
}

#[test]
fn version_flag_prints_bare_version() {
    tempren()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0").and(predicate::str::contains("tempren").not()));
}

#[test]
fn help_flag_mentions_usage() {
    tempren()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tempren"));
}

#[test]
fn list_tags_lists_built_ins() {
    tempren()
        .arg("--list-tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("Upper"))
        .stdout(predicate::str::contains("Count"))
        .stdout(predicate::str::contains("Filename"));
}

#[test]
fn missing_template_and_input_exits_with_usage_code() {
    tempren()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("usage: tempren"));
}

#[test]
fn nonexistent_input_directory_is_a_usage_error() {
    tempren()
        .args(["%Filename()", "/does/not/exist/at/all"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("doesn't exists"));
}

#[test]
fn malformed_template_is_a_template_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"x").unwrap();

    tempren()
        .args(["%Unknown(", dir.path().to_str().unwrap()])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template error"));
}

#[test]
fn dry_run_leaves_files_untouched() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"x").unwrap();

    tempren()
        .args(["-d", "%Upper(){%Name()}.%Ext()", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.path().join("a.txt").exists());
    assert!(!dir.path().join("A.txt").exists());
}

#[test]
fn verbose_flag_reports_verbosity_level() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"x").unwrap();

    tempren()
        .args(["-v", "-d", "%Filename()", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Verbosity level set to"));
}

#[test]
fn renames_files_in_place_by_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("report.txt"), b"x").unwrap();

    tempren()
        .args(["%Upper(){%Name()}.%Ext()", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.path().join("REPORT.txt").exists());
    assert!(!dir.path().join("report.txt").exists());
}

#[test]
fn glob_filter_skips_non_matching_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"x").unwrap();
    fs::write(dir.path().join("a.md"), b"x").unwrap();

    tempren()
        .args(["-f", "*.txt", "%Upper(){%Name()}.%Ext()", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.path().join("A.txt").exists());
    assert!(dir.path().join("a.md").exists());
}

#[test]
fn path_mode_creates_intermediate_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"x").unwrap();

    tempren()
        .args(["-p", "archive/%Filename()", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.path().join("archive").join("a.txt").exists());
}

#[test]
fn name_mode_rejects_destination_with_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"x").unwrap();

    // Without -p, a template that looks like a sub-path is just a literal
    // file name containing a path separator component that doesn't exist
    // as a directory, which FileRenamer rejects.
    tempren()
        .args(["archive/%Filename()", dir.path().to_str().unwrap()])
        .assert()
        .code(4);
}

#[test]
fn recursive_flag_descends_into_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("a.txt"), b"x").unwrap();

    tempren()
        .args(["-R", "%Upper(){%Name()}.%Ext()", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.path().join("sub").join("A.txt").exists());
}
