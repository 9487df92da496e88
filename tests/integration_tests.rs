use chrono::Datelike;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{builtin_output, rsm};

#[test]
fn test_report_with_pinned_year() {
    rsm()
        .args(["--year", "2020"])
        .assert()
        .success()
        .stdout(builtin_output(2020));
}

#[test]
fn test_report_uses_system_clock() {
    let year = chrono::Local::now().year();

    rsm()
        .assert()
        .success()
        .stdout(contains("2001-2003: Babylon Software"))
        .stdout(contains("2012-    : CS, Space Dpt"))
        .stdout(contains(format!(
            "{} years of professional experience",
            year - 2001
        )));
}

#[test]
fn test_unknown_arguments_are_ignored() {
    rsm()
        .args(["whatever", "--verbose", "-x"])
        .assert()
        .success()
        .stdout(contains("2012-    : CS, Space Dpt"))
        .stdout(contains("years of professional experience"));
}

#[test]
fn test_extreme_year_falls_back_to_system_clock() {
    let year = chrono::Local::now().year();

    rsm()
        .arg("--year=-2147483648")
        .assert()
        .success()
        .stdout(builtin_output(year));
}

#[test]
fn test_help_flag_still_prints_report() {
    rsm()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("2001-2003: Babylon Software"))
        .stdout(contains("Usage").not());
}

#[test]
fn test_clock_failure_exits_non_zero() {
    rsm()
        .arg("--no-clock")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("Error: Failed to retrieve local time"));
}

#[test]
fn test_output_is_stable_across_runs() {
    let first = rsm().args(["--year", "2031"]).output().expect("run");
    let second = rsm().args(["--year", "2031"]).output().expect("run");

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
