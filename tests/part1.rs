use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("test_inputs1.txt");

    cmd.assert().success().stdout(str::contains("24176176"));
}

#[test]
fn part1_reject_invalid_signal() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("test_inputs3.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid character(x)"));
}

#[test]
fn part1_reject_short_signal() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("test_inputs4.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Given signal is too short(5)"));
}
