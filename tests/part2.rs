use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("test_inputs2.txt");

    cmd.assert().success().stdout(str::contains("84462026"));
}

#[test]
fn part2_reject_offset_out_of_signal() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("test_inputs1.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("is out of the real signal"));
}
