use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn fft_output_two_messages() {
    let mut cmd = Command::cargo_bin("fft").unwrap();
    cmd.arg("test_inputs2.txt");

    cmd.assert()
        .success()
        .stdout(str::is_match("^[0-9]{8}\n84462026\n$").unwrap());
}

#[test]
fn fft_fail_on_missing_file() {
    let mut cmd = Command::cargo_bin("fft").unwrap();
    cmd.arg("no_such_inputs.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to read input signal"));
}
