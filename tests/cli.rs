//! End-to-end tests that pipe input into the terminal binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_input(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cmdjack"))
        .args(["--seed", "5", "--no-color"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn invalid_utf8_line_is_rejected_and_play_continues() {
    let output = run_with_input(b"h\xffit\nhelp\nexit\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("unrecognized command"), "{stdout}");
    // The next line is still read and answered.
    assert!(stdout.contains("Commands:"), "{stdout}");
    assert!(stdout.contains("Dealer score: 0"), "{stdout}");
}

#[test]
fn unknown_word_reprompts() {
    let output = run_with_input(b"fold\nhelp stand\nquit\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("unrecognized command: fold"), "{stdout}");
    assert!(stdout.contains("stand, pass:"), "{stdout}");
}

#[test]
fn end_of_input_exits_with_the_score() {
    let output = run_with_input(b"");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Dealer score:"), "{stdout}");
    assert!(stdout.contains("Player score:"), "{stdout}");
}
