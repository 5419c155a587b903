use std::process::Command;

fn hotsearch() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hotsearch"))
}

#[test]
fn test_unknown_argument_exits_1() {
    let output = hotsearch()
        .arg("--no-such-flag")
        .output()
        .expect("binary runs");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_help_exits_0() {
    let output = hotsearch().arg("--help").output().expect("binary runs");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--log-level"));
}
