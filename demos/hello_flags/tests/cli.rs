//! Runs the compiled `hello_flags` binary end to end.
//!
//! Uses `assert_cmd` to invoke the binary with different flag sets and checks
//! what it prints.

use anyhow::{Result, ensure};
use assert_cmd::Command;
use rstest::rstest;

fn hello_flags() -> Result<Command> {
    #[expect(deprecated, reason = "cargo_bin is the standard assert_cmd API")]
    let mut cmd = Command::cargo_bin("hello_flags")?;
    cmd.env_remove("HELLO_FLAGS_STRICT");
    cmd.env_remove("RUST_LOG");
    cmd.env("RUST_BACKTRACE", "0");
    Ok(cmd)
}

#[rstest]
#[case::no_arguments(&[], "Hello, World!\n")]
#[case::named(&["--name", "Ada", "Lovelace"], "Hello, Ada Lovelace!\n")]
#[case::unknown_flags_ignored(&["--colour=red", "--name=Ada"], "Hello, Ada!\n")]
#[case::ports(&["--port", "80", "bad", "0o17"], "Hello, World!\nports: 80, 15\n")]
fn prints_greeting(#[case] args: &[&str], #[case] expected: &str) -> Result<()> {
    let output = hello_flags()?.args(args).output()?;
    ensure!(output.status.success(), "binary failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    ensure!(stdout == expected, "unexpected stdout: {stdout:?}");
    Ok(())
}

#[rstest]
fn strict_mode_reports_unknown_flags() -> Result<()> {
    let output = hello_flags()?
        .env("HELLO_FLAGS_STRICT", "1")
        .args(["--colour", "red"])
        .output()?;
    ensure!(!output.status.success(), "strict run should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    ensure!(
        stderr.contains("argument 'colour' was not bound"),
        "unexpected stderr: {stderr}"
    );
    ensure!(output.stdout.is_empty(), "nothing should be printed");
    Ok(())
}

#[rstest]
fn strict_mode_accepts_clean_input() -> Result<()> {
    let output = hello_flags()?
        .env("HELLO_FLAGS_STRICT", "true")
        .args(["--greeting", "Hi", "--repeat", "2"])
        .output()?;
    ensure!(output.status.success(), "strict run failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    ensure!(stdout == "Hi, World!\nHi, World!\n", "unexpected stdout: {stdout:?}");
    Ok(())
}
