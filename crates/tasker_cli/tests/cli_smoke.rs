use std::io::Write;
use std::process::{Command, Stdio};

fn run_tasker_with_args(args: &[&str], input: &str) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_tasker");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tasker");

    {
        let stdin = child.stdin.as_mut().expect("stdin");
        stdin
            .write_all(input.as_bytes())
            .expect("failed to write to stdin");
    }

    child.wait_with_output().expect("failed to read output")
}

fn run_tasker(input: &str) -> std::process::Output {
    run_tasker_with_args(&["--plain"], input)
}

#[test]
fn exiting_immediately_prints_the_farewell() {
    let output = run_tasker("0\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Task Manager ==="));
    assert!(stdout.contains("Hello User"));
    assert!(stdout.contains("Exiting..."));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn greeting_uses_the_name_flag() {
    let output = run_tasker_with_args(&["--plain", "--name", "Ada"], "0\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hello Ada"));
}

#[test]
fn out_of_range_menu_choice_reasks() {
    let output = run_tasker("9\n0\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enter a number between 0 and 3."));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn non_numeric_menu_choice_reasks() {
    let output = run_tasker("abc\n0\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enter a valid number."));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn fractional_menu_choice_truncates_toward_zero() {
    // 0.9 truncates to 0, which exits
    let output = run_tasker("0.9\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Exiting..."));
}

#[test]
fn closed_stdin_mid_prompt_is_a_fatal_error() {
    let output = run_tasker("");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: io_error"));
}

#[test]
fn themed_session_emits_ansi_escapes() {
    let output = run_tasker_with_args(&["--theme", "noir"], "0\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\x1b[38;5;208m"));
}

#[test]
fn plain_session_emits_no_ansi_escapes() {
    let output = run_tasker("0\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn help_runs_without_stdin() {
    let output = run_tasker_with_args(&["--help"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage") || stdout.contains("USAGE"));
}
