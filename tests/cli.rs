use std::process::Command;

fn run_script(script: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_setlang")).arg(script)
                                               .output()
                                               .expect("Failed to run the interpreter binary")
}

#[test]
fn valid_script_prints_and_exits_zero() {
    let output = run_script("print 2 + 3;");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "5");
}

#[test]
fn malformed_script_exits_nonzero() {
    let output = run_script("set 5 x;");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn runtime_errors_go_to_stderr_and_exit_zero() {
    let output = run_script("print 4 / 0; print 2;");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Divide by zero"));
}
