use std::process::{Command, Output};

fn decay(args: &[&str]) -> Output {
    decay_with_log(args, None)
}

fn decay_with_log(args: &[&str], level: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_decay"));
    command.args(args);
    match level {
        Some(level) => command.env("DECAY_LOG", level),
        None => command.env_remove("DECAY_LOG"),
    };
    command.output().expect("binary should launch")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn explicit_euler_reference_output() {
    let output = decay(&["1", "1", "1.0"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1.920100e-02\n");
}

#[test]
fn implicit_euler_reference_output() {
    let output = decay(&["2", "1", "1.0"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "1.766385e-02\n");
}

#[test]
fn prints_one_line_for_every_scheme() {
    for scheme in ["1", "2", "3", "4", "5", "6"] {
        let output = decay(&[scheme, "2", "1.0"]);

        assert_eq!(output.status.code(), Some(0), "scheme {scheme}");
        let text = stdout(&output);
        assert_eq!(text.lines().count(), 1, "scheme {scheme}: {text:?}");
        assert!(text.ends_with('\n'));
    }
}

#[test]
fn wrong_argument_count_exits_silently_with_255() {
    for args in [&[][..], &["1", "1"][..], &["1", "1", "1.0", "extra"][..]] {
        let output = decay(args);

        assert_eq!(output.status.code(), Some(255), "args {args:?}");
        assert!(output.stdout.is_empty());
        assert!(output.stderr.is_empty());
    }
}

#[test]
fn out_of_range_scheme_prints_nothing_and_succeeds() {
    for scheme in ["0", "7"] {
        let output = decay(&[scheme, "1", "1.0"]);

        assert_eq!(output.status.code(), Some(0), "scheme {scheme}");
        assert!(output.stdout.is_empty(), "scheme {scheme}");
    }
}

#[test]
fn out_of_range_scheme_ignores_invalid_rate_and_exponent() {
    for args in [["7", "1", "inf"], ["7", "1", "nan"], ["0", "25", "1.0"]] {
        let output = decay(&args);

        assert_eq!(output.status.code(), Some(0), "args {args:?}");
        assert!(output.stdout.is_empty(), "args {args:?}");
    }
}

#[test]
fn out_of_range_scheme_is_silent_when_logging_is_off() {
    let output = decay_with_log(&["7", "1", "1.0"], Some("off"));

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn unparsable_arguments_fail_with_a_message() {
    for args in [["one", "1", "1.0"], ["1", "-1", "1.0"], ["1", "1", "fast"]] {
        let output = decay(&args);

        assert_eq!(output.status.code(), Some(1), "args {args:?}");
        assert!(output.stdout.is_empty());
        assert!(!output.stderr.is_empty());
    }
}

#[test]
fn oversized_exponent_is_rejected() {
    let output = decay(&["1", "20", "1.0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("exponent"));
}

#[test]
fn trace_logging_goes_to_stderr_only() {
    let output = decay_with_log(&["3", "1", "1.0"], Some("trace"));

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "3.068988e-04\n");

    let log = String::from_utf8_lossy(&output.stderr);
    assert!(log.contains("iteration 10:"), "{log}");
}
