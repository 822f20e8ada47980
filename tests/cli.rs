use std::fs;
use std::process::{Command, Output};

use bayesian_trap::report::LABELS;
use tempfile::tempdir;

fn run_cli(args: &[&str]) -> Output {
    let tmp = tempdir().expect("temporary directory");
    let exe = env!("CARGO_BIN_EXE_bayesian-trap");
    let output = Command::new(exe)
        .current_dir(tmp.path())
        .args(args)
        .output()
        .expect("run bayesian-trap cli");

    let leftovers = fs::read_dir(tmp.path())
        .expect("read temporary directory")
        .count();
    assert_eq!(leftovers, 0, "the simulator must not write files");

    output
}

#[test]
fn cli_prints_six_labeled_fields_in_order() {
    let output = run_cli(&["20000", "0.01", "0.05", "0.01", "--seed", "7"]);
    assert!(output.status.success(), "CLI exited with {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), LABELS.len(), "unexpected report:\n{stdout}");

    for (line, label) in lines.iter().zip(LABELS) {
        let (found, value) = line.split_once(": ").expect("label: value");
        assert_eq!(found, label);
        if label == "sample size" {
            assert_eq!(value, "20000");
        } else {
            value.parse::<f64>().expect("numeric statistic");
        }
    }
}

#[test]
fn cli_is_reproducible_with_a_seed() {
    let args = ["1000", "0.2", "0.1", "0.1", "--seed", "99"];
    let first = run_cli(&args);
    let second = run_cli(&args);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn cli_handles_an_empty_sample() {
    let output = run_cli(&["0", "0.5", "0.5", "0.5"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.starts_with("sample size: 0"));
    assert_eq!(stdout.matches("undefined").count(), 5);
}

#[test]
fn cli_rejects_out_of_range_rates() {
    let output = run_cli(&["100", "1.0001", "0.05", "0.01"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("base_rate"), "stderr was: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_rejects_negative_rates_as_invalid_parameters() {
    let output = run_cli(&["100", "0.01", "-0.0001", "0.01"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("false_pos"), "stderr was: {stderr}");
}

#[test]
fn cli_rejects_malformed_arguments_as_usage_errors() {
    for args in [
        &["many", "0.01", "0.05", "0.01"][..],
        &["100", "rare", "0.05", "0.01"][..],
        &["-5", "0.01", "0.05", "0.01"][..],
        &["100", "0.01", "0.05"][..],
    ] {
        let output = run_cli(args);
        assert_eq!(output.status.code(), Some(2), "args {args:?}");
        let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
        assert!(stderr.contains("error"), "stderr was: {stderr}");
    }
}
