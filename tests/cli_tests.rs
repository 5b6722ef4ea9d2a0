//! Integration tests for the CLI interface
//!
//! Every test points `--config` at a temporary file so the user's real
//! configuration is never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn numerica(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("numerica").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("numerica").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("primes"));
}

#[test]
fn test_calc_division() {
    let dir = TempDir::new().unwrap();
    numerica(&dir)
        .args(["calc", "6", "/", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 2"));
}

#[test]
fn test_calc_negative_operands() {
    let dir = TempDir::new().unwrap();
    numerica(&dir)
        .args(["calc", "-3", "-", "-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: -1"));
}

#[test]
fn test_calc_division_by_zero() {
    let dir = TempDir::new().unwrap();
    numerica(&dir)
        .args(["calc", "5", "/", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Division by zero is not allowed."));
}

#[test]
fn test_calc_non_numeric_operand() {
    let dir = TempDir::new().unwrap();
    numerica(&dir)
        .args(["calc", "abc", "+", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Both inputs must be valid numbers."));
}

#[test]
fn test_calc_invalid_operator() {
    let dir = TempDir::new().unwrap();
    numerica(&dir)
        .args(["calc", "1", "%", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid operation selected."));
}

#[test]
fn test_calc_json_output() {
    let dir = TempDir::new().unwrap();
    let output = numerica(&dir)
        .args(["--format", "json", "calc", "2", "mul", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["result"], serde_json::json!(8.0));
    assert_eq!(value["operator"], "mul");
}

#[test]
fn test_squares_default_sequence() {
    let dir = TempDir::new().unwrap();
    numerica(&dir)
        .arg("squares")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Squares: 1, 4, 9, 16, 25, 36, 49, 64, 81, 100",
        ));
}

#[test]
fn test_squares_explicit_numbers() {
    let dir = TempDir::new().unwrap();
    numerica(&dir)
        .args(["squares", "1", "2", "3", "-4", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Squares: 1, 4, 9, 16, 0.25"));
}

#[test]
fn test_squares_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[squares]\nnumbers = [5.0, 6.0]\n",
    )
    .unwrap();

    numerica(&dir)
        .arg("squares")
        .assert()
        .success()
        .stdout(predicate::str::contains("Squares: 25, 36"));
}

#[test]
fn test_primes_up_to_ten() {
    let dir = TempDir::new().unwrap();
    numerica(&dir)
        .args(["primes", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Primes up to 10: 2, 3, 5, 7"));
}

#[test]
fn test_primes_invalid_bounds() {
    for bound in ["1", "0", "-5", "2.5", "many"] {
        let dir = TempDir::new().unwrap();
        numerica(&dir)
            .args(["primes", bound])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "Please enter a valid number greater than or equal to 2.",
            ));
    }
}

#[test]
fn test_primes_json_output() {
    let dir = TempDir::new().unwrap();
    let output = numerica(&dir)
        .args(["primes", "20", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["bound"], 20);
    assert_eq!(value["primes"], serde_json::json!([2, 3, 5, 7, 11, 13, 17, 19]));
}

#[test]
fn test_primes_check() {
    let dir = TempDir::new().unwrap();
    numerica(&dir)
        .args(["primes", "--check", "97"])
        .assert()
        .success()
        .stdout(predicate::str::contains("97 is prime"));

    numerica(&dir)
        .args(["primes", "--check", "91"])
        .assert()
        .success()
        .stdout(predicate::str::contains("91 is not prime"));
}

#[test]
fn test_config_created_and_shown() {
    let dir = TempDir::new().unwrap();
    numerica(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Numbers"));

    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[squares]\nnumbers = []\n").unwrap();

    numerica(&dir)
        .args(["primes", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("squares.numbers cannot be empty"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("numerica").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
