//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibprime() -> Command {
    Command::cargo_bin("fibprime").expect("binary not found")
}

#[test]
fn help_flag() {
    fibprime()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibprime()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibprime"));
}

#[test]
fn default_bound_quiet() {
    fibprime()
        .arg("-q")
        .env_remove("FIBPRIME_N")
        .assert()
        .success()
        .stdout("2 3 5 13 89 233 1597\n");
}

#[test]
fn bound_from_env() {
    fibprime()
        .arg("-q")
        .env("FIBPRIME_N", "100")
        .assert()
        .success()
        .stdout("2 3 5 13 89\n");
}

#[test]
fn bound_three() {
    fibprime()
        .args(["-n", "3", "-q"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn negative_bound_gives_empty_output() {
    fibprime()
        .args(["-n", "-50", "-q"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn all_generators_compare() {
    fibprime()
        .args(["-n", "100000", "--algo", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("28657"))
        .stdout(predicate::str::contains("Comparison Results"));
}

#[test]
fn details_mode() {
    fibprime()
        .args(["-n", "10000", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Primes considered: 1,229"))
        .stdout(predicate::str::contains("Fibonaccis considered: 20"));
}

#[test]
fn verbose_logs_set_sizes() {
    fibprime()
        .args(["-n", "10000", "-v"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("Intersecting 1229 primes with 20 fibonaccis."));
}

#[test]
fn rust_log_enables_diagnostic_without_verbose() {
    fibprime()
        .args(["-n", "100", "-q"])
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .stdout("2 3 5 13 89\n")
        .stderr(predicate::str::contains("Intersecting 25 primes with 11 fibonaccis."));
}

#[test]
fn quiet_without_rust_log_has_no_diagnostic() {
    fibprime()
        .args(["-n", "100", "-q"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("Intersecting").not());
}

#[test]
fn json_all_generators_parses() {
    let output = fibprime()
        .args(["-n", "100", "--format", "json", "--algo", "all"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["values"], serde_json::json!([2, 3, 5, 13, 89]));
    let comparison = v["comparison"].as_array().unwrap();
    assert_eq!(comparison.len(), 3);
    assert!(comparison.iter().all(|run| run["ok"] == true));
}

#[test]
fn primes_all_generators_compare() {
    fibprime()
        .args(["-n", "30", "--sequence", "primes", "--algo", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("primes below 30: 2 3 5 7 11 13 17 19 23 29"))
        .stdout(predicate::str::contains("Comparison Results"));
}

#[test]
fn primes_sequence() {
    fibprime()
        .args(["-n", "30", "--sequence", "primes", "--algo", "trial", "-q"])
        .assert()
        .success()
        .stdout("2 3 5 7 11 13 17 19 23 29\n");
}

#[test]
fn fibonacci_sequence() {
    fibprime()
        .args(["-n", "1", "--sequence", "fibonacci", "-q"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn json_output() {
    let output = fibprime()
        .args(["-n", "1000", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["bound"], 1000);
    assert_eq!(v["primes_considered"], 168);
    assert_eq!(v["values"], serde_json::json!([2, 3, 5, 13, 89, 233]));
}

#[test]
fn output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fp.txt");
    fibprime()
        .args(["-n", "100", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "2 3 5 13 89\n");
}

#[test]
fn invalid_algo() {
    fibprime()
        .args(["--algo", "invalid"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown generator: invalid"));
}

#[test]
fn sieve_rejects_huge_bound() {
    fibprime()
        .args(["-n", "100000001", "--algo", "sieve"])
        .assert()
        .code(4);
}

#[test]
fn bash_completion() {
    fibprime()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibprime"));
}
