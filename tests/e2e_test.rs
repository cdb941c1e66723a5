/// End-to-end tests for the CLI
///
/// These tests exercise argument handling and failure paths that do not
/// require a bazel installation.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Exit code 0: --help should return success
#[test]
fn test_exit_code_help() {
    cargo_bin_cmd!("bazel-sbom").arg("--help").assert().code(0);
}

/// Exit code 0: --version should return success
#[test]
fn test_exit_code_version() {
    cargo_bin_cmd!("bazel-sbom").arg("--version").assert().code(0);
}

/// Exit code 1 with a usage message: no arguments
#[test]
fn test_exit_code_missing_arguments() {
    cargo_bin_cmd!("bazel-sbom")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

/// Exit code 1: version argument missing
#[test]
fn test_exit_code_missing_version_argument() {
    cargo_bin_cmd!("bazel-sbom")
        .arg("istio-proxyv2-envoy")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

/// Exit code 1: too many positional arguments
#[test]
fn test_exit_code_extra_arguments() {
    cargo_bin_cmd!("bazel-sbom")
        .args(["envoy", "1.27.5", "surplus"])
        .assert()
        .code(1);
}

/// Exit code 1: unknown option
#[test]
fn test_exit_code_unknown_option() {
    cargo_bin_cmd!("bazel-sbom")
        .args(["envoy", "1.27.5", "--invalid-option"])
        .assert()
        .code(1);
}

/// Exit code 1: build tool cannot be launched
#[test]
fn test_exit_code_missing_bazel_binary() {
    cargo_bin_cmd!("bazel-sbom")
        .args([
            "envoy",
            "1.27.5",
            "--bazel",
            "/nonexistent/path/to/bazel",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to launch build tool"));
}

/// Nothing is written to stdout when the pipeline fails
#[test]
fn test_no_partial_output_on_failure() {
    cargo_bin_cmd!("bazel-sbom")
        .args([
            "envoy",
            "1.27.5",
            "--bazel",
            "/nonexistent/path/to/bazel",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}
