use crate::adapters::outbound::process::DEFAULT_BAZEL_PATH;
use clap::Parser;
use std::path::PathBuf;

/// Generate an SPDX SBOM for a Bazel-built binary, covering only the
/// external dependencies actually consumed by its link action
#[derive(Parser, Debug)]
#[command(name = "bazel-sbom")]
#[command(version)]
#[command(about = "Generate an SPDX SBOM for the dependencies linked into a Bazel-built binary", long_about = None)]
pub struct Args {
    /// Name of the artifact being described
    #[arg(value_name = "NAME")]
    pub artifact_name: String,

    /// Version of the artifact being described
    #[arg(value_name = "VERSION")]
    pub artifact_version: String,

    /// Path to the bazel binary
    #[arg(long, default_value = DEFAULT_BAZEL_PATH, value_name = "PATH")]
    pub bazel: PathBuf,

    /// Bazel label of the binary target whose link action is analyzed
    #[arg(long, default_value = "//:envoy", value_name = "LABEL")]
    pub target: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
