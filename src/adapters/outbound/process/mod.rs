/// Process adapters for external build tool invocation
mod bazel_runner;

pub use bazel_runner::{BazelCommandRunner, DEFAULT_BAZEL_PATH};
