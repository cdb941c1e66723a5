use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to launch build tool: {path}\nDetails: {details}\n\n💡 Hint: Please verify that bazel is installed at the expected location, or point --bazel at the correct binary")]
    BuildToolLaunch { path: PathBuf, details: String },

    #[error("bazel {query_kind} failed:\n{stderr}")]
    BuildToolFailed { query_kind: String, stderr: String },

    #[error("Failed to parse bazel query output at line {line}: {details}\n\n💡 Hint: This tool expects the BUILD-syntax output of `bazel query --output=build`")]
    QueryParse { line: usize, details: String },

    #[error("Could not find a Linking action with an Inputs line in the aquery output\n\n💡 Hint: Please verify that the target has been analyzed and produces a linked binary")]
    LinkActionNotFound,

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
