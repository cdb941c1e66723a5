use crate::shared::Result;

/// BuildToolRunner port for invoking the external build tool
///
/// This port abstracts the two bazel invocations the pipeline depends on,
/// so the parsing and assembly logic can be tested against canned report
/// text without a bazel installation.
pub trait BuildToolRunner {
    /// Runs the dependency query for all declared http_archive repositories
    ///
    /// # Returns
    /// The raw stdout of `bazel query --output=build` as a string
    ///
    /// # Errors
    /// Returns an error if the tool cannot be launched or exits non-zero;
    /// the tool's captured stderr is propagated in the error message
    fn query_declared_archives(&self) -> Result<String>;

    /// Runs the action-graph query for the link action of the given target
    ///
    /// # Arguments
    /// * `target` - Bazel label of the binary target (e.g. `//:envoy`)
    ///
    /// # Returns
    /// The raw stdout of `bazel aquery` as a string
    ///
    /// # Errors
    /// Returns an error if the tool cannot be launched or exits non-zero;
    /// the tool's captured stderr is propagated in the error message
    fn query_link_actions(&self, target: &str) -> Result<String>;
}
