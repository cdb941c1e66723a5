/// Parsers for the two bazel report formats the pipeline consumes
pub mod action_graph;
pub mod build_syntax;
