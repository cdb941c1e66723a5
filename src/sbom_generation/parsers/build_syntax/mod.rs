//! Parser for the BUILD-syntax output of `bazel query --output=build`.
//!
//! The output is a sequence of repository-rule calls with keyword
//! arguments over a restricted expression grammar (string/int/bool
//! literals, lists, dicts). A proper expression-tree parser is used
//! instead of regular expressions so nested and quoted values are never
//! silently misparsed.
mod lexer;
mod parser;

pub use parser::{parse, Expr, FetchCall};
