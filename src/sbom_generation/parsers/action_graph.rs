use crate::shared::error::SbomError;
use crate::shared::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Matches the first Linking action block and captures its bracketed
/// Inputs list. The aquery report looks like:
///
/// ```text
/// action 'Linking envoy'
///   Mnemonic: CppLink
///   Target: //:envoy
///   ...
///   Inputs: [bazel-out/k8-opt/bin/source/common/libcommon.a, external/boringssl/libssl.a, ...]
/// ```
static LINKING_INPUTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)action 'Linking [^']*'.*?\n\s*Inputs: \[([^\]]+)\]")
        .expect("linking inputs pattern is valid")
});

/// Matches an `external/<name>` path segment within an input path
static EXTERNAL_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|/)external/([^/]+)").expect("external segment pattern is valid"));

/// Toolchain repositories are build-time infrastructure, never linked
/// runtime code
const TOOLCHAIN_PREFIX: &str = "llvm_toolchain";

/// Well-known build-infrastructure repository names excluded from the
/// linked set
const INFRA_NAMES: [&str; 2] = ["bazel_tools", "local_config_cc"];

/// Extracts the set of externally-declared dependency names whose files
/// were consumed by the link action in the given aquery report.
///
/// The scan is deliberately narrow: locate the first `Linking` action
/// block, take its comma-separated `Inputs` list, and collect the child
/// segment of every `external/<child>` occurrence. Toolchain and
/// build-infrastructure names are filtered out. The result is sorted
/// ascending for deterministic output.
///
/// # Errors
/// Returns `SbomError::LinkActionNotFound` if no Linking action block
/// with an Inputs list is present in the report.
pub fn extract_linked_dependencies(report: &str) -> Result<Vec<String>> {
    let inputs = LINKING_INPUTS
        .captures(report)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .ok_or(SbomError::LinkActionNotFound)?;

    let mut names = BTreeSet::new();
    for input_path in inputs.split(',') {
        let input_path = input_path.trim();
        if input_path.is_empty() {
            continue;
        }
        for caps in EXTERNAL_SEGMENT.captures_iter(input_path) {
            names.insert(caps[1].to_string());
        }
    }

    Ok(names
        .into_iter()
        .filter(|name| !name.starts_with(TOOLCHAIN_PREFIX))
        .filter(|name| !INFRA_NAMES.contains(&name.as_str()))
        .collect())
}
