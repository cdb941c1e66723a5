use crate::ports::outbound::BuildToolRunner;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;
use std::process::Command;

/// Default install location of the bazel binary inside the build image
pub const DEFAULT_BAZEL_PATH: &str = "/opt/bazel/bin/bazel";

/// Query expression selecting every declared http_archive repository
const DECLARED_QUERY: &str = r#"kind("http_archive", //external:*)"#;

/// BazelCommandRunner adapter for invoking bazel as a subprocess
///
/// This adapter implements the BuildToolRunner port. Both invocations run
/// bazel in `--batch` mode, block until completion, and capture stdout as
/// the report text. A non-zero exit propagates bazel's stderr verbatim.
/// No retries: a single attempt is treated as authoritative.
pub struct BazelCommandRunner {
    bazel_path: PathBuf,
}

impl BazelCommandRunner {
    pub fn new(bazel_path: PathBuf) -> Self {
        Self { bazel_path }
    }

    fn run(&self, query_kind: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.bazel_path)
            .arg("--batch")
            .args(args)
            .output()
            .map_err(|e| SbomError::BuildToolLaunch {
                path: self.bazel_path.clone(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(SbomError::BuildToolFailed {
                query_kind: query_kind.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Derives the expected output filename pattern for a target label.
    ///
    /// The linked binary is named after the label's final component, so
    /// `//:envoy` and `//source/exe:envoy` both map to `.*envoy$`.
    fn output_pattern(target: &str) -> String {
        let short_name = target
            .rsplit(|c| c == ':' || c == '/')
            .next()
            .unwrap_or(target);
        format!(".*{}$", short_name)
    }
}

impl BuildToolRunner for BazelCommandRunner {
    fn query_declared_archives(&self) -> Result<String> {
        self.run("query", &["query", "--output=build", DECLARED_QUERY])
    }

    fn query_link_actions(&self, target: &str) -> Result<String> {
        let expression = format!(
            r#"outputs("{}", {})"#,
            Self::output_pattern(target),
            target
        );
        self.run("aquery", &["aquery", &expression])
    }
}
