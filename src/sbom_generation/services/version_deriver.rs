use crate::ports::outbound::DiagnosticSink;
use crate::sbom_generation::domain::DeclaredDependency;
use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel returned when no version can be derived from the metadata
pub const UNKNOWN_VERSION: &str = "UNKNOWN";

/// Length of the shortened commit identifier used as a fallback version
const SHORT_COMMIT_LEN: usize = 12;

/// Semantic-version-like substring inside a strip_prefix hint,
/// e.g. "protobuf-3.21.12" or "grpc-1.59.0"
static PREFIX_SEMVER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_]v?(\d+\.\d+(?:\.\d+)?(?:\.\d+)?)").expect("valid pattern"));

/// Date-based version inside a strip_prefix hint, e.g. "re2-2024-07-02"
static PREFIX_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_](\d{4}-\d{2}-\d{2})").expect("valid pattern"));

/// Semantic-version-like path component inside a URL,
/// e.g. "releases/download/v3.21.12/"
static URL_SEMVER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/v?(\d+\.\d+(?:\.\d+)?(?:\.\d+)?)").expect("valid pattern"));

/// Date-based path component inside a URL, e.g. "archive/2024-07-02.tar.gz"
static URL_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/(\d{4}-\d{2}-\d{2})").expect("valid pattern"));

/// Full commit hash pinned in a URL, e.g. "archive/<40 hex chars>.tar.gz"
static URL_COMMIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/([a-f0-9]{40})(?:\.|/)").expect("valid pattern"));

/// VersionDeriver service for heuristic version extraction
///
/// Declared archives carry no explicit version field; the version is
/// recovered from the strip_prefix hint or the download URLs by pattern
/// matching, in a fixed precedence order.
pub struct VersionDeriver;

impl VersionDeriver {
    /// Derives a human-readable version string for a declared dependency.
    ///
    /// Precedence, stopping at the first match:
    /// 1. semantic-version substring in `strip_prefix`
    /// 2. ISO date substring in `strip_prefix`
    /// 3. semantic-version or ISO date path component in each declared
    ///    URL, in declaration order
    /// 4. 40-hex commit hash in a URL, shortened to 12 characters
    ///    (advisory)
    /// 5. the `UNKNOWN` sentinel (advisory)
    pub fn extract_version(dep: &DeclaredDependency, diagnostics: &dyn DiagnosticSink) -> String {
        if let Some(strip_prefix) = dep.strip_prefix() {
            if let Some(caps) = PREFIX_SEMVER.captures(strip_prefix) {
                return caps[1].to_string();
            }
            if let Some(caps) = PREFIX_DATE.captures(strip_prefix) {
                return caps[1].to_string();
            }
        }

        let urls = dep.urls();

        for url in &urls {
            if let Some(caps) = URL_SEMVER.captures(url) {
                return caps[1].to_string();
            }
            if let Some(caps) = URL_DATE.captures(url) {
                return caps[1].to_string();
            }
        }

        for url in &urls {
            if let Some(caps) = URL_COMMIT.captures(url) {
                diagnostics.warn(&format!(
                    "⚠️  Warning: Using commit hash as version for {}",
                    dep.name()
                ));
                return caps[1][..SHORT_COMMIT_LEN].to_string();
            }
        }

        diagnostics.warn(&format!(
            "⚠️  Warning: No version extracted for {}",
            dep.name()
        ));
        UNKNOWN_VERSION.to_string()
    }
}
