use crate::ports::outbound::DiagnosticSink;
use crate::sbom_generation::domain::DeclaredDependency;
use once_cell::sync::Lazy;
use regex::Regex;

/// GitHub-style org/repo path inside a declared URL
static GITHUB_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/([^/]+)/([^/]+)").expect("valid pattern"));

/// PurlBuilder service for deriving canonical package locators
///
/// Produces a purl (package URL) external reference for each package:
/// GitHub-hosted archives get a `pkg:github` locator, everything else
/// falls back to the generic type keyed by the repository name.
pub struct PurlBuilder;

impl PurlBuilder {
    /// Builds the purl for a dependency using its own derived version.
    ///
    /// Scans the declared URLs in order for a `github.com/<org>/<repo>`
    /// path; the first match wins. When no GitHub-style URL is declared,
    /// an advisory is emitted and a `pkg:generic/<name>@<version>`
    /// locator is returned instead.
    pub fn create_purl(
        dep: &DeclaredDependency,
        version: &str,
        diagnostics: &dyn DiagnosticSink,
    ) -> String {
        for url in dep.urls() {
            if let Some(caps) = GITHUB_PATH.captures(&url) {
                return format!("pkg:github/{}/{}@{}", &caps[1], &caps[2], version);
            }
        }

        diagnostics.warn(&format!(
            "⚠️  Warning: Using generic purl for {}",
            dep.name()
        ));
        format!("pkg:generic/{}@{}", dep.name(), version)
    }
}
