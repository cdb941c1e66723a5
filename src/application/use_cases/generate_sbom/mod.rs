use crate::application::dto::{SbomRequest, SbomResponse};
use crate::ports::outbound::{BuildToolRunner, DiagnosticSink};
use crate::sbom_generation::domain::DeclaredDependency;
use crate::sbom_generation::parsers::{action_graph, build_syntax};
use crate::sbom_generation::services::{DeclaredIndex, SbomGenerator};
use crate::shared::Result;
use std::collections::BTreeMap;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// This use case orchestrates the linear pipeline: query the declared
/// archives, query the link action, intersect, and assemble the SPDX
/// document. Infrastructure is injected through generic type parameters.
///
/// # Type Parameters
/// * `R` - BuildToolRunner implementation
/// * `D` - DiagnosticSink implementation
pub struct GenerateSbomUseCase<R, D> {
    build_tool_runner: R,
    diagnostics: D,
}

impl<R, D> GenerateSbomUseCase<R, D>
where
    R: BuildToolRunner,
    D: DiagnosticSink,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(build_tool_runner: R, diagnostics: D) -> Self {
        Self {
            build_tool_runner,
            diagnostics,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Arguments
    /// * `request` - SBOM generation request carrying the artifact
    ///   identity and the build target
    ///
    /// # Returns
    /// SbomResponse containing the assembled SPDX document view
    ///
    /// # Errors
    /// Fails if either bazel invocation exits non-zero, if the query
    /// output does not parse, or if no Linking action can be located.
    /// Missing metadata for individual dependencies is advisory only.
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        let declared = self.extract_declared_dependencies()?;
        let linked = self.extract_linked_dependencies(&request.target)?;

        self.diagnostics.report("📝 Generating SPDX document...");
        let metadata =
            SbomGenerator::generate_metadata(&request.artifact_name, &request.artifact_version);
        let document =
            SbomGenerator::generate_document(&linked, &declared, &metadata, &self.diagnostics);

        self.diagnostics.report(&format!(
            "✅ Document contains {} package(s) with metadata",
            document.packages.len()
        ));

        Ok(SbomResponse::new(document))
    }

    /// Runs the dependency query and parses it into the declared map
    fn extract_declared_dependencies(&self) -> Result<BTreeMap<String, DeclaredDependency>> {
        self.diagnostics
            .report("🔍 Running bazel query for declared http_archive dependencies...");

        let query_output = self.build_tool_runner.query_declared_archives()?;
        let calls = build_syntax::parse(&query_output)?;
        let declared = DeclaredIndex::build(calls);

        self.diagnostics.report(&format!(
            "✅ Found {} declared dependencies",
            declared.len()
        ));

        Ok(declared)
    }

    /// Runs the action-graph query and extracts the linked name set
    fn extract_linked_dependencies(&self, target: &str) -> Result<Vec<String>> {
        self.diagnostics.report(&format!(
            "🔗 Running bazel aquery for the link action of {}...",
            target
        ));

        let aquery_output = self.build_tool_runner.query_link_actions(target)?;
        let linked = action_graph::extract_linked_dependencies(&aquery_output)?;

        self.diagnostics.report(&format!(
            "✅ Found {} linked external dependencies",
            linked.len()
        ));

        Ok(linked)
    }
}
