/// SbomRequest - Internal request DTO for SBOM generation use case
///
/// This DTO represents the internal request structure used within
/// the application layer. It may differ from the external CLI surface.
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Name of the artifact the document describes
    pub artifact_name: String,
    /// Version of the artifact the document describes
    pub artifact_version: String,
    /// Bazel label of the binary target whose link action is analyzed
    pub target: String,
}

impl SbomRequest {
    pub fn new(artifact_name: String, artifact_version: String, target: String) -> Self {
        Self {
            artifact_name,
            artifact_version,
            target,
        }
    }
}
