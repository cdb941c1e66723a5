/// Document-level metadata for the generated SPDX document
///
/// Carries the artifact identity supplied on the command line together
/// with the creation timestamp and creator identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomMetadata {
    artifact_name: String,
    artifact_version: String,
    timestamp: String,
    creator: String,
}

impl SbomMetadata {
    pub fn new(
        artifact_name: String,
        artifact_version: String,
        timestamp: String,
        creator: String,
    ) -> Self {
        Self {
            artifact_name,
            artifact_version,
            timestamp,
            creator,
        }
    }

    pub fn artifact_name(&self) -> &str {
        &self.artifact_name
    }

    pub fn artifact_version(&self) -> &str {
        &self.artifact_version
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_accessors() {
        let metadata = SbomMetadata::new(
            "istio-proxyv2-envoy".to_string(),
            "1.27.5".to_string(),
            "2024-01-01T00:00:00+00:00".to_string(),
            "Organization: Docker, Inc.".to_string(),
        );

        assert_eq!(metadata.artifact_name(), "istio-proxyv2-envoy");
        assert_eq!(metadata.artifact_version(), "1.27.5");
        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00+00:00");
        assert_eq!(metadata.creator(), "Organization: Docker, Inc.");
    }
}
