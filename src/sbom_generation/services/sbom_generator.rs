use crate::application::read_models::{
    CreationInfoView, ExternalRefView, PackageView, SpdxDocumentView,
};
use crate::ports::outbound::DiagnosticSink;
use crate::sbom_generation::domain::{DeclaredDependency, SbomMetadata};
use crate::sbom_generation::services::purl_builder::PurlBuilder;
use crate::sbom_generation::services::version_deriver::VersionDeriver;
use chrono::Utc;
use std::collections::BTreeMap;

/// SPDX format version emitted in the document header
const SPDX_VERSION: &str = "SPDX-2.3";

/// License of the SBOM document itself
const DATA_LICENSE: &str = "CC0-1.0";

/// Creator identity recorded in the document header
const CREATOR: &str = "Organization: Docker, Inc.";

/// Sentinel for fields the tool makes no assertion about
const NO_ASSERTION: &str = "NOASSERTION";

/// SbomGenerator service for assembling the SPDX document
///
/// This service contains pure business logic: it intersects the linked
/// set with the declared metadata map and emits one package record per
/// surviving dependency.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates document metadata with the current timestamp
    ///
    /// # Arguments
    /// * `artifact_name` - Name of the artifact being described
    /// * `artifact_version` - Version of the artifact being described
    pub fn generate_metadata(artifact_name: &str, artifact_version: &str) -> SbomMetadata {
        SbomMetadata::new(
            artifact_name.to_string(),
            artifact_version.to_string(),
            Utc::now().to_rfc3339(),
            CREATOR.to_string(),
        )
    }

    /// Assembles the full SPDX document view.
    ///
    /// Iterates the linked set in sorted order; a linked name with no
    /// declared metadata produces an advisory and is skipped, never a
    /// failure. Package identifiers are 1-based and allocated only for
    /// packages that are actually emitted.
    pub fn generate_document(
        linked: &[String],
        declared: &BTreeMap<String, DeclaredDependency>,
        metadata: &SbomMetadata,
        diagnostics: &dyn DiagnosticSink,
    ) -> SpdxDocumentView {
        let mut packages = Vec::new();

        for name in linked {
            let Some(dep) = declared.get(name) else {
                diagnostics.warn(&format!(
                    "⚠️  Warning: No metadata found for {}. Skipping.",
                    name
                ));
                continue;
            };

            packages.push(Self::build_package(dep, packages.len() + 1, diagnostics));
        }

        SpdxDocumentView {
            spdx_version: SPDX_VERSION.to_string(),
            data_license: DATA_LICENSE.to_string(),
            spdx_id: format!("SPDXRef-{}", metadata.artifact_name()),
            name: format!(
                "SPDX document for {} {}",
                metadata.artifact_name(),
                metadata.artifact_version()
            ),
            document_namespace: format!(
                "{}-{}",
                metadata.artifact_name(),
                metadata.artifact_version()
            ),
            creation_info: CreationInfoView {
                created: metadata.timestamp().to_string(),
                creators: vec![metadata.creator().to_string()],
            },
            packages,
        }
    }

    fn build_package(
        dep: &DeclaredDependency,
        index: usize,
        diagnostics: &dyn DiagnosticSink,
    ) -> PackageView {
        let version = VersionDeriver::extract_version(dep, diagnostics);
        let purl = PurlBuilder::create_purl(dep, &version, diagnostics);
        let download_location = dep
            .urls()
            .first()
            .cloned()
            .unwrap_or_else(|| NO_ASSERTION.to_string());

        PackageView {
            spdx_id: format!("SPDXRef-Package-{}", index),
            name: dep.name().to_string(),
            version_info: version,
            download_location,
            files_analyzed: false,
            license_concluded: NO_ASSERTION.to_string(),
            license_declared: NO_ASSERTION.to_string(),
            copyright_text: NO_ASSERTION.to_string(),
            external_refs: vec![ExternalRefView {
                reference_category: "PACKAGE-MANAGER".to_string(),
                reference_type: "purl".to_string(),
                reference_locator: purl,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::AttrValue;
    use std::cell::RefCell;

    struct RecordingSink {
        warnings: RefCell<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                warnings: RefCell::new(Vec::new()),
            }
        }
    }

    impl DiagnosticSink for RecordingSink {
        fn report(&self, _message: &str) {}

        fn warn(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    fn metadata() -> SbomMetadata {
        SbomMetadata::new(
            "istio-proxyv2-envoy".to_string(),
            "1.27.5".to_string(),
            "2024-01-01T00:00:00+00:00".to_string(),
            "Organization: Docker, Inc.".to_string(),
        )
    }

    fn declared(entries: Vec<(&str, Vec<(&str, AttrValue)>)>) -> BTreeMap<String, DeclaredDependency> {
        entries
            .into_iter()
            .map(|(name, attrs)| {
                let attributes = attrs
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect();
                (
                    name.to_string(),
                    DeclaredDependency::new(name.to_string(), attributes),
                )
            })
            .collect()
    }

    #[test]
    fn test_generate_metadata_has_timestamp_and_creator() {
        let metadata = SbomGenerator::generate_metadata("envoy", "1.27.5");
        assert_eq!(metadata.artifact_name(), "envoy");
        assert_eq!(metadata.artifact_version(), "1.27.5");
        assert_eq!(metadata.creator(), "Organization: Docker, Inc.");
        // RFC3339 format contains 'T' and timezone info
        assert!(metadata.timestamp().contains('T'));
    }

    #[test]
    fn test_document_header_fields() {
        let sink = RecordingSink::new();
        let document =
            SbomGenerator::generate_document(&[], &BTreeMap::new(), &metadata(), &sink);

        assert_eq!(document.spdx_version, "SPDX-2.3");
        assert_eq!(document.data_license, "CC0-1.0");
        assert_eq!(document.spdx_id, "SPDXRef-istio-proxyv2-envoy");
        assert_eq!(
            document.name,
            "SPDX document for istio-proxyv2-envoy 1.27.5"
        );
        assert_eq!(document.document_namespace, "istio-proxyv2-envoy-1.27.5");
        assert_eq!(document.creation_info.created, "2024-01-01T00:00:00+00:00");
        assert_eq!(
            document.creation_info.creators,
            vec!["Organization: Docker, Inc.".to_string()]
        );
        assert!(document.packages.is_empty());
    }

    #[test]
    fn test_package_record_contents() {
        let sink = RecordingSink::new();
        let declared = declared(vec![(
            "com_github_google_re2",
            vec![
                (
                    "strip_prefix",
                    AttrValue::String("re2-2024-07-02".to_string()),
                ),
                (
                    "urls",
                    AttrValue::List(vec![
                        "https://github.com/google/re2/archive/2024-07-02.tar.gz".to_string(),
                    ]),
                ),
            ],
        )]);
        let linked = vec!["com_github_google_re2".to_string()];

        let document = SbomGenerator::generate_document(&linked, &declared, &metadata(), &sink);

        assert_eq!(document.packages.len(), 1);
        let package = &document.packages[0];
        assert_eq!(package.spdx_id, "SPDXRef-Package-1");
        assert_eq!(package.name, "com_github_google_re2");
        assert_eq!(package.version_info, "2024-07-02");
        assert_eq!(
            package.download_location,
            "https://github.com/google/re2/archive/2024-07-02.tar.gz"
        );
        assert!(!package.files_analyzed);
        assert_eq!(package.license_concluded, "NOASSERTION");
        assert_eq!(package.license_declared, "NOASSERTION");
        assert_eq!(package.copyright_text, "NOASSERTION");
        assert_eq!(package.external_refs.len(), 1);
        let ext_ref = &package.external_refs[0];
        assert_eq!(ext_ref.reference_category, "PACKAGE-MANAGER");
        assert_eq!(ext_ref.reference_type, "purl");
        assert_eq!(
            ext_ref.reference_locator,
            "pkg:github/google/re2@2024-07-02"
        );
    }

    #[test]
    fn test_linked_without_metadata_is_skipped_with_advisory() {
        let sink = RecordingSink::new();
        let declared = declared(vec![(
            "zlib",
            vec![(
                "strip_prefix",
                AttrValue::String("zlib-1.3.1".to_string()),
            )],
        )]);
        let linked = vec!["undeclared_dep".to_string(), "zlib".to_string()];

        let document = SbomGenerator::generate_document(&linked, &declared, &metadata(), &sink);

        assert_eq!(document.packages.len(), 1);
        assert_eq!(document.packages[0].name, "zlib");
        let warnings = sink.warnings.borrow();
        assert!(warnings
            .iter()
            .any(|w| w.contains("No metadata found for undeclared_dep")));
    }

    #[test]
    fn test_package_indices_are_contiguous_after_skips() {
        let sink = RecordingSink::new();
        let declared = declared(vec![
            (
                "abseil",
                vec![(
                    "strip_prefix",
                    AttrValue::String("abseil-cpp-20240116.0".to_string()),
                )],
            ),
            (
                "zlib",
                vec![(
                    "strip_prefix",
                    AttrValue::String("zlib-1.3.1".to_string()),
                )],
            ),
        ]);
        let linked = vec![
            "abseil".to_string(),
            "missing_one".to_string(),
            "zlib".to_string(),
        ];

        let document = SbomGenerator::generate_document(&linked, &declared, &metadata(), &sink);

        assert_eq!(document.packages.len(), 2);
        assert_eq!(document.packages[0].spdx_id, "SPDXRef-Package-1");
        assert_eq!(document.packages[1].spdx_id, "SPDXRef-Package-2");
    }

    #[test]
    fn test_no_urls_download_location_is_noassertion() {
        let sink = RecordingSink::new();
        let declared = declared(vec![(
            "local_archive",
            vec![(
                "strip_prefix",
                AttrValue::String("local-1.0.0".to_string()),
            )],
        )]);
        let linked = vec!["local_archive".to_string()];

        let document = SbomGenerator::generate_document(&linked, &declared, &metadata(), &sink);

        assert_eq!(document.packages[0].download_location, "NOASSERTION");
    }
}
