use crate::application::read_models::{
    CreationInfoView, ExternalRefView, PackageView, SpdxDocumentView,
};
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Document {
    #[serde(rename = "spdxVersion")]
    spdx_version: String,
    #[serde(rename = "dataLicense")]
    data_license: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    #[serde(rename = "documentNamespace")]
    document_namespace: String,
    #[serde(rename = "creationInfo")]
    creation_info: CreationInfo,
    packages: Vec<Package>,
}

#[derive(Debug, Serialize)]
struct CreationInfo {
    created: String,
    creators: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Package {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    #[serde(rename = "versionInfo")]
    version_info: String,
    #[serde(rename = "downloadLocation")]
    download_location: String,
    #[serde(rename = "filesAnalyzed")]
    files_analyzed: bool,
    #[serde(rename = "licenseConcluded")]
    license_concluded: String,
    #[serde(rename = "licenseDeclared")]
    license_declared: String,
    #[serde(rename = "copyrightText")]
    copyright_text: String,
    #[serde(rename = "externalRefs")]
    external_refs: Vec<ExternalRef>,
}

#[derive(Debug, Serialize)]
struct ExternalRef {
    #[serde(rename = "referenceCategory")]
    reference_category: String,
    #[serde(rename = "referenceType")]
    reference_type: String,
    #[serde(rename = "referenceLocator")]
    reference_locator: String,
}

/// SpdxFormatter adapter for generating SPDX 2.3 JSON format
///
/// This adapter implements the SbomFormatter port for SPDX format.
pub struct SpdxFormatter;

impl SpdxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxFormatter {
    fn format(&self, document: &SpdxDocumentView) -> Result<String> {
        let document = Document {
            spdx_version: document.spdx_version.clone(),
            data_license: document.data_license.clone(),
            spdx_id: document.spdx_id.clone(),
            name: document.name.clone(),
            document_namespace: document.document_namespace.clone(),
            creation_info: Self::build_creation_info(&document.creation_info),
            packages: document.packages.iter().map(Self::build_package).collect(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

impl SpdxFormatter {
    fn build_creation_info(creation_info: &CreationInfoView) -> CreationInfo {
        CreationInfo {
            created: creation_info.created.clone(),
            creators: creation_info.creators.clone(),
        }
    }

    fn build_package(package: &PackageView) -> Package {
        Package {
            spdx_id: package.spdx_id.clone(),
            name: package.name.clone(),
            version_info: package.version_info.clone(),
            download_location: package.download_location.clone(),
            files_analyzed: package.files_analyzed,
            license_concluded: package.license_concluded.clone(),
            license_declared: package.license_declared.clone(),
            copyright_text: package.copyright_text.clone(),
            external_refs: package
                .external_refs
                .iter()
                .map(Self::build_external_ref)
                .collect(),
        }
    }

    fn build_external_ref(ext_ref: &ExternalRefView) -> ExternalRef {
        ExternalRef {
            reference_category: ext_ref.reference_category.clone(),
            reference_type: ext_ref.reference_type.clone(),
            reference_locator: ext_ref.reference_locator.clone(),
        }
    }
}
