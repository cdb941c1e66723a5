use super::package_view::PackageView;

/// Main read model for the assembled SPDX document
///
/// This struct provides a denormalized, output-ready view of the
/// document that formatters consume without touching domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpdxDocumentView {
    /// SPDX format version, e.g. "SPDX-2.3"
    pub spdx_version: String,
    /// License of the document itself, e.g. "CC0-1.0"
    pub data_license: String,
    /// Document identifier, e.g. "SPDXRef-<artifact name>"
    pub spdx_id: String,
    /// Human-readable document name
    pub name: String,
    /// Document namespace derived from the artifact name and version
    pub document_namespace: String,
    /// Creation metadata
    pub creation_info: CreationInfoView,
    /// Ordered package list
    pub packages: Vec<PackageView>,
}

/// View representation of SPDX creation metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationInfoView {
    /// Creation timestamp
    pub created: String,
    /// Creator identities, e.g. "Organization: Docker, Inc."
    pub creators: Vec<String>,
}
