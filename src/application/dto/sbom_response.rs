use crate::application::read_models::SpdxDocumentView;

/// SbomResponse - Result DTO of the SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// The assembled SPDX document, ready for formatting
    pub document: SpdxDocumentView,
}

impl SbomResponse {
    pub fn new(document: SpdxDocumentView) -> Self {
        Self { document }
    }
}
