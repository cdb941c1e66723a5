use crate::application::read_models::SpdxDocumentView;
use crate::shared::Result;

/// SbomFormatter port for formatting SBOM output
///
/// This port abstracts the serialization of the assembled document view,
/// keeping the wire format (SPDX 2.3 JSON) out of the application core.
pub trait SbomFormatter {
    /// Formats the SBOM document view into its serialized representation
    ///
    /// # Arguments
    /// * `document` - The assembled SPDX document view
    ///
    /// # Returns
    /// Formatted SBOM content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &SpdxDocumentView) -> Result<String>;
}
