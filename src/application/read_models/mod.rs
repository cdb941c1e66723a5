//! Read models for the assembled SBOM document
//!
//! These structs aggregate the document data in an output-optimized
//! format, decoupling formatters from the domain layer.
mod package_view;
mod spdx_document_view;

pub use package_view::{ExternalRefView, PackageView};
pub use spdx_document_view::{CreationInfoView, SpdxDocumentView};
