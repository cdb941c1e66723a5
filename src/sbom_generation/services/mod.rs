/// Domain services - pure business logic for SBOM assembly
pub mod declared_index;
pub mod purl_builder;
pub mod sbom_generator;
pub mod version_deriver;

pub use declared_index::DeclaredIndex;
pub use purl_builder::PurlBuilder;
pub use sbom_generator::SbomGenerator;
pub use version_deriver::VersionDeriver;
