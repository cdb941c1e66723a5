/// Domain models for SBOM generation
mod declared_dependency;
mod sbom_metadata;

pub use declared_dependency::{AttrValue, DeclaredDependency};
pub use sbom_metadata::SbomMetadata;
