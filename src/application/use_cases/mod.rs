/// Application use cases
pub mod generate_sbom;

pub use generate_sbom::GenerateSbomUseCase;
