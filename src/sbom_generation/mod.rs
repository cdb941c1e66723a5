/// SBOM generation - domain models, report parsers, and assembly services
pub mod domain;
pub mod parsers;
pub mod services;
