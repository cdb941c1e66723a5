//! bazel-sbom - SBOM generation tool for Bazel builds
//!
//! This library derives a Software Bill of Materials (SBOM) for a
//! Bazel-built binary by intersecting the externally fetched archives
//! declared in the build graph with the archives whose files were
//! actually consumed by the binary's link action, and emitting an
//! SPDX 2.3 document describing only the dependencies that truly ended
//! up in the artifact.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): report parsers and pure
//!   assembly logic
//! - **Application Layer** (`application`): use cases and read models
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bazel_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let runner = BazelCommandRunner::new(PathBuf::from("/opt/bazel/bin/bazel"));
//! let diagnostics = StderrDiagnosticSink::new();
//! let use_case = GenerateSbomUseCase::new(runner, diagnostics);
//!
//! let request = SbomRequest::new(
//!     "istio-proxyv2-envoy".to_string(),
//!     "1.27.5".to_string(),
//!     "//:envoy".to_string(),
//! );
//! let response = use_case.execute(request)?;
//!
//! let formatter = SpdxFormatter::new();
//! let output = formatter.format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrDiagnosticSink;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::SpdxFormatter;
    pub use crate::adapters::outbound::process::{BazelCommandRunner, DEFAULT_BAZEL_PATH};
    pub use crate::application::dto::{SbomRequest, SbomResponse};
    pub use crate::application::read_models::{PackageView, SpdxDocumentView};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        BuildToolRunner, DiagnosticSink, OutputPresenter, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{AttrValue, DeclaredDependency, SbomMetadata};
    pub use crate::sbom_generation::services::{
        DeclaredIndex, PurlBuilder, SbomGenerator, VersionDeriver,
    };
    pub use crate::shared::Result;
}
