/// Formatter adapters for SBOM serialization
mod spdx_formatter;

pub use spdx_formatter::SpdxFormatter;
