/// View representation of a single SPDX package
///
/// One instance per linked dependency that had declared metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageView {
    /// Sequential document-scoped identifier, e.g. "SPDXRef-Package-1"
    pub spdx_id: String,
    /// Repository name from the build graph
    pub name: String,
    /// Heuristically derived version string
    pub version_info: String,
    /// First declared URL, or "NOASSERTION" when none was declared
    pub download_location: String,
    /// Always false; individual files are never analyzed
    pub files_analyzed: bool,
    /// Placeholder license field ("NOASSERTION")
    pub license_concluded: String,
    /// Placeholder license field ("NOASSERTION")
    pub license_declared: String,
    /// Placeholder copyright field ("NOASSERTION")
    pub copyright_text: String,
    /// Package-manager external references (one purl entry)
    pub external_refs: Vec<ExternalRefView>,
}

/// View representation of an SPDX external reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalRefView {
    pub reference_category: String,
    pub reference_type: String,
    pub reference_locator: String,
}
