use std::cmp::Ordering;
use std::fmt;

/// Organization + name pair identifying a module irrespective of version.
///
/// Two resolved artifacts of different versions of the same module share a
/// `ModuleId`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId {
    pub organization: String,
    pub name: String,
}

impl ModuleId {
    pub fn new<S: Into<String>>(organization: S, name: S) -> Self {
        Self {
            organization: organization.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.organization, self.name)
    }
}

/// One resolved artifact's provenance: module + version string.
///
/// The derived order (organization, name, version, all lexicographic) is the
/// default comparator; see [`VersionOrdering`] for the semver-aware variant.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleVersionId {
    pub module: ModuleId,
    pub version: String,
}

impl ModuleVersionId {
    pub fn new<S: Into<String>>(organization: S, name: S, version: S) -> Self {
        Self {
            module: ModuleId::new(organization, name),
            version: version.into(),
        }
    }
}

impl fmt::Display for ModuleVersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.version)
    }
}

/// Name of a dependency-resolution context (e.g. "compile", "runtime").
///
/// Duplication is always evaluated within one scope, never across scopes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolutionScope(String);

impl ResolutionScope {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolutionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How version strings are ordered inside the module comparator.
///
/// The comparator decides which side of a conflict is designated the
/// canonical reporter, so the choice is part of detection semantics and must
/// be fixed for a whole detection pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VersionOrdering {
    /// Byte-wise comparison of the version string.
    #[default]
    Lexicographic,
    /// Semver-aware comparison; version strings that do not parse as semver
    /// fall back to byte-wise comparison.
    Semantic,
}

impl VersionOrdering {
    /// Total order over module coordinates: organization, then name, then
    /// version under the configured version ordering.
    pub fn compare(&self, a: &ModuleVersionId, b: &ModuleVersionId) -> Ordering {
        a.module
            .cmp(&b.module)
            .then_with(|| self.compare_versions(&a.version, &b.version))
    }

    fn compare_versions(&self, a: &str, b: &str) -> Ordering {
        match self {
            VersionOrdering::Lexicographic => a.cmp(b),
            VersionOrdering::Semantic => match (semver::Version::parse(a), semver::Version::parse(b))
            {
                // Tie-break on the raw string so the order stays total even
                // when two distinct strings parse to the same version.
                (Ok(va), Ok(vb)) => va.cmp(&vb).then_with(|| a.cmp(b)),
                _ => a.cmp(b),
            },
        }
    }
}
