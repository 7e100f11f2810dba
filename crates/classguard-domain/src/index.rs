use crate::model::{ModuleVersionId, ResolutionScope};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Errors surfaced by a class-ownership index provider.
///
/// Absence of a module in a known scope is *not* an error (the detector
/// treats it as a skip signal); asking about a scope the index was never
/// built for is a caller error and must not be masked as an empty result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OwnershipIndexError {
    #[error("unknown resolution scope '{scope}'")]
    UnknownScope { scope: String },
    #[error("class ownership index unavailable: {0}")]
    Unavailable(String),
}

/// Read-only lookup of class ownership within resolution scopes, built
/// before detection runs.
///
/// The index is injected so the detector can run against the host's
/// dependency-metadata service in production and an in-memory fixture in
/// tests.
pub trait ClassOwnershipIndex {
    /// Class names contributed by `module` within `scope`, or `None` when
    /// the module is not indexed there (unresolved or classless).
    fn classes_for_module(
        &self,
        scope: &ResolutionScope,
        module: &ModuleVersionId,
    ) -> Result<Option<&BTreeSet<String>>, OwnershipIndexError>;

    /// For each class name in `scope`, the module versions whose resolved
    /// artifacts contain a class of that name.
    fn owners_by_class(
        &self,
        scope: &ResolutionScope,
    ) -> Result<&BTreeMap<String, BTreeSet<ModuleVersionId>>, OwnershipIndexError>;
}

#[derive(Clone, Debug, Default)]
struct ScopeIndex {
    classes_by_module: BTreeMap<ModuleVersionId, BTreeSet<String>>,
    owners_by_class: BTreeMap<String, BTreeSet<ModuleVersionId>>,
}

/// In-memory [`ClassOwnershipIndex`] keeping both lookup directions in sync.
///
/// Serves as the fixture for detector tests and as a ready adapter for hosts
/// that materialize their ownership data up front.
#[derive(Clone, Debug, Default)]
pub struct InMemoryClassIndex {
    scopes: BTreeMap<ResolutionScope, ScopeIndex>,
}

impl InMemoryClassIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scope with no contents yet. Useful to distinguish "scope
    /// exists but is empty" from "unknown scope".
    pub fn add_scope(&mut self, scope: ResolutionScope) -> &mut Self {
        self.scopes.entry(scope).or_default();
        self
    }

    /// Record that `module` contributes `classes` within `scope`.
    pub fn add_module<I, S>(
        &mut self,
        scope: &ResolutionScope,
        module: ModuleVersionId,
        classes: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.scopes.entry(scope.clone()).or_default();
        let owned = entry.classes_by_module.entry(module.clone()).or_default();
        for class in classes {
            let class = class.into();
            entry
                .owners_by_class
                .entry(class.clone())
                .or_default()
                .insert(module.clone());
            owned.insert(class);
        }
        self
    }

    fn scope(&self, scope: &ResolutionScope) -> Result<&ScopeIndex, OwnershipIndexError> {
        self.scopes
            .get(scope)
            .ok_or_else(|| OwnershipIndexError::UnknownScope {
                scope: scope.as_str().to_string(),
            })
    }
}

impl ClassOwnershipIndex for InMemoryClassIndex {
    fn classes_for_module(
        &self,
        scope: &ResolutionScope,
        module: &ModuleVersionId,
    ) -> Result<Option<&BTreeSet<String>>, OwnershipIndexError> {
        Ok(self.scope(scope)?.classes_by_module.get(module))
    }

    fn owners_by_class(
        &self,
        scope: &ResolutionScope,
    ) -> Result<&BTreeMap<String, BTreeSet<ModuleVersionId>>, OwnershipIndexError> {
        Ok(&self.scope(scope)?.owners_by_class)
    }
}
