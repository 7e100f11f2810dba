use crate::index::{ClassOwnershipIndex, OwnershipIndexError};
use crate::model::{ModuleVersionId, ResolutionScope, VersionOrdering};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Class names that never participate in duplication detection. Every
/// artifact of a non-trivial classpath carries these.
pub const BLACKLISTED_CLASSES: [&str; 2] = ["package-info", "module-info"];

/// One directional duplicate-class finding.
///
/// `subject` and `conflicting` are never equal, never share a [`crate::ModuleId`],
/// and neither belongs to the ignore set of the detection call that produced
/// the violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub subject: ModuleVersionId,
    pub scope: ResolutionScope,
    pub conflicting: ModuleVersionId,
    pub duplicated_class_names: BTreeSet<String>,
    pub message: String,
}

/// Detects classes duplicated across independently-resolved artifacts within
/// one resolution scope.
///
/// For any unordered pair of conflicting modules, only the smallest key of
/// the conflict map under the module comparator emits; viewed from the other
/// module the conflict map keys and their minimum are identical, so the pair
/// is reported exactly once per pass. This canonical-reporter rule is the
/// sole deduplication mechanism; there is no mutable "already reported"
/// state, which keeps detection safe to run concurrently.
pub struct DuplicateDetector<'a, I: ClassOwnershipIndex> {
    index: &'a I,
    ordering: VersionOrdering,
}

impl<'a, I: ClassOwnershipIndex> DuplicateDetector<'a, I> {
    pub fn new(index: &'a I) -> Self {
        Self::with_ordering(index, VersionOrdering::default())
    }

    pub fn with_ordering(index: &'a I, ordering: VersionOrdering) -> Self {
        Self { index, ordering }
    }

    /// Violations attributable to `module` within `scope`.
    ///
    /// An ignored or unindexed module yields an empty result, not an error.
    /// An unknown scope propagates as [`OwnershipIndexError::UnknownScope`].
    pub fn detect(
        &self,
        module: &ModuleVersionId,
        scope: &ResolutionScope,
        ignored: &BTreeSet<ModuleVersionId>,
    ) -> Result<Vec<Violation>, OwnershipIndexError> {
        if ignored.contains(module) {
            return Ok(Vec::new());
        }
        let Some(own_classes) = self.index.classes_for_module(scope, module)? else {
            return Ok(Vec::new());
        };

        // Conflict map: owning module version -> class names it shares with
        // the subject. Owners of a kept entry are recorded even when they
        // are other versions of the subject's own module; ignored owners are
        // left out entirely so they can neither report, be reported, nor
        // capture canonical-reporter status.
        let mut conflicts: BTreeMap<&ModuleVersionId, BTreeSet<&str>> = BTreeMap::new();
        for (class_name, owners) in self.index.owners_by_class(scope)? {
            if !own_classes.contains(class_name)
                || BLACKLISTED_CLASSES.contains(&class_name.as_str())
            {
                continue;
            }
            // Versions of the subject's own module reaching the scope
            // through extended configurations are conflict-resolved away
            // anyway; an entry only counts when some other module owns it.
            let genuine = owners
                .iter()
                .any(|owner| !ignored.contains(owner) && owner.module != module.module);
            if !genuine {
                continue;
            }
            for owner in owners {
                if ignored.contains(owner) {
                    continue;
                }
                conflicts
                    .entry(owner)
                    .or_default()
                    .insert(class_name.as_str());
            }
        }
        if conflicts.is_empty() {
            return Ok(Vec::new());
        }

        let canonical = conflicts
            .keys()
            .min_by(|a, b| self.ordering.compare(a, b))
            .copied();
        if canonical != Some(module) {
            return Ok(Vec::new());
        }

        let mut violations = Vec::new();
        for (other, classes) in &conflicts {
            if other.module == module.module {
                continue;
            }
            let message = format!(
                "{module} in {scope} has {} classes duplicated by {other}",
                classes.len()
            );
            debug!(subject = %module, conflicting = %other, "{message}. Duplicate classes: {classes:?}");
            violations.push(Violation {
                subject: module.clone(),
                scope: scope.clone(),
                conflicting: (*other).clone(),
                duplicated_class_names: classes.iter().map(|c| (*c).to_string()).collect(),
                message: format!("{message} (enable debug logging for the detailed class list)"),
            });
        }
        Ok(violations)
    }

    /// Batched form of [`detect`](Self::detect): equivalent to concatenating
    /// per-module results in input order.
    pub fn detect_all(
        &self,
        modules: &[ModuleVersionId],
        scope: &ResolutionScope,
        ignored: &BTreeSet<ModuleVersionId>,
    ) -> Result<Vec<Violation>, OwnershipIndexError> {
        let mut violations = Vec::new();
        for module in modules {
            violations.extend(self.detect(module, scope, ignored)?);
        }
        Ok(violations)
    }
}
