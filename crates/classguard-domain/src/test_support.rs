use crate::model::{ModuleVersionId, ResolutionScope};
use std::collections::BTreeSet;

pub fn mvid(organization: &str, name: &str, version: &str) -> ModuleVersionId {
    ModuleVersionId::new(organization, name, version)
}

pub fn scope(name: &str) -> ResolutionScope {
    ResolutionScope::new(name)
}

pub fn ignore<const N: usize>(modules: [ModuleVersionId; N]) -> BTreeSet<ModuleVersionId> {
    modules.into_iter().collect()
}
