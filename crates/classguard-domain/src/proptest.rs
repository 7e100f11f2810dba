//! Property-based tests for the detection engine.
//!
//! These verify the invariants the canonical-reporter rule must uphold over
//! arbitrary ownership indexes:
//! - a conflicting pair is never reported from both sides
//! - ignored modules neither report nor get reported
//! - blacklisted class names never appear in a violation

use crate::detect::{DuplicateDetector, BLACKLISTED_CLASSES};
use crate::index::InMemoryClassIndex;
use crate::model::{ModuleVersionId, ResolutionScope};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

const CLASS_POOL: [&str; 6] = ["Foo", "Bar", "Baz", "Qux", "package-info", "module-info"];

fn arb_version() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("1.0".to_string()),
        Just("2.0".to_string()),
        Just("10.0".to_string()),
        Just("0.9-rc1".to_string()),
    ]
}

fn arb_module_version() -> impl Strategy<Value = ModuleVersionId> {
    (
        prop::sample::select(vec!["com.a", "org.b"]),
        prop::sample::select(vec!["m0", "m1", "m2"]),
        arb_version(),
    )
        .prop_map(|(organization, name, version)| {
            ModuleVersionId::new(organization.to_string(), name.to_string(), version)
        })
}

fn arb_classes() -> impl Strategy<Value = BTreeSet<String>> {
    prop::sample::subsequence(CLASS_POOL.to_vec(), 0..=CLASS_POOL.len())
        .prop_map(|classes| classes.into_iter().map(str::to_string).collect())
}

/// A small arbitrary scope population: distinct module versions, each with
/// an arbitrary class set.
fn arb_population() -> impl Strategy<Value = BTreeMap<ModuleVersionId, BTreeSet<String>>> {
    prop::collection::btree_map(arb_module_version(), arb_classes(), 1..6)
}

fn build_index(
    scope: &ResolutionScope,
    population: &BTreeMap<ModuleVersionId, BTreeSet<String>>,
) -> InMemoryClassIndex {
    let mut index = InMemoryClassIndex::new();
    index.add_scope(scope.clone());
    for (module, classes) in population {
        index.add_module(scope, module.clone(), classes.iter().cloned());
    }
    index
}

fn shared_non_blacklisted(a: &BTreeSet<String>, b: &BTreeSet<String>) -> BTreeSet<String> {
    a.intersection(b)
        .filter(|class| !BLACKLISTED_CLASSES.contains(&class.as_str()))
        .cloned()
        .collect()
}

proptest! {
    /// Two non-ignored modules of different identity sharing at least one
    /// non-blacklisted class produce exactly one directional violation, from
    /// the comparator-smaller side.
    #[test]
    fn isolated_pair_is_reported_exactly_once(
        a in arb_module_version(),
        b in arb_module_version(),
        classes_a in arb_classes(),
        classes_b in arb_classes(),
    ) {
        prop_assume!(a.module != b.module);

        let scope = ResolutionScope::new("compile");
        let population: BTreeMap<_, _> =
            [(a.clone(), classes_a.clone()), (b.clone(), classes_b.clone())].into();
        let index = build_index(&scope, &population);
        let detector = DuplicateDetector::new(&index);

        let ignored = BTreeSet::new();
        let from_a = detector.detect(&a, &scope, &ignored).unwrap();
        let from_b = detector.detect(&b, &scope, &ignored).unwrap();

        let shared = shared_non_blacklisted(&classes_a, &classes_b);
        if shared.is_empty() {
            prop_assert!(from_a.is_empty());
            prop_assert!(from_b.is_empty());
        } else {
            prop_assert_eq!(from_a.len() + from_b.len(), 1);
            let violation = from_a.first().or(from_b.first()).unwrap();
            let expected_subject = if a < b { &a } else { &b };
            prop_assert_eq!(&violation.subject, expected_subject);
            prop_assert_eq!(&violation.duplicated_class_names, &shared);
        }
    }

    /// Over a full pass, no unordered pair is ever reported from both sides,
    /// and every emitted violation honors the ignore set, the blacklist, and
    /// the different-module invariant.
    #[test]
    fn full_pass_invariants(
        population in arb_population(),
        ignored_picks in prop::collection::vec(any::<prop::sample::Index>(), 0..3),
    ) {
        let scope = ResolutionScope::new("compile");
        let modules: Vec<ModuleVersionId> = population.keys().cloned().collect();
        let ignored: BTreeSet<ModuleVersionId> = ignored_picks
            .iter()
            .map(|pick| pick.get(&modules).clone())
            .collect();

        let index = build_index(&scope, &population);
        let detector = DuplicateDetector::new(&index);
        let violations = detector.detect_all(&modules, &scope, &ignored).unwrap();

        let mut reported_pairs: BTreeSet<(ModuleVersionId, ModuleVersionId)> = BTreeSet::new();
        for violation in &violations {
            prop_assert_ne!(&violation.subject, &violation.conflicting);
            prop_assert_ne!(&violation.subject.module, &violation.conflicting.module);
            prop_assert!(!ignored.contains(&violation.subject));
            prop_assert!(!ignored.contains(&violation.conflicting));
            for class in &violation.duplicated_class_names {
                prop_assert!(!BLACKLISTED_CLASSES.contains(&class.as_str()));
            }

            let mut pair = [violation.subject.clone(), violation.conflicting.clone()];
            pair.sort();
            let [small, large] = pair;
            prop_assert!(
                reported_pairs.insert((small, large)),
                "pair reported more than once: {} / {}",
                violation.subject,
                violation.conflicting
            );
        }
    }

    /// Batched detection is exactly the concatenation of per-module calls in
    /// input order.
    #[test]
    fn detect_all_is_concatenation(population in arb_population()) {
        let scope = ResolutionScope::new("compile");
        let modules: Vec<ModuleVersionId> = population.keys().cloned().collect();
        let index = build_index(&scope, &population);
        let detector = DuplicateDetector::new(&index);

        let ignored = BTreeSet::new();
        let batched = detector.detect_all(&modules, &scope, &ignored).unwrap();
        let concatenated: Vec<_> = modules
            .iter()
            .flat_map(|module| detector.detect(module, &scope, &ignored).unwrap())
            .collect();
        prop_assert_eq!(batched, concatenated);
    }
}
