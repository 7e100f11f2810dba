//! Pure duplicate-class detection (no IO).
//!
//! Input: a read-only class-ownership index constructed elsewhere, plus a
//! module coordinate, a resolution scope, and a set of ignored coordinates.
//! Output: zero or more violations, each conflicting pair reported by
//! exactly one side.

#![forbid(unsafe_code)]

pub mod detect;
pub mod index;
pub mod model;

pub use detect::{DuplicateDetector, Violation, BLACKLISTED_CLASSES};
pub use index::{ClassOwnershipIndex, InMemoryClassIndex, OwnershipIndexError};
pub use model::{ModuleId, ModuleVersionId, ResolutionScope, VersionOrdering};

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
