//! Stable identifiers for lint rules and diagnostic anchors.
//!
//! Rule names are short kebab-case discriminators; they appear verbatim in
//! the bracketed suffix of every diagnostic summary.

// Rules
pub const RULE_DUPLICATE_CLASSES: &str = "dup-classes";

// Synthetic location-anchor identifiers. Downstream consumers key off the
// file path and line only; these two are fixed and never derived from the
// finding. Do not change them.
pub const ANCHOR_DECLARING_SITE: &str = "build";
pub const ANCHOR_ENTRY_POINT: &str = "lint";
