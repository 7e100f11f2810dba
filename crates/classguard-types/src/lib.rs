//! Stable DTOs and IDs shared across the classguard workspace.
//!
//! This crate is intentionally boring:
//! - the frozen diagnostic-record wire shape consumed downstream
//! - stable string IDs and anchor constants
//!
//! Downstream automated consumers parse the record fields by position and
//! shape; changing them is a breaking change.

#![forbid(unsafe_code)]

pub mod ids;
pub mod record;

pub use record::{
    DiagnosticRecord, LocationAnchor, Severity, UsageClassification, NO_SOURCE_LINE_DETAIL,
    UNKNOWN_LINE,
};
