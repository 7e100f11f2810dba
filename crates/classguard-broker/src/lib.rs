//! Bridge between lint findings and the host's progress/telemetry channel.
//!
//! There is an implicit contract between the record formats produced here
//! and the export of lint violations to downstream metrics. All formatting
//! lives in [`build::build_record`] so a format change is a single,
//! auditable edit point.

#![forbid(unsafe_code)]

pub mod build;
pub mod context;
pub mod emit;

pub use build::build_record;
pub use context::LintViolation;
pub use emit::{broadcast, DiagnosticEmitter, RecordingEmitter};
