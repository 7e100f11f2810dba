use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Detail text used when no source line is known for a finding.
pub const NO_SOURCE_LINE_DETAIL: &str = "Refer to the full lint report for more details";

/// Line value recorded on the anchor when no line number is known. The
/// anchor is still emitted, because the downstream consumer expects exactly
/// one anchor entry per record.
pub const UNKNOWN_LINE: i64 = -1;

/// Severity is intentionally small: it maps cleanly to CI signals.
///
/// The lowercase display form is part of the frozen summary format
/// (`[{rule}:{severity}]`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// Whether a finding points at a specific line the user wrote, or at the
/// invocation/configuration as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UsageClassification {
    DirectUserUsage,
    InvocationLevel,
}

/// Synthetic frame pointing a diagnostic at its source.
///
/// `declaring_site` and `entry_point` are fixed constants (see
/// [`crate::ids`]); only `file_path` and `line` carry information. The path
/// is absolute when a source file is known and empty otherwise; `line` is
/// [`UNKNOWN_LINE`] when no line number is known.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LocationAnchor {
    pub declaring_site: String,
    pub entry_point: String,
    pub file_path: String,
    pub line: i64,
}

/// A single lint finding in the frozen format handed to the host's
/// progress/telemetry emitter.
///
/// The summary format is `Lint rule was violated: {message}
/// [{rule}:{severity}]` and the bracketed suffix position is load-bearing:
/// metrics pipelines parse it. Tread with care.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticRecord {
    pub summary: String,
    pub detail: String,
    pub classification: UsageClassification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_link: Option<String>,
    pub location_anchor: LocationAnchor,
}
