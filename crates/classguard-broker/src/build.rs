use crate::context::LintViolation;
use classguard_types::{
    ids, DiagnosticRecord, LocationAnchor, UsageClassification, NO_SOURCE_LINE_DETAIL,
    UNKNOWN_LINE,
};

/// Convert a lint finding into the frozen diagnostic-record format.
///
/// Total: every field has a defined fallback, so building never fails.
///
/// Do not change the position or format of the rule name and severity in
/// brackets; downstream consumers parse the summary by shape.
pub fn build_record(violation: &LintViolation) -> DiagnosticRecord {
    let summary = format!(
        "Lint rule was violated: {} [{}:{}]",
        violation.message, violation.rule, violation.severity
    );
    let detail = match &violation.source_line {
        Some(line) => format!("Source line: {line}"),
        None => NO_SOURCE_LINE_DETAIL.to_string(),
    };
    let classification = if violation.line_number.is_some() {
        UsageClassification::DirectUserUsage
    } else {
        UsageClassification::InvocationLevel
    };

    DiagnosticRecord {
        summary,
        detail,
        classification,
        documentation_link: violation.documentation_uri.clone(),
        location_anchor: LocationAnchor {
            declaring_site: ids::ANCHOR_DECLARING_SITE.to_string(),
            entry_point: ids::ANCHOR_ENTRY_POINT.to_string(),
            file_path: violation
                .source_path
                .as_ref()
                .map(|path| path.to_string())
                .unwrap_or_default(),
            line: violation.line_number.map(i64::from).unwrap_or(UNKNOWN_LINE),
        },
    }
}
