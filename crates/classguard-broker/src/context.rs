use camino::Utf8PathBuf;
use classguard_domain::Violation;
use classguard_types::{ids, Severity};

/// A generic lint finding, as handed over by whichever rule produced it.
///
/// `line_number` drives the record classification; `source_line` is the text
/// of that line when the rule captured it. Both are independent because a
/// rule may know the line number without holding the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LintViolation {
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    pub source_path: Option<Utf8PathBuf>,
    pub line_number: Option<u32>,
    pub source_line: Option<String>,
    pub documentation_uri: Option<String>,
}

impl LintViolation {
    /// A finding with no source location, attributed to the invocation as a
    /// whole.
    pub fn invocation_level<S: Into<String>>(rule: S, severity: Severity, message: S) -> Self {
        Self {
            rule: rule.into(),
            severity,
            message: message.into(),
            source_path: None,
            line_number: None,
            source_line: None,
            documentation_uri: None,
        }
    }
}

impl From<&Violation> for LintViolation {
    /// Duplicate-class findings carry no source location; they classify as
    /// invocation-level.
    fn from(violation: &Violation) -> Self {
        LintViolation::invocation_level(
            ids::RULE_DUPLICATE_CLASSES.to_string(),
            Severity::Warning,
            violation.message.clone(),
        )
    }
}
