//! Structured diagnostics returned by data source operations.
//!
//! Diagnostics are payload, not transport failures. A rejected config still
//! produces a successful response carrying the full set of findings, so a
//! caller can report every problem in one round trip.

use serde::{Deserialize, Serialize};

use outflow_core::validate::{Problem, Severity};
use outflow_core::AppError;

/// A single finding produced while handling a data source operation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Diagnostic {
    /// The severity of the finding.
    pub severity: Severity,
    /// A human readable description of the finding.
    pub summary: String,
    /// Additional detail on the finding, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The dotted path of the config attribute the finding refers to, absent
    /// when the finding applies to the document as a whole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    /// Construct an error diagnostic at the given attribute path.
    pub fn error(summary: impl Into<String>, attribute: Option<String>) -> Self {
        Self { severity: Severity::Error, summary: summary.into(), detail: None, attribute }
    }

    /// Construct a warning diagnostic at the given attribute path.
    pub fn warning(summary: impl Into<String>, attribute: Option<String>) -> Self {
        Self { severity: Severity::Warning, summary: summary.into(), detail: None, attribute }
    }

    /// Check if this diagnostic carries error severity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Map a resource validation finding onto the config document.
    ///
    /// Validation paths are relative to the resource spec and are anchored
    /// under the document's `spec` attribute. Metadata findings already carry
    /// their full path and pass through unchanged.
    pub fn from_problem(problem: Problem) -> Self {
        let attribute = if problem.path.is_empty() {
            "spec".to_string()
        } else if problem.path.starts_with("metadata.") {
            problem.path
        } else {
            format!("spec.{}", problem.path)
        };
        Self { severity: problem.severity, summary: problem.message, detail: None, attribute: Some(attribute) }
    }

    /// Wrap a manifest rendering failure into a diagnostic.
    pub fn from_render_error(err: AppError) -> Self {
        Self {
            severity: Severity::Error,
            summary: "error rendering the manifest".to_string(),
            detail: Some(err.to_string()),
            attribute: None,
        }
    }
}

/// Check if the given diagnostics contain any error severity entries.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_problem_anchors_spec_paths() {
        let diag = Diagnostic::from_problem(Problem::error("s3.aws_key_id", "bad secret"));
        assert!(
            diag.attribute.as_deref() == Some("spec.s3.aws_key_id"),
            "unexpected attribute path, got {:?}, expected {:?}",
            diag.attribute,
            Some("spec.s3.aws_key_id")
        );
    }

    #[test]
    fn from_problem_passes_metadata_paths_through() {
        let diag = Diagnostic::from_problem(Problem::error("metadata.name", "bad name"));
        assert!(
            diag.attribute.as_deref() == Some("metadata.name"),
            "unexpected attribute path, got {:?}, expected {:?}",
            diag.attribute,
            Some("metadata.name")
        );
    }

    #[test]
    fn from_problem_maps_empty_paths_to_spec() {
        let diag = Diagnostic::from_problem(Problem::error("", "no backend"));
        assert!(
            diag.attribute.as_deref() == Some("spec"),
            "unexpected attribute path, got {:?}, expected {:?}",
            diag.attribute,
            Some("spec")
        );
    }

    #[test]
    fn from_render_error_is_an_error_diagnostic() {
        let err = AppError::InvalidInput("boom".to_string());
        let diag = Diagnostic::from_render_error(err);
        assert!(diag.is_error(), "render failures must produce error diagnostics, got {:?}", diag.severity);
        assert!(diag.detail.is_some(), "render failures must carry the source error as detail");
    }
}
