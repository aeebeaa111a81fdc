//! Static validation of logging resources.
//!
//! Validation never short-circuits. Every check runs and every finding is
//! collected, so callers can surface the full set of problems in one pass.

use lazy_static::lazy_static;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::{ClusterFlow, ClusterOutput, Flow, Output, RequiredMetadata};

lazy_static! {
    /// Regular expression used to validate object names, RFC 1123 DNS labels.
    static ref RE_NAME: Regex = Regex::new(r"^[a-z0-9]([-a-z0-9]{0,61}[a-z0-9])?$").expect("failed to compile RE_NAME regex");
}

const ERR_NO_BACKEND: &str = "no backend is configured, exactly one backend block is required";

/// The severity of a validation finding.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The finding rejects the object.
    Error,
    /// The finding is advisory, the object is still accepted.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Error => "error",
                Self::Warning => "warning",
            }
        )
    }
}

/// A single validation finding.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct Problem {
    /// The severity of the finding.
    pub severity: Severity,
    /// The dotted path of the config field the finding refers to, empty
    /// when the finding applies to the object as a whole.
    pub path: String,
    /// A human readable description of the finding.
    pub message: String,
}

impl Problem {
    /// Construct an error finding at the given path.
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, path: path.into(), message: message.into() }
    }

    /// Construct a warning finding at the given path.
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, path: path.into(), message: message.into() }
    }
}

/// Check if the given findings contain any error severity entries.
pub fn has_errors(problems: &[Problem]) -> bool {
    problems.iter().any(|problem| problem.severity == Severity::Error)
}

/// Validate an object name as an RFC 1123 DNS label.
pub fn validate_name(name: &str) -> Option<Problem> {
    if RE_NAME.is_match(name) {
        return None;
    }
    Some(Problem::error(
        "metadata.name",
        format!("name `{}` is invalid, must match the pattern `{}`", name, RE_NAME.as_str()),
    ))
}

/// Validate an Output resource.
pub fn validate_output(output: &Output) -> Vec<Problem> {
    let mut problems = Vec::new();
    if let Some(problem) = validate_name(output.name()) {
        problems.push(problem);
    }
    validate_output_backends(&output.spec, &mut problems);
    problems
}

/// Validate a ClusterOutput resource.
pub fn validate_cluster_output(output: &ClusterOutput) -> Vec<Problem> {
    let mut problems = Vec::new();
    if let Some(problem) = validate_name(output.name()) {
        problems.push(problem);
    }
    validate_output_backends(&output.spec.output_spec, &mut problems);
    if let Some(namespaces) = &output.spec.enabled_namespaces {
        for (idx, namespace) in namespaces.iter().enumerate() {
            if !RE_NAME.is_match(namespace) {
                problems.push(Problem::error(
                    format!("enabledNamespaces.{}", idx),
                    format!(
                        "namespace `{}` is invalid, must match the pattern `{}`",
                        namespace,
                        RE_NAME.as_str()
                    ),
                ));
            }
        }
    }
    problems
}

/// Validate a Flow resource.
pub fn validate_flow(flow: &Flow) -> Vec<Problem> {
    let mut problems = Vec::new();
    if let Some(problem) = validate_name(flow.name()) {
        problems.push(problem);
    }
    validate_output_refs(flow.spec.output_refs.as_deref(), &mut problems);
    if let Some(filters) = &flow.spec.filters {
        for (idx, filter) in filters.iter().enumerate() {
            validate_filter_plugins(&filter.active_plugins(), idx, &mut problems);
        }
    }
    problems
}

/// Validate a ClusterFlow resource.
pub fn validate_cluster_flow(flow: &ClusterFlow) -> Vec<Problem> {
    let mut problems = Vec::new();
    if let Some(problem) = validate_name(flow.name()) {
        problems.push(problem);
    }
    validate_output_refs(flow.spec.output_refs.as_deref(), &mut problems);
    if let Some(filters) = &flow.spec.filters {
        for (idx, filter) in filters.iter().enumerate() {
            validate_filter_plugins(&filter.active_plugins(), idx, &mut problems);
        }
    }
    problems
}

/// Validate the backend blocks of an output spec.
///
/// Exactly one backend block must be configured. Secrets carrying more than
/// one value source are flagged as warnings, the manifest still renders and
/// the logging operator resolves the reference over the inline value.
fn validate_output_backends(spec: &crate::crd::OutputSpec, problems: &mut Vec<Problem>) {
    let active = spec.active_backends();
    match active.len() {
        0 => problems.push(Problem::error("", ERR_NO_BACKEND)),
        1 => (),
        _ => problems.push(Problem::error(
            "",
            format!(
                "multiple backends are configured ({}), exactly one backend block is required",
                active.join(", ")
            ),
        )),
    }
    for (path, secret) in spec.secrets() {
        if secret.is_ambiguous() {
            problems.push(Problem::warning(
                path,
                "secret carries both an inline value and a reference, the reference wins",
            ));
        }
    }
}

fn validate_output_refs(output_refs: Option<&[String]>, problems: &mut Vec<Problem>) {
    let refs = match output_refs {
        Some(refs) if !refs.is_empty() => refs,
        _ => {
            problems.push(Problem::warning(
                "outputRefs",
                "no outputs are referenced, selected events will be dropped",
            ));
            return;
        }
    };
    for (idx, name) in refs.iter().enumerate() {
        if !RE_NAME.is_match(name) {
            problems.push(Problem::error(
                format!("outputRefs.{}", idx),
                format!("output name `{}` is invalid, must match the pattern `{}`", name, RE_NAME.as_str()),
            ));
        }
    }
}

fn validate_filter_plugins(active: &[&'static str], idx: usize, problems: &mut Vec<Problem>) {
    match active.len() {
        0 => problems.push(Problem::error(
            format!("filters.{}", idx),
            "no filter plugin is configured, exactly one plugin block is required",
        )),
        1 => (),
        _ => problems.push(Problem::error(
            format!("filters.{}", idx),
            format!(
                "multiple filter plugins are configured ({}), exactly one plugin block is required",
                active.join(", ")
            ),
        )),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::crd::backends::{NullOutputConfig, S3OutputConfig};
    use crate::crd::{OutputSpec, Secret};

    macro_rules! name_test {
        ($name:ident, $input:literal, $expect:literal) => {
            #[test]
            fn $name() {
                let output = validate_name($input).is_none();
                assert!(
                    $expect == output,
                    "expected validity `{}` did not match actual validity `{}` for name `{}`",
                    $expect,
                    output,
                    $input,
                );
            }
        };
    }

    name_test!(name_simple, "demo", true);
    name_test!(name_with_dashes, "demo-output-1", true);
    name_test!(name_single_char, "a", true);
    name_test!(name_max_len, "abcdefghijklmnopqrstuvwxyz-abcdefghijklmnopqrstuvwxyz-abc12345", true);
    name_test!(name_empty, "", false);
    name_test!(name_uppercase, "Demo", false);
    name_test!(name_leading_dash, "-demo", false);
    name_test!(name_trailing_dash, "demo-", false);
    name_test!(name_with_dots, "demo.output", false);
    name_test!(name_with_underscore, "demo_output", false);

    fn output_with_spec(spec: OutputSpec) -> Output {
        Output::new("demo", spec)
    }

    #[test]
    fn output_without_backend_is_rejected() {
        let output = output_with_spec(OutputSpec::default());
        let problems = validate_output(&output);
        assert!(has_errors(&problems), "expected an error finding, got {:?}", problems);
        assert_eq!(problems[0].message, ERR_NO_BACKEND, "unexpected finding message");
    }

    #[test]
    fn output_with_single_backend_is_accepted() {
        let output = output_with_spec(OutputSpec {
            nullout: Some(NullOutputConfig {}),
            ..Default::default()
        });
        let problems = validate_output(&output);
        assert!(problems.is_empty(), "expected no findings, got {:?}", problems);
    }

    #[test]
    fn output_with_multiple_backends_is_rejected() {
        let output = output_with_spec(OutputSpec {
            nullout: Some(NullOutputConfig {}),
            s3: Some(S3OutputConfig {
                s3_bucket: "logs".into(),
                ..Default::default()
            }),
            ..Default::default()
        });
        let problems = validate_output(&output);
        assert!(has_errors(&problems), "expected an error finding, got {:?}", problems);
        assert!(
            problems[0].message.contains("s3") && problems[0].message.contains("nullout"),
            "finding should name the conflicting backends, got {:?}",
            problems,
        );
    }

    #[test]
    fn ambiguous_secret_is_flagged_as_warning() {
        let output = output_with_spec(OutputSpec {
            s3: Some(S3OutputConfig {
                s3_bucket: "logs".into(),
                aws_key_id: Some(Secret {
                    value: Some("AKIA".into()),
                    value_from: Some(Default::default()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        });
        let problems = validate_output(&output);
        assert!(!has_errors(&problems), "warnings must not reject the object, got {:?}", problems);
        assert_eq!(problems.len(), 1, "expected a single warning, got {:?}", problems);
        assert_eq!(problems[0].severity, Severity::Warning);
        assert_eq!(problems[0].path, "s3.aws_key_id");
    }

    #[test]
    fn flow_without_output_refs_is_accepted_with_warning() {
        let flow = Flow::new("demo", Default::default());
        let problems = validate_flow(&flow);
        assert!(!has_errors(&problems), "expected warnings only, got {:?}", problems);
        assert_eq!(problems.len(), 1, "expected a single warning, got {:?}", problems);
        assert_eq!(problems[0].path, "outputRefs");
    }

    #[test]
    fn flow_with_invalid_output_ref_is_rejected() {
        let flow = Flow::new(
            "demo",
            crate::crd::FlowSpec {
                output_refs: Some(vec!["ok-name".into(), "Bad_Name".into()]),
                ..Default::default()
            },
        );
        let problems = validate_flow(&flow);
        assert!(has_errors(&problems), "expected an error finding, got {:?}", problems);
        assert_eq!(problems[0].path, "outputRefs.1");
    }

    #[test]
    fn filter_with_multiple_plugins_is_rejected() {
        let flow = Flow::new(
            "demo",
            crate::crd::FlowSpec {
                output_refs: Some(vec!["target".into()]),
                filters: Some(vec![crate::crd::Filter {
                    stdout: Some(Default::default()),
                    dedot: Some(Default::default()),
                    ..Default::default()
                }]),
                ..Default::default()
            },
        );
        let problems = validate_flow(&flow);
        assert!(has_errors(&problems), "expected an error finding, got {:?}", problems);
        assert_eq!(problems[0].path, "filters.0");
    }
}
