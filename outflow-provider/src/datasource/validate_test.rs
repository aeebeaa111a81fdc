use serde_json::json;

use crate::datasource::DataSource;

#[test]
fn validate_rejects_non_object_documents() {
    let diagnostics = DataSource::Output.validate(&json!("an output"));
    assert_eq!(diagnostics.len(), 1, "expected a single diagnostic, got {:?}", diagnostics);
    assert_eq!(
        diagnostics[0].summary, "the configuration must be a JSON object",
        "unexpected summary, got {}",
        diagnostics[0].summary
    );
    assert!(
        diagnostics[0].attribute.is_none(),
        "a document level finding must carry no attribute path, got {:?}",
        diagnostics[0].attribute
    );
}

#[test]
fn validate_reports_every_structural_problem_at_once() {
    let config = json!({
        "metadata": {"name": 5, "bogus": true},
        "spec": {"s3": {"s3_bucket": "example-logs"}},
    });
    let diagnostics = DataSource::Output.validate(&config);
    assert_eq!(diagnostics.len(), 2, "expected two diagnostics, got {:?}", diagnostics);
    let attributes: Vec<&str> = diagnostics.iter().filter_map(|diag| diag.attribute.as_deref()).collect();
    assert!(
        attributes.contains(&"metadata.name"),
        "expected a finding at metadata.name, got {:?}",
        attributes
    );
    assert!(
        attributes.contains(&"metadata.bogus"),
        "expected a finding at metadata.bogus, got {:?}",
        attributes
    );
}

#[test]
fn validate_reports_missing_required_attributes() {
    let config = json!({"metadata": {"namespace": "observability"}, "spec": {}});
    let diagnostics = DataSource::Output.validate(&config);
    assert_eq!(diagnostics.len(), 1, "expected a single diagnostic, got {:?}", diagnostics);
    assert_eq!(
        diagnostics[0].summary, "missing required attribute `name`",
        "unexpected summary, got {}",
        diagnostics[0].summary
    );
    assert_eq!(
        diagnostics[0].attribute.as_deref(),
        Some("metadata.name"),
        "unexpected attribute path, got {:?}",
        diagnostics[0].attribute
    );
}

#[test]
fn validate_rejects_computed_attributes_in_config() {
    let config = json!({
        "metadata": {"name": "demo"},
        "spec": {"nullout": {}},
        "yaml": "apiVersion: v1",
    });
    let diagnostics = DataSource::Output.validate(&config);
    assert_eq!(diagnostics.len(), 1, "expected a single diagnostic, got {:?}", diagnostics);
    assert_eq!(
        diagnostics[0].summary, "attribute `yaml` is computed and can not be set in the configuration",
        "unexpected summary, got {}",
        diagnostics[0].summary
    );
    assert_eq!(
        diagnostics[0].attribute.as_deref(),
        Some("yaml"),
        "unexpected attribute path, got {:?}",
        diagnostics[0].attribute
    );
}

#[test]
fn validate_reports_element_type_errors_with_indexed_paths() {
    let config = json!({
        "metadata": {"name": "demo"},
        "spec": {"outputRefs": ["default", 5]},
    });
    let diagnostics = DataSource::Flow.validate(&config);
    assert_eq!(diagnostics.len(), 1, "expected a single diagnostic, got {:?}", diagnostics);
    assert_eq!(
        diagnostics[0].summary, "value must be of type string, got number",
        "unexpected summary, got {}",
        diagnostics[0].summary
    );
    assert_eq!(
        diagnostics[0].attribute.as_deref(),
        Some("spec.outputRefs.1"),
        "unexpected attribute path, got {:?}",
        diagnostics[0].attribute
    );
}

#[test]
fn validate_accepts_a_well_formed_document() {
    let config = json!({
        "metadata": {"name": "demo", "namespace": "observability"},
        "spec": {"s3": {"s3_bucket": "example-logs", "s3_region": "eu-west-1"}},
    });
    let diagnostics = DataSource::Output.validate(&config);
    assert!(diagnostics.is_empty(), "expected no diagnostics, got {:?}", diagnostics);
}

#[test]
fn validate_anchors_domain_findings_under_spec() {
    let config = json!({
        "metadata": {"name": "demo"},
        "spec": {
            "nullout": {},
            "enabledNamespaces": ["observability", "Bad_NS"],
        },
    });
    let diagnostics = DataSource::ClusterOutput.validate(&config);
    assert_eq!(diagnostics.len(), 1, "expected a single diagnostic, got {:?}", diagnostics);
    assert!(diagnostics[0].is_error(), "expected an error diagnostic, got {:?}", diagnostics[0]);
    assert_eq!(
        diagnostics[0].attribute.as_deref(),
        Some("spec.enabledNamespaces.1"),
        "unexpected attribute path, got {:?}",
        diagnostics[0].attribute
    );
}

#[test]
fn validate_keeps_warnings_distinct_from_errors() {
    let config = json!({"metadata": {"name": "demo"}, "spec": {}});
    let diagnostics = DataSource::Flow.validate(&config);
    assert_eq!(diagnostics.len(), 1, "expected a single diagnostic, got {:?}", diagnostics);
    assert!(
        !diagnostics[0].is_error(),
        "a flow without output refs must only warn, got {:?}",
        diagnostics[0]
    );
    assert_eq!(
        diagnostics[0].attribute.as_deref(),
        Some("spec.outputRefs"),
        "unexpected attribute path, got {:?}",
        diagnostics[0].attribute
    );
}
