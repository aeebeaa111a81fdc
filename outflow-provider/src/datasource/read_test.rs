use maplit::btreemap;
use serde_json::json;

use outflow_core::crd::backends::S3OutputConfig;
use outflow_core::crd::{Output, OutputSpec};
use outflow_core::manifest;

use crate::datasource::DataSource;

#[test]
fn read_renders_a_complete_manifest() {
    let config = json!({
        "metadata": {
            "name": "demo",
            "namespace": "observability",
            "labels": {"app": "demo"},
        },
        "spec": {
            "s3": {"s3_bucket": "example-logs", "s3_region": "eu-west-1"},
        },
    });
    let res = DataSource::Output.read(&config);
    assert!(res.diagnostics.is_empty(), "expected no diagnostics, got {:?}", res.diagnostics);
    assert_eq!(res.id.as_deref(), Some("observability/demo"), "unexpected ID, got {:?}", res.id);
    let expected = r#"---
apiVersion: logging.banzaicloud.io/v1alpha1
kind: Output
metadata:
  labels:
    app: demo
  name: demo
  namespace: observability
spec:
  s3:
    s3_bucket: example-logs
    s3_region: eu-west-1
"#;
    assert_eq!(res.yaml.as_deref(), Some(expected), "rendered manifest did not match expected YAML");
}

#[test]
fn read_matches_direct_rendering() {
    let config = json!({
        "metadata": {"name": "archive", "labels": {"app": "archive", "tier": "logs"}},
        "spec": {"s3": {"s3_bucket": "example-logs"}},
    });
    let res = DataSource::Output.read(&config);
    assert!(res.diagnostics.is_empty(), "expected no diagnostics, got {:?}", res.diagnostics);

    let mut expected = Output::new(
        "archive",
        OutputSpec {
            s3: Some(S3OutputConfig { s3_bucket: "example-logs".into(), ..Default::default() }),
            ..Default::default()
        },
    );
    expected.metadata.labels = Some(btreemap! {
        "app".to_string() => "archive".to_string(),
        "tier".to_string() => "logs".to_string(),
    });
    let yaml = manifest::render(&expected).expect("error rendering expected manifest");
    assert_eq!(res.yaml.as_deref(), Some(yaml.as_str()), "read did not match direct rendering");
    assert_eq!(
        res.id.as_deref(),
        Some("archive"),
        "unexpected ID for an object without namespace, got {:?}",
        res.id
    );
}

#[test]
fn read_renders_cluster_flow_manifests() {
    let config = json!({
        "metadata": {"name": "audit", "namespace": "logging"},
        "spec": {
            "match": [{"select": {"namespaces": ["payments"]}}],
            "outputRefs": ["central"],
        },
    });
    let res = DataSource::ClusterFlow.read(&config);
    assert!(res.diagnostics.is_empty(), "expected no diagnostics, got {:?}", res.diagnostics);
    assert_eq!(res.id.as_deref(), Some("logging/audit"), "unexpected ID, got {:?}", res.id);
    let yaml = res.yaml.as_deref().expect("expected a rendered manifest");
    assert!(yaml.contains("kind: ClusterFlow"), "unexpected manifest rendered, got {}", yaml);
    assert!(yaml.contains("- central"), "output refs missing from the manifest, got {}", yaml);
}

#[test]
fn read_reports_domain_findings_without_rendering() {
    let config = json!({"metadata": {"name": "demo"}, "spec": {}});
    let res = DataSource::Output.read(&config);
    assert!(
        res.id.is_none() && res.yaml.is_none(),
        "no manifest may render for an invalid config, got {:?}",
        res
    );
    assert_eq!(res.diagnostics.len(), 1, "expected a single diagnostic, got {:?}", res.diagnostics);
    assert!(res.diagnostics[0].is_error(), "expected an error diagnostic, got {:?}", res.diagnostics[0]);
    assert_eq!(
        res.diagnostics[0].summary, "no backend is configured, exactly one backend block is required",
        "unexpected summary, got {}",
        res.diagnostics[0].summary
    );
    assert_eq!(
        res.diagnostics[0].attribute.as_deref(),
        Some("spec"),
        "unexpected attribute path, got {:?}",
        res.diagnostics[0].attribute
    );
}

#[test]
fn read_renders_alongside_warnings() {
    let config = json!({"metadata": {"name": "drops", "namespace": "observability"}, "spec": {}});
    let res = DataSource::Flow.read(&config);
    assert_eq!(res.diagnostics.len(), 1, "expected a single diagnostic, got {:?}", res.diagnostics);
    assert!(
        !res.diagnostics[0].is_error(),
        "a flow without output refs must only warn, got {:?}",
        res.diagnostics[0]
    );
    assert_eq!(res.id.as_deref(), Some("observability/drops"), "unexpected ID, got {:?}", res.id);
    let yaml = res.yaml.as_deref().expect("expected a rendered manifest");
    assert!(yaml.contains("kind: Flow"), "unexpected manifest rendered, got {}", yaml);
}

#[test]
fn read_rejects_structural_errors() {
    let config = json!({
        "metadata": {"name": "demo"},
        "spec": {"s3": {"s3_bucket": "example-logs"}, "bogus": {}},
    });
    let res = DataSource::Output.read(&config);
    assert!(
        res.id.is_none() && res.yaml.is_none(),
        "no manifest may render for an invalid config, got {:?}",
        res
    );
    assert_eq!(res.diagnostics.len(), 1, "expected a single diagnostic, got {:?}", res.diagnostics);
    assert_eq!(
        res.diagnostics[0].summary, "unknown attribute `bogus`",
        "unexpected summary, got {}",
        res.diagnostics[0].summary
    );
    assert_eq!(
        res.diagnostics[0].attribute.as_deref(),
        Some("spec.bogus"),
        "unexpected attribute path, got {:?}",
        res.diagnostics[0].attribute
    );
}
