//! Manifest rendering.
//!
//! Resources constructed through the typed CRD structs carry their
//! `apiVersion` and `kind` fields already stamped, so rendering is a plain
//! YAML serialization of the full object.

use serde::Serialize;

use crate::crd::RequiredMetadata;
use crate::error::AppError;

/// Render the given resource as a YAML manifest.
pub fn render<T: Serialize>(resource: &T) -> Result<String, AppError> {
    Ok(serde_yaml::to_string(resource)?)
}

/// The canonical ID of a manifest, `{namespace}/{name}` for namespaced
/// objects and `{name}` when no namespace is set.
pub fn manifest_id<T: RequiredMetadata>(resource: &T) -> String {
    let namespace = resource.namespace();
    if namespace.is_empty() {
        resource.name().to_string()
    } else {
        format!("{}/{}", namespace, resource.name())
    }
}

#[cfg(test)]
mod test {
    use maplit::btreemap;

    use super::*;
    use crate::crd::backends::{KafkaOutputConfig, NullOutputConfig, S3OutputConfig};
    use crate::crd::{Output, OutputSpec, Secret, SecretKeyRef, ValueFrom};

    #[test]
    fn render_minimal_output() {
        let output = Output::new(
            "demo",
            OutputSpec {
                nullout: Some(NullOutputConfig {}),
                ..Default::default()
            },
        );
        let yaml = render(&output).expect("error rendering manifest");
        let expected = r#"---
apiVersion: logging.banzaicloud.io/v1alpha1
kind: Output
metadata:
  name: demo
spec:
  nullout: {}
"#;
        assert_eq!(yaml, expected, "rendered manifest did not match expected YAML");
    }

    #[test]
    fn render_s3_output_with_secret_ref() {
        let mut output = Output::new(
            "s3-archive",
            OutputSpec {
                s3: Some(S3OutputConfig {
                    aws_key_id: Some(Secret {
                        value_from: Some(ValueFrom {
                            secret_key_ref: Some(SecretKeyRef {
                                name: "s3-creds".into(),
                                key: "awsAccessKeyId".into(),
                                optional: None,
                            }),
                        }),
                        ..Default::default()
                    }),
                    s3_bucket: "example-logs".into(),
                    s3_region: Some("eu-west-1".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        output.metadata.namespace = Some("observability".into());
        let yaml = render(&output).expect("error rendering manifest");
        let expected = r#"---
apiVersion: logging.banzaicloud.io/v1alpha1
kind: Output
metadata:
  name: s3-archive
  namespace: observability
spec:
  s3:
    aws_key_id:
      valueFrom:
        secretKeyRef:
          name: s3-creds
          key: awsAccessKeyId
    s3_bucket: example-logs
    s3_region: eu-west-1
"#;
        assert_eq!(yaml, expected, "rendered manifest did not match expected YAML");
    }

    #[test]
    fn rendered_manifests_parse_back() {
        let mut output = Output::new(
            "kafka-events",
            OutputSpec {
                kafka: Some(KafkaOutputConfig {
                    brokers: "kafka-0.kafka:9092,kafka-1.kafka:9092".into(),
                    default_topic: Some("logs".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        output.metadata.namespace = Some("streaming".into());
        output.metadata.labels = Some(btreemap! {"app".to_string() => "kafka".to_string()});

        let yaml = render(&output).expect("error rendering manifest");
        let parsed: Output = serde_yaml::from_str(&yaml).expect("error parsing rendered manifest");
        assert_eq!(parsed, output, "manifest did not survive a round-trip through YAML");
    }

    #[test]
    fn manifest_id_with_namespace() {
        let mut output = Output::new("demo", Default::default());
        output.metadata.namespace = Some("observability".into());
        assert_eq!(manifest_id(&output), "observability/demo", "unexpected manifest ID");
    }

    #[test]
    fn manifest_id_without_namespace() {
        let output = Output::new("demo", Default::default());
        assert_eq!(manifest_id(&output), "demo", "unexpected manifest ID");
    }
}
