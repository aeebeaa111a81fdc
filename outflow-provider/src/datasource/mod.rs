//! The data source registry.
//!
//! Each data source wraps one of the logging operator's resource kinds. A
//! config document is checked structurally against the derived schema,
//! decoded into the typed resource, validated with the domain rules of the
//! resource kind and finally rendered as a YAML manifest. All findings along
//! the way are reported as diagnostics, never as transport errors.

mod diagnostics;
mod schema;
mod validate;

#[cfg(test)]
mod read_test;
#[cfg(test)]
mod schema_test;
#[cfg(test)]
mod validate_test;

use std::collections::BTreeMap;

use kube::Resource;
use lazy_static::lazy_static;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use outflow_core::crd::{
    ClusterFlow, ClusterFlowSpec, ClusterOutput, ClusterOutputSpec, Flow, FlowSpec, Output,
    OutputSpec, RequiredMetadata,
};
use outflow_core::validate::{
    validate_cluster_flow, validate_cluster_output, validate_flow, validate_output, Problem,
    Severity,
};
use outflow_core::{manifest, API_GROUP, API_VERSION};

pub use diagnostics::{has_errors, Diagnostic};
pub use schema::{Attribute, AttributeType, Block, DataSourceSchema};

lazy_static! {
    static ref OUTPUT_SCHEMA: DataSourceSchema = build_schema::<OutputSpec>(DataSource::Output);
    static ref CLUSTER_OUTPUT_SCHEMA: DataSourceSchema =
        build_schema::<ClusterOutputSpec>(DataSource::ClusterOutput);
    static ref FLOW_SCHEMA: DataSourceSchema = build_schema::<FlowSpec>(DataSource::Flow);
    static ref CLUSTER_FLOW_SCHEMA: DataSourceSchema =
        build_schema::<ClusterFlowSpec>(DataSource::ClusterFlow);
}

/// A data source backed by one of the logging operator's resource kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    Output,
    ClusterOutput,
    Flow,
    ClusterFlow,
}

impl DataSource {
    /// All registered data sources.
    pub const ALL: [Self; 4] = [Self::Output, Self::ClusterOutput, Self::Flow, Self::ClusterFlow];

    /// The kind of the underlying resource.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Output => "Output",
            Self::ClusterOutput => "ClusterOutput",
            Self::Flow => "Flow",
            Self::ClusterFlow => "ClusterFlow",
        }
    }

    /// The registered name of this data source.
    pub fn name(&self) -> String {
        datasource_name(API_GROUP, self.kind(), API_VERSION)
    }

    /// Resolve a data source from its registered name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ds| ds.name() == name)
    }

    /// Summary info of this data source.
    pub fn info(&self) -> DataSourceInfo {
        let schema = self.schema();
        DataSourceInfo {
            name: schema.name.clone(),
            group: schema.group.clone(),
            version: schema.version.clone(),
            kind: schema.kind.clone(),
            namespaced: schema.namespaced,
        }
    }

    /// The schema of this data source.
    pub fn schema(&self) -> &'static DataSourceSchema {
        match self {
            Self::Output => &OUTPUT_SCHEMA,
            Self::ClusterOutput => &CLUSTER_OUTPUT_SCHEMA,
            Self::Flow => &FLOW_SCHEMA,
            Self::ClusterFlow => &CLUSTER_FLOW_SCHEMA,
        }
    }

    /// Validate a config document without rendering it.
    pub fn validate(&self, config: &Value) -> Vec<Diagnostic> {
        match self {
            Self::Output => evaluate(self.schema(), config, Output::new, validate_output).1,
            Self::ClusterOutput => {
                evaluate(self.schema(), config, ClusterOutput::new, validate_cluster_output).1
            }
            Self::Flow => evaluate(self.schema(), config, Flow::new, validate_flow).1,
            Self::ClusterFlow => {
                evaluate(self.schema(), config, ClusterFlow::new, validate_cluster_flow).1
            }
        }
    }

    /// Evaluate a config document and render its manifest.
    ///
    /// The ID and YAML of the response are only populated when the config
    /// produced no error diagnostics.
    pub fn read(&self, config: &Value) -> ReadResponse {
        match self {
            Self::Output => read_as(self.schema(), config, Output::new, validate_output),
            Self::ClusterOutput => {
                read_as(self.schema(), config, ClusterOutput::new, validate_cluster_output)
            }
            Self::Flow => read_as(self.schema(), config, Flow::new, validate_flow),
            Self::ClusterFlow => {
                read_as(self.schema(), config, ClusterFlow::new, validate_cluster_flow)
            }
        }
    }
}

/// Summary info of a registered data source.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DataSourceInfo {
    /// The registered name of the data source.
    pub name: String,
    /// The API group of the underlying resource.
    pub group: String,
    /// The API version of the underlying resource.
    pub version: String,
    /// The kind of the underlying resource.
    pub kind: String,
    /// Whether rendered objects of this data source carry a namespace.
    pub namespaced: bool,
}

/// The metadata attributes accepted by every data source.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct ConfigMeta {
    /// The name of the rendered object.
    pub name: String,
    /// The namespace of the rendered object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Labels applied to the rendered object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    /// Annotations applied to the rendered object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

/// The document shape accepted by every data source.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
pub struct ConfigDoc<S> {
    /// The metadata of the rendered object.
    pub metadata: ConfigMeta,
    /// The spec of the underlying resource.
    pub spec: S,
}

/// The result of a data source read.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ReadResponse {
    /// The ID of the rendered object, `{namespace}/{name}` when a namespace
    /// is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The rendered YAML manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaml: Option<String>,
    /// Diagnostics produced while evaluating the config.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

/// Derive the registered name of a data source.
///
/// Dots of the API group become underscores, the kind is lowercased at its
/// word boundaries and the version is appended, so kind `ClusterOutput` of
/// group `logging.banzaicloud.io` at version `v1alpha1` registers as
/// `logging_banzaicloud_io_cluster_output_v1alpha1`.
fn datasource_name(group: &str, kind: &str, version: &str) -> String {
    let mut name = group.replace('.', "_");
    name.push('_');
    for (idx, c) in kind.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if idx != 0 {
                name.push('_');
            }
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name.push('_');
    name.push_str(version);
    name
}

/// Build the full schema of a data source from the JSON schema of its spec
/// type, adding the attributes computed by the provider.
fn build_schema<S: JsonSchema>(ds: DataSource) -> DataSourceSchema {
    let mut block = schema::derive_block::<ConfigDoc<S>>();
    block.attributes.push(Attribute::computed(
        "id",
        AttributeType::String,
        "The ID of the rendered object, `{namespace}/{name}` when a namespace is set.",
    ));
    block.attributes.push(Attribute::computed(
        "yaml",
        AttributeType::String,
        "The rendered YAML manifest.",
    ));
    block.attributes.sort_by(|a, b| a.name.cmp(&b.name));
    DataSourceSchema {
        name: ds.name(),
        group: API_GROUP.to_string(),
        version: API_VERSION.to_string(),
        kind: ds.kind().to_string(),
        namespaced: true,
        block,
    }
}

/// Check a config document and decode it into its resource type.
///
/// Structural findings short circuit the decode, as a document with unknown
/// or mistyped attributes can not be decoded reliably. Domain findings are
/// appended after the decode, so a well formed document reports its full
/// set of issues in one pass.
fn evaluate<S, R>(
    schema: &DataSourceSchema,
    config: &Value,
    new: impl FnOnce(&str, S) -> R,
    domain: impl FnOnce(&R) -> Vec<Problem>,
) -> (Option<R>, Vec<Diagnostic>)
where
    S: DeserializeOwned,
    R: Resource + RequiredMetadata,
{
    let mut diagnostics = validate::check_document(&schema.block, config);
    if has_errors(&diagnostics) {
        return (None, diagnostics);
    }
    let doc: ConfigDoc<S> = match serde_json::from_value(config.clone()) {
        Ok(doc) => doc,
        Err(err) => {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                summary: "error decoding the configuration".into(),
                detail: Some(err.to_string()),
                attribute: None,
            });
            return (None, diagnostics);
        }
    };
    let mut resource = new(&doc.metadata.name, doc.spec);
    let meta = resource.meta_mut();
    meta.namespace = doc.metadata.namespace;
    meta.labels = doc.metadata.labels;
    meta.annotations = doc.metadata.annotations;
    diagnostics.extend(domain(&resource).into_iter().map(Diagnostic::from_problem));
    (Some(resource), diagnostics)
}

/// Evaluate a config document and render the result as a manifest.
fn read_as<S, R>(
    schema: &DataSourceSchema,
    config: &Value,
    new: impl FnOnce(&str, S) -> R,
    domain: impl FnOnce(&R) -> Vec<Problem>,
) -> ReadResponse
where
    S: DeserializeOwned,
    R: Resource + RequiredMetadata + Serialize,
{
    let (resource, mut diagnostics) = evaluate(schema, config, new, domain);
    let resource = match resource {
        Some(resource) if !has_errors(&diagnostics) => resource,
        _ => return ReadResponse { id: None, yaml: None, diagnostics },
    };
    match manifest::render(&resource) {
        Ok(yaml) => ReadResponse {
            id: Some(manifest::manifest_id(&resource)),
            yaml: Some(yaml),
            diagnostics,
        },
        Err(err) => {
            diagnostics.push(Diagnostic::from_render_error(err));
            ReadResponse { id: None, yaml: None, diagnostics }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn datasource_names_follow_the_derivation_rules() {
        let expected = vec![
            (DataSource::Output, "logging_banzaicloud_io_output_v1alpha1"),
            (DataSource::ClusterOutput, "logging_banzaicloud_io_cluster_output_v1alpha1"),
            (DataSource::Flow, "logging_banzaicloud_io_flow_v1alpha1"),
            (DataSource::ClusterFlow, "logging_banzaicloud_io_cluster_flow_v1alpha1"),
        ];
        for (ds, name) in expected {
            assert_eq!(
                ds.name(),
                name,
                "unexpected name derived for kind {}, got {}, expected {}",
                ds.kind(),
                ds.name(),
                name
            );
        }
    }

    #[test]
    fn from_name_resolves_registered_names() {
        for ds in DataSource::ALL {
            assert_eq!(
                DataSource::from_name(&ds.name()),
                Some(ds),
                "data source {} did not resolve from its own name",
                ds.kind()
            );
        }
    }

    #[test]
    fn from_name_rejects_unknown_names() {
        let res = DataSource::from_name("logging_banzaicloud_io_sink_v1alpha1");
        assert_eq!(res, None, "unexpected data source resolved for an unknown name, got {:?}", res);
    }
}
