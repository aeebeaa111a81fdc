//! ClusterOutput CRD.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::output::{OutputSpec, OutputStatus};

pub type ClusterOutput = ClusterOutputCRD; // Mostly to resolve a Rust Analyzer issue.

/// CRD spec for the ClusterOutput resource.
///
/// A ClusterOutput is an Output which flows from any namespace may
/// reference. The resource itself still lives in the control namespace
/// of the logging deployment.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, CustomResource, JsonSchema)]
#[kube(
    struct = "ClusterOutputCRD",
    status = "OutputStatus",
    group = "logging.banzaicloud.io",
    version = "v1alpha1",
    kind = "ClusterOutput",
    namespaced,
    derive = "PartialEq",
    apiextensions = "v1",
    shortname = "clusteroutput",
    printcolumn = r#"{"name":"Active","type":"boolean","jsonPath":".status.active"}"#,
    printcolumn = r#"{"name":"Problems","type":"integer","jsonPath":".status.problemsCount"}"#
)]
pub struct ClusterOutputSpec {
    /// The wrapped output spec.
    #[serde(flatten)]
    pub output_spec: OutputSpec,
    /// The namespaces allowed to reference this output.
    ///
    /// An empty or absent list allows every namespace.
    #[serde(rename = "enabledNamespaces", default, skip_serializing_if = "Option::is_none")]
    pub enabled_namespaces: Option<Vec<String>>,
}
