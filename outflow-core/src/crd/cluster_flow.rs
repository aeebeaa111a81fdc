//! ClusterFlow CRD.

use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::filters::Filter;
use crate::crd::flow::FlowStatus;

pub type ClusterFlow = ClusterFlowCRD; // Mostly to resolve a Rust Analyzer issue.

/// CRD spec for the ClusterFlow resource.
///
/// A ClusterFlow selects log events across every namespace. Like the
/// ClusterOutput, the resource itself lives in the control namespace of
/// the logging deployment.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, CustomResource, JsonSchema)]
#[kube(
    struct = "ClusterFlowCRD",
    status = "FlowStatus",
    group = "logging.banzaicloud.io",
    version = "v1alpha1",
    kind = "ClusterFlow",
    namespaced,
    derive = "PartialEq",
    apiextensions = "v1",
    shortname = "clusterflow",
    printcolumn = r#"{"name":"Active","type":"boolean","jsonPath":".status.active"}"#,
    printcolumn = r#"{"name":"Problems","type":"integer","jsonPath":".status.problemsCount"}"#
)]
pub struct ClusterFlowSpec {
    /// The logging deployment this flow belongs to.
    #[serde(rename = "loggingRef", default, skip_serializing_if = "Option::is_none")]
    pub logging_ref: Option<String>,
    /// Ordered select and exclude statements routing events into this flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#match: Option<Vec<ClusterMatch>>,
    /// The ordered filter chain applied to selected events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// The names of the ClusterOutputs receiving events from this flow.
    #[serde(rename = "outputRefs", default, skip_serializing_if = "Option::is_none")]
    pub output_refs: Option<Vec<String>>,
}

/// A single match statement of a cluster flow.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct ClusterMatch {
    /// Route matching events into the flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<ClusterSelect>,
    /// Drop matching events from the flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<ClusterExclude>,
}

/// The predicate of a cluster select statement.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct ClusterSelect {
    /// Namespaces to match. An empty list matches every namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Vec<String>>,
    /// Pod labels which must all be present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    /// Node hostnames to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,
    /// Container names to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_names: Option<Vec<String>>,
}

/// The predicate of a cluster exclude statement.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct ClusterExclude {
    /// Namespaces to match. An empty list matches every namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Vec<String>>,
    /// Pod labels which must all be present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    /// Node hostnames to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,
    /// Container names to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_names: Option<Vec<String>>,
}
