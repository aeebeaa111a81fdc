//! Flow CRD.

use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::filters::Filter;

pub type Flow = FlowCRD; // Mostly to resolve a Rust Analyzer issue.

/// CRD spec for the Flow resource.
///
/// A Flow selects log events within its own namespace, runs them through
/// an ordered filter chain, and routes them to named outputs.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, CustomResource, JsonSchema)]
#[kube(
    struct = "FlowCRD",
    status = "FlowStatus",
    group = "logging.banzaicloud.io",
    version = "v1alpha1",
    kind = "Flow",
    namespaced,
    derive = "PartialEq",
    apiextensions = "v1",
    shortname = "flow",
    printcolumn = r#"{"name":"Active","type":"boolean","jsonPath":".status.active"}"#,
    printcolumn = r#"{"name":"Problems","type":"integer","jsonPath":".status.problemsCount"}"#
)]
pub struct FlowSpec {
    /// The logging deployment this flow belongs to.
    #[serde(rename = "loggingRef", default, skip_serializing_if = "Option::is_none")]
    pub logging_ref: Option<String>,
    /// Ordered select and exclude statements routing events into this flow.
    ///
    /// Statements are evaluated in order and the first match wins. A flow
    /// without match statements selects every event of its namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#match: Option<Vec<Match>>,
    /// The ordered filter chain applied to selected events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// The names of the outputs receiving events from this flow.
    ///
    /// Names resolve to Outputs of the same namespace first, then to
    /// ClusterOutputs enabled for the namespace.
    #[serde(rename = "outputRefs", default, skip_serializing_if = "Option::is_none")]
    pub output_refs: Option<Vec<String>>,
}

/// A single match statement of a flow.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct Match {
    /// Route matching events into the flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    /// Drop matching events from the flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Exclude>,
}

/// The predicate of a select statement.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct Select {
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

/// The predicate of an exclude statement.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct Exclude {
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

/// CRD status object.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct FlowStatus {
    /// Whether the flow is accepted and active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Problems found during reconciliation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problems: Option<Vec<String>>,
    /// The number of problems found during reconciliation.
    #[serde(rename = "problemsCount", default)]
    pub problems_count: i32,
}
