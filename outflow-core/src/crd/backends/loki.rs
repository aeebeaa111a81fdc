//! Grafana Loki output plugin.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{Buffer, Secret};

/// Output plugin pushing log streams to a Loki instance.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct LokiOutput {
    /// The URL of the Loki instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The username for basic auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Secret>,
    /// The password for basic auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,
    /// The tenant id set as the `X-Scope-OrgID` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    /// Static labels applied to every stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    /// Labels resolved from record fields, label name to record accessor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_labels: Option<BTreeMap<String, String>>,
    /// The line serialization, `json` or `key_value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_format: Option<String>,
    /// Promote Kubernetes metadata labels to Loki labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract_kubernetes_labels: Option<bool>,
    /// Record accessors removed from the emitted line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_keys: Option<Vec<String>>,
    /// Collapse records carrying a single key into its bare value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_single_key: Option<bool>,
    /// Apply the canonical Kubernetes label mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configure_kubernetes_labels: Option<bool>,
    /// Attach the fluentd worker id as a label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_thread_label: Option<bool>,
    /// The CA certificate validating the instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<Secret>,
    /// The client certificate for mutual TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<Secret>,
    /// The client private key for mutual TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Secret>,
    /// Skip certificate verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure_tls: Option<bool>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}
