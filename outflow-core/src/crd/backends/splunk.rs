//! Splunk HTTP Event Collector output plugin.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{Buffer, Format, Secret};

/// Output plugin posting events to a Splunk HEC endpoint.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct SplunkHecOutput {
    /// The hostname of the HEC endpoint.
    pub hec_host: String,
    /// The port of the HEC endpoint, defaults to 8088.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hec_port: Option<i32>,
    /// The connection protocol, `http` or `https`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// The HEC token authorizing the connection.
    pub hec_token: Secret,
    /// The target index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// The record key carrying the target index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_key: Option<String>,
    /// The `host` metadata of sent events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// The record key carrying the `host` metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_key: Option<String>,
    /// The `source` metadata of sent events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The record key carrying the `source` metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_key: Option<String>,
    /// The `sourcetype` metadata of sent events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sourcetype: Option<String>,
    /// The record key carrying the `sourcetype` metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sourcetype_key: Option<String>,
    /// The payload kind, `event` or `metric`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// Indexed fields resolved from the record, field name to record key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
    /// Keep resolved metadata keys in the event body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_keys: Option<bool>,
    /// The client certificate for mutual TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_cert: Option<Secret>,
    /// The client private key for mutual TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key: Option<Secret>,
    /// The CA certificate validating the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<Secret>,
    /// A directory of CA certificates validating the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_path: Option<Secret>,
    /// The allowed SSL cipher list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_ciphers: Option<String>,
    /// Skip certificate verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure_ssl: Option<bool>,
    /// Timeout before an idle connection is closed, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_timeout: Option<i32>,
    /// Timeout reading a response, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_timeout: Option<i32>,
    /// Timeout opening a connection, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_timeout: Option<i32>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
    /// Format section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}
