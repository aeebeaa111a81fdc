//! Elasticsearch and OpenSearch output plugins.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{Buffer, Secret};

/// Output plugin indexing events into an Elasticsearch cluster.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct ElasticsearchOutput {
    /// The hostname of the cluster, when addressing a single node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// The port of the cluster, defaults to 9200.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// A comma separated list of `host:port` pairs, overriding `host`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<String>,
    /// The user for basic auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// The password for basic auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,
    /// A path prefix prepended to every API call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The connection scheme, `http` or `https`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Verify the SSL certificate of the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_verify: Option<bool>,
    /// The TLS protocol version, such as `TLSv1_2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_version: Option<String>,
    /// The CA certificate validating the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<Secret>,
    /// The client certificate for mutual TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_cert: Option<Secret>,
    /// The client private key for mutual TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key: Option<Secret>,
    /// The passphrase of the client private key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key_pass: Option<Secret>,
    /// The name of the target index, defaults to `fluentd`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    /// Derive the index name from the logstash convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logstash_format: Option<bool>,
    /// The index name prefix used with `logstash_format`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logstash_prefix: Option<String>,
    /// The date format appended to `logstash_prefix`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logstash_dateformat: Option<String>,
    /// Inject a `@timestamp` field into each record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_timestamp: Option<bool>,
    /// The record key carrying the event time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_key: Option<String>,
    /// Use UTC when deriving logstash index names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_index: Option<bool>,
    /// The record key overriding the target index per event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_index_key: Option<String>,
    /// The record key overriding the target type per event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type_key: Option<String>,
    /// The name of an index template installed at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    /// The index template body installed at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_file: Option<Secret>,
    /// A hash of template name to template file, for multiple templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<String>,
    /// Custom headers sent with every API call, JSON formatted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_headers: Option<String>,
    /// The record key used as the document id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_key: Option<String>,
    /// The record key used as the routing value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_key: Option<String>,
    /// Record keys removed before an update operation, comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_keys_on_update: Option<String>,
    /// The bulk operation, one of `index`, `create`, `update` or `upsert`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_operation: Option<String>,
    /// Reload cluster connections following the node discovery schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reload_connections: Option<bool>,
    /// Reload cluster connections after a request failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reload_on_failure: Option<bool>,
    /// Reconnect on any transport error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconnect_on_error: Option<bool>,
    /// The request timeout, such as `5s`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
    /// Include the event tag in the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_tag_key: Option<bool>,
    /// The record key carrying the event tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_key: Option<String>,
    /// Abort when installing an index template keeps failing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on_putting_template_retry_exceed: Option<bool>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}

/// Output plugin indexing events into an OpenSearch cluster.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct OpenSearchOutput {
    /// The hostname of the cluster, when addressing a single node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// The port of the cluster, defaults to 9200.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// A comma separated list of `host:port` pairs, overriding `host`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<String>,
    /// The user for basic auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// The password for basic auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,
    /// The connection scheme, `http` or `https`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Verify the SSL certificate of the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_verify: Option<bool>,
    /// The CA certificate validating the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<Secret>,
    /// The name of the target index, defaults to `fluentd`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    /// Derive the index name from the logstash convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logstash_format: Option<bool>,
    /// The index name prefix used with `logstash_format`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logstash_prefix: Option<String>,
    /// Inject a `@timestamp` field into each record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_timestamp: Option<bool>,
    /// The record key used as the document id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_key: Option<String>,
    /// The record key used as the routing value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_key: Option<String>,
    /// The request timeout, such as `5s`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
    /// Reload cluster connections following the node discovery schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reload_connections: Option<bool>,
    /// Reconnect on any transport error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconnect_on_error: Option<bool>,
    /// The bulk operation, one of `index`, `create`, `update` or `upsert`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_operation: Option<String>,
    /// Buffer section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<Buffer>,
}
